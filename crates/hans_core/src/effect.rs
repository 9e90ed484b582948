#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire-and-forget POST of one id/value pair.
    Submit(Submission),
}

/// One outbound id/value pair, sent exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: String,
    pub value: Option<String>,
}

impl Submission {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: None,
        }
    }

    pub fn with_value(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: Some(value.into()),
        }
    }

    /// Form fields in wire order. `value` is only present when supplied.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("id", self.id.as_str())];
        if let Some(value) = self.value.as_deref() {
            fields.push(("value", value));
        }
        fields
    }
}
