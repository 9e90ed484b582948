use crate::reply::ReplyText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlKind {
    #[default]
    Button,
    Checkbox,
    Slider,
    Text,
}

/// A single interactive element of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    pub kind: ControlKind,
    pub value: Option<String>,
    pub checked: bool,
    pub enabled: bool,
}

impl Control {
    pub fn button(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ControlKind::Button,
            value: None,
            checked: false,
            enabled: true,
        }
    }

    /// Checkboxes start unchecked with value `off`.
    pub fn checkbox(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ControlKind::Checkbox,
            value: Some("off".to_string()),
            checked: false,
            enabled: true,
        }
    }

    pub fn slider(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ControlKind::Slider,
            value: Some(value.into()),
            checked: false,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Static description of a panel: its controls and the reply label wiring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelLayout {
    pub title: String,
    pub controls: Vec<Control>,
    pub reply_trigger: Option<String>,
    pub initial_reply: Option<String>,
}

impl PanelLayout {
    /// The HANS main page: one big button that also drives the reply label.
    pub fn hans() -> Self {
        Self {
            title: "HANS".to_string(),
            controls: vec![
                Control::button("hanssolo"),
                Control::slider("amp", "80"),
                Control::slider("rms", "70"),
                Control::slider("cen", "6000"),
                Control::slider("yin", "400"),
            ],
            reply_trigger: Some("hanssolo".to_string()),
            initial_reply: Some(ReplyText::Prompt.as_str().to_string()),
        }
    }

    /// The drum brain page: service buttons, effect switches with their
    /// parameter sliders, and the input selector with the drum kit buttons.
    pub fn drum() -> Self {
        let mut controls = vec![
            Control::button("StartServer"),
            Control::button("KillServer"),
            Control::button("StartJacktrip"),
            Control::button("ConnectJacktrip"),
            Control::button("test"),
            Control::button("reboot"),
            Control::button("poweroff"),
        ];
        for effect in ["reverb", "delay", "distortion", "chorus"] {
            controls.push(Control::checkbox(format!("es.{effect}")));
            controls.push(Control::slider(format!("ec.{effect}-param"), "0.5").disabled());
        }
        controls.push(Control::checkbox("ds"));
        for kit in crate::DRUM_KIT_SELECTORS {
            controls.push(Control::button(kit).disabled());
        }
        Self {
            title: "HANS DRUM".to_string(),
            controls,
            reply_trigger: None,
            initial_reply: None,
        }
    }
}
