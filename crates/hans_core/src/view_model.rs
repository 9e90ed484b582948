use crate::ControlKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub title: String,
    pub reply: Option<String>,
    pub controls: Vec<ControlView>,
    pub submissions: u64,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub id: String,
    pub kind: ControlKind,
    pub value: Option<String>,
    pub checked: bool,
    pub enabled: bool,
}
