#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked a button control.
    ButtonClicked { id: String },
    /// User toggled a checkbox; `checked` is the state after the toggle.
    CheckboxToggled { id: String, checked: bool },
    /// User moved a slider or edited a value control.
    ValueChanged { id: String, value: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
