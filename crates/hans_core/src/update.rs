use engine_logging::{engine_debug, engine_warn};

use crate::{dependent_targets, next_reply, ControlKind, Effect, Msg, PanelState, Submission};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::ButtonClicked { id } => {
            if !accepts_input(&state, &id, "Click") {
                return (state, Vec::new());
            }
            let effects = vec![submit(&mut state, Submission::new(id.clone()))];
            if state.is_reply_trigger(&id) {
                let next = next_reply(state.reply().unwrap_or_default());
                state.set_reply(next);
                state.mark_dirty();
            }
            effects
        }
        Msg::CheckboxToggled { id, checked } => {
            if !accepts_input(&state, &id, "Toggle") {
                return (state, Vec::new());
            }
            if let Some(control) = state.control_mut(&id) {
                if control.kind == ControlKind::Checkbox {
                    control.checked = checked;
                    control.value = Some(if checked { "on" } else { "off" }.to_string());
                    set_dependents_enabled(&mut state, &id, checked);
                    state.mark_dirty();
                }
            }
            let value = state.control(&id).and_then(|control| control.value.clone());
            vec![submit(&mut state, Submission { id, value })]
        }
        Msg::ValueChanged { id, value } => {
            if !accepts_input(&state, &id, "Value change") {
                return (state, Vec::new());
            }
            // A checkbox value only ever mirrors its checked flag.
            if let Some(control) = state.control_mut(&id) {
                if control.kind != ControlKind::Checkbox {
                    control.value = Some(value.clone());
                    state.mark_dirty();
                }
            }
            vec![submit(&mut state, Submission::with_value(id, value))]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Unknown and disabled controls never react to input.
fn accepts_input(state: &PanelState, id: &str, action: &str) -> bool {
    match state.control(id) {
        None => {
            engine_warn!("{} on unknown control {:?} ignored", action, id);
            false
        }
        Some(control) if !control.enabled => {
            engine_debug!("{} on disabled control {:?} ignored", action, id);
            false
        }
        Some(_) => true,
    }
}

fn submit(state: &mut PanelState, submission: Submission) -> Effect {
    state.record_submission();
    Effect::Submit(submission)
}

fn set_dependents_enabled(state: &mut PanelState, id: &str, enabled: bool) {
    for target in dependent_targets(id) {
        match state.control_mut(&target) {
            Some(control) => control.enabled = enabled,
            None => engine_debug!("Dependent control {:?} of {:?} not in layout", target, id),
        }
    }
}
