use hans_core::{ControlKind, ControlView, PanelViewModel};

pub fn render(view: &PanelViewModel) -> String {
    let mut out = format!("== {} ==\n", view.title);
    if let Some(reply) = &view.reply {
        out.push_str(&format!("reply: {reply}\n"));
    }
    for control in &view.controls {
        out.push_str(&render_control(control));
        out.push('\n');
    }
    out.push_str(&format!("submissions: {}\n", view.submissions));
    out
}

fn render_control(control: &ControlView) -> String {
    let marker = match control.kind {
        ControlKind::Checkbox if control.checked => "[x]",
        ControlKind::Checkbox => "[ ]",
        ControlKind::Button => "(b)",
        ControlKind::Slider => "(~)",
        ControlKind::Text => "(t)",
    };
    let mut line = format!("{marker} {}", control.id);
    if let Some(value) = &control.value {
        line.push_str(&format!(" = {value}"));
    }
    if !control.enabled {
        line.push_str(" (disabled)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use hans_core::{update, Msg, PanelLayout, PanelState};

    #[test]
    fn renders_reply_and_control_states() {
        let (state, _) = update(
            PanelState::from_layout(PanelLayout::drum()),
            Msg::CheckboxToggled {
                id: "es.reverb".to_string(),
                checked: true,
            },
        );
        let text = render(&state.view());

        assert!(text.starts_with("== HANS DRUM ==\n"));
        assert!(text.contains("[x] es.reverb = on\n"));
        assert!(text.contains("(~) ec.reverb-param = 0.5\n"));
        assert!(text.contains("(~) ec.delay-param = 0.5 (disabled)\n"));
        assert!(text.contains("(b) DK11 (disabled)\n"));
        assert!(text.ends_with("submissions: 1\n"));

        let hans = render(&PanelState::from_layout(PanelLayout::hans()).view());
        assert!(hans.contains("reply: Please press the button above!\n"));
    }
}
