use std::fs;
use std::path::Path;

use anyhow::Context;
use engine_logging::engine_info;
use hans_core::{Control, ControlKind, PanelLayout};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum LayoutControlKind {
    Button,
    Checkbox,
    Slider,
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutControl {
    id: String,
    kind: LayoutControlKind,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    checked: bool,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutFile {
    title: String,
    controls: Vec<LayoutControl>,
    #[serde(default)]
    reply_trigger: Option<String>,
    #[serde(default)]
    initial_reply: Option<String>,
}

fn enabled_by_default() -> bool {
    true
}

/// `hans` and `drum` name the built-in layouts; anything else is a RON file path.
pub(crate) fn resolve_layout(arg: &str) -> anyhow::Result<PanelLayout> {
    match arg {
        "hans" => Ok(PanelLayout::hans()),
        "drum" => Ok(PanelLayout::drum()),
        path => load_layout(Path::new(path)),
    }
}

pub(crate) fn load_layout(path: &Path) -> anyhow::Result<PanelLayout> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read layout {}", path.display()))?;
    let file: LayoutFile =
        ron::from_str(&content).with_context(|| format!("parse layout {}", path.display()))?;
    engine_info!(
        "Loaded layout {:?} with {} controls from {:?}",
        file.title,
        file.controls.len(),
        path
    );
    Ok(into_layout(file))
}

fn into_layout(file: LayoutFile) -> PanelLayout {
    let controls = file
        .controls
        .into_iter()
        .map(|control| {
            let kind = match control.kind {
                LayoutControlKind::Button => ControlKind::Button,
                LayoutControlKind::Checkbox => ControlKind::Checkbox,
                LayoutControlKind::Slider => ControlKind::Slider,
                LayoutControlKind::Text => ControlKind::Text,
            };
            // A checkbox value always mirrors its checked flag.
            let value = if kind == ControlKind::Checkbox {
                Some(if control.checked { "on" } else { "off" }.to_string())
            } else {
                control.value
            };
            Control {
                id: control.id,
                kind,
                value,
                checked: control.checked,
                enabled: control.enabled,
            }
        })
        .collect();

    PanelLayout {
        title: file.title,
        controls,
        reply_trigger: file.reply_trigger,
        initial_reply: file.initial_reply,
    }
}
