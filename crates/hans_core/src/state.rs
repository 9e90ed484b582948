use std::collections::BTreeMap;

use crate::view_model::{ControlView, PanelViewModel};
use crate::{Control, PanelLayout};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    title: String,
    /// Layout order, used for rendering.
    order: Vec<String>,
    controls: BTreeMap<String, Control>,
    reply_trigger: Option<String>,
    reply: Option<String>,
    submissions: u64,
    dirty: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later controls with a duplicate id replace earlier ones.
    pub fn from_layout(layout: PanelLayout) -> Self {
        let mut order = Vec::with_capacity(layout.controls.len());
        let mut controls = BTreeMap::new();
        for control in layout.controls {
            if !controls.contains_key(&control.id) {
                order.push(control.id.clone());
            }
            controls.insert(control.id.clone(), control);
        }
        Self {
            title: layout.title,
            order,
            controls,
            reply_trigger: layout.reply_trigger,
            reply: layout.initial_reply,
            submissions: 0,
            dirty: true,
        }
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            title: self.title.clone(),
            reply: self.reply.clone(),
            controls: self
                .order
                .iter()
                .filter_map(|id| self.controls.get(id))
                .map(|control| ControlView {
                    id: control.id.clone(),
                    kind: control.kind,
                    value: control.value.clone(),
                    checked: control.checked,
                    enabled: control.enabled,
                })
                .collect(),
            submissions: self.submissions,
            dirty: self.dirty,
        }
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.get(id)
    }

    pub fn reply(&self) -> Option<&str> {
        self.reply.as_deref()
    }

    /// Number of submissions emitted since the panel was created.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn control_mut(&mut self, id: &str) -> Option<&mut Control> {
        self.controls.get_mut(id)
    }

    pub(crate) fn is_reply_trigger(&self, id: &str) -> bool {
        self.reply_trigger.as_deref() == Some(id)
    }

    pub(crate) fn set_reply(&mut self, text: &str) {
        self.reply = Some(text.to_string());
    }

    pub(crate) fn record_submission(&mut self) {
        self.submissions += 1;
        self.dirty = true;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
