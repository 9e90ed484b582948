//! HANS core: pure panel state machine and view-model helpers.
mod control;
mod dependents;
mod effect;
mod msg;
mod reply;
mod state;
mod update;
mod view_model;

pub use control::{Control, ControlKind, PanelLayout};
pub use dependents::{dependent_targets, DRUM_KIT_SELECTORS};
pub use effect::{Effect, Submission};
pub use msg::Msg;
pub use reply::{next_reply, ReplyText};
pub use state::PanelState;
pub use update::update;
pub use view_model::{ControlView, PanelViewModel};
