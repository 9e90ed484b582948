//! HANS engine: IO side of the panel (form codec, HTTP submission, UDP relay).
mod engine;
mod form;
mod relay;
mod submit;
mod types;

pub use engine::EngineHandle;
pub use form::{decode_submission, encode_submission, FORM_CONTENT_TYPE};
pub use relay::{
    relay_message, ClickCounter, Relay, RelayCommand, RelayOutcome, RelaySettings, SOLO_MESSAGE,
};
pub use submit::{ReqwestSubmitter, SubmitSettings, Submitter};
pub use types::{DecodeError, RelayError, SubmitError};
