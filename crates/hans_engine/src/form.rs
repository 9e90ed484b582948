use hans_core::Submission;
use url::form_urlencoded;

use crate::DecodeError;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Browsers stringify a missing JS argument; treat it as no value.
const UNDEFINED_VALUE: &str = "undefined";

/// Form-encode a submission: `id` always, `value` only when present.
pub fn encode_submission(submission: &Submission) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(submission.form_fields())
        .finish()
}

/// Parse a form body back into a submission.
///
/// The first `id` and `value` fields win; unknown fields are ignored.
pub fn decode_submission(body: &[u8]) -> Result<Submission, DecodeError> {
    let mut id = None;
    let mut value = None;
    for (key, field) in form_urlencoded::parse(body) {
        match key.as_ref() {
            "id" if id.is_none() => id = Some(field.into_owned()),
            "value" if value.is_none() => value = Some(field.into_owned()),
            _ => {}
        }
    }
    let id = id.filter(|id| !id.is_empty()).ok_or(DecodeError::MissingId)?;
    let value = value.filter(|value| value != UNDEFINED_VALUE);
    Ok(Submission { id, value })
}
