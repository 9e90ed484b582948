/// Known texts of the reply label, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyText {
    Prompt,
    WaitForMagic,
    BePatient,
    DontForce,
    VeryHardcore,
}

impl ReplyText {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyText::Prompt => "Please press the button above!",
            ReplyText::WaitForMagic => "Wait for the MAGIC!",
            ReplyText::BePatient => "Be patient, please.",
            ReplyText::DontForce => "Don't force me to go HARDCORE!",
            ReplyText::VeryHardcore => "WOW! VERYHARDCORE! MUCH HANS!",
        }
    }

    /// Exact match only; label text is compared verbatim.
    pub fn from_text(text: &str) -> Option<Self> {
        [
            ReplyText::Prompt,
            ReplyText::WaitForMagic,
            ReplyText::BePatient,
            ReplyText::DontForce,
            ReplyText::VeryHardcore,
        ]
        .into_iter()
        .find(|reply| reply.as_str() == text)
    }

    /// `VeryHardcore` has no successor of its own and falls back like unknown text.
    pub fn next(self) -> Self {
        match self {
            ReplyText::Prompt => ReplyText::WaitForMagic,
            ReplyText::WaitForMagic => ReplyText::BePatient,
            ReplyText::BePatient => ReplyText::DontForce,
            ReplyText::DontForce => ReplyText::VeryHardcore,
            ReplyText::VeryHardcore => ReplyText::WaitForMagic,
        }
    }
}

/// Text shown after one more click, given what is shown now.
pub fn next_reply(current: &str) -> &'static str {
    ReplyText::from_text(current)
        .map(ReplyText::next)
        .unwrap_or(ReplyText::WaitForMagic)
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_texts_round_trip_through_from_text() {
        for reply in [ReplyText::Prompt, ReplyText::BePatient, ReplyText::VeryHardcore] {
            assert_eq!(ReplyText::from_text(reply.as_str()), Some(reply));
        }
        assert_eq!(ReplyText::from_text("wait for the magic!"), None);
    }
}
