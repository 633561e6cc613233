/// A classified inbound command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    /// `/tag` with an optional explicit target name (the verbatim remainder
    /// of the message after the command token).
    Tag(Option<String>),
    Status,
    Help,
    Unrecognized,
}

/// Classify raw message text into a command.
///
/// Matching is exact on the first whitespace-delimited token and
/// case-sensitive. Anything else is `Unrecognized` and gets no reply.
pub fn classify(text: &str) -> Command {
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let token = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match token {
        "/start" => Command::Start,
        "/stop" => Command::Stop,
        "/tag" => {
            if rest.is_empty() {
                Command::Tag(None)
            } else {
                // Collapse runs of whitespace so `/tag  Ravi   Kumar` and
                // `/tag Ravi Kumar` resolve to the same target.
                Command::Tag(Some(rest.split_whitespace().collect::<Vec<_>>().join(" ")))
            }
        }
        "/status" => Command::Status,
        "/help" => Command::Help,
        _ => Command::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_bare_commands() {
        assert_eq!(classify("/start"), Command::Start);
        assert_eq!(classify("/stop"), Command::Stop);
        assert_eq!(classify("/status"), Command::Status);
        assert_eq!(classify("/help"), Command::Help);
        assert_eq!(classify("/tag"), Command::Tag(None));
    }

    #[test]
    fn tag_argument_is_verbatim_joined_text() {
        assert_eq!(
            classify("/tag Ravi Kumar"),
            Command::Tag(Some("Ravi Kumar".to_string()))
        );
        assert_eq!(
            classify("/tag   Ravi   Kumar "),
            Command::Tag(Some("Ravi Kumar".to_string()))
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify("/START"), Command::Unrecognized);
        assert_eq!(classify("/Tag someone"), Command::Unrecognized);
    }

    #[test]
    fn unknown_text_is_unrecognized() {
        assert_eq!(classify(""), Command::Unrecognized);
        assert_eq!(classify("hello there"), Command::Unrecognized);
        assert_eq!(classify("/starting"), Command::Unrecognized);
        assert_eq!(classify("/unknown"), Command::Unrecognized);
    }
}
