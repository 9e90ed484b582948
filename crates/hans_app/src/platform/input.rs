use hans_core::Msg;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Msg(Msg),
    Show,
    Quit,
}

pub const HELP: &str =
    "commands: click <id> | check <id> on|off | set <id> <value> | show | quit";

/// Parses `click <id>`, `check <id> on|off`, `set <id> <value>`, `show`, `quit`.
///
/// Blank lines and `#` comments yield `Ok(None)`. A `set` value is the rest of
/// the line, so it may contain spaces.
pub fn parse_input(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let input = match verb {
        "click" => Input::Msg(Msg::ButtonClicked {
            id: single_id(verb, rest)?,
        }),
        "check" => {
            let (id, state) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| format!("usage: check <id> on|off, got {line:?}"))?;
            let checked = match state.trim() {
                "on" | "true" | "1" => true,
                "off" | "false" | "0" => false,
                other => return Err(format!("check expects on|off, got {other:?}")),
            };
            Input::Msg(Msg::CheckboxToggled {
                id: id.to_string(),
                checked,
            })
        }
        "set" => {
            let (id, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| format!("usage: set <id> <value>, got {line:?}"))?;
            Input::Msg(Msg::ValueChanged {
                id: id.to_string(),
                value: value.trim().to_string(),
            })
        }
        "show" => Input::Show,
        "quit" | "exit" => Input::Quit,
        other => return Err(format!("unknown command {other:?}; {HELP}")),
    };
    Ok(Some(input))
}

fn single_id(verb: &str, rest: &str) -> Result<String, String> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(format!("usage: {verb} <id>"));
    }
    Ok(rest.to_string())
}
