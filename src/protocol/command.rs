//! Command-line tokenizing for the text protocol.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    IsReady,
    NewGame,
    Position(Vec<String>),
    Legal(Option<String>),
    Play(Option<String>),
    Go(Option<u32>),
    Eval,
    SetOption(Vec<String>),
    Display,
    Quit,
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let owned_parts = || parts[1..].iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match parts[0] {
        "isready" => Command::IsReady,
        "newgame" => Command::NewGame,
        "position" => Command::Position(owned_parts()),
        "legal" => Command::Legal(parts.get(1).map(|v| (*v).to_string())),
        "play" => Command::Play(parts.get(1).map(|v| (*v).to_string())),
        "go" => {
            let depth = match parts.get(1) {
                Some(&"depth") => parts.get(2).and_then(|v| v.parse::<u32>().ok()),
                _ => None,
            };
            Command::Go(depth)
        }
        "eval" => Command::Eval,
        "setoption" => Command::SetOption(owned_parts()),
        "d" => Command::Display,
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn go_reads_an_optional_depth() {
        assert_eq!(parse_command("go"), Some(Command::Go(None)));
        assert_eq!(parse_command("go depth 4"), Some(Command::Go(Some(4))));
        assert_eq!(parse_command("go depth x"), Some(Command::Go(None)));
    }

    #[test]
    fn arguments_are_kept_in_order() {
        assert_eq!(
            parse_command("position e1 e8 d7 turn b"),
            Some(Command::Position(
                ["e1", "e8", "d7", "turn", "b"].map(String::from).to_vec()
            ))
        );
        assert_eq!(
            parse_command("play e2"),
            Some(Command::Play(Some("e2".to_string())))
        );
        assert_eq!(
            parse_command("  fly away "),
            Some(Command::Unknown("fly away".to_string()))
        );
    }
}
