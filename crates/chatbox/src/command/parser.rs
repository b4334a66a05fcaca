use super::types::Input;

pub const DEFAULT_EXIT_COMMAND: &str = "exit";

/// Parse a raw input line against `exit_command`.
///
/// The comparison with the exit command ignores letter case and surrounding
/// whitespace, including the line terminator. Utterances keep their inner
/// spacing; only the ends are trimmed.
pub fn parse(line: &str, exit_command: &str) -> Input {
    let text = line.trim();

    if text.is_empty() {
        return Input::Blank;
    }
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.to_lowercase() == exit_command.trim().to_lowercase() {
        return Input::Exit;
    }
    Input::Utterance(text.to_string())
}
