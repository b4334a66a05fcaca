/// One line of user input, classified before it reaches the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// The exit command, in any letter case.
    Exit,
    /// Nothing but whitespace.
    Blank,
    /// Text to classify, trimmed at both ends.
    Utterance(String),
}
