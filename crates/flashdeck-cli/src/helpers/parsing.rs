//! Parsing helpers for session actions and question counts.

/// Actions accepted at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
    List,
}

impl Action {
    /// Parse an action name. Surrounding whitespace is ignored; case is not.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "import" => Some(Self::Import),
            "export" => Some(Self::Export),
            "ask" => Some(Self::Ask),
            "exit" => Some(Self::Exit),
            "log" => Some(Self::Log),
            "hardest card" => Some(Self::HardestCard),
            "reset stats" => Some(Self::ResetStats),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// Parse the answer to "How many to ask?".
pub fn parse_question_count(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}
