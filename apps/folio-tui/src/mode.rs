//! TUI interaction modes

/// The current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Grid navigation (default)
    #[default]
    Browse,
    /// Editing the search term (activated with /)
    Search,
    /// The create/edit dialog is open
    Form,
    /// A delete is awaiting confirmation
    ConfirmDelete,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Browse => write!(f, "BROWSE"),
            Mode::Search => write!(f, "SEARCH"),
            Mode::Form => write!(f, "FORM"),
            Mode::ConfirmDelete => write!(f, "CONFIRM"),
        }
    }
}

impl Mode {
    /// Returns a short code for compact display.
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Browse => "BRW",
            Mode::Search => "SRC",
            Mode::Form => "FRM",
            Mode::ConfirmDelete => "DEL",
        }
    }
}
