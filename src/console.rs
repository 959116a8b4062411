use nu_ansi_term::Color;

/// One-shot evaluation of a command-line expression.
pub mod quick;
/// The interactive read-eval-print loop.
///
/// # Responsibilities
/// - Evaluates each line against one session scope.
/// - Keeps the last result and a timestamped history.
/// - Handles the dot commands (`.help`, `.history`, ...).
pub mod repl;

/// Colors for terminal output, or none when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that leaves text untouched.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    fn paint(self, color: Color, text: &str) -> String {
        if self.enabled {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Results and farewells.
    #[must_use]
    pub fn success(self, text: &str) -> String {
        self.paint(Color::Green, text)
    }

    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.paint(Color::Red, text)
    }

    /// REPL values and the version line.
    #[must_use]
    pub fn info(self, text: &str) -> String {
        self.paint(Color::Blue, text)
    }

    /// Hints and empty-state notes.
    #[must_use]
    pub fn notice(self, text: &str) -> String {
        self.paint(Color::Yellow, text)
    }

    /// The banner and section headings.
    #[must_use]
    pub fn accent(self, text: &str) -> String {
        self.paint(Color::Cyan, text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
