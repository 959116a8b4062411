use crate::calculator::language::Language;

/// The closed set of failures a calculation can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A name is neither a variable, a constant nor a unit.
    UndefinedSymbol,
    /// The input could not be parsed, or failed for any other engine reason.
    SyntaxError,
    /// The result is NaN.
    InvalidOperation,
    /// The result is positive or negative infinity.
    InfiniteResult,
    /// A `to` conversion was malformed or between incompatible units.
    ConversionError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UndefinedSymbol => "undefined-symbol",
            Self::SyntaxError => "syntax-error",
            Self::InvalidOperation => "invalid-operation",
            Self::InfiniteResult => "infinite-result",
            Self::ConversionError => "conversion-error",
        };
        write!(f, "{name}")
    }
}

/// A classified, localized calculation failure.
///
/// `message` is the text for `kind` in the language the error was built
/// for. `detail` carries the offending symbol for
/// [`ErrorKind::UndefinedSymbol`] and is `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}{}", detail_suffix(.detail))]
pub struct CalcError {
    /// What went wrong.
    pub kind:    ErrorKind,
    /// Localized description of `kind`.
    pub message: String,
    /// The undefined symbol's name, when known.
    pub detail:  Option<String>,
}

impl CalcError {
    /// Builds an error of `kind` with the message of `lang`.
    ///
    /// # Example
    /// ```
    /// use numtap::{CalcError, ErrorKind, Language};
    ///
    /// let error = CalcError::new(ErrorKind::InfiniteResult, Language::En);
    /// assert_eq!(error.to_string(), "Result is infinite");
    ///
    /// let error = CalcError::new(ErrorKind::InfiniteResult, Language::De);
    /// assert_eq!(error.to_string(), "Ergebnis ist unendlich");
    /// ```
    #[must_use]
    pub fn new(kind: ErrorKind, lang: Language) -> Self {
        Self { kind,
               message: lang.message(kind).to_string(),
               detail: None }
    }

    /// Attaches a detail, shown after the message.
    ///
    /// # Example
    /// ```
    /// use numtap::{CalcError, ErrorKind, Language};
    ///
    /// let error = CalcError::new(ErrorKind::UndefinedSymbol, Language::En).with_detail("one");
    /// assert_eq!(error.to_string(), "Undefined symbol: one");
    /// ```
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|detail| format!(": {detail}")).unwrap_or_default()
}
