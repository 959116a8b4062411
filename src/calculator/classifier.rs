use tracing::trace;

use crate::{
    calculator::{conversion::ConversionError, language::Language},
    error::{CalcError, ErrorKind, InterpreterError, RuntimeError},
};

/// Raw engine messages and the error kind they map to, checked in order.
const PATTERNS: &[(&str, ErrorKind)] = &[("Undefined symbol", ErrorKind::UndefinedSymbol),
                                         ("Unexpected operator", ErrorKind::SyntaxError)];

/// Turns a failure into a localized [`CalcError`].
pub trait Classify {
    fn classify(self, lang: Language) -> CalcError;
}

/// Classifies a raw engine message.
///
/// A leading `Error on line N:` location is ignored. The first pattern the
/// message contains decides the kind; anything unmatched is a syntax error.
/// For undefined symbols the text after the pattern becomes the detail.
///
/// # Example
/// ```
/// use numtap::{ErrorKind, Language, calculator::classifier::classify};
///
/// let error = classify("Error on line 1: Undefined symbol one", Language::En);
/// assert_eq!(error.kind, ErrorKind::UndefinedSymbol);
/// assert_eq!(error.to_string(), "Undefined symbol: one");
///
/// let error = classify("something odd", Language::Fr);
/// assert_eq!(error.kind, ErrorKind::SyntaxError);
/// assert_eq!(error.to_string(), "Erreur de syntaxe");
/// ```
#[must_use]
pub fn classify(raw: &str, lang: Language) -> CalcError {
    let message = strip_location(raw);

    let Some((pattern, kind)) = PATTERNS.iter().find(|(pattern, _)| message.contains(pattern))
    else {
        trace!(raw, "unrecognized engine message");
        return CalcError::new(ErrorKind::SyntaxError, lang);
    };

    let error = CalcError::new(*kind, lang);
    if *kind != ErrorKind::UndefinedSymbol {
        return error;
    }

    match message.split_once(pattern) {
        Some((_, symbol)) if !symbol.trim().is_empty() => error.with_detail(symbol.trim()),
        _ => error,
    }
}

/// Drops the `Error on line N: ` prefix engine errors carry.
fn strip_location(raw: &str) -> &str {
    let raw = raw.trim();
    if raw.starts_with("Error on line ")
       && let Some((_, rest)) = raw.split_once(": ")
    {
        return rest;
    }
    raw
}

impl Classify for &str {
    fn classify(self, lang: Language) -> CalcError {
        classify(self, lang)
    }
}

impl Classify for String {
    fn classify(self, lang: Language) -> CalcError {
        classify(&self, lang)
    }
}

/// Refused non-finite assignments map straight to their kinds; everything
/// else goes through the message patterns.
impl Classify for InterpreterError {
    fn classify(self, lang: Language) -> CalcError {
        match self {
            Self::Runtime(RuntimeError::NotANumber { .. }) => {
                CalcError::new(ErrorKind::InvalidOperation, lang)
            },
            Self::Runtime(RuntimeError::InfiniteValue { .. }) => {
                CalcError::new(ErrorKind::InfiniteResult, lang)
            },
            other => classify(&other.to_string(), lang),
        }
    }
}

impl Classify for ConversionError {
    fn classify(self, lang: Language) -> CalcError {
        trace!(reason = %self, "conversion failed");
        CalcError::new(ErrorKind::ConversionError, lang)
    }
}

/// Already classified errors pass through unchanged.
impl Classify for CalcError {
    fn classify(self, _lang: Language) -> CalcError {
        self
    }
}
