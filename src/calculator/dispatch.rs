use tracing::debug;

use crate::{
    calculator::{
        classifier::Classify,
        conversion::{convert, is_conversion},
        language::Language,
        scope::Scope,
    },
    error::{CalcError, ErrorKind},
    interpreter::{evaluator::utils::is_reserved_identifier, execute, value::core::Value},
};

/// A segment of the input, sorted by what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// `name = value`, split at the top-level `=`.
    Assignment { name: &'a str, value: &'a str, source: &'a str },
    Computation(&'a str),
}

/// Evaluates one line of input against `scope`.
///
/// The input is split on `;` into segments. Assignments run first, in
/// order, then the remaining computations; the value of the last computation
/// is returned, or of the last assignment if there are no computations.
/// Segments containing `" to "` are unit conversions, wherever the `=` sits.
/// NaN and infinite values are rejected, and an assignment that would store
/// one leaves the variable untouched.
///
/// Evaluation stops at the first failing segment. Assignments that already
/// ran stay in `scope`.
///
/// # Errors
/// Returns a `CalcError` classified into one of the [`ErrorKind`]s, with the
/// message in `lang`.
///
/// # Example
/// ```
/// use numtap::{ErrorKind, Language, Scope, Value, evaluate};
///
/// let mut scope = Scope::new();
/// assert_eq!(evaluate("5 + 3", &mut scope, Language::En).unwrap(), Value::Number(8.0));
///
/// // assignments run before computations
/// let value = evaluate("r * 2; r = 4", &mut scope, Language::En).unwrap();
/// assert_eq!(value, Value::Number(8.0));
///
/// let error = evaluate("5 / 0", &mut scope, Language::En).unwrap_err();
/// assert_eq!(error.kind, ErrorKind::InfiniteResult);
/// ```
pub fn evaluate(input: &str, scope: &mut Scope, lang: Language) -> Result<Value, CalcError> {
    let (assignments, computations): (Vec<_>, Vec<_>) =
        split_segments(input).map(classify_segment)
                             .partition(|segment| matches!(segment, Segment::Assignment { .. }));

    debug!(input,
           assignments = assignments.len(),
           computations = computations.len(),
           "evaluating");

    let mut result = None;
    for segment in assignments.iter().chain(&computations) {
        result = Some(run_segment(*segment, scope, lang)?);
    }

    result.ok_or_else(|| CalcError::new(ErrorKind::SyntaxError, lang))
}

/// Splits on `;`, dropping blank segments.
fn split_segments(input: &str) -> impl Iterator<Item = &str> {
    input.split(';').map(str::trim).filter(|segment| !segment.is_empty())
}

fn classify_segment(source: &str) -> Segment<'_> {
    match assignment_index(source) {
        Some(index) => Segment::Assignment { name: source[..index].trim(),
                                             value: source[index + 1..].trim(),
                                             source },
        None => Segment::Computation(source),
    }
}

/// Byte index of the top-level `=` of an assignment.
///
/// `=` characters that belong to `==`, `!=`, `<=` or `>=`, or that sit
/// inside parentheses, do not count.
fn assignment_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    let mut depth = 0usize;

    for (index, &byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b'=' if depth == 0 => {
                let previous = index.checked_sub(1).map(|i| bytes[i]);
                let next = bytes.get(index + 1).copied();
                let part_of_operator = matches!(previous, Some(b'=' | b'!' | b'<' | b'>'))
                                       || next == Some(b'=');
                if !part_of_operator {
                    return Some(index);
                }
            },
            _ => {},
        }
    }
    None
}

fn run_segment(segment: Segment<'_>, scope: &mut Scope, lang: Language) -> Result<Value, CalcError> {
    match segment {
        Segment::Assignment { name, value, .. } if is_conversion(value) => {
            if !is_identifier(name) || is_reserved_identifier(name) {
                return Err(CalcError::new(ErrorKind::SyntaxError, lang));
            }
            let quantity = convert(value).map_err(|e| e.classify(lang))?;
            let value = Value::Quantity(quantity);
            scope.set(name, value.clone());
            debug!(name, %value, "stored conversion");
            Ok(value)
        },
        Segment::Assignment { source, .. } | Segment::Computation(source) if is_conversion(source) => {
            convert(source).map(Value::Quantity)
                           .map_err(|e| e.classify(lang))
        },
        Segment::Assignment { source, .. } => execute(source, scope).map_err(|e| e.classify(lang)),
        Segment::Computation(source) => {
            let value = execute(source, scope).map_err(|e| e.classify(lang))?;
            check_finite(value, lang)
        },
    }
}

/// Rejects NaN and infinite magnitudes.
fn check_finite(value: Value, lang: Language) -> Result<Value, CalcError> {
    match value.magnitude() {
        Some(magnitude) if magnitude.is_nan() => Err(CalcError::new(ErrorKind::InvalidOperation, lang)),
        Some(magnitude) if magnitude.is_infinite() => Err(CalcError::new(ErrorKind::InfiniteResult, lang)),
        _ => Ok(value),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
