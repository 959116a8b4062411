use std::{
    io::{self, Write},
    process::ExitCode,
};

use tracing::warn;

use crate::{
    calculator::{evaluate, language::Language, scope::Scope},
    console::Palette,
};

/// Evaluates `expression` in a fresh scope and prints the outcome.
///
/// Success prints `Result: <value>` on stdout; failure prints
/// `Error: <message>` on stderr.
pub fn run(expression: &str, lang: Language, palette: Palette) -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();

    match report(expression, lang, palette, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            warn!("failed to write output: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Writes the quick-mode outcome of `expression` to `out` or `err`.
///
/// # Returns
/// Whether the evaluation succeeded. Blank input counts as a failure.
///
/// # Errors
/// Returns an I/O error if writing fails.
///
/// # Example
/// ```
/// use numtap::{
///     Language,
///     console::{Palette, quick::report},
/// };
///
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let ok = report("x = 5; x + 3", Language::En, Palette::plain(), &mut out, &mut err).unwrap();
/// assert!(ok);
/// assert_eq!(String::from_utf8(out).unwrap(), "Result: 8\n");
/// ```
pub fn report<O, E>(expression: &str,
                    lang: Language,
                    palette: Palette,
                    out: &mut O,
                    err: &mut E)
                    -> io::Result<bool>
    where O: Write,
          E: Write
{
    if expression.trim().is_empty() {
        writeln!(err, "{}", palette.error("Error: Invalid input: expression is empty"))?;
        return Ok(false);
    }

    let mut scope = Scope::new();
    match evaluate(expression, &mut scope, lang) {
        Ok(value) => {
            writeln!(out, "{}", palette.success(&format!("Result: {value}")))?;
            Ok(true)
        },
        Err(error) => {
            writeln!(err, "{}", palette.error(&format!("Error: {error}")))?;
            Ok(false)
        },
    }
}
