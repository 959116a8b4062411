use std::{
    collections::VecDeque,
    fmt,
    io::{self, Write},
    process::ExitCode,
};

use chrono::{DateTime, Utc};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::{debug, warn};

use crate::{
    calculator::{evaluate, language::Language, scope::Scope},
    console::Palette,
    interpreter::value::core::Value,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BANNER: &str = r"
  ███╗   ██╗██╗   ██╗███╗   ███╗████████╗ █████╗ ██████╗
  ████╗  ██║██║   ██║████╗ ████║╚══██╔══╝██╔══██╗██╔══██╗
  ██╔██╗ ██║██║   ██║██╔████╔██║   ██║   ███████║██████╔╝
  ██║╚██╗██║██║   ██║██║╚██╔╝██║   ██║   ██╔══██║██╔═══╝
  ██║ ╚████║╚██████╔╝██║ ╚═╝ ██║   ██║   ██║  ██║██║
  ╚═╝  ╚═══╝ ╚═════╝ ╚═╝     ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═╝
";

const WELCOME: &str = "Welcome to Numtap! Type \".help\" for commands";

const HELP: &str = "
    Commands:
    .help, .h      - Show this help
    .exit, .q      - Quit
    .version, .v   - Show version
    .last, .l      - Show last result
    .history, .his - Show calculation history
    .clear, .cls   - Clear screen

    Examples:
    x = 5; x + 3   - Assign and calculate (Result: 8)
    sin(45 deg)    - Trigonometric functions (Result: ~0.7071)
    2^3 + sqrt(16) - Exponentiation and roots (Result: 12)
    2 km to meter  - Unit conversion (Result: 2000 meter)
";

/// Entries kept by `.history` and by the line editor. Older ones are dropped.
pub const HISTORY_CAPACITY: usize = 1000;

/// What the loop should do after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    /// Clear the terminal and show the banner again.
    ClearScreen,
    Exit,
}

/// A successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub time:       DateTime<Utc>,
    pub expression: String,
    pub result:     Value,
}

/// `[HH:MM:SS] expression = result`, with the time in UTC.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use numtap::{Value, console::repl::Entry};
///
/// let entry = Entry { time:       Utc.with_ymd_and_hms(2024, 3, 1, 13, 5, 9).unwrap(),
///                     expression: "6 * 7".to_string(),
///                     result:     Value::Number(42.0), };
/// assert_eq!(entry.to_string(), "[13:05:09] 6 * 7 = 42");
/// ```
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "[{}] {} = {}",
               self.time.format("%H:%M:%S"),
               self.expression,
               self.result)
    }
}

/// State of one interactive session.
///
/// All lines share the same scope, so variables assigned on one line are
/// visible on the next. Only the latest [`HISTORY_CAPACITY`] calculations
/// are kept; `calculations` counts all of them.
#[derive(Debug)]
pub struct Session {
    scope:        Scope,
    lang:         Language,
    palette:      Palette,
    history:      VecDeque<Entry>,
    calculations: usize,
}

impl Session {
    #[must_use]
    pub fn new(lang: Language, palette: Palette) -> Self {
        Self { scope: Scope::new(),
               lang,
               palette,
               history: VecDeque::new(),
               calculations: 0 }
    }

    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub const fn history(&self) -> &VecDeque<Entry> {
        &self.history
    }

    /// Successful calculations this session, including those no longer in
    /// the history.
    #[must_use]
    pub const fn calculations(&self) -> usize {
        self.calculations
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&Value> {
        self.history.back().map(|entry| &entry.result)
    }

    /// Handles one line of input.
    ///
    /// Lines starting with `.` are commands; blank lines are ignored; anything
    /// else is evaluated. Values go to `out` as `= <value>`, evaluation
    /// errors to `err` as `! <message>`.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    ///
    /// # Example
    /// ```
    /// use numtap::{
    ///     Language,
    ///     console::{
    ///         Palette,
    ///         repl::{Action, Session},
    ///     },
    /// };
    ///
    /// let mut session = Session::new(Language::En, Palette::plain());
    /// let (mut out, mut err) = (Vec::new(), Vec::new());
    ///
    /// session.handle_line("x = 5", &mut out, &mut err).unwrap();
    /// session.handle_line("x * 2", &mut out, &mut err).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "= 5\n= 10\n");
    ///
    /// let mut out = Vec::new();
    /// let action = session.handle_line(".q", &mut out, &mut err).unwrap();
    /// assert_eq!(action, Action::Exit);
    /// ```
    pub fn handle_line<O, E>(&mut self, line: &str, out: &mut O, err: &mut E) -> io::Result<Action>
        where O: Write,
              E: Write
    {
        let line = line.trim();
        if line.starts_with('.') {
            return self.run_command(line, out);
        }
        if !line.is_empty() {
            self.calculate(line, out, err)?;
        }
        Ok(Action::Continue)
    }

    fn calculate<O, E>(&mut self, line: &str, out: &mut O, err: &mut E) -> io::Result<()>
        where O: Write,
              E: Write
    {
        match evaluate(line, &mut self.scope, self.lang) {
            Ok(value) => {
                writeln!(out, "{}", self.palette.info(&format!("= {value}")))?;
                if self.history.len() == HISTORY_CAPACITY {
                    self.history.pop_front();
                }
                self.history.push_back(Entry { time:       Utc::now(),
                                               expression: line.to_string(),
                                               result:     value, });
                self.calculations += 1;
            },
            Err(error) => {
                debug!(kind = %error.kind, "calculation failed");
                writeln!(err, "{}", self.palette.error(&format!("! {error}")))?;
            },
        }
        Ok(())
    }

    fn run_command<W: Write>(&self, line: &str, out: &mut W) -> io::Result<Action> {
        let command = line.split_whitespace().next().unwrap_or_default().to_lowercase();

        match command.as_str() {
            ".exit" | ".q" => {
                self.goodbye(out)?;
                return Ok(Action::Exit);
            },
            ".help" | ".h" => writeln!(out, "{}", self.palette.notice(HELP))?,
            ".version" | ".v" => writeln!(out, "{}", self.palette.info(&format!("Numtap v{VERSION}")))?,
            ".last" | ".l" => match self.last_result() {
                Some(value) => writeln!(out, "{}", self.palette.info(&format!("Last result: {value}")))?,
                None => writeln!(out, "{}", self.palette.notice("No results yet."))?,
            },
            ".history" | ".his" => self.write_history(out)?,
            ".clear" | ".cls" => return Ok(Action::ClearScreen),
            _ => writeln!(out, "{}", self.palette.error(&format!("Unknown command: {line}")))?,
        }
        Ok(Action::Continue)
    }

    fn write_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.history.is_empty() {
            return writeln!(out, "{}", self.palette.notice("History is empty."));
        }

        writeln!(out, "{}", self.palette.accent("Calculation History:"))?;
        let first = self.calculations - self.history.len() + 1;
        for (number, entry) in (first..).zip(&self.history) {
            writeln!(out, "{number}. {entry}")?;
        }
        Ok(())
    }

    /// Prints the farewell with the number of successful calculations.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn goodbye<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let farewell = format!("\nGoodbye! Total calculations: {}", self.calculations);
        writeln!(out, "{}", self.palette.success(&farewell))
    }

    /// Writes the banner and the welcome line.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn welcome<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.palette.accent(BANNER))?;
        writeln!(out, "{}\n", self.palette.notice(WELCOME))
    }
}

/// Runs the interactive loop until `.exit`, Ctrl-D or a terminal error.
pub fn run(lang: Language, palette: Palette) -> ExitCode {
    match run_loop(lang, palette) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!("terminal error: {e}");
            eprintln!("{}", palette.error(&format!("Terminal error: {e}")));
            ExitCode::FAILURE
        },
    }
}

/// A line editor with in-memory history capped at [`HISTORY_CAPACITY`].
fn line_editor() -> Reedline {
    match FileBackedHistory::new(HISTORY_CAPACITY) {
        Ok(history) => Reedline::create().with_history(Box::new(history)),
        Err(e) => {
            warn!("line history unavailable: {e}");
            Reedline::create()
        },
    }
}

fn run_loop(lang: Language, palette: Palette) -> io::Result<()> {
    let mut line_editor = line_editor();
    let prompt = DefaultPrompt::new(DefaultPromptSegment::Basic("➤".into()), DefaultPromptSegment::Empty);

    let mut session = Session::new(lang, palette);
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    session.welcome(&mut stdout)?;

    loop {
        match line_editor.read_line(&prompt)? {
            Signal::Success(line) => match session.handle_line(&line, &mut stdout, &mut stderr)? {
                Action::Continue => {},
                Action::ClearScreen => {
                    line_editor.clear_screen()?;
                    session.welcome(&mut stdout)?;
                },
                Action::Exit => return Ok(()),
            },
            Signal::CtrlD => return session.goodbye(&mut stdout),
            Signal::CtrlC => {},
        }
    }
}
