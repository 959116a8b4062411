use std::process::ExitCode;

use clap::{ArgAction, Parser};
use numtap::{
    Language,
    console::{Palette, quick, repl},
};
use tracing_subscriber::{EnvFilter, fmt};

const EXAMPLES: &str = "\
Examples:
  numtap \"5 + 3 * 2\"
  numtap \"sin(45 deg)\"
  numtap \"x = 5; x^2\"
  numtap \"25 degC to degF\"

Run without an expression to start interactive mode.";

/// numtap is a scientific calculator for the command line, with variables and
/// unit conversion.
///
/// Pass an expression to evaluate it once, or run without one to start the
/// interactive mode.
#[derive(Parser, Debug)]
#[command(name = "numtap",
          version,
          about,
          long_about = None,
          disable_version_flag = true,
          after_help = EXAMPLES)]
struct Args {
    /// The expression to evaluate, e.g. "x = 5; x + 3" or "2 km to meter".
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Language of error messages: en, ar, ru, fr, es, de or pt.
    #[arg(short, long, env = "NUMTAP_LANG", default_value = "en")]
    lang: String,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: (),
}

fn main() -> ExitCode {
    // RUST_LOG controls the level, warnings by default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().compact()
         .with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .without_time()
         .init();

    let args = Args::parse();
    let lang = Language::from_code(&args.lang);
    let palette = Palette::new(!args.no_color);

    match args.expression {
        Some(expression) => quick::run(&expression, lang, palette),
        None => repl::run(lang, palette),
    }
}
