// config.rs
//
// Command-line argument parsing for the IPPcode21 parser.
// The program takes no positional arguments; only `-h`/`--help` is accepted.

use crate::error::ParseError;
use clap::{ArgAction, CommandFactory, Parser};

const ABOUT: &str = "Translates an IPPcode21 program read from standard \
input into its XML representation on standard output.";

const AFTER_HELP: &str = "Exit codes:
    0   success
    10  invalid command-line usage
    11  input could not be read
    12  output could not be written
    21  missing or malformed .IPPcode21 header
    22  unknown or unsupported opcode
    23  lexical or syntax error in an instruction

Set RUST_LOG=debug to trace each accepted instruction on stderr.";

#[derive(Parser, Debug)]
#[command(
    name = "ippcode-parse",
    about = ABOUT,
    after_help = AFTER_HELP,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print this help message and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    help: bool,
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage and exit successfully.
    Help,
    /// Translate stdin to stdout.
    Translate,
}

/// Parse command-line arguments (including the program name) into a `Command`.
pub fn process_cli_args<I, T>(args: I) -> Result<Command, ParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args: Vec<std::ffi::OsString> =
        args.into_iter().map(Into::into).collect();

    let cli = Cli::try_parse_from(&args)
        .map_err(|e| ParseError::Usage(e.to_string().trim_end().to_string()))?;

    if cli.help {
        // --help must stand alone
        if args.len() > 2 {
            return Err(ParseError::Usage(
                "--help cannot be combined with other arguments".to_string(),
            ));
        }
        return Ok(Command::Help);
    }

    // anything else, even a bare `--`, is a usage error
    if args.len() > 1 {
        return Err(ParseError::Usage(
            "no arguments are accepted besides --help".to_string(),
        ));
    }

    Ok(Command::Translate)
}

/// The usage text printed for `--help`.
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}
