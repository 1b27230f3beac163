use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use ippcode_parse::config::{self, Command};
use ippcode_parse::error::{ParseError, exit_code};
use ippcode_parse::parser;
use std::env;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .init();
}

fn report(e: &ParseError) {
    let prefix = if io::stderr().is_tty() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };
    eprintln!("{} {}", prefix, e);
}

fn main() {
    init_logging();

    let code = match run() {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            debug!(code = e.exit_code(), location = ?e.location(), "run failed");
            report(&e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

// The document is rendered into a buffer and only written once the whole
// input has been accepted, so a failed run leaves stdout empty.
fn run() -> Result<(), ParseError> {
    match config::process_cli_args(env::args_os())? {
        Command::Help => {
            let mut stdout = io::stdout().lock();
            return write!(stdout, "{}", config::help_text())
                .and_then(|_| stdout.flush())
                .map_err(|e| ParseError::Output(e.to_string()));
        }
        Command::Translate => {}
    }

    let stdin = io::stdin().lock();
    let mut document = Vec::new();
    let count = parser::translate(stdin, &mut document)?;
    info!(instructions = count, "translation finished");

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&document)
        .and_then(|_| stdout.flush())
        .map_err(|e| ParseError::Output(e.to_string()))
}
