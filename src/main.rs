use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;
use rustyline::{error::ReadlineError, DefaultEditor};
use sprout_runtime::{word, Immediate, Result, RuntimeError};

/// Decodes and prints the result words of compiled sprout programs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Loads a file of result words to decode, one per line.
    #[arg(short, long)]
    load: Option<String>,

    /// Starts a repl session.
    #[arg(short, long)]
    repl: bool,

    /// Result words to decode, in decimal or 0x/#x hexadecimal.
    words: Vec<String>,
}

fn main() -> miette::Result<()> {
    // Install the panic handler.
    bupropion::install(bupropion::BupropionHandlerOpts::new).into_diagnostic()?;

    // Parse the command line arguments.
    let args = Args::parse();

    if let Some(path) = &args.load {
        let contents = std::fs::read_to_string(path).into_diagnostic()?;

        for line in contents.lines() {
            let line = line.split(';').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            println!("{}", decode(line).into_diagnostic()?);
        }
    }

    for text in &args.words {
        println!("{}", decode(text).into_diagnostic()?);
    }

    if args.repl {
        repl();
    }

    Ok(())
}

/// Reads a word from its textual form and decodes it. A word that matches no
/// immediate tag is an error here, never a silent no-op: a result the
/// compiler cannot have produced means something upstream went wrong.
fn decode(text: &str) -> Result<Immediate> {
    match Immediate::decode(word::parse_word(text)?) {
        Immediate::Unknown(word) => Err(RuntimeError::UnknownTag(word)),
        value => Ok(value),
    }
}

fn get_history_path() -> Option<PathBuf> {
    let home_env = std::env::var("HOME").ok()?;
    let path = format!("{home_env}/.sprout.history");
    Some(PathBuf::from(path))
}

pub fn repl() {
    let mut rl = DefaultEditor::new().expect("cannot create repl");
    let path = get_history_path();

    if let Some(path) = path.clone() {
        if rl.load_history(&path).is_err() {
            println!("No previous history.");
        }
    }

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str()).unwrap();

                if line.trim().is_empty() {
                    continue;
                }

                match decode(&line) {
                    Ok(value) => println!("{value}"),
                    Err(err) => println!("Error: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }

    if let Some(path) = path {
        let _ = rl.append_history(&path);
    }
}
