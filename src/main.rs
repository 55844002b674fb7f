use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

/// MyPL interpreter.
#[derive(Parser, Debug)]
#[command(name = "mypl", about = "MyPL interpreter.")]
struct Cli {
    /// specify execution mode
    #[arg(short, long, value_enum, default_value = "RUN")]
    mode: Mode,

    /// mypl file to execute (standard input when omitted)
    file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
enum Mode {
    Lex,
    Parse,
    Print,
    Check,
    Ir,
    Run,
    Debug,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = match &cli.file {
        Some(file) => fs::read_to_string(file).with_context(|| {
            format!("mypl: error: unable to open file '{}'", file.display())
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("mypl: error: unable to read standard input")?;
            buf
        }
    };

    match cli.mode {
        Mode::Lex => lex_mode(&source),
        Mode::Parse => println!("PARSE mode not yet supported"),
        Mode::Print => println!("PRINT mode not yet supported"),
        Mode::Check => println!("CHECK mode not yet supported"),
        Mode::Ir => println!("IR mode not yet supported"),
        Mode::Run => println!("RUN mode not yet supported"),
        Mode::Debug => println!("DEBUG mode not yet supported"),
    }

    Ok(())
}

/// Prints every token in the program, one per line, up to and including
/// end-of-stream, or the lexical error that cut the scan short.
fn lex_mode(source: &str) {
    for result in myplc_lexer::tokenize(source) {
        match result {
            Ok(token) => println!("{token}"),
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
    }
}
