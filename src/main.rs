use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    rc::Rc,
    time::Instant,
};

use clap::Parser;
use evy::{lexer::lexer::tokenize, parser::parser::parse, render_error};
use tracing::{debug, Level};

/// evy parses and type checks programs of the evy language and prints the
/// resulting syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the tokens instead of the syntax tree.
    #[arg(short, long)]
    lex: bool,

    /// Log more detail to stderr. Repeat for more.
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Source file. Reads standard input when omitted.
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();

    let (file_name, source) = match read_source(args.file.as_ref()) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Failed to read input: {}", error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", render_error(&error, &source));
            process::exit(1);
        }
    };
    debug!(elapsed = ?start.elapsed(), "tokenized");

    if args.lex {
        for token in &tokens {
            println!("{}", token);
        }
        return;
    }

    let parse_start = Instant::now();
    let program = match parse(tokens, Rc::new(file_name)) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", render_error(&error, &source));
            process::exit(1);
        }
    };
    debug!(elapsed = ?parse_start.elapsed(), total = ?start.elapsed(), "parsed");

    println!("{}", program);
}

/// Returns the display name and contents of the input.
fn read_source(file: Option<&PathBuf>) -> io::Result<(String, String)> {
    match file {
        Some(path) => {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            Ok((name, fs::read_to_string(path)?))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((String::from("stdin"), source))
        }
    }
}
