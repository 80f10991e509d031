mod error;

use equiv_compute::{
    compare,
    symbolic::{is_simplified, normalize, simplify},
    CompareOptions,
};
use equiv_parser::{ast::Expr, parse, ParseOptions};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}};
use tracing::{debug, debug_span};
use tracing_subscriber::EnvFilter;

/// Parses the given input string into an expression.
fn parse_expr(input: &str) -> Result<Expr, Error> {
    let outcome = parse(input, &ParseOptions::default());
    match outcome.expr {
        Some(expr) => Ok(expr),
        None => Err(outcome.diagnostics.into()),
    }
}

/// Prints every rendering of a single expression.
fn describe(input: &str) -> Result<(), Error> {
    let expr = parse_expr(input)?;
    let json = serde_json::to_string_pretty(&expr)?;

    println!("Provided TeX: {}", input.trim());
    println!("repr:         {}", expr.repr());
    println!("Normalized:   {}", normalize(&expr));
    println!("Simplified?   {}", is_simplified(&expr));
    println!("Simplified:   {}", simplify(&expr));
    println!("JSON:\n{}", json);
    Ok(())
}

/// Compares two expressions, separated by `;` and optionally followed by the `form` and
/// `simplify` flags.
fn run_compare(parts: &[&str]) -> Result<(), Error> {
    let mut options = CompareOptions::default();
    for flag in &parts[2..] {
        match flag.trim() {
            "form" => options.form = true,
            "simplify" => options.simplify = true,
            other => eprintln!("ignoring unknown flag `{}`", other),
        }
    }

    let mut exprs = Vec::with_capacity(2);
    for part in &parts[..2] {
        match parse_expr(part) {
            Ok(expr) => exprs.push(expr),
            Err(err) => {
                err.report_to_stderr(part);
                return Ok(());
            },
        }
    }

    let result = compare(&exprs[0], &exprs[1], &options);
    debug!(?options, equal = result.equal, message = ?result.message, "compared");
    println!("equal:   {}", result.equal);
    match result.message {
        Some(message) => println!("message: {}", message),
        None => println!("message: none"),
    }
    Ok(())
}

/// Processes one line of input, printing the result or reporting the failure.
fn process(input: &str) {
    let _span = debug_span!("line", input = input.trim()).entered();
    let parts = input.split(';').collect::<Vec<_>>();
    let result = if parts.len() >= 2 {
        run_compare(&parts)
    } else {
        describe(input)
    };

    if let Err(err) = result {
        err.report_to_stderr(input);
    }
}

/// Processes every non-empty line of the given text.
fn process_all(text: &str) {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .for_each(process);
}

/// Reads the whole input, from the named file or from stdin.
fn read_input(filename: Option<String>) -> Result<String, Error> {
    match filename {
        Some(filename) => Ok(fs::read_to_string(filename)?),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        },
    }
}

/// Runs the interactive mode until the user exits.
fn repl() -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        process(&input);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();

    let result = match args.next() {
        // run source file
        Some(filename) => read_input(Some(filename)).map(|text| process_all(&text)),

        // read source from stdin
        None if !io::stdin().is_terminal() => read_input(None).map(|text| process_all(&text)),

        // run the repl / interactive mode
        None => repl(),
    };

    if let Err(err) = result {
        err.report_to_stderr("");
        std::process::exit(1);
    }
}
