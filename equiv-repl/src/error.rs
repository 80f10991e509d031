use ariadne::Source;
use equiv_error::Error as ParseError;
use rustyline::error::ReadlineError;
use std::io;

/// Utility enum to package errors that can occur while running the REPL.
#[derive(Debug)]
pub enum Error {
    /// The input file could not be read.
    Io(io::Error),

    /// The line editor failed.
    Readline(ReadlineError),

    /// Errors that occurred while parsing a line of input.
    Parse(Vec<ParseError>),

    /// The result could not be serialized.
    Json(serde_json::Error),
}

impl Error {
    /// Report the errors in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: ariadne::Report
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Io(err) => eprintln!("error: {}", err),
            Self::Readline(err) => eprintln!("error: {}", err),
            Self::Parse(errs) => errs.iter().for_each(|err| {
                let report = err.build_report("input");
                if let Err(err) = report.eprint(("input", Source::from(input))) {
                    eprintln!("error: {}", err);
                }
            }),
            Self::Json(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}

impl From<Vec<ParseError>> for Error {
    fn from(errs: Vec<ParseError>) -> Self {
        Self::Parse(errs)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
