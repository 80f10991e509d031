//! User-facing errors for math input.
//!
//! Every error is an [`Error`]: a list of source spans paired with a boxed [`ErrorKind`] that
//! knows how to describe the problem. Kinds are usually declared with the `ErrorKind` derive from
//! `equiv-attrs`, which forwards the declared message, labels and help text to
//! [`assemble_report`].

// lets the `ErrorKind` derive refer to `equiv_error` from inside this crate's tests
extern crate self as equiv_error;

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A specific problem found in a piece of math input.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as [`Any`], so that callers can inspect the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// Builds an error report highlighting `spans`.
///
/// The `labels` are paired with the spans in order; surplus labels or spans are dropped. An empty
/// label highlights its span without any text.
pub fn assemble_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: Option<String>,
    labels: Vec<String>,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, offset);

    if let Some(message) = message {
        builder.set_message(message);
    }

    for (text, span) in labels.into_iter().zip(spans) {
        let label = Label::new((src_id, span.clone())).with_color(EXPR);
        if text.is_empty() {
            builder.add_label(label);
        } else {
            builder.add_label(label.with_message(text));
        }
    }

    if let Some(help) = help {
        builder.set_help(help);
    }

    builder.finish()
}

/// A problem in the input, along with where it occurred.
#[derive(Debug)]
pub struct Error {
    /// The byte ranges of the input to highlight.
    pub spans: Vec<Range<usize>>,

    /// What went wrong.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Wraps `kind` in an error highlighting `spans`.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Builds the ariadne report for this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error against the given source text, without colors.
    pub fn render(&self, src_id: &str, source: &str) -> String {
        let mut out = Vec::new();
        let report = self.build_report(src_id);
        if report.write((src_id, Source::from(source)), &mut out).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use equiv_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = "something went wrong",
        labels = ["right here"],
        help = "try something else",
    )]
    struct Broken;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("bad symbol `{}`", symbol),
        labels = ["this one", ""],
    )]
    struct BadSymbol {
        symbol: char,
    }

    #[test]
    fn render_message_label_help() {
        let err = Error::new(vec![2..3], Broken);
        let rendered = strip_ansi_escapes::strip(err.render("input", "1 $ 2"));
        let rendered = String::from_utf8_lossy(&rendered);

        assert!(rendered.contains("something went wrong"));
        assert!(rendered.contains("right here"));
        assert!(rendered.contains("try something else"));
    }

    #[test]
    fn render_with_fields() {
        let err = Error::new(vec![0..1, 2..3], BadSymbol { symbol: '$' });
        let rendered = strip_ansi_escapes::strip(err.render("input", "$ $"));
        let rendered = String::from_utf8_lossy(&rendered);

        assert!(rendered.contains("bad symbol `$`"));
        assert!(rendered.contains("this one"));
    }

    #[test]
    fn surplus_labels_are_dropped() {
        let report = assemble_report(
            "input",
            &[0..1],
            None,
            vec!["first".to_string(), "second".to_string()],
            None,
        );
        let mut out = Vec::new();
        report.write(("input", Source::from("x")), &mut out).unwrap();
        let rendered = strip_ansi_escapes::strip(out);
        let rendered = String::from_utf8_lossy(&rendered);

        assert!(rendered.contains("first"));
        assert!(!rendered.contains("second"));
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], Broken);
        assert!(err.is::<Broken>());
        assert!(!err.is::<BadSymbol>());
    }
}
