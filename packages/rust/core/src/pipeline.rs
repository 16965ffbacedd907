//! End-to-end parse pipeline: raw lines → classify → assemble → render.
//!
//! Pure and synchronous; every invocation is independent and safe to run on
//! any number of concurrent workers. Memory is O(input): the whole line
//! sequence is held at once because the TOC needs a full pass before any
//! output can be produced.

use tracing::{debug, instrument};

use tocify_shared::Result;

use crate::{assembler, classifier, renderer};

/// Parse an ordered line sequence into the final HTML document.
///
/// `None` for the sequence itself fails with
/// [`TocifyError::InvalidInput`](tocify_shared::TocifyError); an empty
/// sequence is valid and produces a document with an empty TOC and body.
/// Output is deterministic: identical input yields a byte-identical page,
/// anchor ids included.
#[instrument(skip_all, fields(line_count = lines.map(<[String]>::len)))]
pub fn parse_to_html(lines: Option<&[String]>, marker: char) -> Result<String> {
    let classified = lines.map(|l| classifier::classify_lines(l, marker));
    let document = assembler::assemble(classified.as_deref())?;
    let html = renderer::render(&document);

    debug!(
        sections = document.toc.len(),
        html_len = html.len(),
        "parse complete"
    );

    Ok(html)
}

/// Split decoded text into lines on CR, LF, or CRLF.
///
/// A trailing terminator does not produce a final empty line, so
/// `"a\nb\n"` and `"a\nb"` split identically. Intended for the boundary
/// layers (upload service, CLI) that decode bytes before calling
/// [`parse_to_html`].
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
