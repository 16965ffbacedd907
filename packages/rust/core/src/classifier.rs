//! Line classification: heading detection and depth computation.
//!
//! A line is a heading when it starts with one or more marker characters;
//! the length of that leading run is its nesting depth.

use tocify_shared::ClassifiedLine;

/// Classify a single line against the configured marker character.
///
/// `depth` counts consecutive marker characters from the start of the line,
/// stopping at the first non-marker character; `title` is the line with that
/// run removed. Total over any input: an empty line classifies as depth 0,
/// a marker-only line as a heading with an empty title.
pub fn classify(position: usize, raw: &str, marker: char) -> ClassifiedLine {
    let depth = raw.chars().take_while(|&c| c == marker).count();
    // The leading run is `depth` copies of the same char, so a byte offset
    // is safe here.
    let title = raw[depth * marker.len_utf8()..].to_string();

    ClassifiedLine {
        position,
        raw: raw.to_string(),
        depth,
        title,
    }
}

/// Classify an ordered line sequence, assigning zero-based positions.
pub fn classify_lines(lines: &[String], marker: char) -> Vec<ClassifiedLine> {
    lines
        .iter()
        .enumerate()
        .map(|(position, raw)| classify(position, raw, marker))
        .collect()
}
