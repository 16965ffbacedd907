//! Section assembly: classified lines → TOC entries + body paragraphs.
//!
//! Walks the classified line sequence once, turning every heading into a TOC
//! entry plus an anchored body paragraph and every other line into a plain
//! paragraph, so the body stays a one-to-one, order-preserving image of the
//! input.

use sha2::{Digest, Sha256};
use tracing::debug;

use tocify_shared::{BodyItem, ClassifiedLine, Document, Result, SectionEntry, TocifyError};

/// Number of digest hex digits carried into an anchor id.
const ANCHOR_HASH_LEN: usize = 12;

/// Assemble a [`Document`] from an ordered sequence of classified lines.
///
/// `None` means the line sequence itself is absent and fails with
/// [`TocifyError::InvalidInput`]; an empty-but-present sequence is valid and
/// yields an empty TOC and body.
///
/// Invariants upheld:
/// - `body.len()` equals the input length, in original order
/// - the TOC lists headings in encounter order; depth never reorders entries
/// - each heading's TOC entry and body paragraph share the same anchor id
pub fn assemble(lines: Option<&[ClassifiedLine]>) -> Result<Document> {
    let lines =
        lines.ok_or_else(|| TocifyError::invalid_input("input line sequence is missing"))?;

    let mut toc = Vec::new();
    let mut body = Vec::with_capacity(lines.len());

    for line in lines {
        if line.is_heading() {
            let anchor_id = anchor_id(line.position, &line.raw);
            toc.push(SectionEntry {
                depth: line.depth,
                title: line.title.clone(),
                anchor_id: anchor_id.clone(),
            });
            body.push(BodyItem::Anchored {
                anchor_id,
                title: line.title.clone(),
            });
        } else {
            body.push(BodyItem::Plain {
                text: line.raw.clone(),
            });
        }
    }

    debug!(
        lines = lines.len(),
        sections = toc.len(),
        "document assembled"
    );

    Ok(Document { toc, body })
}

/// Derive the anchor identifier for a heading.
///
/// The token is the zero-based line position joined to a truncated SHA-256
/// digest of `(position, raw heading text)`. The position prefix makes ids
/// unique within a document; the digest makes them stable across runs and
/// builds for identical input.
pub fn anchor_id(position: usize, raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update((position as u64).to_le_bytes());
    hasher.update(raw.as_bytes());
    let digest = format!("{:x}", hasher.finalize());

    format!("{position}_{}", &digest[..ANCHOR_HASH_LEN])
}
