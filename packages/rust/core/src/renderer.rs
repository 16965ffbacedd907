//! HTML rendering: assembled document → final page string.
//!
//! The surrounding page (head metadata, font links, style block, the two
//! structural headings) is a fixed template that existing consumers of the
//! output depend on — keep it byte-stable.

use tocify_shared::{BodyItem, Document, SectionEntry};

/// Everything up to and including the opening `<body>` tag.
const DOC_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Title</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&display=swap" rel="stylesheet">
    <style>
        * {
            font-family: 'Roboto', sans-serif;
            color: #333;
            font-size: 15px;
            font-weight: 400;
        }
        a {
            font-family: 'Roboto', sans-serif;
            color: #333;
            font-size: 15px;
            font-style: normal;
            font-weight: 400;
            text-decoration: none;
        }
        a:visited, a:focus, a:hover {
            color: #333;
        }
        a.section_link {
            font-style: italic;
        }
        a.section_link:hover {
            text-decoration: underline;
        }
        h1 {
            font-family: 'Roboto', sans-serif;
            color: #333;
            font-size: 22px;
            font-weight: 400;
            margin: 10px 0;
        }
    </style>
</head>
<body>
"#;

const TOC_HEADING: &str = "<h1>Table of contents:</h1>\n";
const TEXT_HEADING: &str = "\n<h1>Text:</h1>\n";
const DOC_FOOT: &str = "\n</body>\n</html>\n";

/// Serialize a document into the final HTML page.
///
/// TOC entries and body paragraphs are concatenated in strict list order —
/// no sorting, no deduplication. Text is carried verbatim.
pub fn render(document: &Document) -> String {
    let approx = DOC_HEAD.len()
        + DOC_FOOT.len()
        + 64 * (document.toc.len() + document.body.len());
    let mut html = String::with_capacity(approx);

    html.push_str(DOC_HEAD);
    html.push_str(TOC_HEADING);
    for entry in &document.toc {
        render_section_link(&mut html, entry);
    }
    html.push_str(TEXT_HEADING);
    for item in &document.body {
        render_body_item(&mut html, item);
    }
    html.push_str(DOC_FOOT);

    html
}

/// One TOC row: an indented link to the heading's anchor.
fn render_section_link(out: &mut String, entry: &SectionEntry) {
    out.push_str("<div><a class=\"section_link\" href=\"#");
    out.push_str(&entry.anchor_id);
    out.push_str("\">");
    out.push_str(&entry.label());
    out.push_str("</a></div>");
}

/// One body paragraph: plain text, or an anchor-target heading.
fn render_body_item(out: &mut String, item: &BodyItem) {
    match item {
        BodyItem::Plain { text } => {
            out.push_str("<div>");
            out.push_str(text);
            out.push_str("</div>");
        }
        BodyItem::Anchored { anchor_id, title } => {
            out.push_str("<div><a name=\"");
            out.push_str(anchor_id);
            out.push_str("\">");
            out.push_str(title);
            out.push_str("</a></div>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            toc: vec![
                SectionEntry {
                    depth: 1,
                    title: "Chapter one".into(),
                    anchor_id: "1_aabbccddeeff".into(),
                },
                SectionEntry {
                    depth: 2,
                    title: "Details".into(),
                    anchor_id: "3_001122334455".into(),
                },
            ],
            body: vec![
                BodyItem::Plain {
                    text: "intro".into(),
                },
                BodyItem::Anchored {
                    anchor_id: "1_aabbccddeeff".into(),
                    title: "Chapter one".into(),
                },
                BodyItem::Plain { text: "".into() },
                BodyItem::Anchored {
                    anchor_id: "3_001122334455".into(),
                    title: "Details".into(),
                },
            ],
        }
    }

    #[test]
    fn template_frame_is_fixed() {
        let html = render(&sample_document());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<h1>Table of contents:</h1>"));
        assert!(html.contains("<h1>Text:</h1>"));
        assert!(html.contains("a.section_link"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn toc_links_point_at_body_anchors() {
        let html = render(&sample_document());
        assert!(html.contains("<a class=\"section_link\" href=\"#1_aabbccddeeff\">Chapter one</a>"));
        assert!(html.contains("<a class=\"section_link\" href=\"#3_001122334455\">-Details</a>"));
        assert!(html.contains("<a name=\"1_aabbccddeeff\">Chapter one</a>"));
        assert!(html.contains("<a name=\"3_001122334455\">Details</a>"));
    }

    #[test]
    fn plain_paragraphs_render_verbatim() {
        let html = render(&sample_document());
        assert!(html.contains("<div>intro</div>"));
        // Empty lines become empty paragraphs
        assert!(html.contains("<div></div>"));
    }

    #[test]
    fn empty_document_keeps_both_headings() {
        let html = render(&Document {
            toc: vec![],
            body: vec![],
        });
        let toc_pos = html.find("<h1>Table of contents:</h1>").unwrap();
        let text_pos = html.find("<h1>Text:</h1>").unwrap();
        assert!(toc_pos < text_pos);
        assert!(!html.contains("<div>"));
    }

    #[test]
    fn rendering_preserves_list_order() {
        let html = render(&sample_document());
        let first = html.find("1_aabbccddeeff").unwrap();
        let second = html.find("3_001122334455").unwrap();
        assert!(first < second);
    }
}
