//! Section to HTML.
//!
//! A page is a header built from the metadata (emoji, title, optional description)
//! followed by the body rendered as CommonMark with the GitHub extensions authors
//! rely on (tables, strikethrough, task lists). Embedded components in the body are
//! left to the markdown renderer, which passes raw HTML through untouched.

use crate::model::SectionDocument;
use pulldown_cmark::{html, Options, Parser};

pub fn render_body(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub fn render_section(doc: &SectionDocument) -> String {
    let meta = &doc.metadata;
    let heading = if meta.emoji.is_empty() {
        escape(&meta.title)
    } else {
        format!("{} {}", escape(&meta.emoji), escape(&meta.title))
    };

    let mut out = String::new();
    out.push_str("<header>\n");
    out.push_str(&format!("<h1>{}</h1>\n", heading));
    if !meta.description.is_empty() {
        out.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape(&meta.description)
        ));
    }
    out.push_str("</header>\n");
    out.push_str(&render_body(&doc.body));
    out
}

/// Wraps a rendered section in a minimal standalone HTML document.
pub fn render_page(doc: &SectionDocument) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<article data-route=\"{}\">\n{}</article>\n</body>\n</html>\n",
        escape(&doc.metadata.title),
        escape(&doc.route()),
        render_section(doc)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionMetadata;

    fn doc(metadata: SectionMetadata, body: &str) -> SectionDocument {
        SectionDocument {
            collection: "ai-marketing".into(),
            section: "email".into(),
            metadata,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_header_with_emoji_and_description() {
        let meta = SectionMetadata {
            title: "Email & Lifecycle".to_string(),
            emoji: "📧".to_string(),
            order: 5,
            description: "AI-powered <email>".to_string(),
        };
        let html = render_section(&doc(meta, ""));
        assert!(html.contains("<h1>📧 Email &amp; Lifecycle</h1>"));
        assert!(html.contains("<p class=\"description\">AI-powered &lt;email&gt;</p>"));
    }

    #[test]
    fn test_header_without_optional_fields() {
        let html = render_section(&doc(SectionMetadata::new("Plain"), ""));
        assert!(html.contains("<h1>Plain</h1>"));
        assert!(!html.contains("description"));
    }

    #[test]
    fn test_body_markdown() {
        let body = "## Steps\n\n- [x] Draft\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~\n";
        let html = render_section(&doc(SectionMetadata::new("T"), body));
        assert!(html.contains("<h2>Steps</h2>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_page_wrapper() {
        let page = render_page(&doc(SectionMetadata::new("Q&A"), "Hi"));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Q&amp;A</title>"));
        assert!(page.contains("data-route=\"/ai-marketing/email\""));
        assert!(page.contains("<p>Hi</p>"));
    }
}
