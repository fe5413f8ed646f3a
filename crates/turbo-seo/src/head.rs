//! Document head sink.

use std::sync::{Mutex, MutexGuard};

use crate::tags::MetaTags;

/// Write-only destination for page metadata.
pub trait SeoSink: Send + Sync {
    /// Set the document title.
    fn set_title(&self, title: &str);

    /// Replace the page's meta tags.
    fn set_meta_tags(&self, tags: &MetaTags);
}

/// Snapshot of what has been written to a `DocumentHead`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: MetaTags,
}

impl HeadContent {
    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape(title)));
        }

        for tag in self.meta.iter() {
            html.push_str(&format!(
                r#"<meta {}="{}" content="{}">"#,
                tag.key.attribute(),
                escape(&tag.name),
                escape(&tag.content)
            ));
            html.push('\n');
        }

        html
    }
}

/// In-memory `SeoSink` for server rendering and tests.
#[derive(Debug, Default)]
pub struct DocumentHead {
    content: Mutex<HeadContent>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current head content.
    pub fn snapshot(&self) -> HeadContent {
        self.lock().clone()
    }

    /// Render the current head content to HTML.
    pub fn render(&self) -> String {
        self.lock().render()
    }

    fn lock(&self) -> MutexGuard<'_, HeadContent> {
        // A poisoned head still holds valid strings.
        self.content.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SeoSink for DocumentHead {
    fn set_title(&self, title: &str) {
        self.lock().title = Some(title.to_string());
    }

    fn set_meta_tags(&self, tags: &MetaTags) {
        self.lock().meta = tags.clone();
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
    use crate::tags::MetaTag;

    #[test]
    fn test_document_head_records_writes() {
        let head = DocumentHead::new();
        head.set_title("Acme");
        head.set_meta_tags(&MetaTags::new().with(MetaTag::name("description", "Parts")));

        let content = head.snapshot();
        assert_eq!(content.title.as_deref(), Some("Acme"));
        assert_eq!(content.meta.get("description"), Some("Parts"));
    }

    #[test]
    fn test_set_meta_tags_replaces() {
        let head = DocumentHead::new();
        head.set_meta_tags(&MetaTags::new().with(MetaTag::name("a", "1")));
        head.set_meta_tags(&MetaTags::new().with(MetaTag::name("b", "2")));

        let content = head.snapshot();
        assert!(content.meta.get("a").is_none());
        assert_eq!(content.meta.get("b"), Some("2"));
    }

    #[test]
    fn test_render_escapes_attributes() {
        let head = DocumentHead::new();
        head.set_title("Tom & Jerry");
        head.set_meta_tags(&MetaTags::new().with(MetaTag::property("og:title", r#"Say "hi""#)));

        let html = head.render();
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
        assert!(html.contains(r#"<meta property="og:title" content="Say &quot;hi&quot;">"#));
    }
}
