//! HTML output type.

use std::fmt;

use serde::Serialize;

/// Rendered HTML. Text reaches it only through [`escape_html`] or
/// [`Markup::text`]; [`Markup::raw`] is for markup built by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    pub fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for m in iter {
            out.push(&m);
        }
        out
    }
}

/// Escape text for use in element content and double-quoted attributes.
///
/// askama is only compiled with the `api` feature, and the renderer must
/// build without it.
pub fn escape_html(text: &str) -> String {
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

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & \"Jerry\" <3"), "Tom &amp; &quot;Jerry&quot; &lt;3");
        assert_eq!(escape_html("الشطرنج"), "الشطرنج");
    }

    #[test]
    fn test_collect_concatenates() {
        let m: Markup = vec![Markup::raw("<b>"), Markup::text("a<b"), Markup::raw("</b>")]
            .into_iter()
            .collect();
        assert_eq!(m.as_str(), "<b>a&lt;b</b>");
    }
}
