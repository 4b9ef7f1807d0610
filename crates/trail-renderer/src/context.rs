//! Host view context and tag helpers.
//!
//! The renderer only needs a narrow slice of the host framework: the current
//! request path and primitives for building tags and hyperlinks. Hosts
//! implement [`ViewContext`]; the provided methods produce plain HTML.

/// A tag attribute. `None` values are omitted from the output.
pub type Attr<'a> = (&'a str, Option<&'a str>);

/// Build `<tag attrs>content</tag>`.
///
/// `content` is inserted as-is; attribute values are escaped.
///
/// # Examples
///
/// ```
/// use trail_renderer::content_tag;
///
/// assert_eq!(
///     content_tag("li", "Home", &[("class", Some("a&b")), ("id", None)]),
///     r#"<li class="a&amp;b">Home</li>"#
/// );
/// ```
pub fn content_tag(tag: &str, content: &str, attrs: &[Attr<'_>]) -> String {
    let mut out = String::with_capacity(content.len() + tag.len() * 2 + 16);
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        let Some(value) = value else { continue };
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Access to the host page being rendered.
///
/// Override [`link_to`](Self::link_to) to customise every breadcrumb
/// hyperlink (e.g. to add `data-` attributes or route through a helper).
pub trait ViewContext {
    /// Full path of the current request, if there is one.
    fn current_path(&self) -> Option<&str>;

    /// Escape plain text for inclusion in markup.
    fn escape_text(&self, text: &str) -> String {
        html_escape::encode_text(text).into_owned()
    }

    /// Wrap markup in a tag.
    fn content_tag(&self, tag: &str, content: &str, attrs: &[Attr<'_>]) -> String {
        content_tag(tag, content, attrs)
    }

    /// Wrap markup in a hyperlink to `url`.
    fn link_to(&self, content: &str, url: &str, attrs: &[Attr<'_>]) -> String {
        let mut all = Vec::with_capacity(attrs.len() + 1);
        all.extend_from_slice(attrs);
        all.push(("href", Some(url)));
        self.content_tag("a", content, &all)
    }
}

/// [`ViewContext`] with a fixed request path and the default tag helpers.
#[derive(Clone, Debug, Default)]
pub struct StaticContext {
    path: Option<String>,
}

impl StaticContext {
    /// Create a context for a request to `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Create a context with no current request.
    #[must_use]
    pub fn without_request() -> Self {
        Self::default()
    }
}

impl ViewContext for StaticContext {
    fn current_path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_content_tag_without_attrs() {
        assert_eq!(content_tag("span", "x", &[]), "<span>x</span>");
    }

    #[test]
    fn test_content_tag_empty_attr_value() {
        assert_eq!(
            content_tag("li", "x", &[("itemscope", Some(""))]),
            r#"<li itemscope="">x</li>"#
        );
    }

    #[test]
    fn test_content_tag_escapes_attr_quotes() {
        assert_eq!(
            content_tag("div", "", &[("id", Some(r#"a"b"#))]),
            r#"<div id="a&quot;b"></div>"#
        );
    }

    #[test]
    fn test_link_to_puts_href_last() {
        let context = StaticContext::without_request();
        assert_eq!(
            context.link_to("Home", "/", &[("class", Some("nav"))]),
            r#"<a class="nav" href="/">Home</a>"#
        );
    }

    #[test]
    fn test_escape_text() {
        let context = StaticContext::without_request();
        assert_eq!(context.escape_text("Q&A <1>"), "Q&amp;A &lt;1&gt;");
    }

    #[test]
    fn test_static_context_path() {
        assert_eq!(StaticContext::new("/a?b=1").current_path(), Some("/a?b=1"));
        assert_eq!(StaticContext::without_request().current_path(), None);
    }
}
