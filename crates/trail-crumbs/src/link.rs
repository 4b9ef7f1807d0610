//! Breadcrumb link type.

use serde::{Deserialize, Serialize};

/// One renderable breadcrumb entry.
///
/// Position in a trail is significant: index 0 is the root-most ancestor and
/// the last entry is the page being viewed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Key of the crumb this link was produced by.
    pub key: Option<String>,
    /// Display text (unescaped).
    pub text: String,
    /// Link target.
    pub url: Option<String>,
    /// Whether this link represents the current page.
    #[serde(default)]
    pub current: bool,
}

impl Link {
    /// Create a link with no URL.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            url: None,
            current: false,
        }
    }

    /// Set the link target.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the crumb key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Whether this link is the current page.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Mark this link as the current page.
    pub fn set_current(&mut self) {
        self.current = true;
    }

    /// Link target, treating an empty URL as absent.
    pub fn href(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_link_is_not_current() {
        let link = Link::new("Home").with_url("/");
        assert!(!link.is_current());
        assert_eq!(link.href(), Some("/"));
    }

    #[test]
    fn test_set_current() {
        let mut link = Link::new("Widget");
        link.set_current();
        assert!(link.is_current());
    }

    #[test]
    fn test_empty_url_has_no_href() {
        let link = Link::new("Blank").with_url("");
        assert_eq!(link.href(), None);
    }
}
