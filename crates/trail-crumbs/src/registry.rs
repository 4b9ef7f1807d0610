//! In-memory crumb registry.
//!
//! [`CrumbRegistry`] maps crumb keys to closures that evaluate a crumb for
//! a set of arguments. Use it directly in tests, or populate it from
//! configuration at startup.

use std::collections::HashMap;
use std::fmt;

use crate::crumb::{Crumb, CrumbError, CrumbSource, ParentRef};
use crate::link::Link;

type CrumbFn = Box<dyn Fn(&[String]) -> CrumbSpec + Send + Sync>;

/// Crumb contents returned by a crumb definition closure.
///
/// Links added here are stamped with the crumb's key when the crumb is
/// looked up.
#[derive(Clone, Debug, Default)]
pub struct CrumbSpec {
    links: Vec<Link>,
    parent: Option<ParentRef>,
}

impl CrumbSpec {
    /// Create an empty crumb spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a linked fragment.
    #[must_use]
    pub fn link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(Link::new(text).with_url(url));
        self
    }

    /// Add a fragment without a URL.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.links.push(Link::new(text));
        self
    }

    /// Set the parent crumb.
    #[must_use]
    pub fn parent(mut self, key: impl Into<String>, args: Vec<String>) -> Self {
        self.parent = Some(ParentRef {
            key: key.into(),
            args,
        });
        self
    }
}

/// Crumb source backed by closures registered at startup.
#[derive(Default)]
pub struct CrumbRegistry {
    crumbs: HashMap<String, CrumbFn>,
}

impl CrumbRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a crumb, replacing any previous definition under `key`.
    pub fn define<F>(&mut self, key: impl Into<String>, f: F)
    where
        F: Fn(&[String]) -> CrumbSpec + Send + Sync + 'static,
    {
        let key = key.into();
        tracing::debug!(key = %key, "Defining breadcrumb");
        self.crumbs.insert(key, Box::new(f));
    }

    /// Builder-style variant of [`define`](Self::define).
    #[must_use]
    pub fn with_crumb<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[String]) -> CrumbSpec + Send + Sync + 'static,
    {
        self.define(key, f);
        self
    }

    /// Number of defined crumbs.
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Whether no crumbs are defined.
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }
}

impl fmt::Debug for CrumbRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.crumbs.keys().collect();
        keys.sort();
        f.debug_struct("CrumbRegistry").field("keys", &keys).finish()
    }
}

impl CrumbSource for CrumbRegistry {
    fn crumb(&self, key: &str, args: &[String]) -> Result<Crumb, CrumbError> {
        let define = self.crumbs.get(key).ok_or_else(|| CrumbError::NotFound {
            key: key.to_owned(),
        })?;
        let spec = define(args);

        let links = spec
            .links
            .into_iter()
            .map(|link| link.with_key(key))
            .collect();

        Ok(Crumb {
            key: key.to_owned(),
            links,
            parent: spec.parent,
        })
    }

    fn is_defined(&self, key: &str) -> bool {
        self.crumbs.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn registry() -> CrumbRegistry {
        CrumbRegistry::new()
            .with_crumb("root", |_| CrumbSpec::new().link("Home", "/"))
            .with_crumb("products", |_| {
                CrumbSpec::new().link("Products", "/products").parent("root", vec![])
            })
            .with_crumb("product", |args| {
                let name = args.first().cloned().unwrap_or_default();
                CrumbSpec::new()
                    .link(name.clone(), format!("/products/{name}"))
                    .parent("products", Vec::new())
            })
    }

    #[test]
    fn test_crumb_links_carry_key() {
        let crumb = registry().crumb("products", &[]).unwrap();
        assert_eq!(
            crumb.links,
            vec![Link::new("Products").with_url("/products").with_key("products")]
        );
    }

    #[test]
    fn test_crumb_uses_args() {
        let crumb = registry()
            .crumb("product", &["widget".to_owned()])
            .unwrap();
        assert_eq!(crumb.links[0].text, "widget");
        assert_eq!(crumb.links[0].url.as_deref(), Some("/products/widget"));
        assert_eq!(
            crumb.parent,
            Some(ParentRef {
                key: "products".to_owned(),
                args: Vec::new(),
            })
        );
    }

    #[test]
    fn test_crumb_not_found() {
        let result = registry().crumb("missing", &[]);
        assert!(matches!(result, Err(CrumbError::NotFound { key }) if key == "missing"));
    }

    #[test]
    fn test_is_defined() {
        let crumbs = registry();
        assert!(crumbs.is_defined("root"));
        assert!(!crumbs.is_defined("missing"));
        assert_eq!(crumbs.len(), 3);
    }

    #[test]
    fn test_redefine_replaces() {
        let mut crumbs = registry();
        crumbs.define("root", |_| CrumbSpec::new().text("Start"));
        let crumb = crumbs.crumb("root", &[]).unwrap();
        assert_eq!(crumb.links[0].text, "Start");
        assert_eq!(crumb.links[0].url, None);
    }

    #[test]
    fn test_not_found_message() {
        let err = registry().crumb("nope", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Breadcrumb not found: nope");
    }
}
