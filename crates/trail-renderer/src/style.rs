//! Named rendering styles.
//!
//! A style bundles rendering defaults (container/fragment tags, classes,
//! separator). Styles live in a [`StyleRegistry`]; the process-wide instance
//! returned by [`StyleRegistry::global`] starts with four built-ins:
//!
//! | Name        | Container | Fragment | Other                                       |
//! |-------------|-----------|----------|---------------------------------------------|
//! | `default`   | `div`     | —        | separator ` &rsaquo; `                      |
//! | `ol`        | `ol`      | `li`     |                                             |
//! | `ul`        | `ul`      | `li`     |                                             |
//! | `bootstrap` | `ol`      | `li`     | class `breadcrumb`, current class `active`  |

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use serde::Deserialize;

use crate::error::RenderError;

/// Name of the style used when none is requested.
pub const DEFAULT_STYLE: &str = "default";

/// Partial set of rendering options.
///
/// Used both as a style definition and as the override part of call-site
/// [`BreadcrumbOptions`](crate::BreadcrumbOptions). Unset fields fall through
/// to the next layer. Unknown keys are rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleDefinition {
    /// Tag wrapping the whole trail.
    pub container_tag: Option<String>,
    /// Tag wrapping each fragment.
    pub fragment_tag: Option<String>,
    /// Markup inserted before the first fragment.
    pub pretext: Option<String>,
    /// Markup inserted after the last fragment.
    pub posttext: Option<String>,
    /// Markup joining fragments.
    pub separator: Option<String>,
    /// Prepend the root crumb when it is not already first.
    pub autoroot: Option<bool>,
    /// Render a trail consisting of a single link.
    pub display_single_fragment: Option<bool>,
    /// Render the current link as a hyperlink.
    pub link_current: Option<bool>,
    /// Emit structured-data attributes.
    pub semantic: Option<bool>,
    /// Container class.
    pub class: Option<String>,
    /// Class of the current fragment.
    pub current_class: Option<String>,
    /// Container id.
    pub id: Option<String>,
    /// Replace the current link's URL with the request path.
    pub transform_current_path: Option<bool>,
}

impl StyleDefinition {
    /// Create an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container tag.
    #[must_use]
    pub fn container_tag(mut self, tag: impl Into<String>) -> Self {
        self.container_tag = Some(tag.into());
        self
    }

    /// Set the fragment tag.
    #[must_use]
    pub fn fragment_tag(mut self, tag: impl Into<String>) -> Self {
        self.fragment_tag = Some(tag.into());
        self
    }

    /// Set the separator.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set the container class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the current fragment class.
    #[must_use]
    pub fn current_class(mut self, class: impl Into<String>) -> Self {
        self.current_class = Some(class.into());
        self
    }

    /// Fill fields unset in `self` from `fallback`.
    #[must_use]
    pub fn with_fallback(self, fallback: &Self) -> Self {
        Self {
            container_tag: self.container_tag.or_else(|| fallback.container_tag.clone()),
            fragment_tag: self.fragment_tag.or_else(|| fallback.fragment_tag.clone()),
            pretext: self.pretext.or_else(|| fallback.pretext.clone()),
            posttext: self.posttext.or_else(|| fallback.posttext.clone()),
            separator: self.separator.or_else(|| fallback.separator.clone()),
            autoroot: self.autoroot.or(fallback.autoroot),
            display_single_fragment: self
                .display_single_fragment
                .or(fallback.display_single_fragment),
            link_current: self.link_current.or(fallback.link_current),
            semantic: self.semantic.or(fallback.semantic),
            class: self.class.or_else(|| fallback.class.clone()),
            current_class: self.current_class.or_else(|| fallback.current_class.clone()),
            id: self.id.or_else(|| fallback.id.clone()),
            transform_current_path: self
                .transform_current_path
                .or(fallback.transform_current_path),
        }
    }
}

fn builtin_styles() -> HashMap<String, StyleDefinition> {
    HashMap::from([
        (
            DEFAULT_STYLE.to_owned(),
            StyleDefinition::new()
                .container_tag("div")
                .separator(" &rsaquo; "),
        ),
        (
            "ol".to_owned(),
            StyleDefinition::new().container_tag("ol").fragment_tag("li"),
        ),
        (
            "ul".to_owned(),
            StyleDefinition::new().container_tag("ul").fragment_tag("li"),
        ),
        (
            "bootstrap".to_owned(),
            StyleDefinition::new()
                .container_tag("ol")
                .fragment_tag("li")
                .class("breadcrumb")
                .current_class("active"),
        ),
    ])
}

/// Registry of named styles.
///
/// Thread-safe; registration at runtime is allowed, though styles are usually
/// registered once at startup.
#[derive(Debug)]
pub struct StyleRegistry {
    styles: RwLock<HashMap<String, StyleDefinition>>,
}

static GLOBAL: LazyLock<StyleRegistry> = LazyLock::new(StyleRegistry::new);

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    /// Create a registry containing only the built-in styles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            styles: RwLock::new(builtin_styles()),
        }
    }

    /// Process-wide registry used by renderers unless told otherwise.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Register a style, replacing any existing style with the same name.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn register(&self, name: impl Into<String>, definition: StyleDefinition) {
        let name = name.into();
        let replaced = self
            .styles
            .write()
            .unwrap()
            .insert(name.clone(), definition)
            .is_some();
        tracing::debug!(style = %name, replaced, "Registered breadcrumb style");
    }

    /// Look up a style by name.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::StyleNotFound` listing the registered names.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn resolve(&self, name: &str) -> Result<StyleDefinition, RenderError> {
        if let Some(style) = self.styles.read().unwrap().get(name) {
            return Ok(style.clone());
        }
        Err(RenderError::StyleNotFound {
            name: name.to_owned(),
            available: self.names(),
        })
    }

    /// Whether a style is registered under `name`.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.read().unwrap().contains_key(name)
    }

    /// Registered style names, sorted.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.styles.read().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop custom styles and restore the built-ins.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn reset(&self) {
        *self.styles.write().unwrap() = builtin_styles();
    }
}

/// Register a style in the global registry.
pub fn register_style(name: impl Into<String>, definition: StyleDefinition) {
    StyleRegistry::global().register(name, definition);
}

/// Look up a style in the global registry.
///
/// # Errors
///
/// Returns `RenderError::StyleNotFound` listing the registered names.
pub fn resolve_style(name: &str) -> Result<StyleDefinition, RenderError> {
    StyleRegistry::global().resolve(name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builtin_names() {
        let styles = StyleRegistry::new();
        assert_eq!(styles.names(), vec!["bootstrap", "default", "ol", "ul"]);
    }

    #[test]
    fn test_builtin_bootstrap() {
        let style = StyleRegistry::new().resolve("bootstrap").unwrap();
        assert_eq!(style.container_tag.as_deref(), Some("ol"));
        assert_eq!(style.fragment_tag.as_deref(), Some("li"));
        assert_eq!(style.class.as_deref(), Some("breadcrumb"));
        assert_eq!(style.current_class.as_deref(), Some("active"));
    }

    #[test]
    fn test_builtin_default_separator() {
        let style = StyleRegistry::new().resolve(DEFAULT_STYLE).unwrap();
        assert_eq!(style.container_tag.as_deref(), Some("div"));
        assert_eq!(style.fragment_tag, None);
        assert_eq!(style.separator.as_deref(), Some(" &rsaquo; "));
    }

    #[test]
    fn test_unknown_style_lists_names() {
        let styles = StyleRegistry::new();
        styles.register("compact", StyleDefinition::new().container_tag("nav"));

        let err = styles.resolve("fancy").unwrap_err();
        match &err {
            RenderError::StyleNotFound { name, available } => {
                assert_eq!(name, "fancy");
                assert_eq!(available, &["bootstrap", "compact", "default", "ol", "ul"]);
            }
            RenderError::Crumb(_) => panic!("unexpected error: {err}"),
        }
        assert_eq!(
            err.to_string(),
            "Breadcrumbs style \"fancy\" not found. Use any of: bootstrap, compact, default, ol, ul"
        );
    }

    #[test]
    fn test_register_overrides_builtin() {
        let styles = StyleRegistry::new();
        styles.register("ol", StyleDefinition::new().container_tag("nav"));
        let style = styles.resolve("ol").unwrap();
        assert_eq!(style.container_tag.as_deref(), Some("nav"));
        assert_eq!(style.fragment_tag, None);
    }

    #[test]
    fn test_reset_restores_builtins() {
        let styles = StyleRegistry::new();
        styles.register("custom", StyleDefinition::new());
        styles.register("ul", StyleDefinition::new());
        assert!(styles.contains("custom"));

        styles.reset();

        assert!(!styles.contains("custom"));
        let ul = styles.resolve("ul").unwrap();
        assert_eq!(ul.fragment_tag.as_deref(), Some("li"));
    }

    #[test]
    fn test_global_register_and_resolve() {
        register_style(
            "global-test-style",
            StyleDefinition::new().container_tag("nav"),
        );
        let style = resolve_style("global-test-style").unwrap();
        assert_eq!(style.container_tag.as_deref(), Some("nav"));
        assert!(resolve_style("default").is_ok());
    }

    #[test]
    fn test_with_fallback_prefers_self() {
        let style = StyleDefinition::new().class("nav");
        let fallback = StyleDefinition::new().class("breadcrumb").container_tag("ol");
        let merged = style.with_fallback(&fallback);
        assert_eq!(merged.class.as_deref(), Some("nav"));
        assert_eq!(merged.container_tag.as_deref(), Some("ol"));
    }
}
