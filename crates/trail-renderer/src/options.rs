//! Call-site options and option merging.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::style::{DEFAULT_STYLE, StyleDefinition};

/// Options passed by the caller for one render.
///
/// Every field is optional. The named style supplies defaults for unset
/// fields, and built-in defaults cover the rest. Unknown keys are rejected
/// when deserializing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "OptionsTable")]
pub struct BreadcrumbOptions {
    /// Style name (default: `"default"`).
    pub style: Option<String>,
    /// Explicit overrides of style and built-in defaults.
    pub overrides: StyleDefinition,
}

/// Serialized shape of [`BreadcrumbOptions`].
///
/// `deny_unknown_fields` does not work through `flatten`, so keys matched by
/// neither `style` nor the overrides are collected in `unknown`.
#[derive(Default, Deserialize)]
#[serde(default)]
struct OptionsTable {
    style: Option<String>,
    #[serde(flatten)]
    overrides: StyleDefinition,
    #[serde(flatten)]
    unknown: BTreeMap<String, IgnoredAny>,
}

impl TryFrom<OptionsTable> for BreadcrumbOptions {
    type Error = String;

    fn try_from(table: OptionsTable) -> Result<Self, Self::Error> {
        if let Some(key) = table.unknown.keys().next() {
            return Err(format!("unknown field `{key}`"));
        }
        Ok(Self {
            style: table.style,
            overrides: table.overrides,
        })
    }
}

impl BreadcrumbOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a named style.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Tag wrapping the whole trail.
    #[must_use]
    pub fn container_tag(mut self, tag: impl Into<String>) -> Self {
        self.overrides.container_tag = Some(tag.into());
        self
    }

    /// Tag wrapping each fragment.
    #[must_use]
    pub fn fragment_tag(mut self, tag: impl Into<String>) -> Self {
        self.overrides.fragment_tag = Some(tag.into());
        self
    }

    /// Markup inserted before the first fragment.
    #[must_use]
    pub fn pretext(mut self, pretext: impl Into<String>) -> Self {
        self.overrides.pretext = Some(pretext.into());
        self
    }

    /// Markup inserted after the last fragment.
    #[must_use]
    pub fn posttext(mut self, posttext: impl Into<String>) -> Self {
        self.overrides.posttext = Some(posttext.into());
        self
    }

    /// Markup joining fragments.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.overrides.separator = Some(separator.into());
        self
    }

    /// Prepend the root crumb when it is not already first.
    #[must_use]
    pub fn autoroot(mut self, autoroot: bool) -> Self {
        self.overrides.autoroot = Some(autoroot);
        self
    }

    /// Render a trail consisting of a single link.
    #[must_use]
    pub fn display_single_fragment(mut self, display: bool) -> Self {
        self.overrides.display_single_fragment = Some(display);
        self
    }

    /// Render the current fragment as a link.
    #[must_use]
    pub fn link_current(mut self, link_current: bool) -> Self {
        self.overrides.link_current = Some(link_current);
        self
    }

    /// Emit structured-data attributes.
    #[must_use]
    pub fn semantic(mut self, semantic: bool) -> Self {
        self.overrides.semantic = Some(semantic);
        self
    }

    /// Container class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.overrides.class = Some(class.into());
        self
    }

    /// Class of the current fragment.
    #[must_use]
    pub fn current_class(mut self, class: impl Into<String>) -> Self {
        self.overrides.current_class = Some(class.into());
        self
    }

    /// Container id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.overrides.id = Some(id.into());
        self
    }

    /// Point the current fragment at the request path.
    #[must_use]
    pub fn transform_current_path(mut self, transform: bool) -> Self {
        self.overrides.transform_current_path = Some(transform);
        self
    }

    /// Fill options unset in `self` from `defaults`.
    ///
    /// Used to layer configured site-wide options beneath per-render ones.
    #[must_use]
    pub fn with_fallback(self, defaults: &Self) -> Self {
        Self {
            style: self.style.or_else(|| defaults.style.clone()),
            overrides: self.overrides.with_fallback(&defaults.overrides),
        }
    }

    /// Requested style name, or the default style.
    pub fn style_name(&self) -> &str {
        self.style.as_deref().unwrap_or(DEFAULT_STYLE)
    }
}

/// Fully resolved rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// Name of the style the settings were merged from.
    pub style: String,
    /// Tag wrapping the whole trail.
    pub container_tag: String,
    /// Tag wrapping each fragment, if any.
    pub fragment_tag: Option<String>,
    /// Markup inserted before the first fragment.
    pub pretext: String,
    /// Markup inserted after the last fragment.
    pub posttext: String,
    /// Markup joining fragments.
    pub separator: String,
    /// Prepend the root crumb when it is not already first.
    pub autoroot: bool,
    /// Render a trail consisting of a single link.
    pub display_single_fragment: bool,
    /// Render the current fragment as a link.
    pub link_current: bool,
    /// Emit structured-data attributes.
    pub semantic: bool,
    /// Container class.
    pub class: String,
    /// Class of the current fragment.
    pub current_class: String,
    /// Container id.
    pub id: Option<String>,
    /// Point the current fragment at the request path.
    pub transform_current_path: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_owned(),
            container_tag: "div".to_owned(),
            fragment_tag: None,
            pretext: String::new(),
            posttext: String::new(),
            separator: String::new(),
            autoroot: true,
            display_single_fragment: false,
            link_current: false,
            semantic: false,
            class: "breadcrumbs".to_owned(),
            current_class: "current".to_owned(),
            id: None,
            transform_current_path: true,
        }
    }
}

impl RenderSettings {
    /// Merge built-in defaults < `style` < `options`.
    pub fn merge(style: &StyleDefinition, options: &BreadcrumbOptions) -> Self {
        let mut settings = Self {
            style: options.style_name().to_owned(),
            ..Self::default()
        };
        settings.apply(style);
        settings.apply(&options.overrides);
        settings
    }

    fn apply(&mut self, layer: &StyleDefinition) {
        fn set<T: Clone>(target: &mut T, value: Option<&T>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        set(&mut self.container_tag, layer.container_tag.as_ref());
        if let Some(tag) = &layer.fragment_tag {
            self.fragment_tag = Some(tag.clone());
        }
        set(&mut self.pretext, layer.pretext.as_ref());
        set(&mut self.posttext, layer.posttext.as_ref());
        set(&mut self.separator, layer.separator.as_ref());
        set(&mut self.autoroot, layer.autoroot.as_ref());
        set(
            &mut self.display_single_fragment,
            layer.display_single_fragment.as_ref(),
        );
        set(&mut self.link_current, layer.link_current.as_ref());
        set(&mut self.semantic, layer.semantic.as_ref());
        set(&mut self.class, layer.class.as_ref());
        set(&mut self.current_class, layer.current_class.as_ref());
        if let Some(id) = &layer.id {
            self.id = Some(id.clone());
        }
        set(
            &mut self.transform_current_path,
            layer.transform_current_path.as_ref(),
        );
    }

    /// Fragment tag, treating an empty tag as absent.
    pub fn fragment_tag(&self) -> Option<&str> {
        self.fragment_tag.as_deref().filter(|tag| !tag.is_empty())
    }
}
