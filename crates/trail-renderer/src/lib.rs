//! Breadcrumb trail resolution and HTML rendering.
//!
//! Given a crumb key, [`BreadcrumbRenderer`] walks the parent chain through a
//! [`CrumbSource`](trail_crumbs::CrumbSource), post-processes the resulting
//! links and renders them as a single container element.
//!
//! # Pipeline
//!
//! - [`CrumbResolver`]: Builds the root-first link chain (cached per instance)
//! - [`LinkListBuilder`]: Applies autoroot, current path and single-fragment rules
//! - [`FragmentRenderer`]: Renders one link, optionally with structured data
//! - [`BreadcrumbRenderer`]: Merges options, joins fragments, wraps the result
//!
//! Options merge as built-in defaults < named style ([`StyleRegistry`]) <
//! call-site [`BreadcrumbOptions`].
//!
//! # Example
//!
//! ```
//! use trail_crumbs::{CrumbRegistry, CrumbSpec};
//! use trail_renderer::{BreadcrumbOptions, BreadcrumbRenderer, StaticContext, StyleRegistry};
//!
//! let crumbs = CrumbRegistry::new()
//!     .with_crumb("root", |_| CrumbSpec::new().link("Home", "/"))
//!     .with_crumb("about", |_| CrumbSpec::new().link("About", "/about").parent("root", vec![]));
//! let context = StaticContext::new("/about");
//! let styles = StyleRegistry::new();
//!
//! let renderer = BreadcrumbRenderer::new(&context, &crumbs, "about", Vec::new())
//!     .with_styles(&styles);
//! let html = renderer.render(&BreadcrumbOptions::new().style("ol")).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<ol class="breadcrumbs"><li><a href="/">Home</a></li><li class="current">About</li></ol>"#
//! );
//! ```

mod context;
mod error;
mod fragment;
mod links;
mod options;
mod renderer;
mod resolver;
mod style;

#[cfg(test)]
mod fixtures;

pub use context::{Attr, StaticContext, ViewContext, content_tag};
pub use error::RenderError;
pub use fragment::{BREADCRUMB_ITEMTYPE, FragmentRenderer};
pub use links::{LinkListBuilder, ROOT_KEY};
pub use options::{BreadcrumbOptions, RenderSettings};
pub use renderer::BreadcrumbRenderer;
pub use resolver::CrumbResolver;
pub use style::{DEFAULT_STYLE, StyleDefinition, StyleRegistry, register_style, resolve_style};

// Re-export crumb types for convenience
pub use trail_crumbs::{Crumb, CrumbError, CrumbSource, Link};
