//! Breadcrumb rendering entry point.

use trail_crumbs::{CrumbSource, Link};

use crate::context::ViewContext;
use crate::error::RenderError;
use crate::fragment::FragmentRenderer;
use crate::links::LinkListBuilder;
use crate::options::{BreadcrumbOptions, RenderSettings};
use crate::resolver::CrumbResolver;
use crate::style::StyleRegistry;

/// Renders the breadcrumb trail for one page.
///
/// Create one renderer per page render. The crumb chain is resolved once and
/// shared by [`render`](Self::render), [`yield_links`](Self::yield_links) and
/// [`parent_breadcrumb`](Self::parent_breadcrumb).
pub struct BreadcrumbRenderer<'a> {
    context: &'a dyn ViewContext,
    styles: &'a StyleRegistry,
    resolver: CrumbResolver<'a>,
}

impl<'a> BreadcrumbRenderer<'a> {
    /// Create a renderer for the crumb `key` evaluated with `args`.
    ///
    /// An empty key renders nothing.
    pub fn new(
        context: &'a dyn ViewContext,
        source: &'a dyn CrumbSource,
        key: &str,
        args: Vec<String>,
    ) -> Self {
        Self {
            context,
            styles: StyleRegistry::global(),
            resolver: CrumbResolver::new(source, key, args),
        }
    }

    /// Use `styles` instead of the global style registry.
    #[must_use]
    pub fn with_styles(mut self, styles: &'a StyleRegistry) -> Self {
        self.styles = styles;
        self
    }

    /// Merge `options` over the requested style and built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::StyleNotFound` if the style is not registered.
    pub fn settings(&self, options: &BreadcrumbOptions) -> Result<RenderSettings, RenderError> {
        let style = self.styles.resolve(options.style_name())?;
        Ok(RenderSettings::merge(&style, options))
    }

    /// Display-ready links for `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is unknown or a crumb is undefined.
    pub fn links(&self, options: &BreadcrumbOptions) -> Result<Vec<Link>, RenderError> {
        if self.resolver.key().is_none() {
            return Ok(Vec::new());
        }
        let settings = self.settings(options)?;
        self.links_for(&settings)
    }

    fn links_for(&self, settings: &RenderSettings) -> Result<Vec<Link>, RenderError> {
        let raw = self.resolver.resolve()?;
        let links = LinkListBuilder::new(&self.resolver).build(
            raw,
            settings,
            self.context.current_path(),
        )?;
        Ok(links)
    }

    /// Render the trail as markup.
    ///
    /// Returns an empty string when there is nothing to show.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is unknown or a crumb is undefined.
    pub fn render(&self, options: &BreadcrumbOptions) -> Result<String, RenderError> {
        if self.resolver.key().is_none() {
            return Ok(String::new());
        }

        let settings = self.settings(options)?;
        let links = self.links_for(&settings)?;

        let Some((current, ancestors)) = links.split_last() else {
            return Ok(String::new());
        };

        let fragments = FragmentRenderer::new(self.context);
        let mut rendered: Vec<String> = ancestors
            .iter()
            .map(|link| fragments.render_link(link, &settings, false))
            .collect();
        rendered.push(fragments.render_link(current, &settings, true));

        let html = format!(
            "{}{}{}",
            settings.pretext,
            rendered.join(&settings.separator),
            settings.posttext
        );

        let id = settings.id.as_deref().filter(|id| !id.is_empty());
        let class = Some(settings.class.as_str()).filter(|class| !class.is_empty());
        Ok(self
            .context
            .content_tag(&settings.container_tag, &html, &[("id", id), ("class", class)]))
    }

    /// Pass the display-ready links to `f` for custom rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is unknown or a crumb is undefined.
    pub fn yield_links<T>(
        &self,
        options: &BreadcrumbOptions,
        f: impl FnOnce(&[Link]) -> T,
    ) -> Result<T, RenderError> {
        let links = self.links(options)?;
        Ok(f(&links))
    }

    /// The link immediately above the current page, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is unknown or a crumb is undefined.
    pub fn parent_breadcrumb(
        &self,
        options: &BreadcrumbOptions,
    ) -> Result<Option<Link>, RenderError> {
        let mut links = self.links(options)?;
        if links.len() < 2 {
            return Ok(None);
        }
        let index = links.len() - 2;
        Ok(Some(links.swap_remove(index)))
    }

    /// Call `f` with the parent link if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is unknown or a crumb is undefined.
    pub fn yield_parent_breadcrumb<T>(
        &self,
        options: &BreadcrumbOptions,
        f: impl FnOnce(&Link) -> T,
    ) -> Result<Option<T>, RenderError> {
        Ok(self.parent_breadcrumb(options)?.as_ref().map(f))
    }
}
