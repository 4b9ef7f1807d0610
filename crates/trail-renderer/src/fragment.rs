//! Rendering of individual breadcrumb fragments.

use trail_crumbs::Link;

use crate::context::ViewContext;
use crate::options::RenderSettings;

/// Structured-data type attached to semantic fragments.
pub const BREADCRUMB_ITEMTYPE: &str = "http://data-vocabulary.org/Breadcrumb";

const ITEMSCOPE: (&str, Option<&str>) = ("itemscope", Some(""));
const ITEMTYPE: (&str, Option<&str>) = ("itemtype", Some(BREADCRUMB_ITEMTYPE));

/// Renders one link as markup through a [`ViewContext`].
pub struct FragmentRenderer<'a> {
    context: &'a dyn ViewContext,
}

impl<'a> FragmentRenderer<'a> {
    /// Create a renderer that builds tags through `context`.
    pub fn new(context: &'a dyn ViewContext) -> Self {
        Self { context }
    }

    /// Render a link in position within a trail.
    ///
    /// The current link is linked only with `link_current` and carries the
    /// current class; other links carry no class.
    pub fn render_link(&self, link: &Link, settings: &RenderSettings, current: bool) -> String {
        let (url, class) = if current {
            let url = if settings.link_current {
                link.href()
            } else {
                None
            };
            (url, Some(settings.current_class.as_str()))
        } else {
            (link.href(), None)
        };
        self.render(
            settings.fragment_tag(),
            &link.text,
            url,
            settings.semantic,
            class,
        )
    }

    /// Render a fragment from its parts. `text` is escaped here.
    ///
    /// Empty `url` and `class` values are treated as absent.
    pub fn render(
        &self,
        fragment_tag: Option<&str>,
        text: &str,
        url: Option<&str>,
        semantic: bool,
        class: Option<&str>,
    ) -> String {
        let text = self.context.escape_text(text);
        let url = url.filter(|url| !url.is_empty());
        let class = class.filter(|class| !class.is_empty());

        if semantic {
            self.render_semantic(fragment_tag, &text, url, class)
        } else {
            self.render_plain(fragment_tag, text, url, class)
        }
    }

    fn render_semantic(
        &self,
        fragment_tag: Option<&str>,
        text: &str,
        url: Option<&str>,
        class: Option<&str>,
    ) -> String {
        let ctx = self.context;
        match (fragment_tag, url) {
            (Some(tag), url) => {
                let mut inner = ctx.content_tag("span", text, &[("itemprop", Some("title"))]);
                if let Some(url) = url {
                    inner = ctx.link_to(&inner, url, &[("itemprop", Some("url"))]);
                }
                ctx.content_tag(tag, &inner, &[("class", class), ITEMSCOPE, ITEMTYPE])
            }
            (None, Some(url)) => {
                let title = ctx.content_tag("span", text, &[("itemprop", Some("title"))]);
                let link = ctx.link_to(&title, url, &[("class", class), ("itemprop", Some("url"))]);
                ctx.content_tag("div", &link, &[ITEMSCOPE, ITEMTYPE])
            }
            (None, None) => {
                let title = ctx.content_tag(
                    "span",
                    text,
                    &[("class", class), ("itemprop", Some("title"))],
                );
                ctx.content_tag("div", &title, &[ITEMSCOPE, ITEMTYPE])
            }
        }
    }

    fn render_plain(
        &self,
        fragment_tag: Option<&str>,
        text: String,
        url: Option<&str>,
        class: Option<&str>,
    ) -> String {
        let ctx = self.context;
        match (fragment_tag, url, class) {
            (Some(tag), url, class) => {
                let inner = match url {
                    Some(url) => ctx.link_to(&text, url, &[]),
                    None => text,
                };
                ctx.content_tag(tag, &inner, &[("class", class)])
            }
            (None, Some(url), class) => ctx.link_to(&text, url, &[("class", class)]),
            (None, None, Some(class)) => ctx.content_tag("span", &text, &[("class", Some(class))]),
            (None, None, None) => text,
        }
    }
}
