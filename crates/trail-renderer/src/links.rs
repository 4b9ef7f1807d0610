//! Display-ready link lists.

use trail_crumbs::{CrumbError, Link};

use crate::options::RenderSettings;
use crate::resolver::CrumbResolver;

/// Key of the crumb prepended by `autoroot`.
pub const ROOT_KEY: &str = "root";

/// Turns a resolved crumb chain into the list that gets rendered.
///
/// Applied in order:
/// 1. `autoroot`: prepend the root crumb's links unless a link already has
///    the root key or no root crumb is defined.
/// 2. `transform_current_path`: point the last link at the request path.
/// 3. Drop a lone link unless `display_single_fragment` is set.
pub struct LinkListBuilder<'r, 'a> {
    resolver: &'r CrumbResolver<'a>,
}

impl<'r, 'a> LinkListBuilder<'r, 'a> {
    /// Create a builder that looks up the root crumb through `resolver`.
    pub fn new(resolver: &'r CrumbResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Build the display-ready list from `raw` without modifying it.
    ///
    /// # Errors
    ///
    /// Returns an error if the root crumb cannot be looked up.
    pub fn build(
        &self,
        raw: &[Link],
        settings: &RenderSettings,
        current_path: Option<&str>,
    ) -> Result<Vec<Link>, CrumbError> {
        let mut out = raw.to_vec();

        if settings.autoroot
            && !out.iter().any(|link| link.key.as_deref() == Some(ROOT_KEY))
            && self.resolver.is_defined(ROOT_KEY)
        {
            let root = self.resolver.own_links(ROOT_KEY, &[])?;
            out.splice(0..0, root);
        }

        if settings.transform_current_path
            && let Some(path) = current_path
            && let Some(last) = out.last_mut()
        {
            last.url = Some(path.to_owned());
        }

        if out.len() == 1 && !settings.display_single_fragment {
            out.clear();
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::{rootless_crumbs, shop_crumbs, UnkeyedSource};

    fn urls(links: &[Link]) -> Vec<Option<&str>> {
        links.iter().map(|link| link.url.as_deref()).collect()
    }

    fn texts(links: &[Link]) -> Vec<&str> {
        links.iter().map(|link| link.text.as_str()).collect()
    }

    #[test]
    fn test_build_does_not_mutate_input() {
        let crumbs = shop_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "products", Vec::new());
        let raw = resolver.resolve().unwrap();

        let built = LinkListBuilder::new(&resolver)
            .build(raw, &RenderSettings::default(), Some("/current"))
            .unwrap();

        assert_eq!(built.last().unwrap().url.as_deref(), Some("/current"));
        assert_eq!(raw.last().unwrap().url.as_deref(), Some("/products"));
    }

    #[test]
    fn test_autoroot_not_duplicated_when_chain_has_root() {
        let crumbs = shop_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "product", vec!["Widget".to_owned()]);
        let raw = resolver.resolve().unwrap();
        let builder = LinkListBuilder::new(&resolver);

        let first = builder.build(raw, &RenderSettings::default(), None).unwrap();
        let second = builder.build(raw, &RenderSettings::default(), None).unwrap();

        assert_eq!(texts(&first), vec!["Home", "Products", "Widget"]);
        assert_eq!(first, second);
        let roots = first
            .iter()
            .filter(|link| link.key.as_deref() == Some(ROOT_KEY))
            .count();
        assert_eq!(roots, 1);
    }

    #[test]
    fn test_autoroot_not_duplicated_for_unkeyed_source() {
        let resolver = CrumbResolver::new(&UnkeyedSource, "page", Vec::new());
        let raw = resolver.resolve().unwrap();

        let built = LinkListBuilder::new(&resolver)
            .build(raw, &RenderSettings::default(), None)
            .unwrap();

        assert_eq!(texts(&built), vec!["Home", "Page"]);
    }

    #[test]
    fn test_autoroot_prepends_root_links() {
        let crumbs = shop_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "product", Vec::new());
        let raw = vec![Link::new("Orphan").with_url("/orphan")];

        let built = LinkListBuilder::new(&resolver)
            .build(&raw, &RenderSettings::default(), None)
            .unwrap();

        assert_eq!(texts(&built), vec!["Home", "Orphan"]);
        assert!(!built[0].is_current());
    }

    #[test]
    fn test_autoroot_disabled() {
        let crumbs = shop_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "product", Vec::new());
        let raw = vec![Link::new("A"), Link::new("B")];
        let settings = RenderSettings {
            autoroot: false,
            ..RenderSettings::default()
        };

        let built = LinkListBuilder::new(&resolver)
            .build(&raw, &settings, None)
            .unwrap();

        assert_eq!(texts(&built), vec!["A", "B"]);
    }

    #[test]
    fn test_autoroot_without_root_crumb() {
        let crumbs = rootless_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "product", vec!["Widget".to_owned()]);
        let raw = resolver.resolve().unwrap();

        let built = LinkListBuilder::new(&resolver)
            .build(raw, &RenderSettings::default(), None)
            .unwrap();

        assert_eq!(texts(&built), vec!["Products", "Widget"]);
    }

    #[test]
    fn test_transform_current_path_disabled_keeps_url() {
        let crumbs = shop_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "product", vec!["Widget".to_owned()]);
        let raw = resolver.resolve().unwrap();
        let settings = RenderSettings {
            transform_current_path: false,
            ..RenderSettings::default()
        };

        let built = LinkListBuilder::new(&resolver)
            .build(raw, &settings, Some("/somewhere"))
            .unwrap();

        assert_eq!(
            urls(&built),
            vec![Some("/"), Some("/products"), Some("/products/widget")]
        );
    }

    #[test]
    fn test_transform_current_path_without_request() {
        let crumbs = shop_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "products", Vec::new());
        let raw = resolver.resolve().unwrap();

        let built = LinkListBuilder::new(&resolver)
            .build(raw, &RenderSettings::default(), None)
            .unwrap();

        assert_eq!(urls(&built), vec![Some("/"), Some("/products")]);
    }

    #[test]
    fn test_single_fragment_dropped() {
        let crumbs = shop_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "root", Vec::new());
        let raw = resolver.resolve().unwrap();

        let built = LinkListBuilder::new(&resolver)
            .build(raw, &RenderSettings::default(), Some("/"))
            .unwrap();

        assert!(built.is_empty());
    }

    #[test]
    fn test_single_fragment_kept_when_requested() {
        let crumbs = shop_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "root", Vec::new());
        let raw = resolver.resolve().unwrap();
        let settings = RenderSettings {
            display_single_fragment: true,
            ..RenderSettings::default()
        };

        let built = LinkListBuilder::new(&resolver)
            .build(raw, &settings, Some("/home"))
            .unwrap();

        assert_eq!(texts(&built), vec!["Home"]);
        assert_eq!(built[0].url.as_deref(), Some("/home"));
    }

    #[test]
    fn test_empty_chain_stays_empty_without_root() {
        let crumbs = rootless_crumbs();
        let resolver = CrumbResolver::new(&crumbs, "", Vec::new());

        let built = LinkListBuilder::new(&resolver)
            .build(&[], &RenderSettings::default(), Some("/"))
            .unwrap();

        assert!(built.is_empty());
    }
}
