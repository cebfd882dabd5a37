use alloc::sync::Arc;

use carousel::{Window, WindowConfig};

use crate::{Subscription, ViewportProvider, recommended_config, similar_config};

/// Identifies one of the detail page's carousels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Carousel {
    Similar,
    Recommended,
}

/// The carousels of a restaurant detail page, wired to a viewport provider.
///
/// Each carousel is an independent [`Window`]; they share nothing but the viewport width. The
/// host drives it by calling:
/// - `mount` / `unmount` around the page's lifetime
/// - `sync` before deriving pages (applies the latest coalesced resize)
/// - `replace_*` when a fetch completes
#[derive(Debug)]
pub struct DetailCarousels<T> {
    similar: Window<T>,
    recommended: Window<T>,
    subscription: Option<Subscription>,
}

impl<T> DetailCarousels<T> {
    /// Creates both carousels from the standard presets.
    pub fn new() -> Self {
        Self::with_configs(similar_config(), recommended_config())
    }

    pub fn with_configs(similar: WindowConfig, recommended: WindowConfig) -> Self {
        Self {
            similar: Window::new(similar),
            recommended: Window::new(recommended),
            subscription: None,
        }
    }

    pub fn window(&self, carousel: Carousel) -> &Window<T> {
        match carousel {
            Carousel::Similar => &self.similar,
            Carousel::Recommended => &self.recommended,
        }
    }

    pub fn window_mut(&mut self, carousel: Carousel) -> &mut Window<T> {
        match carousel {
            Carousel::Similar => &mut self.similar,
            Carousel::Recommended => &mut self.recommended,
        }
    }

    pub fn similar(&self) -> &Window<T> {
        &self.similar
    }

    pub fn recommended(&self) -> &Window<T> {
        &self.recommended
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribes to `provider` and applies its current width to both carousels.
    ///
    /// Mounting twice is a no-op.
    pub fn mount<P: ViewportProvider + ?Sized>(&mut self, provider: &mut P) {
        if self.subscription.is_some() {
            return;
        }
        self.subscription = Some(provider.subscribe());
        let width = provider.width();
        adebug!(width, "DetailCarousels::mount");
        self.set_viewport_width(width);
    }

    /// Applies a pending resize from `provider`, if any.
    ///
    /// Returns `true` when a new width was applied. Always `false` while unmounted.
    pub fn sync<P: ViewportProvider + ?Sized>(&mut self, provider: &mut P) -> bool {
        let Some(subscription) = &self.subscription else {
            return false;
        };
        let Some(width) = provider.take_resize(subscription) else {
            return false;
        };
        self.set_viewport_width(width);
        true
    }

    /// Ends the viewport subscription. Returns `false` if the host was not mounted.
    pub fn unmount<P: ViewportProvider + ?Sized>(&mut self, provider: &mut P) -> bool {
        let Some(subscription) = self.subscription.take() else {
            return false;
        };
        adebug!("DetailCarousels::unmount");
        provider.unsubscribe(subscription)
    }

    pub fn set_viewport_width(&mut self, viewport_width: u32) {
        atrace!(viewport_width, "DetailCarousels::set_viewport_width");
        self.similar.set_viewport_width(viewport_width);
        self.recommended.set_viewport_width(viewport_width);
    }

    pub fn replace_similar(&mut self, records: impl Into<Arc<[T]>>) {
        self.similar.replace_records(records);
    }

    pub fn replace_recommended(&mut self, records: impl Into<Arc<[T]>>) {
        self.recommended.replace_records(records);
    }

    /// Returns both carousels to their first page.
    pub fn reset_pages(&mut self) {
        self.similar.reset_page();
        self.recommended.reset_page();
    }

    pub fn advance(&mut self, carousel: Carousel) -> usize {
        self.window_mut(carousel).advance()
    }

    pub fn retreat(&mut self, carousel: Carousel) -> usize {
        self.window_mut(carousel).retreat()
    }
}

impl<T> Default for DetailCarousels<T> {
    fn default() -> Self {
        Self::new()
    }
}
