use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::paging;
use crate::virtual_list;
use crate::{
    PageItem, PageSlot, RecordKey, RenderKey, ResizePolicy, VirtualRange, WindowConfig,
    WindowState,
};

/// A callback fired after a window's observable state changes.
pub type OnChangeCallback<T> = Arc<dyn Fn(&Window<T>) + Send + Sync>;

/// A responsive, wraparound paging window over a record list.
///
/// This type is intentionally UI-agnostic:
/// - It does not fetch anything. The host replaces the record list wholesale.
/// - It does not listen for resizes. The host pushes the viewport width.
/// - Everything except `page_index` is derived on read.
pub struct Window<T> {
    config: WindowConfig,
    records: Arc<[T]>,
    viewport_width: u32,
    page_index: usize,
    on_change: Option<OnChangeCallback<T>>,

    notify_depth: usize,
    notify_pending: bool,
}

impl<T> Window<T> {
    /// Creates an empty window at page 0 with a viewport width of 0.
    pub fn new(config: WindowConfig) -> Self {
        cdebug!(
            virtual_total = config.virtual_total.get(),
            steps = config.breakpoints.steps().len(),
            "Window::new"
        );
        Self {
            config,
            records: Arc::from(Vec::new()),
            viewport_width: 0,
            page_index: 0,
            on_change: None,
            notify_depth: 0,
            notify_pending: false,
        }
    }

    pub fn with_records(config: WindowConfig, records: impl Into<Arc<[T]>>) -> Self {
        let mut w = Self::new(config);
        w.records = records.into();
        w
    }

    pub fn with_viewport_width(mut self, viewport_width: u32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Window<T>) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify(&mut self) {
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// A typical case is a fetch completing together with a resize: replace the records and set
    /// the width inside one batch so the host re-renders once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::take(&mut self.notify_pending) {
            self.notify();
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Returns a shared handle to the current record list.
    pub fn shared_records(&self) -> Arc<[T]> {
        Arc::clone(&self.records)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn items_per_page(&self) -> usize {
        paging::items_per_page(self.viewport_width, &self.config).get()
    }

    /// Highest valid page index for the current viewport width.
    ///
    /// Derived from the configuration only, so it stays meaningful with no records. Hosts
    /// typically hide navigation controls when this is 0.
    pub fn max_page_index(&self) -> usize {
        let per_page = paging::items_per_page(self.viewport_width, &self.config);
        paging::max_page_index(&self.config, per_page)
    }

    pub fn page_count(&self) -> usize {
        self.max_page_index() + 1
    }

    pub fn is_navigable(&self) -> bool {
        self.max_page_index() > 0
    }

    /// Length of the padded list: `virtual_total`, or 0 with no records.
    pub fn virtual_len(&self) -> usize {
        virtual_list::virtual_len(self.records.len(), self.config.virtual_total.get())
    }

    /// The virtual-list range of the current page.
    pub fn visible_range(&self) -> VirtualRange {
        let per_page = paging::items_per_page(self.viewport_width, &self.config);
        paging::page_range(self.page_index, per_page, self.virtual_len())
    }

    /// Moves to the next page, wrapping from the last page to the first.
    ///
    /// Returns the new page index.
    pub fn advance(&mut self) -> usize {
        let max = self.max_page_index();
        let next = if self.page_index >= max {
            0
        } else {
            self.page_index + 1
        };
        ctrace!(from = self.page_index, to = next, max, "Window::advance");
        self.set_page_index(next);
        next
    }

    /// Moves to the previous page, wrapping from the first page to the last.
    ///
    /// An index left past the last page (only possible under [`ResizePolicy::Lazy`]) lands
    /// on the last page rather than one below the stale index, so the result is always in
    /// range. Returns the new page index.
    pub fn retreat(&mut self) -> usize {
        let max = self.max_page_index();
        let next = if self.page_index == 0 {
            max
        } else {
            (self.page_index - 1).min(max)
        };
        ctrace!(from = self.page_index, to = next, max, "Window::retreat");
        self.set_page_index(next);
        next
    }

    /// Jumps to `page_index`, clamped to `[0, max_page_index]`.
    ///
    /// Returns the applied page index.
    pub fn go_to_page(&mut self, page_index: usize) -> usize {
        let clamped = page_index.min(self.max_page_index());
        self.set_page_index(clamped);
        clamped
    }

    fn set_page_index(&mut self, page_index: usize) {
        if self.page_index == page_index {
            return;
        }
        self.page_index = page_index;
        self.notify();
    }

    /// Replaces the record list and returns to the first page.
    ///
    /// The reset always happens, so a navigation issued before a fetch completed can never
    /// leave the window on a page that the new list does not have.
    pub fn replace_records(&mut self, records: impl Into<Arc<[T]>>) {
        self.records = records.into();
        cdebug!(
            len = self.records.len(),
            prev_page_index = self.page_index,
            "Window::replace_records"
        );
        self.page_index = 0;
        self.notify();
    }

    /// Resets the page index to 0 without touching the records.
    pub fn reset_page(&mut self) {
        self.set_page_index(0);
    }

    /// Updates the viewport width and reconciles the page index per
    /// [`WindowConfig::resize_policy`].
    pub fn set_viewport_width(&mut self, viewport_width: u32) {
        if self.viewport_width == viewport_width {
            return;
        }
        let prev_per_page = self.items_per_page();
        self.viewport_width = viewport_width;
        let per_page = self.items_per_page();

        if per_page != prev_per_page {
            let max = self.max_page_index();
            self.page_index = match self.config.resize_policy {
                ResizePolicy::Clamp => self.page_index.min(max),
                ResizePolicy::AnchorFirstItem => {
                    let first = self.page_index.saturating_mul(prev_per_page);
                    (first / per_page).min(max)
                }
                ResizePolicy::Lazy => self.page_index,
            };
            ctrace!(
                viewport_width,
                prev_per_page,
                per_page,
                page_index = self.page_index,
                "Window::set_viewport_width"
            );
        }
        self.notify();
    }

    /// Returns a lightweight snapshot of the window's mutable state.
    pub fn state(&self) -> WindowState {
        WindowState {
            page_index: self.page_index,
            viewport_width: self.viewport_width,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// The page index is clamped to the range implied by the restored width, whatever the
    /// resize policy.
    pub fn restore_state(&mut self, state: WindowState) {
        self.batch_update(|w| {
            w.set_viewport_width(state.viewport_width);
            w.go_to_page(state.page_index);
        });
    }

    /// Calls `f` for every slot of the current page, in slot order, without allocating.
    pub fn for_each_visible_slot<'a>(&'a self, f: impl FnMut(PageSlot, &'a T)) {
        let max_page_index = self.max_page_index();
        if self.page_index > max_page_index {
            cwarn!(
                page_index = self.page_index,
                max_page_index,
                "Window: page index past the last page"
            );
        }
        paging::for_each_page_slot(
            &self.records,
            self.page_index,
            self.viewport_width,
            &self.config,
            f,
        );
    }
}

impl<T: RecordKey> Window<T> {
    /// Calls `f` for every item of the current page, with its render identity.
    pub fn for_each_visible<'a>(&'a self, mut f: impl FnMut(PageItem<'a, T>)) {
        self.for_each_visible_slot(|slot, record| {
            f(PageItem {
                key: RenderKey::new(record.record_key(), slot.page_index, slot.slot),
                slot,
                record,
            });
        });
    }

    /// The current page, each record tagged with `"{key}-{page}-{slot}"`.
    pub fn visible_page(&self) -> Vec<PageItem<'_, T>> {
        let mut out = Vec::with_capacity(self.items_per_page());
        self.for_each_visible(|item| out.push(item));
        out
    }
}

impl<T> Clone for Window<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            records: Arc::clone(&self.records),
            viewport_width: self.viewport_width,
            page_index: self.page_index,
            on_change: self.on_change.clone(),
            notify_depth: 0,
            notify_pending: false,
        }
    }
}

impl<T> fmt::Debug for Window<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("config", &self.config)
            .field("len", &self.records.len())
            .field("viewport_width", &self.viewport_width)
            .field("page_index", &self.page_index)
            .finish_non_exhaustive()
    }
}
