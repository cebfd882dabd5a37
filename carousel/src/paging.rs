use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::virtual_list;
use crate::{PageItem, PageSlot, RecordKey, RenderKey, VirtualRange, WindowConfig};

/// Page size for a viewport width. Widths at a breakpoint use that breakpoint's size.
pub fn items_per_page(viewport_width: u32, config: &WindowConfig) -> NonZeroUsize {
    config.breakpoints.per_page_for(viewport_width)
}

/// `ceil(virtual_total / per_page) - 1`.
///
/// Never underflows: `virtual_total >= 1` makes the quotient at least 1.
pub fn max_page_index(config: &WindowConfig, per_page: NonZeroUsize) -> usize {
    config.virtual_total.get().div_ceil(per_page.get()) - 1
}

pub fn page_count(config: &WindowConfig, per_page: NonZeroUsize) -> usize {
    config.virtual_total.get().div_ceil(per_page.get())
}

/// The virtual-list range covered by `page_index`, clipped to `virtual_len`.
///
/// A page past the end of the list yields a short or empty range.
pub fn page_range(page_index: usize, per_page: NonZeroUsize, virtual_len: usize) -> VirtualRange {
    let start = page_index.saturating_mul(per_page.get());
    let end = start.saturating_add(per_page.get());
    VirtualRange {
        start_index: start.min(virtual_len),
        end_index: end.min(virtual_len),
    }
}

/// Calls `f` for every slot of a page, in slot order, without allocating.
pub fn for_each_page_slot<'a, T>(
    records: &'a [T],
    page_index: usize,
    viewport_width: u32,
    config: &WindowConfig,
    mut f: impl FnMut(PageSlot, &'a T),
) {
    let per_page = items_per_page(viewport_width, config);
    let len = virtual_list::virtual_len(records.len(), config.virtual_total.get());
    let range = page_range(page_index, per_page, len);

    for (slot, virtual_index) in (range.start_index..range.end_index).enumerate() {
        let Some(source_index) = virtual_list::source_index(virtual_index, records.len()) else {
            return;
        };
        f(
            PageSlot {
                page_index,
                slot,
                virtual_index,
                source_index,
            },
            &records[source_index],
        );
    }
}

/// The records on page `page_index`, each tagged with a `"{key}-{page}-{slot}"` identity.
///
/// Total: an empty record list gives an empty page, and so does a page past the end.
pub fn visible_page<'a, T: RecordKey>(
    records: &'a [T],
    page_index: usize,
    viewport_width: u32,
    config: &WindowConfig,
) -> Vec<PageItem<'a, T>> {
    let mut out = Vec::with_capacity(items_per_page(viewport_width, config).get());
    for_each_page_slot(records, page_index, viewport_width, config, |slot, record| {
        out.push(PageItem {
            key: RenderKey::new(record.record_key(), slot.page_index, slot.slot),
            slot,
            record,
        });
    });
    out
}
