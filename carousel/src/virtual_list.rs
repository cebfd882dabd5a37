use alloc::vec::Vec;

/// Repeats `records` end-to-end and truncates to exactly `virtual_total` items.
///
/// An empty input yields an empty list: there is nothing to repeat. Each repeated block keeps
/// the original relative order.
pub fn build_virtual_list<T: Clone>(records: &[T], virtual_total: usize) -> Vec<T> {
    if records.is_empty() {
        return Vec::new();
    }
    records.iter().cycle().take(virtual_total).cloned().collect()
}

/// Length of the virtual list for a raw list of `raw_len` records.
pub fn virtual_len(raw_len: usize, virtual_total: usize) -> usize {
    if raw_len == 0 { 0 } else { virtual_total }
}

/// Maps a position in the virtual list back to the raw record it repeats.
///
/// Returns `None` when there are no records.
pub fn source_index(virtual_index: usize, raw_len: usize) -> Option<usize> {
    virtual_index.checked_rem(raw_len)
}
