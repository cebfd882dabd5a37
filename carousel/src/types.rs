use alloc::format;
use alloc::string::String;
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VirtualRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Where a visible record sits: in the page, in the virtual list, and in the raw list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSlot {
    pub page_index: usize,
    /// Position within the page, starting at 0.
    pub slot: usize,
    /// Position within the padded (virtual) list.
    pub virtual_index: usize,
    /// Position within the raw record list this slot repeats.
    pub source_index: usize,
}

/// Exposes the stable identity of a record (e.g. a place id).
///
/// The engine never looks at any other part of a record.
pub trait RecordKey {
    fn record_key(&self) -> &str;
}

impl RecordKey for str {
    fn record_key(&self) -> &str {
        self
    }
}

impl RecordKey for String {
    fn record_key(&self) -> &str {
        self.as_str()
    }
}

impl<T: RecordKey + ?Sized> RecordKey for &T {
    fn record_key(&self) -> &str {
        (**self).record_key()
    }
}

/// A per-render identity: `"{record_key}-{page_index}-{slot}"`.
///
/// Padding repeats records, so the same record key can show up more than once on a page. The
/// page index and slot keep every visible item individually addressable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RenderKey(String);

impl RenderKey {
    pub fn new(record_key: &str, page_index: usize, slot: usize) -> Self {
        Self(format!("{record_key}-{page_index}-{slot}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A record on the visible page, with its render identity.
#[derive(Debug)]
pub struct PageItem<'a, T> {
    pub key: RenderKey,
    pub slot: PageSlot,
    pub record: &'a T,
}

impl<T> Clone for PageItem<'_, T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            slot: self.slot,
            record: self.record,
        }
    }
}

impl<T: PartialEq> PartialEq for PageItem<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.slot == other.slot && self.record == other.record
    }
}
