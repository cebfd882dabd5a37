/// A lightweight, serializable snapshot of a window's mutable state.
///
/// The record list is not part of the snapshot: it belongs to whoever fetched it. Restoring a
/// snapshot re-applies the viewport width first and then clamps the page index to the new range.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub page_index: usize,
    pub viewport_width: u32,
}
