use alloc::collections::BTreeMap;

/// A handle to a viewport subscription.
///
/// Handles are not `Clone`: giving one back through `unsubscribe` ends the subscription.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(pub(crate) u64);

/// A source of viewport widths with an explicit subscription lifecycle.
///
/// Hosts subscribe when they mount, drain pending resizes with `take_resize` before deriving
/// pages, and unsubscribe when they unmount.
pub trait ViewportProvider {
    /// The latest known viewport width.
    fn width(&self) -> u32;

    fn subscribe(&mut self) -> Subscription;

    /// Ends a subscription. Returns `false` if it was not active.
    fn unsubscribe(&mut self, subscription: Subscription) -> bool;

    /// Returns the latest width if it changed since the last call for this subscription.
    ///
    /// Bursts of resizes collapse into a single pending width.
    fn take_resize(&mut self, subscription: &Subscription) -> Option<u32>;
}

/// An in-memory [`ViewportProvider`] driven by the host's resize events.
#[derive(Clone, Debug, Default)]
pub struct ViewportSignal {
    width: u32,
    next_id: u64,
    pending: BTreeMap<u64, bool>,
}

impl ViewportSignal {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Records a resize. Returns `true` if the width changed.
    pub fn set_width(&mut self, width: u32) -> bool {
        if self.width == width {
            return false;
        }
        atrace!(from = self.width, to = width, "ViewportSignal::set_width");
        self.width = width;
        for pending in self.pending.values_mut() {
            *pending = true;
        }
        true
    }

    pub fn subscriber_count(&self) -> usize {
        self.pending.len()
    }
}

impl ViewportProvider for ViewportSignal {
    fn width(&self) -> u32 {
        self.width
    }

    fn subscribe(&mut self) -> Subscription {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.insert(id, false);
        Subscription(id)
    }

    fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.pending.remove(&subscription.0).is_some()
    }

    fn take_resize(&mut self, subscription: &Subscription) -> Option<u32> {
        let pending = self.pending.get_mut(&subscription.0)?;
        if !core::mem::take(pending) {
            return None;
        }
        Some(self.width)
    }
}
