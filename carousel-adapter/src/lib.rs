//! Host-side utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only knows about records, widths and page indexes.
//! This crate provides small, framework-neutral helpers a detail page needs around it:
//!
//! - A viewport-width signal with an explicit subscribe/unsubscribe lifecycle
//! - Presets for the "similar" and "recommended" carousels
//! - Seeded selection for the recommended carousel (per-category sampling + shuffle)
//! - A host that owns both windows and keeps them in sync with the viewport
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod presets;
mod shuffle;
mod viewport;

#[cfg(test)]
mod tests;

pub use host::{Carousel, DetailCarousels};
pub use presets::{
    RECOMMENDED_VIRTUAL_TOTAL, SIMILAR_VIRTUAL_TOTAL, recommended_config, similar_config,
};
pub use shuffle::{
    RECOMMENDED_CATEGORIES, RECOMMENDED_LIMIT, RECOMMENDED_PER_CATEGORY, pick_recommended, shuffle,
};
pub use viewport::{Subscription, ViewportProvider, ViewportSignal};
