//! A headless, responsive paging engine for carousel panels.
//!
//! For host-level utilities (viewport signals, presets, seeded selection), see the
//! `carousel-adapter` crate.
//!
//! The engine takes a raw, possibly short, list of records and:
//! - repeats it end-to-end up to a fixed virtual length so every page is full
//! - splits the virtual list into pages whose size depends on the viewport width
//! - exposes wraparound navigation and per-render identities for each visible slot
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the record list (replaced wholesale whenever a fetch completes)
//! - the viewport width (pushed on resize)
//! - navigation commands (`advance` / `retreat`)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod paging;
mod state;
mod types;
mod virtual_list;
mod window;


pub use options::{
    Breakpoint, Breakpoints, ConfigError, DEFAULT_BREAKPOINT, DEFAULT_NARROW_PER_PAGE,
    DEFAULT_WIDE_PER_PAGE, ResizePolicy, WindowConfig,
};
pub use paging::{
    for_each_page_slot, items_per_page, max_page_index, page_count, page_range, visible_page,
};
pub use state::WindowState;
pub use types::{PageItem, PageSlot, RecordKey, RenderKey, VirtualRange};
pub use virtual_list::{build_virtual_list, source_index, virtual_len};
pub use window::{OnChangeCallback, Window};
