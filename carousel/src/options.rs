use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

use crate::paging;

const fn non_zero(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("non_zero: zero"),
    }
}

/// Viewport width at which the default table switches to the wide page size.
pub const DEFAULT_BREAKPOINT: u32 = 768;
/// Page size below [`DEFAULT_BREAKPOINT`].
pub const DEFAULT_NARROW_PER_PAGE: NonZeroUsize = non_zero(2);
/// Page size at or above [`DEFAULT_BREAKPOINT`].
pub const DEFAULT_WIDE_PER_PAGE: NonZeroUsize = non_zero(3);

/// Errors returned by the fallible configuration constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `virtual_total` must be at least 1.
    ZeroVirtualTotal,
    /// Every page size in a breakpoint table must be at least 1.
    ZeroPerPage { min_width: Option<u32> },
    /// Breakpoint steps must be strictly ascending by `min_width`.
    UnorderedBreakpoints { previous: u32, next: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroVirtualTotal => f.write_str("virtual total must be at least 1"),
            Self::ZeroPerPage { min_width: None } => {
                f.write_str("base page size must be at least 1")
            }
            Self::ZeroPerPage {
                min_width: Some(w),
            } => write!(f, "page size for min width {w} must be at least 1"),
            Self::UnorderedBreakpoints { previous, next } => write!(
                f,
                "breakpoints must be strictly ascending (min width {next} follows {previous})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// What a window does with its page index when a viewport change alters the page size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizePolicy {
    /// Clamp the page index into the new `[0, max_page_index]` range.
    #[default]
    Clamp,
    /// Move to the page that contains the first item that was visible before the change, then
    /// clamp.
    AnchorFirstItem,
    /// Leave the page index alone. Reads past the new last page yield a short or empty page
    /// until the next navigation or record replacement.
    Lazy,
}

/// One step of a breakpoint table: widths `>= min_width` use `per_page` items per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    pub min_width: u32,
    pub per_page: NonZeroUsize,
}

/// A viewport-width → page-size table.
///
/// Widths below every step use `base`; otherwise the step with the largest `min_width` that is
/// `<= width` wins. Steps are kept strictly ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BreakpointsDef"))]
pub struct Breakpoints {
    base: NonZeroUsize,
    steps: Vec<Breakpoint>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BreakpointsDef {
    base: NonZeroUsize,
    steps: Vec<Breakpoint>,
}

#[cfg(feature = "serde")]
impl TryFrom<BreakpointsDef> for Breakpoints {
    type Error = ConfigError;

    fn try_from(def: BreakpointsDef) -> Result<Self, Self::Error> {
        let mut out = Self::new(def.base);
        for step in def.steps {
            out = out.with_step(step.min_width, step.per_page)?;
        }
        Ok(out)
    }
}

impl Breakpoints {
    /// A table with a single page size for every width.
    pub fn new(base: NonZeroUsize) -> Self {
        Self {
            base,
            steps: Vec::new(),
        }
    }

    /// `narrow` below `breakpoint`, `wide` at or above it.
    pub fn two_tier(breakpoint: u32, narrow: NonZeroUsize, wide: NonZeroUsize) -> Self {
        Self {
            base: narrow,
            steps: alloc::vec![Breakpoint {
                min_width: breakpoint,
                per_page: wide,
            }],
        }
    }

    /// Builds a table from plain integers, validating every entry.
    pub fn try_new(
        base: usize,
        steps: impl IntoIterator<Item = (u32, usize)>,
    ) -> Result<Self, ConfigError> {
        let base = NonZeroUsize::new(base).ok_or(ConfigError::ZeroPerPage { min_width: None })?;
        let mut out = Self::new(base);
        for (min_width, per_page) in steps {
            let per_page = NonZeroUsize::new(per_page).ok_or(ConfigError::ZeroPerPage {
                min_width: Some(min_width),
            })?;
            out = out.with_step(min_width, per_page)?;
        }
        Ok(out)
    }

    /// Appends a step. `min_width` must be greater than every existing step.
    pub fn with_step(mut self, min_width: u32, per_page: NonZeroUsize) -> Result<Self, ConfigError> {
        if let Some(last) = self.steps.last() {
            if min_width <= last.min_width {
                return Err(ConfigError::UnorderedBreakpoints {
                    previous: last.min_width,
                    next: min_width,
                });
            }
        }
        self.steps.push(Breakpoint {
            min_width,
            per_page,
        });
        Ok(self)
    }

    pub fn base(&self) -> NonZeroUsize {
        self.base
    }

    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }

    pub fn per_page_for(&self, viewport_width: u32) -> NonZeroUsize {
        self.steps
            .iter()
            .rev()
            .find(|step| viewport_width >= step.min_width)
            .map_or(self.base, |step| step.per_page)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::two_tier(
            DEFAULT_BREAKPOINT,
            DEFAULT_NARROW_PER_PAGE,
            DEFAULT_WIDE_PER_PAGE,
        )
    }
}

/// Configuration for [`crate::Window`].
///
/// Immutable for the lifetime of a window. Both page sizes and the virtual total are
/// `NonZeroUsize`, so `max_page_index` is always defined.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Length the record list is repeated/truncated to before paging.
    pub virtual_total: NonZeroUsize,
    pub breakpoints: Breakpoints,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resize_policy: ResizePolicy,
}

impl WindowConfig {
    /// Creates a config with the default two-tier table (2 below 768px, 3 at or above).
    pub fn new(virtual_total: NonZeroUsize) -> Self {
        Self {
            virtual_total,
            breakpoints: Breakpoints::default(),
            resize_policy: ResizePolicy::default(),
        }
    }

    pub fn try_new(virtual_total: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(virtual_total)
            .map(Self::new)
            .ok_or(ConfigError::ZeroVirtualTotal)
    }

    pub fn with_virtual_total(mut self, virtual_total: NonZeroUsize) -> Self {
        self.virtual_total = virtual_total;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_resize_policy(mut self, resize_policy: ResizePolicy) -> Self {
        self.resize_policy = resize_policy;
        self
    }

    pub fn items_per_page(&self, viewport_width: u32) -> NonZeroUsize {
        paging::items_per_page(viewport_width, self)
    }

    pub fn max_page_index(&self, per_page: NonZeroUsize) -> usize {
        paging::max_page_index(self, per_page)
    }
}
