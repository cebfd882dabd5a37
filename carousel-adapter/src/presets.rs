use core::num::NonZeroUsize;

use carousel::WindowConfig;

/// Virtual length of the "similar restaurants" carousel.
pub const SIMILAR_VIRTUAL_TOTAL: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => panic!("SIMILAR_VIRTUAL_TOTAL must be non-zero"),
};

/// Virtual length of the "recommended restaurants" carousel.
pub const RECOMMENDED_VIRTUAL_TOTAL: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(n) => n,
    None => panic!("RECOMMENDED_VIRTUAL_TOTAL must be non-zero"),
};

/// 20 virtual slots, 2 per page below 768px and 3 at or above.
pub fn similar_config() -> WindowConfig {
    WindowConfig::new(SIMILAR_VIRTUAL_TOTAL)
}

/// 12 virtual slots, 2 per page below 768px and 3 at or above.
pub fn recommended_config() -> WindowConfig {
    WindowConfig::new(RECOMMENDED_VIRTUAL_TOTAL)
}
