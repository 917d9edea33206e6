//! Profile completeness.
//!
//! - `breakdown`: the derived `CompletenessBreakdown` value object
//! - `calculator`: the ten weighted checks and section rollups

mod breakdown;
mod calculator;

pub use breakdown::{CompletenessBreakdown, PROFILE_NOT_FOUND};
pub use calculator::{
    CHECK_POINTS, CheckResults, CompletenessCheck, MIN_BIO_CHARS, MIN_SKILLS, calculate,
    is_real_name,
};
