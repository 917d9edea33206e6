//! Profile domain module.
//!
//! - `model`: `Profile`, `TalentProfile` and `ExperienceLevel`
//! - `source`: `ProfileSource` collaborator trait and `ProfileSnapshot`

mod model;
mod source;

pub use model::{ExperienceLevel, Profile, TalentProfile, present};
pub use source::{ProfileSnapshot, ProfileSource};
