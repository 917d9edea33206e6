pub mod completeness;
pub mod config;
pub mod error;
pub mod matching;
pub mod onboarding;
pub mod profile;

// Re-export common error type
pub use error::{Result, TalentError};
