pub mod config_service;
pub mod in_memory_onboarding_store;
pub mod json_profile_source;
pub mod paths;
pub mod storage;
pub mod toml_onboarding_store;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_onboarding_store::{InMemoryOnboardingStore, KeyValueOnboardingStore};
pub use crate::json_profile_source::JsonFileProfileSource;
pub use crate::paths::TalentHubPaths;
pub use crate::toml_onboarding_store::TomlOnboardingStore;
