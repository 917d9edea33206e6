//! Completeness breakdown value object.

use serde::{Deserialize, Serialize};

/// Sentinel missing-field entry used when no profile record exists.
pub const PROFILE_NOT_FOUND: &str = "Perfil no encontrado";

/// Derived profile completion summary.
///
/// Section scores are independent UI rollups and do not have to add up to
/// `total`. Never persisted; recomputed whenever an input record changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessBreakdown {
    pub basic_info: u8,
    pub professional_info: u8,
    pub skills_and_bio: u8,
    /// Ten points per satisfied check, capped at 100
    pub total: u8,
    /// Labels of unsatisfied checks, in check order
    pub missing_fields: Vec<String>,
    /// One suggestion per unsatisfied check, in check order
    pub suggestions: Vec<String>,
}

impl CompletenessBreakdown {
    /// Breakdown returned when the profile record is absent.
    pub fn profile_not_found() -> Self {
        Self {
            missing_fields: vec![PROFILE_NOT_FOUND.to_string()],
            ..Self::default()
        }
    }

    pub fn is_profile_missing(&self) -> bool {
        self.total == 0 && self.missing_fields.len() == 1 && self.missing_fields[0] == PROFILE_NOT_FOUND
    }

    pub fn is_complete(&self) -> bool {
        self.total >= 100
    }
}
