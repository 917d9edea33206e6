//! Wizard steps and the rules that move between them automatically.

use serde::{Deserialize, Serialize};

use crate::completeness::CompletenessBreakdown;

/// Steps of the onboarding wizard, indexed from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Welcome = 0,
    BasicInfo = 1,
    ProfessionalInfo = 2,
    SkillsAndEducation = 3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Welcome,
        WizardStep::BasicInfo,
        WizardStep::ProfessionalInfo,
        WizardStep::SkillsAndEducation,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// How automatic advance interacts with manual step changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationPolicy {
    /// Automatic advance re-applies immediately after a manual step change.
    #[default]
    ForwardOnly,
    /// A manual step change holds until live completeness increases.
    RespectManual,
}

/// Thresholds used to derive step completion and the step floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRules {
    /// Minimum `basic_info` for the basics to count as complete
    pub basic_complete_threshold: u8,
    /// Below this total, a user with complete basics stays on professional info
    pub early_step_threshold: u8,
}

impl Default for StepRules {
    fn default() -> Self {
        Self {
            basic_complete_threshold: 100,
            early_step_threshold: 30,
        }
    }
}

impl StepRules {
    pub fn is_basic_complete(&self, breakdown: &CompletenessBreakdown) -> bool {
        breakdown.basic_info >= self.basic_complete_threshold
    }

    /// Completion flag for every wizard step, in index order.
    pub fn step_completion(&self, breakdown: &CompletenessBreakdown) -> [bool; 4] {
        WizardStep::ALL.map(|step| match step {
            WizardStep::Welcome => breakdown.basic_info > 0,
            WizardStep::BasicInfo => breakdown.basic_info >= 100,
            WizardStep::ProfessionalInfo => breakdown.professional_info >= 100,
            WizardStep::SkillsAndEducation => breakdown.skills_and_bio >= 100,
        })
    }

    /// Lowest step the wizard may sit on for this breakdown.
    pub fn target_step(&self, breakdown: &CompletenessBreakdown) -> u32 {
        if !self.is_basic_complete(breakdown) {
            WizardStep::BasicInfo.index()
        } else if breakdown.total < self.early_step_threshold {
            WizardStep::ProfessionalInfo.index()
        } else {
            WizardStep::SkillsAndEducation.index()
        }
    }
}

/// When `current` is completed, returns the first later step that is not.
pub fn next_incomplete_step(current: u32, completion: &[bool]) -> Option<u32> {
    let current_index = current as usize;
    if !completion.get(current_index).copied().unwrap_or(false) {
        return None;
    }
    completion
        .iter()
        .enumerate()
        .skip(current_index + 1)
        .find(|(_, completed)| !**completed)
        .map(|(index, _)| index as u32)
}
