//! Profile completeness calculator.
//!
//! A pure function over the profile records: ten independent checks worth ten
//! points each, plus three independently weighted section rollups for the UI.
//! Absent records or fields never fail the calculation, they only leave the
//! corresponding checks unsatisfied.

use super::breakdown::CompletenessBreakdown;
use crate::profile::{Profile, TalentProfile, present};

/// Points awarded per satisfied check.
pub const CHECK_POINTS: u8 = 10;
pub const MIN_SKILLS: usize = 3;
pub const MIN_BIO_CHARS: usize = 50;

/// Placeholder written by the sign-up flow when no name was given.
const NAME_PLACEHOLDER: &str = "sin nombre";

/// The ten completeness checks, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletenessCheck {
    Avatar,
    RealName,
    Country,
    City,
    Category,
    Title,
    ExperienceLevel,
    Skills,
    Bio,
    Education,
}

impl CompletenessCheck {
    pub const ALL: [CompletenessCheck; 10] = [
        CompletenessCheck::Avatar,
        CompletenessCheck::RealName,
        CompletenessCheck::Country,
        CompletenessCheck::City,
        CompletenessCheck::Category,
        CompletenessCheck::Title,
        CompletenessCheck::ExperienceLevel,
        CompletenessCheck::Skills,
        CompletenessCheck::Bio,
        CompletenessCheck::Education,
    ];

    /// Missing-field label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Avatar => "Foto de perfil",
            Self::RealName => "Nombre completo",
            Self::Country => "País",
            Self::City => "Ciudad",
            Self::Category => "Categoría principal",
            Self::Title => "Título profesional",
            Self::ExperienceLevel => "Nivel de experiencia",
            Self::Skills => "Al menos 3 habilidades",
            Self::Bio => "Biografía (mínimo 50 caracteres)",
            Self::Education => "Formación académica",
        }
    }

    pub fn suggestion(self) -> &'static str {
        match self {
            Self::Avatar => "Sube una foto de perfil",
            Self::RealName => "Agrega tu nombre y apellido",
            Self::Country => "Indica tu país de residencia",
            Self::City => "Indica tu ciudad de residencia",
            Self::Category => "Elige la categoría principal de tu trabajo",
            Self::Title => "Agrega un título profesional",
            Self::ExperienceLevel => "Selecciona tu nivel de experiencia",
            Self::Skills => "Agrega al menos 3 habilidades",
            Self::Bio => "Escribe una biografía de al menos 50 caracteres",
            Self::Education => "Agrega al menos un registro de formación",
        }
    }
}

/// Outcome of every check for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResults([bool; 10]);

impl CheckResults {
    pub fn evaluate(
        profile: &Profile,
        talent: Option<&TalentProfile>,
        has_education: bool,
        has_avatar: bool,
    ) -> Self {
        let mut results = [false; 10];
        for (slot, check) in results.iter_mut().zip(CompletenessCheck::ALL) {
            *slot = evaluate_check(check, profile, talent, has_education, has_avatar);
        }
        Self(results)
    }

    pub fn is_satisfied(&self, check: CompletenessCheck) -> bool {
        let index = CompletenessCheck::ALL
            .iter()
            .position(|candidate| *candidate == check)
            .unwrap_or_default();
        self.0[index]
    }

    pub fn satisfied_count(&self) -> usize {
        self.0.iter().filter(|satisfied| **satisfied).count()
    }

    /// Unsatisfied checks in reporting order.
    pub fn unsatisfied(&self) -> impl Iterator<Item = CompletenessCheck> + '_ {
        CompletenessCheck::ALL
            .into_iter()
            .zip(self.0)
            .filter(|(_, satisfied)| !satisfied)
            .map(|(check, _)| check)
    }

    fn weighted(&self, weights: &[(CompletenessCheck, u8)]) -> u8 {
        let sum: u32 = weights
            .iter()
            .filter(|(check, _)| self.is_satisfied(*check))
            .map(|(_, points)| u32::from(*points))
            .sum();
        sum.min(100) as u8
    }
}

const BASIC_INFO_WEIGHTS: [(CompletenessCheck, u8); 4] = [
    (CompletenessCheck::Avatar, 25),
    (CompletenessCheck::RealName, 25),
    (CompletenessCheck::Country, 25),
    (CompletenessCheck::City, 25),
];

const PROFESSIONAL_INFO_WEIGHTS: [(CompletenessCheck, u8); 3] = [
    (CompletenessCheck::Category, 34),
    (CompletenessCheck::Title, 33),
    (CompletenessCheck::ExperienceLevel, 33),
];

const SKILLS_AND_BIO_WEIGHTS: [(CompletenessCheck, u8); 3] = [
    (CompletenessCheck::Skills, 50),
    (CompletenessCheck::Bio, 33),
    (CompletenessCheck::Education, 17),
];

/// Computes the completeness breakdown for one user.
///
/// `has_avatar` carries the avatar flag from the auth session metadata; the
/// profile's own `avatar_url` satisfies the check as well.
pub fn calculate(
    profile: Option<&Profile>,
    talent: Option<&TalentProfile>,
    has_education: bool,
    has_avatar: bool,
) -> CompletenessBreakdown {
    let Some(profile) = profile else {
        return CompletenessBreakdown::profile_not_found();
    };

    let results = CheckResults::evaluate(profile, talent, has_education, has_avatar);
    let total = (results.satisfied_count() * usize::from(CHECK_POINTS)).min(100) as u8;

    CompletenessBreakdown {
        basic_info: results.weighted(&BASIC_INFO_WEIGHTS),
        professional_info: results.weighted(&PROFESSIONAL_INFO_WEIGHTS),
        skills_and_bio: results.weighted(&SKILLS_AND_BIO_WEIGHTS),
        total,
        missing_fields: results
            .unsatisfied()
            .map(|check| check.label().to_string())
            .collect(),
        suggestions: results
            .unsatisfied()
            .map(|check| check.suggestion().to_string())
            .collect(),
    }
}

fn evaluate_check(
    check: CompletenessCheck,
    profile: &Profile,
    talent: Option<&TalentProfile>,
    has_education: bool,
    has_avatar: bool,
) -> bool {
    match check {
        CompletenessCheck::Avatar => has_avatar || present(&profile.avatar_url).is_some(),
        CompletenessCheck::RealName => present(&profile.full_name)
            .is_some_and(|name| is_real_name(name, profile.email_local_part())),
        CompletenessCheck::Country => {
            present(&profile.country).is_some()
                || talent.is_some_and(|t| present(&t.country).is_some())
        }
        CompletenessCheck::City => {
            present(&profile.city).is_some() || talent.is_some_and(|t| present(&t.city).is_some())
        }
        CompletenessCheck::Category => talent.is_some_and(|t| present(&t.category_id).is_some()),
        CompletenessCheck::Title => talent.is_some_and(|t| present(&t.title).is_some()),
        CompletenessCheck::ExperienceLevel => {
            talent.is_some_and(|t| t.experience_level().is_some())
        }
        CompletenessCheck::Skills => talent.is_some_and(|t| t.skills().len() >= MIN_SKILLS),
        CompletenessCheck::Bio => talent.is_some_and(|t| {
            t.bio
                .as_deref()
                .is_some_and(|bio| bio.chars().count() >= MIN_BIO_CHARS)
        }),
        CompletenessCheck::Education => has_education,
    }
}

/// A name counts as real when it is not the sign-up placeholder and either has
/// at least two tokens or differs from the email local part once both are
/// reduced to lowercase alphanumerics.
pub fn is_real_name(name: &str, email_local_part: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || name.to_lowercase() == NAME_PLACEHOLDER {
        return false;
    }
    if name.split_whitespace().count() >= 2 {
        return true;
    }
    normalize(name) != normalize(email_local_part)
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
