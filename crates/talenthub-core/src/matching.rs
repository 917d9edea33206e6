//! Talent recommendation for opportunities.
//!
//! A weighted-keyword relevance score between an opportunity and a talent
//! profile, used to rank candidates. Scores are 0-100.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::profile::{ExperienceLevel, TalentProfile, present};

const CATEGORY_POINTS: u32 = 30;
const SKILL_POINTS: u32 = 10;
const SKILL_CAP: u32 = 40;
const KEYWORD_POINTS: u32 = 5;
const KEYWORD_CAP: u32 = 20;
const EXPERIENCE_POINTS: u32 = 10;
/// Words shorter than this are ignored as keywords
const MIN_KEYWORD_LEN: usize = 4;

/// A posted job or freelance opportunity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
}

/// A talent with its relevance score for one opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTalent {
    pub user_id: String,
    pub score: u32,
}

pub fn relevance_score(opportunity: &Opportunity, talent: &TalentProfile) -> u32 {
    let mut score = 0;

    if let (Some(wanted), Some(held)) = (
        opportunity.category_id.as_deref(),
        present(&talent.category_id),
    ) && wanted == held
    {
        score += CATEGORY_POINTS;
    }

    let held_skills: HashSet<String> = talent
        .skills()
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .collect();
    let skill_hits = opportunity
        .required_skills
        .iter()
        .filter(|skill| held_skills.contains(&skill.trim().to_lowercase()))
        .count() as u32;
    score += (skill_hits * SKILL_POINTS).min(SKILL_CAP);

    let talent_words = keywords(&format!(
        "{} {}",
        talent.title.as_deref().unwrap_or_default(),
        talent.bio.as_deref().unwrap_or_default()
    ));
    let keyword_hits = keywords(&format!("{} {}", opportunity.title, opportunity.description))
        .intersection(&talent_words)
        .count() as u32;
    score += (keyword_hits * KEYWORD_POINTS).min(KEYWORD_CAP);

    if opportunity.experience_level.is_some()
        && opportunity.experience_level == talent.experience_level()
    {
        score += EXPERIENCE_POINTS;
    }

    score.min(100)
}

/// Ranks talents by descending relevance, ties broken by user id.
/// Talents scoring zero are left out.
pub fn rank_talents<'a>(
    opportunity: &Opportunity,
    talents: impl IntoIterator<Item = &'a TalentProfile>,
) -> Vec<RankedTalent> {
    let mut ranked: Vec<RankedTalent> = talents
        .into_iter()
        .map(|talent| RankedTalent {
            user_id: talent.user_id.clone(),
            score: relevance_score(opportunity, talent),
        })
        .filter(|ranked| ranked.score > 0)
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.user_id.cmp(&b.user_id)));
    ranked
}

fn keywords(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .map(str::to_lowercase)
        .collect()
}
