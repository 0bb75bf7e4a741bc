//! Lab skill weighting.
//!
//! Each skill of the lab's universe gets two factors:
//!
//! - **position**: per step, `1 / (i + 1)` for the *last* index `i` holding
//!   the skill (0 when absent), rounded to 3 decimals, then averaged over
//!   all steps;
//! - **proportion**: the skill's share of the flattened list of every
//!   step's skills, rounded to 3 decimals.
//!
//! The final weight is their sum rounded to 3 decimals. Step lists are used
//! as authored: duplicates count, order matters.

use std::collections::HashSet;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::error::{Result, SkillError};

/// One skill and its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSkill {
    pub skill: String,
    pub weight: f64,
}

/// Skills ranked by descending weight; serializes as an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillWeights(Vec<WeightedSkill>);

impl SkillWeights {
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, WeightedSkill> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weight of `skill`, if it is part of the universe.
    #[must_use]
    pub fn get(&self, skill: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.skill == skill)
            .map(|entry| entry.weight)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<WeightedSkill> {
        self.0
    }
}

impl<'a> IntoIterator for &'a SkillWeights {
    type Item = &'a WeightedSkill;
    type IntoIter = std::slice::Iter<'a, WeightedSkill>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for SkillWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.skill, &entry.weight)?;
        }
        map.end()
    }
}

/// Round to 3 decimals, half to even on the exact binary value.
///
/// Float formatting is exact, so the decimal string is the correctly rounded
/// value.
#[must_use]
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

/// Position weight of `skill` in one step: last match wins.
#[must_use]
pub fn position_weight(step: &[String], skill: &str) -> f64 {
    let mut weight = 0.0;
    for (i, tag) in step.iter().enumerate() {
        if tag == skill {
            weight = 1.0 / (i as f64 + 1.0);
        }
    }
    round3(weight)
}

/// Weights for an unnamed lab. See [`calculate_lab_weights`].
pub fn calculate_weights(lab_skills: &[String], steps: &[Vec<String>]) -> Result<SkillWeights> {
    calculate_lab_weights("", lab_skills, steps)
}

/// Rank the `lab_skills` universe over the lab's step skill lists.
///
/// Duplicates in the universe collapse to their first occurrence. Fails with
/// [`SkillError::EmptyCorpus`] when the steps hold no skills at all.
pub fn calculate_lab_weights(
    lab: &str,
    lab_skills: &[String],
    steps: &[Vec<String>],
) -> Result<SkillWeights> {
    let total: usize = steps.iter().map(Vec::len).sum();
    if total == 0 {
        return Err(SkillError::EmptyCorpus {
            lab: lab.to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut weights: Vec<WeightedSkill> = lab_skills
        .iter()
        .filter(|skill| seen.insert(skill.as_str()))
        .map(|skill| {
            let positions: f64 = steps.iter().map(|step| position_weight(step, skill)).sum();
            let avg_position = positions / steps.len() as f64;

            let count = steps.iter().flatten().filter(|tag| *tag == skill).count();
            let proportion = round3(count as f64 / total as f64);

            WeightedSkill {
                skill: skill.clone(),
                weight: round3(avg_position + proportion),
            }
        })
        .collect();

    // Stable: ties keep universe order.
    weights.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    debug!(lab, skills = weights.len(), total, "computed lab weights");
    Ok(SkillWeights(weights))
}
