//! Prompt building blocks outside the palette core: string utilities,
//! date/time strings, season and weather phrases, and character traits.

pub mod datetime;
pub mod describer;
pub mod text;
pub mod weather;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::{PromptError, Result};

/// One entry of a weighted phrase table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeightedOption {
    /// Phrase returned when picked.
    pub text: String,
    /// Relative weight.
    pub weight: u32,
}

/// Weighted random pick from `options`.
///
/// # Errors
/// Returns [`PromptError::Configuration`] if the table is empty or all
/// weights are zero.
pub fn pick_weighted<'a, R: Rng + ?Sized>(
    options: &'a [WeightedOption],
    rng: &mut R,
) -> Result<&'a str> {
    options
        .choose_weighted(rng, |option| option.weight)
        .map(|option| option.text.as_str())
        .map_err(|e| PromptError::Configuration(format!("Cannot pick from phrase table: {e}")))
}
