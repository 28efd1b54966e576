//! Bounded-attempt search with escalating relaxation.
//!
//! Every hue-geometry generator follows the same ladder: a fixed number of
//! attempts with the base parameters, then one attempt per relaxed parameter,
//! then a registry fill that cannot fail. The first two tiers live in
//! [`search`]; the last one is [`fill_unique`].

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::ColorRegistry;

/// Attempts made with the base parameters before relaxing them.
pub const MAX_ATTEMPTS: usize = 50;

/// Parameters tried by [`search`], in order.
#[derive(Debug, Clone)]
pub struct Schedule<P> {
    /// Number of attempts with `base`.
    pub attempts: usize,
    /// Parameters for the first tier.
    pub base: P,
    /// One attempt each, after the first tier is exhausted.
    pub relaxed: Vec<P>,
}

impl<P> Schedule<P> {
    /// [`MAX_ATTEMPTS`] tries with `base`, then each of `relaxed` once.
    pub fn new(base: P, relaxed: Vec<P>) -> Self {
        Self {
            attempts: MAX_ATTEMPTS,
            base,
            relaxed,
        }
    }
}

/// Runs `generate` over the schedule until `accept` holds.
///
/// Returns `Ok(None)` once every tier has been tried; the caller then falls
/// back to [`fill_unique`]. Errors from `generate` abort the search.
pub fn search<R, P, T, G, A>(
    rng: &mut R,
    schedule: &Schedule<P>,
    mut generate: G,
    accept: A,
) -> Result<Option<T>>
where
    R: Rng + ?Sized,
    G: FnMut(&mut R, &P) -> Result<Option<T>>,
    A: Fn(&T) -> bool,
{
    for _ in 0..schedule.attempts {
        if let Some(candidate) = generate(rng, &schedule.base)? {
            if accept(&candidate) {
                return Ok(Some(candidate));
            }
        }
    }

    debug!(
        "No acceptable candidate after {} attempts, relaxing parameters",
        schedule.attempts
    );
    for params in &schedule.relaxed {
        if let Some(candidate) = generate(rng, params)? {
            if accept(&candidate) {
                return Ok(Some(candidate));
            }
        }
    }

    Ok(None)
}

/// True if `palette` holds exactly `size` pairwise distinct names.
#[must_use]
pub fn is_distinct(palette: &[String], size: usize) -> bool {
    palette.len() == size && palette.iter().collect::<HashSet<_>>().len() == size
}

/// Last-resort completion of a palette.
///
/// Keeps the distinct names of `seed` in order, adds random registry names
/// not yet used until `size` is reached, and only when the registry runs out
/// pads by repeating the last name.
pub fn fill_unique<R: Rng + ?Sized>(
    rng: &mut R,
    registry: &ColorRegistry,
    seed: Vec<String>,
    size: usize,
) -> Vec<String> {
    let mut palette: Vec<String> = Vec::with_capacity(size);
    for name in seed {
        if palette.len() < size && !palette.contains(&name) {
            palette.push(name);
        }
    }

    let mut pool: Vec<&str> = registry
        .names()
        .filter(|name| !palette.iter().any(|p| p == name))
        .collect();
    pool.shuffle(rng);
    for name in pool.into_iter().take(size.saturating_sub(palette.len())) {
        palette.push(name.to_string());
    }

    pad_with_last(&mut palette, size);
    palette
}

/// Repeats the final name until `palette` is `size` long.
pub fn pad_with_last(palette: &mut Vec<String>, size: usize) {
    if palette.len() >= size {
        return;
    }
    warn!(
        "Only {} distinct colors available for a {size}-color palette, repeating the last one",
        palette.len()
    );
    let last = palette.last().cloned().unwrap_or_default();
    palette.resize(size, last);
}
