use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::catalog::IntentCatalog;
use crate::error::{ChatError, ChatResult};

/// Pick one response for `tag` using the caller's random source.
///
/// Only the first entry carrying `tag` is consulted. Its responses are
/// sampled uniformly.
pub fn select_with<'a, R>(tag: &str, catalog: &'a IntentCatalog, rng: &mut R) -> ChatResult<&'a str>
where
    R: Rng + ?Sized,
{
    let entry = catalog.find(tag).ok_or_else(|| ChatError::UnknownTag {
        tag: tag.to_string(),
    })?;
    let response = entry
        .responses
        .choose(rng)
        .ok_or_else(|| ChatError::EmptyResponses {
            tag: tag.to_string(),
        })?;
    tracing::debug!("selected response for `{tag}` from {} candidates", entry.responses.len());
    Ok(response.as_str())
}

/// Tag-keyed response picker that owns its random source.
pub struct ResponseSelector {
    rng: StdRng,
}

impl ResponseSelector {
    /// Selector seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Selector whose picks repeat for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, OS-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    pub fn select(&mut self, tag: &str, catalog: &IntentCatalog) -> ChatResult<String> {
        select_with(tag, catalog, &mut self.rng).map(str::to_string)
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}
