//! Reply rotation per intent.
//!
//! Each tag keeps a window of recently emitted replies. New picks are drawn
//! from replies outside the window; the window empties once it holds
//! `min(ROTATION_WINDOW, replies)` entries.

use crate::model::Intent;
use anyhow::{bail, Context, Result};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

pub const ROTATION_WINDOW: usize = 5;

/// Recently emitted replies, keyed by intent tag. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ResponseMemory {
    recent: HashMap<String, HashSet<String>>,
}

impl ResponseMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recent(&self, tag: &str) -> HashSet<String> {
        self.recent.get(tag).cloned().unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}

#[derive(Debug)]
struct SelectorState {
    memory: ResponseMemory,
    rng: StdRng,
}

/// Picks replies for matched intents. Safe to share between threads: every
/// pick runs under one lock.
#[derive(Debug)]
pub struct ResponseSelector {
    state: Mutex<SelectorState>,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self::with_memory(ResponseMemory::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(ResponseMemory::new(), StdRng::seed_from_u64(seed))
    }

    /// Continues rotation from an existing memory, e.g. one taken with
    /// [`ResponseSelector::memory`].
    pub fn with_memory(memory: ResponseMemory) -> Self {
        Self::from_parts(memory, StdRng::from_entropy())
    }

    fn from_parts(memory: ResponseMemory, rng: StdRng) -> Self {
        Self {
            state: Mutex::new(SelectorState { memory, rng }),
        }
    }

    /// Returns a reply for `intent`, avoiding replies still in its window.
    pub fn next(&self, intent: &Intent) -> Result<String> {
        if intent.responses.is_empty() {
            bail!("Intent '{}' has no responses to choose from", intent.tag);
        }

        let mut state = self.state.lock();
        let SelectorState { memory, rng } = &mut *state;
        let recent = memory.recent.entry(intent.tag.clone()).or_default();

        let available: Vec<&String> = intent
            .responses
            .iter()
            .filter(|response| !recent.contains(*response))
            .collect();

        if available.is_empty() {
            // Window exhausted: start over, and leave this pick unrecorded.
            recent.clear();
            return intent
                .responses
                .choose(rng)
                .cloned()
                .with_context(|| format!("Intent '{}' has no responses", intent.tag));
        }

        let response = available
            .choose(rng)
            .map(|response| (*response).clone())
            .with_context(|| format!("Intent '{}' has no responses", intent.tag))?;

        recent.insert(response.clone());
        if recent.len() >= ROTATION_WINDOW.min(intent.responses.len()) {
            recent.clear();
        }

        Ok(response)
    }

    /// Snapshot of the current window for `tag`.
    pub fn recent(&self, tag: &str) -> HashSet<String> {
        self.state.lock().memory.recent(tag)
    }

    /// Snapshot of every window.
    pub fn memory(&self) -> ResponseMemory {
        self.state.lock().memory.clone()
    }

    pub fn reset(&self) {
        self.state.lock().memory.clear();
    }
}
