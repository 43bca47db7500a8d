// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Memoization cache for key-signature results.
//!
//! The domain is 12 tonics by 4 tonalities, each producing at most two
//! signatures, so the cache stays tiny. Correctness never depends on it:
//! a miss or a poisoned lock just recomputes the pure result.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::TheoryError;
use crate::pitch::Note;
use crate::scale::Tonality;
use crate::signature::{key_signatures, KeySignature};

/// Thread-safe memo cache keyed by (tonic, tonality)
#[derive(Debug, Default)]
pub struct SignatureCache {
    entries: Mutex<HashMap<(Note, Tonality), Vec<KeySignature>>>,
}

impl SignatureCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the signatures for a key, computing and storing them on a miss
    pub fn get_or_compute(
        &self,
        tonic: Note,
        tonality: Tonality,
    ) -> Result<Vec<KeySignature>, TheoryError> {
        match self.entries.lock() {
            Ok(mut entries) => {
                if let Some(cached) = entries.get(&(tonic, tonality)) {
                    debug!(%tonic, %tonality, "signature cache hit");
                    return Ok(cached.clone());
                }
                debug!(%tonic, %tonality, "signature cache miss");
                let computed = key_signatures(tonic, tonality)?;
                entries.insert((tonic, tonality), computed.clone());
                Ok(computed)
            }
            Err(_) => {
                warn!("signature cache mutex poisoned, recomputing");
                key_signatures(tonic, tonality)
            }
        }
    }

    /// Number of cached keys
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
