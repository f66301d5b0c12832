// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Session configuration types.
//!
//! These are plain serde structures plus [`SessionConfig::validate`]; reading
//! them from disk is the job of `phosphor-io`.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::asset::AssetManifest;
use crate::scene::MaterialOverride;

/// A session configuration that parsed but cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The scene locator is empty.
    #[error("the scene locator is empty")]
    EmptySceneLocator,
    /// A manifest entry has an empty identifier or locator.
    #[error("texture entry #{index} has an empty identifier or locator")]
    EmptyEntry {
        /// Position of the offending entry.
        index: usize,
    },
    /// Two manifest entries share an identifier.
    #[error("texture identifier '{0}' appears more than once")]
    DuplicateIdentifier(String),
    /// The progress weights are negative or do not sum to one.
    #[error("progress weights must be non-negative and sum to 1.0 (model = {model}, aux = {aux})")]
    InvalidWeights {
        /// The configured scene weight.
        model: f32,
        /// The configured texture weight.
        aux: f32,
    },
}

/// How much of the combined percentage each loading phase accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressWeights {
    /// Share of the scene phase.
    pub model: f32,
    /// Share of the auxiliary texture phase.
    pub aux: f32,
}

impl ProgressWeights {
    /// Tolerance used when checking that weights add up to one.
    pub const EPSILON: f32 = 1e-3;

    /// Returns `true` if both weights are non-negative and sum to 1.0.
    pub fn is_normalized(&self) -> bool {
        self.model >= 0.0
            && self.aux >= 0.0
            && (self.model + self.aux - 1.0).abs() <= Self::EPSILON
    }
}

impl Default for ProgressWeights {
    fn default() -> Self {
        Self {
            model: 0.7,
            aux: 0.3,
        }
    }
}

/// Fixed durations of the closing transition, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTimings {
    /// How long the pinned 100% is shown before the power-off starts.
    pub completing_hold_ms: u64,
    /// Length of the CRT power-off animation.
    pub power_off_ms: u64,
    /// How long the opaque cover stays fully visible.
    pub blackout_hold_ms: u64,
    /// Length of the cover fade-out.
    pub fade_out_ms: u64,
}

impl TransitionTimings {
    /// Delay spent in the completing phase.
    pub fn completing_hold(&self) -> Duration {
        Duration::from_millis(self.completing_hold_ms)
    }

    /// Delay spent in the power-off phase.
    pub fn power_off(&self) -> Duration {
        Duration::from_millis(self.power_off_ms)
    }

    /// Delay spent with the cover fully visible.
    pub fn blackout_hold(&self) -> Duration {
        Duration::from_millis(self.blackout_hold_ms)
    }

    /// Delay spent fading the cover out.
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    /// Total time from `complete()` to teardown.
    pub fn total(&self) -> Duration {
        self.completing_hold() + self.power_off() + self.blackout_hold() + self.fade_out()
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            completing_hold_ms: 800,
            power_off_ms: 800,
            blackout_hold_ms: 100,
            fade_out_ms: 2000,
        }
    }
}

/// Everything a loading session needs to know up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Locator of the scene file.
    pub scene: String,

    /// Directory relative locators are resolved against.
    #[serde(default)]
    pub asset_root: PathBuf,

    /// The auxiliary textures to load.
    #[serde(default)]
    pub textures: AssetManifest,

    /// Progress weighting between the two phases.
    #[serde(default)]
    pub progress: ProgressWeights,

    /// Durations of the closing transition.
    #[serde(default)]
    pub transition: TransitionTimings,

    /// Per-material tuning rules. `None` selects the built-in table.
    #[serde(default)]
    pub overrides: Option<Vec<MaterialOverride>>,
}

impl SessionConfig {
    /// Creates a configuration with default weights, timings and overrides.
    pub fn new(scene: impl Into<String>, textures: AssetManifest) -> Self {
        Self {
            scene: scene.into(),
            asset_root: PathBuf::new(),
            textures,
            progress: ProgressWeights::default(),
            transition: TransitionTimings::default(),
            overrides: None,
        }
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scene.trim().is_empty() {
            return Err(ConfigError::EmptySceneLocator);
        }
        if !self.progress.is_normalized() {
            return Err(ConfigError::InvalidWeights {
                model: self.progress.model,
                aux: self.progress.aux,
            });
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.textures.entries().iter().enumerate() {
            if entry.identifier.trim().is_empty() || entry.locator.trim().is_empty() {
                return Err(ConfigError::EmptyEntry { index });
            }
            if !seen.insert(entry.identifier.as_str()) {
                return Err(ConfigError::DuplicateIdentifier(entry.identifier.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetEntry;

    fn manifest(entries: &[(&str, &str)]) -> AssetManifest {
        entries
            .iter()
            .map(|(id, locator)| AssetEntry::new(*id, *locator))
            .collect()
    }

    #[test]
    fn validation_accepts_a_sane_config() {
        let config = SessionConfig::new(
            "room.glb",
            manifest(&[("Screen", "screen.png"), ("Wood", "wood.png")]),
        );
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_broken_configs() {
        let duplicate = SessionConfig::new(
            "room.glb",
            manifest(&[("Wood", "a.png"), ("Wood", "b.png")]),
        );
        assert_eq!(
            duplicate.validate(),
            Err(ConfigError::DuplicateIdentifier("Wood".into()))
        );

        let empty_entry = SessionConfig::new("room.glb", manifest(&[("Wood", "  ")]));
        assert_eq!(
            empty_entry.validate(),
            Err(ConfigError::EmptyEntry { index: 0 })
        );

        let no_scene = SessionConfig::new("", AssetManifest::default());
        assert_eq!(no_scene.validate(), Err(ConfigError::EmptySceneLocator));

        let mut weights = SessionConfig::new("room.glb", AssetManifest::default());
        weights.progress = ProgressWeights { model: 0.9, aux: 0.3 };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn default_weights_are_normalized() {
        assert!(ProgressWeights::default().is_normalized());
        assert!(!ProgressWeights { model: 0.5, aux: 0.6 }.is_normalized());
        assert!(!ProgressWeights { model: 1.2, aux: -0.2 }.is_normalized());
    }

    #[test]
    fn default_transition_adds_up_the_four_delays() {
        assert_eq!(
            TransitionTimings::default().total(),
            Duration::from_millis(3700)
        );
    }
}
