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

//! Weighted aggregation of the scene and texture loading phases.
//!
//! The scene file dominates perceived latency, so it is given most of the bar
//! (70% by default) and the textures get the tail. While the scene is still
//! loading only its share moves; once it is flagged complete its share is
//! pinned full and the texture share starts to count. The bar therefore never
//! shows texture-only progress before the scene means anything, and never
//! stalls on one phase for the other's whole duration.

use phosphor_core::ProgressWeights;

/// Converts a ratio to a percentage in `[0, 100]`. NaN maps to 0.
fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Mapping of two independent progress sources onto one 0–100 scalar.
#[derive(Debug, Clone)]
pub struct ProgressAggregator {
    weights: ProgressWeights,
    model_progress: f32,
    aux_progress: f32,
    model_complete: bool,
}

impl ProgressAggregator {
    /// Creates an aggregator with both phases at zero.
    pub fn new(weights: ProgressWeights) -> Self {
        Self {
            weights,
            model_progress: 0.0,
            aux_progress: 0.0,
            model_complete: false,
        }
    }

    /// Records loader-native scene counters. `total == 0` counts as no progress.
    pub fn record_model_progress(&mut self, loaded: u64, total: u64) {
        let percent = if total == 0 {
            0.0
        } else {
            (loaded as f64 / total as f64 * 100.0) as f32
        };
        self.model_progress = clamp_percent(percent);
    }

    /// Records how many auxiliary entries have finished. An empty set is complete.
    pub fn record_aux_progress(&mut self, completed: usize, total: usize) {
        let percent = if total == 0 {
            100.0
        } else {
            (completed as f64 / total as f64 * 100.0) as f32
        };
        self.aux_progress = clamp_percent(percent);
    }

    /// Flags the scene phase as finished and pins its progress to 100.
    pub fn mark_model_complete(&mut self) {
        self.model_complete = true;
        self.model_progress = 100.0;
    }

    /// The percentage to display.
    pub fn combined_percent(&self) -> f32 {
        let combined = if self.model_complete {
            self.weights.model * 100.0 + self.aux_progress * self.weights.aux
        } else {
            self.model_progress * self.weights.model
        };
        clamp_percent(combined)
    }

    /// Scene phase progress in `[0, 100]`.
    pub fn model_progress(&self) -> f32 {
        self.model_progress
    }

    /// Texture phase progress in `[0, 100]`.
    pub fn aux_progress(&self) -> f32 {
        self.aux_progress
    }
}

impl Default for ProgressAggregator {
    fn default() -> Self {
        Self::new(ProgressWeights::default())
    }
}
