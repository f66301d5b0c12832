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


//! # Phosphor Lanes
//!
//! Pure execution units used by the loading agents:
//! - [`progress_lane`]: folds the two loading phases into one percentage.
//! - [`patch_lane`]: binds loaded textures onto scene materials by name.
//!
//! Nothing in this crate schedules work or owns a session; agents decide when
//! a lane runs.

#![warn(missing_docs)]

pub mod patch_lane;
pub mod progress_lane;

pub use patch_lane::{default_material_overrides, PatchReport, ScenePatcher};
pub use progress_lane::ProgressAggregator;
