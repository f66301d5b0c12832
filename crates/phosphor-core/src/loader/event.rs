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

use super::LoadError;
use crate::asset::Texture;
use crate::scene::SceneNode;

/// A single report from one of the session loaders.
#[derive(Debug)]
pub enum LoadEvent {
    /// The scene loader made progress. Counters are loader-native (usually bytes).
    SceneProgress {
        /// Units loaded so far.
        loaded: u64,
        /// Total units expected; `0` when unknown.
        total: u64,
    },
    /// The scene finished loading and hands over its root.
    SceneLoaded(SceneNode),
    /// The scene could not be loaded. Fatal for the session.
    SceneFailed(LoadError),
    /// Manifest entry `index` finished loading.
    ResourceLoaded {
        /// Position of the entry in the manifest.
        index: usize,
        /// The decoded texture.
        texture: Texture,
    },
    /// Manifest entry `index` failed. Counted as finished.
    ResourceFailed {
        /// Position of the entry in the manifest.
        index: usize,
        /// Why the load failed.
        error: LoadError,
    },
}
