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

use std::collections::HashMap;

use phosphor_core::asset::{AssetHandle, AssetManifest, Texture, TextureHandle};
use phosphor_core::{EventBus, LoadError, LoadEvent, ResourceLoader, ResourceTicket};

/// What happened when an entry reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The entry was counted. `all_complete` is `true` exactly once, for the
    /// report that finished the set.
    Counted {
        /// Whether this report finished the whole set.
        all_complete: bool,
    },
    /// The entry had already reported. Ignored.
    Duplicate,
    /// No entry has that index. Ignored.
    Unknown,
}

/// The auxiliary textures of a session, started together and counted as they
/// finish.
///
/// A failed entry counts as finished and is stored as `None`, so one missing
/// texture degrades its material instead of blocking the session.
#[derive(Debug)]
pub struct AssetLoadSet {
    manifest: AssetManifest,
    finished: Vec<bool>,
    completed: usize,
    resources: HashMap<String, Option<TextureHandle>>,
}

impl AssetLoadSet {
    /// Creates a set with nothing started and nothing finished.
    pub fn new(manifest: AssetManifest) -> Self {
        let finished = vec![false; manifest.len()];
        Self {
            manifest,
            finished,
            completed: 0,
            resources: HashMap::new(),
        }
    }

    /// Hands one ticket per entry to `loader`, in manifest order.
    ///
    /// All loads are started before any of them is awaited; completions come
    /// back through `events` in whatever order the loader settles them.
    pub fn start_all(&self, loader: &dyn ResourceLoader, events: &EventBus<LoadEvent>) {
        log::info!("Starting {} texture load(s).", self.manifest.len());
        for (index, entry) in self.manifest.entries().iter().enumerate() {
            let ticket = ResourceTicket::new(
                index,
                entry.identifier.as_str(),
                entry.locator.as_str(),
                events.sender(),
            );
            loader.load(&entry.locator, ticket);
        }
    }

    /// Records the outcome of entry `index`.
    pub fn on_entry_finished(
        &mut self,
        index: usize,
        outcome: Result<Texture, LoadError>,
    ) -> EntryStatus {
        let Some(entry) = self.manifest.get(index) else {
            log::warn!("Ignoring a texture report for unknown entry #{index}.");
            return EntryStatus::Unknown;
        };
        if self.finished[index] {
            log::warn!(
                "Texture '{}' reported more than once; keeping the first result.",
                entry.identifier
            );
            return EntryStatus::Duplicate;
        }

        let resource = match outcome {
            Ok(texture) => {
                log::debug!(
                    "Texture '{}' loaded ({}x{}).",
                    entry.identifier,
                    texture.width,
                    texture.height
                );
                Some(AssetHandle::new(texture))
            }
            Err(error) => {
                log::warn!(
                    "Texture '{}' failed to load, its material stays unpatched: {error}",
                    entry.identifier
                );
                None
            }
        };

        self.finished[index] = true;
        self.completed += 1;
        self.resources.insert(entry.identifier.clone(), resource);

        EntryStatus::Counted {
            all_complete: self.is_complete(),
        }
    }

    /// Entries that have finished, successfully or not.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Number of entries in the set.
    pub fn total(&self) -> usize {
        self.manifest.len()
    }

    /// Returns `true` once every entry has finished. An empty set is complete.
    pub fn is_complete(&self) -> bool {
        self.completed == self.total()
    }

    /// Finished entries by identifier. `None` marks a failed load.
    pub fn resources(&self) -> &HashMap<String, Option<TextureHandle>> {
        &self.resources
    }
}
