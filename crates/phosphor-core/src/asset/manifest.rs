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

use serde::{Deserialize, Serialize};

/// One named auxiliary resource of a loading session.
///
/// The `identifier` is the name the scene patcher matches against material
/// names; the `locator` tells the resource loader where to fetch it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Name used to match the resource against scene materials.
    pub identifier: String,
    /// Path or URL handed to the resource loader.
    pub locator: String,
}

impl AssetEntry {
    /// Creates a new manifest entry.
    pub fn new(identifier: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            locator: locator.into(),
        }
    }
}

/// The fixed, ordered list of auxiliary resources loaded during a session.
///
/// Order does not matter for correctness; it only fixes the index each entry is
/// reported under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest {
    entries: Vec<AssetEntry>,
}

impl AssetManifest {
    /// Creates a manifest from a list of entries.
    pub fn new(entries: Vec<AssetEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries in manifest order.
    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    /// Returns the entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&AssetEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<AssetEntry> for AssetManifest {
    fn from_iter<I: IntoIterator<Item = AssetEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
