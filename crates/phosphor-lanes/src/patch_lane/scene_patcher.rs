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

use phosphor_core::asset::TextureHandle;
use phosphor_core::scene::{MaterialOverride, MaterialProperty, SceneNode};

use super::default_material_overrides;

/// Counters describing what a patch pass did. Only used for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Materials encountered during traversal.
    pub materials_visited: usize,
    /// Materials that received a texture.
    pub patched: usize,
    /// Materials with no manifest entry of the same name.
    pub skipped_missing: usize,
    /// Materials whose texture failed to load.
    pub skipped_failed: usize,
    /// Individual override rules written.
    pub overrides_applied: usize,
}

/// Binds loaded textures onto scene materials by name.
#[derive(Debug, Clone)]
pub struct ScenePatcher {
    overrides: HashMap<String, Vec<MaterialProperty>>,
}

impl ScenePatcher {
    /// Creates a patcher using the given tuning rules.
    pub fn new(overrides: impl IntoIterator<Item = MaterialOverride>) -> Self {
        let mut table: HashMap<String, Vec<MaterialProperty>> = HashMap::new();
        for rule in overrides {
            table.entry(rule.material).or_default().push(rule.property);
        }
        Self { overrides: table }
    }

    /// Patches every material under `root` in place.
    ///
    /// `resources` maps manifest identifiers to their texture, or `None` when
    /// the load failed. Materials without a usable texture are left untouched,
    /// and so are their tuning rules.
    pub fn apply(
        &self,
        root: &mut SceneNode,
        resources: &HashMap<String, Option<TextureHandle>>,
    ) -> PatchReport {
        let mut report = PatchReport::default();

        root.traverse_mut(&mut |node| {
            let Some(material) = node.material.as_mut() else {
                return;
            };
            report.materials_visited += 1;

            let texture = match resources.get(&material.name) {
                Some(Some(texture)) => texture,
                Some(None) => {
                    log::debug!(
                        "Skipping material '{}' on '{}': texture failed to load.",
                        material.name,
                        node.name
                    );
                    report.skipped_failed += 1;
                    return;
                }
                None => {
                    report.skipped_missing += 1;
                    return;
                }
            };

            material.map = Some(texture.clone());
            if let Some(rules) = self.overrides.get(&material.name) {
                for rule in rules {
                    rule.apply_to(material);
                }
                report.overrides_applied += rules.len();
            }
            material.mark_dirty();
            report.patched += 1;

            log::trace!(
                "Bound '{}' ({}x{}) to material '{}' on '{}'.",
                texture.label,
                texture.width,
                texture.height,
                material.name,
                node.name
            );
        });

        report
    }

    /// Number of materials that have tuning rules.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl Default for ScenePatcher {
    fn default() -> Self {
        Self::new(default_material_overrides())
    }
}
