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


use phosphor_core::scene::{MaterialOverride, MaterialProperty};

/// Built-in tuning rules, keyed by material name.
///
/// This is configuration data, not logic: a session config may replace it
/// wholesale with its own `[[overrides]]` table.
const DEFAULT_OVERRIDES: &[(&str, MaterialProperty)] = &[
    // The CRT screen glows with whatever is shown on it.
    ("Screen", MaterialProperty::MapAsEmissive),
    ("Screen", MaterialProperty::EmissiveIntensity(1.5)),
    ("Glass", MaterialProperty::Transparent(true)),
    ("Glass", MaterialProperty::Opacity(0.25)),
    ("Glass", MaterialProperty::Roughness(0.05)),
    ("Chrome", MaterialProperty::Metalness(1.0)),
    ("Chrome", MaterialProperty::Roughness(0.15)),
];

/// Returns the built-in override table.
pub fn default_material_overrides() -> Vec<MaterialOverride> {
    DEFAULT_OVERRIDES
        .iter()
        .map(|(material, property)| MaterialOverride::new(*material, *property))
        .collect()
}
