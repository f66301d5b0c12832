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

use super::Material;

/// A single material property that a tuning rule can force.
///
/// In TOML a rule reads `property = { emissive_intensity = 1.5 }`, or
/// `property = "map_as_emissive"` for the unit variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialProperty {
    /// Sets [`Material::emissive_intensity`].
    EmissiveIntensity(f32),
    /// Sets [`Material::roughness`].
    Roughness(f32),
    /// Sets [`Material::metalness`].
    Metalness(f32),
    /// Sets [`Material::opacity`].
    Opacity(f32),
    /// Sets [`Material::transparent`].
    Transparent(bool),
    /// Reuses the bound colour map as the emissive map.
    MapAsEmissive,
}

impl MaterialProperty {
    /// Writes the property into `material`. Does not mark it dirty.
    pub fn apply_to(&self, material: &mut Material) {
        match *self {
            MaterialProperty::EmissiveIntensity(value) => material.emissive_intensity = value,
            MaterialProperty::Roughness(value) => material.roughness = value.clamp(0.0, 1.0),
            MaterialProperty::Metalness(value) => material.metalness = value.clamp(0.0, 1.0),
            MaterialProperty::Opacity(value) => material.opacity = value.clamp(0.0, 1.0),
            MaterialProperty::Transparent(value) => material.transparent = value,
            MaterialProperty::MapAsEmissive => material.emissive_map = material.map.clone(),
        }
    }
}

/// A static tuning rule: the material named `material` additionally gets `property`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialOverride {
    /// Material name the rule applies to.
    pub material: String,
    /// The property forced on that material.
    pub property: MaterialProperty,
}

impl MaterialOverride {
    /// Creates a new rule.
    pub fn new(material: impl Into<String>, property: MaterialProperty) -> Self {
        Self {
            material: material.into(),
            property,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetHandle, Texture};

    #[test]
    fn factors_are_clamped() {
        let mut material = Material::named("Glass");
        MaterialProperty::Opacity(1.7).apply_to(&mut material);
        MaterialProperty::Roughness(-0.2).apply_to(&mut material);

        assert_eq!(material.opacity, 1.0);
        assert_eq!(material.roughness, 0.0);
        assert!(!material.is_dirty());
    }

    #[test]
    fn map_as_emissive_shares_the_bound_map() {
        let mut material = Material::named("Screen");
        material.map = Some(AssetHandle::new(Texture::white("screen.png")));
        MaterialProperty::MapAsEmissive.apply_to(&mut material);

        let map = material.map.as_ref().expect("map should be bound");
        let emissive = material.emissive_map.as_ref().expect("emissive should be bound");
        assert!(map.ptr_eq(emissive));
    }
}
