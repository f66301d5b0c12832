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

use crate::asset::TextureHandle;

/// A named surface description attached to a scene node.
///
/// The renderer polls [`Material::version`] to know when GPU-side state must be
/// rebuilt; every mutation made by the patch step goes through
/// [`Material::mark_dirty`].
#[derive(Debug, Clone)]
pub struct Material {
    /// The material name authored in the scene file.
    pub name: String,

    /// The base color (albedo), linear RGBA.
    pub base_color: [f32; 4],

    /// Optional colour map. When present its texels are multiplied with `base_color`.
    pub map: Option<TextureHandle>,

    /// Optional emissive map, used by self-illuminating surfaces such as screens.
    pub emissive_map: Option<TextureHandle>,

    /// Scale applied to the emissive contribution.
    pub emissive_intensity: f32,

    /// The roughness factor (0.0 = smooth, 1.0 = rough).
    pub roughness: f32,

    /// The metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metalness: f32,

    /// Surface opacity, only honoured when `transparent` is set.
    pub opacity: f32,

    /// Whether the material is drawn in the blended pass.
    pub transparent: bool,

    version: u64,
}

impl Material {
    /// Creates an untextured, opaque, white material with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Flags the material so the renderer re-uploads it on the next frame.
    pub fn mark_dirty(&mut self) {
        self.version += 1;
    }

    /// Monotonic revision counter, bumped by every [`Material::mark_dirty`].
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` once the material has been modified after creation.
    pub fn is_dirty(&self) -> bool {
        self.version > 0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_color: [1.0, 1.0, 1.0, 1.0],
            map: None,
            emissive_map: None,
            emissive_intensity: 0.0,
            roughness: 0.5,
            metalness: 0.0,
            opacity: 1.0,
            transparent: false,
            version: 0,
        }
    }
}
