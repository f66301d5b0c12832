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

use super::{Asset, AssetHandle};

/// A decoded RGBA8 image, ready to be bound to a material.
///
/// Pixels are kept in sRGB space, row-major, four bytes per texel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// The locator the texture was loaded from, kept for diagnostics.
    pub label: String,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Raw RGBA8 pixel data.
    pub pixels: Vec<u8>,
}

impl Asset for Texture {}

impl Texture {
    /// Creates a texture from raw RGBA8 pixels.
    pub fn new(label: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            pixels,
        }
    }

    /// A 1x1 opaque white texture, handy as a stand-in for tests and tools.
    pub fn white(label: impl Into<String>) -> Self {
        Self::new(label, 1, 1, vec![255; 4])
    }

    /// Size of the pixel payload in bytes.
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }
}

/// Shared handle to a loaded texture.
pub type TextureHandle = AssetHandle<Texture>;
