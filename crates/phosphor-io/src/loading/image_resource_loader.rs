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

use std::sync::Arc;
use std::thread;

use phosphor_core::asset::Texture;
use phosphor_core::{LoadError, ResourceLoader, ResourceTicket};

use super::FileSystemResolver;

/// Decodes image files into RGBA8 textures, one worker thread per texture.
#[derive(Debug, Clone)]
pub struct ImageResourceLoader {
    resolver: Arc<FileSystemResolver>,
}

impl ImageResourceLoader {
    /// Creates a loader reading through `resolver`.
    pub fn new(resolver: FileSystemResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Reads and decodes one texture synchronously.
    pub fn load_blocking(&self, locator: &str) -> Result<Texture, LoadError> {
        let bytes = self.resolver.read(locator)?;
        decode_texture(locator, &bytes)
    }
}

impl ResourceLoader for ImageResourceLoader {
    fn load(&self, locator: &str, ticket: ResourceTicket) {
        let loader = self.clone();
        let locator = locator.to_string();
        let spawned = thread::Builder::new()
            .name(format!("phosphor-texture-{}", ticket.index()))
            .spawn(move || match loader.load_blocking(&locator) {
                Ok(texture) => ticket.succeed(texture),
                Err(error) => ticket.fail(error),
            });
        if let Err(error) = spawned {
            log::error!("Could not spawn a texture loader thread: {error}");
        }
    }
}

/// Decodes an encoded image, keeping its pixels in sRGB space.
pub fn decode_texture(locator: &str, bytes: &[u8]) -> Result<Texture, LoadError> {
    let img = image::load_from_memory(bytes).map_err(|e| LoadError::decode(locator, e))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Texture::new(locator, width, height, rgba.into_raw()))
}
