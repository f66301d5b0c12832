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

//! Provides the foundational traits and primitive types for Phosphor's asset system.
//!
//! This module defines the "common language" for every asset-related operation:
//! - The [`Asset`] trait: a marker for all types that can be treated as assets.
//! - [`AssetHandle`]: cheap shared ownership of a loaded asset.
//! - [`Texture`]: the decoded image payload produced by the auxiliary loaders.
//! - [`AssetManifest`]: the fixed list of named auxiliary resources of a session.
//!
//! It has no knowledge of how assets are fetched or decoded; that lives in
//! `phosphor-io`.

mod handle;
mod manifest;
mod texture;

pub use handle::*;
pub use manifest::*;
pub use texture::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits enforce that an asset can be produced on a background loader
/// thread and handed over to the thread driving the session:
/// - `Send` + `Sync`: the asset type can be safely shared and sent between threads.
/// - `'static`: the asset type does not borrow anything.
///
/// # Examples
///
/// ```
/// use phosphor_core::asset::Asset;
///
/// struct Cubemap {
///     faces: [Vec<u8>; 6],
/// }
///
/// impl Asset for Cubemap {}
/// ```
pub trait Asset: Send + Sync + 'static {}
