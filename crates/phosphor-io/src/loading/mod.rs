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


//! Filesystem-backed implementations of the session loader contracts.
//!
//! Each `load` call spawns a short-lived worker thread and returns at once. The
//! worker reports back through the handle it was given; if the thread cannot
//! be spawned the handle is dropped with it, which the session sees as an
//! abandoned load.

mod gltf_scene_loader;
mod image_resource_loader;
mod resolver;

pub use gltf_scene_loader::GltfSceneLoader;
pub use image_resource_loader::ImageResourceLoader;
pub use resolver::FileSystemResolver;
