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


//! # Phosphor IO
//!
//! Concrete collaborators for a loading session:
//! - [`loading`]: threaded glTF scene and image texture loaders reading from the
//!   local filesystem;
//! - [`config`]: reading a [`SessionConfig`](phosphor_core::SessionConfig) from
//!   a TOML file.

#![warn(missing_docs)]

pub mod config;
pub mod loading;

pub use config::{load_session_config, ConfigLoadError};
pub use loading::{FileSystemResolver, GltfSceneLoader, ImageResourceLoader};
