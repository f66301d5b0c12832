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


//! The minimal scene-graph model the loading session operates on.
//!
//! A loaded scene is a tree of [`SceneNode`]s. Nodes may carry a [`Material`]
//! whose name is the key the scene patcher uses to bind auxiliary textures.
//! Rendering concerns live elsewhere; this module only models what the patch
//! step reads and writes.

mod material;
mod node;
mod overrides;

pub use material::*;
pub use node::*;
pub use overrides::*;
