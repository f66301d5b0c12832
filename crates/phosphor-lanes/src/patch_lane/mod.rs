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


//! The post-load scene patch step.
//!
//! Runs once both loading phases are done: walks the scene graph, binds each
//! loaded texture to the material of the same name, then applies the static
//! per-material tuning table.

mod overrides;
mod scene_patcher;

pub use overrides::default_material_overrides;
pub use scene_patcher::{PatchReport, ScenePatcher};
