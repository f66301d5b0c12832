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


//! Acts as the **[A]gent** for a loading session.
//!
//! The orchestrator owns every piece of session state: the progress lane, the
//! auxiliary load set, the scene root once it arrives, and the transition
//! machine. Loaders only ever publish events; the orchestrator applies them on
//! the host thread, in arrival order, from [`LoadingOrchestrator::update`].

mod asset_set;
mod orchestrator;
mod state;

pub use asset_set::{AssetLoadSet, EntryStatus};
pub use orchestrator::LoadingOrchestrator;
pub use state::{completion_gate_open, LoadingState};
