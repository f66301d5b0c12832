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


//! # Phosphor Agents
//!
//! The stateful side of a loading session:
//! - [`loading_agent`]: the [`LoadingOrchestrator`] and the [`AssetLoadSet`] it
//!   drives, including the exactly-once completion gate.
//! - [`transition_agent`]: the timed, cancellable [`TransitionStateMachine`]
//!   that closes the loading screen.

#![warn(missing_docs)]

pub mod loading_agent;
pub mod transition_agent;

pub use loading_agent::{AssetLoadSet, EntryStatus, LoadingOrchestrator, LoadingState};
pub use transition_agent::{TransitionExit, TransitionStateMachine};
