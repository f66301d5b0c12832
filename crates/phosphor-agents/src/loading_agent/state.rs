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

use std::fmt;

/// Lifecycle of a loading session.
///
/// `Loading -> ReadyToPatch -> PatchedAndTransitioning -> Done`, or
/// `Loading -> Error` when the scene itself cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadingState {
    /// Waiting on the scene, the textures, or both.
    Loading,
    /// Both phases are done; the patch step is about to run.
    ReadyToPatch,
    /// The scene is patched and the closing transition is running.
    PatchedAndTransitioning,
    /// The transition ran to its natural end.
    Done,
    /// The scene failed to load. Terminal.
    Error,
}

impl LoadingState {
    /// Returns `true` for `Done` and `Error`.
    pub fn is_terminal(self) -> bool {
        matches!(self, LoadingState::Done | LoadingState::Error)
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadingState::Loading => "loading",
            LoadingState::ReadyToPatch => "ready-to-patch",
            LoadingState::PatchedAndTransitioning => "patched-and-transitioning",
            LoadingState::Done => "done",
            LoadingState::Error => "error",
        };
        f.write_str(name)
    }
}

/// The completion gate: both the scene and every auxiliary entry are done.
pub fn completion_gate_open(model_loaded: bool, completed: usize, total: usize) -> bool {
    model_loaded && completed == total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_needs_both_conditions() {
        assert!(!completion_gate_open(false, 3, 3));
        assert!(!completion_gate_open(true, 2, 3));
        assert!(completion_gate_open(true, 3, 3));
        assert!(completion_gate_open(true, 0, 0));
    }
}
