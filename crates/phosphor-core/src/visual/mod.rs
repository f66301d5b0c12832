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

//! The visual side channel of a loading session.
//!
//! The loading screen (progress number, progress bar, CRT power-off animation,
//! blackout cover) is owned by the host. The session only drives it through
//! [`VisualSink`], which keeps the control logic testable without any display.

use std::fmt;

/// The phases of the closing transition, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransitionPhase {
    /// Loading is in progress and progress updates are shown.
    Active,
    /// Progress is pinned at 100 and the completion indicator is shown.
    Completing,
    /// The CRT power-off animation is playing.
    TurningOff,
    /// The opaque cover has snapped to fully visible.
    BlackoutIn,
    /// The opaque cover is fading out, revealing the scene.
    BlackoutOut,
    /// Every visual node has been removed. Terminal.
    Destroyed,
}

impl fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitionPhase::Active => "active",
            TransitionPhase::Completing => "completing",
            TransitionPhase::TurningOff => "turning-off",
            TransitionPhase::BlackoutIn => "blackout-in",
            TransitionPhase::BlackoutOut => "blackout-out",
            TransitionPhase::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}

/// The display a loading session draws into.
///
/// Implementations own their visual nodes from construction until
/// [`VisualSink::teardown`]. The transition state machine guarantees that no
/// method is called after `teardown`, and that `teardown` is called at most once.
pub trait VisualSink {
    /// Shows the combined loading percentage, in `[0, 100]`.
    fn set_percent(&mut self, percent: f32);

    /// Switches the loading screen to the visuals of `phase`.
    fn set_phase(&mut self, phase: TransitionPhase);

    /// Replaces the progress display with the fixed error indicator.
    fn show_error(&mut self, message: &str);

    /// Removes every node the sink owns.
    fn teardown(&mut self);
}

impl<S: VisualSink + ?Sized> VisualSink for Box<S> {
    fn set_percent(&mut self, percent: f32) {
        (**self).set_percent(percent)
    }

    fn set_phase(&mut self, phase: TransitionPhase) {
        (**self).set_phase(phase)
    }

    fn show_error(&mut self, message: &str) {
        (**self).show_error(message)
    }

    fn teardown(&mut self) {
        (**self).teardown()
    }
}
