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

use phosphor_core::{TransitionPhase, VisualSink};

const BAR_WIDTH: usize = 40;

/// Draws the loading screen as lines on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    last_drawn: Option<u32>,
    torn_down: bool,
}

impl ConsoleSink {
    fn bar(percent: f32) -> String {
        let filled = ((percent / 100.0) * BAR_WIDTH as f32).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
    }
}

impl VisualSink for ConsoleSink {
    fn set_percent(&mut self, percent: f32) {
        let shown = percent.floor() as u32;
        if self.last_drawn == Some(shown) {
            return;
        }
        self.last_drawn = Some(shown);
        println!("{} {:>3}%", Self::bar(percent), shown);
    }

    fn set_phase(&mut self, phase: TransitionPhase) {
        let line = match phase {
            TransitionPhase::Completing => "loading complete",
            TransitionPhase::TurningOff => "~~ powering off ~~",
            TransitionPhase::BlackoutIn => "##########",
            TransitionPhase::BlackoutOut => "(fading in the scene)",
            TransitionPhase::Active | TransitionPhase::Destroyed => return,
        };
        println!("{line}");
    }

    fn show_error(&mut self, message: &str) {
        println!("!! LOADING FAILED: {message}");
    }

    fn teardown(&mut self) {
        if !self.torn_down {
            self.torn_down = true;
            println!("(loading screen removed)");
        }
    }
}
