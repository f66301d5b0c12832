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

//! The closing transition of the loading screen.
//!
//! ```text
//! Active --complete()--> Completing --800ms--> TurningOff --800ms-->
//!   BlackoutIn --100ms--> BlackoutOut --2000ms--> Destroyed
//! ```
//!
//! Every step is a timer in a virtual-time [`TimerSet`], advanced by the host
//! through [`TransitionStateMachine::update`]. `destroy()` cancels whatever is
//! pending, so no step can ever run against a torn-down sink.

use std::time::Duration;

use phosphor_core::{TimerSet, TransitionPhase, TransitionTimings, VisualSink};

/// How the machine reached [`TransitionPhase::Destroyed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionExit {
    /// The fade-out ran to its end and the completion callback fired.
    Completed,
    /// `destroy()` was called first. The completion callback never fires.
    Aborted,
}

/// Drives a [`VisualSink`] through the timed power-off sequence.
pub struct TransitionStateMachine<S: VisualSink> {
    phase: TransitionPhase,
    timings: TransitionTimings,
    timers: TimerSet<TransitionPhase>,
    sink: S,
    on_complete: Option<Box<dyn FnOnce()>>,
    destroyed: bool,
    exit: Option<TransitionExit>,
}

impl<S: VisualSink> TransitionStateMachine<S> {
    /// Creates a machine in the `Active` phase. `on_complete` runs once, after
    /// the natural end of the transition, and never after `destroy()`.
    pub fn new(sink: S, timings: TransitionTimings, on_complete: impl FnOnce() + 'static) -> Self {
        Self {
            phase: TransitionPhase::Active,
            timings,
            timers: TimerSet::new(),
            sink,
            on_complete: Some(Box::new(on_complete)),
            destroyed: false,
            exit: None,
        }
    }

    /// Forwards a progress percentage to the sink while still `Active`.
    pub fn report_progress(&mut self, percent: f32) {
        if self.destroyed || self.phase != TransitionPhase::Active {
            return;
        }
        self.sink.set_percent(percent);
    }

    /// Switches the sink to its error indicator.
    ///
    /// Only meaningful while `Active`: once the transition has started there is
    /// nothing left to fail.
    pub fn show_error(&mut self, message: &str) {
        if self.destroyed || self.phase != TransitionPhase::Active {
            return;
        }
        self.sink.show_error(message);
    }

    /// Starts the closing transition. Returns `false` if it was already started
    /// or the machine is destroyed.
    pub fn complete(&mut self) -> bool {
        if self.destroyed || self.phase != TransitionPhase::Active {
            log::debug!("Ignoring complete() in phase {}.", self.phase);
            return false;
        }
        self.enter(TransitionPhase::Completing);
        true
    }

    /// Advances virtual time by `dt` and runs every step that became due.
    pub fn update(&mut self, dt: Duration) {
        if self.destroyed {
            return;
        }
        self.timers.advance(dt);
        while let Some(next) = self.timers.pop_due() {
            self.enter(next);
            if self.destroyed {
                break;
            }
        }
    }

    /// Cancels every pending step and tears the sink down.
    ///
    /// Idempotent. Does not run the completion callback.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        let cancelled = self.timers.cancel_all();
        log::info!(
            "Loading screen destroyed in phase {} ({cancelled} pending step(s) cancelled).",
            self.phase
        );
        self.on_complete = None;
        self.shut_down(TransitionExit::Aborted);
    }

    /// The current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// `None` until the machine reaches `Destroyed`.
    pub fn exit(&self) -> Option<TransitionExit> {
        self.exit
    }

    /// Whether the sink has been torn down.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Steps scheduled but not yet run.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// The sink being driven.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn enter(&mut self, phase: TransitionPhase) {
        log::debug!("Transition: {} -> {}.", self.phase, phase);
        self.phase = phase;

        let next = match phase {
            TransitionPhase::Active => None,
            TransitionPhase::Completing => {
                self.sink.set_percent(100.0);
                self.sink.set_phase(phase);
                Some((self.timings.completing_hold(), TransitionPhase::TurningOff))
            }
            TransitionPhase::TurningOff => {
                self.sink.set_phase(phase);
                Some((self.timings.power_off(), TransitionPhase::BlackoutIn))
            }
            TransitionPhase::BlackoutIn => {
                self.sink.set_phase(phase);
                Some((self.timings.blackout_hold(), TransitionPhase::BlackoutOut))
            }
            TransitionPhase::BlackoutOut => {
                self.sink.set_phase(phase);
                Some((self.timings.fade_out(), TransitionPhase::Destroyed))
            }
            TransitionPhase::Destroyed => {
                self.finish();
                None
            }
        };

        if let Some((delay, next)) = next {
            self.timers.schedule(delay, next);
        }
    }

    fn finish(&mut self) {
        log::info!("Loading screen transition finished.");
        self.shut_down(TransitionExit::Completed);
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }

    fn shut_down(&mut self, exit: TransitionExit) {
        self.timers.cancel_all();
        self.destroyed = true;
        self.phase = TransitionPhase::Destroyed;
        self.exit = Some(exit);
        self.sink.teardown();
    }
}

impl<S: VisualSink> Drop for TransitionStateMachine<S> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Percent(f32),
        Phase(TransitionPhase),
        Error(String),
        Teardown,
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Call>>>);

    impl VisualSink for Recorder {
        fn set_percent(&mut self, percent: f32) {
            self.0.borrow_mut().push(Call::Percent(percent));
        }
        fn set_phase(&mut self, phase: TransitionPhase) {
            self.0.borrow_mut().push(Call::Phase(phase));
        }
        fn show_error(&mut self, message: &str) {
            self.0.borrow_mut().push(Call::Error(message.to_string()));
        }
        fn teardown(&mut self) {
            self.0.borrow_mut().push(Call::Teardown);
        }
    }

    fn machine() -> (TransitionStateMachine<Recorder>, Recorder, Rc<Cell<u32>>) {
        let recorder = Recorder::default();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let machine = TransitionStateMachine::new(
            recorder.clone(),
            TransitionTimings::default(),
            move || counter.set(counter.get() + 1),
        );
        (machine, recorder, fired)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn natural_run_visits_every_phase_and_fires_once() {
        let (mut machine, recorder, fired) = machine();

        assert!(machine.complete());
        machine.update(ms(799));
        assert_eq!(machine.phase(), TransitionPhase::Completing);
        machine.update(ms(1));
        assert_eq!(machine.phase(), TransitionPhase::TurningOff);
        machine.update(ms(800));
        assert_eq!(machine.phase(), TransitionPhase::BlackoutIn);
        machine.update(ms(100));
        assert_eq!(machine.phase(), TransitionPhase::BlackoutOut);
        machine.update(ms(1999));
        assert_eq!(fired.get(), 0);
        machine.update(ms(1));

        assert_eq!(machine.phase(), TransitionPhase::Destroyed);
        assert_eq!(machine.exit(), Some(TransitionExit::Completed));
        assert_eq!(fired.get(), 1);
        assert_eq!(machine.pending_timers(), 0);
        assert_eq!(
            *recorder.0.borrow(),
            vec![
                Call::Percent(100.0),
                Call::Phase(TransitionPhase::Completing),
                Call::Phase(TransitionPhase::TurningOff),
                Call::Phase(TransitionPhase::BlackoutIn),
                Call::Phase(TransitionPhase::BlackoutOut),
                Call::Teardown,
            ]
        );
    }

    #[test]
    fn one_large_step_runs_the_whole_chain() {
        let (mut machine, _recorder, fired) = machine();
        machine.complete();
        machine.update(ms(10_000));
        assert_eq!(machine.exit(), Some(TransitionExit::Completed));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn complete_is_idempotent() {
        let (mut machine, recorder, _fired) = machine();
        assert!(machine.complete());
        assert!(!machine.complete());
        machine.update(ms(400));
        assert!(!machine.complete());

        let completing = recorder
            .0
            .borrow()
            .iter()
            .filter(|call| **call == Call::Phase(TransitionPhase::Completing))
            .count();
        assert_eq!(completing, 1);
        assert_eq!(machine.pending_timers(), 1);
    }

    #[test]
    fn destroy_mid_transition_cancels_everything() {
        let (mut machine, recorder, fired) = machine();
        machine.complete();
        machine.update(ms(900));
        assert_eq!(machine.phase(), TransitionPhase::TurningOff);

        machine.destroy();
        machine.destroy();
        let calls_at_destroy = recorder.0.borrow().len();

        machine.update(ms(10_000));
        machine.report_progress(42.0);
        machine.show_error("late");

        assert_eq!(machine.exit(), Some(TransitionExit::Aborted));
        assert_eq!(fired.get(), 0);
        assert_eq!(machine.pending_timers(), 0);
        assert_eq!(recorder.0.borrow().len(), calls_at_destroy);
        let teardowns = recorder
            .0
            .borrow()
            .iter()
            .filter(|call| **call == Call::Teardown)
            .count();
        assert_eq!(teardowns, 1);
    }

    #[test]
    fn progress_is_only_forwarded_while_active() {
        let (mut machine, recorder, _fired) = machine();
        machine.report_progress(35.0);
        machine.complete();
        machine.report_progress(50.0);

        assert_eq!(
            recorder.0.borrow()[..2],
            [Call::Percent(35.0), Call::Percent(100.0)]
        );
    }

    #[test]
    fn dropping_the_machine_tears_the_sink_down() {
        let (machine, recorder, fired) = machine();
        drop(machine);
        assert_eq!(*recorder.0.borrow(), vec![Call::Teardown]);
        assert_eq!(fired.get(), 0);
    }
}
