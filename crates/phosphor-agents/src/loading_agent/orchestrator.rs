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

use std::time::Duration;

use phosphor_core::asset::Texture;
use phosphor_core::scene::SceneNode;
use phosphor_core::{
    ConfigError, EventBus, LoadError, LoadEvent, ResourceLoader, SceneLoader, SceneReporter,
    SessionConfig, TransitionPhase, VisualSink,
};
use phosphor_lanes::{PatchReport, ProgressAggregator, ScenePatcher};

use super::asset_set::{AssetLoadSet, EntryStatus};
use super::state::{completion_gate_open, LoadingState};
use crate::transition_agent::{TransitionExit, TransitionStateMachine};

/// Coordinates one loading session from `start()` to teardown.
///
/// The scene and the textures load concurrently. Whichever finishes last opens
/// the completion gate; the scene is then patched and the closing transition
/// started, each exactly once. A scene failure is fatal and freezes the screen
/// on its error indicator; a texture failure only leaves one material bare.
pub struct LoadingOrchestrator<S: VisualSink> {
    scene_locator: String,
    events: EventBus<LoadEvent>,
    progress: ProgressAggregator,
    assets: AssetLoadSet,
    patcher: ScenePatcher,
    transition: TransitionStateMachine<S>,
    state: LoadingState,
    started: bool,
    model_loaded: bool,
    scene_root: Option<SceneNode>,
    patch_report: Option<PatchReport>,
    last_error: Option<LoadError>,
    is_destroyed: bool,
}

impl<S: VisualSink> LoadingOrchestrator<S> {
    /// Builds a session from a validated configuration.
    ///
    /// `on_session_complete` runs once, at the natural end of the closing
    /// transition. It never runs if the session fails or is destroyed first.
    pub fn new(
        config: &SessionConfig,
        sink: S,
        on_session_complete: impl FnOnce() + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let patcher = match &config.overrides {
            Some(rules) => ScenePatcher::new(rules.iter().cloned()),
            None => ScenePatcher::default(),
        };

        Ok(Self {
            scene_locator: config.scene.clone(),
            events: EventBus::new(),
            progress: ProgressAggregator::new(config.progress),
            assets: AssetLoadSet::new(config.textures.clone()),
            patcher,
            transition: TransitionStateMachine::new(sink, config.transition, on_session_complete),
            state: LoadingState::Loading,
            started: false,
            model_loaded: false,
            scene_root: None,
            patch_report: None,
            last_error: None,
            is_destroyed: false,
        })
    }

    /// Kicks off the scene load and every texture load.
    ///
    /// Returns immediately. Results are applied by later calls to
    /// [`update`](Self::update).
    pub fn start(&mut self, scene_loader: &dyn SceneLoader, resource_loader: &dyn ResourceLoader) {
        if self.is_destroyed {
            log::warn!("Loading session was destroyed; ignoring start().");
            return;
        }
        if self.started {
            log::warn!("Loading session already started; ignoring start().");
            return;
        }
        self.started = true;
        log::info!(
            "Loading session started: scene '{}', {} texture(s).",
            self.scene_locator,
            self.assets.total()
        );

        self.progress
            .record_aux_progress(self.assets.completed(), self.assets.total());
        self.transition.report_progress(self.progress.combined_percent());

        self.assets.start_all(resource_loader, &self.events);
        scene_loader.load(
            &self.scene_locator,
            SceneReporter::new(self.scene_locator.as_str(), self.events.sender()),
        );
    }

    /// Advances the transition by `dt`, then applies queued loader events.
    ///
    /// Events are applied at the end of the frame, so a transition started by
    /// one of them is timed from that instant and keeps its full first step.
    pub fn update(&mut self, dt: Duration) {
        if self.is_destroyed {
            let dropped = self.events.drain().len();
            if dropped > 0 {
                log::trace!("Discarded {dropped} event(s) after destroy().");
            }
            return;
        }

        self.transition.update(dt);

        for event in self.events.drain() {
            self.handle_event(event);
        }

        if self.state == LoadingState::PatchedAndTransitioning
            && self.transition.exit() == Some(TransitionExit::Completed)
        {
            self.state = LoadingState::Done;
            log::info!("Loading session done.");
        }
    }

    /// Applies one loader event. Events arriving after `destroy()` are dropped.
    pub fn handle_event(&mut self, event: LoadEvent) {
        if self.is_destroyed {
            log::trace!("Ignoring {event:?} after destroy().");
            return;
        }
        match event {
            LoadEvent::SceneProgress { loaded, total } => self.on_model_progress(loaded, total),
            LoadEvent::SceneLoaded(root) => self.on_model_loaded(root),
            LoadEvent::SceneFailed(error) => self.on_model_failed(error),
            LoadEvent::ResourceLoaded { index, texture } => {
                self.on_resource_finished(index, Ok(texture))
            }
            LoadEvent::ResourceFailed { index, error } => {
                self.on_resource_finished(index, Err(error))
            }
        }
    }

    /// Aborts the session: cancels the transition and tears the sink down.
    ///
    /// Idempotent. Safe at any point of the lifecycle.
    pub fn destroy(&mut self) {
        if self.is_destroyed {
            return;
        }
        self.is_destroyed = true;
        log::info!("Loading session destroyed in state {}.", self.state);
        self.transition.destroy();
    }

    fn on_model_progress(&mut self, loaded: u64, total: u64) {
        if self.model_loaded || self.state != LoadingState::Loading {
            return;
        }
        self.progress.record_model_progress(loaded, total);
        self.publish_progress();
    }

    fn on_model_loaded(&mut self, root: SceneNode) {
        if self.state == LoadingState::Error {
            log::debug!("Scene arrived after the session failed; ignoring it.");
            return;
        }
        if self.model_loaded {
            log::warn!("Scene reported loaded more than once; keeping the first root.");
            return;
        }

        log::info!(
            "Scene '{}' loaded ({} node(s)).",
            self.scene_locator,
            root.node_count()
        );
        self.model_loaded = true;
        self.scene_root = Some(root);
        self.progress.mark_model_complete();
        self.progress
            .record_aux_progress(self.assets.completed(), self.assets.total());
        self.publish_progress();
        self.check_completion_gate();
    }

    fn on_model_failed(&mut self, error: LoadError) {
        if self.model_loaded || self.state != LoadingState::Loading {
            log::debug!("Ignoring late scene failure: {error}");
            return;
        }
        log::error!("Scene '{}' failed to load: {error}", self.scene_locator);
        self.state = LoadingState::Error;
        self.transition.show_error(&error.to_string());
        self.last_error = Some(error);
    }

    fn on_resource_finished(&mut self, index: usize, outcome: Result<Texture, LoadError>) {
        let all_complete = match self.assets.on_entry_finished(index, outcome) {
            EntryStatus::Counted { all_complete } => all_complete,
            EntryStatus::Duplicate | EntryStatus::Unknown => return,
        };
        if all_complete {
            log::info!("All {} texture(s) finished.", self.assets.total());
        }

        self.progress
            .record_aux_progress(self.assets.completed(), self.assets.total());
        self.publish_progress();
        self.check_completion_gate();
    }

    fn publish_progress(&mut self) {
        if self.state == LoadingState::Loading {
            self.transition
                .report_progress(self.progress.combined_percent());
        }
    }

    /// Runs the patch step and starts the transition, exactly once, as soon as
    /// both phases are done.
    fn check_completion_gate(&mut self) {
        if self.state != LoadingState::Loading {
            return;
        }
        if !completion_gate_open(
            self.model_loaded,
            self.assets.completed(),
            self.assets.total(),
        ) {
            return;
        }

        self.state = LoadingState::ReadyToPatch;
        if let Some(root) = self.scene_root.as_mut() {
            let report = self.patcher.apply(root, self.assets.resources());
            log::info!(
                "Patched {} of {} material(s) ({} failed, {} without texture).",
                report.patched,
                report.materials_visited,
                report.skipped_failed,
                report.skipped_missing
            );
            self.patch_report = Some(report);
        }

        self.transition.complete();
        self.state = LoadingState::PatchedAndTransitioning;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadingState {
        self.state
    }

    /// The percentage currently shown, in `[0, 100]`.
    pub fn combined_percent(&self) -> f32 {
        self.progress.combined_percent()
    }

    /// Current phase of the closing transition.
    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    /// The scene root, once loaded.
    pub fn scene_root(&self) -> Option<&SceneNode> {
        self.scene_root.as_ref()
    }

    /// The result of the patch step, once it ran.
    pub fn patch_report(&self) -> Option<PatchReport> {
        self.patch_report
    }

    /// The scene failure that ended the session, if any.
    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    /// The texture set of this session.
    pub fn assets(&self) -> &AssetLoadSet {
        &self.assets
    }

    /// Whether `destroy()` has been called.
    pub fn is_destroyed(&self) -> bool {
        self.is_destroyed
    }

    /// Whether the session reached `Done` or `Error`, or was destroyed.
    pub fn is_finished(&self) -> bool {
        self.is_destroyed || self.state.is_terminal()
    }

    /// Transition steps scheduled but not yet run.
    pub fn pending_timers(&self) -> usize {
        self.transition.pending_timers()
    }

    /// Loader events queued and not yet applied.
    pub fn pending_events(&self) -> usize {
        self.events.pending()
    }

    /// The sink being driven.
    pub fn sink(&self) -> &S {
        self.transition.sink()
    }
}
