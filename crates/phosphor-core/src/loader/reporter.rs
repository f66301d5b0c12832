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

use flume::Sender;

use super::{LoadError, LoadEvent};
use crate::asset::Texture;
use crate::scene::SceneNode;

/// Sends `event` on `sender`, treating a closed channel as a benign late arrival.
fn deliver(sender: &Sender<LoadEvent>, event: LoadEvent) {
    if sender.send(event).is_err() {
        // The session is gone; nobody is waiting for this result anymore.
        log::trace!("Load event dropped: session no longer listening.");
    }
}

/// Reporting handle handed to a [`super::SceneLoader`].
///
/// `progress` may be called any number of times; `succeed` and `fail` consume
/// the reporter, so at most one of them ever runs.
#[derive(Debug)]
pub struct SceneReporter {
    locator: String,
    sender: Option<Sender<LoadEvent>>,
}

impl SceneReporter {
    /// Creates a reporter publishing on `sender`.
    pub fn new(locator: impl Into<String>, sender: Sender<LoadEvent>) -> Self {
        Self {
            locator: locator.into(),
            sender: Some(sender),
        }
    }

    /// The locator this reporter was issued for.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Reports loader-native progress counters.
    pub fn progress(&self, loaded: u64, total: u64) {
        if let Some(sender) = &self.sender {
            deliver(sender, LoadEvent::SceneProgress { loaded, total });
        }
    }

    /// Hands the loaded scene root over to the session.
    pub fn succeed(mut self, root: SceneNode) {
        self.settle(LoadEvent::SceneLoaded(root));
    }

    /// Reports that the scene could not be loaded.
    pub fn fail(mut self, error: LoadError) {
        self.settle(LoadEvent::SceneFailed(error));
    }

    fn settle(&mut self, event: LoadEvent) {
        if let Some(sender) = self.sender.take() {
            deliver(&sender, event);
        }
    }
}

impl Drop for SceneReporter {
    fn drop(&mut self) {
        if self.sender.is_some() {
            log::warn!("Scene loader for '{}' dropped its reporter.", self.locator);
            let locator = self.locator.clone();
            self.settle(LoadEvent::SceneFailed(LoadError::Abandoned { locator }));
        }
    }
}

/// One-shot completion handle for a single manifest entry.
///
/// Issued once per entry by the asset load set. `succeed` and `fail` consume
/// the ticket; dropping it unsettled reports [`LoadError::Abandoned`].
#[derive(Debug)]
pub struct ResourceTicket {
    index: usize,
    identifier: String,
    locator: String,
    sender: Option<Sender<LoadEvent>>,
}

impl ResourceTicket {
    /// Creates the ticket for manifest entry `index`.
    pub fn new(
        index: usize,
        identifier: impl Into<String>,
        locator: impl Into<String>,
        sender: Sender<LoadEvent>,
    ) -> Self {
        Self {
            index,
            identifier: identifier.into(),
            locator: locator.into(),
            sender: Some(sender),
        }
    }

    /// Position of the entry in the manifest.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Identifier of the entry.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Locator of the entry.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Hands the decoded texture over to the session.
    pub fn succeed(mut self, texture: Texture) {
        let index = self.index;
        self.settle(LoadEvent::ResourceLoaded { index, texture });
    }

    /// Reports that this entry could not be loaded.
    pub fn fail(mut self, error: LoadError) {
        let index = self.index;
        self.settle(LoadEvent::ResourceFailed { index, error });
    }

    fn settle(&mut self, event: LoadEvent) {
        if let Some(sender) = self.sender.take() {
            deliver(&sender, event);
        }
    }
}

impl Drop for ResourceTicket {
    fn drop(&mut self) {
        if self.sender.is_some() {
            log::warn!(
                "Resource loader for '{}' dropped its ticket.",
                self.identifier
            );
            let index = self.index;
            let error = LoadError::Abandoned {
                locator: self.locator.clone(),
            };
            self.settle(LoadEvent::ResourceFailed { index, error });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventBus;

    #[test]
    fn scene_reporter_forwards_progress_then_result() {
        let bus = EventBus::<LoadEvent>::new();
        let reporter = SceneReporter::new("room.glb", bus.sender());

        reporter.progress(10, 40);
        reporter.progress(40, 40);
        reporter.succeed(SceneNode::new("Room"));

        let events = bus.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(
            events[0],
            LoadEvent::SceneProgress { loaded: 10, total: 40 }
        ));
        assert!(matches!(&events[2], LoadEvent::SceneLoaded(root) if root.name == "Room"));
    }

    #[test]
    fn dropped_reporter_reports_abandonment_once() {
        let bus = EventBus::<LoadEvent>::new();
        drop(SceneReporter::new("room.glb", bus.sender()));

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        match &events[0] {
            LoadEvent::SceneFailed(LoadError::Abandoned { locator }) => {
                assert_eq!(locator, "room.glb")
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn ticket_settles_exactly_once() {
        let bus = EventBus::<LoadEvent>::new();
        let ticket = ResourceTicket::new(2, "Screen", "screen.png", bus.sender());
        assert_eq!(ticket.index(), 2);

        ticket.fail(LoadError::io("screen.png", "not found"));

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            LoadEvent::ResourceFailed { index: 2, error: LoadError::Io { .. } }
        ));
    }

    #[test]
    fn dropped_ticket_counts_as_failure() {
        let bus = EventBus::<LoadEvent>::new();
        drop(ResourceTicket::new(0, "Poster", "poster.png", bus.sender()));

        let events = bus.drain();
        assert!(matches!(
            &events[..],
            [LoadEvent::ResourceFailed { index: 0, error: LoadError::Abandoned { .. } }]
        ));
    }

    #[test]
    fn settling_after_the_session_is_gone_is_silent() {
        let bus = EventBus::<LoadEvent>::new();
        let ticket = ResourceTicket::new(0, "Poster", "poster.png", bus.sender());
        drop(bus);

        ticket.succeed(Texture::white("poster.png"));
    }
}
