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

/// Manages a generic, thread-safe event channel.
///
/// The bus is generic over the event type `T`, so `phosphor-core` stays
/// decoupled from the concrete events defined by higher-level crates. Events
/// only need to be `Send`; they are moved, never cloned, which lets a loader
/// hand over a decoded texture or a whole scene tree without copying it.
#[derive(Debug)]
pub struct EventBus<T: Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Send + 'static> EventBus<T> {
    /// Creates a new EventBus with an unbounded channel for a specific event type.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::trace!("EventBus initialized.");
        Self { sender, receiver }
    }

    /// Returns a clone of the sender end of the channel.
    /// Hand this to loaders so they can report back from any thread.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Takes every event currently queued, in arrival order, without blocking.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Number of events waiting to be drained.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl<T: Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
