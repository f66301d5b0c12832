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


//! Boundary contracts for the two external loaders of a session.
//!
//! A loading session talks to exactly two kinds of collaborators:
//! - a [`SceneLoader`], fetching the single large scene file and reporting
//!   byte progress along the way;
//! - a [`ResourceLoader`], fetching one auxiliary texture per manifest entry.
//!
//! Both are fire-and-forget: `load` must return immediately and report back
//! later through the handle it was given. The handles ([`SceneReporter`],
//! [`ResourceTicket`]) are consumed when they settle, so a loader cannot report
//! a result twice, and a handle dropped without settling reports
//! [`LoadError::Abandoned`] so the session never waits on it forever.

mod error;
mod event;
mod reporter;

pub use error::LoadError;
pub use event::LoadEvent;
pub use reporter::{ResourceTicket, SceneReporter};

/// Loads the primary scene graph of a session.
pub trait SceneLoader {
    /// Starts loading the scene at `locator` and returns immediately.
    ///
    /// The implementation reports progress through
    /// [`SceneReporter::progress`] and settles with exactly one of
    /// [`SceneReporter::succeed`] or [`SceneReporter::fail`].
    fn load(&self, locator: &str, reporter: SceneReporter);
}

/// Loads one auxiliary resource of the session manifest.
pub trait ResourceLoader {
    /// Starts loading the resource at `locator` and returns immediately.
    ///
    /// The implementation settles the ticket with exactly one of
    /// [`ResourceTicket::succeed`] or [`ResourceTicket::fail`].
    fn load(&self, locator: &str, ticket: ResourceTicket);
}

impl<F> SceneLoader for F
where
    F: Fn(&str, SceneReporter),
{
    fn load(&self, locator: &str, reporter: SceneReporter) {
        self(locator, reporter)
    }
}

impl<F> ResourceLoader for F
where
    F: Fn(&str, ResourceTicket),
{
    fn load(&self, locator: &str, ticket: ResourceTicket) {
        self(locator, ticket)
    }
}
