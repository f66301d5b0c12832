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

use thiserror::Error;

/// An error reported by a scene or resource loader.
///
/// Loaders run on other threads and their underlying errors are rarely
/// `Clone` or `Send`, so the cause is captured as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The bytes could not be fetched.
    #[error("failed to read '{locator}': {reason}")]
    Io {
        /// Locator of the resource that failed.
        locator: String,
        /// The underlying I/O error message.
        reason: String,
    },
    /// The bytes were fetched but could not be decoded.
    #[error("failed to decode '{locator}': {reason}")]
    Decode {
        /// Locator of the resource that failed.
        locator: String,
        /// The decoder's error message.
        reason: String,
    },
    /// The loader dropped its handle without reporting a result.
    #[error("loader for '{locator}' was dropped before reporting a result")]
    Abandoned {
        /// Locator of the resource that was abandoned.
        locator: String,
    },
}

impl LoadError {
    /// Builds an [`LoadError::Io`] from any displayable cause.
    pub fn io(locator: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        LoadError::Io {
            locator: locator.into(),
            reason: reason.to_string(),
        }
    }

    /// Builds a [`LoadError::Decode`] from any displayable cause.
    pub fn decode(locator: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        LoadError::Decode {
            locator: locator.into(),
            reason: reason.to_string(),
        }
    }

    /// The locator the error refers to.
    pub fn locator(&self) -> &str {
        match self {
            LoadError::Io { locator, .. }
            | LoadError::Decode { locator, .. }
            | LoadError::Abandoned { locator } => locator,
        }
    }
}
