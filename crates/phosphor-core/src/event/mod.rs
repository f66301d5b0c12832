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


//! Provides foundational primitives for event-driven communication.
//!
//! Loaders run on their own threads and never touch session state directly;
//! they publish events on an [`EventBus`], a generic MPSC (multi-producer,
//! single-consumer) channel that the owning agent drains on its own thread.

mod bus;

pub use self::bus::EventBus;
