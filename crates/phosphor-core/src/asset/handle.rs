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

use super::Asset;
use std::{ops::Deref, sync::Arc};

/// A thread-safe, reference-counted handle to a loaded asset.
///
/// A texture loaded once can be bound to several materials; every binding shares
/// the same pixels. Cloning a handle only increments the reference count.
#[derive(Debug)]
pub struct AssetHandle<T: Asset>(Arc<T>);

impl<T: Asset> AssetHandle<T> {
    /// Creates a new `AssetHandle` that takes ownership of the asset data.
    pub fn new(asset: T) -> Self {
        Self(Arc::new(asset))
    }

    /// Returns `true` if both handles point at the same loaded asset.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Asset> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Asset> Deref for AssetHandle<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(u32);
    impl Asset for Dummy {}

    #[test]
    fn clones_share_the_same_asset() {
        let handle = AssetHandle::new(Dummy(7));
        let other = handle.clone();

        assert!(handle.ptr_eq(&other));
        assert_eq!((*other).0, 7);
        assert!(!handle.ptr_eq(&AssetHandle::new(Dummy(7))));
    }
}
