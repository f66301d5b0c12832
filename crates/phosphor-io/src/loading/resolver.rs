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

//! Resolution of locators against a root directory.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use phosphor_core::LoadError;

/// Resolves locators relative to a base directory and reads them from disk.
#[derive(Debug, Clone)]
pub struct FileSystemResolver {
    base_path: PathBuf,
    chunk_size: usize,
}

impl FileSystemResolver {
    /// Default read granularity, also the granularity of progress reports.
    pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

    /// Creates a resolver rooted at `base_path`.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }

    /// Overrides the chunk size. Zero is treated as one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// The path a locator maps to. Absolute locators are kept as they are.
    pub fn resolve(&self, locator: &str) -> PathBuf {
        let path = Path::new(locator);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Reads the whole file behind `locator`.
    pub fn read(&self, locator: &str) -> Result<Vec<u8>, LoadError> {
        self.read_with_progress(locator, |_, _| {})
    }

    /// Reads the whole file, calling `on_progress(loaded, total)` after every
    /// chunk. `total` is `0` when the size cannot be known up front.
    pub fn read_with_progress(
        &self,
        locator: &str,
        mut on_progress: impl FnMut(u64, u64),
    ) -> Result<Vec<u8>, LoadError> {
        let path = self.resolve(locator);
        let mut file = File::open(&path).map_err(|e| LoadError::io(locator, e))?;
        let total = file.metadata().map(|m| m.len()).unwrap_or(0);

        let mut bytes = Vec::with_capacity(total as usize);
        let mut chunk = vec![0u8; self.chunk_size];
        loop {
            let read = file.read(&mut chunk).map_err(|e| LoadError::io(locator, e))?;
            if read == 0 {
                break;
            }
            bytes.extend_from_slice(&chunk[..read]);
            on_progress(bytes.len() as u64, total);
        }

        log::trace!("Read {} byte(s) from {:?}.", bytes.len(), path);
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_locators_are_joined_and_absolute_ones_kept() {
        let resolver = FileSystemResolver::new("/data/assets");
        assert_eq!(
            resolver.resolve("textures/wood.png"),
            PathBuf::from("/data/assets/textures/wood.png")
        );
        assert_eq!(resolver.resolve("/tmp/x.png"), PathBuf::from("/tmp/x.png"));
    }

    #[test]
    fn progress_is_reported_per_chunk() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("blob.bin"), [7u8; 10])?;
        let resolver = FileSystemResolver::new(dir.path()).with_chunk_size(4);

        let mut reports = Vec::new();
        let bytes = resolver.read_with_progress("blob.bin", |loaded, total| {
            reports.push((loaded, total))
        })?;

        assert_eq!(bytes.len(), 10);
        assert_eq!(reports, vec![(4, 10), (8, 10), (10, 10)]);
        Ok(())
    }

    #[test]
    fn missing_files_are_io_errors() {
        let resolver = FileSystemResolver::new("/definitely/not/here");
        let error = resolver.read("nope.png").unwrap_err();
        assert!(matches!(error, LoadError::Io { ref locator, .. } if locator == "nope.png"));
    }
}
