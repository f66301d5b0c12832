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

//! Reading a session configuration from a TOML file.
//!
//! ```toml
//! scene = "room.gltf"
//! asset_root = "assets"
//!
//! [[textures]]
//! identifier = "Screen"
//! locator = "textures/screen.png"
//!
//! [[overrides]]
//! material = "Screen"
//! property = { emissive_intensity = 1.5 }
//! ```
//!
//! A relative `asset_root` is resolved against the directory holding the file.

use std::fs;
use std::path::{Path, PathBuf};

use phosphor_core::{ConfigError, SessionConfig};
use thiserror::Error;

/// Why a session configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("failed to read session config '{}'", .path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML, or does not match the expected layout.
    #[error("failed to parse session config '{}'", .path.display())]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// The parser error, with line and column.
        #[source]
        source: toml::de::Error,
    },
    /// The file parsed but breaks a configuration rule.
    #[error("invalid session config '{}'", .path.display())]
    Invalid {
        /// The file that was validated.
        path: PathBuf,
        /// The violated rule.
        #[source]
        source: ConfigError,
    },
}

/// Reads, parses and validates the session configuration at `path`.
pub fn load_session_config(path: impl AsRef<Path>) -> Result<SessionConfig, ConfigLoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config: SessionConfig =
        toml::from_str(&text).map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if config.asset_root.is_relative() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.asset_root = base.join(&config.asset_root);
    }

    config.validate().map_err(|source| ConfigLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Loaded session config '{}': scene '{}', {} texture(s).",
        path.display(),
        config.scene,
        config.textures.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phosphor_core::scene::{MaterialOverride, MaterialProperty};
    use phosphor_core::TransitionTimings;

    fn write(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("Session.toml");
        fs::write(&path, text).expect("write config");
        path
    }

    #[test]
    fn full_config_round_trips_from_disk() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write(
            dir.path(),
            r#"
scene = "room.gltf"
asset_root = "assets"

[[textures]]
identifier = "Screen"
locator = "screen.png"

[[textures]]
identifier = "Wood"
locator = "wood.png"

[progress]
model = 0.6
aux = 0.4

[transition]
fade_out_ms = 500

[[overrides]]
material = "Screen"
property = { emissive_intensity = 2.0 }

[[overrides]]
material = "Screen"
property = "map_as_emissive"
"#,
        );

        let config = load_session_config(&path)?;

        assert_eq!(config.scene, "room.gltf");
        assert_eq!(config.asset_root, dir.path().join("assets"));
        assert_eq!(config.textures.len(), 2);
        assert_eq!(config.progress.model, 0.6);
        assert_eq!(
            config.transition,
            TransitionTimings {
                fade_out_ms: 500,
                ..TransitionTimings::default()
            }
        );
        assert_eq!(
            config.overrides,
            Some(vec![
                MaterialOverride::new("Screen", MaterialProperty::EmissiveIntensity(2.0)),
                MaterialOverride::new("Screen", MaterialProperty::MapAsEmissive),
            ])
        );
        Ok(())
    }

    #[test]
    fn minimal_config_uses_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write(dir.path(), "scene = \"room.glb\"\n");

        let config = load_session_config(&path)?;

        assert!(config.textures.is_empty());
        assert!(config.overrides.is_none());
        assert_eq!(config.transition, TransitionTimings::default());
        assert_eq!(config.asset_root, dir.path().join(""));
        Ok(())
    }

    #[test]
    fn each_failure_kind_is_reported() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let missing = load_session_config(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(ConfigLoadError::Io { .. })));

        let unknown_key = write(dir.path(), "scene = \"room.glb\"\nshader = \"crt\"\n");
        assert!(matches!(
            load_session_config(&unknown_key),
            Err(ConfigLoadError::Parse { .. })
        ));

        let duplicate = write(
            dir.path(),
            r#"
scene = "room.glb"
textures = [
    { identifier = "Wood", locator = "a.png" },
    { identifier = "Wood", locator = "b.png" },
]
"#,
        );
        assert!(matches!(
            load_session_config(&duplicate),
            Err(ConfigLoadError::Invalid {
                source: ConfigError::DuplicateIdentifier(_),
                ..
            })
        ));
        Ok(())
    }
}
