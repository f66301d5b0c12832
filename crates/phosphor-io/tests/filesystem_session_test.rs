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

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use phosphor_agents::{LoadingOrchestrator, LoadingState};
use phosphor_core::{TransitionPhase, TransitionTimings, VisualSink};
use phosphor_io::{
    load_session_config, FileSystemResolver, GltfSceneLoader, ImageResourceLoader,
};
use tempfile::tempdir;

// --- Test Setup: a sink that only remembers whether it was torn down ---
#[derive(Default)]
struct NullSink {
    torn_down: Rc<Cell<bool>>,
}

impl VisualSink for NullSink {
    fn set_percent(&mut self, _percent: f32) {}
    fn set_phase(&mut self, _phase: TransitionPhase) {}
    fn show_error(&mut self, _message: &str) {}
    fn teardown(&mut self) {
        self.torn_down.set(true);
    }
}

const SCENE: &str = r#"{
    "asset": { "version": "2.0" },
    "scene": 0,
    "scenes": [{ "name": "Room", "nodes": [0] }],
    "nodes": [{ "name": "Television", "mesh": 0 }],
    "buffers": [{ "byteLength": 36, "uri": "positions.bin" }],
    "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
    "accessors": [{
        "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
        "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
    }],
    "meshes": [{ "primitives": [
        { "attributes": { "POSITION": 0 }, "material": 0 },
        { "attributes": { "POSITION": 0 }, "material": 1 }
    ] }],
    "materials": [{ "name": "Screen" }, { "name": "Glass" }]
}"#;

fn write_fixture(root: &Path) -> Result<()> {
    let assets = root.join("assets");
    std::fs::create_dir_all(&assets)?;
    std::fs::write(assets.join("room.gltf"), SCENE)?;
    image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 255, 0, 255]))
        .save(assets.join("screen.png"))?;
    std::fs::write(
        root.join("Session.toml"),
        r#"
scene = "room.gltf"
asset_root = "assets"

[[textures]]
identifier = "Screen"
locator = "screen.png"

[[textures]]
identifier = "Glass"
locator = "missing.png"

[transition]
completing_hold_ms = 10
power_off_ms = 10
blackout_hold_ms = 10
fade_out_ms = 10
"#,
    )?;
    Ok(())
}
// ---

#[test]
fn session_runs_end_to_end_from_disk() -> Result<()> {
    // --- 1. ARRANGE: a scene, one good texture and one missing one ---
    let dir = tempdir()?;
    write_fixture(dir.path())?;
    let config = load_session_config(dir.path().join("Session.toml"))?;
    assert_eq!(
        config.transition,
        TransitionTimings {
            completing_hold_ms: 10,
            power_off_ms: 10,
            blackout_hold_ms: 10,
            fade_out_ms: 10,
        }
    );

    let sink = NullSink::default();
    let torn_down = sink.torn_down.clone();
    let completions = Rc::new(Cell::new(0));
    let counter = completions.clone();
    let mut orchestrator =
        LoadingOrchestrator::new(&config, sink, move || counter.set(counter.get() + 1))?;

    let resolver = FileSystemResolver::new(&config.asset_root).with_chunk_size(64);
    let scene_loader = GltfSceneLoader::new(resolver.clone());
    let resource_loader = ImageResourceLoader::new(resolver);

    // --- 2. ACT: drive the session with a fixed step until it settles ---
    orchestrator.start(&scene_loader, &resource_loader);
    let deadline = Instant::now() + Duration::from_secs(10);
    while !orchestrator.is_finished() {
        if Instant::now() > deadline {
            bail!("session stuck in state {}", orchestrator.state());
        }
        orchestrator.update(Duration::from_millis(16));
        std::thread::sleep(Duration::from_millis(1));
    }

    // --- 3. ASSERT ---
    assert_eq!(orchestrator.state(), LoadingState::Done);
    assert_eq!(completions.get(), 1);
    assert!(torn_down.get());

    let root = orchestrator.scene_root().expect("scene root");
    let screen = root.find_material("Screen").expect("screen material");
    assert_eq!(screen.map.as_ref().map(|t| (t.width, t.height)), Some((4, 4)));
    assert!(screen.emissive_map.is_some());
    assert!(root.find_material("Glass").and_then(|m| m.map.as_ref()).is_none());
    assert_eq!(orchestrator.patch_report().map(|r| r.skipped_failed), Some(1));
    Ok(())
}

#[test]
fn missing_scene_ends_in_error() -> Result<()> {
    let dir = tempdir()?;
    write_fixture(dir.path())?;
    let mut config = load_session_config(dir.path().join("Session.toml"))?;
    config.scene = "nowhere.gltf".into();

    let mut orchestrator = LoadingOrchestrator::new(&config, NullSink::default(), || {})?;
    let resolver = FileSystemResolver::new(&config.asset_root);
    orchestrator.start(
        &GltfSceneLoader::new(resolver.clone()),
        &ImageResourceLoader::new(resolver),
    );

    let deadline = Instant::now() + Duration::from_secs(10);
    while !orchestrator.is_finished() && Instant::now() < deadline {
        orchestrator.update(Duration::from_millis(16));
        std::thread::sleep(Duration::from_millis(1));
    }

    assert_eq!(orchestrator.state(), LoadingState::Error);
    assert!(orchestrator.scene_root().is_none());
    Ok(())
}
