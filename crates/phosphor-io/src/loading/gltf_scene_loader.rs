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

//! glTF scene loader producing the material graph of a scene.

use std::sync::Arc;
use std::thread;

use gltf::material::AlphaMode;
use phosphor_core::scene::{Material, SceneNode};
use phosphor_core::{LoadError, SceneLoader, SceneReporter};

use super::FileSystemResolver;

/// Loads `.gltf` and `.glb` files on a worker thread.
///
/// Only the node hierarchy and the materials are kept; geometry is the
/// renderer's business. Each mesh primitive becomes a child node carrying the
/// primitive's material, so two primitives of one mesh can be patched
/// independently.
#[derive(Debug, Clone)]
pub struct GltfSceneLoader {
    resolver: Arc<FileSystemResolver>,
}

impl GltfSceneLoader {
    /// Creates a loader reading through `resolver`.
    pub fn new(resolver: FileSystemResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Loads and converts a scene synchronously.
    pub fn load_blocking(
        &self,
        locator: &str,
        on_progress: impl FnMut(u64, u64),
    ) -> Result<SceneNode, LoadError> {
        let bytes = self.resolver.read_with_progress(locator, on_progress)?;
        parse_scene(locator, &bytes)
    }
}

impl SceneLoader for GltfSceneLoader {
    fn load(&self, locator: &str, reporter: SceneReporter) {
        let loader = self.clone();
        let locator = locator.to_string();
        let spawned = thread::Builder::new()
            .name("phosphor-scene-loader".into())
            .spawn(move || {
                let result =
                    loader.load_blocking(&locator, |loaded, total| reporter.progress(loaded, total));
                match result {
                    Ok(root) => reporter.succeed(root),
                    Err(error) => reporter.fail(error),
                }
            });
        if let Err(error) = spawned {
            log::error!("Could not spawn the scene loader thread: {error}");
        }
    }
}

/// Converts glTF bytes into a scene tree rooted at a node named after the scene.
pub fn parse_scene(locator: &str, bytes: &[u8]) -> Result<SceneNode, LoadError> {
    let gltf = gltf::Gltf::from_slice(bytes).map_err(|e| LoadError::decode(locator, e))?;

    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or_else(|| LoadError::decode(locator, "the file contains no scene"))?;

    let mut root = SceneNode::new(scene.name().unwrap_or(locator));
    for node in scene.nodes() {
        root.children.push(convert_node(&node));
    }

    log::debug!(
        "Parsed '{}': {} node(s), {} material(s).",
        locator,
        root.node_count(),
        gltf.materials().len()
    );
    Ok(root)
}

fn convert_node(node: &gltf::Node<'_>) -> SceneNode {
    let name = node
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("node{}", node.index()));
    let mut converted = SceneNode::new(name.as_str());

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            converted.children.push(
                SceneNode::new(format!("{}#{}", name, primitive.index()))
                    .with_material(convert_material(&primitive.material())),
            );
        }
    }
    for child in node.children() {
        converted.children.push(convert_node(&child));
    }
    converted
}

fn convert_material(material: &gltf::Material<'_>) -> Material {
    let pbr = material.pbr_metallic_roughness();
    let name = material.name().unwrap_or_default();
    let [r, g, b] = material.emissive_factor();

    let mut converted = Material::named(name);
    converted.base_color = pbr.base_color_factor();
    converted.roughness = pbr.roughness_factor();
    converted.metalness = pbr.metallic_factor();
    converted.emissive_intensity = r.max(g).max(b);
    if matches!(material.alpha_mode(), AlphaMode::Blend) {
        converted.transparent = true;
        converted.opacity = converted.base_color[3];
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "name": "Room", "nodes": [0, 2] }],
        "nodes": [
            { "name": "Television", "children": [1] },
            { "name": "Panel", "mesh": 0 },
            { "name": "Desk", "mesh": 1 }
        ],
        "buffers": [{ "byteLength": 36, "uri": "positions.bin" }],
        "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
        "accessors": [{
            "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
            "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
        }],
        "meshes": [
            { "primitives": [
                { "attributes": { "POSITION": 0 }, "material": 0 },
                { "attributes": { "POSITION": 0 }, "material": 1 }
            ] },
            { "primitives": [{ "attributes": { "POSITION": 0 }, "material": 2 }] }
        ],
        "materials": [
            { "name": "Screen" },
            { "name": "Glass", "alphaMode": "BLEND",
              "pbrMetallicRoughness": { "baseColorFactor": [1.0, 1.0, 1.0, 0.4] } },
            { "name": "Wood",
              "pbrMetallicRoughness": { "roughnessFactor": 0.8, "metallicFactor": 0.0 } }
        ]
    }"#;

    #[test]
    fn builds_a_material_graph() {
        let root = parse_scene("room.gltf", ROOM.as_bytes()).expect("valid glTF");

        assert_eq!(root.name, "Room");
        let television = root.find("Television").expect("television node");
        assert_eq!(television.children.len(), 1);

        let glass = root.find_material("Glass").expect("glass material");
        assert!(glass.transparent);
        assert!((glass.opacity - 0.4).abs() < 1e-6);

        let wood = root.find_material("Wood").expect("wood material");
        assert!((wood.roughness - 0.8).abs() < 1e-6);
        assert!(wood.map.is_none());
        assert!(!wood.is_dirty());

        assert!(root.find("Panel#1").is_some());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let error = parse_scene("room.glb", b"not a gltf file").unwrap_err();
        assert!(matches!(error, LoadError::Decode { .. }));
    }
}
