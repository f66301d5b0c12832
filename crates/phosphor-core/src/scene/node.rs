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

use super::Material;

/// A node of a loaded scene graph.
///
/// Children are owned by their parent, so the root owns the whole tree. Whoever
/// holds the root holds the scene; mutation happens in place through
/// [`SceneNode::traverse_mut`].
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    /// The node name authored in the scene file.
    pub name: String,
    /// The material drawn for this node, if it carries geometry.
    pub material: Option<Material>,
    /// Child nodes, in authoring order.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates an empty node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper attaching a material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Builder-style helper appending a child.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Visits this node and every descendant, depth-first, parents before children.
    pub fn traverse<'a>(&'a self, visit: &mut impl FnMut(&'a SceneNode)) {
        visit(self);
        for child in &self.children {
            child.traverse(visit);
        }
    }

    /// Mutable depth-first traversal, parents before children.
    pub fn traverse_mut(&mut self, visit: &mut impl FnMut(&mut SceneNode)) {
        visit(self);
        for child in &mut self.children {
            child.traverse_mut(visit);
        }
    }

    /// Finds the first node (depth-first) with the given name.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Finds the first material (depth-first) with the given name.
    pub fn find_material(&self, name: &str) -> Option<&Material> {
        if let Some(material) = self.material.as_ref().filter(|m| m.name == name) {
            return Some(material);
        }
        self.children
            .iter()
            .find_map(|child| child.find_material(name))
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SceneNode {
        SceneNode::new("Room")
            .with_child(
                SceneNode::new("Television")
                    .with_child(SceneNode::new("Screen").with_material(Material::named("Screen")))
                    .with_child(SceneNode::new("Shell").with_material(Material::named("Plastic"))),
            )
            .with_child(SceneNode::new("Desk").with_material(Material::named("Wood")))
    }

    #[test]
    fn traversal_is_depth_first_preorder() {
        let tree = sample_tree();
        let mut names = Vec::new();
        tree.traverse(&mut |node| names.push(node.name.as_str()));

        assert_eq!(names, ["Room", "Television", "Screen", "Shell", "Desk"]);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn traverse_mut_edits_in_place() {
        let mut tree = sample_tree();
        tree.traverse_mut(&mut |node| {
            if let Some(material) = node.material.as_mut() {
                material.roughness = 0.1;
                material.mark_dirty();
            }
        });

        let wood = tree.find_material("Wood").expect("Wood material should exist");
        assert_eq!(wood.roughness, 0.1);
        assert_eq!(wood.version(), 1);
        assert!(tree.find("Room").and_then(|n| n.material.as_ref()).is_none());
    }

    #[test]
    fn find_returns_none_for_unknown_names() {
        let tree = sample_tree();
        assert!(tree.find("Lamp").is_none());
        assert!(tree.find_material("Chrome").is_none());
        assert_eq!(tree.find("Shell").map(|n| n.children.len()), Some(0));
    }
}
