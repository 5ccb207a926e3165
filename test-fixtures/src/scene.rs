//! In-memory [`ISceneGraph`] implementation. Keeps nodes in insertion order
//! and records enough state for tests to assert on mutations.

use std::collections::HashMap;

use uuid::Uuid;

use visualeyes_core::models::{
    Artboard, ArtboardExtent, Bounds, Fill, LayerSnapshot, NodeId, NodeKind, Point,
};
use visualeyes_core::traits::ISceneGraph;

/// One node held by the fixture scene.
#[derive(Debug, Clone)]
pub struct FixtureNode {
    pub name: String,
    pub bounds: Bounds,
    pub fill: Fill,
    pub visible: bool,
    pub locked: bool,
    /// Member ids for group nodes, empty otherwise.
    pub members: Vec<NodeId>,
    /// Image path for image-fill nodes.
    pub image_path: Option<std::path::PathBuf>,
    /// Text content for text nodes.
    pub text: Option<String>,
}

/// In-memory scene graph with a single artboard.
#[derive(Debug, Default)]
pub struct MemoryScene {
    artboard: Option<Artboard>,
    nodes: HashMap<NodeId, FixtureNode>,
    order: Vec<NodeId>,
    /// Ids of nodes created through [`ISceneGraph::add_node`], in call order.
    pub added: Vec<NodeId>,
    /// Ids of groups created through [`ISceneGraph::group`], in call order.
    pub grouped: Vec<NodeId>,
}

impl MemoryScene {
    /// An empty scene with no artboard selected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A scene whose selected artboard has the given extent.
    pub fn with_artboard(width: f64, height: f64) -> Self {
        Self {
            artboard: Some(Artboard {
                id: NodeId::new("artboard-1"),
                extent: ArtboardExtent::new(width, height),
            }),
            ..Self::default()
        }
    }

    /// Add a rectangle layer under the artboard, returning its minted id.
    pub fn add_rectangle(&mut self, name: &str, bounds: Bounds, fill: Fill) -> NodeId {
        self.add_rectangle_with_id(&Uuid::new_v4().to_string(), name, bounds, fill)
    }

    /// Add a rectangle layer with a caller-chosen id, for tests that need
    /// to reference the id in a canned response.
    pub fn add_rectangle_with_id(
        &mut self,
        id: &str,
        name: &str,
        bounds: Bounds,
        fill: Fill,
    ) -> NodeId {
        let id = NodeId::new(id);
        self.nodes.insert(
            id.clone(),
            FixtureNode {
                name: name.to_string(),
                bounds,
                fill,
                visible: true,
                locked: false,
                members: Vec::new(),
                image_path: None,
                text: None,
            },
        );
        self.order.push(id.clone());
        id
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&FixtureNode> {
        self.nodes.get(id)
    }

    /// All nodes carrying the given name, in scene order.
    pub fn nodes_named(&self, name: &str) -> Vec<&FixtureNode> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|n| n.name == name)
            .collect()
    }

    /// Groups whose name starts with the given prefix.
    pub fn groups_with_prefix(&self, prefix: &str) -> Vec<&FixtureNode> {
        self.grouped
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|n| n.name.starts_with(prefix))
            .collect()
    }

    /// Contents of all text nodes, in scene order.
    pub fn texts(&self) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter_map(|n| n.text.clone())
            .collect()
    }

    /// Whether a node is still present in the scene.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the scene (groups included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl ISceneGraph for MemoryScene {
    fn selected_artboard(&self) -> Option<Artboard> {
        self.artboard.clone()
    }

    fn rectangle_layers(&self, _artboard: &NodeId) -> Vec<LayerSnapshot> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|n| (id, n)))
            .filter(|(_, n)| n.image_path.is_none() && n.text.is_none() && n.members.is_empty())
            .map(|(id, n)| LayerSnapshot {
                id: id.clone(),
                name: n.name.clone(),
                bounds: n.bounds,
                fill: n.fill.clone(),
            })
            .collect()
    }

    fn hide_and_rename(&mut self, node: &NodeId, name: &str) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.visible = false;
            n.name = name.to_string();
        }
    }

    fn remove_node(&mut self, node: &NodeId) {
        self.nodes.remove(node);
        self.order.retain(|id| id != node);
    }

    fn add_node(&mut self, _artboard: &NodeId, node: NodeKind, position: Point) -> NodeId {
        let id = NodeId::new(Uuid::new_v4().to_string());
        let fixture = match node {
            NodeKind::Rectangle {
                name,
                extent,
                fill,
                stroke: _,
                opacity: _,
            } => FixtureNode {
                name,
                bounds: Bounds::new(position.x, position.y, extent.width, extent.height),
                fill,
                visible: true,
                locked: false,
                members: Vec::new(),
                image_path: None,
                text: None,
            },
            NodeKind::Text { content, style } => FixtureNode {
                name: "Text".to_string(),
                bounds: Bounds::new(position.x, position.y, 0.0, 0.0),
                fill: Fill::SolidColor { hex: style.color },
                visible: true,
                locked: false,
                members: Vec::new(),
                image_path: None,
                text: Some(content),
            },
            NodeKind::ImageFill { name, extent, path } => FixtureNode {
                name,
                bounds: Bounds::new(position.x, position.y, extent.width, extent.height),
                fill: Fill::None,
                visible: true,
                locked: false,
                members: Vec::new(),
                image_path: Some(path),
                text: None,
            },
        };
        self.nodes.insert(id.clone(), fixture);
        self.order.push(id.clone());
        self.added.push(id.clone());
        id
    }

    fn group(&mut self, nodes: &[NodeId], name: &str) -> NodeId {
        let id = NodeId::new(Uuid::new_v4().to_string());
        self.nodes.insert(
            id.clone(),
            FixtureNode {
                name: name.to_string(),
                bounds: Bounds::new(0.0, 0.0, 0.0, 0.0),
                fill: Fill::None,
                visible: true,
                locked: false,
                members: nodes.to_vec(),
                image_path: None,
                text: None,
            },
        );
        self.order.push(id.clone());
        self.grouped.push(id.clone());
        id
    }

    fn lock(&mut self, node: &NodeId) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.locked = true;
        }
    }
}
