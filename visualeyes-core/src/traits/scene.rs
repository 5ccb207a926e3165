use crate::models::{Artboard, LayerSnapshot, NodeId, NodeKind, Point};

/// Scene-graph mutation capability supplied by the host design tool.
///
/// All operations are synchronous host calls. Mutations are applied
/// immediately and are not rolled back on a later workflow failure.
pub trait ISceneGraph: Send {
    /// The artboard the user has selected, if any.
    fn selected_artboard(&self) -> Option<Artboard>;

    /// Direct child rectangle layers of an artboard, fills resolved.
    fn rectangle_layers(&self, artboard: &NodeId) -> Vec<LayerSnapshot>;

    /// Hide a layer and replace its name (used to flag rejected AOIs).
    fn hide_and_rename(&mut self, node: &NodeId, name: &str);

    /// Remove a layer from its parent.
    fn remove_node(&mut self, node: &NodeId);

    /// Create a node under the artboard at the given position.
    fn add_node(&mut self, artboard: &NodeId, node: NodeKind, position: Point) -> NodeId;

    /// Group existing nodes under a new named group.
    fn group(&mut self, nodes: &[NodeId], name: &str) -> NodeId;

    /// Lock a node against further editing.
    fn lock(&mut self, node: &NodeId);
}
