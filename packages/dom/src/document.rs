use crate::color::Theme;
use crate::error::DomError;
use crate::geometry::Emu;
use crate::node::ShapeNode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stable reference to a node, keyed by its native `sp_id`.
///
/// Survives reordering and unrelated deletions; valid only within the
/// owning document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef(pub u32);

/// The live document: one fixed-size sheet and its node tree in
/// z-order (index 0 draws first, at the back).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub width: Emu,
    pub height: Emu,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    nodes: Vec<ShapeNode>,
    #[serde(skip)]
    next_sp_id: u32,
}

impl Document {
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width: Emu::from_inches(width_in),
            height: Emu::from_inches(height_in),
            theme: Theme::default(),
            nodes: Vec::new(),
            next_sp_id: 1,
        }
    }

    /// Load a document from its container file. Load errors are fatal
    /// to the job and surface verbatim.
    pub fn open(path: &Path) -> Result<Document, DomError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DomError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut doc: Document =
            serde_json::from_str(&raw).map_err(|source| DomError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        doc.reseed_sp_ids();
        Ok(doc)
    }

    /// Save the document back to container form.
    pub fn save(&self, path: &Path) -> Result<(), DomError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|source| DomError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn reseed_sp_ids(&mut self) {
        // Containers written by other producers may carry sp_id 0;
        // assign fresh ids so every node is addressable.
        let mut max = self.nodes.iter().map(|n| n.sp_id).max().unwrap_or(0);
        for node in &mut self.nodes {
            if node.sp_id == 0 {
                max += 1;
                node.sp_id = max;
            }
        }
        self.next_sp_id = max + 1;
    }

    pub fn nodes(&self) -> &[ShapeNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut ShapeNode> {
        self.nodes.iter_mut()
    }

    /// Append a node at the top of the z-order, assigning its sp_id.
    pub fn push(&mut self, mut node: ShapeNode) -> NodeRef {
        node.sp_id = self.next_sp_id;
        self.next_sp_id += 1;
        let node_ref = NodeRef(node.sp_id);
        self.nodes.push(node);
        node_ref
    }

    pub fn get(&self, node_ref: NodeRef) -> Option<&ShapeNode> {
        self.nodes.iter().find(|n| n.sp_id == node_ref.0)
    }

    pub fn get_mut(&mut self, node_ref: NodeRef) -> Option<&mut ShapeNode> {
        self.nodes.iter_mut().find(|n| n.sp_id == node_ref.0)
    }

    /// Current z-order position of a node.
    pub fn position(&self, node_ref: NodeRef) -> Option<usize> {
        self.nodes.iter().position(|n| n.sp_id == node_ref.0)
    }

    pub fn remove(&mut self, node_ref: NodeRef) -> Option<ShapeNode> {
        let index = self.position(node_ref)?;
        Some(self.nodes.remove(index))
    }

    /// Relocate a node to the very back of the draw order.
    ///
    /// The node sequence here has no structural preamble, so the back
    /// is index 0.
    pub fn send_to_back(&mut self, node_ref: NodeRef) -> bool {
        let Some(index) = self.position(node_ref) else {
            return false;
        };
        let node = self.nodes.remove(index);
        self.nodes.insert(0, node);
        true
    }
}
