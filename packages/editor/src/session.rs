//! # Session Registry
//!
//! Per-job mutable state: the live document, the id → node registry,
//! the id allocator, and the asset base path.
//!
//! One session is created per editing job and owned exclusively by it
//! for the job's lifetime. Operations receive `&mut Session` — there
//! is deliberately no process-wide registry, so two concurrent jobs
//! can never observe each other's handles.

use crate::errors::{EditError, EditResult};
use crate::metrics::TextMetrics;
use posterkit_dom::{Document, NodeRef, ShapeNode};
use posterkit_model::Poster;
use posterkit_parser::{normalize, IdAllocator};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Upper bound on the known-id sample embedded in `NotFound` errors.
const KNOWN_ID_SAMPLE: usize = 16;

pub struct Session {
    doc: Document,
    handles: BTreeMap<String, NodeRef>,
    ids: IdAllocator,
    assets_dir: PathBuf,
    /// Height-estimation constants; tunable per session.
    pub metrics: TextMetrics,
}

impl Session {
    /// Load a container file and build the registry for it.
    pub fn open(container: &Path, assets_dir: impl Into<PathBuf>) -> Result<Session, EditError> {
        let doc = Document::open(container)?;
        Ok(Session::from_document(doc, assets_dir))
    }

    /// Wrap an in-memory document. Normalizes once so every node gets
    /// an id and the allocator is seeded past the observed maximum.
    pub fn from_document(doc: Document, assets_dir: impl Into<PathBuf>) -> Session {
        let mut session = Session {
            doc,
            handles: BTreeMap::new(),
            ids: IdAllocator::new(),
            assets_dir: assets_dir.into(),
            metrics: TextMetrics::default(),
        };
        session.snapshot();
        session
    }

    /// Recompute the canonical snapshot from the live document.
    ///
    /// Never incremental: the registry is rebuilt alongside so the
    /// handle map can not drift from the document.
    pub fn snapshot(&mut self) -> Poster {
        let poster = normalize(&mut self.doc, &mut self.ids);
        self.handles = self
            .doc
            .nodes()
            .iter()
            .filter_map(|n| n.name.clone().map(|name| (name, NodeRef(n.sp_id))))
            .collect();
        poster
    }

    /// Serialize the live document back to container form.
    pub fn save(&self, path: &Path) -> Result<(), EditError> {
        self.doc.save(path)?;
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Resolve a possibly-relative asset path against the session's
    /// asset base folder.
    pub fn resolve_asset(&self, path: &str) -> PathBuf {
        let candidate = PathBuf::from(path);
        if candidate.is_absolute() {
            candidate
        } else {
            self.assets_dir.join(candidate)
        }
    }

    pub fn allocate_id(&mut self) -> String {
        self.ids.allocate()
    }

    pub fn known_ids(&self) -> impl Iterator<Item = &str> {
        self.handles.keys().map(String::as_str)
    }

    fn known_sample(&self) -> Vec<String> {
        self.handles.keys().take(KNOWN_ID_SAMPLE).cloned().collect()
    }

    fn missing(&self, id: &str) -> EditError {
        EditError::NotFound {
            id: id.to_string(),
            known: self.known_sample(),
        }
    }

    pub fn node_ref(&self, id: &str) -> EditResult<NodeRef> {
        self.handles.get(id).copied().ok_or_else(|| self.missing(id))
    }

    pub fn get(&self, id: &str) -> EditResult<&ShapeNode> {
        let node_ref = self.node_ref(id)?;
        self.doc.get(node_ref).ok_or_else(|| self.missing(id))
    }

    pub fn get_mut(&mut self, id: &str) -> EditResult<&mut ShapeNode> {
        let node_ref = self.node_ref(id)?;
        let missing = self.missing(id);
        self.doc.get_mut(node_ref).ok_or(missing)
    }

    /// Add a freshly built node to the document and register it under
    /// `requested` (when given) or a newly allocated id.
    pub fn register_node(
        &mut self,
        mut node: ShapeNode,
        requested: Option<String>,
    ) -> EditResult<String> {
        let id = match requested {
            Some(id) => {
                if self.handles.contains_key(&id) {
                    return Err(EditError::Argument(format!(
                        "element id '{id}' is already in use"
                    )));
                }
                id
            }
            None => self.allocate_id(),
        };

        node.name = Some(id.clone());
        let node_ref = self.doc.push(node);
        self.ids.observe(&id);
        self.handles.insert(id.clone(), node_ref);
        Ok(id)
    }

    /// Remove an element from both the document and the registry.
    pub fn remove(&mut self, id: &str) -> EditResult<ShapeNode> {
        let node_ref = self.node_ref(id)?;
        let missing = self.missing(id);
        let node = self.doc.remove(node_ref).ok_or(missing)?;
        self.handles.remove(id);
        Ok(node)
    }
}
