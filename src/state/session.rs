use serde_json::Value;
use tracing::info;

use crate::core::navigation::NavigationStack;
use crate::core::snapshot::{Snapshot, SnapshotLoader};
use crate::error::{LoadError, NavError};
use crate::source::KeyValueSource;

/// Everything that lives exactly as long as the viewer is open: the captured
/// snapshot and the path into it.
#[derive(Debug, Clone)]
pub struct Session {
    snapshot: Snapshot,
    stack: NavigationStack,
}

impl Session {
    pub fn new(snapshot: Snapshot, root_label: impl Into<String>) -> Self {
        let mut stack = NavigationStack::new();
        stack.reset(root_label);
        Self { snapshot, stack }
    }

    pub fn open(
        source: &dyn KeyValueSource,
        loader: &SnapshotLoader,
        root_label: &str,
    ) -> Result<Self, LoadError> {
        let snapshot = loader.load(source)?;
        info!(
            source = %source.describe(),
            entries = snapshot.len(),
            "viewer session opened"
        );
        Ok(Self::new(snapshot, root_label))
    }

    pub fn drill_into(&mut self, key: &str) -> bool {
        self.stack.drill_into(self.snapshot.root(), key)
    }

    pub fn pop_to(&mut self, index: usize) -> bool {
        self.stack.pop_to(index)
    }

    /// Goes back to the parent of the current node, if there is one.
    pub fn pop_level(&mut self) -> bool {
        match self.stack.len().checked_sub(2) {
            Some(parent) => self.stack.pop_to(parent),
            None => false,
        }
    }

    pub fn current_node(&self) -> Result<&Value, NavError> {
        self.stack.current_node(self.snapshot.root())
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
