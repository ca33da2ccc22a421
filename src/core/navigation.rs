use serde_json::Value;
use tracing::debug;

use crate::error::NavError;

pub const ROOT_POINTER: &str = "";

/// One level of the drill-down path.
///
/// `pointer` is a JSON Pointer into the session snapshot. Frames never hold
/// data of their own; [`Frame::resolve`] borrows the node from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    label: String,
    pointer: String,
}

impl Frame {
    fn root(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pointer: ROOT_POINTER.to_string(),
        }
    }

    fn child(&self, key: &str) -> Self {
        Self {
            label: key.to_string(),
            pointer: format!("{}/{}", self.pointer, escape_token(key)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        root.pointer(&self.pointer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    frames: Vec<Frame>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root_label: impl Into<String>) -> Self {
        let mut stack = Self::new();
        stack.reset(root_label);
        stack
    }

    pub fn reset(&mut self, root_label: impl Into<String>) {
        self.frames.clear();
        self.frames.push(Frame::root(root_label));
    }

    /// Pushes `key` of the current node when it names an object or an array.
    /// Scalars and missing keys leave the stack untouched.
    pub fn drill_into(&mut self, root: &Value, key: &str) -> bool {
        let Some(top) = self.frames.last() else {
            return false;
        };
        let Some(node) = top.resolve(root) else {
            return false;
        };
        match child(node, key) {
            Some(Value::Object(_) | Value::Array(_)) => {
                let frame = top.child(key);
                debug!(pointer = %frame.pointer, depth = self.frames.len(), "drill into");
                self.frames.push(frame);
                true
            }
            _ => {
                debug!(key, "drill target is not a container; ignored");
                false
            }
        }
    }

    /// Pops back to breadcrumb `index`. Only `0..=len-2` is accepted: the top
    /// frame is where the view already is.
    pub fn pop_to(&mut self, index: usize) -> bool {
        if index.saturating_add(1) >= self.frames.len() {
            debug!(index, depth = self.frames.len(), "pop target out of range; ignored");
            return false;
        }
        self.frames.truncate(index + 1);
        debug!(index, "popped to breadcrumb");
        true
    }

    pub fn current_top(&self) -> Result<&Frame, NavError> {
        self.frames.last().ok_or(NavError::EmptyStack)
    }

    pub fn current_node<'a>(&self, root: &'a Value) -> Result<&'a Value, NavError> {
        let top = self.current_top()?;
        top.resolve(root).ok_or_else(|| NavError::DanglingFrame {
            pointer: top.pointer.clone(),
        })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Looks up `key` in a container. Array keys must be canonical indices so that
/// the pushed pointer resolves to the same element.
pub fn child<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(key),
        Value::Array(items) => {
            let index: usize = key.parse().ok()?;
            if index.to_string() != key {
                return None;
            }
            items.get(index)
        }
        _ => None,
    }
}

fn escape_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::NavigationStack;
    use crate::error::NavError;

    fn sample() -> Value {
        json!({
            "a": {"x": 1, "inner": {"deep": true}},
            "b": "hello",
            "list": [{"id": 7}, 2],
            "odd/key~name": {"ok": 1},
        })
    }

    #[test]
    fn reset_leaves_only_the_root() {
        let root = sample();
        let mut stack = NavigationStack::with_root("root");
        assert!(stack.drill_into(&root, "a"));
        stack.reset("again");
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.current_top().expect("top").label(), "again");
        assert_eq!(stack.current_node(&root).expect("node"), &root);
    }

    #[test]
    fn drill_into_containers_pushes_frames() {
        let root = sample();
        let mut stack = NavigationStack::with_root("root");
        assert!(stack.drill_into(&root, "a"));
        assert!(stack.drill_into(&root, "inner"));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.current_top().expect("top").pointer(), "/a/inner");
        assert_eq!(
            stack.current_node(&root).expect("node"),
            &json!({"deep": true})
        );
    }

    #[test]
    fn drill_into_scalar_or_missing_is_a_noop() {
        let root = sample();
        let mut stack = NavigationStack::with_root("root");
        let before = stack.clone();
        assert!(!stack.drill_into(&root, "b"));
        assert!(!stack.drill_into(&root, "missing"));
        assert_eq!(stack, before);
    }

    #[test]
    fn arrays_are_navigable_by_canonical_index() {
        let root = sample();
        let mut stack = NavigationStack::with_root("root");
        assert!(stack.drill_into(&root, "list"));
        assert!(!stack.drill_into(&root, "01"));
        assert!(!stack.drill_into(&root, "1"));
        assert!(stack.drill_into(&root, "0"));
        assert_eq!(stack.current_node(&root).expect("node"), &json!({"id": 7}));
    }

    #[test]
    fn keys_with_pointer_syntax_are_escaped() {
        let root = sample();
        let mut stack = NavigationStack::with_root("root");
        assert!(stack.drill_into(&root, "odd/key~name"));
        let top = stack.current_top().expect("top");
        assert_eq!(top.label(), "odd/key~name");
        assert_eq!(top.pointer(), "/odd~1key~0name");
        assert_eq!(stack.current_node(&root).expect("node"), &json!({"ok": 1}));
    }

    #[test]
    fn drill_then_pop_restores_previous_stack() {
        let root = sample();
        let mut stack = NavigationStack::with_root("root");
        assert!(stack.drill_into(&root, "a"));
        let before = stack.clone();
        let previous_len = stack.len();
        assert!(stack.drill_into(&root, "inner"));
        assert!(stack.pop_to(previous_len - 1));
        assert_eq!(stack, before);
    }

    #[test]
    fn pop_to_current_or_beyond_is_a_noop() {
        let root = sample();
        let mut stack = NavigationStack::with_root("root");
        assert!(stack.drill_into(&root, "a"));
        assert!(!stack.pop_to(1));
        assert!(!stack.pop_to(5));
        assert!(!stack.pop_to(usize::MAX));
        assert_eq!(stack.len(), 2);
        assert!(stack.pop_to(0));
        assert_eq!(stack.len(), 1);
        assert!(!stack.pop_to(0));
    }

    #[test]
    fn root_frame_survives_any_navigation() {
        let root = sample();
        let mut stack = NavigationStack::with_root("root");
        let root_frame = stack.frames()[0].clone();
        for key in ["a", "inner", "deep", "b"] {
            stack.drill_into(&root, key);
            assert_eq!(stack.frames()[0], root_frame);
        }
        stack.pop_to(1);
        assert_eq!(stack.frames()[0], root_frame);
    }

    #[test]
    fn empty_stack_reports_invalid_state() {
        let root = sample();
        let mut stack = NavigationStack::new();
        assert_eq!(stack.current_top(), Err(NavError::EmptyStack));
        assert!(!stack.drill_into(&root, "a"));
        assert!(!stack.pop_to(0));
    }
}
