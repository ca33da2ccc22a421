use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::core::navigation::NavigationStack;
use crate::core::snapshot::Snapshot;
use crate::error::NavError;

/// Layout units each breadcrumb level is indented by.
pub const INDENT_STEP: u16 = 20;
pub const EMPTY_KEY: &str = "(empty)";
pub const OBJECT_PLACEHOLDER: &str = "[Object]";
pub const ARRAY_PLACEHOLDER: &str = "[Array]";

/// How array values are labelled in the row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ArrayDisplay {
    /// `[Array]`, distinct from objects.
    #[default]
    Distinct,
    /// `[Object]`, the label older viewers showed for every container.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub index: usize,
    pub text: String,
    pub indent: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Scalar,
    Object,
    Array,
    /// The sentinel shown for a node without keys.
    Placeholder,
}

impl RowKind {
    pub fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub display_value: String,
    pub kind: RowKind,
}

impl Row {
    fn sentinel() -> Self {
        Self {
            key: EMPTY_KEY.to_string(),
            display_value: String::new(),
            kind: RowKind::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewModel {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ViewModelBuilder {
    array_display: ArrayDisplay,
}

impl ViewModelBuilder {
    pub fn new(array_display: ArrayDisplay) -> Self {
        Self { array_display }
    }

    pub fn build(&self, stack: &NavigationStack, snapshot: &Snapshot) -> Result<ViewModel, NavError> {
        let node = stack.current_node(snapshot.root())?;

        let breadcrumbs = stack
            .frames()
            .iter()
            .enumerate()
            .map(|(index, frame)| Breadcrumb {
                index,
                text: frame.label().to_string(),
                indent: indent_for(index),
            })
            .collect();

        let mut rows: Vec<Row> = match node {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| self.row(key.clone(), value))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, value)| self.row(index.to_string(), value))
                .collect(),
            _ => Vec::new(),
        };
        if rows.is_empty() {
            rows.push(Row::sentinel());
        }

        Ok(ViewModel { breadcrumbs, rows })
    }

    fn row(&self, key: String, value: &Value) -> Row {
        let (display_value, kind) = match value {
            Value::Object(_) => (OBJECT_PLACEHOLDER.to_string(), RowKind::Object),
            Value::Array(_) => {
                let label = match self.array_display {
                    ArrayDisplay::Distinct => ARRAY_PLACEHOLDER,
                    ArrayDisplay::Legacy => OBJECT_PLACEHOLDER,
                };
                (label.to_string(), RowKind::Array)
            }
            Value::String(text) => (text.clone(), RowKind::Scalar),
            Value::Number(number) => (display_number(number), RowKind::Scalar),
            other => (other.to_string(), RowKind::Scalar),
        };
        Row {
            key,
            display_value,
            kind,
        }
    }
}

/// Integers print exactly. Other numbers print as the shortest float that
/// round-trips, without a trailing `.0`; `-0` prints as `0` and magnitudes
/// beyond `f64` as `Infinity`.
pub fn display_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(int) = number.as_u64() {
        return int.to_string();
    }
    let text = number.to_string();
    match text.parse::<f64>() {
        Ok(float) if float.is_infinite() => {
            if float.is_sign_negative() {
                "-Infinity".to_string()
            } else {
                "Infinity".to_string()
            }
        }
        Ok(float) if float == 0.0 => "0".to_string(),
        Ok(float) => float.to_string(),
        Err(_) => text,
    }
}

pub fn indent_for(index: usize) -> u16 {
    let level = u16::try_from(index.saturating_add(1)).unwrap_or(u16::MAX);
    INDENT_STEP.saturating_mul(level)
}
