use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::source::KeyValueSource;

/// What to do with a value that looks structured but does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Keep the raw string and carry on with the remaining entries.
    #[default]
    Raw,
    /// Abort the whole load.
    Fail,
}

/// The store's contents as captured when the viewer opened.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    root: Value,
}

impl Snapshot {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            root: Value::Object(map),
        }
    }

    pub fn empty() -> Self {
        Self::from_map(Map::new())
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.root.as_object().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotLoader {
    policy: MalformedPolicy,
}

impl SnapshotLoader {
    pub fn new(policy: MalformedPolicy) -> Self {
        Self { policy }
    }

    pub fn load(&self, source: &dyn KeyValueSource) -> Result<Snapshot, LoadError> {
        let mut map = Map::new();
        let mut structured = 0usize;

        for (key, raw) in source.entries()? {
            let value = match decode(&raw) {
                Decoded::Structured(value) => {
                    structured += 1;
                    value
                }
                Decoded::Plain => Value::String(raw),
                Decoded::Malformed(err) => match self.policy {
                    MalformedPolicy::Fail => {
                        return Err(LoadError::MalformedValue { key, source: err });
                    }
                    MalformedPolicy::Raw => {
                        warn!(key = %key, error = %err, "malformed structured value kept as text");
                        Value::String(raw)
                    }
                },
            };
            map.insert(key, value);
        }

        debug!(
            source = %source.describe(),
            entries = map.len(),
            structured,
            "snapshot loaded"
        );
        Ok(Snapshot::from_map(map))
    }
}

enum Decoded {
    Structured(Value),
    Plain,
    Malformed(serde_json::Error),
}

// Only objects and arrays are promoted; scalars that happen to be valid JSON
// ("42", "true", "\"x\"") stay the strings the store holds.
fn decode(raw: &str) -> Decoded {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Decoded::Structured(value),
        Ok(_) => Decoded::Plain,
        Err(err) if looks_structured(raw) => Decoded::Malformed(err),
        Err(_) => Decoded::Plain,
    }
}

fn looks_structured(raw: &str) -> bool {
    let trimmed = raw.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{MalformedPolicy, SnapshotLoader};
    use crate::error::LoadError;
    use crate::source::MemorySource;

    #[test]
    fn promotes_objects_and_keeps_plain_strings() {
        let source = MemorySource::new()
            .with_entry("a", r#"{"x":1,"y":2}"#)
            .with_entry("b", "hello");
        let snapshot = SnapshotLoader::default().load(&source).expect("load");
        assert_eq!(
            snapshot.root(),
            &json!({"a": {"x": 1, "y": 2}, "b": "hello"})
        );
    }

    #[test]
    fn leading_whitespace_and_arrays_are_structured() {
        let source = MemorySource::new()
            .with_entry("padded", "  \n {\"k\": true}")
            .with_entry("list", "[1, \"two\"]");
        let snapshot = SnapshotLoader::default().load(&source).expect("load");
        assert_eq!(
            snapshot.root(),
            &json!({"padded": {"k": true}, "list": [1, "two"]})
        );
    }

    #[test]
    fn out_of_range_numbers_do_not_demote_the_value() {
        let source = MemorySource::new().with_entry("a", r#"{"x":1e400}"#);
        let snapshot = SnapshotLoader::new(MalformedPolicy::Fail)
            .load(&source)
            .expect("huge numbers still parse");
        assert!(snapshot.root()["a"].is_object());
        assert!(snapshot.root()["a"]["x"].is_number());
    }

    #[test]
    fn json_scalars_stay_strings() {
        let source = MemorySource::new()
            .with_entry("n", "42")
            .with_entry("flag", "true")
            .with_entry("quoted", "\"x\"");
        let snapshot = SnapshotLoader::default().load(&source).expect("load");
        assert_eq!(
            snapshot.root(),
            &json!({"n": "42", "flag": "true", "quoted": "\"x\""})
        );
    }

    #[test]
    fn raw_policy_keeps_malformed_text() {
        let source = MemorySource::new()
            .with_entry("broken", "{not json")
            .with_entry("ok", "{}");
        let snapshot = SnapshotLoader::new(MalformedPolicy::Raw)
            .load(&source)
            .expect("raw policy never fails on values");
        assert_eq!(snapshot.root(), &json!({"broken": "{not json", "ok": {}}));
    }

    #[test]
    fn fail_policy_aborts_with_the_offending_key() {
        let source = MemorySource::new()
            .with_entry("ok", "{}")
            .with_entry("broken", "[1,");
        let err = SnapshotLoader::new(MalformedPolicy::Fail)
            .load(&source)
            .expect_err("malformed value should abort");
        match err {
            LoadError::MalformedValue { key, .. } => assert_eq!(key, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_source_gives_empty_root() {
        let snapshot = SnapshotLoader::default()
            .load(&MemorySource::new())
            .expect("load");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.root(), &json!({}));
    }
}
