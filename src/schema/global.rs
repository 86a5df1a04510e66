//! Process-wide operator schema tier
//!
//! Populated once from an externally supplied JSON resource, then read many
//! times without locking. Lookups made before population completes report
//! "not found". A failed fetch seals the table empty.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle};

use rustc_hash::FxHashMap;

use crate::error::{ViewError, ViewResult};

use super::types::{OperatorSchema, SchemaRecord};

/// Operator name → schema
pub type SchemaMap = FxHashMap<String, OperatorSchema>;

/// Supplier of the operator schema resource text
pub trait SchemaSource {
    /// Fetch the resource as JSON text
    fn fetch(&self) -> ViewResult<String>;
}

/// Reads the resource from a file, e.g. `tf-operator.json`
#[derive(Debug, Clone)]
pub struct FileSchemaSource {
    path: PathBuf,
}

impl FileSchemaSource {
    /// Create a source for the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SchemaSource for FileSchemaSource {
    fn fetch(&self) -> ViewResult<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| ViewError::SchemaFetch(format!("{}: {}", self.path.display(), e)))
    }
}

/// Serves resource text already held in memory
#[derive(Debug, Clone)]
pub struct StaticSchemaSource {
    text: String,
}

impl StaticSchemaSource {
    /// Create a source serving `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SchemaSource for StaticSchemaSource {
    fn fetch(&self) -> ViewResult<String> {
        Ok(self.text.clone())
    }
}

/// Parse the `[{name, schema}]` resource into a schema map
///
/// Records missing either field, or whose schema does not deserialize, are
/// skipped.
pub fn parse_schema_json(text: &str) -> ViewResult<SchemaMap> {
    let items: Vec<serde_json::Value> = serde_json::from_str(text)?;
    let mut map = SchemaMap::default();

    for item in items {
        let record: SchemaRecord = match serde_json::from_value(item) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping malformed operator schema record: {}", e);
                continue;
            }
        };
        if let (Some(name), Some(schema)) = (record.name, record.schema) {
            map.insert(name, schema);
        }
    }

    Ok(map)
}

/// Global schema tier shared by every graph a loader builds
#[derive(Debug, Default)]
pub struct GlobalSchemaTable {
    table: OnceLock<SchemaMap>,
}

impl GlobalSchemaTable {
    /// Create an empty, unpopulated table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table already populated with `map`
    pub fn with_schemas(map: SchemaMap) -> Self {
        let table = Self::new();
        table.populate(map);
        table
    }

    /// Whether population has completed (successfully or not)
    pub fn is_ready(&self) -> bool {
        self.table.get().is_some()
    }

    /// Look up an operator; `None` until population completes
    pub fn get(&self, operator: &str) -> Option<&OperatorSchema> {
        self.table.get()?.get(operator)
    }

    /// Number of operators known
    pub fn len(&self) -> usize {
        self.table.get().map(|t| t.len()).unwrap_or(0)
    }

    /// Whether no operators are known
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Populate the table; returns `false` if it was already populated
    pub fn populate(&self, map: SchemaMap) -> bool {
        self.table.set(map).is_ok()
    }

    /// Fetch and parse the resource, populating the table
    ///
    /// On failure the table is sealed empty and the error is returned.
    pub fn load(&self, source: &dyn SchemaSource) -> ViewResult<usize> {
        match source.fetch().and_then(|text| parse_schema_json(&text)) {
            Ok(map) => {
                let count = map.len();
                if self.populate(map) {
                    log::debug!("Loaded {} operator schemas", count);
                } else {
                    log::debug!("Operator schemas already loaded, ignoring {} new entries", count);
                }
                Ok(count)
            }
            Err(e) => {
                log::warn!("Operator schema resource unavailable: {}", e);
                self.populate(SchemaMap::default());
                Err(e)
            }
        }
    }

    /// Populate the table on a background thread
    ///
    /// Graph construction does not wait on the returned handle.
    pub fn spawn_load(self: &Arc<Self>, source: Box<dyn SchemaSource + Send>) -> JoinHandle<()> {
        let table = Arc::clone(self);
        thread::spawn(move || {
            let _ = table.load(source.as_ref());
        })
    }
}
