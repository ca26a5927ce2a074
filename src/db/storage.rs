//! Key/value storage capability used by the persistence layer.

use crate::errors::AppResult;
use chrono::Local;
use std::collections::BTreeMap;

/// A flat string key/value store with a diagnostic log on the side.
///
/// Production uses the SQLite-backed [`DbPool`](crate::db::pool::DbPool);
/// tests use [`MemoryStorage`].
pub trait Storage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn delete(&mut self, key: &str) -> AppResult<()>;

    /// All keys, sorted.
    fn keys(&self) -> AppResult<Vec<String>>;

    /// Append a diagnostic record (operation, target, message).
    fn record(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
    log: Vec<LogRecord>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[LogRecord] {
        &self.log
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.values.keys().cloned().collect())
    }

    fn record(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log.push(LogRecord {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
