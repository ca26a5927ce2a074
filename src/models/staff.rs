use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STAFF: [&str; 4] = ["Staff A", "Staff B", "Staff C", "Staff D"];

/// Ordered list of selectable staff names. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffDirectory {
    names: Vec<String>,
}

impl Default for StaffDirectory {
    fn default() -> Self {
        Self::from_names(DEFAULT_STAFF)
    }
}

impl StaffDirectory {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Append a trimmed name. Blank input is ignored and returns `false`.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> AppResult<String> {
        if index >= self.names.len() {
            return Err(AppError::index("staff", index, self.names.len()));
        }
        Ok(self.names.remove(index))
    }
}

/// Value a staff selector shows after the directory changed: the current
/// name if still listed, else the first entry, else empty.
pub fn refresh_selection(current: &str, staff: &StaffDirectory) -> String {
    if staff.contains(current) {
        current.to_string()
    } else {
        staff.first().unwrap_or_default().to_string()
    }
}
