//! Mutable selection state and its persisted snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Externally durable session state.
///
/// Field names match the stored JSON blob (`selectedCourseIds`,
/// `studentName`, `studentIdNumber`); every field defaults when absent or
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_course_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_id_number: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Snapshot {
    /// True when the snapshot carries a prior, non-empty course selection.
    pub fn has_selection(&self) -> bool {
        !self.selected_course_ids.is_empty()
    }
}

/// The set of chosen course ids plus the student's identity fields.
///
/// Ids are unique. Insertion order is kept so that reports which name "the
/// first" offending course are deterministic; rule evaluation itself does not
/// depend on order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    order: Vec<String>,
    members: HashSet<String>,
    student_name: String,
    student_id_number: String,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot (see [`SelectionStore::restore`]).
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut store = Self::new();
        store.restore(snapshot);
        store
    }

    /// Add a course id. Returns `false` if it was already selected.
    pub fn add(&mut self, id: &str) -> bool {
        if !self.members.insert(id.to_string()) {
            return false;
        }
        self.order.push(id.to_string());
        true
    }

    /// Remove a course id. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Selected ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn student_id_number(&self) -> &str {
        &self.student_id_number
    }

    /// Set the student name, trimming surrounding whitespace.
    pub fn set_student_name(&mut self, name: &str) {
        self.student_name = name.trim().to_string();
    }

    /// Set the student id number, trimming surrounding whitespace.
    pub fn set_student_id_number(&mut self, id_number: &str) {
        self.student_id_number = id_number.trim().to_string();
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            selected_course_ids: self.order.clone(),
            student_name: self.student_name.clone(),
            student_id_number: self.student_id_number.clone(),
        }
    }

    /// Replace the whole state with the snapshot's contents (no merge).
    ///
    /// Duplicate ids in the snapshot collapse onto their first occurrence.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.order.clear();
        self.members.clear();
        for id in &snapshot.selected_course_ids {
            self.add(id);
        }
        self.student_name = snapshot.student_name.clone();
        self.student_id_number = snapshot.student_id_number.clone();
    }
}
