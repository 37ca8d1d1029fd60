//! The session context object.

use enroll_catalog::CatalogIndex;
use enroll_model::{SelectionStore, Snapshot, ValidationReport};
use enroll_persistence::{SnapshotStore, load_or_default};
use enroll_validate::{RuleSet, evaluate};
use tracing::{debug, info, warn};

use crate::change::{ChangeStatus, IdentityChange, SelectionChange, SessionUpdate};

/// One student's registration session.
///
/// Methods take `&mut self`, so changes are applied one at a time and each
/// evaluation sees a consistent selection.
#[derive(Debug)]
pub struct Session<S: SnapshotStore> {
    index: CatalogIndex,
    rules: RuleSet,
    selection: SelectionStore,
    store: S,
}

impl<S: SnapshotStore> Session<S> {
    /// Open a session from the stored snapshot.
    ///
    /// A missing or unreadable snapshot starts an empty session. Mandatory
    /// courses are auto-selected only when the stored selection is empty.
    pub fn open(index: CatalogIndex, rules: RuleSet, store: S) -> Self {
        let snapshot = load_or_default(&store);
        let has_prior_selection = snapshot.has_selection();
        let mut session = Self {
            index,
            rules,
            selection: SelectionStore::from_snapshot(&snapshot),
            store,
        };
        let seeded = session
            .index
            .seed_selection(&mut session.selection, has_prior_selection);
        if seeded > 0 {
            info!(seeded, "auto-selected mandatory courses");
            session.persist();
        }
        debug!(
            selected = session.selection.len(),
            has_prior_selection, "opened session"
        );
        session
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate the current selection.
    pub fn report(&self) -> ValidationReport {
        evaluate(&self.index, &self.selection, &self.rules)
    }

    /// Select or deselect a course, persist, and re-evaluate.
    pub fn apply_selection_change(&mut self, change: SelectionChange) -> SessionUpdate {
        let status = self.selection_status(&change);
        if status.is_applied() {
            self.persist();
        }
        SessionUpdate {
            status,
            report: self.report(),
        }
    }

    fn selection_status(&mut self, change: &SelectionChange) -> ChangeStatus {
        let id = change.course_id();
        let Some(course) = self.index.course(id).filter(|c| c.term().is_some()) else {
            warn!(course_id = %id, "course is not offered in the catalog");
            return ChangeStatus::UnknownCourse;
        };
        let changed = match change {
            SelectionChange::Select(_) => self.selection.add(id),
            SelectionChange::Deselect(_) if course.mandatory => {
                warn!(course_id = %id, "mandatory course cannot be deselected");
                return ChangeStatus::MandatoryLocked;
            }
            SelectionChange::Deselect(_) => self.selection.remove(id),
        };
        if changed {
            debug!(course_id = %id, ?change, "selection changed");
            ChangeStatus::Applied
        } else {
            ChangeStatus::Unchanged
        }
    }

    /// Update a student identity field, persist, and re-evaluate.
    ///
    /// Values are trimmed; no format validation is applied.
    pub fn apply_identity_change(&mut self, change: IdentityChange) -> SessionUpdate {
        let (before, field) = match &change {
            IdentityChange::StudentName(_) => (self.selection.student_name().to_string(), "name"),
            IdentityChange::StudentIdNumber(_) => {
                (self.selection.student_id_number().to_string(), "id number")
            }
        };
        let after = match change {
            IdentityChange::StudentName(value) => {
                self.selection.set_student_name(&value);
                self.selection.student_name()
            }
            IdentityChange::StudentIdNumber(value) => {
                self.selection.set_student_id_number(&value);
                self.selection.student_id_number()
            }
        };
        let status = if after == before {
            ChangeStatus::Unchanged
        } else {
            debug!(field, "student identity changed");
            ChangeStatus::Applied
        };
        if status.is_applied() {
            self.persist();
        }
        SessionUpdate {
            status,
            report: self.report(),
        }
    }

    /// Clear the selection and identity, then re-seed mandatory courses as
    /// for a brand-new session.
    pub fn reset(&mut self) -> ValidationReport {
        self.selection.restore(&Snapshot::default());
        let seeded = self.index.seed_selection(&mut self.selection, false);
        info!(seeded, "reset selection");
        self.persist();
        self.report()
    }

    /// Save the current snapshot; failures are logged, never returned.
    fn persist(&mut self) {
        if let Err(error) = self.store.save(&self.selection.to_snapshot()) {
            let suggestion = error.suggestion().unwrap_or_default();
            warn!(%error, %suggestion, "failed to persist selection");
        }
    }
}
