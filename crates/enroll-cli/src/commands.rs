//! Command implementations.
//!
//! Each command opens a session from disk, applies its change, and returns
//! what the binary needs to print. Nothing here writes to stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use enroll_catalog::{CatalogError, CatalogIndex, load_catalog};
use enroll_core::{ChangeStatus, IdentityChange, SelectionChange, Session};
use enroll_model::{Term, ValidationReport};
use enroll_persistence::JsonFileStore;
use enroll_report::{
    ExportFormat, ExportInput, Exporter, TextExporter, exporter_for, write_export,
};
use enroll_validate::{ExportGate, RuleSet, gate_export};
use tracing::{info, info_span, warn};

use crate::logging::redact_value;

pub type FileSession = Session<JsonFileStore>;

/// Where a session's inputs and state live.
#[derive(Debug, Clone)]
pub struct SessionPaths {
    pub catalog: PathBuf,
    pub state: PathBuf,
    pub rules: Option<PathBuf>,
}

/// One line per term, shown when the catalog cannot be loaded.
pub fn catalog_failure_lines() -> Vec<String> {
    Term::ALL
        .into_iter()
        .map(|term| format!("{} 과목 정보를 불러오는데 실패했습니다.", term.label()))
        .collect()
}

/// True if the error chain contains a catalog load failure.
pub fn is_catalog_failure(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| cause.is::<CatalogError>())
}

pub fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => RuleSet::from_json_file(path)
            .with_context(|| format!("load rules {}", path.display())),
        None => Ok(RuleSet::default()),
    }
}

pub fn load_index(path: &Path, rules: &RuleSet) -> Result<CatalogIndex> {
    let loaded = load_catalog(path).with_context(|| format!("load catalog {}", path.display()))?;
    let index = CatalogIndex::build_with_mandatory_group(loaded.courses, &rules.mandatory_group);
    let skipped = loaded.warnings.len() + index.warnings().len();
    if skipped > 0 {
        warn!(skipped, "catalog has rows that were skipped or left out of every term");
    }
    info!(courses = index.courses().len(), "catalog loaded");
    Ok(index)
}

pub fn open_session(paths: &SessionPaths) -> Result<FileSession> {
    let rules = load_rules(paths.rules.as_deref())?;
    let index = load_index(&paths.catalog, &rules)?;
    Ok(Session::open(index, rules, JsonFileStore::new(&paths.state)))
}

/// Result of a command that may change the selection.
#[derive(Debug)]
pub struct CommandOutcome {
    pub session: FileSession,
    pub changes: Vec<(String, ChangeStatus)>,
    pub report: ValidationReport,
}

pub fn run_check(paths: &SessionPaths) -> Result<CommandOutcome> {
    let _span = info_span!("check").entered();
    let session = open_session(paths)?;
    let report = session.report();
    Ok(CommandOutcome {
        session,
        changes: Vec::new(),
        report,
    })
}

pub fn run_select(paths: &SessionPaths, ids: &[String], select: bool) -> Result<CommandOutcome> {
    let _span = info_span!("select", select).entered();
    let mut session = open_session(paths)?;
    let mut changes = Vec::with_capacity(ids.len());
    for id in ids {
        let change = if select {
            SelectionChange::Select(id.clone())
        } else {
            SelectionChange::Deselect(id.clone())
        };
        let update = session.apply_selection_change(change);
        changes.push((id.clone(), update.status));
    }
    let report = session.report();
    Ok(CommandOutcome {
        session,
        changes,
        report,
    })
}

pub fn run_identity(
    paths: &SessionPaths,
    name: Option<&str>,
    id_number: Option<&str>,
) -> Result<CommandOutcome> {
    let _span = info_span!("identity").entered();
    let mut session = open_session(paths)?;
    let mut changes = Vec::new();
    if let Some(name) = name {
        let update = session.apply_identity_change(IdentityChange::StudentName(name.to_string()));
        info!(name = redact_value(name), status = ?update.status, "student name");
        changes.push(("studentName".to_string(), update.status));
    }
    if let Some(id_number) = id_number {
        let update =
            session.apply_identity_change(IdentityChange::StudentIdNumber(id_number.to_string()));
        info!(id_number = redact_value(id_number), status = ?update.status, "student id number");
        changes.push(("studentIdNumber".to_string(), update.status));
    }
    let report = session.report();
    Ok(CommandOutcome {
        session,
        changes,
        report,
    })
}

pub fn run_reset(paths: &SessionPaths) -> Result<CommandOutcome> {
    let _span = info_span!("reset").entered();
    let mut session = open_session(paths)?;
    let report = session.reset();
    Ok(CommandOutcome {
        session,
        changes: Vec::new(),
        report,
    })
}

/// Options for `export`.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub output_dir: PathBuf,
    /// Write even when the gate blocks export.
    pub force: bool,
    pub letterhead: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub report: ValidationReport,
    pub gate: ExportGate,
    /// `None` when the gate blocked the export.
    pub path: Option<PathBuf>,
}

pub fn run_export(paths: &SessionPaths, options: &ExportOptions) -> Result<ExportOutcome> {
    let _span = info_span!("export", format = options.format.label()).entered();
    let session = open_session(paths)?;
    let report = session.report();
    let gate = gate_export(session.rules(), &report);

    if !gate.enabled && !options.force {
        warn!(blocking = ?gate.blocking, "export blocked by registration rules");
        return Ok(ExportOutcome {
            report,
            gate,
            path: None,
        });
    }
    if !gate.enabled {
        warn!(blocking = ?gate.blocking, "exporting despite failing registration rules");
    }

    let exporter: Box<dyn Exporter> = match (options.format, &options.letterhead) {
        (ExportFormat::Text, Some(letterhead)) => {
            Box::new(TextExporter::new().with_letterhead(letterhead))
        }
        (format, _) => exporter_for(format),
    };
    let input = ExportInput {
        index: session.index(),
        selection: session.selection(),
        report: &report,
    };
    let path = write_export(exporter.as_ref(), &input, &options.output_dir)
        .with_context(|| format!("export to {}", options.output_dir.display()))?;
    Ok(ExportOutcome {
        report,
        gate,
        path: Some(path),
    })
}
