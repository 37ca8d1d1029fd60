//! Export file naming.

use crate::document::StudentIdentity;

/// File name for an export: `수강신청내역_{prefix}.{ext}`.
///
/// The prefix is the student name, or `학생` when no name was entered, and
/// is itself prefixed with `{id}_` when an id number was entered. Characters
/// that are reserved in file names are replaced with `_`, so the result is
/// always a single path component.
pub fn export_file_name(identity: &StudentIdentity, extension: &str) -> String {
    let mut prefix = identity.name().unwrap_or("학생").to_string();
    if let Some(id) = identity.id_number() {
        prefix = format!("{id}_{prefix}");
    }
    format!("수강신청내역_{}.{extension}", sanitize_component(&prefix))
}

fn sanitize_component(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect()
}
