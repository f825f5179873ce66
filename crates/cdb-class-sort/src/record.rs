//! Record scanning over the tab-indented class dump.
//!
//! A record spans from a line that is exactly `\t{` to a line that is
//! exactly `\t},` (or `\t}` for the last entry). Only records whose
//! `"Type"` is `<class>` are kept.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::ClassSortError;

const RECORD_OPEN: &str = "\t{";
const RECORD_CLOSE: &str = "\t},";
const RECORD_CLOSE_LAST: &str = "\t}";
const NAME_PREFIX: &str = "\t\t\"Name\": \"";
const TYPE_PREFIX: &str = "\t\t\"Type\": \"";
const CLASS_TYPE: &str = "<class>";

/// One class record, with its lines kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    /// Value of the record's `"Name"` field.
    pub name: String,
    /// Line on which the record opened (1-based).
    pub line: usize,
    /// Every line of the record, terminators included.
    pub lines: Vec<String>,
}

/// Classes keyed by name, in byte order of the name.
pub type ClassMap = BTreeMap<String, ClassRecord>;

#[derive(Default)]
struct OpenRecord {
    line: usize,
    name: Option<String>,
    kind: Option<String>,
    lines: Vec<String>,
}

fn content(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn quoted_value<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = content(line).strip_prefix(prefix)?;
    rest.strip_suffix("\",").or_else(|| rest.strip_suffix('"'))
}

/// Collect the class records of `input`.
///
/// Lines outside records are ignored. A later class with the same name
/// replaces the earlier one.
///
/// # Errors
///
/// Returns [`ClassSortError::Unterminated`] if a record opens inside another
/// or the input ends inside one, and [`ClassSortError::MissingName`] for a
/// class record without a name.
pub fn collect_classes(input: &str) -> Result<ClassMap, ClassSortError> {
    let mut classes = ClassMap::new();
    let mut open: Option<OpenRecord> = None;

    for (i, line) in input.split_inclusive('\n').enumerate() {
        let line_no = i + 1;
        let text = content(line);

        let Some(record) = open.as_mut() else {
            if text == RECORD_OPEN {
                open = Some(OpenRecord {
                    line: line_no,
                    lines: vec![line.to_string()],
                    ..OpenRecord::default()
                });
            }
            continue;
        };

        if text == RECORD_OPEN {
            return Err(ClassSortError::Unterminated { line: record.line });
        }
        record.lines.push(line.to_string());
        if let Some(name) = quoted_value(line, NAME_PREFIX) {
            record.name = Some(name.to_string());
        } else if let Some(kind) = quoted_value(line, TYPE_PREFIX) {
            record.kind = Some(kind.to_string());
        }

        if (text == RECORD_CLOSE || text == RECORD_CLOSE_LAST)
            && let Some(record) = open.take()
        {
            close_record(record, &mut classes)?;
        }
    }

    match open {
        Some(record) => Err(ClassSortError::Unterminated { line: record.line }),
        None => Ok(classes),
    }
}

fn close_record(record: OpenRecord, classes: &mut ClassMap) -> Result<(), ClassSortError> {
    if record.kind.as_deref() != Some(CLASS_TYPE) {
        debug!(
            line = record.line,
            kind = record.kind.as_deref().unwrap_or("<none>"),
            "skipping non-class record"
        );
        return Ok(());
    }
    let name = record
        .name
        .ok_or(ClassSortError::MissingName { line: record.line })?;
    let class = ClassRecord {
        name: name.clone(),
        line: record.line,
        lines: record.lines,
    };
    if let Some(previous) = classes.insert(name, class) {
        warn!(
            name = %previous.name,
            replaced_line = previous.line,
            "duplicate class name, keeping the later record"
        );
    }
    Ok(())
}

/// Concatenate the records in name order.
///
/// A final line without a terminator gets one so records never run together.
#[must_use]
pub fn render_sorted(classes: &ClassMap) -> String {
    let mut out = String::new();
    for line in classes.values().flat_map(|c| &c.lines) {
        out.push_str(line);
        if !line.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
