//! Applies suggested replacements to the files on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::errors::FixError;
use crate::runner::{FileDiagnostic, FileEdit};

/// Applies every suggested fix, rewriting each file once. Within a file,
/// edits run in descending offset order so earlier offsets stay valid;
/// overlapping edits after the first are dropped. Returns the number of
/// edits applied.
pub fn apply_fixes(diagnostics: &[FileDiagnostic]) -> Result<usize, FixError> {
    let mut by_file: BTreeMap<&str, Vec<&FileEdit>> = BTreeMap::new();
    for diagnostic in diagnostics {
        if let Some(fix) = &diagnostic.fix {
            by_file
                .entry(diagnostic.position.path.as_str())
                .or_default()
                .push(fix);
        }
    }

    let mut applied = 0;
    for (path, mut edits) in by_file {
        let path = PathBuf::from(path);
        let mut contents = fs::read_to_string(&path).map_err(|source| FixError::Io {
            path: path.clone(),
            source,
        })?;

        edits.sort_by(|a, b| b.start.cmp(&a.start));
        let mut last_start = contents.len();
        for edit in edits {
            if edit.start >= edit.end
                || edit.end > contents.len()
                || !contents.is_char_boundary(edit.start)
                || !contents.is_char_boundary(edit.end)
            {
                return Err(FixError::InvalidRange {
                    path: path.clone(),
                    start: edit.start,
                    end: edit.end,
                });
            }
            if edit.end > last_start {
                tracing::warn!(path = %path.display(), start = edit.start, "skipping overlapping fix");
                continue;
            }
            contents.replace_range(edit.start..edit.end, &edit.text);
            last_start = edit.start;
            applied += 1;
        }

        fs::write(&path, contents).map_err(|source| FixError::Io {
            path: path.clone(),
            source,
        })?;
    }
    Ok(applied)
}
