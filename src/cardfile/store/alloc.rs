//! Unique file name allocation.
//!
//! The record is written to a hidden temp file first. Each candidate name is
//! then claimed with a single `hard_link`, which fails if the name exists, so
//! two writers racing for the same name cannot both win it and nobody ever
//! sees a half-written record under a visible name.

use crate::error::{CardError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const RECORD_EXT: &str = "md";

/// Highest numeric suffix tried before giving up on the title.
pub const MAX_SUFFIX: u32 = 1000;

pub fn record_file_name(stem: &str) -> String {
    format!("{}.{}", stem, RECORD_EXT)
}

/// `base`, then `base (2)` through `base (MAX_SUFFIX)`.
pub fn candidate_stems(base: &str) -> impl Iterator<Item = String> + '_ {
    let numbered = (2..=MAX_SUFFIX).map(move |n| format!("{} ({})", base, n));
    std::iter::once(base.to_string()).chain(numbered)
}

/// True when `stem` is a name [`candidate_stems`] could have produced for `base`.
pub fn is_candidate_of(stem: &str, base: &str) -> bool {
    if stem == base {
        return true;
    }
    stem.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix(" ("))
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(|n| n.parse::<u32>().ok())
        .is_some_and(|n| (2..=MAX_SUFFIX).contains(&n))
}

/// Links the finished file at `source` into `dir` under the first free name
/// for `base`. `source` itself is left in place for the caller to remove.
///
/// Numbered candidates are tried in order; if all of them exist the record
/// gets a random UUID name instead.
pub fn allocate(dir: &Path, base: &str, source: &Path) -> Result<PathBuf> {
    for stem in candidate_stems(base) {
        let path = dir.join(record_file_name(&stem));
        match fs::hard_link(source, &path) {
            Ok(()) => {
                debug!("allocated {}", path.display());
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(CardError::Io(e)),
        }
    }

    let path = dir.join(record_file_name(&Uuid::new_v4().to_string()));
    debug!(
        "all numbered names for {:?} taken, falling back to {}",
        base,
        path.display()
    );
    match fs::hard_link(source, &path) {
        Ok(()) => Ok(path),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(CardError::AllocationExhausted {
            base: base.to_string(),
        }),
        Err(e) => Err(CardError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(dir: &Path) -> PathBuf {
        let path = dir.join(".pending.tmp");
        fs::write(&path, "record").unwrap();
        path
    }

    #[test]
    fn first_candidate_is_the_base() {
        let stems: Vec<String> = candidate_stems("Note").take(3).collect();
        assert_eq!(stems, vec!["Note", "Note (2)", "Note (3)"]);
        assert_eq!(candidate_stems("Note").count(), MAX_SUFFIX as usize);
    }

    #[test]
    fn recognises_own_candidates() {
        assert!(is_candidate_of("Note", "Note"));
        assert!(is_candidate_of("Note (2)", "Note"));
        assert!(is_candidate_of("Note (1000)", "Note"));
        assert!(!is_candidate_of("Note (1)", "Note"));
        assert!(!is_candidate_of("Note (1001)", "Note"));
        assert!(!is_candidate_of("Note (x)", "Note"));
        assert!(!is_candidate_of("Notes", "Note"));
        assert!(!is_candidate_of("Other", "Note"));
    }

    #[test]
    fn takes_base_name_when_free() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(dir.path());
        let path = allocate(dir.path(), "Hello", &src).unwrap();
        assert_eq!(path, dir.path().join("Hello.md"));
        assert!(src.exists());
    }

    #[test]
    fn claimed_name_already_holds_the_content() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(dir.path());
        let path = allocate(dir.path(), "Full", &src).unwrap();
        fs::remove_file(&src).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "record");
    }

    #[test]
    fn numbers_collisions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Same Title.md"), "x").unwrap();
        fs::write(dir.path().join("Same Title (2).md"), "x").unwrap();

        let path = allocate(dir.path(), "Same Title", &source(dir.path())).unwrap();
        assert_eq!(path, dir.path().join("Same Title (3).md"));
        assert_eq!(fs::read_to_string(dir.path().join("Same Title.md")).unwrap(), "x");
    }

    #[test]
    fn fills_gaps_in_numbering() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Gap.md"), "x").unwrap();
        fs::write(dir.path().join("Gap (3).md"), "x").unwrap();

        let path = allocate(dir.path(), "Gap", &source(dir.path())).unwrap();
        assert_eq!(path, dir.path().join("Gap (2).md"));
    }

    #[test]
    fn falls_back_to_random_name_when_exhausted() {
        let dir = tempfile::tempdir().unwrap();
        for stem in candidate_stems("Busy") {
            fs::write(dir.path().join(record_file_name(&stem)), "").unwrap();
        }

        let path = allocate(dir.path(), "Busy", &source(dir.path())).unwrap();
        let stem = path.file_stem().unwrap().to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&stem).is_ok(), "expected uuid name, got {stem}");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(dir.path());
        let err = allocate(&dir.path().join("nope"), "X", &src).unwrap_err();
        assert!(matches!(err, CardError::Io(_)));
    }
}
