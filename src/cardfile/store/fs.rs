use super::alloc::{self, RECORD_EXT};
use super::{CardStore, ScanOutcome, SkippedRecord};
use crate::error::{CardError, FormatError, Result};
use crate::model::Card;
use crate::naming::base_name_for;
use crate::record;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use uuid::Uuid;

/// A decoded record and where it came from.
#[derive(Debug)]
struct Entry {
    path: PathBuf,
    card: Card,
    modified: Option<SystemTime>,
}

impl Entry {
    /// Ordering used to pick the authoritative record among duplicates.
    fn freshness(&self) -> (i64, Option<SystemTime>) {
        (self.card.updated_at, self.modified)
    }
}

/// Decode result for one file, with its modification time.
type Decoded = (std::result::Result<Card, FormatError>, Option<SystemTime>);

#[derive(Debug, Default)]
struct Scan {
    entries: HashMap<String, Entry>,
    stale: Vec<Entry>,
    skipped: Vec<SkippedRecord>,
}

/// The authoritative record for an id, plus any older copies left behind.
#[derive(Debug)]
struct Located {
    path: PathBuf,
    card: Card,
    stale: Vec<PathBuf>,
}

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CardError::Io)?;
        }
        Ok(())
    }

    /// Visible `.md` files in the cards directory, sorted by name.
    fn record_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CardError::Io(e)),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(CardError::Io)?.path();
            if is_record_name(&path) && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Reads and decodes one file. `Ok(None)` if it vanished in the meantime.
    fn read_record(&self, path: &Path) -> Result<Option<Decoded>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CardError::Io(e)),
        };
        let modified = fs::metadata(path).and_then(|m| m.modified()).ok();
        Ok(Some((record::decode_bytes(&bytes), modified)))
    }

    fn scan_dir(&self) -> Result<Scan> {
        let mut scan = Scan::default();

        for path in self.record_paths()? {
            let Some((decoded, modified)) = self.read_record(&path)? else {
                continue;
            };
            let card = match decoded {
                Ok(card) => card,
                Err(e) => {
                    warn!("skipping {}: {}", path.display(), e);
                    scan.skipped.push(SkippedRecord {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let entry = Entry {
                path,
                card,
                modified,
            };
            match scan.entries.remove(&entry.card.id) {
                None => {
                    scan.entries.insert(entry.card.id.clone(), entry);
                }
                Some(existing) => {
                    let (keep, stale) = if entry.freshness() > existing.freshness() {
                        (entry, existing)
                    } else {
                        (existing, entry)
                    };
                    warn!(
                        "card {} has a stale copy at {} (current: {})",
                        keep.card.id,
                        stale.path.display(),
                        keep.path.display()
                    );
                    scan.stale.push(stale);
                    scan.entries.insert(keep.card.id.clone(), keep);
                }
            }
        }

        debug!(
            "scanned {}: {} cards, {} skipped",
            self.root.display(),
            scan.entries.len(),
            scan.skipped.len()
        );
        Ok(scan)
    }

    /// Finds the record for `id` and every older copy of it.
    ///
    /// Always a full scan: a second copy can only be ruled out by decoding
    /// every file in the directory.
    fn locate(&self, id: &str) -> Result<Located> {
        let mut scan = self.scan_dir()?;
        let entry = scan
            .entries
            .remove(id)
            .ok_or_else(|| CardError::NotFound(id.to_string()))?;
        let stale = scan
            .stale
            .into_iter()
            .filter(|e| e.card.id == id)
            .map(|e| e.path)
            .collect();

        Ok(Located {
            path: entry.path,
            card: entry.card,
            stale,
        })
    }

    /// Writes `card` to a hidden, fsynced temp file and returns its path.
    fn write_temp(&self, card: &Card) -> Result<PathBuf> {
        let tmp_path = self.root.join(format!(".card-{}.tmp", Uuid::new_v4()));
        let written = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .and_then(|mut file| write_synced(&mut file, &record::encode(card)));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(CardError::Io(e));
        }
        Ok(tmp_path)
    }

    /// Writes `card` to a newly allocated file named after its title.
    fn write_new(&self, card: &Card) -> Result<PathBuf> {
        self.ensure_dir()?;
        let tmp_path = self.write_temp(card)?;
        let claimed = alloc::allocate(&self.root, &base_name_for(&card.content), &tmp_path);
        if let Err(e) = fs::remove_file(&tmp_path) {
            warn!("could not remove temp file {}: {}", tmp_path.display(), e);
        }
        claimed
    }

    /// Replaces the record at `path` via a temp file and rename.
    fn rewrite_in_place(&self, path: &Path, card: &Card) -> Result<()> {
        let tmp_path = self.write_temp(card)?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CardError::Io(e));
        }
        Ok(())
    }

    /// Best-effort cleanup of files the current record has superseded.
    fn remove_superseded(&self, paths: &[PathBuf]) {
        for path in paths {
            if let Err(e) = fs::remove_file(path) {
                if e.kind() != ErrorKind::NotFound {
                    warn!("could not remove stale record {}: {}", path.display(), e);
                }
            }
        }
    }
}

impl CardStore for FileStore {
    fn create(&self, content: String) -> Result<Card> {
        let card = Card::new(content);
        self.write_new(&card)?;
        Ok(card)
    }

    fn scan(&self) -> Result<ScanOutcome> {
        let scan = self.scan_dir()?;
        Ok(ScanOutcome {
            cards: scan.entries.into_values().map(|e| e.card).collect(),
            skipped: scan.skipped,
        })
    }

    fn read(&self, id: &str) -> Result<Card> {
        Ok(self.locate(id)?.card)
    }

    fn update(&self, id: &str, content: String) -> Result<Card> {
        let Located {
            path: old_path,
            mut card,
            mut stale,
        } = self.locate(id)?;
        card.touch_content(content);

        let base = base_name_for(&card.content);
        let keeps_name = old_path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| alloc::is_candidate_of(stem, &base));

        if keeps_name {
            self.rewrite_in_place(&old_path, &card)?;
        } else {
            let new_path = self.write_new(&card)?;
            debug!("card {} moved to {}", id, new_path.display());
            stale.push(old_path);
        }

        self.remove_superseded(&stale);
        Ok(card)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let located = self.locate(id)?;
        let removed = fs::remove_file(&located.path);
        self.remove_superseded(&located.stale);
        match removed {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CardError::NotFound(id.to_string())),
            Err(e) => Err(CardError::Io(e)),
        }
    }

    fn card_path(&self, id: &str) -> Result<PathBuf> {
        Ok(self.locate(id)?.path)
    }
}


fn is_record_name(path: &Path) -> bool {
    let visible = path
        .file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| !name.starts_with('.'));
    let is_md = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(RECORD_EXT));
    visible && is_md
}

fn write_synced(file: &mut File, text: &str) -> io::Result<()> {
    file.write_all(text.as_bytes())?;
    file.sync_all()
}
