use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{error, info, warn};

use super::errors::LayoutError;
use super::types::WindowRecord;

const EMPTY_DOCUMENT: &str = "{}";
const BACKUP_SUFFIX: &str = ".backup";

/// The saved layout: window title -> record, backed by one JSON file.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    path: PathBuf,
    records: BTreeMap<String, WindowRecord>,
    /// Entries that did not convert to a record. Written back as they were.
    unreadable: BTreeMap<String, Value>,
    /// The file on disk could not be read or backed up; `save` leaves it alone.
    keep_file: bool,
}

/// What `read_document` recovered from an existing file.
#[derive(Debug, Default)]
struct Document {
    records: BTreeMap<String, WindowRecord>,
    unreadable: BTreeMap<String, Value>,
    keep_file: bool,
}

impl LayoutStore {
    /// Load the layout at `path`. Never fails.
    ///
    /// - missing file: created with `{}`
    /// - empty file: empty layout, file untouched
    /// - invalid JSON or invalid UTF-8: moved to `<path>.backup` and replaced
    ///   with `{}`; if the move fails the file is kept and `save` refuses to
    ///   overwrite it
    /// - entry that is not a record: skipped, kept in the file on `save`
    /// - unreadable file: empty layout, error logged, file kept
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(event = "core.layout.load_started", path = %path.display());

        let document = if path.exists() {
            read_document(&path)
        } else {
            write_empty_document(&path);
            Document::default()
        };

        info!(
            event = "core.layout.load_completed",
            path = %path.display(),
            count = document.records.len(),
            skipped = document.unreadable.len()
        );
        Self {
            path,
            records: document.records,
            unreadable: document.unreadable,
            keep_file: document.keep_file,
        }
    }

    /// An empty layout that is only written on `save`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
            unreadable: BTreeMap::new(),
            keep_file: false,
        }
    }

    /// Write the whole layout back to disk.
    pub fn save(&self) -> Result<(), LayoutError> {
        if self.keep_file {
            warn!(event = "core.layout.save_refused", path = %self.path.display());
            return Err(LayoutError::FileKept {
                path: self.path.display().to_string(),
            });
        }

        let mut document: BTreeMap<&str, Value> = self
            .unreadable
            .iter()
            .map(|(title, value)| (title.as_str(), value.clone()))
            .collect();
        for (title, record) in &self.records {
            let value = serde_json::to_value(record).map_err(|e| LayoutError::SerializeFailed {
                message: e.to_string(),
            })?;
            document.insert(title.as_str(), value);
        }

        let json =
            serde_json::to_string_pretty(&document).map_err(|e| LayoutError::SerializeFailed {
                message: e.to_string(),
            })?;

        ensure_parent_dir(&self.path).map_err(|e| LayoutError::SaveFailed {
            path: self.path.display().to_string(),
            message: format!("failed to create directory: {}", e),
        })?;

        std::fs::write(&self.path, json).map_err(|e| LayoutError::SaveFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(
            event = "core.layout.saved",
            path = %self.path.display(),
            count = self.records.len()
        );
        Ok(())
    }

    /// Insert or overwrite the record keyed by `record.title`.
    pub fn upsert(&mut self, record: WindowRecord) {
        self.unreadable.remove(&record.title);
        self.records.insert(record.title.clone(), record);
    }

    pub fn remove(&mut self, title: &str) -> Option<WindowRecord> {
        self.unreadable.remove(title);
        self.records.remove(title)
    }

    pub fn get(&self, title: &str) -> Option<&WindowRecord> {
        self.records.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.records.contains_key(title)
    }

    /// Records in title order.
    pub fn records(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.values()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `<path>.backup`, keeping the original extension.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

fn read_document(path: &Path) -> Document {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(
                event = "core.layout.read_failed",
                path = %path.display(),
                error = %e
            );
            return Document {
                keep_file: true,
                ..Document::default()
            };
        }
    };

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            error!(
                event = "core.layout.utf8_invalid",
                path = %path.display(),
                error = %e,
                "Layout file is not valid UTF-8 - backing it up and starting empty"
            );
            return recover_corrupt_file(path);
        }
    };

    if content.trim().is_empty() {
        return Document::default();
    }

    let entries = match serde_json::from_str::<BTreeMap<String, Value>>(&content) {
        Ok(entries) => entries,
        Err(e) => {
            error!(
                event = "core.layout.json_parse_failed",
                path = %path.display(),
                error = %e,
                "Layout file contains invalid JSON - backing it up and starting empty"
            );
            return recover_corrupt_file(path);
        }
    };

    let mut document = Document::default();
    for (title, value) in entries {
        match serde_json::from_value::<WindowRecord>(value.clone()) {
            Ok(mut record) => {
                record.title = title.clone();
                if record.original_title.is_empty() {
                    record.original_title = title.clone();
                }
                document.records.insert(title, record);
            }
            Err(e) => {
                warn!(
                    event = "core.layout.entry_skipped",
                    path = %path.display(),
                    title = %title,
                    error = %e
                );
                document.unreadable.insert(title, value);
            }
        }
    }
    document
}

/// Move a corrupt file aside and start from `{}`. The file stays where it
/// is when it cannot be moved.
fn recover_corrupt_file(path: &Path) -> Document {
    if backup_corrupt_file(path) {
        write_empty_document(path);
        Document::default()
    } else {
        warn!(event = "core.layout.corrupt_file_kept", path = %path.display());
        Document {
            keep_file: true,
            ..Document::default()
        }
    }
}

fn backup_corrupt_file(path: &Path) -> bool {
    let backup = backup_path(path);
    match std::fs::rename(path, &backup) {
        Ok(()) => {
            info!(
                event = "core.layout.backup_created",
                path = %path.display(),
                backup = %backup.display()
            );
            true
        }
        Err(e) => {
            error!(
                event = "core.layout.backup_failed",
                path = %path.display(),
                backup = %backup.display(),
                error = %e
            );
            false
        }
    }
}

fn write_empty_document(path: &Path) {
    let result = ensure_parent_dir(path).and_then(|()| std::fs::write(path, EMPTY_DOCUMENT));
    match result {
        Ok(()) => info!(event = "core.layout.empty_created", path = %path.display()),
        Err(e) => warn!(
            event = "core.layout.empty_create_failed",
            path = %path.display(),
            error = %e
        ),
    }
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
