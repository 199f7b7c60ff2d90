use crate::app::error::AuditError;
use crate::app::interrupt::InterruptFlag;
use crate::app::models::ListingEntry;
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only, single-level view of one filesystem path.
pub struct PathInspector {
    target: PathBuf,
    interrupt: InterruptFlag,
}

impl PathInspector {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            interrupt: InterruptFlag::default(),
        }
    }

    /// Stops the directory listing with `Interrupted` once `flag` is raised.
    pub fn interruptible(mut self, flag: InterruptFlag) -> Self {
        self.interrupt = flag;
        self
    }

    /// Descriptors for the target, in the order `scan` returns them.
    pub fn inspect(&self) -> Result<Vec<String>, AuditError> {
        Ok(self.scan()?.iter().map(ToString::to_string).collect())
    }

    /// A file yields itself with its size, a directory yields its direct children
    /// sorted by name, anything else yields nothing.
    pub fn scan(&self) -> Result<Vec<ListingEntry>, AuditError> {
        // Existence is checked on the link itself so a dangling symlink is not "missing".
        fs::symlink_metadata(&self.target).map_err(|e| AuditError::from_io(e, &self.target))?;

        let entries = if self.target.is_file() {
            vec![self.describe_target_file()?]
        } else if self.target.is_dir() {
            self.list_children()?
        } else {
            Vec::new()
        };

        log::info!("Found {} items.", entries.len());
        Ok(entries)
    }

    fn describe_target_file(&self) -> Result<ListingEntry, AuditError> {
        let metadata =
            fs::metadata(&self.target).map_err(|e| AuditError::from_io(e, &self.target))?;

        Ok(ListingEntry::File {
            name: display_name(&self.target),
            size: Some(metadata.len()),
        })
    }

    fn list_children(&self) -> Result<Vec<ListingEntry>, AuditError> {
        let mut children = Vec::new();

        // Plain walker: no ignore files, no hidden-file filtering, one level deep.
        let walker = WalkBuilder::new(&self.target)
            .standard_filters(false)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for result in walker {
            self.interrupt.check()?;
            let entry = result.map_err(|err| self.walk_error(err))?;
            if let Some(child) = describe_child(&entry) {
                children.push(child);
            }
        }

        Ok(children)
    }

    fn walk_error(&self, err: ignore::Error) -> AuditError {
        if let Some(kind) = err.io_error().map(std::io::Error::kind) {
            match kind {
                std::io::ErrorKind::NotFound => return AuditError::NotFound(self.target.clone()),
                std::io::ErrorKind::Interrupted => return AuditError::Interrupted,
                _ => {}
            }
        }

        AuditError::Unexpected(
            anyhow::Error::new(err)
                .context(format!("Failed to read directory {}", self.target.display())),
        )
    }
}

fn describe_child(entry: &DirEntry) -> Option<ListingEntry> {
    // The walker yields the root itself at depth 0.
    if entry.depth() == 0 {
        return None;
    }

    let name = entry.file_name().to_string_lossy().into_owned();

    // `Path::is_dir` follows symlinks, so a link to a directory is listed as one.
    if entry.path().is_dir() {
        Some(ListingEntry::Dir { name })
    } else {
        Some(ListingEntry::File { name, size: None })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
