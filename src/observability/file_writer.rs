//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`RotatingFileWriter`] is handed to the `fmt` layer as its writer. Each
//! formatted event arrives as one `write` call; before it lands, the file is
//! rotated if it has grown past the size limit.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Cloning is cheap; all clones share one file handle.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size exceeds the limit, rotate:
///    - Rename current file to `<name>.<timestamp>`
///    - Open a new empty file
///    - Remove the oldest backups beyond the retention limit
#[derive(Clone)]
pub struct RotatingFileWriter {
    inner: Arc<Inner>,
}

struct Inner {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily opened on first write.
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                file_path,
                max_bytes,
                max_backups,
                file: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.file_path
    }

    fn write_record(&self, buf: &[u8]) -> io::Result<()> {
        let mut file = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.inner.file_path)?,
            );
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        handle.write_all(buf)?;
        handle.flush()
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.inner.file_path) {
            if metadata.len() > self.inner.max_bytes {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S%9f");
        let backup_path = self.backup_prefix().map_or_else(
            || self.inner.file_path.with_extension(format!("{stamp}")),
            |prefix| self.inner.file_path.with_file_name(format!("{prefix}{stamp}")),
        );

        if self.inner.file_path.exists() {
            fs::rename(&self.inner.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// `adboard.log.` for `adboard.log`.
    fn backup_prefix(&self) -> Option<String> {
        self.inner
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{name}."))
    }

    /// Removes backups beyond the retention limit, newest kept.
    ///
    /// Individual deletion errors are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let Some(parent_dir) = self.inner.file_path.parent() else {
            return Ok(());
        };
        let Some(prefix) = self.backup_prefix() else {
            return Ok(());
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamps are fixed-width, so name order is age order.
        backups.sort();
        backups.reverse();

        for old_backup in backups.iter().skip(self.inner.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.inner.file_path)
            .finish_non_exhaustive()
    }
}
