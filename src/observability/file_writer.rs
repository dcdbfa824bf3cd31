//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage for log files.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Provides automatic file rotation based on size thresholds. When the current
/// file exceeds `MAX_FILE_SIZE_BYTES`, it is renamed with a timestamp suffix
/// and a new file is created. Old backups beyond `MAX_BACKUP_FILES` are
/// automatically cleaned up.
///
/// # Thread Safety
///
/// Uses an internal `Mutex` to ensure safe concurrent access. The writer is
/// handed to the `fmt` layer as its [`MakeWriter`], so every formatted event
/// arrives as a single locked write.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 10MB, rotate:
///    - Rename current file to `<name>.<timestamp>`
///    - Create new empty file
///    - Remove oldest backups beyond 3
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<fs::File>>,
    max_bytes: u64,
    max_backups: usize,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write operation. This allows
    /// construction to succeed even if the file cannot be opened immediately.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
            max_bytes,
            max_backups,
        }
    }

    /// Appends `bytes` to the file, rotating first if it has grown too large.
    ///
    /// # Errors
    ///
    /// May fail due to:
    /// - File system permissions
    /// - Disk space exhaustion
    /// - Mutex poisoning (if another thread panicked while holding the lock)
    pub fn append(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    /// Checks file size and rotates if necessary.
    ///
    /// If the current file exceeds the size limit, closes the file handle and
    /// triggers rotation.
    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.<timestamp>` and cleans up old backups.
    ///
    /// Example: `rickdex.log.20260115093012123456789`
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S%f");

        let mut backup_name = self.file_path.as_os_str().to_owned();
        backup_name.push(format!(".{timestamp}"));
        let backup_path = PathBuf::from(backup_name);

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes old backup files beyond the retention limit.
    ///
    /// Scans the directory for files named `<name>.*`, sorts them newest first,
    /// and deletes all backups beyond the limit. Individual deletion errors are
    /// ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexicographically, newest last.
        backups.sort();
        backups.reverse();

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl io::Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a Self;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}
