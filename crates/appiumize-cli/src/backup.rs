//! Backup of an existing output folder before it is cleared
//!
//! Creates a timestamped session directory and copies the folder into it,
//! so a previous conversion can be recovered.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the backup directory created next to the output folder
pub const BACKUP_DIR: &str = ".appiumize-backup";

/// Backup manager for output folders
pub struct BackupManager {
    /// Directory to store backups
    backup_dir: PathBuf,
    /// Timestamped session directory
    session_dir: Option<PathBuf>,
    /// Whether backups are enabled
    enabled: bool,
}

impl BackupManager {
    pub fn new(backup_dir: PathBuf, enabled: bool) -> Self {
        Self {
            backup_dir,
            session_dir: None,
            enabled,
        }
    }

    /// Initialize a new backup session (creates timestamped directory)
    pub fn init_session(&mut self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let mut session_dir = self.backup_dir.join(&timestamp);
        // Two runs within the same second get distinct sessions
        let mut n = 1;
        while session_dir.exists() {
            session_dir = self.backup_dir.join(format!("{}-{}", timestamp, n));
            n += 1;
        }

        fs::create_dir_all(&session_dir)
            .with_context(|| format!("Failed to create backup directory: {}", session_dir.display()))?;

        self.session_dir = Some(session_dir);
        Ok(())
    }

    /// Copy the tree at `root` into the session directory
    ///
    /// Returns the backup location and the number of files copied.
    pub fn backup_tree(&self, root: &Path) -> Result<Option<(PathBuf, usize)>> {
        if !self.enabled {
            return Ok(None);
        }

        let session_dir = match &self.session_dir {
            Some(dir) => dir,
            None => return Ok(None),
        };

        let name = root
            .file_name()
            .with_context(|| format!("Cannot back up {}", root.display()))?;
        let target = session_dir.join(name);
        let mut files = 0;

        for entry in WalkDir::new(root) {
            let entry = entry.with_context(|| format!("Failed to read {}", root.display()))?;
            let relative = entry
                .path()
                .strip_prefix(root)
                .with_context(|| format!("Unexpected path {}", entry.path().display()))?;
            let dest = target.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)
                    .with_context(|| format!("Failed to create backup directory: {}", dest.display()))?;
            } else {
                fs::copy(entry.path(), &dest).with_context(|| {
                    format!(
                        "Failed to backup file: {} -> {}",
                        entry.path().display(),
                        dest.display()
                    )
                })?;
                files += 1;
            }
        }

        Ok(Some((target, files)))
    }

    /// Get the session directory path (for reporting)
    pub fn session_path(&self) -> Option<&Path> {
        self.session_dir.as_deref()
    }
}
