//! Backup Housekeeping
//!
//! Byte-identical file copies of the active database. Automatic backups
//! are opportunistic and best-effort: a failed copy must never block the
//! user's primary action, so failures are logged and swallowed. Manual
//! backup and restore are explicit and fallible.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use crate::error::WorkbenchError;

/// Automatically-created copies retained per source file basename.
pub const MAX_AUTO_BACKUPS: usize = 10;

/// Source file name without the `.db` extension, used to group backups.
pub fn source_basename(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn auto_backup_name(basename: &str) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_auto_{}.db", basename, timestamp)
}

/// Suggested file name for a manual backup of `source`.
pub fn manual_backup_name(source: &Path) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_backup_{}.db", source_basename(source), timestamp)
}

/// Opportunistic timestamped copy of `source` into `backup_dir`, followed
/// by retention cleanup. Never fails: any error is logged at warn level.
pub fn auto_backup(backup_dir: &Path, source: &Path, retain: usize) {
    let basename = source_basename(source);
    if basename.is_empty() {
        return;
    }

    if let Err(e) = fs::create_dir_all(backup_dir) {
        warn!("auto-backup skipped, cannot create {:?}: {}", backup_dir, e);
        return;
    }

    let dest = backup_dir.join(auto_backup_name(&basename));
    match fs::copy(source, &dest) {
        Ok(_) => debug!("auto-backup written to {:?}", dest),
        Err(e) => {
            warn!("auto-backup of {:?} failed: {}", source, e);
            return;
        }
    }

    if let Err(e) = cleanup_old_backups(backup_dir, &basename, retain) {
        warn!("auto-backup cleanup in {:?} failed: {}", backup_dir, e);
    }
}

/// Delete automatic backups of `basename` beyond the `retain` newest.
///
/// Candidates are files named `<basename>_auto_*.db`, ordered by
/// modification time (newest first, file name as tie-breaker).
pub fn cleanup_old_backups(
    backup_dir: &Path,
    basename: &str,
    retain: usize,
) -> std::io::Result<()> {
    let prefix = format!("{}_auto_", basename);
    let mut backups: Vec<(PathBuf, std::time::SystemTime, String)> = Vec::new();

    for entry in fs::read_dir(backup_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(&prefix) || !name.ends_with(".db") {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        backups.push((entry.path(), modified, name));
    }

    backups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.2.cmp(&a.2)));

    for (path, _, _) in backups.into_iter().skip(retain) {
        debug!("removing old auto-backup {:?}", path);
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Explicit user-triggered copy of the database file.
pub fn manual_backup(source: &Path, dest: &Path) -> Result<(), WorkbenchError> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::copy(source, dest)?;
    Ok(())
}

/// Overwrite the active database file with a backup copy.
///
/// The caller must have closed the active connection and must reconnect
/// afterwards.
pub fn restore(backup: &Path, active: &Path) -> Result<(), WorkbenchError> {
    fs::copy(backup, active)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, FileTimes};
    use std::time::{Duration, SystemTime};

    fn touch_with_mtime(path: &Path, mtime: SystemTime) {
        fs::write(path, b"data").unwrap();
        let file = File::options().write(true).open(path).unwrap();
        file.set_times(FileTimes::new().set_modified(mtime)).unwrap();
    }

    #[test]
    fn test_auto_backup_copies_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("mydb.db");
        fs::write(&source, b"payload").unwrap();
        let backup_dir = dir.path().join("backups");

        auto_backup(&backup_dir, &source, MAX_AUTO_BACKUPS);

        let copies: Vec<_> = fs::read_dir(&backup_dir)
            .unwrap()
            .map(|e| e.unwrap())
            .collect();
        assert_eq!(copies.len(), 1);
        let name = copies[0].file_name().to_string_lossy().into_owned();
        assert!(name.starts_with("mydb_auto_"));
        assert!(name.ends_with(".db"));
        assert_eq!(fs::read(copies[0].path()).unwrap(), b"payload");
    }

    #[test]
    fn test_auto_backup_swallows_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        // Source does not exist; must not panic or error.
        auto_backup(dir.path(), &dir.path().join("ghost.db"), MAX_AUTO_BACKUPS);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_retention_keeps_newest_n() {
        let dir = tempfile::tempdir().unwrap();
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        // N+5 backups for "mydb", plus an unrelated file and another basename.
        for i in 0..MAX_AUTO_BACKUPS + 5 {
            let name = format!("mydb_auto_202401{:02}_000000.db", i + 1);
            touch_with_mtime(&dir.path().join(name), base + Duration::from_secs(i as u64));
        }
        touch_with_mtime(&dir.path().join("other_auto_20240101_000000.db"), base);
        touch_with_mtime(&dir.path().join("mydb_manual.txt"), base);

        cleanup_old_backups(dir.path(), "mydb", MAX_AUTO_BACKUPS).unwrap();

        let mut remaining: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("mydb_auto_"))
            .collect();
        remaining.sort();

        assert_eq!(remaining.len(), MAX_AUTO_BACKUPS);
        // The five oldest were deleted; the newest ten survive.
        let expected: Vec<String> = (6..=MAX_AUTO_BACKUPS + 5)
            .map(|i| format!("mydb_auto_202401{:02}_000000.db", i))
            .collect();
        assert_eq!(remaining, expected);

        // Other basenames and non-matching files are untouched.
        assert!(dir.path().join("other_auto_20240101_000000.db").exists());
        assert!(dir.path().join("mydb_manual.txt").exists());
    }

    #[test]
    fn test_manual_backup_and_restore() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("live.db");
        fs::write(&active, b"version-1").unwrap();

        let backup = dir.path().join("copies").join("live_backup.db");
        manual_backup(&active, &backup).unwrap();
        assert_eq!(fs::read(&backup).unwrap(), b"version-1");

        fs::write(&active, b"version-2").unwrap();
        restore(&backup, &active).unwrap();
        assert_eq!(fs::read(&active).unwrap(), b"version-1");
    }

    #[test]
    fn test_manual_backup_missing_source_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = manual_backup(&dir.path().join("ghost.db"), &dir.path().join("out.db"));
        assert!(result.is_err());
    }
}
