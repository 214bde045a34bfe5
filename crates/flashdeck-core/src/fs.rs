//! Filesystem utilities for atomic writes.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Write `destination` through a sibling temp file and rename it into place.
///
/// The closure receives a buffered writer. If it fails, or flushing or the
/// rename fails, the temp file is removed and `destination` is left as it was.
pub fn write_atomically<T, F>(destination: &Path, write: F) -> io::Result<T>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<T>,
{
    let temp_path = temp_sibling(destination);
    let result = File::create(&temp_path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        let value = write(&mut writer)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(value)
    });

    match result {
        Ok(value) => {
            rename_with_fallback(&temp_path, destination)?;
            Ok(value)
        }
        Err(err) => {
            let _ = fs::remove_file(&temp_path);
            Err(err)
        }
    }
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "cards".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomically_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("cards.txt");

        let written = write_atomically(&dest, |w| {
            w.write_all(b"a\nb\n0\n")?;
            Ok(1)
        })
        .unwrap();

        assert_eq!(written, 1);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "a\nb\n0\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomically_keeps_old_file_on_error() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("cards.txt");
        fs::write(&dest, "old").unwrap();

        let result: io::Result<()> = write_atomically(&dest, |w| {
            w.write_all(b"partial")?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomically_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("cards.txt");

        let result = write_atomically(&dest, |_| Ok(()));
        assert!(result.is_err());
        assert!(!dest.exists());
    }
}
