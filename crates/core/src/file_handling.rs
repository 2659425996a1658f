//! Line-oriented storage of env files.
//!
//! Every mutating command performs a full load, modify, rewrite cycle against the
//! file on disk. Nothing is cached between commands and no locks are taken.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Extension every env file carries.
pub const ENV_EXTENSION: &str = ".env";

/// How [`rewrite`] replaces the content of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate the target and write into it.
    InPlace,
    /// Write a sibling temporary file, then rename it over the target.
    #[default]
    Atomic,
}

impl WriteMode {
    #[must_use]
    pub fn from_atomic(atomic: bool) -> Self {
        if atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }
}

/// Appends the `.env` extension unless the name already ends with it.
#[must_use]
pub fn with_env_extension(name: &str) -> String {
    if name.ends_with(ENV_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{ENV_EXTENSION}")
    }
}

/// Resolves an env file name inside `directory`. An empty directory means the
/// current working directory.
#[must_use]
pub fn env_file_path(directory: &Path, name: &str) -> PathBuf {
    let file_name = with_env_extension(name);
    if directory.as_os_str().is_empty() {
        PathBuf::from(file_name)
    } else {
        directory.join(file_name)
    }
}

fn describe(path: &Path) -> String {
    path.display().to_string()
}

#[must_use]
pub fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Fails with [`Error::FileNotFound`] unless `path` exists.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if exists(path) {
        Ok(())
    } else {
        Err(Error::FileNotFound(describe(path)))
    }
}

/// Reads the whole file.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file is missing or cannot be read.
pub fn read_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        debug!("Reading `{}` failed: {}", describe(path), e);
        Error::FileNotFound(describe(path))
    })
}

/// Loads the file as lines split on `\n`.
///
/// A trailing newline produces a final empty line, so [`rewrite`] with the returned
/// lines reproduces the file byte for byte.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file is missing or cannot be read.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_content(path)?;
    let lines: Vec<String> = content.split('\n').map(ToString::to_string).collect();
    debug!("Loaded {} lines from `{}`", lines.len(), describe(path));
    Ok(lines)
}

/// Replaces the file content with `lines` joined by `\n`. No trailing newline is added.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file (or its temporary sibling) cannot be written.
pub fn rewrite(path: &Path, lines: &[String], mode: WriteMode) -> Result<()> {
    let content = lines.join("\n");
    let path_description = describe(path);

    match mode {
        WriteMode::InPlace => {
            let mut file =
                File::create(path).map_err(|e| Error::io_error("opening", &path_description, e))?;
            file.write_all(content.as_bytes())
                .map_err(|e| Error::io_error("writing", &path_description, e))?;
        }
        WriteMode::Atomic => {
            // Symlinks are resolved so the rename replaces the file they point to.
            let target = if exists(path) {
                fs::canonicalize(path)
                    .map_err(|e| Error::io_error("resolving", &path_description, e))?
            } else {
                path.to_path_buf()
            };
            let directory = match target.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };

            let mut temporary = NamedTempFile::new_in(directory)
                .map_err(|e| Error::io_error("creating temporary", &path_description, e))?;
            if let Ok(metadata) = fs::metadata(&target) {
                temporary
                    .as_file()
                    .set_permissions(metadata.permissions())
                    .map_err(|e| Error::io_error("copying permissions to", &path_description, e))?;
            }
            temporary
                .write_all(content.as_bytes())
                .map_err(|e| Error::io_error("writing temporary", &path_description, e))?;
            temporary
                .persist(&target)
                .map_err(|e| Error::io_error("replacing", &path_description, e.error))?;
        }
    }

    info!("Rewrote `{}` with {} lines", path_description, lines.len());
    Ok(())
}

/// Appends a single `name=value` line, creating the file if needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or written.
pub fn append_variable(path: &Path, name: &str, value: &str) -> Result<()> {
    let path_description = describe(path);
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::io_error("opening", &path_description, e))?;

    writeln!(file, "{name}={value}")
        .map_err(|e| Error::io_error("writing", &path_description, e))?;

    info!("Appended `{}` to `{}`", name, path_description);
    Ok(())
}

/// Creates an empty env file.
///
/// # Errors
///
/// Returns [`Error::FileExists`] if the file exists and `overwrite` is false, or
/// [`Error::Io`] if it cannot be created.
pub fn create_env_file(path: &Path, overwrite: bool) -> Result<()> {
    let path_description = describe(path);
    if exists(path) && !overwrite {
        return Err(Error::FileExists(path_description));
    }

    File::create(path).map_err(|e| Error::io_error("creating", &path_description, e))?;
    info!("Created `{}`", path_description);
    Ok(())
}

/// Renames an env file. The target must not exist yet.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] for a missing source, [`Error::FileExists`] for an
/// existing target, or [`Error::Io`] if the rename fails.
pub fn rename_env_file(from: &Path, to: &Path) -> Result<()> {
    ensure_exists(from)?;
    if exists(to) {
        return Err(Error::FileExists(describe(to)));
    }

    fs::rename(from, to).map_err(|e| Error::io_error("renaming", &describe(from), e))?;
    info!("Renamed `{}` to `{}`", describe(from), describe(to));
    Ok(())
}

/// Deletes an env file.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] for a missing file or [`Error::Io`] if removal fails.
pub fn delete_env_file(path: &Path) -> Result<()> {
    ensure_exists(path)?;
    fs::remove_file(path).map_err(|e| Error::io_error("deleting", &describe(path), e))?;
    info!("Deleted `{}`", describe(path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_with_env_extension() {
        assert_eq!(with_env_extension("db"), "db.env");
        assert_eq!(with_env_extension("db.env"), "db.env");
        assert_eq!(with_env_extension("db.env.local"), "db.env.local.env");
    }

    #[test]
    fn test_env_file_path() {
        assert_eq!(env_file_path(Path::new(""), "db"), PathBuf::from("db.env"));
        assert_eq!(
            env_file_path(Path::new("/srv/config"), "db.env"),
            PathBuf::from("/srv/config/db.env")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_lines(&dir.path().join("missing.env"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_load_splits_on_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.env");
        fs::write(&path, "HOST=localhost\nPORT=5432\n").unwrap();

        let lines = load_lines(&path).unwrap();
        assert_eq!(lines, vec!["HOST=localhost", "PORT=5432", ""]);
    }

    #[test]
    fn test_rewrite_round_trip_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.env");
        let content = "HOST=localhost\nPORT=5432\n\nUSER=admin\n";
        fs::write(&path, content).unwrap();

        let lines = load_lines(&path).unwrap();
        rewrite(&path, &lines, WriteMode::InPlace).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_rewrite_round_trip_atomic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.env");
        let content = "HOST=localhost\nPORT=5432";
        fs::write(&path, content).unwrap();

        let lines = load_lines(&path).unwrap();
        rewrite(&path, &lines, WriteMode::Atomic).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("db.env");
        fs::write(&path, "HOST=localhost\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let lines = load_lines(&path).unwrap();
        rewrite(&path, &lines, WriteMode::Atomic).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_atomic_follows_symlink() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real.env");
        let link = dir.path().join("db.env");
        fs::write(&real, "HOST=localhost\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let lines = vec!["HOST=127.0.0.1".to_string(), String::new()];
        rewrite(&link, &lines, WriteMode::Atomic).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "HOST=127.0.0.1\n");
        assert_eq!(fs::read_to_string(&link).unwrap(), "HOST=127.0.0.1\n");
    }

    #[test]
    fn test_rewrite_adds_no_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.env");

        let lines = vec!["A=1".to_string(), "B=2".to_string()];
        rewrite(&path, &lines, WriteMode::Atomic).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\nB=2");
    }

    #[test]
    fn test_append_variable_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.env");

        append_variable(&path, "HOST", "localhost").unwrap();
        append_variable(&path, "PORT", "5432").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "HOST=localhost\nPORT=5432\n"
        );
    }

    #[test]
    fn test_create_env_file_refuses_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.env");
        fs::write(&path, "HOST=localhost\n").unwrap();

        let result = create_env_file(&path, false);
        assert!(matches!(result, Err(Error::FileExists(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "HOST=localhost\n");

        create_env_file(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_rename_env_file() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("db.env");
        let to = dir.path().join("database.env");
        fs::write(&from, "HOST=localhost\n").unwrap();

        rename_env_file(&from, &to).unwrap();

        assert!(!exists(&from));
        assert_eq!(fs::read_to_string(&to).unwrap(), "HOST=localhost\n");
    }

    #[test]
    fn test_rename_refuses_existing_target() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("db.env");
        let to = dir.path().join("other.env");
        fs::write(&from, "A=1").unwrap();
        fs::write(&to, "B=2").unwrap();

        let result = rename_env_file(&from, &to);
        assert!(matches!(result, Err(Error::FileExists(_))));
        assert!(exists(&from));
    }

    #[test]
    fn test_delete_env_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.env");
        fs::write(&path, "A=1").unwrap();

        delete_env_file(&path).unwrap();
        assert!(!exists(&path));

        let result = delete_env_file(&path);
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
