//! Input and output plumbing: files, stdin/stdout, atomic replacement.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::errors::CliError;

/// Read all bytes from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(Vec::new());
    match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::not_found(
                    format!("Input file not found: {}", path.display()),
                    "Hint: check the path, or omit --input to read stdin.",
                )
                .into());
            }
            let mut file = fs::File::open(path)
                .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", path.display(), e))?;
            file.read_to_end(&mut buf)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        }
        None => {
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        }
    }
    Ok(buf)
}

/// Write `bytes` to `path` atomically, or to stdout when `path` is `None` or `-`.
///
/// `private` restricts the file to its owner on Unix; decrypted output uses it.
pub fn write_output(path: Option<&Path>, bytes: &[u8], private: bool) -> anyhow::Result<()> {
    match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => write_atomic(path, bytes, private),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .map_err(|e| anyhow::anyhow!("Failed to write stdout: {}", e))
        }
    }
}

fn write_atomic(destination: &Path, bytes: &[u8], private: bool) -> anyhow::Result<()> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create output directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }

    let temp_path = temp_path_for(destination);
    fs::write(&temp_path, bytes)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", temp_path.display(), e))?;
    if private {
        set_owner_only(&temp_path)?;
    }
    rename_with_fallback(&temp_path, destination)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", destination.display(), e))?;
    Ok(())
}

fn temp_path_for(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    destination.with_file_name(name)
}

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
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

fn set_owner_only(path: &Path) -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
