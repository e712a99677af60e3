//! IO utilities.

use std::io::Write;
use std::path::Path;

use crate::error::{with_err_context, Error, ErrorContext, Result};

pub fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    with_err_context(std::fs::create_dir_all(path), || {
        ErrorContext::CreateDir(path.to_path_buf())
    })?;
    Ok(())
}

pub fn create_file(path: impl AsRef<Path>) -> Result<std::fs::File> {
    let path = path.as_ref();
    let file = with_err_context(std::fs::File::create(path), || {
        ErrorContext::CreateFile(path.to_path_buf())
    })?;
    Ok(file)
}

pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let data = with_err_context(std::fs::read_to_string(path), || {
        ErrorContext::ReadFile(path.to_path_buf())
    })?;
    Ok(data)
}

/// Writes `contents` to `path` in full, or leaves any existing file untouched.
///
/// The data goes to a sibling temporary file first, which is then renamed over `path`.
pub fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut file = create_file(&tmp_path)?;
    let written = with_err_context(
        file.write_all(contents.as_ref()).and_then(|_| file.sync_all()),
        || ErrorContext::WriteFile(tmp_path.clone()),
    );
    drop(file);
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }

    with_err_context(std::fs::rename(&tmp_path, path), || {
        ErrorContext::WriteFile(path.to_path_buf())
    })?;
    Ok(())
}

/// Removes the file at `path`, if there is one.
///
/// Returns `true` if a file was removed.
pub fn remove_file_if_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::from(e).with_context(ErrorContext::RemoveFile(path.to_path_buf()))),
    }
}
