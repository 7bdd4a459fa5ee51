//! JSON file output for the export document.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

use crate::domain::document::ExportDocument;
use crate::error::ExportError;

/// Default output location, relative to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "sqlite_export.json";

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// Size read back from the filesystem. `None` if the read-back failed.
    pub bytes: Option<u64>,
}

/// Writes `document` to `path` as 2-space indented UTF-8 JSON.
///
/// Non-ASCII text is written as-is. An existing file at `path` is replaced.
/// The document is written to a temporary file next to `path` and persisted
/// over it, so a failed write leaves any previous export untouched. The
/// result keeps the permissions of the file it replaces; a new file gets the
/// mode a plain create would give it under the current umask.
///
/// # Errors
///
/// Returns [`ExportError::WriteFault`] if serialization, writing or the final
/// rename fails. Failing to read back the file size is only logged.
pub fn write(document: &ExportDocument, path: &Path) -> Result<WriteOutcome, ExportError> {
    let fault = |source: io::Error| ExportError::write_fault(path, source);

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = create_temp(parent, path).map_err(fault)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        // serde_json errors convert into io::Error, keeping the original as the inner error
        serde_json::to_writer_pretty(&mut writer, document).map_err(|e| fault(e.into()))?;
        writer.flush().map_err(fault)?;
    }
    tmp.persist(path).map_err(|e| fault(e.error))?;

    let bytes = match fs::metadata(path) {
        Ok(meta) => {
            tracing::info!(
                "Saved to {} ({} bytes)",
                path.display(),
                group_thousands(meta.len())
            );
            Some(meta.len())
        }
        Err(e) => {
            tracing::warn!("Saved to {} but could not read its size: {}", path.display(), e);
            None
        }
    };

    Ok(WriteOutcome {
        path: path.to_path_buf(),
        bytes,
    })
}

/// Creates the temporary output file with the permissions the final file should have.
fn create_temp(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();

    // Mode passed to open(2), masked by the umask like any other create
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let tmp = builder.tempfile_in(dir)?;

    if let Ok(existing) = fs::metadata(target) {
        fs::set_permissions(tmp.path(), existing.permissions())?;
    }

    Ok(tmp)
}

/// Formats `n` with comma thousands separators, e.g. `12345` → `12,345`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
