use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const ACCEPTED_EXTENSIONS: &[&str] = &["smi", "txt"];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read file {}: {}", .path.display(), .reason)]
    Unreadable { path: PathBuf, reason: String },
    #[error("File content is empty or unreadable: {}", .path.display())]
    Empty { path: PathBuf },
}

pub fn read_smiles_file(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext) => {}
        None => {}
        Some(ext) => warn!(path = %path.display(), extension = ext, "unexpected file extension, reading as plain text"),
    }

    let content = fs::read_to_string(path).map_err(|err| InputError::Unreadable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), bytes = trimmed.len(), "SMILES file loaded");
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_trimmed_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aspirin.smi");
        fs::write(&path, "\n  CC(=O)OC1=CC=CC=C1C(=O)O  \n").unwrap();
        assert_eq!(read_smiles_file(&path).unwrap(), "CC(=O)OC1=CC=CC=C1C(=O)O");
    }

    #[test]
    fn other_extensions_are_still_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("molecule.csv");
        fs::write(&path, "CCO").unwrap();
        assert_eq!(read_smiles_file(&path).unwrap(), "CCO");
    }

    #[test]
    fn whitespace_only_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, " \n\t ").unwrap();
        assert!(matches!(read_smiles_file(&path), Err(InputError::Empty { .. })));
    }

    #[test]
    fn missing_or_binary_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_smiles_file(dir.path().join("absent.smi")),
            Err(InputError::Unreadable { .. })
        ));

        let path = dir.path().join("binary.smi");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();
        assert!(matches!(
            read_smiles_file(&path),
            Err(InputError::Unreadable { .. })
        ));
    }
}
