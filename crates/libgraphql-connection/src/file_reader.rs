use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadSchemaFileError>;

/// Reads a schema file from disk as UTF-8 text.
pub fn read_schema_file<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadSchemaFileError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadSchemaFileError::Io {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes).map_err(|err| ReadSchemaFileError::InvalidUtf8 {
        file_path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

#[derive(Debug, Error)]
pub enum ReadSchemaFileError {
    #[error(
        "The schema file at {file_path:?} is not valid UTF-8 (invalid byte \
        sequence after byte offset {valid_up_to})"
    )]
    InvalidUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("Failed to read the schema file at {file_path:?}: {err}")]
    Io {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Expected a schema file, but {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
