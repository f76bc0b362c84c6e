//! Reading and writing a [`Document`] from and to its file.
//!
//! The whole file is read at once and, when saved, replaced in full by a
//! single write. There is no partial persistence.

use std::path::Path;

use crate::error::NormalizeError;
use crate::types::Document;

impl Document {
    /// Read and parse the document at `path`.
    ///
    /// A missing file is reported before any read is attempted. Content that
    /// is not a JSON array of objects with a string `url` is reported as
    /// [`NormalizeError::InvalidJson`].
    pub fn load(path: &Path) -> Result<Self, NormalizeError> {
        if !path.exists() {
            return Err(NormalizeError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|source| NormalizeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| NormalizeError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize the document and overwrite `path` with it.
    pub fn save(&self, path: &Path, pretty: bool) -> Result<(), NormalizeError> {
        let serialized = if pretty {
            serde_json::to_vec_pretty(self)
        } else {
            serde_json::to_vec(self)
        };
        let serialized = serialized.map_err(|e| NormalizeError::Io {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        std::fs::write(path, serialized).map_err(|source| NormalizeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
