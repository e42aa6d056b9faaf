//! Writes the generated documents to their fixed file names.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{emit::Documents, ColorsError};

/// File holding the mixin definitions.
pub const MIXINS_FILE: &str = "mixins.scss";
/// Entrypoint that imports and includes the mixins.
pub const COLORS_FILE: &str = "colors.scss";

/// Locations of both generated files inside an output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    dir: PathBuf,
}

impl OutputPaths {
    /// Paths rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/mixins.scss`.
    #[must_use]
    pub fn mixins(&self) -> PathBuf {
        self.dir.join(MIXINS_FILE)
    }

    /// `<dir>/colors.scss`.
    #[must_use]
    pub fn entrypoint(&self) -> PathBuf {
        self.dir.join(COLORS_FILE)
    }

    fn files<'a>(&self, documents: &'a Documents) -> [(PathBuf, &'a str); 2] {
        [
            (self.mixins(), documents.mixins.as_str()),
            (self.entrypoint(), documents.entrypoint.as_str()),
        ]
    }
}

/// Creates the directory if needed and overwrites both files.
pub fn write_documents(paths: &OutputPaths, documents: &Documents) -> Result<(), ColorsError> {
    fs::create_dir_all(paths.dir()).map_err(|source| ColorsError::CreateDir {
        path: paths.dir().to_path_buf(),
        source,
    })?;

    for (path, contents) in paths.files(documents) {
        fs::write(&path, contents).map_err(|source| ColorsError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {} ({} bytes)", path.display(), contents.len());
    }
    Ok(())
}

/// Returns the files whose contents differ from `documents`. Missing files
/// count as stale.
pub fn check_documents(
    paths: &OutputPaths,
    documents: &Documents,
) -> Result<Vec<PathBuf>, ColorsError> {
    let mut stale = Vec::new();
    for (path, contents) in paths.files(documents) {
        match fs::read_to_string(&path) {
            Ok(existing) if existing == contents => {}
            Ok(_) => stale.push(path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => stale.push(path),
            Err(source) => return Err(ColorsError::Read { path, source }),
        }
    }
    Ok(stale)
}
