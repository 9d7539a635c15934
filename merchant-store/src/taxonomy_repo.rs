use merchant_catalog::taxonomy::{
    GoogleTaxonomy, InMemoryTaxonomyRepository, NewTaxonomy, TaxonomyRepository,
};
use merchant_core::BoxError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Taxonomy rows persisted as a JSON array on disk.
///
/// The whole file is loaded on open and rewritten after every bulk create.
pub struct JsonTaxonomyRepository {
    path: PathBuf,
    rows: InMemoryTaxonomyRepository,
}

impl JsonTaxonomyRepository {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let rows = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<Vec<GoogleTaxonomy>>(&text).map_err(|source| {
                RepositoryError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => {
                return Err(RepositoryError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };

        info!("Loaded {} taxonomy rows from {}", rows.len(), path.display());
        Ok(Self {
            path,
            rows: InMemoryTaxonomyRepository::from_rows(rows),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[GoogleTaxonomy] {
        self.rows.rows()
    }

    fn persist(&self, rows: &[GoogleTaxonomy]) -> Result<(), RepositoryError> {
        let io_err = |source: io::Error| RepositoryError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let body = serde_json::to_vec_pretty(rows).map_err(|source| {
            RepositoryError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        // Write beside the target and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl TaxonomyRepository for JsonTaxonomyRepository {
    fn exists(&self, google_id: i64) -> Result<bool, BoxError> {
        self.rows.exists(google_id)
    }

    fn create(&mut self, rows: Vec<NewTaxonomy>) -> Result<Vec<GoogleTaxonomy>, BoxError> {
        // Rows only become visible once they are on disk
        let mut staged = self.rows.clone();
        let created = staged.create(rows)?;
        self.persist(staged.rows())?;
        self.rows = staged;
        Ok(created)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid taxonomy store {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
