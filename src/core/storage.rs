use crate::core::catalogue::Catalogue;
use crate::core::dish::Dish;
use crate::core::schema::COLUMNS;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected header row: expected [{expected}], found [{found}]")]
    Header { expected: String, found: String },

    #[error("Malformed row {row}: {msg}")]
    Row { row: u64, msg: String },
}

/// Storage engine trait for persisting the catalogue as a whole
pub trait StorageEngine {
    /// Read every stored dish. Returns `None` when nothing has been stored yet.
    fn load_catalogue(&self) -> Result<Option<Catalogue>, StorageError>;

    /// Overwrite the stored catalogue with `catalogue`
    fn save_catalogue(&self, catalogue: &Catalogue) -> Result<(), StorageError>;

    /// Where the data lives, for messages and logs
    fn location(&self) -> String;
}

/// Flat CSV file with a fixed header row
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn write_to(&self, path: &Path, catalogue: &Catalogue) -> Result<(), StorageError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(COLUMNS)?;
        for dish in catalogue {
            writer.write_record(dish.to_record())?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl StorageEngine for CsvStorage {
    fn load_catalogue(&self) -> Result<Option<Catalogue>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        if !headers.iter().eq(COLUMNS) {
            return Err(StorageError::Header {
                expected: COLUMNS.join(", "),
                found: headers.iter().collect::<Vec<_>>().join(", "),
            });
        }

        let mut catalogue = Catalogue::new();
        for result in reader.records() {
            let record = result?;
            let row = record.position().map(|p| p.line()).unwrap_or_default();
            let dish = Dish::from_stored_record(record.iter())
                .map_err(|msg| StorageError::Row { row, msg })?;
            catalogue.push(dish);
        }

        Ok(Some(catalogue))
    }

    fn save_catalogue(&self, catalogue: &Catalogue) -> Result<(), StorageError> {
        self.ensure_parent()?;

        // Write next to the target and swap it in so readers never see a half-written file.
        let tmp_path = self.tmp_path();
        let result = self
            .write_to(&tmp_path, catalogue)
            .and_then(|()| fs::rename(&tmp_path, &self.path).map_err(StorageError::from));
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
