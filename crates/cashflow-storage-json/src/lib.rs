//! cashflow-storage-json
//!
//! Flat JSON file persistence for the transaction collection.

use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use cashflow_core::{CoreError, TransactionStore};
use cashflow_domain::Transaction;
use serde::{Deserialize, Serialize};

const TMP_SUFFIX: &str = "tmp";

/// On-disk document: `{"transactions": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Stores the whole collection in a single JSON document at an explicit path.
#[derive(Debug, Clone)]
pub struct JsonTransactionStore {
    path: PathBuf,
}

impl JsonTransactionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl TransactionStore for JsonTransactionStore {
    fn load(&self) -> Result<Vec<Transaction>, CoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        let document: StoreDocument = serde_json::from_str(&data).map_err(|err| {
            CoreError::Serde(format!("{}: {}", self.path.display(), err))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            records = document.transactions.len(),
            "loaded transactions"
        );
        Ok(document.transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        let document = StoreDocument {
            transactions: transactions.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            records = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }

    fn clear(&self) -> Result<bool, CoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(CoreError::Storage(format!(
                "failed to remove {}: {}",
                self.path.display(),
                err
            ))),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
