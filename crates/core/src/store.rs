//! sled-backed persistence for discharge summaries.
//!
//! One tree holds rows keyed by big-endian record id; a separate counter key
//! in the default tree hands out dense, monotonically increasing ids. Rows
//! are stored as JSON. There are no update or delete operations: a record is
//! written exactly once, with its generated summary already attached.

use crate::error::{DischargeError, DischargeResult};
use chrono::Utc;
use dsg_types::{DischargeInput, DischargeSummary};
use std::path::Path;

const SUMMARIES_TREE: &str = "discharge_summaries";
const NEXT_ID_KEY: &[u8] = b"next_id";

/// Single-table store with create / get / list-all operations.
#[derive(Clone)]
pub struct DischargeStore {
    db: sled::Db,
    summaries: sled::Tree,
}

impl DischargeStore {
    /// Opens (creating if needed) the store under `path`.
    ///
    /// # Errors
    ///
    /// Returns a `DischargeError::Storage` if the sled database cannot be
    /// opened.
    pub fn open(path: impl AsRef<Path>) -> DischargeResult<Self> {
        let db = sled::open(path)?;
        let summaries = db.open_tree(SUMMARIES_TREE)?;
        Ok(Self { db, summaries })
    }

    fn next_id(&self) -> DischargeResult<u64> {
        let ivec = self.db.update_and_fetch(NEXT_ID_KEY, |old| {
            let current = old
                .and_then(|bytes| bytes.try_into().ok())
                .map(u64::from_be_bytes)
                .unwrap_or(0);
            Some(current.wrapping_add(1).to_be_bytes().to_vec())
        })?;
        let id = ivec
            .as_deref()
            .and_then(|bytes| bytes.try_into().ok())
            .map(u64::from_be_bytes)
            .unwrap_or(1);
        Ok(id)
    }

    /// Inserts a new row, assigning its id and creation timestamp.
    ///
    /// The caller supplies whatever generated summary it has; the store does
    /// not interpret it. Duplicate IP numbers are permitted.
    ///
    /// # Errors
    ///
    /// Returns a `DischargeError` if serialization or the sled write fails.
    pub fn create(
        &self,
        input: DischargeInput,
        generated_summary: Option<String>,
    ) -> DischargeResult<DischargeSummary> {
        let id = self.next_id()?;
        let summary = DischargeSummary::from_input(id, input, generated_summary, Utc::now());
        let bytes = serde_json::to_vec(&summary).map_err(DischargeError::Serialization)?;
        self.summaries.insert(id.to_be_bytes(), bytes)?;
        self.db.flush()?;
        Ok(summary)
    }

    /// Looks up one row by id. Absence is `Ok(None)`, never an error.
    pub fn get(&self, id: u64) -> DischargeResult<Option<DischargeSummary>> {
        match self.summaries.get(id.to_be_bytes())? {
            Some(bytes) => {
                let summary =
                    serde_json::from_slice(&bytes).map_err(DischargeError::Deserialization)?;
                Ok(Some(summary))
            }
            None => Ok(None),
        }
    }

    /// Returns every row, newest first; rows with equal timestamps keep
    /// their insertion order.
    pub fn list_all(&self) -> DischargeResult<Vec<DischargeSummary>> {
        let mut rows = Vec::new();
        for entry in self.summaries.iter() {
            let (_, bytes) = entry?;
            let summary: DischargeSummary =
                serde_json::from_slice(&bytes).map_err(DischargeError::Deserialization)?;
            rows.push(summary);
        }
        // Iteration is ascending by id; a stable sort keeps insertion order
        // among equal timestamps.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
