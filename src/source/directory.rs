use super::ReviewSource;
use crate::error::{ReviewError, Result};
use crate::types::review::{HistoryItem, ReviewId, ReviewRecord};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Review store backed by a directory of `*.json` review records.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    history_limit: usize,
}

impl DirectorySource {
    pub fn open(root: &Path, history_limit: usize) -> Result<Self> {
        if !root.is_dir() {
            return Err(ReviewError::PathNotFound(root.display().to_string()));
        }
        Ok(Self {
            root: root.to_path_buf(),
            history_limit,
        })
    }

    fn record_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        files
    }

    fn records(&self) -> Vec<ReviewRecord> {
        self.record_files()
            .into_iter()
            .filter_map(|path| match read_record(&path) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable review");
                    None
                }
            })
            .collect()
    }
}

impl ReviewSource for DirectorySource {
    fn fetch_review(&self, id: ReviewId) -> Result<ReviewRecord> {
        let record = self
            .records()
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(ReviewError::ReviewNotFound(id))?;
        tracing::info!(review_id = id, url = %record.url, "loaded review");
        Ok(record)
    }

    fn fetch_history(&self) -> Result<Vec<HistoryItem>> {
        let mut items: Vec<HistoryItem> = self
            .records()
            .iter()
            .map(ReviewRecord::summary)
            .collect();
        items.sort_by_key(|item| Reverse((parse_created_at(&item.created_at), item.id)));
        items.truncate(self.history_limit);
        Ok(items)
    }
}

pub fn read_record(path: &Path) -> Result<ReviewRecord> {
    if !path.exists() {
        return Err(ReviewError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(ReviewRecord::from_json(&content)?)
}

/// Unparseable timestamps sort as oldest.
fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
        })
        .ok()
}
