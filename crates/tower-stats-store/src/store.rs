//! Ordered session history bound to one backing document

use std::path::Path;

use tower_stats_core::{ParseReport, Parser, Record};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::io::{read_records, write_records};
use crate::report::{ComparedSession, Comparison};

/// Append-only session history
///
/// Insertion order is chronological order and is the only index. The whole
/// history is rewritten on every append; nothing is persisted per record.
#[derive(Debug)]
pub struct SessionStore {
    config: StoreConfig,
    parser: Parser,
    sessions: Vec<Record>,
}

impl SessionStore {
    /// Empty store bound to the configured document; does not touch disk
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            parser: Parser::new(),
            sessions: Vec::new(),
        }
    }

    /// Create a store and load its backing document
    pub fn open(config: StoreConfig) -> Self {
        let mut store = Self::new(config);
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        self.config.data_file()
    }

    /// Replace the in-memory history with the backing document's contents
    ///
    /// A missing or unreadable document, or one that is not a JSON array,
    /// leaves the history empty. Mistyped fields inside a session are reset
    /// to their defaults without dropping the session.
    /// Returns the number of sessions loaded.
    pub fn load(&mut self) -> usize {
        self.sessions = match read_records(self.path()) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "starting with an empty session history");
                Vec::new()
            }
        };
        tracing::debug!(
            path = %self.path().display(),
            sessions = self.sessions.len(),
            "loaded session history"
        );
        self.sessions.len()
    }

    /// Write the full history to the backing document
    pub fn persist(&self) -> StoreResult<()> {
        write_records(self.path(), &self.sessions)?;
        tracing::debug!(
            path = %self.path().display(),
            sessions = self.sessions.len(),
            "persisted session history"
        );
        Ok(())
    }

    /// Parse `text` into a new session, append it and persist
    pub fn add_session(&mut self, text: &str) -> StoreResult<Record> {
        self.add_session_with_report(text).map(|(record, _)| record)
    }

    /// Like `add_session`, also returning what the parser skipped
    ///
    /// If the history cannot be written the append is undone, so the store
    /// never holds a session that is not on disk.
    pub fn add_session_with_report(&mut self, text: &str) -> StoreResult<(Record, ParseReport)> {
        let (record, report) = self.parser.parse_with_report(text);
        self.sessions.push(record.clone());

        if let Err(e) = self.persist() {
            self.sessions.pop();
            return Err(e);
        }

        tracing::info!(
            session_id = record.session_id(),
            recognized = report.recognized,
            "session added"
        );
        Ok((record, report))
    }

    /// Copy of the full history, oldest first
    pub fn sessions(&self) -> Vec<Record> {
        self.sessions.clone()
    }

    pub fn latest(&self) -> Option<&Record> {
        self.sessions.last()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.sessions.get(index)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Compare two sessions by position
    pub fn compare(&self, first: usize, second: usize) -> StoreResult<Comparison> {
        match (self.sessions.get(first), self.sessions.get(second)) {
            (Some(a), Some(b)) => Ok(Comparison {
                first: ComparedSession::new(first, a),
                second: ComparedSession::new(second, b),
            }),
            _ => Err(StoreError::InvalidIndex {
                first,
                second,
                len: self.sessions.len(),
            }),
        }
    }
}
