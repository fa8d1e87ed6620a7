use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{error::StateError, route::Entry, transition::NavState};

const STATE_VERSION: u32 = 1;

/// Back-stack history. The top entry is the visible screen; an empty stack
/// shows host content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavStack {
    entries: Vec<Entry>,
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    pub fn replace(&mut self, entry: Entry) -> Option<Entry> {
        let previous = self.entries.pop();
        self.entries.push(entry);
        previous
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn top(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_host(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn state(&self) -> NavState {
        NavState {
            route: self.top().map(|e| e.route.clone()),
            depth: self.depth(),
        }
    }

    pub fn save(&self) -> SavedStack {
        SavedStack {
            version: STATE_VERSION,
            entries: self.entries.clone(),
        }
    }

    pub fn restore(saved: SavedStack) -> Self {
        Self {
            entries: saved.entries,
        }
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Entry) -> bool) {
        self.entries.retain(keep);
    }
}

/// Persisted form of a [`NavStack`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedStack {
    pub version: u32,
    pub entries: Vec<Entry>,
}

impl SavedStack {
    pub fn from_json(text: &str) -> Result<Self, StateError> {
        let saved: SavedStack = serde_json::from_str(text)?;
        if saved.version != STATE_VERSION {
            return Err(StateError::Version(saved.version));
        }
        Ok(saved)
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Option<Self>, StateError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn store(&self, path: &Path) -> Result<(), StateError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, self.to_json()?)?;
        fs::rename(&tmp, path)?;
        debug!("Stored {} navigation entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}
