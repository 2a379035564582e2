//! In-memory command journal
//!
//! Bounded, newest-evicts-oldest. Nothing is persisted; the journal lives
//! as long as the gateway that owns it.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use krake_core::errors::{KrakeError, Result};
use krake_core_types::WorkspaceId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHistoryItem {
    /// UUIDv7, so ids sort by creation time
    pub id: String,
    pub workspace_id: WorkspaceId,
    pub command: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommandHistory {
    capacity: usize,
    // oldest at the front
    entries: VecDeque<CommandHistoryItem>,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // grows on demand; capacity is only an upper bound
            entries: VecDeque::new(),
        }
    }

    /// Append an entry, evicting the oldest when full
    ///
    /// With a capacity of zero nothing is retained, but the entry is still
    /// returned to the caller.
    pub fn record(
        &mut self,
        workspace_id: WorkspaceId,
        command: impl Into<String>,
        response: impl Into<String>,
    ) -> CommandHistoryItem {
        let item = CommandHistoryItem {
            id: Uuid::now_v7().to_string(),
            workspace_id,
            command: command.into(),
            response: response.into(),
            created_at: Utc::now(),
        };

        if self.capacity == 0 {
            return item;
        }
        while self.entries.len() >= self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(history_id = %evicted.id, "evicted history entry");
            }
        }
        self.entries.push_back(item.clone());
        item
    }

    /// All entries, newest first
    pub fn list(&self) -> Vec<&CommandHistoryItem> {
        self.entries.iter().rev().collect()
    }

    /// Entries for one workspace, newest first
    pub fn list_for_workspace(&self, workspace_id: &WorkspaceId) -> Vec<&CommandHistoryItem> {
        self.entries
            .iter()
            .rev()
            .filter(|item| &item.workspace_id == workspace_id)
            .collect()
    }

    /// # Errors
    ///
    /// Returns `KrakeError::HistoryEntryNotFound` if no retained entry has `id`.
    pub fn get(&self, id: &str) -> Result<&CommandHistoryItem> {
        self.entries
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| KrakeError::HistoryEntryNotFound { id: id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let ws = WorkspaceId::unscoped();
        let mut history = CommandHistory::new(10);
        history.record(ws, "hello", "Hello! How can I assist you today?");
        history.record(ws, "system.verify", "Verifying system integrity.");

        let commands: Vec<_> = history.list().iter().map(|i| i.command.as_str()).collect();
        assert_eq!(commands, vec!["system.verify", "hello"]);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let ws = WorkspaceId::unscoped();
        let mut history = CommandHistory::new(2);
        let first = history.record(ws, "one", "r1");
        history.record(ws, "two", "r2");
        history.record(ws, "three", "r3");

        assert_eq!(history.len(), 2);
        assert!(history.get(&first.id).is_err());
        assert_eq!(history.list()[1].command, "two");
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut history = CommandHistory::new(usize::MAX);
        history.record(WorkspaceId::unscoped(), "hello", "hi");
        assert_eq!(history.len(), 1);
        assert_eq!(history.capacity(), usize::MAX);
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut history = CommandHistory::new(0);
        let item = history.record(WorkspaceId::unscoped(), "hello", "hi");
        assert_eq!(item.command, "hello");
        assert!(history.is_empty());
    }
}
