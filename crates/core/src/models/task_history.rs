//! Task history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{TaskHistoryId, TaskId, TaskStatus, UserId};

/// A recorded change to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHistory {
    pub id: TaskHistoryId,
    pub task_id: TaskId,
    /// Member who made the change, if known.
    pub user_id: Option<UserId>,
    pub status: TaskStatus,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Task history transfer shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskHistoryResponse {
    pub id: TaskHistoryId,
    pub task_id: TaskId,
    pub user_id: Option<UserId>,
    pub status: TaskStatus,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Fields accepted when recording or correcting a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskHistory {
    pub task_id: TaskId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub status: TaskStatus,
    #[serde(default)]
    pub note: Option<String>,
    /// Defaults to the time of insertion.
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}
