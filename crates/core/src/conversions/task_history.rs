//! Task history <-> transfer shape.

use crate::models::{TaskHistory, TaskHistoryResponse};

impl From<TaskHistory> for TaskHistoryResponse {
    fn from(value: TaskHistory) -> Self {
        Self {
            id: value.id,
            task_id: value.task_id,
            user_id: value.user_id,
            status: value.status,
            note: value.note,
            recorded_at: value.recorded_at,
        }
    }
}

impl From<TaskHistoryResponse> for TaskHistory {
    fn from(value: TaskHistoryResponse) -> Self {
        Self {
            id: value.id,
            task_id: value.task_id,
            user_id: value.user_id,
            status: value.status,
            note: value.note,
            recorded_at: value.recorded_at,
        }
    }
}
