//! Task <-> transfer shape.

use crate::models::{Task, TaskResponse};

impl From<Task> for TaskResponse {
    fn from(value: Task) -> Self {
        Self {
            id: value.id,
            garden_id: value.garden_id,
            assigned_user_id: value.assigned_user_id,
            title: value.title,
            description: value.description,
            status: value.status,
            due_date: value.due_date,
            created_at: value.created_at,
        }
    }
}

impl From<TaskResponse> for Task {
    fn from(value: TaskResponse) -> Self {
        Self {
            id: value.id,
            garden_id: value.garden_id,
            assigned_user_id: value.assigned_user_id,
            title: value.title,
            description: value.description,
            status: value.status,
            due_date: value.due_date,
            created_at: value.created_at,
        }
    }
}
