//! Task View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use taskdesk_core::{Id, Task, User};

/// Task view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TasksState {
    /// Tasks in the resolved project, replaced wholesale on every fetch
    pub tasks: Vec<Task>,
    /// Assignee candidates
    pub users: Vec<User>,
    /// Resolved default project (None until resolution succeeds)
    pub project_id: Option<Id>,
    /// Message shown above the create button
    pub error: Option<String>,
}

/// Type alias for the store
pub type TasksStore = Store<TasksState>;

/// Get the task store from context
pub fn use_tasks_store() -> TasksStore {
    expect_context::<TasksStore>()
}

/// Username for an assignee id, or the raw id if the user is unknown
pub fn assignee_name(users: &[User], id: Option<Id>) -> String {
    match id {
        Some(id) => users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.username.clone())
            .unwrap_or_else(|| id.to_string()),
        None => "Unassigned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignee_name() {
        let users = vec![User {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        }];
        assert_eq!(assignee_name(&users, Some(1)), "ada");
        assert_eq!(assignee_name(&users, Some(7)), "7");
        assert_eq!(assignee_name(&users, None), "Unassigned");
    }
}
