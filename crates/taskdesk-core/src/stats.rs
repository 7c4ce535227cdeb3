//! Dashboard Aggregation
//!
//! Counts over the full task list. The client is the aggregator, so this
//! scales with however many tasks the list endpoint returns.

use crate::models::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub completed: usize,
    pub pending: usize,
    pub total: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        Self {
            completed,
            pending: total - completed,
            total,
        }
    }

    /// Chart series in display order
    pub fn bars(&self) -> [(&'static str, usize); 3] {
        [
            ("Completed", self.completed),
            ("Pending", self.pending),
            ("Total", self.total),
        ]
    }
}
