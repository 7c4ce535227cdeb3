//! UI Components
//!
//! Reusable Leptos components.

mod bar_chart;
mod delete_confirm_button;
mod new_task_form;
mod stat_card;
mod task_card;

pub use bar_chart::BarChart;
pub use delete_confirm_button::DeleteConfirmButton;
pub use new_task_form::NewTaskForm;
pub use stat_card::StatCard;
pub use task_card::TaskCard;
