//! Pages
//!
//! One component per route.

mod dashboard;
mod login;
mod register;
mod tasks;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use tasks::TasksPage;
