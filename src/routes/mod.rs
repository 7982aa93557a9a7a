pub mod students;

pub mod submissions;

pub mod tasks;

pub use students::configure_students_routes;
pub use submissions::configure_submissions_routes;
pub use tasks::configure_tasks_routes;
