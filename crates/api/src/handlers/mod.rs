//! Request handlers, one module per resource.

pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod exams;
pub mod fees;
pub mod files;
pub mod leaderboard;
pub mod notifications;
pub mod profile;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod users;
