//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod announcement;
pub mod attendance;
pub mod class;
pub mod exam;
pub mod fee;
pub mod file;
pub mod mark;
pub mod notification;
pub mod profile;
pub mod role;
pub mod session;
pub mod subject;
pub mod user;
