//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod announcement_repo;
pub mod attendance_repo;
pub mod class_repo;
pub mod exam_repo;
pub mod fee_repo;
pub mod file_repo;
pub mod mark_repo;
pub mod notification_repo;
pub mod profile_repo;
pub mod role_repo;
pub mod session_repo;
pub mod subject_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use attendance_repo::AttendanceRepo;
pub use class_repo::ClassRepo;
pub use exam_repo::ExamRepo;
pub use fee_repo::FeeRepo;
pub use file_repo::FileRepo;
pub use mark_repo::MarkRepo;
pub use notification_repo::NotificationRepo;
pub use profile_repo::ProfileRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use subject_repo::SubjectRepo;
pub use user_repo::UserRepo;
