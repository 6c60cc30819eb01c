pub mod dashboard;
pub mod log_files;
