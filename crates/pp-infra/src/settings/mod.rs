pub mod file_repo;
pub mod migration;
