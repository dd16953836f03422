// Application layer - Use cases and the repository seam
pub mod dashboard_lookup;
pub mod dashboard_repository;
pub mod error;
#[cfg(test)]
pub mod fake_repository;
pub mod promote_service;
pub mod save_service;
