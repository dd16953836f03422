// Domain layer - Dashboard documents and title rules
pub mod dashboard;
pub mod title;
