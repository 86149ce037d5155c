// ==========================================
// Invoicing Platform - Repository Layer
// ==========================================
// Data access only; no business rules.
// ==========================================

pub mod import_repo;
pub mod import_repo_impl;

pub use import_repo::ImportRepository;
pub use import_repo_impl::SqliteImportRepository;
