// ==========================================
// Invoicing Platform - Import Repository Trait
// ==========================================
// Atomic commit gateway: all records of a batch are persisted or none
// are. Callers must only invoke create_* with a fully validated batch;
// any storage rejection rolls back the whole transaction.
// Repositories contain no business rules, only data access.
// ==========================================

use crate::domain::customer::NewCustomer;
use crate::domain::product::NewProduct;
use crate::importer::error::ImportResult;
use async_trait::async_trait;

// ==========================================
// ImportRepository Trait
// ==========================================
// Implementor: SqliteImportRepository
#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// Persist a batch of customers for one tenant in a single
    /// transaction.
    ///
    /// # Returns
    /// - Ok(usize): number of persisted rows (equals input length)
    /// - Err: database error; zero rows were persisted
    async fn create_customers(
        &self,
        organization_id: &str,
        customers: Vec<NewCustomer>,
    ) -> ImportResult<usize>;

    /// Persist a batch of products for one tenant in a single
    /// transaction.
    async fn create_products(
        &self,
        organization_id: &str,
        products: Vec<NewProduct>,
    ) -> ImportResult<usize>;

    /// Count persisted customers of one tenant.
    async fn count_customers(&self, organization_id: &str) -> ImportResult<usize>;

    /// Count persisted products of one tenant.
    async fn count_products(&self, organization_id: &str) -> ImportResult<usize>;
}
