// ==========================================
// Invoicing Platform - Import Repository (rusqlite)
// ==========================================
// Single transaction per batch: prepare once, insert row by row,
// commit at the end. Any failed insert aborts the transaction and the
// whole batch rolls back.
// ==========================================

use crate::db;
use crate::domain::customer::NewCustomer;
use crate::domain::product::NewProduct;
use crate::importer::error::{ImportError, ImportResult};
use crate::repository::import_repo::ImportRepository;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, Transaction};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// SqliteImportRepository
// ==========================================
pub struct SqliteImportRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteImportRepository {
    /// Open (and bootstrap) the database at `db_path`.
    pub fn new(db_path: &str) -> ImportResult<Self> {
        let conn = db::open_connection(db_path)?;
        db::init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn insert_customers_tx(
        tx: &Transaction,
        organization_id: &str,
        customers: &[NewCustomer],
    ) -> ImportResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO customer (
                id, organization_id, name, email, phone, address,
                tax_exempt, tax_exemption_reason, tax_id,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )?;

        let now = Utc::now();
        let mut count = 0;
        for customer in customers {
            stmt.execute(params![
                Uuid::new_v4().to_string(),
                organization_id,
                customer.name,
                customer.email,
                customer.phone,
                customer.address,
                customer.tax_exempt as i32,
                customer.tax_exemption_reason,
                customer.tax_id,
                now,
                now,
            ])?;
            count += 1;
        }

        Ok(count)
    }

    fn insert_products_tx(
        tx: &Transaction,
        organization_id: &str,
        products: &[NewProduct],
    ) -> ImportResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO product (
                id, organization_id, name, description, price,
                tax_rate, unit, image_url, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )?;

        let now = Utc::now();
        let mut count = 0;
        for product in products {
            stmt.execute(params![
                Uuid::new_v4().to_string(),
                organization_id,
                product.name,
                product.description,
                product.price,
                product.tax_rate,
                product.unit,
                product.image_url,
                now,
                now,
            ])?;
            count += 1;
        }

        Ok(count)
    }

    fn count_rows(&self, table: &str, organization_id: &str) -> ImportResult<usize> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ImportError::Lock(e.to_string()))?;

        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE organization_id = ?1",
            table
        );
        let count: i64 = conn.query_row(&sql, params![organization_id], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[async_trait]
impl ImportRepository for SqliteImportRepository {
    async fn create_customers(
        &self,
        organization_id: &str,
        customers: Vec<NewCustomer>,
    ) -> ImportResult<usize> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ImportError::Lock(e.to_string()))?;
        let tx = conn.unchecked_transaction()?;

        let count = Self::insert_customers_tx(&tx, organization_id, &customers)?;

        tx.commit()?;
        Ok(count)
    }

    async fn create_products(
        &self,
        organization_id: &str,
        products: Vec<NewProduct>,
    ) -> ImportResult<usize> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ImportError::Lock(e.to_string()))?;
        let tx = conn.unchecked_transaction()?;

        let count = Self::insert_products_tx(&tx, organization_id, &products)?;

        tx.commit()?;
        Ok(count)
    }

    async fn count_customers(&self, organization_id: &str) -> ImportResult<usize> {
        self.count_rows("customer", organization_id)
    }

    async fn count_products(&self, organization_id: &str) -> ImportResult<usize> {
        self.count_rows("product", organization_id)
    }
}
