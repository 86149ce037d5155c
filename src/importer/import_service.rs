// ==========================================
// Invoicing Platform - Import Service
// ==========================================
// Ties the pieces together for one upload:
// decode file -> run pipeline -> commit (only when zero errors) ->
// shape the boundary response. Structural and commit failures travel
// as ImportError; validation problems travel inside the response so
// the caller can tell "fix your spreadsheet" from "try again later".
// ==========================================

use crate::domain::import::{ImportOutcome, ImportResponse};
use crate::domain::types::EntityKind;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::pipeline::ImportPipeline;
use crate::importer::schema::{CustomerSchema, EntitySchema, ProductSchema};
use crate::repository::import_repo::ImportRepository;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

pub struct ImportService<R: ImportRepository> {
    repo: R,
}

impl<R: ImportRepository> ImportService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Import one uploaded file for one tenant.
    ///
    /// # Parameters
    /// - kind: declared entity kind of the upload
    /// - file_name: original name, decides the decoder by extension
    /// - bytes: raw file content
    /// - organization_id: tenant scope for the commit
    #[instrument(skip(self, bytes), fields(kind = %kind, file = file_name, org = organization_id))]
    pub async fn import(
        &self,
        kind: EntityKind,
        file_name: &str,
        bytes: &[u8],
        organization_id: &str,
    ) -> ImportResult<ImportResponse> {
        let started = Instant::now();
        let response = match kind {
            EntityKind::Customers => {
                self.import_customers(file_name, bytes, organization_id).await
            }
            EntityKind::Products => self.import_products(file_name, bytes, organization_id).await,
        }?;
        info!(elapsed_ms = started.elapsed().as_millis() as u64, "import finished");
        Ok(response)
    }

    async fn import_customers(
        &self,
        file_name: &str,
        bytes: &[u8],
        organization_id: &str,
    ) -> ImportResult<ImportResponse> {
        let mut outcome = self.prepare::<CustomerSchema>(file_name, bytes)?;

        if !outcome.errors.is_empty() {
            warn!(
                errors = outcome.errors.len(),
                valid = outcome.valid_records.len(),
                "validation errors found, commit vetoed"
            );
            return Ok(ImportResponse::from_outcome(EntityKind::Customers, &outcome));
        }

        let count = self
            .repo
            .create_customers(organization_id, outcome.valid_records.clone())
            .await?;
        outcome.mark_committed(count);
        info!(count, "customers committed");
        Ok(ImportResponse::from_outcome(EntityKind::Customers, &outcome))
    }

    async fn import_products(
        &self,
        file_name: &str,
        bytes: &[u8],
        organization_id: &str,
    ) -> ImportResult<ImportResponse> {
        let mut outcome = self.prepare::<ProductSchema>(file_name, bytes)?;

        if !outcome.errors.is_empty() {
            warn!(
                errors = outcome.errors.len(),
                valid = outcome.valid_records.len(),
                "validation errors found, commit vetoed"
            );
            return Ok(ImportResponse::from_outcome(EntityKind::Products, &outcome));
        }

        let count = self
            .repo
            .create_products(organization_id, outcome.valid_records.clone())
            .await?;
        outcome.mark_committed(count);
        info!(count, "products committed");
        Ok(ImportResponse::from_outcome(EntityKind::Products, &outcome))
    }

    /// Decode the buffer and run the validation pipeline. Structural
    /// problems (bad file type, undecodable buffer, empty sheet) stop
    /// here; no commit is ever attempted for them.
    fn prepare<S: EntitySchema>(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> ImportResult<ImportOutcome<S::Record>> {
        let raw_rows = UniversalFileParser.parse(file_name, bytes)?;
        debug!(rows = raw_rows.len(), "file decoded");
        ImportPipeline::<S>::new().run(&raw_rows)
    }
}
