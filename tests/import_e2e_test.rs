// ==========================================
// End-to-end tests - full import flow
// ==========================================
// File bytes -> ImportService -> SqliteImportRepository on a tempfile
// database. Verifies the response payloads and, crucially, what
// actually landed in (or stayed out of) the database.
// ==========================================

use invoicing_import::{
    EntityKind, ImportError, ImportRepository, ImportResponse, ImportService,
    SqliteImportRepository,
};
use tempfile::NamedTempFile;

const ORG: &str = "org-1";

fn test_service() -> (NamedTempFile, ImportService<SqliteImportRepository>) {
    let temp = NamedTempFile::new().unwrap();
    let path = temp.path().to_str().unwrap().to_string();
    let repo = SqliteImportRepository::new(&path).unwrap();
    (temp, ImportService::new(repo))
}

fn repo_for(temp: &NamedTempFile) -> SqliteImportRepository {
    SqliteImportRepository::new(temp.path().to_str().unwrap()).unwrap()
}

// ==========================================
// Happy path
// ==========================================

#[tokio::test]
async fn test_customer_import_commits_and_reports_count() {
    let (temp, service) = test_service();

    let response = service
        .import(
            EntityKind::Customers,
            "customers.csv",
            b"Customer Name,Email\nJane Doe,jane@x.com\n,\n",
            ORG,
        )
        .await
        .unwrap();

    match response {
        ImportResponse::Success {
            success,
            message,
            count,
        } => {
            assert!(success);
            assert_eq!(count, 1);
            assert_eq!(message, "Successfully imported 1 customer(s)");
        }
        other => panic!("expected success, got {:?}", other),
    }

    let repo = repo_for(&temp);
    assert_eq!(repo.count_customers(ORG).await.unwrap(), 1);
}

#[tokio::test]
async fn test_product_import_applies_defaults() {
    let (temp, service) = test_service();

    let response = service
        .import(
            EntityKind::Products,
            "products.csv",
            b"Product Name,Price,Unit\nWidget,$10.00,\nGadget,3.50,box\n",
            ORG,
        )
        .await
        .unwrap();

    match response {
        ImportResponse::Success { count, message, .. } => {
            assert_eq!(count, 2);
            assert_eq!(message, "Successfully imported 2 product(s)");
        }
        other => panic!("expected success, got {:?}", other),
    }

    let repo = repo_for(&temp);
    assert_eq!(repo.count_products(ORG).await.unwrap(), 2);
}

#[tokio::test]
async fn test_workbook_import_commits() {
    let workbook = include_bytes!("fixtures/products.xlsx");

    // same bytes under both spreadsheet extensions; the decoder sniffs
    // the container format
    for file_name in ["products.xlsx", "products.xls"] {
        let (temp, service) = test_service();

        let response = service
            .import(EntityKind::Products, file_name, workbook, ORG)
            .await
            .unwrap();

        match response {
            ImportResponse::Success { count, .. } => assert_eq!(count, 2, "{file_name}"),
            other => panic!("expected success for {file_name}, got {:?}", other),
        }

        let repo = repo_for(&temp);
        assert_eq!(repo.count_products(ORG).await.unwrap(), 2);
    }
}

// ==========================================
// Validation veto: nothing may reach the database
// ==========================================

#[tokio::test]
async fn test_validation_errors_leave_database_empty() {
    let (temp, service) = test_service();

    let response = service
        .import(
            EntityKind::Products,
            "products.csv",
            b"Product Name,Price\nWidget,10.00\nGadget,-3\n",
            ORG,
        )
        .await
        .unwrap();

    match response {
        ImportResponse::ValidationFailed {
            error,
            errors,
            valid_count,
            error_count,
        } => {
            assert_eq!(error, "Validation errors found");
            assert_eq!(valid_count, 1);
            assert_eq!(error_count, 1);
            assert_eq!(errors[0].row, 3);
            assert_eq!(errors[0].field, "price");
            assert_eq!(
                errors[0].message,
                "Valid price is required (must be a number >= 0). Received: \"-3\""
            );
        }
        other => panic!("expected validation failure, got {:?}", other),
    }

    // one row was valid, but the batch must not be partially committed
    let repo = repo_for(&temp);
    assert_eq!(repo.count_products(ORG).await.unwrap(), 0);
}

// ==========================================
// Commit failure: the whole batch rolls back
// ==========================================

#[tokio::test]
async fn test_duplicate_email_rolls_back_batch() {
    let (temp, service) = test_service();

    let result = service
        .import(
            EntityKind::Customers,
            "customers.csv",
            b"Name,Email\nJane Doe,jane@x.com\nJane Clone,jane@x.com\n",
            ORG,
        )
        .await;

    assert!(matches!(
        result,
        Err(ImportError::UniqueConstraintViolation(_))
    ));

    let repo = repo_for(&temp);
    assert_eq!(repo.count_customers(ORG).await.unwrap(), 0);
}

// ==========================================
// Structural failures
// ==========================================

#[tokio::test]
async fn test_invalid_file_type_is_rejected() {
    let (_temp, service) = test_service();

    let result = service
        .import(EntityKind::Customers, "customers.pdf", b"whatever", ORG)
        .await;

    match result {
        Err(err) => assert_eq!(
            err.to_string(),
            "Invalid file type. Please upload a CSV or Excel file."
        ),
        Ok(response) => panic!("expected structural error, got {:?}", response),
    }
}

#[tokio::test]
async fn test_empty_file_is_rejected_before_commit() {
    let (temp, service) = test_service();

    let result = service
        .import(
            EntityKind::Customers,
            "customers.csv",
            b"Customer Name,Email\n",
            ORG,
        )
        .await;

    match result {
        Err(err) => assert_eq!(err.to_string(), "File is empty or contains no data"),
        Ok(response) => panic!("expected structural error, got {:?}", response),
    }

    let repo = repo_for(&temp);
    assert_eq!(repo.count_customers(ORG).await.unwrap(), 0);
}

#[tokio::test]
async fn test_garbage_excel_bytes_fail_to_parse() {
    let (_temp, service) = test_service();

    let result = service
        .import(EntityKind::Products, "products.xlsx", b"not a zip", ORG)
        .await;

    match result {
        Err(err) => assert_eq!(
            err.to_string(),
            "Failed to parse file. Please ensure it is a valid CSV or Excel file."
        ),
        Ok(response) => panic!("expected structural error, got {:?}", response),
    }
}

// ==========================================
// Tenant isolation
// ==========================================

#[tokio::test]
async fn test_imports_are_scoped_to_the_organization() {
    let (temp, service) = test_service();

    service
        .import(
            EntityKind::Customers,
            "customers.csv",
            b"Name\nJane Doe\n",
            "org-a",
        )
        .await
        .unwrap();

    let repo = repo_for(&temp);
    assert_eq!(repo.count_customers("org-a").await.unwrap(), 1);
    assert_eq!(repo.count_customers("org-b").await.unwrap(), 0);
}
