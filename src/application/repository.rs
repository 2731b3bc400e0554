//! Repository layer for the `passport_applications` table

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::models::{FeeBreakdown, NewApplication, PassportApplication, ServiceType};

pub const CREATE_APPLICATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS passport_applications (
    id                 BIGSERIAL PRIMARY KEY,
    case_no            TEXT           NOT NULL,
    application_date   DATE           NOT NULL,
    call_date          DATE,
    name               TEXT           NOT NULL,
    nic_no             TEXT           NOT NULL,
    address            TEXT           NOT NULL,
    service_type       TEXT           NOT NULL,
    fresh_passport_fee NUMERIC(14, 2) NOT NULL DEFAULT 0,
    renewal_fee        NUMERIC(14, 2) NOT NULL DEFAULT 0,
    endorsement_fee    NUMERIC(14, 2) NOT NULL DEFAULT 0,
    visa_fee           NUMERIC(14, 2) NOT NULL DEFAULT 0,
    citizenship_fee    NUMERIC(14, 2) NOT NULL DEFAULT 0,
    other_fee          NUMERIC(14, 2) NOT NULL DEFAULT 0,
    total_amount       NUMERIC(14, 2) NOT NULL,
    amount_in_words    TEXT           NOT NULL,
    bank_charges       NUMERIC(14, 2) NOT NULL DEFAULT 25,
    created_at         TIMESTAMPTZ    NOT NULL DEFAULT now()
)"#;

pub const CREATE_CASE_NO_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_passport_applications_case_no
    ON passport_applications (case_no)"#;

const SELECT_COLUMNS: &str = r#"id, case_no, application_date, call_date, name, nic_no, address,
    service_type, fresh_passport_fee, renewal_fee, endorsement_fee, visa_fee,
    citizenship_fee, other_fee, total_amount, amount_in_words, bank_charges, created_at"#;

fn row_to_application(r: &PgRow) -> Result<PassportApplication, sqlx::Error> {
    let service_type: String = r.try_get("service_type")?;
    let service_type: ServiceType = service_type
        .parse()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(PassportApplication {
        id: r.try_get("id")?,
        application: NewApplication {
            case_no: r.try_get("case_no")?,
            application_date: r.try_get("application_date")?,
            call_date: r.try_get("call_date")?,
            name: r.try_get("name")?,
            nic_no: r.try_get("nic_no")?,
            address: r.try_get("address")?,
            service_type,
            fees: FeeBreakdown {
                fresh_passport_fee: r.try_get("fresh_passport_fee")?,
                renewal_fee: r.try_get("renewal_fee")?,
                endorsement_fee: r.try_get("endorsement_fee")?,
                visa_fee: r.try_get("visa_fee")?,
                citizenship_fee: r.try_get("citizenship_fee")?,
                other_fee: r.try_get("other_fee")?,
            },
            total_amount: r.try_get("total_amount")?,
            amount_in_words: r.try_get("amount_in_words")?,
            bank_charges: r.try_get("bank_charges")?,
        },
        created_at: r.try_get("created_at")?,
    })
}

/// Application repository
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// Create the table and index if they do not exist
    pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
        tracing::info!("Initializing passport_applications schema...");
        sqlx::query(CREATE_APPLICATIONS_TABLE).execute(pool).await?;
        sqlx::query(CREATE_CASE_NO_INDEX).execute(pool).await?;
        Ok(())
    }

    /// Insert a validated application and return the stored row
    pub async fn insert(
        pool: &PgPool,
        app: &NewApplication,
    ) -> Result<PassportApplication, sqlx::Error> {
        let row = sqlx::query(
            r#"INSERT INTO passport_applications (
                   case_no, application_date, call_date, name, nic_no, address, service_type,
                   fresh_passport_fee, renewal_fee, endorsement_fee, visa_fee,
                   citizenship_fee, other_fee, total_amount, amount_in_words, bank_charges)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
               RETURNING id, created_at"#,
        )
        .bind(&app.case_no)
        .bind(app.application_date)
        .bind(app.call_date)
        .bind(&app.name)
        .bind(&app.nic_no)
        .bind(&app.address)
        .bind(app.service_type.as_str())
        .bind(app.fees.fresh_passport_fee)
        .bind(app.fees.renewal_fee)
        .bind(app.fees.endorsement_fee)
        .bind(app.fees.visa_fee)
        .bind(app.fees.citizenship_fee)
        .bind(app.fees.other_fee)
        .bind(app.total_amount)
        .bind(&app.amount_in_words)
        .bind(app.bank_charges)
        .fetch_one(pool)
        .await?;

        let stored = PassportApplication {
            id: row.try_get("id")?,
            application: app.clone(),
            created_at: row.try_get("created_at")?,
        };

        tracing::info!(
            id = stored.id,
            case_no = %app.case_no,
            total = %app.total_amount,
            "Application stored"
        );
        Ok(stored)
    }

    /// Get application by ID
    pub async fn get_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<PassportApplication>, sqlx::Error> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM passport_applications WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.as_ref().map(row_to_application).transpose()
    }

    /// All applications filed under a case number, newest first
    pub async fn list_by_case_no(
        pool: &PgPool,
        case_no: &str,
    ) -> Result<Vec<PassportApplication>, sqlx::Error> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM passport_applications WHERE case_no = $1 ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))
        .bind(case_no)
        .fetch_all(pool)
        .await?;

        rows.iter().map(row_to_application).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FeeForm;
    use crate::config::DatabaseConfig;
    use crate::db::Database;

    async fn connect() -> Database {
        let db = Database::connect(&DatabaseConfig::default())
            .await
            .expect("Failed to connect");
        ApplicationRepository::init_schema(db.pool())
            .await
            .expect("Failed to init schema");
        db
    }

    fn sample(case_no: &str) -> NewApplication {
        FeeForm {
            case_no: case_no.to_string(),
            application_date: "2024-03-15".to_string(),
            name: "Bilal Ahmed".to_string(),
            nic_no: "42101-7654321-1".to_string(),
            address: "House 5, Block B, Karachi".to_string(),
            service_type: "visa".to_string(),
            visa_fee: "4500".to_string(),
            ..Default::default()
        }
        .validate()
        .expect("sample form should validate")
    }

    #[tokio::test]
    #[ignore] // Requires PostgreSQL running
    async fn test_insert_and_get_by_id() {
        let db = connect().await;
        let case_no = format!("TEST-{}", chrono::Utc::now().timestamp_micros());

        let stored = ApplicationRepository::insert(db.pool(), &sample(&case_no))
            .await
            .expect("Should insert application");
        assert!(stored.id > 0, "ID should be positive");

        let fetched = ApplicationRepository::get_by_id(db.pool(), stored.id)
            .await
            .expect("Should query application")
            .expect("Application should exist");
        assert_eq!(fetched.application.case_no, case_no);
        assert_eq!(fetched.application.service_type, ServiceType::Visa);
        assert_eq!(
            fetched.application.amount_in_words,
            "Four Thousand Five Hundred Rupees Only"
        );

        db.close().await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_list_by_case_no() {
        let db = connect().await;
        let case_no = format!("TEST-{}", chrono::Utc::now().timestamp_micros());

        ApplicationRepository::insert(db.pool(), &sample(&case_no))
            .await
            .expect("first insert");
        ApplicationRepository::insert(db.pool(), &sample(&case_no))
            .await
            .expect("second insert");

        let rows = ApplicationRepository::list_by_case_no(db.pool(), &case_no)
            .await
            .expect("Should list applications");
        assert_eq!(rows.len(), 2);
        assert!(rows[0].id > rows[1].id, "Newest first");

        db.close().await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_get_by_id_not_found() {
        let db = connect().await;
        let result = ApplicationRepository::get_by_id(db.pool(), i64::MAX).await;
        assert!(result.is_ok());
        assert!(
            result.unwrap().is_none(),
            "Should return None for non-existent application"
        );
        db.close().await;
    }
}
