//! MySQL implementation of the VerificationCodeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use cs2dle_core::domain::entities::verification_code::{CodeType, VerificationCode};
use cs2dle_core::errors::DomainError;
use cs2dle_core::repositories::VerificationCodeRepository;

use super::db_error;

/// MySQL implementation of VerificationCodeRepository
///
/// Email and code columns use a binary collation so lookups compare bytes,
/// not case-folded text.
pub struct MySqlVerificationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL verification code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_code(row: &MySqlRow) -> Result<VerificationCode, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let code_type: String = row
            .try_get("code_type")
            .map_err(|e| db_error("Failed to get code_type", e))?;

        Ok(VerificationCode {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            code: row
                .try_get("code")
                .map_err(|e| db_error("Failed to get code", e))?,
            code_type: code_type.parse().map_err(DomainError::database)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| db_error("Failed to get expires_at", e))?,
        })
    }
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn find_matching(
        &self,
        email: &str,
        code: &str,
        code_type: CodeType,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT id, email, code, code_type, created_at, expires_at
            FROM verification_codes
            WHERE email = ? AND code = ? AND code_type = ?
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .bind(code)
            .bind(code_type.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query verification code", e))?;

        row.as_ref().map(Self::row_to_code).transpose()
    }

    async fn save(&self, code: &VerificationCode) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO verification_codes (id, email, code, code_type, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(&code.email)
            .bind(&code.code)
            .bind(code.code_type.as_str())
            .bind(code.created_at)
            .bind(code.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to save verification code", e))?;

        Ok(())
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        // A single DELETE is atomic; only one caller can see an affected row
        let result = sqlx::query("DELETE FROM verification_codes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to consume verification code", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM verification_codes WHERE expires_at < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete expired verification codes", e))?;

        Ok(result.rows_affected())
    }
}
