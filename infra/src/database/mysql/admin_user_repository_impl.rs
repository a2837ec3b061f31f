//! MySQL implementation of the AdminUserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use cs2dle_core::domain::entities::admin_user::AdminUser;
use cs2dle_core::errors::{AuthError, DomainError};
use cs2dle_core::repositories::AdminUserRepository;

use super::db_error;

const SELECT_COLUMNS: &str =
    "SELECT id, name, email, status, role, created_at, updated_at FROM admin_users";

/// MySQL implementation of AdminUserRepository
///
/// The unique index on `email` is what makes concurrent signups for the
/// same address safe; a duplicate insert surfaces as `AccountAlreadyExists`.
pub struct MySqlAdminUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAdminUserRepository {
    /// Create a new MySQL admin user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<AdminUser, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| db_error("Failed to get status", e))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| db_error("Failed to get role", e))?;

        Ok(AdminUser {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            status: status.parse().map_err(DomainError::database)?,
            role: role.parse().map_err(DomainError::database)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }
}

#[async_trait]
impl AdminUserRepository for MySqlAdminUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query admin user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query admin user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM admin_users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check admin user existence", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| db_error("Failed to get count", e))?;

        Ok(count > 0)
    }

    async fn create(&self, user: AdminUser) -> Result<AdminUser, DomainError> {
        let query = r#"
            INSERT INTO admin_users (id, name, email, status, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.status.as_str())
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AuthError::AccountAlreadyExists.into())
            }
            Err(e) => Err(db_error("Failed to create admin user", e)),
        }
    }
}
