//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{ListingId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Listing, Owner};
use crate::domain::repository::ListingRepository;
use crate::domain::value_objects::{BookCondition, BookDetails, ModerationStatus};
use crate::error::{BookError, BookResult};

/// Listing columns joined with the owner's public fields
macro_rules! listing_select {
    () => {
        r#"
        SELECT
            b.id,
            b.user_id,
            b.title,
            b.author,
            b.condition,
            b.image,
            b.description,
            b.status,
            b.message,
            b.created_at,
            b.updated_at,
            u.name AS owner_name,
            u.email AS owner_email
        FROM books b
        JOIN users u ON u.id = b.user_id
        "#
    };
}

/// PostgreSQL-backed listing repository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ListingRepository for PgBookRepository {
    async fn create(&self, listing: &Listing) -> BookResult<()> {
        sqlx::query(
            r#"
            INSERT INTO books (
                id,
                user_id,
                title,
                author,
                condition,
                image,
                description,
                status,
                message,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(listing.id.as_uuid())
        .bind(listing.owner.user_id.as_uuid())
        .bind(&listing.details.title)
        .bind(&listing.details.author)
        .bind(listing.details.condition.as_str())
        .bind(listing.image.as_deref())
        .bind(listing.details.description.as_deref())
        .bind(listing.status.as_str())
        .bind(listing.message.as_deref())
        .bind(listing.created_at)
        .bind(listing.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ListingId) -> BookResult<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(concat!(listing_select!(), "WHERE b.id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(ListingRow::into_listing).transpose()
    }

    async fn list_all(&self) -> BookResult<Vec<Listing>> {
        let rows = sqlx::query_as::<_, ListingRow>(concat!(
            listing_select!(),
            "ORDER BY b.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ListingRow::into_listing).collect()
    }

    async fn list_by_owner(&self, owner: &UserId) -> BookResult<Vec<Listing>> {
        let rows = sqlx::query_as::<_, ListingRow>(concat!(
            listing_select!(),
            "WHERE b.user_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ListingRow::into_listing).collect()
    }

    async fn update_content(&self, listing: &Listing) -> BookResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = $3,
                author = $4,
                condition = $5,
                description = $6,
                image = $7,
                updated_at = $8
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(listing.id.as_uuid())
        .bind(listing.owner.user_id.as_uuid())
        .bind(&listing.details.title)
        .bind(&listing.details.author)
        .bind(listing.details.condition.as_str())
        .bind(listing.details.description.as_deref())
        .bind(listing.image.as_deref())
        .bind(listing.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn update_review(&self, listing: &Listing) -> BookResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE books SET
                status = $2,
                message = $3,
                updated_at = $4
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(listing.id.as_uuid())
        .bind(listing.status.as_str())
        .bind(listing.message.as_deref())
        .bind(listing.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_owned(&self, id: &ListingId, owner: &UserId) -> BookResult<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            WITH removed AS (
                DELETE FROM books
                WHERE id = $1 AND user_id = $2
                RETURNING *
            )
            SELECT
                r.id,
                r.user_id,
                r.title,
                r.author,
                r.condition,
                r.image,
                r.description,
                r.status,
                r.message,
                r.created_at,
                r.updated_at,
                u.name AS owner_name,
                u.email AS owner_email
            FROM removed r
            JOIN users u ON u.id = r.user_id
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ListingRow::into_listing).transpose()
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ListingRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    author: String,
    condition: String,
    image: Option<String>,
    description: Option<String>,
    status: String,
    message: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
}

impl ListingRow {
    fn into_listing(self) -> BookResult<Listing> {
        let condition = BookCondition::parse(&self.condition).ok_or_else(|| {
            BookError::Internal(format!("Unknown condition in database: {}", self.condition))
        })?;
        let status = ModerationStatus::from_code(&self.status).ok_or_else(|| {
            BookError::Internal(format!("Unknown status in database: {}", self.status))
        })?;

        Ok(Listing {
            id: ListingId::from_uuid(self.id),
            owner: Owner {
                user_id: UserId::from_uuid(self.user_id),
                name: self.owner_name,
                email: self.owner_email,
            },
            details: BookDetails {
                title: self.title,
                author: self.author,
                condition,
                description: self.description,
            },
            image: self.image,
            status,
            message: self.message,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
