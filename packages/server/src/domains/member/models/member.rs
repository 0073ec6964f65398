use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::common::{AddressId, MemberId};
use crate::kernel::BaseMemberStore;

/// Member model - SQL persistence layer
///
/// Email is the natural key for updates; the verification hash is the
/// single-use-style token mailed out at signup (lookups by hash stay valid
/// after verification so repeat clicks are harmless).
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub primary_phone_number: String,
    pub secondary_phone_number: Option<String>,
    pub membership_type: String,
    pub verified: bool,
    pub verification_hash: String,
    pub residential_address_id: Option<AddressId>,
    pub postal_address_id: Option<AddressId>,
    pub created_at: DateTime<Utc>,
}

/// Projection used by the verification flow: just enough to decide whether
/// the flag flip is needed and to answer the caller.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct VerificationRecord {
    pub id: MemberId,
    pub email: String,
    pub verified: bool,
}

/// Flattened listing row: member fields plus the residential address's
/// coarse location columns, absent when no address is on file.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct MemberSummary {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub membership_type: String,
    pub verified: bool,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl Member {
    /// Insert new member
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO members (
                id,
                first_name,
                last_name,
                email,
                gender,
                date_of_birth,
                primary_phone_number,
                secondary_phone_number,
                membership_type,
                verified,
                verification_hash,
                residential_address_id,
                postal_address_id,
                created_at
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING *",
        )
        .bind(self.id)
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.gender)
        .bind(self.date_of_birth)
        .bind(&self.primary_phone_number)
        .bind(&self.secondary_phone_number)
        .bind(&self.membership_type)
        .bind(self.verified)
        .bind(&self.verification_hash)
        .bind(self.residential_address_id)
        .bind(self.postal_address_id)
        .bind(self.created_at)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find member by email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Overwrite the mutable fields; email is the match key and never changes
    pub async fn update(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE members
             SET first_name = $2,
                 last_name = $3,
                 gender = $4,
                 date_of_birth = $5,
                 primary_phone_number = $6,
                 secondary_phone_number = $7,
                 membership_type = $8,
                 residential_address_id = $9,
                 postal_address_id = $10
             WHERE id = $1
             RETURNING *",
        )
        .bind(self.id)
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.gender)
        .bind(self.date_of_birth)
        .bind(&self.primary_phone_number)
        .bind(&self.secondary_phone_number)
        .bind(&self.membership_type)
        .bind(self.residential_address_id)
        .bind(self.postal_address_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Look up the verification projection for a hash
    pub async fn find_by_verification_hash(
        hash: &str,
        pool: &PgPool,
    ) -> Result<Option<VerificationRecord>> {
        sqlx::query_as::<_, VerificationRecord>(
            "SELECT id, email, verified FROM members WHERE verification_hash = $1",
        )
        .bind(hash)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Flip the verified flag to true
    pub async fn mark_verified(member_id: MemberId, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE members SET verified = true WHERE id = $1")
            .bind(member_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Flattened listing of all members, joined to their residential address
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<MemberSummary>> {
        sqlx::query_as::<_, MemberSummary>(
            "SELECT m.id,
                    m.first_name,
                    m.last_name,
                    m.membership_type,
                    m.verified,
                    a.postcode,
                    a.state,
                    a.country
             FROM members m
             LEFT JOIN addresses a ON a.id = m.residential_address_id
             ORDER BY m.created_at ASC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

/// Postgres-backed implementation of [`BaseMemberStore`].
pub struct PgMemberStore {
    pool: PgPool,
}

impl PgMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseMemberStore for PgMemberStore {
    async fn insert(&self, member: &Member) -> Result<Member> {
        member.insert(&self.pool).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>> {
        Member::find_by_email(email, &self.pool).await
    }

    async fn update(&self, member: &Member) -> Result<Member> {
        member.update(&self.pool).await
    }

    async fn find_by_verification_hash(&self, hash: &str) -> Result<Option<VerificationRecord>> {
        Member::find_by_verification_hash(hash, &self.pool).await
    }

    async fn mark_verified(&self, member_id: MemberId) -> Result<()> {
        Member::mark_verified(member_id, &self.pool).await
    }

    async fn list_summaries(&self) -> Result<Vec<MemberSummary>> {
        Member::list_summaries(&self.pool).await
    }
}
