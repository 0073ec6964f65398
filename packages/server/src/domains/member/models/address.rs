use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::AddressId;
use crate::kernel::BaseAddressStore;

/// Address model - SQL persistence layer
///
/// Addresses are shared rows: members whose address fields match exactly
/// point at the same record. Rows are never edited in place.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

/// The five fields that identify an address. Equality of all five is what
/// "same address" means; there is no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
}

impl Address {
    /// Build an address with a freshly synthesized id.
    pub fn from_fields(fields: &AddressFields) -> Self {
        Self {
            id: AddressId::new(),
            street: fields.street.clone(),
            city: fields.city.clone(),
            state: fields.state.clone(),
            postcode: fields.postcode.clone(),
            country: fields.country.clone(),
            created_at: Utc::now(),
        }
    }

    /// Exact five-field match.
    pub fn matches(&self, fields: &AddressFields) -> bool {
        self.street == fields.street
            && self.city == fields.city
            && self.state == fields.state
            && self.postcode == fields.postcode
            && self.country == fields.country
    }

    /// Find an address whose fields match exactly
    pub async fn find_by_fields(fields: &AddressFields, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM addresses
             WHERE street = $1 AND city = $2 AND state = $3 AND postcode = $4 AND country = $5
             LIMIT 1",
        )
        .bind(&fields.street)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.postcode)
        .bind(&fields.country)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert new address
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO addresses (id, street, city, state, postcode, country, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(self.id)
        .bind(&self.street)
        .bind(&self.city)
        .bind(&self.state)
        .bind(&self.postcode)
        .bind(&self.country)
        .bind(self.created_at)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// Postgres-backed implementation of [`BaseAddressStore`].
pub struct PgAddressStore {
    pool: PgPool,
}

impl PgAddressStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseAddressStore for PgAddressStore {
    async fn find_or_create(&self, fields: &AddressFields) -> Result<Address> {
        if let Some(existing) = Address::find_by_fields(fields, &self.pool).await? {
            return Ok(existing);
        }
        Address::from_fields(fields).insert(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> AddressFields {
        AddressFields {
            street: "12 High St".to_string(),
            city: "Carlton".to_string(),
            state: "VIC".to_string(),
            postcode: "3053".to_string(),
            country: "Australia".to_string(),
        }
    }

    #[test]
    fn matches_requires_all_five_fields() {
        let address = Address::from_fields(&fields());
        assert!(address.matches(&fields()));

        let mut other = fields();
        other.street = "14 High St".to_string();
        assert!(!address.matches(&other));
    }

    #[test]
    fn from_fields_synthesizes_distinct_ids() {
        let a = Address::from_fields(&fields());
        let b = Address::from_fields(&fields());
        assert_ne!(a.id, b.id);
    }
}
