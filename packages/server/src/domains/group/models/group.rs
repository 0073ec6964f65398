use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{BranchId, GroupId};
use crate::kernel::BaseGroupStore;

/// Group model - SQL persistence layer
///
/// Groups exist only within a branch; branch ids come from the upstream
/// branch administration system and are stored verbatim.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Group {
    pub id: GroupId,
    pub branch_id: BranchId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Build a group with a freshly synthesized id.
    pub fn new(branch_id: BranchId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            branch_id,
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Insert new group
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO groups (id, branch_id, name, description, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(self.id)
        .bind(&self.branch_id)
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.created_at)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find a group by id within a branch
    pub async fn find_in_branch(
        branch_id: &BranchId,
        group_id: GroupId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM groups WHERE branch_id = $1 AND id = $2")
            .bind(branch_id)
            .bind(group_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Overwrite name and description
    pub async fn update(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE groups SET name = $2, description = $3 WHERE id = $1 RETURNING *",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.description)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a group by id
    pub async fn delete(group_id: GroupId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(group_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// All groups in a branch, oldest first
    pub async fn find_by_branch(branch_id: &BranchId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM groups WHERE branch_id = $1 ORDER BY created_at ASC",
        )
        .bind(branch_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

/// Postgres-backed implementation of [`BaseGroupStore`].
pub struct PgGroupStore {
    pool: PgPool,
}

impl PgGroupStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseGroupStore for PgGroupStore {
    async fn insert(&self, group: &Group) -> Result<Group> {
        group.insert(&self.pool).await
    }

    async fn find_in_branch(
        &self,
        branch_id: &BranchId,
        group_id: GroupId,
    ) -> Result<Option<Group>> {
        Group::find_in_branch(branch_id, group_id, &self.pool).await
    }

    async fn update(&self, group: &Group) -> Result<Group> {
        group.update(&self.pool).await
    }

    async fn delete(&self, group_id: GroupId) -> Result<()> {
        Group::delete(group_id, &self.pool).await
    }

    async fn find_by_branch(&self, branch_id: &BranchId) -> Result<Vec<Group>> {
        Group::find_by_branch(branch_id, &self.pool).await
    }
}
