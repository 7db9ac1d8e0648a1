//! Scheme store access used by the request guards.
//!
//! The guards depend on [`SchemeRepositoryTrait`] rather than a pool so the
//! store can be replaced with a test double.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{scheme::Scheme, step::Step};
use crate::types::SchemeId;

const SCHEMES_TABLE: &str = "schemes";
const STEPS_TABLE: &str = "steps";
const SCHEME_COLUMNS: &str = "scheme_id, scheme_name";
const STEP_COLUMNS: &str = "step_id, step_number, instructions, scheme_id";

/// Read-only lookups against the scheme store.
///
/// Use `MockSchemeRepositoryTrait` in unit tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemeRepositoryTrait: Send + Sync {
    /// First scheme with the given id, if any.
    async fn find_scheme_by_id(&self, scheme_id: SchemeId) -> sqlx::Result<Option<Scheme>>;

    /// All schemes whose name equals `scheme_name` exactly.
    async fn find_schemes_by_name(&self, scheme_name: &str) -> sqlx::Result<Vec<Scheme>>;

    /// All steps with the given step number, across every scheme.
    async fn find_steps_by_number(&self, step_number: i32) -> sqlx::Result<Vec<Step>>;
}

/// PostgreSQL-backed implementation of [`SchemeRepositoryTrait`].
#[derive(Debug, Clone)]
pub struct SchemeRepository {
    pool: PgPool,
}

impl SchemeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemeRepositoryTrait for SchemeRepository {
    async fn find_scheme_by_id(&self, scheme_id: SchemeId) -> sqlx::Result<Option<Scheme>> {
        let query = format!(
            "SELECT {} FROM {} WHERE scheme_id = $1 LIMIT 1",
            SCHEME_COLUMNS, SCHEMES_TABLE
        );
        sqlx::query_as::<_, Scheme>(&query)
            .bind(scheme_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_schemes_by_name(&self, scheme_name: &str) -> sqlx::Result<Vec<Scheme>> {
        let query = format!(
            "SELECT {} FROM {} WHERE scheme_name = $1",
            SCHEME_COLUMNS, SCHEMES_TABLE
        );
        sqlx::query_as::<_, Scheme>(&query)
            .bind(scheme_name)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_steps_by_number(&self, step_number: i32) -> sqlx::Result<Vec<Step>> {
        let query = format!(
            "SELECT {} FROM {} WHERE step_number = $1",
            STEP_COLUMNS, STEPS_TABLE
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(step_number)
            .fetch_all(&self.pool)
            .await
    }
}
