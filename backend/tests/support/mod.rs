#![allow(dead_code)]
use async_trait::async_trait;
use axum::{body::Body, http::Response};
use schemes_backend::{
    models::{scheme::Scheme, step::Step},
    repositories::SchemeRepositoryTrait,
    types::{SchemeId, StepId},
};
use std::sync::Once;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "schemes_backend=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Scheme store kept in memory, matching names exactly like the SQL lookup.
#[derive(Debug, Default, Clone)]
pub struct InMemorySchemes {
    pub schemes: Vec<Scheme>,
    pub steps: Vec<Step>,
}

impl InMemorySchemes {
    pub fn with_scheme(mut self, id: i32, name: &str) -> Self {
        self.schemes.push(Scheme::new(SchemeId::new(id), name));
        self
    }

    pub fn with_step(mut self, scheme_id: i32, step_number: i32, instructions: &str) -> Self {
        let step_id = StepId::new(self.steps.len() as i32 + 1);
        self.steps.push(Step {
            step_id,
            step_number,
            instructions: instructions.to_string(),
            scheme_id: SchemeId::new(scheme_id),
        });
        self
    }
}

#[async_trait]
impl SchemeRepositoryTrait for InMemorySchemes {
    async fn find_scheme_by_id(&self, scheme_id: SchemeId) -> sqlx::Result<Option<Scheme>> {
        Ok(self
            .schemes
            .iter()
            .find(|scheme| scheme.scheme_id == scheme_id)
            .cloned())
    }

    async fn find_schemes_by_name(&self, scheme_name: &str) -> sqlx::Result<Vec<Scheme>> {
        Ok(self
            .schemes
            .iter()
            .filter(|scheme| scheme.scheme_name == scheme_name)
            .cloned()
            .collect())
    }

    async fn find_steps_by_number(&self, step_number: i32) -> sqlx::Result<Vec<Step>> {
        Ok(self
            .steps
            .iter()
            .filter(|step| step.step_number == step_number)
            .cloned()
            .collect())
    }
}

/// Scheme store whose every lookup fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableSchemes;

#[async_trait]
impl SchemeRepositoryTrait for UnavailableSchemes {
    async fn find_scheme_by_id(&self, _scheme_id: SchemeId) -> sqlx::Result<Option<Scheme>> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn find_schemes_by_name(&self, _scheme_name: &str) -> sqlx::Result<Vec<Scheme>> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn find_steps_by_number(&self, _step_number: i32) -> sqlx::Result<Vec<Step>> {
        Err(sqlx::Error::PoolClosed)
    }
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json")
}
