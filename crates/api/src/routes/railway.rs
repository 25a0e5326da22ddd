use crate::railway_headers::RailwayHeaders;
use axum::{extract::State, http::StatusCode, response::Json as ResponseJson};
use config::RailwayEnv;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct RailwayState {
    /// `None` when the service is not running on Railway
    pub env: Option<Arc<RailwayEnv>>,
}

/// Where this replica is deployed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeploymentResponse {
    pub project_name: String,
    pub environment_name: String,
    pub service_name: String,
    pub replica_region: String,
    pub deployment_id: String,
    pub git_commit_sha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl From<&RailwayEnv> for DeploymentResponse {
    fn from(env: &RailwayEnv) -> Self {
        Self {
            project_name: env.project_name.clone(),
            environment_name: env.environment_name.clone(),
            service_name: env.service_name.clone(),
            replica_region: env.replica_region.clone(),
            deployment_id: env.deployment_id.clone(),
            git_commit_sha: env.git_commit_sha.clone(),
            public_url: env.public_url(),
        }
    }
}

/// Echo the Railway headers of this request
pub async fn request_headers(headers: RailwayHeaders) -> ResponseJson<RailwayHeaders> {
    ResponseJson(headers)
}

/// Deployment details, or 404 when not running on Railway
pub async fn deployment(
    State(state): State<RailwayState>,
) -> Result<ResponseJson<DeploymentResponse>, StatusCode> {
    state
        .env
        .as_deref()
        .map(|env| ResponseJson(DeploymentResponse::from(env)))
        .ok_or(StatusCode::NOT_FOUND)
}
