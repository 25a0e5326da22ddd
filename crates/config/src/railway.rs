//! Railway-provided environment variables.
//!
//! See <https://docs.railway.com/reference/variables#railway-provided-variables>
//! for the meaning of each variable.

use crate::env_source::{EnvSource, SystemEnv};
use std::num::ParseIntError;
use thiserror::Error;

/// Set on every Railway deployment; its presence means we are running on Railway.
pub const RAILWAY_PROJECT_ID: &str = "RAILWAY_PROJECT_ID";
pub const RAILWAY_PUBLIC_DOMAIN: &str = "RAILWAY_PUBLIC_DOMAIN";
pub const RAILWAY_PRIVATE_DOMAIN: &str = "RAILWAY_PRIVATE_DOMAIN";
pub const RAILWAY_TCP_PROXY_DOMAIN: &str = "RAILWAY_TCP_PROXY_DOMAIN";
pub const RAILWAY_TCP_PROXY_PORT: &str = "RAILWAY_TCP_PROXY_PORT";
pub const RAILWAY_TCP_APPLICATION_PORT: &str = "RAILWAY_TCP_APPLICATION_PORT";
pub const RAILWAY_PROJECT_NAME: &str = "RAILWAY_PROJECT_NAME";
pub const RAILWAY_ENVIRONMENT_NAME: &str = "RAILWAY_ENVIRONMENT_NAME";
pub const RAILWAY_ENVIRONMENT_ID: &str = "RAILWAY_ENVIRONMENT_ID";
pub const RAILWAY_SERVICE_NAME: &str = "RAILWAY_SERVICE_NAME";
pub const RAILWAY_SERVICE_ID: &str = "RAILWAY_SERVICE_ID";
pub const RAILWAY_REPLICA_ID: &str = "RAILWAY_REPLICA_ID";
pub const RAILWAY_REPLICA_REGION: &str = "RAILWAY_REPLICA_REGION";
pub const RAILWAY_DEPLOYMENT_ID: &str = "RAILWAY_DEPLOYMENT_ID";
pub const RAILWAY_SNAPSHOT_ID: &str = "RAILWAY_SNAPSHOT_ID";
pub const RAILWAY_VOLUME_NAME: &str = "RAILWAY_VOLUME_NAME";
pub const RAILWAY_VOLUME_MOUNT_PATH: &str = "RAILWAY_VOLUME_MOUNT_PATH";
pub const RAILWAY_GIT_COMMIT_SHA: &str = "RAILWAY_GIT_COMMIT_SHA";
pub const RAILWAY_GIT_AUTHOR: &str = "RAILWAY_GIT_AUTHOR";
pub const RAILWAY_GIT_BRANCH: &str = "RAILWAY_GIT_BRANCH";
pub const RAILWAY_GIT_REPO_NAME: &str = "RAILWAY_GIT_REPO_NAME";
pub const RAILWAY_GIT_REPO_OWNER: &str = "RAILWAY_GIT_REPO_OWNER";
pub const RAILWAY_GIT_COMMIT_MESSAGE: &str = "RAILWAY_GIT_COMMIT_MESSAGE";
pub const RAILWAY_DEPLOYMENT_OVERLAP_SECONDS: &str = "RAILWAY_DEPLOYMENT_OVERLAP_SECONDS";
pub const RAILWAY_DOCKERFILE_PATH: &str = "RAILWAY_DOCKERFILE_PATH";
pub const NIXPACKS_CONFIG_FILE: &str = "NIXPACKS_CONFIG_FILE";
pub const NIXPACKS_VERSION: &str = "NIXPACKS_VERSION";
pub const RAILWAY_HEALTHCHECK_TIMEOUT_SEC: &str = "RAILWAY_HEALTHCHECK_TIMEOUT_SEC";
pub const RAILWAY_DEPLOYMENT_DRAINING_SECONDS: &str = "RAILWAY_DEPLOYMENT_DRAINING_SECONDS";
pub const RAILWAY_RUN_UID: &str = "RAILWAY_RUN_UID";
pub const RAILWAY_SHM_SIZE_BYTES: &str = "RAILWAY_SHM_SIZE_BYTES";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RailwayEnvError {
    #[error("not running on Railway")]
    NotRailway,

    #[error("invalid {name}: {source}")]
    InvalidVariable {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
}

/// Railway-provided environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RailwayEnv {
    /// The public service or customer domain. Example: example.up.railway.app
    pub public_domain: String,
    /// The private DNS name of the service.
    pub private_domain: String,
    /// The public TCP proxy domain for the service, if applicable. Example: roundhouse.proxy.rlwy.net
    pub tcp_proxy_domain: String,
    /// The external port for the TCP proxy, if applicable. Example: 11105
    pub tcp_proxy_port: i64,
    /// The internal port for the TCP proxy, if applicable. Example: 25565
    pub tcp_application_port: i64,
    /// The project name the service belongs to.
    pub project_name: String,
    /// The project id the service belongs to.
    pub project_id: String,
    /// The environment name of the service instance. Example: production
    pub environment_name: String,
    /// The environment id of the service instance.
    pub environment_id: String,
    /// The service name.
    pub service_name: String,
    /// The service id.
    pub service_id: String,
    /// The replica id for the deployment.
    pub replica_id: String,
    /// The region where the replica is deployed. Example: us-west2
    pub replica_region: String,
    /// The id of the deployment.
    pub deployment_id: String,
    /// The snapshot id of the deployment.
    pub snapshot_id: String,
    /// The name of the attached volume, if any. Example: foobar
    pub volume_name: String,
    /// The mount path of the attached volume, if any. Example: /data
    pub volume_mount_path: String,
    /// SHA of the commit that triggered the deployment. Example: d0beb8f5c55b36df7d674d55965a23b8d54ad69b
    pub git_commit_sha: String,
    /// Author of the commit that triggered the deployment. Example: gschier
    pub git_author: String,
    /// Branch that triggered the deployment. Example: main
    pub git_branch: String,
    /// Name of the repository that triggered the deployment. Example: myproject
    pub git_repo_name: String,
    /// Owner of the repository that triggered the deployment. Example: mycompany
    pub git_repo_owner: String,
    /// Message of the commit that triggered the deployment. Example: Fixed a few bugs
    pub git_commit_message: String,
    /// Seconds the old deploy overlaps with the new one. Example: 20
    pub deployment_overlap_seconds: i64,
    /// Dockerfile used to build the service. Example: Railway.dockerfile
    pub dockerfile_path: String,
    /// Nixpacks configuration file relative to the root of the app. Example: frontend.nixpacks.toml
    pub nixpacks_config_file: String,
    /// Nixpacks version to build with; empty means Railway's default. Example: 1.29.1
    pub nixpacks_version: String,
    /// Healthcheck timeout in seconds. Example: 300
    pub healthcheck_timeout_sec: i64,
    /// The SIGTERM to SIGKILL buffer time in seconds. Example: 30
    pub deployment_draining_seconds: i64,
    /// UID that runs the main process inside the container. 0 means root.
    pub run_uid: i64,
    /// Shared memory size in binary bytes. Example: 67108864
    pub shm_size_bytes: i64,
}

/// Returns true when the process environment says we are running on Railway.
pub fn is_railway() -> bool {
    is_railway_in(&SystemEnv)
}

/// Returns true when `env` has a non-empty `RAILWAY_PROJECT_ID`.
pub fn is_railway_in<E: EnvSource>(env: &E) -> bool {
    env.var(RAILWAY_PROJECT_ID)
        .is_some_and(|project_id| !project_id.is_empty())
}

/// Unwraps a load result, panicking with the load error.
///
/// Meant for process start-up where there is nothing sensible to do without
/// the Railway environment.
pub fn must(result: Result<RailwayEnv, RailwayEnvError>) -> RailwayEnv {
    match result {
        Ok(env) => env,
        Err(err) => panic!("failed to load Railway environment: {err}"),
    }
}

impl RailwayEnv {
    /// Load from the process environment
    pub fn load() -> Result<Self, RailwayEnvError> {
        Self::load_from(&SystemEnv)
    }

    /// Like [`RailwayEnv::load`], but panics on failure.
    pub fn must_load() -> Self {
        must(Self::load())
    }

    /// Load from an explicit environment source
    ///
    /// Numeric variables fall back to 0 when unset or empty. A numeric variable
    /// that is set but does not parse fails the whole load; the first failure in
    /// field order is reported.
    pub fn load_from<E: EnvSource>(env: &E) -> Result<Self, RailwayEnvError> {
        if !is_railway_in(env) {
            return Err(RailwayEnvError::NotRailway);
        }

        let tcp_proxy_port = env_number(env, RAILWAY_TCP_PROXY_PORT, 0)?;
        let tcp_application_port = env_number(env, RAILWAY_TCP_APPLICATION_PORT, 0)?;
        let deployment_overlap_seconds = env_number(env, RAILWAY_DEPLOYMENT_OVERLAP_SECONDS, 0)?;
        let healthcheck_timeout_sec = env_number(env, RAILWAY_HEALTHCHECK_TIMEOUT_SEC, 0)?;
        let deployment_draining_seconds = env_number(env, RAILWAY_DEPLOYMENT_DRAINING_SECONDS, 0)?;
        let run_uid = env_number(env, RAILWAY_RUN_UID, 0)?;
        let shm_size_bytes = env_number(env, RAILWAY_SHM_SIZE_BYTES, 0)?;

        let text = |name: &str| env.var(name).unwrap_or_default();

        Ok(Self {
            public_domain: text(RAILWAY_PUBLIC_DOMAIN),
            private_domain: text(RAILWAY_PRIVATE_DOMAIN),
            tcp_proxy_domain: text(RAILWAY_TCP_PROXY_DOMAIN),
            tcp_proxy_port,
            tcp_application_port,
            project_name: text(RAILWAY_PROJECT_NAME),
            project_id: text(RAILWAY_PROJECT_ID),
            environment_name: text(RAILWAY_ENVIRONMENT_NAME),
            environment_id: text(RAILWAY_ENVIRONMENT_ID),
            service_name: text(RAILWAY_SERVICE_NAME),
            service_id: text(RAILWAY_SERVICE_ID),
            replica_id: text(RAILWAY_REPLICA_ID),
            replica_region: text(RAILWAY_REPLICA_REGION),
            deployment_id: text(RAILWAY_DEPLOYMENT_ID),
            snapshot_id: text(RAILWAY_SNAPSHOT_ID),
            volume_name: text(RAILWAY_VOLUME_NAME),
            volume_mount_path: text(RAILWAY_VOLUME_MOUNT_PATH),
            git_commit_sha: text(RAILWAY_GIT_COMMIT_SHA),
            git_author: text(RAILWAY_GIT_AUTHOR),
            git_branch: text(RAILWAY_GIT_BRANCH),
            git_repo_name: text(RAILWAY_GIT_REPO_NAME),
            git_repo_owner: text(RAILWAY_GIT_REPO_OWNER),
            git_commit_message: text(RAILWAY_GIT_COMMIT_MESSAGE),
            deployment_overlap_seconds,
            dockerfile_path: text(RAILWAY_DOCKERFILE_PATH),
            nixpacks_config_file: text(NIXPACKS_CONFIG_FILE),
            nixpacks_version: text(NIXPACKS_VERSION),
            healthcheck_timeout_sec,
            deployment_draining_seconds,
            run_uid,
            shm_size_bytes,
        })
    }

    /// `https://` URL of the public domain, if the service has one
    pub fn public_url(&self) -> Option<String> {
        if self.public_domain.is_empty() {
            None
        } else {
            Some(format!("https://{}", self.public_domain))
        }
    }

    /// `domain:port` of the TCP proxy, if one is configured
    pub fn tcp_proxy_address(&self) -> Option<String> {
        if self.tcp_proxy_domain.is_empty() || self.tcp_proxy_port == 0 {
            None
        } else {
            Some(format!("{}:{}", self.tcp_proxy_domain, self.tcp_proxy_port))
        }
    }

    pub fn has_volume(&self) -> bool {
        !self.volume_mount_path.is_empty()
    }
}

fn env_number<E: EnvSource>(
    env: &E,
    name: &'static str,
    default: i64,
) -> Result<i64, RailwayEnvError> {
    match env.var(name) {
        Some(value) if !value.is_empty() => value
            .parse()
            .map_err(|source| RailwayEnvError::InvalidVariable { name, source }),
        _ => Ok(default),
    }
}
