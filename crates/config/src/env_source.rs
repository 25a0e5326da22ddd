//! Read access to environment variables.
//!
//! Loaders take an [`EnvSource`] instead of calling `std::env` directly, so a
//! caller can hand them a fixed snapshot (a `HashMap`) and vary it between
//! calls without touching the process environment.

use std::{collections::HashMap, env};

pub trait EnvSource {
    /// Returns the value of `key`, or `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Values that are not valid Unicode are treated as unset
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<E: EnvSource>(env: E, key: &str) -> Option<String> {
        env.var(key)
    }

    #[test]
    fn test_hash_map_source() {
        let mut env = HashMap::new();
        env.insert("RAILWAY_SERVICE_NAME".to_string(), "web".to_string());

        assert_eq!(lookup(&env, "RAILWAY_SERVICE_NAME"), Some("web".to_string()));
        assert_eq!(lookup(&env, "RAILWAY_SERVICE_ID"), None);
    }

    #[test]
    fn test_borrowed_str_map_source() {
        let env = HashMap::from([("RAILWAY_REPLICA_REGION", "us-west2")]);

        assert_eq!(lookup(&env, "RAILWAY_REPLICA_REGION"), Some("us-west2".to_string()));
        assert_eq!(lookup(env, "railway_replica_region"), None);
    }

    #[test]
    fn test_system_env_missing_variable() {
        assert_eq!(
            SystemEnv.var("RAILWAY_TEST_VARIABLE_THAT_IS_NEVER_SET"),
            None
        );
    }
}
