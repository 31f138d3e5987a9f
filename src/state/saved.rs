// ABOUTME: The record begin leaves behind for finalize.
// ABOUTME: Maps SavedDeployment fields onto the cross-invocation state keys.

use super::store::StateStore;
use crate::error::Result;
use crate::types::DeploymentId;

/// Keys written to the cross-invocation state store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKey {
    DeploymentId,
    Token,
    Environment,
    EnvironmentUrl,
    LogUrl,
}

impl StateKey {
    pub const ALL: [StateKey; 5] = [
        StateKey::DeploymentId,
        StateKey::Token,
        StateKey::Environment,
        StateKey::EnvironmentUrl,
        StateKey::LogUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::DeploymentId => "deployment-id",
            StateKey::Token => "token",
            StateKey::Environment => "environment",
            StateKey::EnvironmentUrl => "environment-url",
            StateKey::LogUrl => "log-url",
        }
    }
}

/// Everything finalize needs to update the deployment begin created.
#[derive(Clone, PartialEq, Eq)]
pub struct SavedDeployment {
    pub deployment_id: DeploymentId,
    pub token: String,
    pub environment: String,
    pub environment_url: Option<String>,
    pub log_url: Option<String>,
}

impl std::fmt::Debug for SavedDeployment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavedDeployment")
            .field("deployment_id", &self.deployment_id)
            .field("token", &"***")
            .field("environment", &self.environment)
            .field("environment_url", &self.environment_url)
            .field("log_url", &self.log_url)
            .finish()
    }
}

/// Result of reading the saved deployment back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateLookup {
    Found(SavedDeployment),
    /// `deployment-id` or `token` was never saved; begin did not finish.
    Missing,
    /// State exists but cannot be used.
    Invalid(String),
}

impl SavedDeployment {
    /// Write every key. Optional values are stored as empty strings, which
    /// read back as unset.
    pub fn save(&self, store: &mut impl StateStore) -> Result<()> {
        let deployment_id = self.deployment_id.to_string();
        for key in StateKey::ALL {
            let value = match key {
                StateKey::DeploymentId => deployment_id.as_str(),
                StateKey::Token => self.token.as_str(),
                StateKey::Environment => self.environment.as_str(),
                StateKey::EnvironmentUrl => self.environment_url.as_deref().unwrap_or(""),
                StateKey::LogUrl => self.log_url.as_deref().unwrap_or(""),
            };
            store.set(key.as_str(), value)?;
        }
        Ok(())
    }

    pub fn load(store: &impl StateStore) -> StateLookup {
        let read = |key: StateKey| store.get(key.as_str()).filter(|v| !v.is_empty());

        let (Some(raw_id), Some(token)) = (read(StateKey::DeploymentId), read(StateKey::Token))
        else {
            return StateLookup::Missing;
        };

        let deployment_id = match raw_id.parse::<DeploymentId>() {
            Ok(id) => id,
            Err(e) => {
                return StateLookup::Invalid(format!(
                    "saved deployment-id '{raw_id}' is not a number: {e}"
                ));
            }
        };

        StateLookup::Found(SavedDeployment {
            deployment_id,
            token,
            environment: read(StateKey::Environment).unwrap_or_default(),
            environment_url: read(StateKey::EnvironmentUrl),
            log_url: read(StateKey::LogUrl),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStore;

    fn saved() -> SavedDeployment {
        SavedDeployment {
            deployment_id: DeploymentId::new(12345),
            token: "t0ken".to_string(),
            environment: "staging".to_string(),
            environment_url: Some("https://staging.example.com".to_string()),
            log_url: None,
        }
    }

    #[test]
    fn save_then_load_returns_same_record() {
        let mut store = MemoryStore::new();
        saved().save(&mut store).unwrap();

        assert_eq!(store.state().get("deployment-id").map(String::as_str), Some("12345"));
        assert_eq!(store.state().get("log-url").map(String::as_str), Some(""));
        assert_eq!(SavedDeployment::load(&store), StateLookup::Found(saved()));
    }

    #[test]
    fn missing_token_means_nothing_to_update() {
        let store = MemoryStore::with_state([("deployment-id", "1")]);
        assert_eq!(SavedDeployment::load(&store), StateLookup::Missing);
    }

    #[test]
    fn empty_deployment_id_means_nothing_to_update() {
        let store = MemoryStore::with_state([("deployment-id", ""), ("token", "t")]);
        assert_eq!(SavedDeployment::load(&store), StateLookup::Missing);
    }

    #[test]
    fn non_numeric_deployment_id_is_invalid() {
        let store = MemoryStore::with_state([("deployment-id", "abc"), ("token", "t")]);
        assert!(matches!(SavedDeployment::load(&store), StateLookup::Invalid(_)));
    }
}
