// ABOUTME: Owner/name pair identifying a GitHub repository.
// ABOUTME: Parses and validates the `owner/repo` form used by GITHUB_REPOSITORY.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository cannot be empty")]
    Empty,

    #[error("repository must be in the form owner/repo, got '{0}'")]
    MissingSeparator(String),

    #[error("repository owner cannot be empty")]
    EmptyOwner,

    #[error("repository name cannot be empty")]
    EmptyName,

    #[error("invalid character in repository: '{0}'")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    owner: String,
    name: String,
}

impl Repository {
    pub fn new(owner: &str, name: &str) -> Result<Self, RepositoryError> {
        if owner.is_empty() {
            return Err(RepositoryError::EmptyOwner);
        }
        if name.is_empty() {
            return Err(RepositoryError::EmptyName);
        }

        for c in owner.chars().chain(name.chars()) {
            if c == '/' || c.is_whitespace() || c.is_control() {
                return Err(RepositoryError::InvalidChar(c));
            }
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn parse(value: &str) -> Result<Self, RepositoryError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RepositoryError::Empty);
        }

        let (owner, name) = value
            .split_once('/')
            .ok_or_else(|| RepositoryError::MissingSeparator(value.to_string()))?;
        Self::new(owner, name)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Repository {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
