//! `SystemManager`: owns multiple named [`System`] instances.

// Layer 1: Standard library imports
use std::sync::Arc;

// Layer 2: Third-party crate imports
use dashmap::DashMap;

// Layer 3: Internal module imports
use crate::error::Error;
use crate::system::system::System;

/// Creates, looks up, and tears down named actor systems. Useful for hosts
/// that run more than one independent supervision tree in the same process
/// (e.g. one per tenant).
#[derive(Default)]
pub struct SystemManager {
    systems: DashMap<String, Arc<System>>,
}

impl SystemManager {
    pub fn new() -> Self {
        Self {
            systems: DashMap::new(),
        }
    }

    /// Create and register a new system under `name`. Fails if `name` is
    /// already in use.
    pub fn create(&self, name: impl Into<String>) -> Result<Arc<System>, Error> {
        let name = name.into();
        if self.systems.contains_key(&name) {
            return Err(Error::DuplicateId(name.as_str().into()));
        }
        let system = Arc::new(System::new()?);
        self.systems.insert(name, Arc::clone(&system));
        Ok(system)
    }

    pub fn get(&self, name: &str) -> Option<Arc<System>> {
        self.systems.get(name).map(|entry| Arc::clone(&entry))
    }

    /// Start the system registered under `name`.
    pub fn start(&self, name: &str) -> Result<(), Error> {
        let system = self.get(name).ok_or_else(|| Error::NotFound(name.into()))?;
        system.start()
    }

    /// Stop the system registered under `name` without removing it.
    pub async fn stop(&self, name: &str) -> Result<(), Error> {
        let system = self.get(name).ok_or_else(|| Error::NotFound(name.into()))?;
        system.stop().await
    }

    /// Stop (if started) and remove the system registered under `name`.
    pub async fn remove(&self, name: &str) -> Result<(), Error> {
        let system = self
            .systems
            .remove(name)
            .map(|(_, system)| system)
            .ok_or_else(|| Error::NotFound(name.into()))?;
        if system.is_started() {
            system.stop().await?;
        }
        Ok(())
    }

    pub fn list(&self) -> Vec<String> {
        self.systems.iter().map(|entry| entry.key().clone()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let manager = SystemManager::new();
        manager.create("tenant-a").unwrap();
        assert!(manager.get("tenant-a").is_some());
    }

    #[tokio::test]
    async fn test_duplicate_create_rejected() {
        let manager = SystemManager::new();
        manager.create("tenant-a").unwrap();
        let err = manager.create("tenant-a");
        assert!(matches!(err, Err(Error::DuplicateId(_))));
    }

    #[tokio::test]
    async fn test_remove_stops_system() {
        let manager = SystemManager::new();
        manager.create("tenant-a").unwrap();
        manager.start("tenant-a").unwrap();
        manager.remove("tenant-a").await.unwrap();
        assert!(manager.get("tenant-a").is_none());
    }

    #[tokio::test]
    async fn test_remove_never_started_system_does_not_error() {
        let manager = SystemManager::new();
        manager.create("tenant-a").unwrap();
        manager.remove("tenant-a").await.unwrap();
        assert!(manager.get("tenant-a").is_none());
    }

    #[tokio::test]
    async fn test_start_and_stop_by_name() {
        let manager = SystemManager::new();
        manager.create("tenant-a").unwrap();
        manager.start("tenant-a").unwrap();
        assert!(manager.get("tenant-a").unwrap().is_started());
        manager.stop("tenant-a").await.unwrap();
        assert!(!manager.get("tenant-a").unwrap().is_started());
    }

    #[tokio::test]
    async fn test_start_unknown_system_not_found() {
        let manager = SystemManager::new();
        let err = manager.start("missing");
        assert!(matches!(err, Err(Error::NotFound(_))));
    }
}
