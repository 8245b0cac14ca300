//! The actor system: a root supervisor (default id `"root"`, `ONE_FOR_ONE`)
//! plus a system-wide registry, and an optional [`SystemManager`] for hosts
//! that run more than one system in a process.

pub mod manager;
pub mod system;

pub use manager::SystemManager;
pub use system::{ActorSystemOptions, System, DEFAULT_ROOT_ID, DEFAULT_SYSTEM_NAME};
