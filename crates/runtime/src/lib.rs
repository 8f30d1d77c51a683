//! Grid runtime - driver binary resolution
//!
//! Locates and validates the executable a driver service should launch:
//!
//! - **Override**: an environment entry named by the service descriptor
//! - **Managed resolution**: a pluggable lookup ([`PathLookup`], [`ManagerCommand`])
//! - **Validation**: existence and execute-permission checks
//!
//! Each stage fails with its own [`Error`] variant. The collaborators
//! ([`Environment`], [`FileSystem`], [`ManagedResolution`]) are narrow traits so
//! tests can substitute deterministic doubles.

pub mod driver;
pub mod env;
pub mod error;
pub mod fs;
pub mod managed;
pub mod service;

pub use driver::{DriverFinder, DriverSource, ResolvedDriver};
pub use env::{Environment, SystemEnvironment};
pub use error::{Error, Result};
pub use fs::{FileSystem, LocalFileSystem};
pub use managed::{ManagedResolution, ManagerCommand, PathLookup};
pub use service::{DriverService, DriverServiceInfo, KnownDriver};
