//! Grid status aggregation.
//!
//! [`Grid`] turns one distributor snapshot into a topology view: the nodes,
//! their total (capped) capacity, and the slots currently in use. The
//! snapshot is fetched lazily, once per [`Grid`], and never refreshed.
//!
//! Driver resolution lives in `grid-runtime` and is re-exported here as
//! [`runtime`] so callers need a single dependency.

pub mod distributor;
pub mod grid;

pub use distributor::{Distributor, SnapshotFile};
pub use grid::{Grid, GridBuilder};
pub use grid_protocol as protocol;
pub use grid_protocol::{Capabilities, DistributorStatus, DriverPaths, Node, NodeSummary, Topology};
pub use grid_runtime as runtime;
pub use grid_runtime::{Error, Result};
