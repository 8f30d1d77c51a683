//! Data types for the grid status and driver resolution crates.
//!
//! Everything here is plain data: the distributor snapshot as it is read off
//! the wire or from disk, the derived topology views handed to callers, and the
//! capability and driver-path values passed through driver resolution.
//!
//! Behaviour lives in `grid-runtime` (driver resolution) and `grid-core`
//! (status aggregation).

pub mod capabilities;
pub mod driver;
pub mod status;

pub use capabilities::*;
pub use driver::*;
pub use status::*;
