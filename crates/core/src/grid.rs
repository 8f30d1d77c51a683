//! Topology view over a single distributor snapshot.

use std::sync::Arc;

use grid_protocol::{DistributorStatus, Node, Topology};
use grid_runtime::{Error, Result};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::distributor::Distributor;

/// Read-only view of a grid, bound to one distributor.
///
/// The distributor status is fetched on first use and cached for the lifetime
/// of the `Grid`. Concurrent first readers block on the same fetch, so the
/// distributor is asked exactly once no matter how the reads race. A failed
/// fetch caches nothing and is returned to the caller as-is.
///
/// To observe newer node state, build a new `Grid`.
pub struct Grid<D: Distributor + ?Sized> {
	url: String,
	distributor: Arc<D>,
	status: OnceCell<DistributorStatus>,
}

impl<D: Distributor + ?Sized> std::fmt::Debug for Grid<D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Grid")
			.field("url", &self.url)
			.field("fetched", &self.status.get().is_some())
			.finish_non_exhaustive()
	}
}

impl<D: Distributor + ?Sized> Grid<D> {
	/// Creates a grid view.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if `url` is empty.
	pub fn new(distributor: Arc<D>, url: impl Into<String>) -> Result<Self> {
		GridBuilder::new().distributor(distributor).url(url).build()
	}

	pub fn builder() -> GridBuilder<D> {
		GridBuilder::new()
	}

	/// The grid's public URL.
	pub fn url(&self) -> &str {
		&self.url
	}

	fn status(&self) -> std::result::Result<&DistributorStatus, D::Error> {
		self.status.get_or_try_init(|| {
			let status = self.distributor.status()?;
			debug!(target = "grid", url = %self.url, nodes = status.nodes.len(), "fetched distributor status");
			Ok(status)
		})
	}

	/// Node views in snapshot order, rebuilt on every call.
	pub fn nodes(&self) -> std::result::Result<Vec<Node>, D::Error> {
		Ok(self.status()?.nodes.iter().map(Node::from).collect())
	}

	/// Sum over nodes of `min(max_session_count, advertised slots)`.
	pub fn total_slots(&self) -> std::result::Result<u64, D::Error> {
		Ok(self.status()?.nodes.iter().map(|node| node.capped_slots()).sum())
	}

	/// Sum over nodes of occupied slots. Not capped.
	pub fn used_slots(&self) -> std::result::Result<u64, D::Error> {
		Ok(self.status()?.nodes.iter().map(|node| node.used_slots()).sum())
	}

	/// URL, nodes, and slot totals in one value.
	pub fn topology(&self) -> std::result::Result<Topology, D::Error> {
		Ok(Topology {
			url: self.url.clone(),
			nodes: self.nodes()?,
			total_slots: self.total_slots()?,
			used_slots: self.used_slots()?,
		})
	}
}

/// Builder for [`Grid`]. Both the distributor and a non-empty URL are required.
pub struct GridBuilder<D: Distributor + ?Sized> {
	distributor: Option<Arc<D>>,
	url: Option<String>,
}

impl<D: Distributor + ?Sized> Default for GridBuilder<D> {
	fn default() -> Self {
		Self::new()
	}
}

impl<D: Distributor + ?Sized> GridBuilder<D> {
	pub fn new() -> Self {
		Self {
			distributor: None,
			url: None,
		}
	}

	pub fn distributor(mut self, distributor: Arc<D>) -> Self {
		self.distributor = Some(distributor);
		self
	}

	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if the distributor is unset or the
	/// URL is unset or blank. Nothing is fetched either way.
	pub fn build(self) -> Result<Grid<D>> {
		let distributor = self.distributor.ok_or_else(|| Error::missing("Distributor"))?;
		let url = self
			.url
			.filter(|url| !url.trim().is_empty())
			.ok_or_else(|| Error::missing("Grid's public URL"))?;

		Ok(Grid {
			url,
			distributor,
			status: OnceCell::new(),
		})
	}
}
