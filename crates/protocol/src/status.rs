//! Distributor snapshot and topology view types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Slot counts keyed by stereotype (a named capability shape such as `chrome`).
pub type StereotypeSlots = BTreeMap<String, u32>;

/// One node's reported state at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
	pub node_id: String,
	pub uri: String,
	pub is_up: bool,
	/// Hard cap on concurrent sessions the node accepts.
	pub max_session_count: u32,
	/// Slots advertised per stereotype.
	#[serde(default)]
	pub stereotypes: StereotypeSlots,
	/// Occupied slots per stereotype.
	#[serde(default)]
	pub used_stereotypes: StereotypeSlots,
}

impl NodeSummary {
	/// Sum of advertised slots across all stereotypes.
	pub fn advertised_slots(&self) -> u64 {
		self.stereotypes.values().map(|&n| u64::from(n)).sum()
	}

	/// Advertised slots capped by the node's own session ceiling.
	pub fn capped_slots(&self) -> u64 {
		self.advertised_slots().min(u64::from(self.max_session_count))
	}

	/// Sum of occupied slots across all stereotypes, as reported.
	pub fn used_slots(&self) -> u64 {
		self.used_stereotypes.values().map(|&n| u64::from(n)).sum()
	}
}

/// Snapshot of every node known to the distributor, in distributor order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributorStatus {
	#[serde(default)]
	pub nodes: Vec<NodeSummary>,
}

impl DistributorStatus {
	pub fn new(nodes: Vec<NodeSummary>) -> Self {
		Self { nodes }
	}
}

/// Read-only node view derived from a [`NodeSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
	pub id: String,
	pub uri: String,
	pub is_up: bool,
	pub max_session_count: u32,
}

impl From<&NodeSummary> for Node {
	fn from(summary: &NodeSummary) -> Self {
		Self {
			id: summary.node_id.clone(),
			uri: summary.uri.clone(),
			is_up: summary.is_up,
			max_session_count: summary.max_session_count,
		}
	}
}

/// Full topology view of a grid: public URL, nodes, and slot accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
	pub url: String,
	pub nodes: Vec<Node>,
	pub total_slots: u64,
	pub used_slots: u64,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn summary(max: u32, stereotypes: &[(&str, u32)], used: &[(&str, u32)]) -> NodeSummary {
		NodeSummary {
			node_id: "node-1".into(),
			uri: "http://10.0.0.1:5555".into(),
			is_up: true,
			max_session_count: max,
			stereotypes: stereotypes.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
			used_stereotypes: used.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
		}
	}

	#[test]
	fn capped_slots_respects_max_session_count() {
		let node = summary(5, &[("chrome", 10)], &[]);
		assert_eq!(node.advertised_slots(), 10);
		assert_eq!(node.capped_slots(), 5);
	}

	#[test]
	fn capped_slots_keeps_smaller_advertised_count() {
		let node = summary(8, &[("chrome", 2), ("firefox", 3)], &[]);
		assert_eq!(node.capped_slots(), 5);
	}

	#[test]
	fn used_slots_is_not_capped() {
		let node = summary(1, &[("chrome", 1)], &[("chrome", 3), ("firefox", 2)]);
		assert_eq!(node.used_slots(), 5);
	}

	#[test]
	fn status_reads_camel_case_json() {
		let status: DistributorStatus = serde_json::from_value(json!({
			"nodes": [{
				"nodeId": "a",
				"uri": "http://a:5555",
				"isUp": false,
				"maxSessionCount": 4,
				"stereotypes": { "chrome": 4 }
			}]
		}))
		.unwrap();

		let node = &status.nodes[0];
		assert_eq!(node.node_id, "a");
		assert!(!node.is_up);
		assert_eq!(node.stereotypes["chrome"], 4);
		assert!(node.used_stereotypes.is_empty());
	}

	#[test]
	fn node_view_copies_identity_fields() {
		let view = Node::from(&summary(3, &[], &[]));
		assert_eq!(view.id, "node-1");
		assert_eq!(view.uri, "http://10.0.0.1:5555");
		assert!(view.is_up);
		assert_eq!(view.max_session_count, 3);
	}
}
