use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use serde_json::Value;

use crate::constants::CONTEXT_KEY_PREFIX;

/// Key/value store shared between the steps of a workflow run.
///
/// Cloning yields another handle on the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedContext {
	values: Arc<RwLock<HashMap<String, Value>>>,
}

impl SharedContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// The slot results of `operation` are published under.
	pub fn key_for(operation: &str) -> String {
		format!("{}{}", CONTEXT_KEY_PREFIX, operation.to_ascii_uppercase())
	}

	pub fn publish<K: Into<String>>(&self, key: K, value: Value) {
		self.values.write().insert(key.into(), value);
	}

	pub fn get(&self, key: &str) -> Option<Value> {
		self.values.read().get(key).cloned()
	}

	pub fn keys(&self) -> Vec<String> {
		let mut keys: Vec<String> = self.values.read().keys().cloned().collect();
		keys.sort();
		keys
	}

	pub fn clear(&self) {
		self.values.write().clear();
	}
}
