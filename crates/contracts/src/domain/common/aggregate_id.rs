use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a stored record (product, inquiry).
///
/// Ids travel as plain strings in URLs and table keys; `from_string` is the
/// only way back, so it owns the per-type format rules.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
