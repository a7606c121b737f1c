//! Shared model and client-side core of the storefront.
//!
//! Everything here is pure (no DOM, no network) so it compiles for both the
//! wasm frontend and the native backend and is unit-tested natively.

pub mod domain;
pub mod shared;
