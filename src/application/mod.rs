//! Application layer: gateway resolution.
//!
//! `GatewayRegistry` maps kinds to gateways and `GatewayFactory` is the entry
//! point callers use to obtain them. Both are read-only once composed.

pub mod factory;
pub mod registry;
