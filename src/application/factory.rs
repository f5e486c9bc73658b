use super::registry::GatewayRegistry;
use crate::domain::gateway::GatewayKind;
use crate::domain::ports::{GatewayRef, ResolveFn};

/// Public entry point for obtaining gateways.
///
/// `GatewayFactory` holds nothing but the resolution function it was built
/// with. Clones share that function, so a factory can be handed to as many
/// callers or threads as needed.
#[derive(Clone)]
pub struct GatewayFactory {
    resolve: ResolveFn,
}

impl GatewayFactory {
    /// Creates a factory delegating to `resolve`.
    ///
    /// # Arguments
    ///
    /// * `resolve` - Maps a kind to a gateway. It must not panic for any kind.
    pub fn new(resolve: ResolveFn) -> Self {
        Self { resolve }
    }

    /// Creates a factory backed by a fully populated registry.
    pub fn from_registry(registry: GatewayRegistry) -> Self {
        Self::new(registry.into_resolver())
    }

    /// Returns the gateway for `kind`, or the null gateway when none is
    /// registered.
    pub fn create(&self, kind: GatewayKind) -> GatewayRef {
        (self.resolve)(kind)
    }
}
