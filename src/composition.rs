//! Composition root: the one place where the registry and factory are wired
//! together and handed to the rest of the program.

use crate::application::factory::GatewayFactory;
use crate::application::registry::GatewayRegistry;
use crate::domain::gateway::GatewayKind;
use crate::domain::ports::{GatewayRef, NotifierRef};
use crate::infrastructure::gateways::{ProtobaseGateway, Shift4Gateway, WellsFargoGateway};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

pub struct CompositionRoot {
    notifier: NotifierRef,
    excluded: HashSet<GatewayKind>,
}

impl CompositionRoot {
    /// Wires every known gateway to `notifier`.
    pub fn new(notifier: NotifierRef) -> Self {
        Self {
            notifier,
            excluded: HashSet::new(),
        }
    }

    /// Leaves `kind` unregistered, so the factory serves the null gateway for it.
    pub fn without(mut self, kind: GatewayKind) -> Self {
        self.excluded.insert(kind);
        self
    }

    pub fn registry(&self) -> GatewayRegistry {
        let mut registry = GatewayRegistry::new();
        for kind in GatewayKind::ALL {
            if self.excluded.contains(&kind) {
                continue;
            }
            let notifier = Arc::clone(&self.notifier);
            match kind {
                GatewayKind::WellsFargo => registry.register(kind, move || {
                    Arc::new(WellsFargoGateway::new(notifier.clone())) as GatewayRef
                }),
                GatewayKind::Shift4 => registry.register(kind, move || {
                    Arc::new(Shift4Gateway::new(notifier.clone())) as GatewayRef
                }),
                GatewayKind::Protobase => registry.register(kind, move || {
                    Arc::new(ProtobaseGateway::new(notifier.clone())) as GatewayRef
                }),
            }
        }
        registry
    }

    /// Builds the registry and returns the factory over it.
    pub fn configure(&self) -> GatewayFactory {
        let registry = self.registry();
        info!(
            registered = ?registry.registered_kinds(),
            "Gateway factory configured"
        );
        GatewayFactory::from_registry(registry)
    }
}
