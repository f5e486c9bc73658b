use crate::domain::gateway::GatewayKind;
use crate::domain::ports::{GatewayConstructor, GatewayRef, ResolveFn};
use crate::infrastructure::gateways::NullGateway;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

enum Registration {
    /// A fresh gateway is built on every resolve.
    Transient(GatewayConstructor),
    /// The same instance is handed out on every resolve.
    Shared(GatewayRef),
}

/// Name-keyed mapping from gateway kinds to the gateways that serve them.
///
/// Populated once during composition, then only read. Each kind holds at most
/// one registration; registering a kind again replaces the previous one.
/// Resolution never fails: anything without a registration resolves to
/// [`NullGateway::empty`].
#[derive(Default)]
pub struct GatewayRegistry {
    registrations: HashMap<String, Registration>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor invoked on every resolve of `kind`.
    pub fn register<F>(&mut self, kind: GatewayKind, ctor: F)
    where
        F: Fn() -> GatewayRef + Send + Sync + 'static,
    {
        self.insert(kind, Registration::Transient(Box::new(ctor)));
    }

    /// Registers a pre-built gateway shared by every resolve of `kind`.
    pub fn register_instance(&mut self, kind: GatewayKind, gateway: GatewayRef) {
        self.insert(kind, Registration::Shared(gateway));
    }

    fn insert(&mut self, kind: GatewayKind, registration: Registration) {
        if self
            .registrations
            .insert(kind.name().to_string(), registration)
            .is_some()
        {
            warn!(kind = %kind, "Replacing existing gateway registration");
        } else {
            debug!(kind = %kind, "Registered gateway");
        }
    }

    /// Removes the registration for `kind`, returning whether there was one.
    pub fn unregister(&mut self, kind: GatewayKind) -> bool {
        self.registrations.remove(kind.name()).is_some()
    }

    pub fn contains(&self, kind: GatewayKind) -> bool {
        self.registrations.contains_key(kind.name())
    }

    /// Registered kinds ordered by code.
    pub fn registered_kinds(&self) -> Vec<GatewayKind> {
        GatewayKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn resolve(&self, kind: GatewayKind) -> GatewayRef {
        self.resolve_named(kind.name())
    }

    /// Resolves a gateway by registry key. Unknown names yield the null gateway.
    pub fn resolve_named(&self, name: &str) -> GatewayRef {
        match self.registrations.get(name) {
            Some(Registration::Transient(ctor)) => {
                debug!(kind = name, "Constructing gateway");
                ctor()
            }
            Some(Registration::Shared(gateway)) => {
                debug!(kind = name, "Resolved shared gateway");
                Arc::clone(gateway)
            }
            None => {
                debug!(kind = name, "No gateway registered, falling back to null gateway");
                NullGateway::empty()
            }
        }
    }

    /// Freezes the registry into a resolution function that can be shared
    /// across threads.
    pub fn into_resolver(self) -> ResolveFn {
        let registry = Arc::new(self);
        Arc::new(move |kind: GatewayKind| registry.resolve(kind))
    }
}
