use super::gateway::{GatewayKind, PaymentGateway};
use std::sync::Arc;

/// Receives the notification text a gateway emits when invoked.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

pub type NotifierRef = Arc<dyn Notifier>;

pub type GatewayRef = Arc<dyn PaymentGateway>;

/// Zero-argument constructor stored in the registry for transient gateways.
pub type GatewayConstructor = Box<dyn Fn() -> GatewayRef + Send + Sync>;

/// Resolution function a factory delegates to.
pub type ResolveFn = Arc<dyn Fn(GatewayKind) -> GatewayRef + Send + Sync>;
