use crate::domain::gateway::PaymentGateway;
use crate::domain::ports::{GatewayRef, NotifierRef};
use std::sync::{Arc, LazyLock};

pub const WELLS_FARGO_MESSAGE: &str = "Implement Wells Fargo logic";
pub const SHIFT4_MESSAGE: &str = "Implement SHIFT4 logic";
pub const PROTOBASE_MESSAGE: &str = "Implement Protobase logic";

/// Wells Fargo backend stub.
pub struct WellsFargoGateway {
    notifier: NotifierRef,
}

impl WellsFargoGateway {
    pub fn new(notifier: NotifierRef) -> Self {
        Self { notifier }
    }
}

impl PaymentGateway for WellsFargoGateway {
    fn invoke(&self) {
        self.notifier.notify(WELLS_FARGO_MESSAGE);
    }

    fn name(&self) -> &'static str {
        "WELLSFARGO"
    }
}

/// SHIFT4 backend stub.
pub struct Shift4Gateway {
    notifier: NotifierRef,
}

impl Shift4Gateway {
    pub fn new(notifier: NotifierRef) -> Self {
        Self { notifier }
    }
}

impl PaymentGateway for Shift4Gateway {
    fn invoke(&self) {
        self.notifier.notify(SHIFT4_MESSAGE);
    }

    fn name(&self) -> &'static str {
        "SHIFT4"
    }
}

/// Protobase backend stub.
pub struct ProtobaseGateway {
    notifier: NotifierRef,
}

impl ProtobaseGateway {
    pub fn new(notifier: NotifierRef) -> Self {
        Self { notifier }
    }
}

impl PaymentGateway for ProtobaseGateway {
    fn invoke(&self) {
        self.notifier.notify(PROTOBASE_MESSAGE);
    }

    fn name(&self) -> &'static str {
        "PROTOBASE"
    }
}

static EMPTY: LazyLock<GatewayRef> =
    LazyLock::new(|| Arc::new(NullGateway { _private: () }) as GatewayRef);

/// Stand-in returned when no gateway is registered for a kind.
///
/// Holds no state and has no side effects. There is exactly one instance per
/// process, created on first access through [`NullGateway::empty`].
pub struct NullGateway {
    _private: (),
}

impl NullGateway {
    pub fn empty() -> GatewayRef {
        Arc::clone(&EMPTY)
    }
}

impl PaymentGateway for NullGateway {
    fn invoke(&self) {}

    fn name(&self) -> &'static str {
        "NULL"
    }

    fn is_null(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::RecordingNotifier;

    #[test]
    fn test_each_gateway_emits_its_own_message() {
        let notifier = RecordingNotifier::new();
        let shared: NotifierRef = Arc::new(notifier.clone());

        WellsFargoGateway::new(shared.clone()).invoke();
        Shift4Gateway::new(shared.clone()).invoke();
        ProtobaseGateway::new(shared).invoke();

        assert_eq!(
            notifier.messages(),
            vec![WELLS_FARGO_MESSAGE, SHIFT4_MESSAGE, PROTOBASE_MESSAGE]
        );
    }

    #[test]
    fn test_null_gateway_is_a_singleton() {
        let a = NullGateway::empty();
        let b = NullGateway::empty();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_null());
        assert_eq!(a.name(), "NULL");
    }

    #[test]
    fn test_concrete_gateways_are_not_null() {
        let notifier: NotifierRef = Arc::new(RecordingNotifier::new());
        assert!(!Shift4Gateway::new(notifier).is_null());
    }
}
