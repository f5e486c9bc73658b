use gateway_factory::application::factory::GatewayFactory;
use gateway_factory::composition::CompositionRoot;
use gateway_factory::domain::gateway::GatewayKind;
use gateway_factory::infrastructure::in_memory::RecordingNotifier;
use std::sync::Arc;

/// Builds a fully wired factory whose gateways report into the returned recorder.
#[allow(dead_code)]
pub fn recording_factory() -> (GatewayFactory, RecordingNotifier) {
    recording_factory_without(&[])
}

/// Like [`recording_factory`], leaving `excluded` kinds unregistered.
#[allow(dead_code)]
pub fn recording_factory_without(excluded: &[GatewayKind]) -> (GatewayFactory, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let root = excluded
        .iter()
        .fold(CompositionRoot::new(Arc::new(recorder.clone())), |root, kind| {
            root.without(*kind)
        });
    (root.configure(), recorder)
}
