//! Instrumentation emitted by chain building and configured runs.

mod common;

use common::{B, E, cluster, flags, six_cycle};
use kusari_core::{ChainerBuilder, ExecutionStrategy, build_chains};
use kusari_test_support::tracing::RecordingLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn build_chains_records_cluster_span() {
    let (chains, layer) = RecordingLayer::record(|| build_chains(&six_cycle(), None));
    chains.expect("ring has a chain");

    let span = layer.span("core.build_chains").expect("span must exist");
    assert_eq!(span.field("cluster"), Some("hexagon"));
    assert_eq!(span.field("nodes"), Some("6"));
    assert!(layer.span("core.apply_breakpoints").is_none());
}

#[test]
fn breakpoints_record_their_own_span() {
    let marks = flags(6, &[B, E]);
    let (chains, layer) = RecordingLayer::record(|| build_chains(&six_cycle(), Some(&marks)));
    assert_eq!(chains.expect("arcs survive").len(), 2);

    let span = layer
        .span("core.apply_breakpoints")
        .expect("span must exist");
    assert_eq!(span.field("chains"), Some("1"));
    assert_eq!(span.field("flags"), Some("6"));
}

#[test]
fn failed_builds_emit_an_error_event() {
    let isolated = cluster("isolated", 2, &[]);
    let (result, layer) = RecordingLayer::record(|| build_chains(&isolated, None));
    assert!(result.is_err());

    let errors = layer.events_at(Level::ERROR);
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]
            .field("error")
            .is_some_and(|message| message.contains("isolated"))
    );
}

#[test]
fn chainer_run_records_strategy() {
    let chainer = ChainerBuilder::new()
        .with_execution_strategy(ExecutionStrategy::Sequential)
        .build()
        .expect("configuration is valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let set = tracing::subscriber::with_default(subscriber, || chainer.run(&six_cycle(), None));
    assert_eq!(set.expect("ring has a chain").len(), 1);

    let span = layer.span("core.run").expect("span must exist");
    assert_eq!(span.field("strategy"), Some("Sequential"));
    assert_eq!(span.field("breakpoints"), Some("false"));
    assert!(layer.span("core.build_chains").is_none());
}
