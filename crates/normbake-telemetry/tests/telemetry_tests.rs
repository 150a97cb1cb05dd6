//! Integration tests for normbake-telemetry.

use normbake_telemetry::bus::EventBus;
use normbake_telemetry::events::{BakeEvent, BakePhase, EventKind};
use normbake_telemetry::sinks::{EventSink, TracingSink, VecSink};

fn tick(tick: u32, done: u32) -> BakeEvent {
    BakeEvent::new(
        tick,
        EventKind::TickCompleted {
            triangles_done: done,
            triangles_total: 10,
            wall_time: 0.015,
        },
    )
}

#[test]
fn emit_and_flush() {
    let sink = VecSink::new();
    let mut bus = EventBus::new().with_sink(Box::new(sink.clone()));

    bus.emit(tick(1, 4));
    bus.emit(tick(2, 10));
    assert!(sink.is_empty(), "events are delivered on flush");

    bus.flush();
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], tick(1, 4));
    assert_eq!(events[1], tick(2, 10));
}

#[test]
fn disabled_bus_drops_events() {
    let sink = VecSink::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(tick(1, 1));
    bus.flush();
    assert!(sink.is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let a = VecSink::new();
    let b = VecSink::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    bus.add_sink(Box::new(TracingSink::new()));
    assert_eq!(bus.sink_count(), 3);

    bus.emit(BakeEvent::new(
        0,
        EventKind::PhaseChanged {
            from: BakePhase::Idle,
            to: BakePhase::Preprocessing,
        },
    ));
    bus.flush();
    assert!(!a.is_finalized());
    bus.finalize();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert!(a.is_finalized() && b.is_finalized());
}

#[test]
fn terminal_events() {
    let done = BakeEvent::new(
        3,
        EventKind::Complete {
            wall_time: 0.04,
            texels_written: 4096,
        },
    );
    let failed = BakeEvent::new(
        2,
        EventKind::Failed {
            reason: "boom".into(),
        },
    );
    assert!(done.is_terminal());
    assert!(failed.is_terminal());
    assert!(!tick(1, 1).is_terminal());
}

#[test]
fn event_serialization() {
    let event = BakeEvent::new(
        5,
        EventKind::PhaseChanged {
            from: BakePhase::Baking,
            to: BakePhase::Complete,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: BakeEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
    assert!(json.contains("PhaseChanged"));
}

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::new().name(), "tracing_sink");
}
