use uuid::Uuid;
use warehouse_packing_api::events::{EventRecorder, NewEvent};

fn event(action: &str) -> NewEvent {
    NewEvent {
        packer_id: Uuid::new_v4(),
        order_id: Some(Uuid::new_v4()),
        ip_addr: Some("10.0.0.7".into()),
        action: action.into(),
    }
}

#[tokio::test]
async fn recorded_events_reach_the_writer_in_order() {
    let (recorder, mut rx) = EventRecorder::channel(8);
    let first = event("Picked item #1 for order #1");
    let second = event("Unpicked item #1 for order #1");

    recorder.record(first.clone());
    recorder.clone().record(second.clone());

    assert_eq!(rx.recv().await, Some(first));
    assert_eq!(rx.recv().await, Some(second));
}

#[tokio::test]
async fn record_after_writer_stopped_is_dropped_silently() {
    let (recorder, rx) = EventRecorder::channel(8);
    drop(rx);

    // Must neither panic nor block.
    recorder.record(event("Picked item #2 for order #2"));
}

#[tokio::test]
async fn full_queue_drops_instead_of_blocking() {
    let (recorder, mut rx) = EventRecorder::channel(2);
    let events: Vec<NewEvent> = (0..5)
        .map(|n| event(&format!("Picked item #{n} for order #9")))
        .collect();

    for e in &events {
        recorder.record(e.clone());
    }

    assert_eq!(rx.recv().await, Some(events[0].clone()));
    assert_eq!(rx.recv().await, Some(events[1].clone()));
    assert!(rx.try_recv().is_err(), "overflow must not be queued");

    // Room again once the writer has drained.
    recorder.record(events[4].clone());
    assert_eq!(rx.recv().await, Some(events[4].clone()));
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let (recorder, mut rx) = EventRecorder::channel(0);
    recorder.record(event("Picked item #3 for order #3"));
    assert!(rx.try_recv().is_ok());
}
