//! Event stream seen by a subscribed renderer

use std::sync::{Arc, Mutex};

use splitdesk_core::{
    AlwaysConfirm, EditorEvent, EditorSession, MemoryContentProvider, SplitDirection,
};

type EventLog = Arc<Mutex<Vec<EditorEvent>>>;

fn recording_session() -> (EditorSession, EventLog) {
    let provider = MemoryContentProvider::with_files([
        ("a.rs", "fn a() {}"),
        ("b.rs", "fn b() {}"),
        ("c.rs", "fn c() {}"),
    ]);
    let mut session = EditorSession::new(Arc::new(provider), AlwaysConfirm);
    let log: EventLog = Arc::default();
    let sink = Arc::clone(&log);
    session.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    (session, log)
}

fn drain(log: &EventLog) -> Vec<EditorEvent> {
    std::mem::take(&mut *log.lock().unwrap())
}

#[tokio::test]
async fn open_emits_opened_then_focus() {
    let (mut session, log) = recording_session();

    let a = session.open_tab("a.rs").await;
    let pane = session.active_pane().unwrap();
    assert_eq!(
        drain(&log),
        vec![
            EditorEvent::TabOpened { tab: a, pane },
            EditorEvent::ActiveTabChanged {
                tab: Some(a),
                pane: Some(pane),
            },
        ]
    );

    // re-opening only refocuses
    session.open_tab("a.rs").await;
    let events = drain(&log);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], EditorEvent::ActiveTabChanged { tab: Some(t), .. } if t == a));
}

#[tokio::test]
async fn closing_active_tab_reports_close_before_new_focus() {
    let (mut session, log) = recording_session();
    let a = session.open_tab("a.rs").await;
    let b = session.open_tab("b.rs").await;
    drain(&log);

    session.close_tab(b);
    let events = drain(&log);
    assert_eq!(events[0], EditorEvent::TabClosed { tab: b });
    assert!(matches!(
        events.last(),
        Some(EditorEvent::ActiveTabChanged { tab: Some(t), .. }) if *t == a
    ));
}

#[tokio::test]
async fn split_and_close_pane_flow() {
    let (mut session, log) = recording_session();
    session.open_tab("a.rs").await;
    let b = session.open_tab("b.rs").await;
    let pane = session.active_pane().unwrap();
    drain(&log);

    let outcome = session.split_pane(pane, SplitDirection::Horizontal).unwrap();
    let events = drain(&log);
    assert_eq!(
        events[0],
        EditorEvent::PaneSplit {
            pane,
            new_pane: outcome.new_leaf_id,
            direction: SplitDirection::Horizontal,
        }
    );
    assert!(matches!(
        events.last(),
        Some(EditorEvent::ActiveTabChanged { tab: Some(t), pane: Some(p) })
            if *t == b && *p == outcome.new_leaf_id
    ));

    session.close_pane(outcome.new_leaf_id);
    let events = drain(&log);
    assert!(events.contains(&EditorEvent::TabClosed { tab: b }));
    assert!(events.contains(&EditorEvent::PaneClosed {
        pane: outcome.new_leaf_id
    }));
}

#[tokio::test]
async fn close_all_ends_with_empty_focus() {
    let (mut session, log) = recording_session();
    session.open_tab("a.rs").await;
    session.open_tab("c.rs").await;
    drain(&log);

    session.close_all_tabs();
    assert_eq!(
        drain(&log),
        vec![
            EditorEvent::TabsCleared,
            EditorEvent::ActiveTabChanged {
                tab: None,
                pane: None,
            },
        ]
    );
}

#[tokio::test]
async fn rejected_operations_emit_nothing() {
    let (mut session, log) = recording_session();
    let a = session.open_tab("a.rs").await;
    session.close_tab(a);
    let revision = session.revision();
    drain(&log);

    assert!(!session.close_tab(a).is_closed());
    assert!(!session.set_active_tab(a));
    assert!(!session.update_tab_content(a, "x", true));
    let pane = session.active_pane().unwrap();
    assert!(session.resize_split(pane, 30.0).is_err());

    assert!(drain(&log).is_empty());
    assert_eq!(session.revision(), revision);
}
