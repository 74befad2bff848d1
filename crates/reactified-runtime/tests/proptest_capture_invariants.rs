//! Property-based invariant tests for pointer capture.
//!
//! 1. Capture and active gesture are set and cleared together.
//! 2. A pointer-down while captured keeps the existing capture.
//! 3. Every pointer-up leaves the engine uncaptured.
//! 4. Drags never change which node is captured.

use proptest::prelude::*;
use reactified_core::event::{PointerEvent, PointerEventKind};
use reactified_core::geometry::Rect;
use reactified_core::node::{Node, Tag};
use reactified_core::value::{Props, Value};
use reactified_layout::{LaidOutNode, layout_root};
use reactified_runtime::InteractionState;

fn template(name: &str) -> Value {
    Value::List(vec![Value::keyword(name)])
}

/// Two overlapping windows with controls, over a full-viewport stack.
fn scene() -> LaidOutNode {
    let window = |x: f64, y: f64, title: &str| {
        Node::new(
            Tag::Window,
            Props::new()
                .with("x", x)
                .with("y", y)
                .with("width", 220.0)
                .with("height", 200.0)
                .with("title", title)
                .with("on-bounds-change", template("move"))
                .with("on-toggle-minimized", template("minimize")),
        )
        .with_children(vec![
            Node::new(Tag::Slider, Props::new().with("on-change", template("slide"))),
            Node::new(
                Tag::Dropdown,
                Props::new()
                    .with("options", Value::List(vec!["a".into(), "b".into(), "c".into()]))
                    .with("expanded?", true)
                    .with("on-change", template("pick")),
            ),
            Node::new(Tag::Button, Props::new().with("on-click", template("click"))),
        ])
    };
    let root = Node::new(Tag::VStack, Props::new()).with_children(vec![
        window(20.0, 20.0, "Left"),
        window(140.0, 80.0, "Right"),
    ]);
    layout_root(&root, Rect::new(0.0, 0.0, 480.0, 360.0)).unwrap()
}

fn event_strategy() -> impl Strategy<Value = PointerEvent> {
    (0u8..4, -20.0..500.0f64, -20.0..380.0f64).prop_map(|(kind, x, y)| match kind {
        0 => PointerEvent::down(x, y),
        1 => PointerEvent::drag(x, y),
        2 => PointerEvent::up(x, y),
        _ => PointerEvent::moved(x, y),
    })
}

proptest! {
    #[test]
    fn capture_follows_the_protocol(events in proptest::collection::vec(event_strategy(), 1..40)) {
        let tree = scene();
        let mut state = InteractionState::new();
        let mut actions = Vec::new();
        for event in events {
            let before = state.captured().cloned();
            state.handle(&tree, event, &mut actions);
            let after = state.captured().cloned();

            prop_assert_eq!(state.is_captured(), state.active().is_some());
            if let Some(active) = state.active() {
                prop_assert_eq!(Some(&active.path), after.as_ref());
            }
            match event.kind {
                PointerEventKind::Up => prop_assert!(after.is_none()),
                PointerEventKind::Down if before.is_some() => {
                    prop_assert_eq!(after, before);
                }
                PointerEventKind::Drag
                | PointerEventKind::Moved => {
                    prop_assert_eq!(after, before);
                }
                _ => {}
            }
        }
    }
}
