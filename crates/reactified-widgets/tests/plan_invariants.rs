//! Planner invariants over laid-out trees.
//!
//! 1. Planned command lists are balanced (`save`/`restore`).
//! 2. Overlay commands come after every main-tree command, wherever the
//!    dropdown sits in the tree.
//! 3. Planning is pure: the same tree and context give the same plan.

use proptest::prelude::*;
use reactified_core::geometry::{Point, Rect};
use reactified_core::node::{Node, Tag};
use reactified_core::value::{Props, Value};
use reactified_layout::layout_root;
use reactified_render::{DrawCommand, is_balanced};
use reactified_widgets::{RenderContext, plan, plan_frame};

fn dropdown(expanded: bool) -> Node {
    let options = Value::List(vec!["north".into(), "south".into(), "east".into()]);
    Node::new(
        Tag::Dropdown,
        Props::new()
            .with("options", options)
            .with("value", "south")
            .with("expanded?", expanded),
    )
}

fn filler(text: &str) -> Node {
    Node::new(Tag::Button, Props::new().with("text", text))
}

/// A window holding `before` buttons, a dropdown, then `after` buttons,
/// followed by a sibling window that paints later.
fn scene(before: usize, after: usize, expanded: bool) -> Node {
    let mut children: Vec<Node> = (0..before).map(|i| filler(&format!("b{i}"))).collect();
    children.push(dropdown(expanded));
    children.extend((0..after).map(|i| filler(&format!("a{i}"))));
    let panel = Node::new(
        Tag::Window,
        Props::new().with("x", 10.0).with("y", 10.0).with("height", 400.0),
    )
    .with_children(children);
    let sibling = Node::new(
        Tag::Window,
        Props::new().with("x", 200.0).with("y", 40.0).with("title", "Later"),
    )
    .with_children(vec![filler("covering")]);
    Node::new(Tag::VStack, Props::new()).with_children(vec![panel, sibling])
}

#[test]
fn overlay_paints_after_later_siblings() {
    let laid = layout_root(&scene(1, 1, true), Rect::new(0.0, 0.0, 800.0, 600.0)).unwrap();
    let planned = plan(&laid, &RenderContext::new());
    let main_len = planned.commands.len();
    assert_eq!(planned.overlays.len(), 1);

    let all = planned.flush();
    let option_texts: Vec<usize> = all
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            matches!(c, DrawCommand::Text { text, .. } if text == "north" || text == "east")
        })
        .map(|(i, _)| i)
        .collect();
    assert_eq!(option_texts.len(), 2);
    assert!(option_texts.iter().all(|i| *i >= main_len));
    let covering = all
        .iter()
        .position(|c| matches!(c, DrawCommand::Text { text, .. } if text == "covering"))
        .unwrap();
    assert!(covering < main_len);
    assert!(is_balanced(&all));
}

proptest! {
    #[test]
    fn plans_are_balanced_and_overlays_last(
        before in 0usize..4,
        after in 0usize..4,
        expanded in any::<bool>(),
        px in 0.0..800.0f64,
        py in 0.0..600.0f64,
    ) {
        let laid = layout_root(&scene(before, after, expanded), Rect::new(0.0, 0.0, 800.0, 600.0)).unwrap();
        let ctx = RenderContext::new().with_pointer(Point::new(px, py));
        let planned = plan(&laid, &ctx);
        prop_assert!(is_balanced(&planned.commands));
        prop_assert_eq!(planned.overlays.len(), usize::from(expanded));

        let main = planned.commands.clone();
        let all = planned.flush();
        prop_assert!(is_balanced(&all));
        prop_assert_eq!(&all[..main.len()], &main[..]);
        prop_assert_eq!(plan_frame(&laid, &ctx), all);
    }
}
