#![forbid(unsafe_code)]

//! Hit testing against a laid-out tree.
//!
//! Expanded dropdown rows paint as overlays above everything, so they are
//! tested first, last-painted first. The main tree is then searched depth
//! first with the last child first, matching paint order: the topmost
//! interactive node under the point wins. Only nodes whose bounds contain
//! the point are descended into, and non-interactive nodes are transparent
//! apart from bounding their children.

use reactified_core::geometry::Point;
use reactified_core::node::NodePath;
use reactified_layout::{Geometry, LaidOutNode};

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Path of the interactive node that was hit.
    pub path: NodePath,
    /// Option row index when the hit landed on an expanded dropdown row.
    pub option: Option<usize>,
}

/// Topmost interactive target under `point`.
pub fn hit_test(tree: &LaidOutNode, point: Point) -> Option<Hit> {
    overlay_hit(tree, point).or_else(|| {
        tree_hit(tree, &NodePath::root(), point).map(|path| Hit { path, option: None })
    })
}

fn overlay_hit(tree: &LaidOutNode, point: Point) -> Option<Hit> {
    let mut hit = None;
    // Later overlays paint over earlier ones, so the last match wins.
    tree.walk(|path, node| {
        if let Geometry::Dropdown(dropdown) = &node.layout.geometry
            && let Some(index) = dropdown.option_at(point)
        {
            hit = Some(Hit {
                path: path.clone(),
                option: Some(index),
            });
        }
    });
    hit
}

fn tree_hit(node: &LaidOutNode, path: &NodePath, point: Point) -> Option<NodePath> {
    if !node.bounds().contains(point) {
        return None;
    }
    node.children
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, child)| tree_hit(child, &path.child(i), point))
        .or_else(|| node.tag.is_interactive().then(|| path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactified_core::geometry::Rect;
    use reactified_core::node::{Node, Tag};
    use reactified_core::value::{Props, Value};
    use reactified_layout::layout_root;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 400.0)
    }

    #[test]
    fn topmost_child_wins_and_containers_are_transparent() {
        let tree = Node::new(Tag::VStack, Props::new()).with_children(vec![
            Node::new(Tag::Button, Props::new().with("x", 0.0).with("y", 0.0).with("width", 100.0)),
            Node::new(Tag::Button, Props::new().with("x", 50.0).with("y", 0.0).with("width", 100.0)),
        ]);
        let laid = layout_root(&tree, viewport()).unwrap();
        assert_eq!(hit_test(&laid, Point::new(75.0, 10.0)).unwrap().path, NodePath::from([1]));
        assert_eq!(hit_test(&laid, Point::new(25.0, 10.0)).unwrap().path, NodePath::from([0]));
        assert_eq!(hit_test(&laid, Point::new(300.0, 10.0)), None);
    }

    #[test]
    fn labels_are_not_targets_but_their_window_is() {
        let tree = Node::new(Tag::Window, Props::new().with("x", 0.0).with("y", 0.0))
            .with_children(vec![Node::new(Tag::Label, Props::new().with("text", "hello"))]);
        let laid = layout_root(&tree, viewport()).unwrap();
        let hit = hit_test(&laid, Point::new(12.0, 40.0)).unwrap();
        assert_eq!(hit.path, NodePath::root());
    }

    #[test]
    fn expanded_rows_are_tested_before_the_tree() {
        let options = Value::List(vec!["a".into(), "b".into()]);
        let tree = Node::new(Tag::VStack, Props::new()).with_children(vec![
            Node::new(
                Tag::Dropdown,
                Props::new()
                    .with("x", 0.0)
                    .with("y", 0.0)
                    .with("width", 100.0)
                    .with("options", options)
                    .with("expanded?", true),
            ),
            // Painted later and overlapping the option rows.
            Node::new(
                Tag::Button,
                Props::new().with("x", 0.0).with("y", 40.0).with("width", 100.0),
            ),
        ]);
        let laid = layout_root(&tree, viewport()).unwrap();
        let hit = hit_test(&laid, Point::new(10.0, 80.0)).unwrap();
        assert_eq!(hit.path, NodePath::from([0]));
        assert_eq!(hit.option, Some(1));
    }
}
