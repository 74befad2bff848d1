//! Property-based invariant tests for command recording.
//!
//! 1. Any sequence of pushes, saves, restores and clips finishes balanced.
//! 2. Non-structural commands are kept in order.

use proptest::prelude::*;
use reactified_core::geometry::{Point, Rect};
use reactified_render::{Color, CommandList, Draw, DrawCommand, is_balanced};

#[derive(Debug, Clone)]
enum Op {
    Fill(f64),
    Save,
    Restore,
    Clip(Vec<Op>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let leaf = prop_oneof![
        (0.0f64..100.0).prop_map(Op::Fill),
        Just(Op::Save),
        Just(Op::Restore),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        proptest::collection::vec(inner, 0..6).prop_map(Op::Clip)
    })
}

fn apply(list: &mut CommandList, ops: &[Op], fills: &mut Vec<f64>) {
    for op in ops {
        match op {
            Op::Fill(x) => {
                fills.push(*x);
                list.fill_rect(Rect::new(*x, 0.0, 1.0, 1.0), Color::rgb(1, 2, 3));
            }
            Op::Save => list.save(),
            Op::Restore => list.restore(),
            Op::Clip(nested) => {
                list.clipped(Rect::new(0.0, 0.0, 10.0, 10.0), |inner| {
                    apply(inner, nested, fills)
                });
            }
        }
    }
}

proptest! {
    #[test]
    fn recording_always_finishes_balanced(ops in proptest::collection::vec(op_strategy(), 0..24)) {
        let mut list = CommandList::new();
        let mut fills = Vec::new();
        apply(&mut list, &ops, &mut fills);
        let commands = list.finish();
        prop_assert!(is_balanced(&commands));

        let recorded: Vec<f64> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { bounds, .. } => Some(bounds.x),
                _ => None,
            })
            .collect();
        prop_assert_eq!(recorded, fills);
    }

    #[test]
    fn lines_keep_their_endpoints(x in -100.0f64..100.0, y in -100.0f64..100.0) {
        let mut list = CommandList::new();
        list.line(Point::new(0.0, 0.0), Point::new(x, y), Color::rgb(0, 0, 0), 1.0);
        let commands = list.finish();
        prop_assert!(
            matches!(commands.as_slice(), [DrawCommand::Line { to, .. }] if *to == Point::new(x, y)),
            "expected a single Line command ending at the target point"
        );
    }
}
