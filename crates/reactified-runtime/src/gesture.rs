#![forbid(unsafe_code)]

//! Per-primitive gesture behavior.
//!
//! `press` decides whether a pointer-down on a node starts a gesture, is
//! swallowed, or falls through. `drag` and `release` advance a captured
//! gesture. Drags never hit-test: they work from the pointer position and
//! the values recorded at press time.
//!
//! | Gesture          | Press                  | Drag                 | Release (inside)       |
//! |------------------|------------------------|----------------------|------------------------|
//! | `WindowMove`     | capture                | `on-bounds-change`   | none                   |
//! | `WindowResize`   | capture                | `on-bounds-change`   | none                   |
//! | `WindowMinimize` | capture                | none                 | `on-toggle-minimized`  |
//! | `TabClick`       | capture                | none                 | `on-tab-change`        |
//! | `Slider`         | `on-change` if changed | `on-change` if moved | none                   |
//! | `Dropdown`       | capture                | none                 | `on-toggle`            |
//! | `DropdownOption` | capture                | none                 | `on-change`            |
//! | `ButtonPress`    | capture                | none                 | `on-click`             |
//! | `MinimapPan`     | `on-navigate`          | `on-navigate`        | none                   |

use crate::config::InteractionConfig;
use reactified_core::action::{Action, ActionSink};
use reactified_core::event::GestureTag;
use reactified_core::geometry::{Point, Rect};
use reactified_core::node::Tag;
use reactified_core::value::{Props, Value};
use reactified_layout::{Geometry, LaidOutNode, WindowGeometry};

/// Values recorded when a gesture starts.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureValue {
    /// Window move or resize: pointer and window bounds at press time.
    WindowDrag { start_pointer: Point, start_bounds: Rect },
    Minimize { button: Rect },
    Tab { index: usize, value: Value, rect: Rect },
    /// Last value reported for the slider.
    Slider { value: f64 },
    DropdownHeader { bounds: Rect },
    DropdownOption { index: usize, value: Value, rect: Rect },
    Button { bounds: Rect },
    Minimap,
}

impl GestureValue {
    /// Row or tab index for gestures that target one.
    pub fn index(&self) -> Option<usize> {
        match self {
            GestureValue::Tab { index, .. } | GestureValue::DropdownOption { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// Outcome of a pointer-down on a hit node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Press {
    /// Start a gesture and capture the pointer.
    Capture(GestureTag, GestureValue),
    /// Swallow the event without capturing (window body, disabled button).
    Consumed,
    /// Nothing here reacts to the pointer.
    Ignored,
}

/// Complete the template under `key` and dispatch it.
pub(crate) fn emit(sink: &mut dyn ActionSink, props: &Props, key: &str, args: Vec<Value>) {
    if let Some(action) = Action::from_prop(props, key, args) {
        reactified_core::trace!(action = %action, "emit");
        sink.dispatch(action);
    }
}

pub(crate) fn press(
    node: &LaidOutNode,
    option: Option<usize>,
    point: Point,
    sink: &mut dyn ActionSink,
) -> Press {
    match (&node.tag, &node.layout.geometry) {
        (Tag::Window | Tag::TabbedWindow, Geometry::Window(window)) => {
            if window.minimize_button.contains(point) {
                return Press::Capture(
                    GestureTag::WindowMinimize,
                    GestureValue::Minimize {
                        button: window.minimize_button,
                    },
                );
            }
            if window.resize_handle.is_some_and(|handle| handle.contains(point)) {
                return Press::Capture(GestureTag::WindowResize, window_drag(node, window, point));
            }
            if let Some(index) = window.tab_at(point) {
                let tab = &window.tabs[index];
                return Press::Capture(
                    GestureTag::TabClick,
                    GestureValue::Tab {
                        index,
                        value: tab.value.clone(),
                        rect: tab.bounds,
                    },
                );
            }
            if window.header.contains(point) {
                return Press::Capture(GestureTag::WindowMove, window_drag(node, window, point));
            }
            Press::Consumed
        }
        (Tag::Slider, Geometry::Slider(slider)) => {
            let value = slider.value_at(point.x);
            if value != slider.value {
                emit(sink, &node.props, "on-change", vec![Value::from(value)]);
            }
            Press::Capture(GestureTag::Slider, GestureValue::Slider { value })
        }
        (Tag::Dropdown, Geometry::Dropdown(dropdown)) => {
            let index = option.or_else(|| dropdown.option_at(point));
            if let Some((index, row)) = index.and_then(|i| Some((i, dropdown.options.get(i)?))) {
                return Press::Capture(
                    GestureTag::DropdownOption,
                    GestureValue::DropdownOption {
                        index,
                        value: row.value.clone(),
                        rect: row.bounds,
                    },
                );
            }
            if dropdown.header.contains(point) {
                return Press::Capture(
                    GestureTag::Dropdown,
                    GestureValue::DropdownHeader {
                        bounds: dropdown.header,
                    },
                );
            }
            Press::Consumed
        }
        (Tag::Button, _) => {
            if node.props.flag("disabled?", false) {
                Press::Consumed
            } else {
                Press::Capture(
                    GestureTag::ButtonPress,
                    GestureValue::Button {
                        bounds: node.bounds(),
                    },
                )
            }
        }
        (Tag::Minimap, Geometry::Minimap(_)) => {
            navigate(node, point, sink);
            Press::Capture(GestureTag::MinimapPan, GestureValue::Minimap)
        }
        _ => Press::Ignored,
    }
}

/// A minimized window's laid-out height is its header; drags report the
/// stored height so moving never collapses it.
fn window_drag(node: &LaidOutNode, window: &WindowGeometry, point: Point) -> GestureValue {
    let mut start_bounds = node.bounds();
    if window.minimized {
        start_bounds.height = window.expanded_height;
    }
    GestureValue::WindowDrag {
        start_pointer: point,
        start_bounds,
    }
}

fn navigate(node: &LaidOutNode, point: Point, sink: &mut dyn ActionSink) {
    if let Geometry::Minimap(minimap) = &node.layout.geometry {
        let bounds = node.bounds();
        let inside = Point::new(
            point.x.clamp(bounds.x, bounds.right()),
            point.y.clamp(bounds.y, bounds.bottom()),
        );
        let world = minimap.to_world(&bounds, inside);
        emit(
            sink,
            &node.props,
            "on-navigate",
            vec![Value::List(vec![Value::from(world.x), Value::from(world.y)])],
        );
    }
}

/// Advance a captured gesture. `value` is updated in place.
pub(crate) fn drag(
    gesture: GestureTag,
    value: &mut GestureValue,
    node: &LaidOutNode,
    point: Point,
    config: &InteractionConfig,
    sink: &mut dyn ActionSink,
) {
    match (gesture, value) {
        (
            GestureTag::WindowMove,
            GestureValue::WindowDrag {
                start_pointer,
                start_bounds,
            },
        ) => {
            let (dx, dy) = point.delta_from(*start_pointer);
            let moved = start_bounds.translate(dx, dy);
            emit(sink, &node.props, "on-bounds-change", vec![Value::from_rect(moved)]);
        }
        (
            GestureTag::WindowResize,
            GestureValue::WindowDrag {
                start_pointer,
                start_bounds,
            },
        ) => {
            let (dx, dy) = point.delta_from(*start_pointer);
            let header = match &node.layout.geometry {
                Geometry::Window(window) => window.header.height,
                _ => 0.0,
            };
            let resized = start_bounds.with_size(
                (start_bounds.width + dx).max(config.min_window_width),
                (start_bounds.height + dy)
                    .max(config.min_window_height)
                    .max(header),
            );
            emit(sink, &node.props, "on-bounds-change", vec![Value::from_rect(resized)]);
        }
        (GestureTag::Slider, GestureValue::Slider { value: last }) => {
            if let Geometry::Slider(slider) = &node.layout.geometry {
                let value = slider.value_at(point.x);
                if value != *last {
                    *last = value;
                    emit(sink, &node.props, "on-change", vec![Value::from(value)]);
                }
            }
        }
        (GestureTag::MinimapPan, _) => navigate(node, point, sink),
        _ => {}
    }
}

/// Finish a captured gesture on pointer-up.
pub(crate) fn release(
    value: &GestureValue,
    node: &LaidOutNode,
    point: Point,
    sink: &mut dyn ActionSink,
) {
    let props = &node.props;
    match value {
        GestureValue::Minimize { button } if button.contains(point) => {
            emit(sink, props, "on-toggle-minimized", Vec::new());
        }
        GestureValue::Tab { value, rect, .. } if rect.contains(point) => {
            emit(sink, props, "on-tab-change", vec![value.clone()]);
        }
        GestureValue::DropdownHeader { bounds } if bounds.contains(point) => {
            let expanded = props.flag("expanded?", false);
            emit(sink, props, "on-toggle", vec![Value::from(!expanded)]);
        }
        GestureValue::DropdownOption { value, rect, .. } if rect.contains(point) => {
            emit(sink, props, "on-change", vec![value.clone()]);
        }
        GestureValue::Button { bounds } if bounds.contains(point) => {
            emit(sink, props, "on-click", Vec::new());
        }
        _ => {}
    }
}
