#![forbid(unsafe_code)]

//! Logical events emitted towards application state.
//!
//! Interactive primitives carry `on-*` props holding an action template:
//! a list whose head names the action and whose tail holds leading
//! arguments, e.g. `[:set-window-bounds "fleet"]`. The interaction engine
//! completes the template with runtime-derived arguments and hands the
//! resulting [`Action`] to an [`ActionSink`]. Malformed or absent templates
//! are silently ignored.

use crate::value::{Props, Value};
use std::fmt;

/// A completed `[name, ...args]` tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: String,
    pub args: Vec<Value>,
}

impl Action {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Complete a template with extra trailing arguments.
    ///
    /// Returns `None` unless `template` is a non-empty list headed by a
    /// keyword or string.
    pub fn from_template(template: &Value, extra: impl IntoIterator<Item = Value>) -> Option<Self> {
        let (head, tail) = template.as_list()?.split_first()?;
        let name = match head {
            Value::Keyword(name) | Value::Str(name) if !name.is_empty() => name.clone(),
            _ => return None,
        };
        let mut args = tail.to_vec();
        args.extend(extra);
        Some(Self { name, args })
    }

    /// Complete the template stored under `key` in `props`.
    pub fn from_prop(
        props: &Props,
        key: &str,
        extra: impl IntoIterator<Item = Value>,
    ) -> Option<Self> {
        Self::from_template(props.get(key)?, extra)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[:{}", self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        f.write_str("]")
    }
}

/// Receiver of completed actions.
///
/// The sink owns validation and side effects; nothing in the engine
/// mutates application state directly.
pub trait ActionSink {
    fn dispatch(&mut self, action: Action);
}

impl ActionSink for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}

/// Adapts a closure into an [`ActionSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(Action)> ActionSink for FnSink<F> {
    fn dispatch(&mut self, action: Action) {
        (self.0)(action);
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSink(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_completed_with_extra_args() {
        let template = Value::List(vec![Value::keyword("set-zoom")]);
        let action = Action::from_template(&template, [Value::from(1.5)]).unwrap();
        assert_eq!(action, Action::new("set-zoom", vec![Value::from(1.5)]));
        assert_eq!(action.to_string(), "[:set-zoom 1.5]");
    }

    #[test]
    fn leading_args_are_kept_in_order() {
        let template = Value::List(vec![Value::keyword("toggle-minimized"), Value::from("fleet")]);
        let action = Action::from_template(&template, []).unwrap();
        assert_eq!(action.args, vec![Value::from("fleet")]);
    }

    #[test]
    fn malformed_templates_are_ignored() {
        assert!(Action::from_template(&Value::Nil, []).is_none());
        assert!(Action::from_template(&Value::List(vec![]), []).is_none());
        assert!(Action::from_template(&Value::List(vec![Value::from(3.0)]), []).is_none());
        assert!(Action::from_template(&Value::from("set-zoom"), []).is_none());
        assert!(Action::from_prop(&Props::new(), "on-change", []).is_none());
    }

    #[test]
    fn closures_and_vecs_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|a: Action| seen.push(a.name));
            sink.dispatch(Action::new("a", vec![]));
        }
        assert_eq!(seen, vec!["a".to_string()]);

        let mut log: Vec<Action> = Vec::new();
        log.dispatch(Action::new("b", vec![]));
        assert_eq!(log.len(), 1);
    }
}
