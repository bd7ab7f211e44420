//! Named reducer hooks.
//!
//! A reducer receives the current value (as JSON) and the serialized build
//! context, and returns the value to hand to the next reducer. `reduce` runs
//! the reducers of each event name in order, so a call with
//! `["x-for-browser", "x"]` runs every `x-for-browser` reducer before any `x`
//! reducer. It is a single filter chain, not a broadcast.

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::{Error, Result, TargetType};

pub type Reducer = Arc<dyn Fn(Value, &Value) -> Value + Send + Sync>;

#[derive(Clone, Default)]
pub struct Events {
    reducers: IndexMap<String, Vec<Reducer>>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reducer for an event
    pub fn on<F>(&mut self, event: impl Into<String>, reducer: F)
    where
        F: Fn(Value, &Value) -> Value + Send + Sync + 'static,
    {
        self.reducers
            .entry(event.into())
            .or_default()
            .push(Arc::new(reducer));
    }

    /// Builder-style variant of [`Events::on`]
    ///
    /// # Example
    ///
    /// ```
    /// use projext_rollup::Events;
    /// use serde_json::{Value, json};
    ///
    /// let events = Events::new().with("rollup-json-plugin-settings-configuration", |mut value, _| {
    ///     value["preferConst"] = json!(false);
    ///     value
    /// });
    /// assert!(events.has_reducers(&["rollup-json-plugin-settings-configuration"]));
    /// ```
    pub fn with<F>(mut self, event: impl Into<String>, reducer: F) -> Self
    where
        F: Fn(Value, &Value) -> Value + Send + Sync + 'static,
    {
        self.on(event, reducer);
        self
    }

    pub fn has_reducers(&self, events: &[&str]) -> bool {
        events
            .iter()
            .any(|event| self.reducers.get(*event).is_some_and(|list| !list.is_empty()))
    }

    /// Pass `value` through the reducers of every event, in order.
    ///
    /// Without reducers the value is returned untouched.
    pub fn reduce<T, C>(&self, events: &[&str], value: T, context: &C) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        C: Serialize + ?Sized,
    {
        if !self.has_reducers(events) {
            return Ok(value);
        }

        let context = serde_json::to_value(context)?;
        let mut current = serde_json::to_value(&value)?;
        for event in events {
            let Some(reducers) = self.reducers.get(*event) else {
                continue;
            };
            for reducer in reducers {
                tracing::trace!(event, "running reducer");
                current = reducer(current, &context);
            }
        }

        serde_json::from_value(current).map_err(|e| Error::Reducer {
            event: events.join(", "),
            message: e.to_string(),
        })
    }
}

impl fmt::Debug for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: IndexMap<&str, usize> = self
            .reducers
            .iter()
            .map(|(event, list)| (event.as_str(), list.len()))
            .collect();
        f.debug_struct("Events").field("reducers", &counts).finish()
    }
}

/// The target-type specific name of an event (`<event>-for-<type>`)
pub fn for_type(event: &str, target_type: TargetType) -> String {
    format!("{event}-for-{target_type}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Counter {
        steps: Vec<String>,
    }

    fn push_step(step: &'static str) -> impl Fn(Value, &Value) -> Value + Send + Sync {
        move |mut value, _| {
            if let Some(steps) = value["steps"].as_array_mut() {
                steps.push(json!(step));
            }
            value
        }
    }

    #[test]
    fn reduce_without_reducers_is_identity() {
        let events = Events::new();
        let value = Counter { steps: vec![] };
        let reduced = events.reduce(&["a", "b"], value, &json!({})).unwrap();
        assert!(reduced.steps.is_empty());
    }

    #[test]
    fn reduce_runs_events_in_the_given_order() {
        let events = Events::new()
            .with("generic", push_step("generic"))
            .with("specific", push_step("specific-1"))
            .with("specific", push_step("specific-2"));

        let reduced = events
            .reduce(&["specific", "generic"], Counter { steps: vec![] }, &json!({}))
            .unwrap();
        assert_eq!(reduced.steps, vec!["specific-1", "specific-2", "generic"]);
    }

    #[test]
    fn reducers_receive_the_context() {
        let events = Events::new().with("event", |mut value, context| {
            value["steps"] = json!([context["name"].clone()]);
            value
        });

        let reduced = events
            .reduce(&["event"], Counter { steps: vec![] }, &json!({ "name": "front" }))
            .unwrap();
        assert_eq!(reduced.steps, vec!["front"]);
    }

    #[test]
    fn invalid_reducer_output_is_an_error() {
        let events = Events::new().with("event", |_, _| json!("not a counter"));
        let result = events.reduce(&["event"], Counter { steps: vec![] }, &json!({}));
        assert!(matches!(result, Err(Error::Reducer { event, .. }) if event == "event"));
    }

    #[test]
    fn for_type_appends_the_target_type() {
        assert_eq!(
            for_type("rollup-configuration-parameters", TargetType::Browser),
            "rollup-configuration-parameters-for-browser"
        );
    }
}
