// SPDX-License-Identifier: MIT
//! Completion signal read from the page under test.

use serde_json::Value;

/// Sentinel the in-page predicate yields while the embedded test runner is
/// still working. Shared between the predicate source and the decoder.
pub const RUNNING_SENTINEL: &str = "_running";

/// One fresh read of the page's completion state.
///
/// Nothing is cached between reads; every poll re-evaluates the predicate
/// and decodes the raw value again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionSignal {
    /// The test runner has not finished yet.
    Running,
    /// The test runner finished; `true` means the suite passed.
    Finished(bool),
}

impl CompletionSignal {
    /// Decode the value the in-page predicate evaluated to.
    ///
    /// The predicate yields the string sentinel while the run is in
    /// progress and the runner's success flag once finished. Pages are not
    /// obliged to hand back a clean boolean, so any other value is folded
    /// with JavaScript truthiness: `false`, `null`, `0`, `""` and a
    /// missing value (`undefined`) are failures; everything else passes.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) if s == RUNNING_SENTINEL => Self::Running,
            other => Self::Finished(is_truthy(other)),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// JavaScript truthiness for a JSON value. `undefined` arrives as `None`.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn sentinel_maps_to_running() {
        let value = json!(RUNNING_SENTINEL);
        assert_eq!(
            CompletionSignal::from_value(Some(&value)),
            CompletionSignal::Running
        );
    }

    #[test]
    fn booleans_pass_through() {
        let yes = json!(true);
        let no = json!(false);
        assert_eq!(
            CompletionSignal::from_value(Some(&yes)),
            CompletionSignal::Finished(true)
        );
        assert_eq!(
            CompletionSignal::from_value(Some(&no)),
            CompletionSignal::Finished(false)
        );
    }

    #[test]
    fn undefined_is_a_failure() {
        assert_eq!(
            CompletionSignal::from_value(None),
            CompletionSignal::Finished(false)
        );
    }

    #[test]
    fn falsy_values_fail() {
        for value in [json!(null), json!(0), json!(0.0), json!("")] {
            assert_eq!(
                CompletionSignal::from_value(Some(&value)),
                CompletionSignal::Finished(false),
                "expected {value} to be falsy"
            );
        }
    }

    #[test]
    fn truthy_values_pass() {
        for value in [json!(1), json!(-1.5), json!("ok"), json!([]), json!({})] {
            assert_eq!(
                CompletionSignal::from_value(Some(&value)),
                CompletionSignal::Finished(true),
                "expected {value} to be truthy"
            );
        }
    }

    #[test]
    fn running_is_not_finished() {
        assert!(!CompletionSignal::Running.is_finished());
        assert!(CompletionSignal::Finished(false).is_finished());
    }

    proptest! {
        #[test]
        fn nonzero_numbers_always_pass(n in prop::num::f64::NORMAL.prop_filter("nonzero", |f| *f != 0.0)) {
            let value = json!(n);
            prop_assert_eq!(
                CompletionSignal::from_value(Some(&value)),
                CompletionSignal::Finished(true)
            );
        }

        #[test]
        fn non_sentinel_strings_follow_their_truthiness(s in ".*") {
            prop_assume!(s != RUNNING_SENTINEL);
            let expected = !s.is_empty();
            let value = json!(s);
            prop_assert_eq!(
                CompletionSignal::from_value(Some(&value)),
                CompletionSignal::Finished(expected)
            );
        }
    }
}
