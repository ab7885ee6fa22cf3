//! Ready-made attribute predicates for [`AttributeMatcher`].
//!
//! Node helpers compare one attribute map per side. Edge helpers receive
//! the attribute maps of every parallel edge between the two endpoints.
//! A missing attribute is replaced by the helper's default value.
//!
//! [`AttributeMatcher`]: crate::AttributeMatcher

use std::collections::BTreeSet;

use graphx_graph::Attributes;
use serde_json::Value;

use crate::semantic::{EdgeMatchFn, NodeMatchFn};

fn lookup<'a>(attrs: &'a Attributes, attr: &str, default: &'a Value) -> &'a Value {
    attrs.get(attr).unwrap_or(default)
}

fn close(x: f64, y: f64, rtol: f64, atol: f64) -> bool {
    (x - y).abs() <= rtol.mul_add(y.abs(), atol)
}

/// Nodes match when `attr` holds equal values on both sides.
#[must_use]
pub fn categorical_node_match(attr: impl Into<String>, default: Value) -> NodeMatchFn {
    let attr = attr.into();
    Box::new(move |a1, a2| lookup(a1, &attr, &default) == lookup(a2, &attr, &default))
}

/// Like [`categorical_node_match`] over several attributes, each with its
/// own default.
#[must_use]
pub fn categorical_node_match_many<K: Into<String>>(
    attrs: impl IntoIterator<Item = (K, Value)>,
) -> NodeMatchFn {
    let attrs: Vec<(String, Value)> = attrs.into_iter().map(|(k, d)| (k.into(), d)).collect();
    Box::new(move |a1, a2| {
        attrs
            .iter()
            .all(|(attr, default)| lookup(a1, attr, default) == lookup(a2, attr, default))
    })
}

/// Edges match when the sets of `attr` values across their parallel edges
/// are equal.
#[must_use]
pub fn categorical_edge_match(attr: impl Into<String>, default: Value) -> EdgeMatchFn {
    let attr = attr.into();
    Box::new(move |e1, e2| {
        let values = |edges: &[Attributes]| -> BTreeSet<String> {
            edges
                .iter()
                .map(|e| lookup(e, &attr, &default).to_string())
                .collect()
        };
        values(e1) == values(e2)
    })
}

/// Nodes match when the numeric values of `attr` satisfy
/// `|x - y| <= atol + rtol * |y|`. Non-numeric values never match.
#[must_use]
pub fn numerical_node_match(
    attr: impl Into<String>,
    default: f64,
    rtol: f64,
    atol: f64,
) -> NodeMatchFn {
    let attr = attr.into();
    Box::new(move |a1, a2| {
        let number = |attrs: &Attributes| match attrs.get(&attr) {
            Some(value) => value.as_f64(),
            None => Some(default),
        };
        match (number(a1), number(a2)) {
            (Some(x), Some(y)) => close(x, y, rtol, atol),
            _ => false,
        }
    })
}

/// Sorts the numeric `attr` values of each side's parallel edges and
/// compares them pairwise with the same tolerance as
/// [`numerical_node_match`]. Extra values on the longer side are ignored.
#[must_use]
pub fn numerical_edge_match(
    attr: impl Into<String>,
    default: f64,
    rtol: f64,
    atol: f64,
) -> EdgeMatchFn {
    let attr = attr.into();
    Box::new(move |e1, e2| {
        let sorted = |edges: &[Attributes]| -> Option<Vec<f64>> {
            let mut values = edges
                .iter()
                .map(|e| match e.get(&attr) {
                    Some(value) => value.as_f64(),
                    None => Some(default),
                })
                .collect::<Option<Vec<f64>>>()?;
            values.sort_by(f64::total_cmp);
            Some(values)
        };
        match (sorted(e1), sorted(e2)) {
            (Some(v1), Some(v2)) => v1
                .iter()
                .zip(&v2)
                .all(|(&x, &y)| close(x, y, rtol, atol)),
            _ => false,
        }
    })
}

/// Nodes match when `op` accepts the two values of `attr`.
#[must_use]
pub fn generic_node_match<F>(attr: impl Into<String>, default: Value, op: F) -> NodeMatchFn
where
    F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
{
    let attr = attr.into();
    Box::new(move |a1, a2| op(lookup(a1, &attr, &default), lookup(a2, &attr, &default)))
}

/// Edges match when some one-to-one pairing of parallel edges makes `op`
/// accept every pair. Only as many G1 edges as G2 has are paired.
#[must_use]
pub fn generic_edge_match<F>(attr: impl Into<String>, default: Value, op: F) -> EdgeMatchFn
where
    F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
{
    let attr = attr.into();
    Box::new(move |e1, e2| {
        let v1: Vec<&Value> = e1.iter().map(|e| lookup(e, &attr, &default)).collect();
        let v2: Vec<&Value> = e2.iter().map(|e| lookup(e, &attr, &default)).collect();
        let paired = v1.len().min(v2.len());
        let mut used = vec![false; v2.len()];
        assign(&v1[..paired], &v2, &mut used, &op)
    })
}

/// Backtracking search for an injective pairing of `left` into `right`.
fn assign<F>(left: &[&Value], right: &[&Value], used: &mut [bool], op: &F) -> bool
where
    F: Fn(&Value, &Value) -> bool,
{
    let Some((first, rest)) = left.split_first() else {
        return true;
    };
    for (i, candidate) in right.iter().enumerate() {
        if used[i] || !op(first, candidate) {
            continue;
        }
        used[i] = true;
        if assign(rest, right, used, op) {
            return true;
        }
        used[i] = false;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[rstest]
    #[case(json!({"color": "red"}), json!({"color": "red"}), true)]
    #[case(json!({"color": "red"}), json!({"color": "blue"}), false)]
    #[case(json!({}), json!({"color": "grey"}), true)]
    #[case(json!({}), json!({"color": "red"}), false)]
    fn categorical_node_uses_default(#[case] a: Value, #[case] b: Value, #[case] expected: bool) {
        let m = categorical_node_match("color", json!("grey"));
        assert_eq!(m(&attrs(a), &attrs(b)), expected);
    }

    #[test]
    fn categorical_many_checks_every_attribute() {
        let m = categorical_node_match_many([("color", json!("red")), ("size", json!(1))]);
        let a = attrs(json!({"color": "red", "size": 1}));
        let b = attrs(json!({"size": 1}));
        let c = attrs(json!({"color": "red", "size": 2}));

        assert!(m(&a, &b));
        assert!(!m(&a, &c));
    }

    #[test]
    fn categorical_edge_compares_value_sets() {
        let m = categorical_edge_match("kind", json!("plain"));
        let e1 = [attrs(json!({"kind": "a"})), attrs(json!({"kind": "b"}))];
        let e2 = [attrs(json!({"kind": "b"})), attrs(json!({"kind": "a"}))];
        let e3 = [attrs(json!({"kind": "a"})), attrs(json!({}))];

        assert!(m(&e1, &e2));
        assert!(!m(&e1, &e3));
    }

    #[rstest]
    #[case(1.0, 1.0, true)]
    #[case(1.0, 1.000_000_001, true)]
    #[case(1.0, 1.1, false)]
    fn numerical_node_tolerance(#[case] x: f64, #[case] y: f64, #[case] expected: bool) {
        let m = numerical_node_match("weight", 1.0, 1e-5, 1e-8);
        let a = attrs(json!({ "weight": x }));
        let b = attrs(json!({ "weight": y }));
        assert_eq!(m(&a, &b), expected);
    }

    #[test]
    fn numerical_node_rejects_non_numbers() {
        let m = numerical_node_match("weight", 1.0, 1e-5, 1e-8);
        assert!(!m(&attrs(json!({"weight": "heavy"})), &attrs(json!({}))));
        assert!(m(&attrs(json!({})), &attrs(json!({"weight": 1}))));
    }

    #[test]
    fn numerical_edge_sorts_before_comparing() {
        let m = numerical_edge_match("weight", 0.0, 1e-5, 1e-8);
        let e1 = [attrs(json!({"weight": 2.0})), attrs(json!({"weight": 1.0}))];
        let e2 = [attrs(json!({"weight": 1.0})), attrs(json!({"weight": 2.0}))];
        let e3 = [attrs(json!({"weight": 1.0})), attrs(json!({"weight": 3.0}))];

        assert!(m(&e1, &e2));
        assert!(!m(&e1, &e3));
    }

    #[test]
    fn generic_node_applies_operator() {
        let m = generic_node_match("rank", json!(0), |a, b| a.as_i64() >= b.as_i64());
        assert!(m(&attrs(json!({"rank": 3})), &attrs(json!({"rank": 2}))));
        assert!(!m(&attrs(json!({})), &attrs(json!({"rank": 2}))));
    }

    #[test]
    fn generic_edge_finds_a_pairing() {
        let m = generic_edge_match("cap", json!(0), |a, b| a.as_i64() >= b.as_i64());
        let e1 = [attrs(json!({"cap": 1})), attrs(json!({"cap": 5}))];
        let e2 = [attrs(json!({"cap": 4})), attrs(json!({"cap": 1}))];
        let e3 = [attrs(json!({"cap": 4})), attrs(json!({"cap": 4}))];

        assert!(m(&e1, &e2));
        assert!(!m(&e1, &e3));
    }
}
