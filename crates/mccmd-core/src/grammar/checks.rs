//! Deferred semantic checkers for numeric values: `nodes.py`'s
//! `Numeric.ranged`/`.none_of`/`.one_of`, re-expressed as `CheckerFn`
//! values attached via `Graph::checker`.

use crate::diagnostic::{keys, Diagnostic, DiagnosticKind};
use crate::node::{CheckerFn, Value};
use crate::position::{Position, Span};

fn zero_span() -> Span {
    let p = Position::start();
    Span::new(p, p)
}

pub fn ranged_checker(min: f64, max: f64) -> CheckerFn {
    Box::new(move |value: &Value| {
        let n = value.as_f64()?;
        if min <= n && n <= max {
            None
        } else {
            Some(
                Diagnostic::new(zero_span(), DiagnosticKind::Semantic, keys::NUMBER_OUT_OF_RANGE)
                    .with_kwarg("min", min)
                    .with_kwarg("max", max),
            )
        }
    })
}

pub fn min_checker(min: f64) -> CheckerFn {
    ranged_checker(min, f64::INFINITY)
}

pub fn none_of_checker(excluded: &'static [i64]) -> CheckerFn {
    Box::new(move |value: &Value| {
        let n = value.as_f64()?;
        if excluded.iter().any(|e| *e as f64 == n) {
            Some(Diagnostic::new(zero_span(), DiagnosticKind::Semantic, keys::NUMBER_CANT_BE).with_kwarg("num", n))
        } else {
            None
        }
    })
}

pub fn one_of_checker(allowed: &'static [i64]) -> CheckerFn {
    Box::new(move |value: &Value| {
        let n = value.as_f64()?;
        if allowed.iter().any(|a| *a as f64 == n) {
            None
        } else {
            Some(Diagnostic::new(zero_span(), DiagnosticKind::Semantic, keys::NUMBER_MUST_BE))
        }
    })
}
