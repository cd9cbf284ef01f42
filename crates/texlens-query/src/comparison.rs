//! Resolution comparison terms.
//!
//! Two shapes are recognized, both anchored to the whole token:
//!
//! ```text
//! prefix:   >2048   <=512   =1024      measure OP value
//! postfix:  2048<   512>               value reads "N, smaller" / "N, bigger"
//! ```
//!
//! A postfix `2048<` means the record is bigger than 2048, so the literal
//! symbol is mirrored: it evaluates as `measure > 2048`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::op::CompareOp;

static PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(>=|<=|>|<|=)([0-9]+)$").expect("valid prefix pattern"));

static POSTFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)(<|>)$").expect("valid postfix pattern"));

/// A parsed resolution comparison: `measure OP value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comparison {
    pub op: CompareOp,
    pub value: u32,
}

impl Comparison {
    pub fn new(op: CompareOp, value: u32) -> Self {
        Comparison { op, value }
    }

    /// Parses a trimmed token with any negation marker already removed.
    ///
    /// Returns `None` for anything that is not a comparison, including
    /// values that overflow `u32`. Never fails.
    pub fn parse(token: &str) -> Option<Comparison> {
        if let Some(caps) = PREFIX.captures(token) {
            let op = CompareOp::from_symbol(&caps[1])?;
            let value = caps[2].parse().ok()?;
            return Some(Comparison { op, value });
        }

        if let Some(caps) = POSTFIX.captures(token) {
            let value = caps[1].parse().ok()?;
            let op = CompareOp::from_symbol(&caps[2])?.reversed();
            return Some(Comparison { op, value });
        }

        None
    }

    /// Evaluates the comparison against a record's size measure.
    pub fn matches(&self, measure: u32) -> bool {
        self.op.eval(measure, self.value)
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.op, self.value)
    }
}
