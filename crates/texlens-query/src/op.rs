//! Comparison operators for resolution terms.
//!
//! The [`CompareOp`] enum holds the five operators a resolution term can
//! carry. Evaluation always reads as `measure OP value`.

use std::cmp::Ordering;

/// Comparison operator for a resolution term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Greater than (`>`).
    Gt,
    /// Less than (`<`).
    Lt,
    /// Greater than or equal (`>=`).
    Gte,
    /// Less than or equal (`<=`).
    Lte,
    /// Equal (`=`).
    Eq,
}

impl CompareOp {
    /// Parses an operator symbol. Returns `None` for anything else.
    pub fn from_symbol(symbol: &str) -> Option<CompareOp> {
        match symbol {
            ">" => Some(CompareOp::Gt),
            "<" => Some(CompareOp::Lt),
            ">=" => Some(CompareOp::Gte),
            "<=" => Some(CompareOp::Lte),
            "=" => Some(CompareOp::Eq),
            _ => None,
        }
    }

    /// Mirrors the operator so that `a OP b` holds iff `b OP.reversed() a`.
    ///
    /// - `Gt` <-> `Lt`
    /// - `Gte` <-> `Lte`
    /// - `Eq` unchanged
    pub fn reversed(self) -> CompareOp {
        match self {
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Gte => CompareOp::Lte,
            CompareOp::Lte => CompareOp::Gte,
            CompareOp::Eq => CompareOp::Eq,
        }
    }

    /// Evaluates the operator given the ordering of `measure` against `value`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Gte => ordering != Ordering::Less,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
        }
    }

    /// Evaluates `measure OP value`.
    pub fn eval(self, measure: u32, value: u32) -> bool {
        self.eval_ordering(measure.cmp(&value))
    }

    /// Returns the symbol of this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
            CompareOp::Eq => "=",
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
