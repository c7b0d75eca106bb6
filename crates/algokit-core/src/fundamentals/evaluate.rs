// crates/algokit-core/src/fundamentals/evaluate.rs
// ============================================================================
// Module: Two-Stack Expression Evaluation
// Description: Dijkstra's operator/operand stack evaluator.
// Purpose: Evaluate fully parenthesized arithmetic expressions.
// Dependencies: thiserror, crate::fundamentals::stack
// ============================================================================

//! ## Overview
//! Tokens are separated by whitespace. `(` is ignored, operators are pushed
//! onto the operator stack, numbers onto the value stack, and every `)` pops
//! one operator and applies it to the top value(s).
//!
//! ```text
//! ( 1 + ( ( 2 + 3 ) * ( 4 * 5 ) ) )   => 101
//! ( ( 1 + sqrt ( 5.0 ) ) / 2.0 )      => 1.618033988749895
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::fundamentals::stack::VecStack;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures raised while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A `)` had no operator or not enough operands to consume.
    #[error("unbalanced expression at token {position}")]
    Unbalanced {
        /// Zero-based token position.
        position: usize,
    },
    /// A token is neither an operator, a parenthesis, nor a number.
    #[error("unknown token '{token}' at position {position}")]
    UnknownToken {
        /// Offending token.
        token: String,
        /// Zero-based token position.
        position: usize,
    },
    /// An operation produced NaN or an infinity.
    #[error("operator '{operator}' produced a non-finite result")]
    NonFinite {
        /// Operator symbol.
        operator: &'static str,
    },
    /// The expression did not reduce to exactly one value.
    #[error("expression left {operands} operand(s) and {operators} operator(s) unconsumed")]
    Leftover {
        /// Values remaining on the value stack.
        operands: usize,
        /// Operators remaining on the operator stack.
        operators: usize,
    },
}

// ============================================================================
// SECTION: Operators
// ============================================================================

/// Supported operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Unary square root.
    Sqrt,
}

impl Operator {
    /// Parses an operator token.
    fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// Returns the operator's source symbol.
    const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Sqrt => "sqrt",
        }
    }
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates a fully parenthesized, whitespace-separated expression.
///
/// # Errors
///
/// Returns [`EvalError`] when the expression is malformed, contains unknown
/// tokens, or an operation yields a non-finite value.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let mut ops: VecStack<Operator> = VecStack::new();
    let mut vals: VecStack<f64> = VecStack::new();

    for (position, token) in expr.split_whitespace().enumerate() {
        if token == "(" {
            continue;
        }
        if token == ")" {
            let op = ops.pop().ok_or(EvalError::Unbalanced {
                position,
            })?;
            let value = apply(op, &mut vals, position)?;
            vals.push(value);
            continue;
        }
        if let Some(op) = Operator::parse(token) {
            ops.push(op);
            continue;
        }
        let value = token.parse::<f64>().map_err(|_| EvalError::UnknownToken {
            token: token.to_string(),
            position,
        })?;
        vals.push(value);
    }

    match (vals.pop(), vals.len(), ops.len()) {
        (Some(value), 0, 0) => Ok(value),
        (top, rest, operators) => Err(EvalError::Leftover {
            operands: rest + usize::from(top.is_some()),
            operators,
        }),
    }
}

/// Pops the operands for `op` and returns the result.
fn apply(op: Operator, vals: &mut VecStack<f64>, position: usize) -> Result<f64, EvalError> {
    let unbalanced = EvalError::Unbalanced {
        position,
    };
    let right = vals.pop().ok_or_else(|| unbalanced.clone())?;
    let value = if op == Operator::Sqrt {
        right.sqrt()
    } else {
        let left = vals.pop().ok_or(unbalanced)?;
        match op {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div | Operator::Sqrt => left / right,
        }
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite {
            operator: op.symbol(),
        })
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::EvalError;
    use super::evaluate;

    #[test]
    fn evaluates_nested_expression() {
        assert_eq!(evaluate("( 1 + ( ( 2 + 3 ) * ( 4 * 5 ) ) )"), Ok(101.0));
    }

    #[test]
    fn evaluates_golden_ratio() {
        let value = evaluate("( ( 1 + sqrt ( 5.0 ) ) / 2.0 )");
        assert_eq!(value, Ok(1.618_033_988_749_895));
    }

    #[test]
    fn rejects_division_by_zero() {
        assert_eq!(
            evaluate("( 1 / 0 )"),
            Err(EvalError::NonFinite {
                operator: "/"
            })
        );
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!(matches!(evaluate("( 1 % 2 )"), Err(EvalError::UnknownToken { .. })));
    }
}
