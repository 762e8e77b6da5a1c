//! Scaling equations over the decoded value `x`
//!
//! User-supplied expressions are parsed and evaluated by the sandboxed
//! `evalexpr` engine; no host code is ever generated from them. An
//! equation is accepted at configuration time only if it references `x`
//! and survives a trial evaluation with `x = 1`.
//!
//! Supported syntax: numeric literals, `x`, `+ - * / % ^`, comparisons,
//! parentheses, and the registered bit helpers `shl(v, n)`, `shr(v, n)`,
//! `band(v, m)`, `bor(v, m)`.

use crate::error::{CalcError, Result};
use evalexpr::{ContextWithMutableFunctions, ContextWithMutableVariables, Value};
use regex::Regex;

/// A validated scaling equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingEquation {
    text: String,
}

impl ScalingEquation {
    /// Validate and compile an equation
    ///
    /// Fails if the text does not reference `x` as a standalone symbol,
    /// or if the trial evaluation with `x = 1` errors.
    pub fn compile(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let re = Regex::new(r"\bx\b")
            .map_err(|e| CalcError::equation(format!("Regex error: {}", e)))?;
        if !re.is_match(trimmed) {
            return Err(CalcError::equation(format!(
                "equation '{}' does not reference the decoded value 'x'",
                trimmed
            )));
        }

        evaluate(trimmed, 1.0)?;
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Evaluate against a decoded value
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        evaluate(&self.text, x)
    }

    /// The stored equation text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Evaluate an equation text with `x` bound to the given value
///
/// Total over the text: any parse or evaluation problem comes back as a
/// `CalcError`, never a panic.
pub fn evaluate(text: &str, x: f64) -> Result<f64> {
    let mut context = evalexpr::HashMapContext::new();
    context
        .set_value("x".to_string(), Value::from(x))
        .map_err(|e| CalcError::equation(format!("Failed to set variable x: {}", e)))?;

    register_bit_functions(&mut context)?;

    let result = evalexpr::eval_with_context(text, &context)
        .map_err(|e| CalcError::equation(format!("Failed to evaluate '{}': {}", text, e)))?;

    value_to_f64(result, text)
}

/// Register bit-manipulation helpers with the evalexpr context
///
/// evalexpr has no bitwise operators, so shifting and masking are exposed
/// as functions operating on the truncated integer value.
fn register_bit_functions(context: &mut evalexpr::HashMapContext) -> Result<()> {
    use evalexpr::{EvalexprError, Function};

    // Helper to convert Value to f64 (handles both Int and Float)
    fn to_f64(value: &Value) -> std::result::Result<f64, EvalexprError> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            _ => Err(EvalexprError::expected_number(value.clone())),
        }
    }

    fn binary_int_args(args: &Value) -> std::result::Result<(i64, i64), EvalexprError> {
        let tuple = args.as_tuple()?;
        if tuple.len() != 2 {
            return Err(EvalexprError::expected_number(args.clone()));
        }
        Ok((to_f64(&tuple[0])? as i64, to_f64(&tuple[1])? as i64))
    }

    // shr(value, bits)
    context
        .set_function(
            "shr".to_string(),
            Function::new(|args| {
                let (value, bits) = binary_int_args(args)?;
                Ok(Value::Float((value >> (bits & 63)) as f64))
            }),
        )
        .map_err(|e| CalcError::equation(format!("Failed to register shr: {}", e)))?;

    // shl(value, bits)
    context
        .set_function(
            "shl".to_string(),
            Function::new(|args| {
                let (value, bits) = binary_int_args(args)?;
                Ok(Value::Float((value << (bits & 63)) as f64))
            }),
        )
        .map_err(|e| CalcError::equation(format!("Failed to register shl: {}", e)))?;

    // band(value, mask)
    context
        .set_function(
            "band".to_string(),
            Function::new(|args| {
                let (value, mask) = binary_int_args(args)?;
                Ok(Value::Float((value & mask) as f64))
            }),
        )
        .map_err(|e| CalcError::equation(format!("Failed to register band: {}", e)))?;

    // bor(value, mask)
    context
        .set_function(
            "bor".to_string(),
            Function::new(|args| {
                let (value, mask) = binary_int_args(args)?;
                Ok(Value::Float((value | mask) as f64))
            }),
        )
        .map_err(|e| CalcError::equation(format!("Failed to register bor: {}", e)))?;

    Ok(())
}

/// Convert evalexpr Value to f64
fn value_to_f64(value: Value, text: &str) -> Result<f64> {
    match value {
        Value::Float(f) => Ok(f),
        Value::Int(i) => Ok(i as f64),
        Value::Boolean(b) => Ok(if b { 1.0 } else { 0.0 }),
        _ => Err(CalcError::equation(format!(
            "Equation did not evaluate to a number: {}",
            text
        ))),
    }
}
