//! Arithmetic operations: +, -, *, /, %, ^
//!
//! Left folds over a uniform numeric argument list. Arguments must be all
//! Longs or all Doubles; there is no promotion, so a mix is rejected the
//! same way a non-number is.
//!
//! - `+`, `-`, `*`: sum, difference, product (`-` with one argument negates)
//! - `/`, `%`: quotient and remainder, integer for Longs
//! - `^`: exponentiation

use crate::env::Environment;
use crate::error::LizError;
use crate::value::Value;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

fn fold_longs(op: Op, nums: Vec<i64>) -> Result<Value, LizError> {
    let Some((&first, rest)) = nums.split_first() else {
        return Err(LizError::NonNumber);
    };
    if rest.is_empty() && matches!(op, Op::Sub) {
        return Ok(Value::Long(first.wrapping_neg()));
    }

    let mut acc = first;
    for &n in rest {
        acc = match op {
            Op::Add => acc.wrapping_add(n),
            Op::Sub => acc.wrapping_sub(n),
            Op::Mul => acc.wrapping_mul(n),
            Op::Div => {
                if n == 0 {
                    return Err(LizError::DivisionByZero);
                }
                acc.wrapping_div(n)
            }
            Op::Rem => {
                if n == 0 {
                    return Err(LizError::DivisionByZero);
                }
                acc.wrapping_rem(n)
            }
            Op::Pow => (acc as f64).powf(n as f64) as i64,
        };
    }
    Ok(Value::Long(acc))
}

fn fold_doubles(op: Op, nums: Vec<f64>) -> Result<Value, LizError> {
    let Some((&first, rest)) = nums.split_first() else {
        return Err(LizError::NonNumber);
    };
    if rest.is_empty() && matches!(op, Op::Sub) {
        return Ok(Value::Double(-first));
    }

    let mut acc = first;
    for &n in rest {
        acc = match op {
            Op::Add => acc + n,
            Op::Sub => acc - n,
            Op::Mul => acc * n,
            Op::Div => {
                if n == 0.0 {
                    return Err(LizError::DivisionByZero);
                }
                acc / n
            }
            Op::Rem => {
                if n == 0.0 {
                    return Err(LizError::DivisionByZero);
                }
                acc % n
            }
            Op::Pow => acc.powf(n),
        };
    }
    Ok(Value::Double(acc))
}

fn builtin_op(op: Op, args: Vec<Value>) -> Result<Value, LizError> {
    let longs: Option<Vec<i64>> = args
        .iter()
        .map(|arg| match arg {
            Value::Long(n) => Some(*n),
            _ => None,
        })
        .collect();
    if let Some(longs) = longs {
        return fold_longs(op, longs);
    }

    let doubles: Option<Vec<f64>> = args
        .iter()
        .map(|arg| match arg {
            Value::Double(n) => Some(*n),
            _ => None,
        })
        .collect();
    if let Some(doubles) = doubles {
        return fold_doubles(op, doubles);
    }

    Err(LizError::NonNumber)
}

pub fn builtin_add(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    builtin_op(Op::Add, args)
}

pub fn builtin_sub(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    builtin_op(Op::Sub, args)
}

pub fn builtin_mul(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    builtin_op(Op::Mul, args)
}

pub fn builtin_div(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    builtin_op(Op::Div, args)
}

pub fn builtin_rem(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    builtin_op(Op::Rem, args)
}

pub fn builtin_pow(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    builtin_op(Op::Pow, args)
}

/// Register all arithmetic builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.define("+".to_string(), Value::Builtin(builtin_add));
    env.define("-".to_string(), Value::Builtin(builtin_sub));
    env.define("*".to_string(), Value::Builtin(builtin_mul));
    env.define("/".to_string(), Value::Builtin(builtin_div));
    env.define("%".to_string(), Value::Builtin(builtin_rem));
    env.define("^".to_string(), Value::Builtin(builtin_pow));
}
