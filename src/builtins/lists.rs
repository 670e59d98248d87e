//! List operations over Q-expressions: list, head, tail, join, eval
//!
//! - `list`: collect the arguments into a Q-expression
//! - `head`: Q-expression holding only the first element
//! - `tail`: Q-expression without the first element
//! - `join`: concatenate Q-expressions left to right
//! - `eval`: retype a Q-expression to an S-expression and evaluate it

use super::{expect_arity, pop_qexp};
use crate::env::Environment;
use crate::error::LizError;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

/// The argument list retyped as a Q-expression
pub fn builtin_list(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    Ok(Value::QExp(args))
}

pub fn builtin_head(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    expect_arity("head", &args, 1)?;
    let mut args = args.into_iter();
    let items = pop_qexp("head", 0, &mut args)?;
    match items.into_iter().next() {
        Some(first) => Ok(Value::QExp(vec![first])),
        None => Err(LizError::empty_list("head", 0)),
    }
}

pub fn builtin_tail(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    expect_arity("tail", &args, 1)?;
    let mut args = args.into_iter();
    let mut items = pop_qexp("tail", 0, &mut args)?;
    if items.is_empty() {
        return Err(LizError::empty_list("tail", 0));
    }
    items.remove(0);
    Ok(Value::QExp(items))
}

pub fn builtin_join(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    for (i, arg) in args.iter().enumerate() {
        if !matches!(arg, Value::QExp(_)) {
            return Err(LizError::type_mismatch("join", i, arg, "Q-Expression"));
        }
    }

    let mut joined = Vec::new();
    for arg in args {
        if let Value::QExp(items) = arg {
            joined.extend(items);
        }
    }
    Ok(Value::QExp(joined))
}

pub fn builtin_eval(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    expect_arity("eval", &args, 1)?;
    let mut args = args.into_iter();
    let items = pop_qexp("eval", 0, &mut args)?;
    eval(env, Value::SExp(items))
}

/// Register all list builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.define("list".to_string(), Value::Builtin(builtin_list));
    env.define("head".to_string(), Value::Builtin(builtin_head));
    env.define("tail".to_string(), Value::Builtin(builtin_tail));
    env.define("join".to_string(), Value::Builtin(builtin_join));
    env.define("eval".to_string(), Value::Builtin(builtin_eval));
}
