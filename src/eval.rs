// ABOUTME: Evaluator module executing Liz expressions against an environment

use crate::env::Environment;
use crate::error::LizError;
use crate::value::Value;
use std::collections::VecDeque;
use std::rc::Rc;

/// Evaluates a single expression. Symbols resolve through the environment
/// chain, S-expressions reduce, and every other value is itself.
pub fn eval(env: &Rc<Environment>, expr: Value) -> Result<Value, LizError> {
    match expr {
        Value::Sym(name) => env
            .get(&name)
            .ok_or_else(|| LizError::UnboundSymbol(name)),
        Value::SExp(items) => eval_sexp(env, items),
        other => Ok(other),
    }
}

/// Reduces an S-expression: evaluate every child left to right, lift the
/// first error, then apply the head to the rest.
///
/// All children are evaluated before the error scan, so side effects of
/// later children still happen when an earlier one fails.
fn eval_sexp(env: &Rc<Environment>, items: Vec<Value>) -> Result<Value, LizError> {
    let mut evaluated = Vec::with_capacity(items.len());
    let mut first_err = None;
    for item in items {
        match eval(env, item) {
            Ok(value) => evaluated.push(value),
            Err(e) => {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
    }
    if let Some(err) = first_err {
        return Err(err);
    }

    if evaluated.is_empty() {
        return Ok(Value::SExp(evaluated));
    }
    if evaluated.len() == 1 {
        return Ok(evaluated.remove(0));
    }

    let f = evaluated.remove(0);
    match f {
        Value::Builtin(_) | Value::Lambda { .. } => call(env, f, evaluated),
        other => Err(LizError::NotAFunction {
            got: other.type_name(),
        }),
    }
}

/// Applies a function value to already-evaluated arguments
pub fn call(env: &Rc<Environment>, f: Value, args: Vec<Value>) -> Result<Value, LizError> {
    match f {
        Value::Builtin(func) => func(env, args),
        Value::Lambda {
            params,
            body,
            env: captured,
        } => apply_lambda(params, body, captured, args),
        other => Err(LizError::NotAFunction {
            got: other.type_name(),
        }),
    }
}

/// Binds arguments to formals in a fresh frame chained to the lambda's
/// captured environment, then evaluates the body or returns a partially
/// applied lambda.
fn apply_lambda(
    params: Vec<String>,
    body: Vec<Value>,
    captured: Rc<Environment>,
    args: Vec<Value>,
) -> Result<Value, LizError> {
    let given = args.len();
    let total = params.len();
    let frame = Environment::with_parent(captured);

    let mut params: VecDeque<String> = params.into();
    let mut args: VecDeque<Value> = args.into();

    while let Some(value) = args.pop_front() {
        let Some(sym) = params.pop_front() else {
            return Err(LizError::TooManyArguments {
                got: given,
                expected: total,
            });
        };
        if sym == "&" {
            // The single symbol after `&` binds the remaining arguments
            // as a Q-expression
            let rest_name = match params.pop_front() {
                Some(name) if params.is_empty() => name,
                _ => return Err(LizError::InvalidFormals),
            };
            let mut rest = vec![value];
            rest.extend(args.drain(..));
            frame.define(rest_name, Value::QExp(rest));
            break;
        }
        frame.define(sym, value);
    }

    // A rest parameter declared but no variadic arguments supplied
    if params.front().is_some_and(|sym| sym == "&") {
        if params.len() != 2 {
            return Err(LizError::InvalidFormals);
        }
        params.pop_front();
        if let Some(rest_name) = params.pop_front() {
            frame.define(rest_name, Value::QExp(Vec::new()));
        }
    }

    if params.is_empty() {
        // Retype the body to an S-expression and evaluate it in the frame
        return eval(&frame, Value::SExp(body));
    }

    // Partial application: the consumed bindings stay in the frame
    Ok(Value::Lambda {
        params: params.into(),
        body,
        env: frame,
    })
}
