use std::collections::HashMap;

use crate::error::RuntimeError;
use crate::ir::ast::{BinaryOperator, ComparisonOperator, Expression};
use super::canvas::Canvas;

pub type Variables = HashMap<String, i32>;

/// Вычисляет выражение в целое число. Логические значения - 1 и 0
pub fn evaluate(expr: &Expression, variables: &Variables, canvas: &Canvas) -> Result<i32, RuntimeError> {
    match expr {
        Expression::Number(n) => Ok(*n),
        Expression::Boolean(b) => Ok(*b as i32),
        Expression::String(value) => Err(RuntimeError::UnexpectedString {
            value: value.clone(),
        }),
        Expression::Variable(name) => variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() }),
        Expression::BinaryOp { left, op, right } => {
            let left = evaluate(left, variables, canvas)?;
            let right = evaluate(right, variables, canvas)?;
            binary_op(left, *op, right)
        }
        Expression::Comparison { left, op, right } => {
            let left = evaluate(left, variables, canvas)?;
            let right = evaluate(right, variables, canvas)?;
            let result = match op {
                ComparisonOperator::Equal => left == right,
                ComparisonOperator::NotEqual => left != right,
                ComparisonOperator::Greater => left > right,
                ComparisonOperator::Less => left < right,
                ComparisonOperator::GreaterEqual => left >= right,
                ComparisonOperator::LessEqual => left <= right,
            };
            Ok(result as i32)
        }
        Expression::FunctionCall { name, args } => call_builtin(name, args, variables, canvas),
    }
}

fn binary_op(left: i32, op: BinaryOperator, right: i32) -> Result<i32, RuntimeError> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Subtract => left.checked_sub(right),
        BinaryOperator::Multiply => left.checked_mul(right),
        BinaryOperator::Divide | BinaryOperator::Modulo if right == 0 => {
            return Err(RuntimeError::DivisionByZero);
        }
        BinaryOperator::Divide => left.checked_div(right),
        BinaryOperator::Modulo => left.checked_rem(right),
    };
    result.ok_or(RuntimeError::ArithmeticOverflow)
}

/// Встроенные функции и их арность
const BUILTINS: &[(&str, usize)] = &[
    ("GetCanvasSize", 0),
    ("GetActualX", 0),
    ("GetActualY", 0),
    ("GetColorCount", 5),
    ("IsBrushColor", 1),
    ("IsCanvasColor", 3),
];

fn call_builtin(
    name: &str,
    args: &[Expression],
    variables: &Variables,
    canvas: &Canvas,
) -> Result<i32, RuntimeError> {
    let Some(&(_, expected)) = BUILTINS.iter().find(|(builtin, _)| *builtin == name) else {
        return Err(RuntimeError::UnknownFunction {
            name: name.to_string(),
        });
    };
    // Арность проверяем до вычисления аргументов
    if args.len() != expected {
        return Err(RuntimeError::Arity {
            function: name.to_string(),
            expected,
            found: args.len(),
        });
    }

    let int_arg = |position: usize| evaluate(&args[position], variables, canvas);

    match name {
        "GetCanvasSize" => Ok(canvas.canvas_size()),
        "GetActualX" => canvas.actual_x(),
        "GetActualY" => canvas.actual_y(),
        "GetColorCount" => {
            let color = string_arg(name, args, 0)?;
            Ok(canvas.color_count(color, int_arg(1)?, int_arg(2)?, int_arg(3)?, int_arg(4)?))
        }
        "IsBrushColor" => {
            let color = string_arg(name, args, 0)?;
            Ok(canvas.is_brush_color(color) as i32)
        }
        "IsCanvasColor" => {
            let color = string_arg(name, args, 0)?;
            let vertical = int_arg(1)?;
            let horizontal = int_arg(2)?;
            Ok(canvas.is_canvas_color(color, vertical, horizontal)? as i32)
        }
        _ => Err(RuntimeError::UnknownFunction {
            name: name.to_string(),
        }),
    }
}

/// Строковый параметр принимает только строковый литерал (или имя цвета)
fn string_arg<'a>(function: &str, args: &'a [Expression], position: usize) -> Result<&'a str, RuntimeError> {
    match &args[position] {
        Expression::String(value) => Ok(value),
        _ => Err(RuntimeError::ExpectedString {
            function: function.to_string(),
            position: position + 1,
        }),
    }
}
