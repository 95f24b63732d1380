//! Allow-listed math vocabulary.
//!
//! The table below is the *entire* set of names a user expression may
//! reference besides `x`. Resolution happens once at parse time, so an
//! evaluated AST only ever dispatches on [`Builtin`] variants; there is
//! no name lookup (and nothing to look up) during iteration.

use super::errors::EvalError;

/// Allow-listed named functions.
///
/// One argument unless noted:
/// - `pow(base, exp)` and `atan2(y, x)` take two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Log,
    Log2,
    Log10,
    Sqrt,
    Abs,
    Floor,
    Ceil,
    Pow,
    Atan2,
}

impl Builtin {
    pub(crate) fn lookup(name: &str) -> Option<Builtin> {
        let builtin = match name {
            "sin" => Builtin::Sin,
            "cos" => Builtin::Cos,
            "tan" => Builtin::Tan,
            "asin" => Builtin::Asin,
            "acos" => Builtin::Acos,
            "atan" => Builtin::Atan,
            "sinh" => Builtin::Sinh,
            "cosh" => Builtin::Cosh,
            "tanh" => Builtin::Tanh,
            "exp" => Builtin::Exp,
            "log" => Builtin::Log,
            "log2" => Builtin::Log2,
            "log10" => Builtin::Log10,
            "sqrt" => Builtin::Sqrt,
            "abs" => Builtin::Abs,
            "floor" => Builtin::Floor,
            "ceil" => Builtin::Ceil,
            "pow" => Builtin::Pow,
            "atan2" => Builtin::Atan2,
            _ => return None,
        };
        Some(builtin)
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Asin => "asin",
            Builtin::Acos => "acos",
            Builtin::Atan => "atan",
            Builtin::Sinh => "sinh",
            Builtin::Cosh => "cosh",
            Builtin::Tanh => "tanh",
            Builtin::Exp => "exp",
            Builtin::Log => "log",
            Builtin::Log2 => "log2",
            Builtin::Log10 => "log10",
            Builtin::Sqrt => "sqrt",
            Builtin::Abs => "abs",
            Builtin::Floor => "floor",
            Builtin::Ceil => "ceil",
            Builtin::Pow => "pow",
            Builtin::Atan2 => "atan2",
        }
    }

    pub(crate) const fn arity(self) -> usize {
        match self {
            Builtin::Pow | Builtin::Atan2 => 2,
            _ => 1,
        }
    }

    /// Applies the function to already-evaluated arguments.
    ///
    /// `args.len() == self.arity()` is guaranteed by the parser's
    /// arity check. `x` is the bound variable's current value, carried
    /// only for error reporting.
    ///
    /// # Errors
    /// - [`EvalError::DomainError`]    : `log*` of a non-positive value,
    ///   `sqrt` of a negative, `asin`/`acos` outside `[-1, 1]`
    /// - [`EvalError::DivisionByZero`] : `pow(0, negative)`
    /// - [`EvalError::NonRealResult`]  : `pow(negative, non-integer)`
    pub(crate) fn apply(self, args: &[f64], x: f64) -> Result<f64, EvalError> {
        let a = args[0];
        let value = match self {
            Builtin::Sin => a.sin(),
            Builtin::Cos => a.cos(),
            Builtin::Tan => a.tan(),
            Builtin::Atan => a.atan(),
            Builtin::Sinh => a.sinh(),
            Builtin::Cosh => a.cosh(),
            Builtin::Tanh => a.tanh(),
            Builtin::Exp => a.exp(),
            Builtin::Abs => a.abs(),
            Builtin::Floor => a.floor(),
            Builtin::Ceil => a.ceil(),

            Builtin::Asin | Builtin::Acos => {
                if !(-1.0..=1.0).contains(&a) {
                    return Err(self.domain_error(a, x));
                }
                match self {
                    Builtin::Asin => a.asin(),
                    _ => a.acos(),
                }
            }

            Builtin::Log | Builtin::Log2 | Builtin::Log10 => {
                if a <= 0.0 {
                    return Err(self.domain_error(a, x));
                }
                match self {
                    Builtin::Log => a.ln(),
                    Builtin::Log2 => a.log2(),
                    _ => a.log10(),
                }
            }

            Builtin::Sqrt => {
                if a < 0.0 {
                    return Err(self.domain_error(a, x));
                }
                a.sqrt()
            }

            Builtin::Pow => checked_pow(a, args[1], x)?,
            Builtin::Atan2 => a.atan2(args[1]),
        };

        Ok(value)
    }

    fn domain_error(self, arg: f64, x: f64) -> EvalError {
        EvalError::DomainError {
            name: self.name(),
            arg,
            x,
        }
    }
}

/// Allow-listed constants.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}

/// Real-valued exponentiation shared by `pow(..)` and the `**`/`^`
/// operator.
///
/// A negative base with an integer exponent is fine; a negative base
/// with a fractional exponent would be complex and is rejected with
/// [`EvalError::NonRealResult`]. `0` raised to a negative power is a
/// disguised division by zero.
pub(crate) fn checked_pow(base: f64, exponent: f64, x: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero { x });
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::NonRealResult { base, exponent, x });
    }
    Ok(base.powf(exponent))
}
