//! Symbolic interpolating polynomials.
//!
//! An [`Equation`] is an ordered list of signed [`Term`]s over one
//! [`Variable`]. Each term is `coefficient · ∏ factors / divisor`:
//!
//! ```text
//! Newton-Gregory : f(x) = 0.00 + 1.00(u) / 1 + 2.00(u)(u - 1) / 2
//! Lagrange       : f(x) = 0.00 * ((x - 1.00) / (0.00 - 1.00)) + 1.00 * ((x - 0.00) / (1.00 - 0.00))
//! ```
//!
//! The same structure is both rendered ([`Equation::render`]) and evaluated
//! ([`Equation::evaluate`]); interpolators compute their estimates through it.
//! Markup escaping is left to whoever displays the string.

use std::fmt;


/// Output markup for [`Equation::render`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Plain,
    Latex,
}

/// Free variable the factors are written in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Variable {
    /// `x` itself.
    Abscissa,
    /// `u = (x - origin) / step`.
    Normalized { origin: f64, step: f64 },
}

impl Variable {
    /// Maps a query abscissa onto this variable.
    #[inline]
    pub fn map(&self, x: f64) -> f64 {
        match *self {
            Variable::Abscissa => x,
            Variable::Normalized { origin, step } => (x - origin) / step,
        }
    }

    /// Definition of the variable, e.g. `u = (x - 0.00) / 1.00`.
    /// `None` for [`Variable::Abscissa`].
    pub fn legend(&self, notation: Notation) -> Option<String> {
        match *self {
            Variable::Abscissa => None,
            Variable::Normalized { origin, step } => Some(match notation {
                Notation::Plain => format!("u = ({}) / {}", minus("x", origin), fixed2(step)),
                Notation::Latex => format!("u = \\frac{{{}}}{{{}}}", minus("x", origin), fixed2(step)),
            }),
        }
    }
}

/// Multiplicative factor of a term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Factor {
    /// `(u + offset)`; written `(u)`, `(u - j)` or `(u + j)`.
    Shifted { offset: f64 },
    /// `(x - node) / (pivot - node)`.
    Ratio { node: f64, pivot: f64 },
}

impl Factor {
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        match *self {
            Factor::Shifted { offset } => t + offset,
            Factor::Ratio { node, pivot } => (t - node) / (pivot - node),
        }
    }

    // appends the factor, including its joiner to whatever precedes it
    fn render_into(&self, out: &mut String, notation: Notation) {
        match (*self, notation) {
            (Factor::Shifted { offset }, _) => {
                if offset == 0.0 {
                    out.push_str("(u)");
                } else if offset < 0.0 {
                    out.push_str(&format!("(u - {})", -offset));
                } else {
                    out.push_str(&format!("(u + {})", offset));
                }
            }
            (Factor::Ratio { node, pivot }, Notation::Plain) => {
                out.push_str(&format!(
                    " * (({}) / ({}))",
                    minus("x", node),
                    minus(&fixed2(pivot), node),
                ));
            }
            (Factor::Ratio { node, pivot }, Notation::Latex) => {
                out.push_str(&format!(
                    " \\cdot \\frac{{{}}}{{{}}}",
                    minus("x", node),
                    minus(&fixed2(pivot), node),
                ));
            }
        }
    }
}

/// `coefficient · ∏ factors / divisor`.
///
/// An integral divisor is printed with every digit of its `f64` value. For a
/// factorial divisor that is exact up to `22!`; from `23!` on the digits are
/// those of the nearest `f64`, the same value [`Term::value`] divides by.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    coefficient: f64,
    factors: Vec<Factor>,
    divisor: Option<f64>,
}

impl Term {
    pub fn new(coefficient: f64, factors: Vec<Factor>, divisor: Option<f64>) -> Self {
        Self { coefficient, factors, divisor }
    }

    pub fn constant(coefficient: f64) -> Self {
        Self::new(coefficient, Vec::new(), None)
    }

    #[inline] pub fn coefficient(&self) -> f64 { self.coefficient }
    #[inline] pub fn factors(&self) -> &[Factor] { &self.factors }
    #[inline] pub fn divisor(&self) -> Option<f64> { self.divisor }

    /// Value of the term at variable value `t`.
    ///
    /// Multiplies left to right, divides last.
    pub fn value(&self, t: f64) -> f64 {
        let mut v = self.coefficient;
        for factor in &self.factors {
            v *= factor.value(t);
        }
        if let Some(d) = self.divisor {
            v /= d;
        }
        v
    }

    fn render_body(&self, notation: Notation) -> String {
        let mut body = format!("{:.2}", self.coefficient.abs());
        for factor in &self.factors {
            factor.render_into(&mut body, notation);
        }
        match (self.divisor, notation) {
            (None, _) => body,
            (Some(d), Notation::Plain) => format!("{} / {}", body, divisor_text(d)),
            (Some(d), Notation::Latex) => format!("\\frac{{{}}}{{{}}}", body, divisor_text(d)),
        }
    }
}

// `{}` prints the shortest round-trip digits, which drift from the exact
// integer above 2^53
fn divisor_text(d: f64) -> String {
    if d.fract() == 0.0 { format!("{:.0}", d) } else { d.to_string() }
}

/// Joins signed terms into one polynomial string.
///
/// The leading term carries no `+`; it is prefixed `-` only when its
/// coefficient is negative. Later terms are joined by ` + ` or ` - ` from
/// their coefficient's sign and printed by magnitude. Magnitudes use 2
/// decimals.
pub fn render_signed_terms(terms: &[Term], notation: Notation) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        let negative = term.coefficient < 0.0;
        match (i, negative) {
            (0, true)  => out.push('-'),
            (0, false) => {}
            (_, true)  => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(&term.render_body(notation));
    }
    out
}

/// Interpolating polynomial in symbolic form.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    variable: Variable,
    terms: Vec<Term>,
}

impl Equation {
    pub fn new(variable: Variable, terms: Vec<Term>) -> Self {
        Self { variable, terms }
    }

    #[inline] pub fn variable(&self) -> Variable { self.variable }
    #[inline] pub fn terms(&self) -> &[Term] { &self.terms }

    /// Sums the terms at query abscissa `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = self.variable.map(x);
        self.terms.iter().fold(0.0, |acc, term| acc + term.value(t))
    }

    /// `f(x) = ...` in the requested notation.
    pub fn render(&self, notation: Notation) -> String {
        format!("f(x) = {}", render_signed_terms(&self.terms, notation))
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Plain))
    }
}


/// 2-decimal fixed point, without a `-0.00`.
fn fixed2(v: f64) -> String {
    if v == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", v)
}

/// `lhs - v`, written `lhs + |v|` when `v` is negative.
fn minus(lhs: &str, v: f64) -> String {
    if v < 0.0 {
        format!("{} + {:.2}", lhs, -v)
    } else {
        format!("{} - {}", lhs, fixed2(v))
    }
}
