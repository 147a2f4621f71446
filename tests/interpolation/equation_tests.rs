use interpol::interpolation::algorithms::Direction;
use interpol::interpolation::equation::{render_signed_terms, Factor, Notation, Term, Variable};
use interpol::interpolation::errors::InterpolationError;
use interpol::interpolation::lagrange::{self, Lagrange};
use interpol::interpolation::newton_gregory::{self, NewtonGregory};
use interpol::interpolation::points::PointSet;
use interpol::interpolation::Interpolator;

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

fn squares() -> PointSet {
    PointSet::from_xy(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap()
}

// y = x³ - 2x on integer nodes; every rendered number is exact at 2 decimals
fn integer_cubic() -> PointSet {
    let x = [-1.0, 0.0, 1.0, 2.0, 3.0];
    let y: Vec<f64> = x.iter().map(|&v: &f64| v * v * v - 2.0 * v).collect();
    PointSet::from_xy(&x, &y).unwrap()
}


// ---- plain-text re-parser ------------------------------------------------

// splits `s` at ` <op> ` occurring outside parentheses
fn split_top_level<'s>(s: &'s str, ops: &[&str]) -> Vec<(Option<char>, &'s str)> {
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    let mut sign = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            if let Some(op) = ops.iter().find(|op| s[i..].starts_with(*op)) {
                parts.push((sign, &s[start..i]));
                sign = op.trim().chars().next();
                i += op.len();
                start = i;
                continue;
            }
        }
        i += 1;
    }
    parts.push((sign, &s[start..]));
    parts
}

fn strip_parens(s: &str) -> &str {
    s.strip_prefix('(').and_then(|s| s.strip_suffix(')')).unwrap_or(s)
}

// `name`, `name - a`, `name + a`, `a - b`, `a + b`
fn linear(s: &str, name: &str, val: f64) -> f64 {
    let atom = |t: &str| if t == name { val } else { t.parse::<f64>().unwrap() };
    if let Some(idx) = s.find(" - ") {
        atom(&s[..idx]) - atom(&s[idx + 3..])
    } else if let Some(idx) = s.find(" + ") {
        atom(&s[..idx]) + atom(&s[idx + 3..])
    } else {
        atom(s)
    }
}

fn eval_term(term: &str, x: f64, u: f64) -> f64 {
    let mut halves = split_top_level(term, &[" / "]).into_iter();
    let numerator = halves.next().unwrap().1;
    let divisor = halves.next().map(|(_, d)| d.parse::<f64>().unwrap()).unwrap_or(1.0);

    let ratios = split_top_level(numerator, &[" * "]);
    let mut value;
    if ratios.len() > 1 {
        // lagrange: mag * ((x - a) / (b - c)) * ...
        value = ratios[0].1.parse::<f64>().unwrap();
        for (_, ratio) in &ratios[1..] {
            let inner = split_top_level(strip_parens(ratio), &[" / "]);
            let num = linear(strip_parens(inner[0].1), "x", x);
            let den = linear(strip_parens(inner[1].1), "x", x);
            value *= num / den;
        }
    } else {
        // newton: mag(u)(u - 1)...
        let open = numerator.find('(').unwrap_or(numerator.len());
        value = numerator[..open].parse::<f64>().unwrap();
        for group in numerator[open..].split(')').filter(|g| !g.is_empty()) {
            value *= linear(group.trim_start_matches('('), "u", u);
        }
    }
    value / divisor
}

fn reparse(equation: &str, x: f64, u: f64) -> f64 {
    let body = equation.strip_prefix("f(x) = ").unwrap();
    split_top_level(body, &[" + ", " - "])
        .into_iter()
        .map(|(sign, term)| {
            let (neg, term) = match term.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (sign == Some('-'), term),
            };
            let v = eval_term(term, x, u);
            if neg { -v } else { v }
        })
        .sum()
}


// ---- rendering -----------------------------------------------------------

#[test]
fn newton_forward_plain() -> TestResult {
    let interp = NewtonGregory::new(&squares(), Direction::Forward)?;
    assert_eq!(
        interp.explain().render(Notation::Plain),
        "f(x) = 0.00 + 1.00(u) / 1 + 2.00(u)(u - 1) / 2 + 0.00(u)(u - 1)(u - 2) / 6"
    );
    Ok(())
}

#[test]
fn quartic_divisor_is_four_factorial() -> TestResult {
    let points = PointSet::from_xy(
        &[0.0, 1.0, 2.0, 3.0, 4.0],
        &[0.0, 1.0, 16.0, 81.0, 256.0],
    )?;
    let interp = NewtonGregory::new(&points, Direction::Forward)?;
    let text   = interp.explain().render(Notation::Plain);
    assert!(text.ends_with(" + 24.00(u)(u - 1)(u - 2)(u - 3) / 24"), "{text}");
    Ok(())
}

#[test]
fn large_factorial_divisor_prints_every_digit() {
    let term = Term::new(1.0, Vec::new(), Some(newton_gregory::factorial(22)));
    assert_eq!(
        render_signed_terms(&[term.clone()], Notation::Plain),
        "1.00 / 1124000727777607680000"
    );
    assert_eq!(
        render_signed_terms(&[term], Notation::Latex),
        "\\frac{1.00}{1124000727777607680000}"
    );
}

#[test]
fn newton_backward_plain() -> TestResult {
    let interp = NewtonGregory::new(&squares(), Direction::Backward)?;
    assert_eq!(
        interp.explain().to_string(),
        "f(x) = 9.00 + 5.00(u) / 1 + 2.00(u)(u + 1) / 2 + 0.00(u)(u + 1)(u + 2) / 6"
    );
    Ok(())
}

#[test]
fn newton_negative_differences() -> TestResult {
    let points = PointSet::from_xy(&[0.0, 1.0, 2.0], &[3.0, 1.0, 0.0])?;
    let res = newton_gregory::evaluate(&points, 0.5, Direction::Forward)?;

    assert_eq!(res.equation, "f(x) = 3.00 - 2.00(u) / 1 + 1.00(u)(u - 1) / 2");
    assert!(approx_eq(res.estimate, 1.875));
    Ok(())
}

#[test]
fn negative_leading_term() -> TestResult {
    let points = PointSet::from_xy(&[0.0, 1.0], &[-1.5, 0.0])?;
    let res = newton_gregory::evaluate(&points, 0.0, Direction::Forward)?;
    assert_eq!(res.equation, "f(x) = -1.50 + 1.50(u) / 1");
    Ok(())
}

#[test]
fn lagrange_plain() -> TestResult {
    let points = PointSet::from_xy(&[0.0, 1.0], &[0.0, 1.0])?;
    let res = lagrange::evaluate(&points, 0.5)?;
    assert_eq!(
        res.equation,
        "f(x) = 0.00 * ((x - 1.00) / (0.00 - 1.00)) + 1.00 * ((x - 0.00) / (1.00 - 0.00))"
    );
    Ok(())
}

#[test]
fn lagrange_negative_values() -> TestResult {
    let points = PointSet::from_xy(&[-1.0, 1.0], &[-2.0, 3.0])?;
    let interp = Lagrange::new(&points)?;
    assert_eq!(
        interp.explain().to_string(),
        "f(x) = -2.00 * ((x - 1.00) / (-1.00 - 1.00)) + 3.00 * ((x + 1.00) / (1.00 + 1.00))"
    );
    Ok(())
}

#[test]
fn latex_notation() -> TestResult {
    let points = PointSet::from_xy(&[0.0, 1.0], &[0.0, 1.0])?;

    let ng = NewtonGregory::new(&points, Direction::Forward)?;
    assert_eq!(ng.explain().render(Notation::Latex), "f(x) = 0.00 + \\frac{1.00(u)}{1}");

    let lg = Lagrange::new(&points)?;
    assert_eq!(
        lg.explain().render(Notation::Latex),
        "f(x) = 0.00 \\cdot \\frac{x - 1.00}{0.00 - 1.00} + 1.00 \\cdot \\frac{x - 0.00}{1.00 - 0.00}"
    );
    Ok(())
}

#[test]
fn legends() -> TestResult {
    let fwd = NewtonGregory::new(&squares(), Direction::Forward)?;
    let bwd = NewtonGregory::new(&squares(), Direction::Backward)?;
    let lg  = Lagrange::new(&squares())?;

    assert_eq!(fwd.explain().variable().legend(Notation::Plain).as_deref(), Some("u = (x - 0.00) / 1.00"));
    assert_eq!(bwd.explain().variable().legend(Notation::Plain).as_deref(), Some("u = (x - 3.00) / 1.00"));
    assert_eq!(
        bwd.explain().variable().legend(Notation::Latex).as_deref(),
        Some("u = \\frac{x - 3.00}{1.00}")
    );
    assert_eq!(lg.explain().variable(), Variable::Abscissa);
    assert_eq!(lg.explain().variable().legend(Notation::Plain), None);
    Ok(())
}

#[test]
fn signed_terms_shared_rule() {
    let terms = [
        Term::constant(-1.0),
        Term::new(2.5, Vec::new(), None),
        Term::new(-0.25, vec![Factor::Shifted { offset: 0.0 }], Some(1.0)),
        Term::new(0.75, vec![Factor::Ratio { node: 2.0, pivot: 4.0 }], None),
    ];
    assert_eq!(
        render_signed_terms(&terms, Notation::Plain),
        "-1.00 + 2.50 - 0.25(u) / 1 + 0.75 * ((x - 2.00) / (4.00 - 2.00))"
    );
}

#[test]
fn term_values() {
    let shifted = Term::new(3.0, vec![Factor::Shifted { offset: 0.0 }, Factor::Shifted { offset: -1.0 }], Some(2.0));
    assert_eq!(shifted.value(4.0), 18.0);

    let ratio = Term::new(2.0, vec![Factor::Ratio { node: 1.0, pivot: 3.0 }], None);
    assert_eq!(ratio.value(2.0), 1.0);
}


// ---- equation and estimate agree ------------------------------------------

#[test]
fn symbolic_matches_estimate() -> TestResult {
    let points = PointSet::from_xy(&[0.5, 1.0, 1.5, 2.0, 2.5], &[1.3, -0.7, 2.2, 0.1, 4.9])?;

    let interps: Vec<Box<dyn Interpolator>> = vec![
        Box::new(NewtonGregory::new(&points, Direction::Forward)?),
        Box::new(NewtonGregory::new(&points, Direction::Backward)?),
        Box::new(Lagrange::new(&points)?),
    ];
    for interp in &interps {
        let res = interp.evaluate(1.7)?;
        assert_eq!(res.symbolic.evaluate(1.7), res.estimate);
    }
    Ok(())
}

#[test]
fn rendered_text_reproduces_estimate() -> TestResult {
    let points = integer_cubic();
    let x = 0.5;

    for direction in [Direction::Forward, Direction::Backward] {
        let res = newton_gregory::evaluate(&points, x, direction)?;
        let u = res.symbolic.variable().map(x);
        let reparsed = reparse(&res.equation, x, u);
        assert!(approx_eq(reparsed, res.estimate), "{:?}: {} vs {}", direction, reparsed, res.estimate);
        assert!(approx_eq(res.estimate, -0.875));
    }

    let res = lagrange::evaluate(&points, x)?;
    let reparsed = reparse(&res.equation, x, x);
    assert!(approx_eq(reparsed, res.estimate), "lagrange: {} vs {}", reparsed, res.estimate);
    assert!(approx_eq(res.estimate, -0.875));
    Ok(())
}
