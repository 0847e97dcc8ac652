use std::fmt;
use std::str::FromStr;

use crate::motion::error::MotionError;

/// Value produced by a [`RangeInterpolator`].
///
/// Unit outputs carry the suffix they were written with (`"%"`, `"px"`, ...)
/// and keep it through interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Number(f64),
    Unit { value: f64, suffix: String },
}

impl Output {
    pub fn unit(value: f64, suffix: &str) -> Self {
        Output::Unit {
            value,
            suffix: suffix.to_string(),
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Output::Number(value) => *value,
            Output::Unit { value, .. } => *value,
        }
    }

    pub fn suffix(&self) -> Option<&str> {
        match self {
            Output::Number(_) => None,
            Output::Unit { suffix, .. } => Some(suffix),
        }
    }

    /// Same variant and same unit, so the two can be blended.
    fn same_kind(&self, other: &Output) -> bool {
        self.suffix() == other.suffix()
    }

    fn with_value(&self, value: f64) -> Output {
        match self {
            Output::Number(_) => Output::Number(value),
            Output::Unit { suffix, .. } => Output::Unit {
                value,
                suffix: suffix.clone(),
            },
        }
    }

    /// CSS length: bare numbers are treated as pixels.
    pub fn css_length(&self) -> String {
        match self {
            Output::Number(value) => format!("{}px", format_number(*value)),
            unit => unit.to_string(),
        }
    }
}

impl From<f64> for Output {
    fn from(value: f64) -> Self {
        Output::Number(value)
    }
}

impl FromStr for Output {
    type Err = MotionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(trimmed.len());
        let (number, suffix) = trimmed.split_at(split);
        let value: f64 = number
            .parse()
            .map_err(|_| MotionError::InvalidOutput(raw.to_string()))?;
        if !value.is_finite() {
            return Err(MotionError::InvalidOutput(raw.to_string()));
        }
        let suffix = suffix.trim();
        if suffix.is_empty() {
            Ok(Output::Number(value))
        } else if suffix == "%" || suffix.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Output::unit(value, suffix))
        } else {
            Err(MotionError::InvalidOutput(raw.to_string()))
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Number(value) => write!(f, "{}", format_number(*value)),
            Output::Unit { value, suffix } => write!(f, "{}{}", format_number(*value), suffix),
        }
    }
}

/// Rounds to 4 decimals so style strings stay short and never print `-0`.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub input: f64,
    pub output: Output,
}

impl Breakpoint {
    pub fn new(input: f64, output: impl Into<Output>) -> Self {
        Self {
            input,
            output: output.into(),
        }
    }
}

/// Piecewise-linear map from scroll progress to a visual property.
///
/// Breakpoints are validated once at construction: at least two, finite,
/// strictly ascending inputs, and outputs of a single kind and unit.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeInterpolator {
    breakpoints: Vec<Breakpoint>,
}

impl RangeInterpolator {
    pub fn new(breakpoints: Vec<Breakpoint>) -> Result<Self, MotionError> {
        validate(&breakpoints)?;
        Ok(Self { breakpoints })
    }

    /// Numeric outputs, e.g. `numbers(&[0.0, 0.5], &[1.0, 0.0])`.
    pub fn numbers(inputs: &[f64], outputs: &[f64]) -> Result<Self, MotionError> {
        check_lengths(inputs.len(), outputs.len())?;
        let breakpoints = inputs
            .iter()
            .zip(outputs)
            .map(|(&input, &output)| Breakpoint::new(input, output))
            .collect::<Vec<_>>();
        Self::new(breakpoints)
    }

    /// String outputs with a unit suffix, e.g. `units(&[0.0, 1.0], &["0%", "50%"])`.
    pub fn units(inputs: &[f64], outputs: &[&str]) -> Result<Self, MotionError> {
        check_lengths(inputs.len(), outputs.len())?;
        let breakpoints = inputs
            .iter()
            .zip(outputs)
            .map(|(&input, raw)| raw.parse::<Output>().map(|output| Breakpoint::new(input, output)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(breakpoints)
    }

    pub fn interpolate(&self, progress: f64) -> Output {
        map_validated(&self.breakpoints, progress)
    }

    /// Shorthand for numeric interpolators.
    pub fn value(&self, progress: f64) -> f64 {
        self.interpolate(progress).value()
    }
}

/// Validates `breakpoints` and maps `progress` through them in one call.
pub fn interpolate(progress: f64, breakpoints: &[Breakpoint]) -> Result<Output, MotionError> {
    validate(breakpoints)?;
    Ok(map_validated(breakpoints, progress))
}

fn check_lengths(inputs: usize, outputs: usize) -> Result<(), MotionError> {
    if inputs != outputs {
        return Err(MotionError::MismatchedBreakpoints { inputs, outputs });
    }
    Ok(())
}

fn validate(breakpoints: &[Breakpoint]) -> Result<(), MotionError> {
    if breakpoints.len() < 2 {
        return Err(MotionError::TooFewBreakpoints(breakpoints.len()));
    }
    if let Some(bad) = breakpoints.iter().find(|b| !b.input.is_finite()) {
        return Err(MotionError::NonFiniteBreakpoint(bad.input));
    }
    let first = &breakpoints[0].output;
    for pair in breakpoints.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if next.input <= previous.input {
            return Err(MotionError::UnsortedBreakpoints {
                previous: previous.input,
                next: next.input,
            });
        }
        if !next.output.same_kind(first) {
            return Err(MotionError::MixedOutputKinds {
                first: first.to_string(),
                other: next.output.to_string(),
            });
        }
    }
    Ok(())
}

fn map_validated(breakpoints: &[Breakpoint], progress: f64) -> Output {
    let progress = if progress.is_finite() { progress } else { 0.0 };
    let first = &breakpoints[0];
    let last = &breakpoints[breakpoints.len() - 1];
    if progress <= first.input {
        return first.output.clone();
    }
    if progress >= last.input {
        return last.output.clone();
    }

    // Index of the first breakpoint strictly above progress; never 0 or len here.
    let upper = breakpoints.partition_point(|b| b.input <= progress);
    let (lo, hi) = (&breakpoints[upper - 1], &breakpoints[upper]);
    let t = (progress - lo.input) / (hi.input - lo.input);
    let from = lo.output.value();
    let to = hi.output.value();
    lo.output.with_value(from + t * (to - from))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_point_range_hits_both_ends_and_is_monotonic() {
        let fade = RangeInterpolator::numbers(&[0.0, 1.0], &[2.0, 10.0]).unwrap();
        assert_eq!(fade.value(0.0), 2.0);
        assert_eq!(fade.value(1.0), 10.0);

        let mut previous = fade.value(0.0);
        for step in 1..=100 {
            let current = fade.value(step as f64 / 100.0);
            assert!(current >= previous);
            previous = current;
        }

        let falling = RangeInterpolator::numbers(&[0.0, 1.0], &[1.0, 0.0]).unwrap();
        let mut previous = falling.value(0.0);
        for step in 1..=100 {
            let current = falling.value(step as f64 / 100.0);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn clamps_outside_the_defined_range() {
        let opacity = RangeInterpolator::numbers(&[0.2, 0.5], &[1.0, 0.0]).unwrap();
        assert_eq!(opacity.value(0.0), 1.0);
        assert_eq!(opacity.value(-3.0), 1.0);
        assert_eq!(opacity.value(0.9), 0.0);
        assert_eq!(opacity.value(42.0), 0.0);
    }

    #[test]
    fn same_input_gives_same_output() {
        let y = RangeInterpolator::units(&[0.0, 1.0], &["20%", "-20%"]).unwrap();
        let first = y.interpolate(0.37);
        let second = y.interpolate(0.37);
        assert_eq!(first, second);
    }

    #[test]
    fn fade_in_then_out_across_four_breakpoints() {
        let opacity =
            RangeInterpolator::numbers(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap();
        assert!(close(opacity.value(0.1), 0.5));
        assert_eq!(opacity.value(0.5), 1.0);
        assert!(close(opacity.value(0.9), 0.5));
        assert_eq!(opacity.value(0.2), 1.0);
        assert_eq!(opacity.value(1.0), 0.0);
    }

    #[test]
    fn keeps_unit_suffix_while_interpolating() {
        let y = RangeInterpolator::units(&[0.0, 1.0], &["0%", "50%"]).unwrap();
        assert_eq!(y.interpolate(0.5), Output::unit(25.0, "%"));
        assert_eq!(y.interpolate(0.5).to_string(), "25%");
        assert_eq!(y.interpolate(2.0).to_string(), "50%");

        let shift = RangeInterpolator::units(&[0.0, 1.0], &["10%", "-10%"]).unwrap();
        assert_eq!(shift.interpolate(0.5).to_string(), "0%");
        assert_eq!(shift.interpolate(0.75).to_string(), "-5%");
    }

    #[test]
    fn rejects_malformed_breakpoint_lists() {
        assert_eq!(
            RangeInterpolator::numbers(&[0.0], &[1.0]),
            Err(MotionError::TooFewBreakpoints(1))
        );
        assert_eq!(
            RangeInterpolator::numbers(&[], &[]),
            Err(MotionError::TooFewBreakpoints(0))
        );
        assert_eq!(
            RangeInterpolator::numbers(&[0.5, 0.2], &[1.0, 0.0]),
            Err(MotionError::UnsortedBreakpoints {
                previous: 0.5,
                next: 0.2
            })
        );
        assert!(matches!(
            RangeInterpolator::numbers(&[0.0, 0.5, 0.5, 1.0], &[0.0, 1.0, 1.0, 0.0]),
            Err(MotionError::UnsortedBreakpoints { .. })
        ));
        assert_eq!(
            RangeInterpolator::numbers(&[0.0, 0.5, 1.0], &[0.0, 1.0]),
            Err(MotionError::MismatchedBreakpoints {
                inputs: 3,
                outputs: 2
            })
        );
        assert_eq!(
            RangeInterpolator::units(&[0.0], &["0%", "50%"])
                .unwrap_err()
                .to_string(),
            "1 breakpoint inputs but 2 outputs"
        );
        assert!(matches!(
            RangeInterpolator::numbers(&[0.0, f64::NAN], &[0.0, 1.0]),
            Err(MotionError::NonFiniteBreakpoint(_))
        ));
        assert!(matches!(
            RangeInterpolator::units(&[0.0, 1.0], &["0%", "10px"]),
            Err(MotionError::MixedOutputKinds { .. })
        ));
        assert!(matches!(
            RangeInterpolator::units(&[0.0, 1.0], &["abc", "1%"]),
            Err(MotionError::InvalidOutput(_))
        ));
    }

    #[test]
    fn free_function_validates_before_mapping() {
        let breakpoints = vec![Breakpoint::new(0.0, 1.0), Breakpoint::new(0.5, 0.8)];
        assert!(close(interpolate(0.25, &breakpoints).unwrap().value(), 0.9));
        assert!(interpolate(0.25, &breakpoints[..1]).is_err());
    }

    #[test]
    fn non_finite_progress_maps_like_zero() {
        let scale = RangeInterpolator::numbers(&[0.0, 0.5], &[1.0, 0.8]).unwrap();
        assert_eq!(scale.value(f64::NAN), 1.0);
    }

    #[test]
    fn parses_outputs() {
        assert_eq!("0.8".parse::<Output>().unwrap(), Output::Number(0.8));
        assert_eq!("-20%".parse::<Output>().unwrap(), Output::unit(-20.0, "%"));
        assert_eq!(" 12px ".parse::<Output>().unwrap(), Output::unit(12.0, "px"));
        assert!("%".parse::<Output>().is_err());
        assert!("5 px!".parse::<Output>().is_err());
        assert_eq!(Output::Number(4.0).css_length(), "4px");
        assert_eq!(Output::unit(-0.00001, "%").to_string(), "0%");
    }
}
