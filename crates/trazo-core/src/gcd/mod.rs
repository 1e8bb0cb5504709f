//! Euclidean GCD engine with per-division step records
//!
//! Reduces an ordered list of positive integers pairwise: the accumulated
//! result so far is divided against the next input until the whole list is
//! consumed. Each pairwise reduction logs every division as a
//! `DivisionStep`, so a presentation layer can replay the quotients and
//! remainders one by one. gcd(a, b, c) = gcd(gcd(a, b), c), so the final
//! accumulator is the combined GCD of the full input.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, TrazoError};

/// Minimum number of inputs accepted by the surrounding input layer.
pub const MIN_NUMBERS: usize = 2;
/// Maximum number of inputs accepted by the surrounding input layer.
pub const MAX_NUMBERS: usize = 6;
/// Largest accepted input value.
pub const MAX_VALUE: u64 = 9999;

/// One division step of a pairwise reduction.
///
/// The first step of each process is an initialization marker carrying the
/// normalized operands with no quotient or remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DivisionStep {
    pub dividend: u64,
    pub divisor: u64,
    pub quotient: Option<u64>,
    pub remainder: Option<u64>,
}

impl fmt::Display for DivisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.quotient, self.remainder) {
            (Some(quotient), Some(remainder)) => write!(
                f,
                "{} / {} = {}, remainder {}",
                self.dividend, self.divisor, quotient, remainder
            ),
            _ => write!(f, "start: gcd({}, {})", self.dividend, self.divisor),
        }
    }
}

/// One pairwise reduction: the accumulated result so far against the next
/// input number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GcdProcess {
    /// 1-based position of this reduction in the run
    pub process_number: usize,
    /// Operands as handed to this reduction: (accumulator, next input)
    pub input_numbers: (u64, u64),
    /// Inputs not yet consumed when this reduction ran
    pub remaining_numbers: Vec<u64>,
    /// The operands normalized so the larger divides first
    pub larger: u64,
    pub smaller: u64,
    /// All steps including the initialization marker
    pub steps: Vec<DivisionStep>,
    /// Quotient sequence, excluding the initialization marker
    pub quotients: Vec<u64>,
    /// Remainder sequence, excluding the initialization marker
    pub remainders: Vec<u64>,
    /// GCD of this pair: the last nonzero divisor
    pub mcd: u64,
}

impl GcdProcess {
    /// Number of actual divisions performed (the marker does not count).
    pub fn division_count(&self) -> usize {
        self.steps.len() - 1
    }
}

/// Full reduction over the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReducedGcdRun {
    pub processes: Vec<GcdProcess>,
    pub final_mcd: u64,
    /// The untouched input sequence, preserved for reporting
    pub original_numbers: Vec<u64>,
}

/// Reduce `numbers` to their combined GCD, logging every division.
///
/// A single number is its own GCD and produces no processes. An empty
/// input is rejected: the GCD of nothing is undefined. Zero values are
/// rejected; range enforcement (1-9999, 2-6 numbers) belongs to the
/// surrounding input layer.
#[tracing::instrument]
pub fn reduced_gcd(numbers: &[u64]) -> Result<ReducedGcdRun> {
    if numbers.is_empty() {
        return Err(TrazoError::invalid_value(
            "number list",
            "empty (expected 2-6 positive integers)",
        ));
    }
    if numbers.contains(&0) {
        return Err(TrazoError::invalid_value("number", 0));
    }

    let original_numbers = numbers.to_vec();
    if numbers.len() == 1 {
        return Ok(ReducedGcdRun {
            processes: Vec::new(),
            final_mcd: numbers[0],
            original_numbers,
        });
    }

    let mut processes = Vec::with_capacity(numbers.len() - 1);
    let mut accumulator = numbers[0];
    for (position, &next) in numbers.iter().enumerate().skip(1) {
        let mut process = reduce_pair(accumulator, next);
        process.process_number = position;
        process.remaining_numbers = numbers[position + 1..].to_vec();
        accumulator = process.mcd;
        tracing::debug!(
            process = position,
            a = process.input_numbers.0,
            b = process.input_numbers.1,
            mcd = process.mcd,
            "pair reduced"
        );
        processes.push(process);
    }

    Ok(ReducedGcdRun {
        processes,
        final_mcd: accumulator,
        original_numbers,
    })
}

/// Two-argument Euclid with step records. Operands are normalized so the
/// larger divides first. Terminates because remainders strictly decrease.
fn reduce_pair(a: u64, b: u64) -> GcdProcess {
    let larger = a.max(b);
    let smaller = a.min(b);

    let mut dividend = larger;
    let mut divisor = smaller;
    let mut steps = vec![DivisionStep {
        dividend,
        divisor,
        quotient: None,
        remainder: None,
    }];
    let mut quotients = Vec::new();
    let mut remainders = Vec::new();

    while divisor != 0 {
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        quotients.push(quotient);
        remainders.push(remainder);
        steps.push(DivisionStep {
            dividend,
            divisor,
            quotient: Some(quotient),
            remainder: Some(remainder),
        });
        dividend = divisor;
        divisor = remainder;
    }

    GcdProcess {
        process_number: 0,
        input_numbers: (a, b),
        remaining_numbers: Vec::new(),
        larger,
        smaller,
        steps,
        quotients,
        remainders,
        mcd: dividend,
    }
}
