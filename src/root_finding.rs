// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Newton–Raphson with a numerical derivative.

use log::debug;

/// Half-width of the central difference used for the derivative.
pub const DERIVATIVE_STEP: f64 = 5e-6;

/// Convergence threshold on the step `|xₙ₊₁ − xₙ|`.
pub const TOLERANCE: f64 = 1e-7;

/// Iteration budget of [`newton_raphson`].
pub const MAX_ITERATIONS: usize = 50;

/// Solved root and the number of Newton steps taken.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Root {
    pub x: f64,
    pub iterations: usize,
}

/// Finds a root of `f` near `x0`.
///
/// The derivative is `(f(x + h) − f(x − h)) / 2h` with
/// `h =` [`DERIVATIVE_STEP`]. Iteration stops once a step is at most
/// [`TOLERANCE`], returning the point the step was taken **from**.
///
/// Returns `None` if the budget runs out or an iterate stops being finite
/// (for example on a flat derivative).
pub fn newton_raphson<F>(f: F, x0: f64) -> Option<Root>
where
    F: Fn(f64) -> f64,
{
    let mut next = x0;
    for iteration in 1..=MAX_ITERATIONS {
        let x = next;
        let fx = f(x);
        let slope = (f(x + DERIVATIVE_STEP) - f(x - DERIVATIVE_STEP)) / DERIVATIVE_STEP / 2.0;
        next = x - fx / slope;
        if !next.is_finite() {
            debug!("newton: diverged at iteration {iteration} from x={x}");
            return None;
        }
        if (next - x).abs() <= TOLERANCE {
            return Some(Root {
                x,
                iterations: iteration,
            });
        }
    }
    debug!("newton: no convergence after {MAX_ITERATIONS} iterations from x0={x0}");
    None
}
