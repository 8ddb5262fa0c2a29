//! Logs every iteration of each solver at debug level.
//!
//! Run with `cargo run -p sextant-observers --example trace`.

use sextant_observers::{History, TracingObserver};
use sextant_solvers::{
    equation::secant,
    optimization::{golden_section, steepest_descent},
};
use tracing::Level;

fn booth(x: &[f64]) -> f64 {
    (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .init();

    let gss = golden_section::minimize(
        |x| 2.0 * (x - 2.0).powi(2),
        [-10.0, 10.0],
        &golden_section::Config::new(1e-6)?,
        TracingObserver::new("golden_section"),
    )?;
    tracing::info!(x = gss.x, iters = gss.iters, "golden section finished");

    let root = secant::solve(
        |x: f64| x.cos() - x,
        1.0,
        &secant::Config::default(),
        TracingObserver::new("secant"),
    )?;
    tracing::info!(x = root.x, iters = root.iters, "secant finished");

    let mut history = History::new();
    let descent = steepest_descent::minimize(
        booth,
        &[5.0, 2.2],
        &steepest_descent::Config::new(1e-6, 5000)?,
        &mut history,
    )?;
    tracing::info!(
        x = ?descent.x,
        objective = descent.objective,
        status = ?descent.status,
        "steepest descent finished"
    );

    for (iter, value) in history.values().iter().enumerate() {
        tracing::debug!(iter = iter + 1, objective = value, "descent history");
    }

    Ok(())
}
