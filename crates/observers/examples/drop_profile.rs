//! Profile of an axisymmetric sessile drop, integrated four ways.
//!
//! The drop surface is parameterized by arc length `s` with state `(φ, r, z)`:
//! the tangent angle, the radial distance from the axis and the height below
//! the apex. In dimensionless form, with Bond number `Bo`:
//!
//! ```text
//! dφ/ds = 2 − Bo·z − sin φ / r
//! dr/ds = cos φ
//! dz/ds = sin φ
//! ```
//!
//! At the apex (`s = 0`, `r = 0`) the `sin φ / r` term is dropped.
//!
//! The profile is integrated with Euler, Heun, RK4 and RKF45 from the apex,
//! and all four trajectories are written side by side to a CSV file. With the
//! `plot` feature, `φ`, `r` and `z` are each plotted against `s` for the four
//! methods, followed by the drop profile `(r, −z)`.
//!
//! # Usage
//!
//! ```text
//! cargo run --example drop_profile
//! cargo run --example drop_profile -- --config run.toml --output profile.csv
//! cargo run --example drop_profile --features plot
//! RUST_LOG=debug cargo run --example drop_profile
//! ```
//!
//! # Configuration
//!
//! Every field is optional; missing ones take the defaults shown here.
//!
//! ```toml
//! bond = 0.4
//! output = "drop_profile.csv"
//!
//! [fixed]
//! samples = 400
//! step = 0.01
//!
//! [adaptive]
//! samples = 52
//! initial_step = 0.01
//!
//! [adaptive.control]
//! tolerance = 1e-3
//! order = 4.0
//! safety = 0.1
//! max_retries = 1000
//! max_growth = 5.0
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use stepwise_core::{TrajectorySink, VectorField};
use stepwise_observers::table::Table;
use stepwise_solvers::transient::{euler, heun, rk4, rkf45};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse()?;
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "reading run configuration");
            toml::from_str::<RunConfig>(&std::fs::read_to_string(path)?)?
        }
        None => RunConfig::default(),
    };
    if let Some(output) = args.output {
        config.output = output;
    }

    let field = DropProfile { bond: config.bond };
    let apex = [0.0; 3];
    let FixedRun { samples, step } = config.fixed;

    let euler = euler::solve_unobserved(&field, &apex, 0.0, samples, step)?;
    info!(
        samples = euler.trajectory.len(),
        evaluations = euler.evaluations,
        "euler"
    );

    let heun = heun::solve_unobserved(&field, &apex, 0.0, samples, step)?;
    info!(
        samples = heun.trajectory.len(),
        evaluations = heun.evaluations,
        "heun"
    );

    let rk4 = rk4::solve_unobserved(&field, &apex, 0.0, samples, step)?;
    info!(
        samples = rk4.trajectory.len(),
        evaluations = rk4.evaluations,
        "rk4"
    );

    let adaptive = &config.adaptive;
    let rkf45 = rkf45::solve_unobserved(
        &field,
        &apex,
        0.0,
        adaptive.samples,
        adaptive.initial_step,
        &adaptive.control,
    )?;
    info!(
        samples = rkf45.trajectory.len(),
        accepted = rkf45.accepted,
        rejected = rkf45.rejected,
        evaluations = rkf45.evaluations,
        s_end = rkf45.trajectory.last().s,
        "rkf45"
    );

    let mut table = Table::new().with_component_names(["phi", "r", "z"])?;
    for (label, trajectory) in [
        ("euler", &euler.trajectory),
        ("heun", &heun.trajectory),
        ("rk4", &rk4.trajectory),
        ("rkf45", &rkf45.trajectory),
    ] {
        table.consume(label, trajectory)?;
    }
    table.save(&config.output)?;
    info!(path = %config.output.display(), rows = table.rows(), "wrote profiles");

    #[cfg(feature = "plot")]
    plot::show(
        config.bond,
        [
            &euler.trajectory,
            &heun.trajectory,
            &rk4.trajectory,
            &rkf45.trajectory,
        ],
    )?;

    Ok(())
}

// --- Plots -------------------------------------------------------------------

#[cfg(feature = "plot")]
mod plot {
    use stepwise_core::{Sample, Trajectory};
    use stepwise_observers::{PlotObserver, ShowConfig};

    const METHODS: [&str; 4] = ["Euler", "Heun", "RK4", "RKF45"];

    /// Opens one window per component against `s`, then the drop profile.
    ///
    /// Each window blocks until it is closed.
    pub fn show(bond: f64, runs: [&Trajectory; 4]) -> Result<(), eframe::Error> {
        for (j, name) in ["φ", "r", "z"].into_iter().enumerate() {
            compare(&runs, |p| (p.s, p.r[j])).show(
                ShowConfig::new()
                    .title(format!("{name} against s (Bo = {bond})"))
                    .legend(),
            )?;
        }

        compare(&runs, |p| (p.r[1], -p.r[2])).show(
            ShowConfig::new()
                .title(format!("Sessile drop profile (Bo = {bond})"))
                .legend()
                .equal_axes(),
        )
    }

    /// One trace per method, every run projected the same way.
    fn compare<F>(runs: &[&Trajectory; 4], project: F) -> PlotObserver<4>
    where
        F: Fn(Sample<'_>) -> (f64, f64),
    {
        let mut obs = PlotObserver::<4>::new(METHODS);
        for (i, trajectory) in runs.iter().enumerate() {
            obs.record_trajectory(trajectory, |p| {
                let (x, y) = project(p);
                let mut traces = [None; 4];
                traces[i] = Some(y);
                (x, traces)
            });
        }
        obs
    }
}

// --- Field -------------------------------------------------------------------

#[derive(Debug, Error)]
#[error("profile reached the axis again at s = {0}")]
struct BackOnAxis(f64);

/// The sessile drop equations for a given Bond number.
struct DropProfile {
    bond: f64,
}

impl VectorField for DropProfile {
    type Error = BackOnAxis;

    fn evaluate(&self, s: f64, state: &[f64]) -> Result<Vec<f64>, Self::Error> {
        let [phi, r, z] = [state[0], state[1], state[2]];

        let curvature = if s == 0.0 {
            2.0 - self.bond * z
        } else if r == 0.0 {
            return Err(BackOnAxis(s));
        } else {
            2.0 - self.bond * z - phi.sin() / r
        };

        Ok(vec![curvature, phi.cos(), phi.sin()])
    }
}

// --- Configuration -----------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RunConfig {
    bond: f64,
    output: PathBuf,
    fixed: FixedRun,
    adaptive: AdaptiveRun,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            bond: 0.4,
            output: PathBuf::from("drop_profile.csv"),
            fixed: FixedRun::default(),
            adaptive: AdaptiveRun::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FixedRun {
    samples: usize,
    step: f64,
}

impl Default for FixedRun {
    fn default() -> Self {
        Self {
            samples: 400,
            step: 0.01,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct AdaptiveRun {
    samples: usize,
    initial_step: f64,
    control: rkf45::Config,
}

impl Default for AdaptiveRun {
    fn default() -> Self {
        Self {
            samples: 52,
            initial_step: 0.01,
            control: rkf45::Config::default(),
        }
    }
}

// --- Arguments ---------------------------------------------------------------

struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = Self {
            config: None,
            output: None,
        };

        let mut iter = std::env::args().skip(1);
        while let Some(flag) = iter.next() {
            let slot = match flag.as_str() {
                "--config" => &mut args.config,
                "--output" => &mut args.output,
                other => {
                    return Err(format!(
                        "unknown argument `{other}`\nusage: drop_profile [--config PATH] [--output PATH]"
                    ));
                }
            };
            let value = iter.next().ok_or_else(|| format!("{flag} needs a path"))?;
            *slot = Some(PathBuf::from(value));
        }

        Ok(args)
    }
}
