//! Plotting observer for visualizing integrator behavior.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use stepwise_core::{Observer, Sample, Trajectory};
use stepwise_solvers::transient::{fixed, rkf45};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Decay").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    equal_axes: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear
    /// scale, independent axes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
            equal_axes: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are silently skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Locks the aspect ratio so one unit is the same length on both axes.
    ///
    /// Useful when plotting one state component against another, such as a
    /// profile shape or a phase portrait.
    #[must_use]
    pub fn equal_axes(mut self) -> Self {
        self.equal_axes = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implemented for the fixed-step and adaptive events with the independent
/// variable `s` on the x-axis and state component `j` in trace `j`, so a
/// `PlotObserver` can be passed straight to either solver:
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["x", "v"]);
/// rk4::solve(&oscillator, &[1.0, 0.0], 0.0, 200, 0.05, &mut obs)?;
/// obs.show(ShowConfig::new().title("Oscillator").legend())?;
/// ```
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event. Rejected adaptive
/// steps are skipped.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

/// Traces for the first `N` components of a state; missing ones are `None`.
fn component_traces<const N: usize>(r: &[f64]) -> [Option<f64>; N] {
    std::array::from_fn(|j| r.get(j).copied())
}

impl<const N: usize> Plottable<N> for fixed::Event<'_> {
    fn x(&self) -> Option<f64> {
        Some(self.s)
    }

    fn traces(&self) -> [Option<f64>; N] {
        component_traces(self.r)
    }
}

impl<const N: usize> Plottable<N> for rkf45::Event<'_> {
    fn x(&self) -> Option<f64> {
        match *self {
            rkf45::Event::Start { s, .. } | rkf45::Event::Accepted { s, .. } => Some(s),
            rkf45::Event::Rejected { .. } => None,
        }
    }

    fn traces(&self) -> [Option<f64>; N] {
        match *self {
            rkf45::Event::Start { r, .. } | rkf45::Event::Accepted { r, .. } => {
                component_traces(r)
            }
            rkf45::Event::Rejected { .. } => [None; N],
        }
    }
}

/// An observer that collects trace data during integration and displays it
/// via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by:
///
/// - **Direct path** — pass `&mut PlotObserver` as the solver observer. Any
///   event implementing [`Plottable<N>`][Plottable] is recorded.
/// - **Closure path** — wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] to pick exactly what to plot.
/// - **Trajectory path** — after a run, call
///   [`record_trajectory`][PlotObserver::record_trajectory] with a projection
///   of each sample. This is the way to compare several runs in one window.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example — trajectory path
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Euler", "RK4"]);
/// obs.record_trajectory(&euler.trajectory, |p| (p.s, [Some(p.r[0]), None]));
/// obs.record_trajectory(&rk4.trajectory, |p| (p.s, [None, Some(p.r[0])]));
/// obs.show(ShowConfig::new().title("Decay").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Records every sample of `trajectory` in order.
    ///
    /// `project` maps each sample to an x value and the trace values, with
    /// the same `None` semantics as [`record`][PlotObserver::record].
    pub fn record_trajectory<F>(&mut self, trajectory: &Trajectory, mut project: F)
    where
        F: FnMut(Sample<'_>) -> (f64, [Option<f64>; N]),
    {
        for sample in trajectory.iter() {
            let (x, traces) = project(sample);
            self.record(x, traces);
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    log_y: config.log_y,
                    equal_axes: config.equal_axes,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
    equal_axes: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            if self.equal_axes {
                plot = plot.data_aspect(1.0);
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
