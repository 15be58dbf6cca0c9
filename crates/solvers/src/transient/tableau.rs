/// Butcher tableau of an explicit Runge–Kutta method with `S` stages.
///
/// Stage `i` is evaluated at `s + c[i]·h` with the probe state
/// `r + h·Σ a[i][j]·k[j]` over `j < i`; the step is `r + h·Σ b[i]·k[i]`.
/// Only the strictly lower triangle of `a` is read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tableau<const S: usize> {
    /// Method name, used in diagnostics.
    pub name: &'static str,

    /// Order of accuracy of the combined step.
    pub order: u32,

    /// Nodes: the fraction of the step at which each stage is evaluated.
    pub c: [f64; S],

    /// Coupling coefficients.
    pub a: [[f64; S]; S],

    /// Weights combining the stages into the step.
    pub b: [f64; S],
}

impl Tableau<1> {
    /// Explicit Euler.
    pub const EULER: Self = Self {
        name: "euler",
        order: 1,
        c: [0.0],
        a: [[0.0]],
        b: [1.0],
    };
}

impl Tableau<2> {
    /// Explicit trapezoidal rule (Heun's method).
    pub const HEUN: Self = Self {
        name: "heun",
        order: 2,
        c: [0.0, 1.0],
        a: [[0.0, 0.0], [1.0, 0.0]],
        b: [0.5, 0.5],
    };
}

impl Tableau<4> {
    /// Classical fourth-order Runge–Kutta.
    pub const RK4: Self = Self {
        name: "rk4",
        order: 4,
        c: [0.0, 0.5, 0.5, 1.0],
        a: [
            [0.0, 0.0, 0.0, 0.0],
            [0.5, 0.0, 0.0, 0.0],
            [0.0, 0.5, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ],
        b: [1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
    };
}

/// Butcher tableau of an embedded pair: two solutions of different order
/// built from the same `S` stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedTableau<const S: usize> {
    /// Method name, used in diagnostics.
    pub name: &'static str,

    /// Nodes.
    pub c: [f64; S],

    /// Coupling coefficients.
    pub a: [[f64; S]; S],

    /// Weights of the lower-order solution.
    pub low: [f64; S],

    /// Weights of the higher-order solution.
    pub high: [f64; S],
}

impl EmbeddedTableau<6> {
    /// Runge–Kutta–Fehlberg 4(5).
    pub const FEHLBERG45: Self = Self {
        name: "rkf45",
        c: [0.0, 1.0 / 4.0, 3.0 / 8.0, 12.0 / 13.0, 1.0, 1.0 / 2.0],
        a: [
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [1.0 / 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [3.0 / 32.0, 9.0 / 32.0, 0.0, 0.0, 0.0, 0.0],
            [
                1932.0 / 2197.0,
                -7200.0 / 2197.0,
                7296.0 / 2197.0,
                0.0,
                0.0,
                0.0,
            ],
            [
                439.0 / 216.0,
                -8.0,
                3680.0 / 513.0,
                -845.0 / 4104.0,
                0.0,
                0.0,
            ],
            [
                -8.0 / 27.0,
                2.0,
                -3544.0 / 2565.0,
                1859.0 / 4104.0,
                -11.0 / 40.0,
                0.0,
            ],
        ],
        low: [
            25.0 / 216.0,
            0.0,
            1408.0 / 2565.0,
            2197.0 / 4104.0,
            -1.0 / 5.0,
            0.0,
        ],
        high: [
            16.0 / 135.0,
            0.0,
            6656.0 / 12825.0,
            28561.0 / 56430.0,
            -9.0 / 50.0,
            2.0 / 55.0,
        ],
    };
}
