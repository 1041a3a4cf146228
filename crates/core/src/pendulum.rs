use uom::si::{energy::joule, f64::Energy, time::second};

use crate::{
    Config, PendulumState, Point, Sample,
    dynamics::{self, Accelerations, Diagnostics, Limits, Parameters},
    normalize,
};

/// A double pendulum advanced in time with position Verlet.
///
/// The integrator owns its [`PendulumState`] and updates it in place. A run
/// looks like:
///
/// 1. [`DoublePendulum::new`] normalizes the initial angles and copies the
///    initial velocities.
/// 2. [`DoublePendulum::bootstrap`] synthesizes the one step of history the
///    Verlet recurrence needs.
/// 3. [`DoublePendulum::step`] advances one time step, as many times as
///    needed.
///
/// Each step applies
///
/// ```text
/// θ_new = 2·θ − θ_old + α·dt²
/// ω     = (θ_new − θ_old) / (2·dt)
/// ```
///
/// so the reported velocity is a central difference centered on the
/// pre-step angle, one step behind the new angle.
#[derive(Debug, Clone)]
pub struct DoublePendulum {
    config: Config,
    params: Parameters,
    limits: Limits,
    dt: f64,
    state: PendulumState,
    diagnostics: Diagnostics,
}

impl DoublePendulum {
    /// Creates an integrator with the default numerical [`Limits`].
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_limits(config, Limits::default())
    }

    /// Creates an integrator with custom numerical limits.
    #[must_use]
    pub fn with_limits(config: &Config, limits: Limits) -> Self {
        Self {
            config: *config,
            params: Parameters::from(config),
            limits,
            dt: config.dt.get::<second>(),
            state: PendulumState::from_config(config),
            diagnostics: Diagnostics::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    #[must_use]
    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    /// Returns how often the numerical safeguards engaged so far.
    #[must_use]
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Returns the current upper arm angle, in `[-π, π]`.
    #[must_use]
    pub fn theta1(&self) -> f64 {
        self.state.theta1
    }

    /// Returns the current lower arm angle, in `[-π, π]`.
    #[must_use]
    pub fn theta2(&self) -> f64 {
        self.state.theta2
    }

    /// Returns both current angles as `(theta1, theta2)`.
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.state.theta1, self.state.theta2)
    }

    #[must_use]
    pub fn omega1(&self) -> f64 {
        self.state.omega1
    }

    #[must_use]
    pub fn omega2(&self) -> f64 {
        self.state.omega2
    }

    /// Evaluates the angular accelerations at the current state.
    ///
    /// This does not change the state or the [`Diagnostics`].
    #[must_use]
    pub fn accelerations(&self) -> Accelerations {
        dynamics::evaluate(&self.params, &self.limits, &self.state).accelerations
    }

    /// Synthesizes the previous-step angles from the initial state.
    ///
    /// Uses the second-order expansion `θ_old = θ − ω·dt + ½·α·dt²`, with `α`
    /// evaluated at the initial state. Call this once, before the first
    /// [`step`](Self::step); stepping from the placeholder history left by
    /// construction would treat the pendulum as if it started at rest.
    pub fn bootstrap(&mut self) {
        let Accelerations { alpha1, alpha2 } = self.evaluate();
        let dt = self.dt;
        let state = &mut self.state;

        state.theta1_old = state.theta1 - state.omega1 * dt + 0.5 * alpha1 * dt * dt;
        state.theta2_old = state.theta2 - state.omega2 * dt + 0.5 * alpha2 * dt * dt;
    }

    /// Advances the pendulum by one time step.
    pub fn step(&mut self) {
        let Accelerations { alpha1, alpha2 } = self.evaluate();
        let dt = self.dt;
        let state = &mut self.state;

        (state.theta1, state.theta1_old, state.omega1) =
            advance(state.theta1, state.theta1_old, alpha1, dt);
        (state.theta2, state.theta2_old, state.omega2) =
            advance(state.theta2, state.theta2_old, alpha2, dt);
    }

    /// Returns the position of the upper bob.
    #[must_use]
    pub fn position1(&self) -> Point {
        let (sin, cos) = self.state.theta1.sin_cos();
        let length = self.params.length1;
        Point::new(length * sin, -length * cos)
    }

    /// Returns the position of the lower bob.
    #[must_use]
    pub fn position2(&self) -> Point {
        let upper = self.position1();
        let (sin, cos) = self.state.theta2.sin_cos();
        let length = self.params.length2;
        Point::new(upper.x + length * sin, upper.y - length * cos)
    }

    /// Returns both bob positions as `(upper, lower)`.
    #[must_use]
    pub fn positions(&self) -> (Point, Point) {
        (self.position1(), self.position2())
    }

    /// Returns the total mechanical energy at the current state.
    ///
    /// Potential energy is measured from the pivot height.
    #[must_use]
    pub fn energy(&self) -> Energy {
        let Parameters {
            length1: l1,
            length2: l2,
            mass1: m1,
            mass2: m2,
            gravity: g,
        } = self.params;
        let PendulumState {
            theta1,
            theta2,
            omega1,
            omega2,
            ..
        } = self.state;

        let kinetic = 0.5 * (m1 + m2) * l1 * l1 * omega1 * omega1
            + 0.5 * m2 * l2 * l2 * omega2 * omega2
            + m2 * l1 * l2 * omega1 * omega2 * (theta1 - theta2).cos();
        let potential = -(m1 + m2) * g * l1 * theta1.cos() - m2 * g * l2 * theta2.cos();

        Energy::new::<joule>(kinetic + potential)
    }

    /// Takes a trajectory sample labeled with the given elapsed time.
    #[must_use]
    pub fn sample(&self, time: f64) -> Sample {
        let (position1, position2) = self.positions();
        Sample {
            time,
            position1,
            position2,
            theta1: self.state.theta1,
            theta2: self.state.theta2,
        }
    }

    /// Evaluates accelerations and records the safeguard counts.
    fn evaluate(&mut self) -> Accelerations {
        let evaluation = dynamics::evaluate(&self.params, &self.limits, &self.state);
        self.diagnostics.record(&evaluation);
        evaluation.accelerations
    }
}

/// Applies one Verlet update to a single angle.
///
/// Returns `(theta, theta_old, omega)`. When the new angle wraps, the history
/// is moved by the same whole turns so the next update stays continuous.
fn advance(theta: f64, theta_old: f64, alpha: f64, dt: f64) -> (f64, f64, f64) {
    let theta_new = 2.0 * theta - theta_old + alpha * dt * dt;
    let omega = (theta_new - theta_old) / (2.0 * dt);
    let wrapped = normalize(theta_new);

    (wrapped, theta + (wrapped - theta_new), omega)
}
