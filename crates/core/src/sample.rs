/// A point in the plane of motion, in meters.
///
/// The pivot is at the origin with `y` pointing up, so a hanging bob has a
/// negative `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One trajectory record taken from the integrator.
///
/// Carries both the cartesian and the angle form of the state so a sink can
/// write either, or both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Elapsed simulated time in seconds.
    pub time: f64,

    /// Position of the upper bob.
    pub position1: Point,

    /// Position of the lower bob.
    pub position2: Point,

    /// Normalized angle of the upper arm in radians.
    pub theta1: f64,

    /// Normalized angle of the lower arm in radians.
    pub theta2: f64,
}
