//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playfield (pixels). x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D velocity (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Axis-aligned rectangle, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Unit vector pointing at `other`, or `None` when both points coincide.
    pub fn direction_to(&self, other: &Position) -> Option<DVec2> {
        let offset = other.0 - self.0;
        let length = offset.length();
        if length > 0.0 {
            Some(offset / length)
        } else {
            None
        }
    }

    /// Step `distance` along `direction`.
    pub fn advance(&mut self, direction: DVec2, distance: f64) {
        self.0 += direction * distance;
    }

    pub fn is_within(&self, bounds: &Bounds) -> bool {
        self.0.x >= bounds.min.x
            && self.0.x <= bounds.max.x
            && self.0.y >= bounds.min.y
            && self.0.y <= bounds.max.y
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Velocity of magnitude `speed` along a unit `direction`.
    pub fn along(direction: DVec2, speed: f64) -> Self {
        Self(direction * speed)
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

impl Bounds {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: DVec2::new(min_x, min_y),
            max: DVec2::new(max_x, max_y),
        }
    }

    pub fn center(&self) -> Position {
        Position((self.min + self.max) * 0.5)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
