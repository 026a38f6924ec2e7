//! Fundamental geometric and simulation types.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 2D point or displacement in map space (pixels).
/// x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Uniformly random point inside `[0, width) x [0, height)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height))
    }

    pub fn length(&self) -> f64 {
        self.as_dvec2().length()
    }

    pub fn distance_to(&self, other: Vector2) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalized(&self) -> Self {
        self.as_dvec2().normalize_or_zero().into()
    }

    /// Same direction, given length. The zero vector stays zero.
    pub fn resized_to(&self, length: f64) -> Self {
        self.normalized() * length
    }

    /// Step from `self` toward `target` by at most `max_step`.
    /// Lands exactly on `target` when it is closer than one step.
    pub fn towards(&self, target: Vector2, max_step: f64) -> Self {
        let offset = target - *self;
        if offset.length() <= max_step {
            target
        } else {
            *self + offset.resized_to(max_step)
        }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        v.as_dvec2()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

/// One of the two sides. Indexes the fixed two-player roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    Red,
    Blue,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::Red, PlayerId::Blue];

    /// The opposing side.
    pub fn enemy(self) -> PlayerId {
        match self {
            PlayerId::Red => PlayerId::Blue,
            PlayerId::Blue => PlayerId::Red,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::Red => 0,
            PlayerId::Blue => 1,
        }
    }
}

/// Stable obstacle identifier, assigned in placement order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct ObstacleId(pub u32);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed ticks.
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
