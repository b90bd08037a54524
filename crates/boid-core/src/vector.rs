//! 2-D vector type used for positions, velocities, headings, and forces.
//!
//! Coordinates are single-precision arena units with the origin at the
//! top-left corner of the arena; `x` grows rightwards and `y` downwards.
//!
//! # Zero-length normalize policy
//!
//! Normalizing the zero vector has no mathematical answer, so there is no
//! bare `normalize()`.  [`Vec2::try_normalize`] returns `None` and
//! [`Vec2::normalize_or`] returns a caller-chosen fallback.  Kinematic
//! integration passes the agent's previous heading as the fallback, so a
//! stationary agent keeps facing where it last moved and a heading is never
//! NaN or zero-length.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `radians` from the +x axis.
    #[inline]
    pub fn from_angle(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn magnitude_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f32 {
        (self - other).magnitude_sq()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).magnitude()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit vector in the direction of `self`, or `None` when `self` has zero
    /// (or non-finite) length.
    #[inline]
    pub fn try_normalize(self) -> Option<Vec2> {
        let mag = self.magnitude();
        if mag > 0.0 && mag.is_finite() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Unit vector in the direction of `self`, or `fallback` when `self`
    /// cannot be normalized.
    #[inline]
    pub fn normalize_or(self, fallback: Vec2) -> Vec2 {
        self.try_normalize().unwrap_or(fallback)
    }

    /// `self` rescaled to length `len`; the zero vector stays zero.
    #[inline]
    pub fn with_magnitude(self, len: f32) -> Vec2 {
        self.normalize_or(Vec2::ZERO) * len
    }

    /// `self` if its length is at most `max`, otherwise `self` rescaled to
    /// exactly `max`.
    #[inline]
    pub fn clamp_magnitude(self, max: f32) -> Vec2 {
        if self.magnitude_sq() > max * max {
            self.with_magnitude(max)
        } else {
            self
        }
    }

    /// Rotate counter-clockwise (in a y-up frame) by `radians`.
    #[inline]
    pub fn rotate(self, radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Angle of `self` from the +x axis in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, scalar: f32) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, scalar: f32) -> Vec2 {
        Vec2::new(self.x / scalar, self.y / scalar)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::iter::Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Vec2 {
        iter.fold(Vec2::ZERO, Add::add)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Vec2 {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        [v.x, v.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
