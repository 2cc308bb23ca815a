//! 2D vector type
//!
//! `Vector2` is a plain `Copy` value, but most operations come in an
//! in-place flavor (`&mut self -> &mut Self`) so long-lived vectors owned by
//! shapes and actors can be updated by animation code without reassigning
//! the field that holds them. Angles are in degrees throughout.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

/// Mutable 2D vector with `f32` components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const ONE: Vector2 = Vector2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        Self::ONE
    }

    /// Unit vector pointing at `angle` degrees.
    pub fn normal(angle: f32) -> Self {
        let rad = angle.to_radians();
        Self::new(rad.cos(), rad.sin())
    }

    /// Vector of the given length pointing at `angle` degrees.
    pub fn length_angle(length: f32, angle: f32) -> Self {
        let mut v = Self::normal(angle);
        v.scale(length);
        v
    }

    /// Random vector with both components in `[0, 1)`.
    pub fn random() -> Self {
        Self::new(rand::random::<f32>(), rand::random::<f32>())
    }

    /// Random unit vector.
    pub fn random_normal() -> Self {
        Self::normal(rand::random::<f32>() * 360.0)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(self, other: Vector2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Angle of this vector in degrees, in `(-180, 180]`.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Unit-length copy; the zero vector stays zero.
    pub fn normalized(self) -> Vector2 {
        let mut v = self;
        v.normalize();
        v
    }

    /// Projection of this vector onto `other`. Projecting onto a zero
    /// vector yields zero.
    pub fn project(self, other: Vector2) -> Vector2 {
        let mag = other.length_squared();
        if mag == 0.0 {
            return Vector2::ZERO;
        }
        other * (self.dot(other) / mag)
    }

    /// Reflection of this vector off a surface with unit normal `normal`:
    /// `r = i - 2n(i·n)`.
    pub fn reflect(self, normal: Vector2) -> Vector2 {
        self - normal * (2.0 * self.dot(normal))
    }

    pub fn negate(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }

    /// Linear interpolation from `self` to `other`.
    pub fn lerp(self, other: Vector2, ratio: f32) -> Vector2 {
        Vector2::new(
            self.x + (other.x - self.x) * ratio,
            self.y + (other.y - self.y) * ratio,
        )
    }

    pub fn interpolate(self, other: Vector2, ratio: f32) -> Vector2 {
        self.lerp(other, ratio)
    }

    pub fn min(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise clamp between `minimum` and `maximum`.
    pub fn clamp(self, minimum: Vector2, maximum: Vector2) -> Vector2 {
        Vector2::new(
            minimum.x.max(self.x.min(maximum.x)),
            minimum.y.max(self.y.min(maximum.y)),
        )
    }

    /// Components truncated to integers (pixel coordinates).
    pub fn point(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    // =========================================================================
    // In-place operations
    // =========================================================================

    pub fn set(&mut self, other: Vector2) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.x = 0.0;
        self.y = 0.0;
        self
    }

    /// Sets the length to one. A zero vector is left at zero.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            self.x /= length;
            self.y /= length;
        } else {
            self.reset();
        }
        self
    }

    /// Rotates 90 degrees clockwise in screen space (y pointing down).
    pub fn perpend(&mut self) -> &mut Self {
        self.perpend_left()
    }

    pub fn perpend_left(&mut self) -> &mut Self {
        let (x, y) = (self.x, self.y);
        self.x = -y;
        self.y = x;
        self
    }

    pub fn perpend_right(&mut self) -> &mut Self {
        let (x, y) = (self.x, self.y);
        self.x = y;
        self.y = -x;
        self
    }

    /// Rotates by `angle` degrees.
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        let rad = angle.to_radians();
        self.fast_rotate(rad.cos(), rad.sin())
    }

    /// Rotates using a precomputed cosine/sine pair.
    pub fn fast_rotate(&mut self, cos: f32, sin: f32) -> &mut Self {
        let (x, y) = (self.x, self.y);
        self.x = cos * x - sin * y;
        self.y = sin * x + cos * y;
        self
    }

    pub fn translate(&mut self, motion: Vector2) -> &mut Self {
        self.x += motion.x;
        self.y += motion.y;
        self
    }

    pub fn scale(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Component-wise scale.
    pub fn rescale(&mut self, scalar: Vector2) -> &mut Self {
        self.x *= scalar.x;
        self.y *= scalar.y;
        self
    }

    pub fn shrink(&mut self, divisor: f32) -> &mut Self {
        self.x /= divisor;
        self.y /= divisor;
        self
    }

    /// Floored remainder in place, wrapping each component into `[0, bounds)`.
    pub fn wrap(&mut self, bounds: Vector2) -> &mut Self {
        self.x = self.x.rem_euclid(bounds.x);
        self.y = self.y.rem_euclid(bounds.y);
        self
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

// =============================================================================
// Operators
// =============================================================================

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;
    fn mul(self, s: f32) -> Vector2 {
        Vector2::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Mul for Vector2 {
    type Output = Vector2;
    fn mul(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;
    fn div(self, s: f32) -> Vector2 {
        Vector2::new(self.x / s, self.y / s)
    }
}

impl Div for Vector2 {
    type Output = Vector2;
    fn div(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x / other.x, self.y / other.y)
    }
}

/// Floored remainder: the result takes the sign of the divisor, so
/// negative coordinates wrap into `[0, other)`.
impl Rem for Vector2 {
    type Output = Vector2;
    fn rem(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x.rem_euclid(other.x), self.y.rem_euclid(other.y))
    }
}

impl Rem<f32> for Vector2 {
    type Output = Vector2;
    fn rem(self, s: f32) -> Vector2 {
        Vector2::new(self.x.rem_euclid(s), self.y.rem_euclid(s))
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        self.negate()
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        self.translate(other);
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Vector2) {
        self.translate(-other);
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, s: f32) {
        self.scale(s);
    }
}

impl MulAssign for Vector2 {
    fn mul_assign(&mut self, other: Vector2) {
        self.rescale(other);
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, s: f32) {
        self.shrink(s);
    }
}

impl DivAssign for Vector2 {
    fn div_assign(&mut self, other: Vector2) {
        self.x /= other.x;
        self.y /= other.y;
    }
}

impl RemAssign for Vector2 {
    fn rem_assign(&mut self, other: Vector2) {
        self.wrap(other);
    }
}

impl RemAssign<f32> for Vector2 {
    fn rem_assign(&mut self, s: f32) {
        self.wrap(Vector2::new(s, s));
    }
}
