//! Parametric paths
//!
//! A path maps a ratio in `[0, 1]` to a value and converts between ratio
//! and arc length. Paths are immutable curve definitions; playback state
//! lives in [`super::PathState`].
//!
//! Ratios outside `[0, 1]` wrap (floored remainder). `1.0` itself is kept
//! so that `get_position(1.0)` lands on the last control value of an open
//! path; closed paths wrap back to the first.

use std::fmt;

use macroquad::color::Color;

use crate::math::geometry::{circumference, distance, lerp};
use crate::math::Vector2;

/// The type of value a path produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar,
    Vector,
    Color,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar => write!(f, "scalar"),
            ValueKind::Vector => write!(f, "vector"),
            ValueKind::Color => write!(f, "color"),
        }
    }
}

/// A value sampled from a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathValue {
    Scalar(f32),
    Vector(Vector2),
    Color(Color),
}

impl PathValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            PathValue::Scalar(_) => ValueKind::Scalar,
            PathValue::Vector(_) => ValueKind::Vector,
            PathValue::Color(_) => ValueKind::Color,
        }
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            PathValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<Vector2> {
        match self {
            PathValue::Vector(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            PathValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

/// Errors raised by path sampling and path attachment.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A position was requested from a path with no control values.
    Empty { path: &'static str },
    /// The path produces a different kind of value than the target holds.
    KindMismatch {
        target: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },
    /// In-place vector update requested on a non-vector target.
    AssignModeMismatch { target: &'static str },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty { path } => {
                write!(f, "configuration error: {} has no control values", path)
            }
            PathError::KindMismatch { target, expected, found } => write!(
                f,
                "invalid animation target: '{}' holds a {} value but the path produces {} values",
                target, expected, found
            ),
            PathError::AssignModeMismatch { target } => write!(
                f,
                "invalid animation target: '{}' is not a vector and cannot be updated in place",
                target
            ),
        }
    }
}

impl std::error::Error for PathError {}

/// Wraps a ratio into `[0, 1]`, keeping `1.0` intact.
pub fn wrap_ratio(ratio: f32) -> f32 {
    if (0.0..=1.0).contains(&ratio) {
        ratio
    } else {
        ratio.rem_euclid(1.0)
    }
}

/// Finds the segment holding arc length `limit` and the local ratio inside
/// it. Zero-length segments are never selected.
fn locate(lengths: impl Iterator<Item = f32>, limit: f32) -> Option<(usize, f32)> {
    let mut dist = 0.0;
    for (i, d) in lengths.enumerate() {
        if dist <= limit && limit < dist + d {
            return Some((i, (limit - dist) / d));
        }
        dist += d;
    }
    None
}

// =============================================================================
// Path1d
// =============================================================================

/// Scalar polyline: walks a sequence of numbers by accumulated distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Path1d {
    values: Vec<f32>,
    closed: bool,
}

impl Path1d {
    pub fn new(values: Vec<f32>, closed: bool) -> Self {
        Self { values, closed }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    fn segment_count(&self) -> usize {
        match self.values.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    fn segment(&self, i: usize) -> (f32, f32) {
        let n = self.values.len();
        (self.values[i], self.values[(i + 1) % n])
    }

    fn segment_lengths(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.segment_count()).map(move |i| {
            let (a, b) = self.segment(i);
            (b - a).abs()
        })
    }

    pub fn length(&self) -> f32 {
        self.segment_lengths().sum()
    }

    pub fn get_position(&self, ratio: f32) -> Result<f32, PathError> {
        let first = *self.values.first().ok_or(PathError::Empty { path: "Path1d" })?;
        let last = *self.values.last().unwrap_or(&first);
        let end = if self.closed { first } else { last };

        let ratio = wrap_ratio(ratio);
        let total = self.length();
        if total == 0.0 || ratio == 0.0 {
            return Ok(first);
        }
        if ratio == 1.0 {
            return Ok(end);
        }

        match locate(self.segment_lengths(), total * ratio) {
            Some((i, local)) => {
                let (a, b) = self.segment(i);
                Ok(lerp(a, b, local))
            }
            None => Ok(end),
        }
    }

    pub fn get_length(&self, ratio: f32) -> f32 {
        self.length() * wrap_ratio(ratio)
    }

    pub fn get_ratio(&self, length: f32) -> f32 {
        ratio_of(length, self.length())
    }
}

// =============================================================================
// Path2d
// =============================================================================

/// Point polyline with cached segment lengths.
///
/// The cache is refreshed only by [`Path2d::update`]; call it after editing
/// points through [`Path2d::points_mut`].
#[derive(Debug, Clone, PartialEq)]
pub struct Path2d {
    points: Vec<Vector2>,
    closed: bool,
    lengths: Vec<f32>,
}

impl Path2d {
    pub fn new(points: Vec<Vector2>, closed: bool) -> Self {
        let mut path = Self {
            points,
            closed,
            lengths: Vec::new(),
        };
        path.update();
        path
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// Control points for editing. Lengths are stale until `update()`.
    pub fn points_mut(&mut self) -> &mut Vec<Vector2> {
        &mut self.points
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Recomputes and returns the total length.
    pub fn update(&mut self) -> f32 {
        self.lengths.clear();
        let n = self.points.len();
        if n > 1 {
            for i in 0..n - 1 {
                self.lengths.push(distance(self.points[i], self.points[i + 1]));
            }
            if self.closed {
                self.lengths.push(distance(self.points[n - 1], self.points[0]));
            }
        }
        self.length()
    }

    pub fn length(&self) -> f32 {
        self.lengths.iter().sum()
    }

    pub fn get_position(&self, ratio: f32) -> Result<Vector2, PathError> {
        let first = *self.points.first().ok_or(PathError::Empty { path: "Path2d" })?;
        let last = *self.points.last().unwrap_or(&first);
        let end = if self.closed { first } else { last };

        let ratio = wrap_ratio(ratio);
        let total = self.length();
        if total == 0.0 || ratio == 0.0 {
            return Ok(first);
        }
        if ratio == 1.0 {
            return Ok(end);
        }

        match locate(self.lengths.iter().copied(), total * ratio) {
            Some((i, local)) => {
                let j = (i + 1) % self.points.len();
                Ok(self.points[i].lerp(self.points[j], local))
            }
            None => Ok(end),
        }
    }

    pub fn get_length(&self, ratio: f32) -> f32 {
        self.length() * wrap_ratio(ratio)
    }

    pub fn get_ratio(&self, length: f32) -> f32 {
        ratio_of(length, self.length())
    }
}

// =============================================================================
// PathCircle
// =============================================================================

/// Circular orbit around `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCircle {
    pub center: Vector2,
    pub radius: f32,
    /// Sweep towards decreasing angles instead of increasing ones.
    pub clockwise: bool,
}

impl PathCircle {
    pub fn new(center: Vector2, radius: f32, clockwise: bool) -> Self {
        Self {
            center,
            radius,
            clockwise,
        }
    }

    pub fn length(&self) -> f32 {
        circumference(self.radius)
    }

    pub fn get_position(&self, ratio: f32) -> Vector2 {
        self.get_position_from(ratio, 0.0)
    }

    /// Point at `360 * ratio` degrees past `from_angle`.
    pub fn get_position_from(&self, ratio: f32, from_angle: f32) -> Vector2 {
        let sweep = 360.0 * wrap_ratio(ratio);
        let angle = if self.clockwise {
            from_angle - sweep
        } else {
            from_angle + sweep
        };
        self.center + Vector2::length_angle(self.radius, angle)
    }

    pub fn get_length(&self, ratio: f32) -> f32 {
        self.length() * wrap_ratio(ratio)
    }

    pub fn get_ratio(&self, length: f32) -> f32 {
        ratio_of(length, self.length())
    }
}

// =============================================================================
// PathTone
// =============================================================================

/// Cyclic color blend: `N` colors form `N` equal segments, the last one
/// blending back into the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTone {
    colors: Vec<Color>,
}

impl PathTone {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// One unit per segment.
    pub fn length(&self) -> f32 {
        self.colors.len() as f32
    }

    pub fn get_position(&self, ratio: f32) -> Result<Color, PathError> {
        let n = self.colors.len();
        if n == 0 {
            return Err(PathError::Empty { path: "PathTone" });
        }

        let segment = wrap_ratio(ratio) * n as f32;
        let base = segment.floor();
        let i = (base as usize) % n;
        let j = (i + 1) % n;
        Ok(blend_color(self.colors[i], self.colors[j], segment - base))
    }

    pub fn get_length(&self, ratio: f32) -> f32 {
        self.length() * wrap_ratio(ratio)
    }

    pub fn get_ratio(&self, length: f32) -> f32 {
        ratio_of(length, self.length())
    }
}

/// Linear blend of two colors, alpha included.
pub fn blend_color(a: Color, b: Color, ratio: f32) -> Color {
    Color::new(
        lerp(a.r, b.r, ratio),
        lerp(a.g, b.g, ratio),
        lerp(a.b, b.b, ratio),
        lerp(a.a, b.a, ratio),
    )
}

fn ratio_of(length: f32, total: f32) -> f32 {
    if total == 0.0 {
        return 0.0;
    }
    length.rem_euclid(total) / total
}

// =============================================================================
// Path
// =============================================================================

/// Any path an attribute can be animated along.
#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    Linear(Path1d),
    Polyline(Path2d),
    Circle(PathCircle),
    Tone(PathTone),
}

impl Path {
    /// Kind of value `get_position` produces.
    pub fn kind(&self) -> ValueKind {
        match self {
            Path::Linear(_) => ValueKind::Scalar,
            Path::Polyline(_) | Path::Circle(_) => ValueKind::Vector,
            Path::Tone(_) => ValueKind::Color,
        }
    }

    pub fn length(&self) -> f32 {
        match self {
            Path::Linear(p) => p.length(),
            Path::Polyline(p) => p.length(),
            Path::Circle(p) => p.length(),
            Path::Tone(p) => p.length(),
        }
    }

    pub fn get_position(&self, ratio: f32) -> Result<PathValue, PathError> {
        Ok(match self {
            Path::Linear(p) => PathValue::Scalar(p.get_position(ratio)?),
            Path::Polyline(p) => PathValue::Vector(p.get_position(ratio)?),
            Path::Circle(p) => PathValue::Vector(p.get_position(ratio)),
            Path::Tone(p) => PathValue::Color(p.get_position(ratio)?),
        })
    }

    pub fn get_length(&self, ratio: f32) -> f32 {
        match self {
            Path::Linear(p) => p.get_length(ratio),
            Path::Polyline(p) => p.get_length(ratio),
            Path::Circle(p) => p.get_length(ratio),
            Path::Tone(p) => p.get_length(ratio),
        }
    }

    pub fn get_ratio(&self, length: f32) -> f32 {
        match self {
            Path::Linear(p) => p.get_ratio(length),
            Path::Polyline(p) => p.get_ratio(length),
            Path::Circle(p) => p.get_ratio(length),
            Path::Tone(p) => p.get_ratio(length),
        }
    }
}

impl From<Path1d> for Path {
    fn from(p: Path1d) -> Self {
        Path::Linear(p)
    }
}

impl From<Path2d> for Path {
    fn from(p: Path2d) -> Self {
        Path::Polyline(p)
    }
}

impl From<PathCircle> for Path {
    fn from(p: PathCircle) -> Self {
        Path::Circle(p)
    }
}

impl From<PathTone> for Path {
    fn from(p: PathTone) -> Self {
        Path::Tone(p)
    }
}
