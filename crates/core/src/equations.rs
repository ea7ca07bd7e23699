//! Plane and line equations
//!
//! [`Plane`] and [`Line`] carry the vectors that define them and render their
//! equations through `Display`, every coefficient to two decimal places.

use std::fmt;

use crate::core_types::Vec3;
use crate::vector_math::{add, dot, scale};

/// Plane through `point` with normal `normal`: `n · r = n · point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self { normal, point }
    }

    /// Right-hand side `d` of `nx·x + ny·y + nz·z = d`.
    pub fn offset(&self) -> f64 {
        dot(self.normal, self.point)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}x + {:.2}y + {:.2}z = {:.2}",
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.offset()
        )
    }
}

/// Line through `point` along `direction`: `r(t) = point + t·direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub point: Vec3,
    pub direction: Vec3,
}

impl Line {
    pub fn new(point: Vec3, direction: Vec3) -> Self {
        Self { point, direction }
    }

    /// Point reached at parameter `t`.
    pub fn point_at(&self, t: f64) -> Vec3 {
        add(self.point, scale(self.direction, t))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, d) = (&self.point, &self.direction);
        write!(
            f,
            "x = {:.2} + {:.2}t, y = {:.2} + {:.2}t, z = {:.2} + {:.2}t",
            p.x, d.x, p.y, d.y, p.z, d.z
        )
    }
}

/// Equation text `nx·x + ny·y + nz·z = d` of the plane through `point` with
/// normal `normal`, e.g. `1.00x + 0.00y + 0.00z = 5.00`.
pub fn plane_equation_text(normal: Vec3, point: Vec3) -> String {
    Plane::new(normal, point).to_string()
}

/// Parametric equation text of the line through `point` along `direction`,
/// e.g. `x = 1.00 + 2.00t, y = 0.00 + 0.00t, z = 0.00 + 1.00t`.
pub fn line_equation_text(point: Vec3, direction: Vec3) -> String {
    Line::new(point, direction).to_string()
}
