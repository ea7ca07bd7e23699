//! Vector type alias for 3D points and displacements.

use nalgebra::Vector3;
use std::fmt;

/// 3D vector type for points and displacements.
///
/// This is a simple alias for `nalgebra::Vector3<f64>`, used by every
/// operation in [`crate::vector_math`]. It is `Copy`, so operations take it by
/// value and always hand back a fresh vector.
pub type Vec3 = Vector3<f64>;

/// Display adapter rendering a [`Vec3`] as `(x, y, z)` to two decimal places.
///
/// # Usage
/// ```
/// use vector_calc_core::{Components, Vec3};
///
/// let v = Vec3::new(1.0, -2.5, 3.0);
/// assert_eq!(Components(&v).to_string(), "(1.00, -2.50, 3.00)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Components<'a>(pub &'a Vec3);

impl fmt::Display for Components<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_rounds_to_two_places() {
        let v = Vec3::new(1.234, 5.0, -0.456);
        assert_eq!(Components(&v).to_string(), "(1.23, 5.00, -0.46)");
    }

    #[test]
    fn test_components_keeps_non_finite_values_visible() {
        let v = Vec3::new(f64::NAN, f64::INFINITY, 0.0);
        assert_eq!(Components(&v).to_string(), "(NaN, inf, 0.00)");
    }
}
