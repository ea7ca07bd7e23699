//! Vector algebra over [`Vec3`]
//!
//! Every function in this module is pure and total: no function returns an
//! error or panics. Division by a zero magnitude is defused with an exact
//! comparison against `0.0` and answered with a sentinel value:
//!
//! | Function | Zero-length case | Sentinel |
//! |---|---|---|
//! | [`unit`] | `v` | `(0, 0, 0)` |
//! | [`scalar_projection`] | `b` | `0.0` |
//! | [`angle_degrees`] | `a` or `b` | `0.0` |
//! | [`vector_projection`] | `b` | none, components are NaN |
//!
//! Magnitudes that are merely tiny are not special-cased and divide through
//! normally. Non-finite values are never folded into zero.
//!
//! # Usage
//! ```
//! use vector_calc_core::vector_math::{cross, magnitude};
//! use vector_calc_core::Vec3;
//!
//! let z = cross(Vec3::x(), Vec3::y());
//! assert_eq!(z, Vec3::z());
//! assert_eq!(magnitude(Vec3::new(3.0, 4.0, 0.0)), 5.0);
//! ```

use tracing::debug;

use crate::core_types::{Components, Vec3};

/// Component-wise sum `a + b`.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Dot product `Σ aᵢbᵢ`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(&b)
}

/// Cross product `a × b`.
///
/// `(a_y b_z − a_z b_y, a_z b_x − a_x b_z, a_x b_y − a_y b_x)`, so
/// `cross(a, b) == -cross(b, a)`.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(&b)
}

/// Euclidean norm `√(v · v)`. Never negative.
#[inline]
pub fn magnitude(v: Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Multiplies every component of `v` by `k`.
#[inline]
pub fn scale(v: Vec3, k: f64) -> Vec3 {
    v * k
}

/// Unit vector in the direction of `v`.
///
/// A vector whose magnitude is exactly zero has no direction; the zero vector
/// is returned for it instead of NaN components.
pub fn unit(v: Vec3) -> Vec3 {
    let mag = magnitude(v);
    if mag == 0.0 {
        debug!("unit vector of zero-length input, returning zero vector");
        return Vec3::zeros();
    }
    v / mag
}

/// Signed length of the component of `a` along `b`: `(a · b) / |b|`.
///
/// Returns `0.0` when `b · b` is exactly zero.
pub fn scalar_projection(a: Vec3, b: Vec3) -> f64 {
    let b_len_sq = dot(b, b);
    if b_len_sq == 0.0 {
        debug!(a = %Components(&a), "scalar projection onto zero-length vector, returning 0");
        return 0.0;
    }
    dot(a, b) / b_len_sq.sqrt()
}

/// Component of `a` along `b`: `b · ((a · b) / (b · b))`.
///
/// Unlike [`scalar_projection`], a zero-length `b` is not guarded: the
/// quotient is `0 / 0` and every component of the result is NaN.
pub fn vector_projection(a: Vec3, b: Vec3) -> Vec3 {
    let b_len_sq = dot(b, b);
    if b_len_sq == 0.0 {
        debug!(a = %Components(&a), "vector projection onto zero-length vector is undefined");
    }
    scale(b, dot(a, b) / b_len_sq)
}

/// Vector triple product `a × (b × c)`.
///
/// `b × c` is formed first. This is not the scalar triple product `a · (b × c)`.
#[inline]
pub fn triple_product(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    cross(a, cross(b, c))
}

/// Angle between `a` and `b` in degrees, in `[0, 180]`.
///
/// Returns `0.0` if either magnitude is exactly zero. The cosine is clamped to
/// `[-1, 1]` so rounding on (anti)parallel inputs cannot push `acos` out of
/// its domain; a NaN cosine stays NaN.
pub fn angle_degrees(a: Vec3, b: Vec3) -> f64 {
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        debug!(
            a = %Components(&a),
            b = %Components(&b),
            "angle with zero-length vector, returning 0"
        );
        return 0.0;
    }

    let cos_theta = (dot(a, b) / (mag_a * mag_b)).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_add_and_subtract_componentwise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(add(a, b), Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(subtract(a, b), Vec3::new(-3.0, -3.0, -3.0));
    }

    #[test]
    fn test_dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        // 4 - 10 + 18
        assert_eq!(dot(a, b), 12.0);
    }

    #[test]
    fn test_cross_product_of_basis_vectors() {
        assert_eq!(cross(Vec3::x(), Vec3::y()), Vec3::z());
        assert_eq!(cross(Vec3::y(), Vec3::z()), Vec3::x());
        assert_eq!(cross(Vec3::z(), Vec3::x()), Vec3::y());
        assert_eq!(cross(Vec3::y(), Vec3::x()), -Vec3::z());
    }

    #[test]
    fn test_cross_product_general() {
        let a = Vec3::new(2.0, 3.0, 4.0);
        let b = Vec3::new(5.0, 6.0, 7.0);
        // (3*7 - 4*6, 4*5 - 2*7, 2*6 - 3*5)
        assert_eq!(cross(a, b), Vec3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(Vec3::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(magnitude(Vec3::new(-2.0, -3.0, -6.0)), 7.0);
        assert_eq!(magnitude(Vec3::zeros()), 0.0);
    }

    #[test]
    fn test_scale() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(scale(v, 2.0), Vec3::new(2.0, -4.0, 1.0));
        assert_eq!(scale(v, 0.0), Vec3::zeros());
    }

    #[test]
    fn test_unit_vector() {
        let u = unit(Vec3::new(0.0, 3.0, 4.0));
        assert_relative_eq!(u, Vec3::new(0.0, 0.6, 0.8), epsilon = 1e-12);
        assert_relative_eq!(magnitude(u), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_of_zero_vector_is_exactly_zero() {
        let u = unit(Vec3::zeros());
        assert_eq!(u, Vec3::zeros());
        assert!(u.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_unit_of_tiny_vector_is_not_special_cased() {
        let u = unit(Vec3::new(1e-150, 0.0, 0.0));
        assert_relative_eq!(u.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_projection() {
        let a = Vec3::new(3.0, 4.0, 0.0);
        let b = Vec3::new(2.0, 0.0, 0.0);
        assert_eq!(scalar_projection(a, b), 3.0);

        let opposite = Vec3::new(-1.0, 0.0, 0.0);
        assert_eq!(scalar_projection(a, opposite), -3.0);
    }

    #[test]
    fn test_scalar_projection_onto_zero_vector() {
        let a = Vec3::new(3.0, 4.0, 5.0);
        assert_eq!(scalar_projection(a, Vec3::zeros()), 0.0);
    }

    #[test]
    fn test_vector_projection() {
        let a = Vec3::new(3.0, 4.0, 5.0);
        let b = Vec3::new(0.0, 2.0, 0.0);
        assert_relative_eq!(vector_projection(a, b), Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_vector_projection_onto_zero_vector_is_nan() {
        let p = vector_projection(Vec3::new(1.0, 2.0, 3.0), Vec3::zeros());
        assert!(p.iter().all(|c| c.is_nan()), "expected NaN components, got {p:?}");
    }

    #[test]
    fn test_triple_product_evaluates_inner_cross_first() {
        // x × (y × z) = x × x = 0
        assert_eq!(triple_product(Vec3::x(), Vec3::y(), Vec3::z()), Vec3::zeros());
        // (x × y) × z would also be 0 here, so check an asymmetric case:
        // x × (x × y) = x × z = -y, while (x × x) × y = 0
        assert_eq!(triple_product(Vec3::x(), Vec3::x(), Vec3::y()), -Vec3::y());
    }

    #[test]
    fn test_angle_degrees() {
        assert_relative_eq!(angle_degrees(Vec3::x(), Vec3::y()), 90.0, epsilon = 1e-12);
        assert_relative_eq!(angle_degrees(Vec3::x(), -Vec3::x()), 180.0, epsilon = 1e-12);
        assert_relative_eq!(
            angle_degrees(Vec3::x(), Vec3::new(1.0, 1.0, 0.0)),
            45.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_angle_with_zero_vector_is_zero() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(angle_degrees(a, Vec3::zeros()), 0.0);
        assert_eq!(angle_degrees(Vec3::zeros(), a), 0.0);
        assert_eq!(angle_degrees(Vec3::zeros(), Vec3::zeros()), 0.0);
    }

    #[test]
    fn test_angle_of_parallel_vectors_survives_rounding() {
        // |v|² rounds below v · v here, giving a cosine just above 1
        let v = Vec3::new(1.0, 1.0, 1.0);
        let angle = angle_degrees(v, v);
        assert!(!angle.is_nan());
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_non_finite_components_propagate() {
        let v = Vec3::new(f64::NAN, 0.0, 0.0);
        assert!(magnitude(v).is_nan());
        assert!(angle_degrees(v, Vec3::x()).is_nan());
        assert!(add(v, Vec3::x()).x.is_nan());
    }
}
