//! Vector Calculator Core Library
//!
//! Pure 3D vector algebra over `f64` components: sums, differences, dot and
//! cross products, magnitudes, unit vectors, projections, the vector triple
//! product, the angle between two vectors, and the text of plane and line
//! equations.
//!
//! Nothing here keeps state or performs I/O. Degenerate inputs (zero-length
//! vectors used as divisors) are answered with documented sentinel values
//! rather than errors; see [`vector_math`].

// Core types and utilities
pub mod core_types;

pub mod equations;
pub mod vector_math;

// Re-export core types
pub use core_types::{Components, Vec3};
pub use equations::{line_equation_text, plane_equation_text, Line, Plane};
pub use vector_math::{
    add, angle_degrees, cross, dot, magnitude, scalar_projection, scale, subtract,
    triple_product, unit, vector_projection,
};
