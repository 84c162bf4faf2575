//!
//! Spacemath is a small linear algebra library for 3D graphics.
//!
//! It provides 2/3/4-component vectors, 3x3 and 4x4 matrices stored in column-major order,
//! quaternions, and the projection helpers that map between object space and window coordinates.
//!
//! All transforms follow the pre-multiplication convention for column vectors: `M * v`.
//!
//! # Example
//!
//! ```
//! use spacemath::{Mat4, Vec3, Vec4};
//!
//! let model = Mat4::translation(Vec3::new(5.0, 0.0, 0.0));
//! let moved = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(moved, Vec4::new(5.0, 0.0, 0.0, 1.0));
//! ```

pub mod error;
pub mod layout;
mod matrix;
pub mod project;
mod quat;
pub mod scalar;
mod serde_impls;
mod transform;
mod vec;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::LengthError;
pub use matrix::*;
pub use project::{DepthRange, Viewport, project, unproject};
pub use quat::*;
pub use vec::*;
