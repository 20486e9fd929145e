//! # Lithos
//!
//! **Procedural meshes, transform scripts, and Phong shading for WebGL
//! scene construction.**
//!
//! Lithos is the geometry-and-shading core of a scene-description
//! pipeline: an external parser turns script text into records, an
//! external renderer owns the GPU. In between, this crate generates
//! triangle meshes, folds transform scripts into model matrices, and
//! carries the GLSL program pair the renderer compiles.
//!
//! ## Quick Start
//!
//! ```
//! use lithos::{MeshData, compose_records, Vec4};
//!
//! // Geometry for a primitive request from the scene description.
//! let globe = MeshData::sphere(20, 20).unwrap();
//! assert_eq!(globe.vertex_count(), 21 * 21);
//!
//! // Model matrix from the object's transform script.
//! let model = compose_records([
//!     ("S", vec![2.5, 2.5, 2.5]),
//!     ("Rx", vec![90.0]),
//!     ("T", vec![0.0, 2.0, 0.0]),
//! ]);
//! let center = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(center.y, 2.0);
//! ```
//!
//! ## Philosophy
//!
//! - **Pure functions, owned buffers** — Mesh and matrix builders read
//!   only their arguments and return values the caller owns. No shared
//!   state, no I/O, safe to call from any thread.
//! - **Conventions pinned down** — Winding, face order, UV atlas layout,
//!   and rotation handedness are fixed and tested, so generated geometry
//!   matches reference assets bit for bit.
//! - **Shader text is data** — The GLSL sources ([`VERTEX_SHADER`],
//!   [`FRAGMENT_SHADER`]) are string constants with a stable
//!   attribute/uniform contract, not templated logic.

mod mesh;
mod shader;
mod transform;

pub use mesh::{MeshData, MeshError, Vertex3d};
pub use shader::{FRAGMENT_SHADER, VERTEX_SHADER};
pub use transform::{TransformOp, compose, compose_records};

// Re-export glam math types for convenience
pub use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
