//! Transform scripts and model matrix composition.
//!
//! Scene descriptions attach an ordered list of transform operations to
//! each object. This module turns that list into a single model matrix:
//!
//! ```
//! use lithos::{TransformOp, compose};
//!
//! let model = compose(&[
//!     TransformOp::Scale { x: 2.5, y: 2.5, z: 2.5 },
//!     TransformOp::RotateX(90.0),
//!     TransformOp::Translate { x: 0.0, y: 2.0, z: 0.0 },
//! ]);
//! ```
//!
//! Operations apply to geometry in listed order: each op's elementary
//! matrix pre-multiplies the accumulated matrix (`M = T_op * M`), so for a
//! point `p` the net effect is `T_n * ... * T_1 * p`. Order matters —
//! translating then rotating is not rotating then translating.
//!
//! Already-parsed script records (`opcode` string plus float arguments)
//! convert through [`TransformOp::from_record`] or compose directly with
//! [`compose_records`]. Unrecognized opcodes become [`TransformOp::Unknown`]
//! and contribute nothing; scene scripts rely on this to carry comments
//! and future opcodes.

use glam::{Mat4, Vec3};

/// One operation in a transform script.
///
/// Rotation angles are in degrees; a positive angle is a right-handed
/// rotation about the named axis. The matrices produced are column-major
/// [`Mat4`]s, directly consumable by glam and by WebGL-style uniform
/// upload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Translate by `(x, y, z)`. Opcode `T`.
    Translate { x: f32, y: f32, z: f32 },
    /// Rotate about the X axis, in degrees. Opcode `Rx`.
    RotateX(f32),
    /// Rotate about the Y axis, in degrees. Opcode `Ry`.
    RotateY(f32),
    /// Rotate about the Z axis, in degrees. Opcode `Rz`.
    RotateZ(f32),
    /// Non-uniform scale by `(x, y, z)`. Opcode `S`.
    Scale { x: f32, y: f32, z: f32 },
    /// An unrecognized record. Contributes nothing when composed.
    Unknown,
}

impl TransformOp {
    /// Maps an already-parsed script record to an operation.
    ///
    /// The record is an opcode string plus its numeric arguments, as
    /// produced by the external scene parser. Extra arguments are
    /// ignored; an unrecognized opcode, or a record with too few
    /// arguments, maps to [`TransformOp::Unknown`].
    ///
    /// # Example
    ///
    /// ```
    /// use lithos::TransformOp;
    ///
    /// let op = TransformOp::from_record("Ry", &[-90.0]);
    /// assert_eq!(op, TransformOp::RotateY(-90.0));
    ///
    /// // Comments and future opcodes are no-ops, not errors.
    /// assert_eq!(TransformOp::from_record("Q", &[1.0]), TransformOp::Unknown);
    /// ```
    pub fn from_record(opcode: &str, args: &[f32]) -> Self {
        match (opcode, args) {
            ("T", [x, y, z, ..]) => TransformOp::Translate {
                x: *x,
                y: *y,
                z: *z,
            },
            ("Rx", [deg, ..]) => TransformOp::RotateX(*deg),
            ("Ry", [deg, ..]) => TransformOp::RotateY(*deg),
            ("Rz", [deg, ..]) => TransformOp::RotateZ(*deg),
            ("S", [x, y, z, ..]) => TransformOp::Scale {
                x: *x,
                y: *y,
                z: *z,
            },
            _ => {
                log::debug!(
                    "transform record {opcode:?} with {} args has no effect",
                    args.len()
                );
                TransformOp::Unknown
            }
        }
    }

    /// Returns this operation's elementary 4×4 matrix.
    ///
    /// Single-operation scripts therefore reproduce the plain glam
    /// translation/rotation/scale matrices exactly. [`TransformOp::Unknown`]
    /// yields the identity.
    pub fn matrix(&self) -> Mat4 {
        match *self {
            TransformOp::Translate { x, y, z } => Mat4::from_translation(Vec3::new(x, y, z)),
            TransformOp::RotateX(deg) => Mat4::from_rotation_x(deg.to_radians()),
            TransformOp::RotateY(deg) => Mat4::from_rotation_y(deg.to_radians()),
            TransformOp::RotateZ(deg) => Mat4::from_rotation_z(deg.to_radians()),
            TransformOp::Scale { x, y, z } => Mat4::from_scale(Vec3::new(x, y, z)),
            TransformOp::Unknown => Mat4::IDENTITY,
        }
    }
}

/// Composes a transform script into one model matrix.
///
/// Starts from the identity and folds each operation in order with
/// `M = T_op * M`, so operations act on geometry in the order listed.
/// The empty script composes to the identity.
///
/// # Example
///
/// ```
/// use lithos::{TransformOp, compose, Vec4};
///
/// // Translate along X, then rotate the result about Z.
/// let m = compose(&[
///     TransformOp::Translate { x: 1.0, y: 0.0, z: 0.0 },
///     TransformOp::RotateZ(90.0),
/// ]);
/// let p = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
/// assert!((p.y - 1.0).abs() < 1e-6);
/// ```
pub fn compose(ops: &[TransformOp]) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    for op in ops {
        if let TransformOp::Unknown = op {
            continue;
        }
        m = op.matrix() * m;
    }
    m
}

/// Composes raw script records into one model matrix.
///
/// Convenience wrapper over [`TransformOp::from_record`] and [`compose`]
/// for callers holding the parser's `(opcode, args)` form directly.
///
/// # Example
///
/// ```
/// use lithos::compose_records;
///
/// let model = compose_records([
///     ("S", vec![2.5, 2.5, 2.5]),
///     ("Rx", vec![90.0]),
///     ("T", vec![0.0, 2.0, 0.0]),
/// ]);
/// ```
pub fn compose_records<S, A>(records: impl IntoIterator<Item = (S, A)>) -> Mat4
where
    S: AsRef<str>,
    A: AsRef<[f32]>,
{
    let mut m = Mat4::IDENTITY;
    for (opcode, args) in records {
        let op = TransformOp::from_record(opcode.as_ref(), args.as_ref());
        if let TransformOp::Unknown = op {
            continue;
        }
        m = op.matrix() * m;
    }
    m
}
