//! Procedural triangle mesh generation.
//!
//! This module produces the CPU-side geometry buffers a renderer uploads:
//!
//! - [`MeshData`] — Owned position/normal/UV buffers with an optional index list
//! - [`Vertex3d`] — An interleaved vertex format for renderers that prefer one buffer
//! - [`MeshError`] — Fail-fast rejection of degenerate generation parameters
//!
//! # Creating Meshes
//!
//! ```
//! use lithos::MeshData;
//!
//! // Unit cube, expanded triangle list (no indices)
//! let cube = MeshData::cube();
//! assert_eq!(cube.vertex_count(), 36);
//!
//! // UV sphere with 20 stacks and 20 sectors
//! let sphere = MeshData::sphere(20, 20).unwrap();
//! assert!(sphere.is_indexed());
//!
//! // 10x10 ground plane on the XZ axis
//! let ground = MeshData::plane(10.0);
//! ```
//!
//! # Buffer Layout
//!
//! Attribute buffers are flat `f32` sequences grouped in fixed-size tuples:
//! three per position/normal, two per UV coordinate. The buffers are
//! positionally aligned — vertex `i` is described by `positions[3i..3i+3]`,
//! `normals[3i..3i+3]`, and `uv_coords[2i..2i+2]`. Generation is
//! deterministic, allocation-only, and free of I/O, so meshes may be built
//! from any thread without synchronization.

use glam::Vec3;

/// Errors that can occur when generating a mesh.
#[derive(Debug)]
pub enum MeshError {
    /// Sphere parameters would produce degenerate geometry
    /// (fewer than 1 stack or fewer than 3 sectors).
    DegenerateSphere { num_stacks: u32, num_sectors: u32 },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::DegenerateSphere {
                num_stacks,
                num_sectors,
            } => write!(
                f,
                "degenerate sphere: {} stacks, {} sectors (need >= 1 and >= 3)",
                num_stacks, num_sectors
            ),
        }
    }
}

impl std::error::Error for MeshError {}

/// An interleaved vertex with position, normal, and texture coordinates.
///
/// [`MeshData`] keeps separate attribute buffers; renderers that want a
/// single interleaved vertex buffer can convert with
/// [`MeshData::interleave`]. The struct is `#[repr(C)]` and derives
/// [`bytemuck::Pod`], so a `&[Vertex3d]` casts directly to bytes for
/// upload.
///
/// # Memory Layout
///
/// Each vertex occupies 32 bytes:
/// - `position`: 12 bytes (3 × f32) at offset 0
/// - `normal`: 12 bytes (3 × f32) at offset 12
/// - `uv`: 8 bytes (2 × f32) at offset 24
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3d {
    /// The 3D position of this vertex in model space.
    pub position: [f32; 3],
    /// The surface normal vector (normalized for all built-in meshes).
    pub normal: [f32; 3],
    /// Texture coordinates in the range [0, 1].
    pub uv: [f32; 2],
}

impl Vertex3d {
    /// Creates a new vertex with the given position, normal, and UV coordinates.
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// CPU-side triangle mesh geometry.
///
/// A `MeshData` owns flat attribute buffers plus an optional index list.
/// Indexed meshes (the sphere, the plane) reference shared vertices
/// through `indices`; non-indexed meshes (the cube) are already-expanded
/// triangle lists and leave `indices` empty. Either way every three
/// consecutive vertices — drawn directly or through the index list — form
/// one counter-clockwise-wound, outward-facing triangle.
///
/// The buffers are plain `Vec`s owned by the caller after creation;
/// nothing in this crate mutates them later. Hand them to a renderer
/// as-is, or call [`MeshData::interleave`] for a single [`Vertex3d`]
/// buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    /// Vertex positions, three `f32` per vertex.
    pub positions: Vec<f32>,
    /// Vertex normals, three `f32` per vertex, unit length.
    pub normals: Vec<f32>,
    /// Texture coordinates, two `f32` per vertex.
    pub uv_coords: Vec<f32>,
    /// Triangle indices into the attribute buffers; empty for
    /// non-indexed meshes.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Creates a cube centered at the origin spanning [-1, 1] on each axis.
    ///
    /// The cube is an expanded triangle list: 36 vertices forming 12
    /// triangles (two per face), with no index buffer. Each face carries
    /// its own constant outward normal, so edges shade hard. Faces are
    /// emitted in a fixed order — front (+Z), back (-Z), left (-X),
    /// right (+X), top (+Y), bottom (-Y) — and each face's two triangles
    /// share the diagonal and wind counter-clockwise seen from outside.
    ///
    /// # UV Atlas
    ///
    /// Texture coordinates unwrap the six faces into a 2×3 grid of the
    /// unit UV square (two columns, three rows). The cell assignment and
    /// per-face orientation are fixed constants chosen to match the
    /// reference atlas textures, not derived from face geometry:
    ///
    /// | row (v)     | left column (u 0..0.5) | right column (u 0.5..1) |
    /// |-------------|------------------------|-------------------------|
    /// | 2/3 .. 1    | front                  | bottom                  |
    /// | 1/3 .. 2/3  | right                  | left                    |
    /// | 0 .. 1/3    | top                    | back                    |
    ///
    /// # Example
    ///
    /// ```
    /// use lithos::MeshData;
    ///
    /// let cube = MeshData::cube();
    /// assert_eq!(cube.positions.len(), 108);
    /// assert_eq!(cube.uv_coords.len(), 72);
    /// assert!(!cube.is_indexed());
    /// ```
    pub fn cube() -> Self {
        #[rustfmt::skip]
        let positions = vec![
            // front face (+Z)
            -1.0, -1.0,  1.0,
             1.0, -1.0,  1.0,
             1.0,  1.0,  1.0,
            -1.0, -1.0,  1.0,
             1.0,  1.0,  1.0,
            -1.0,  1.0,  1.0,
            // back face (-Z)
             1.0, -1.0, -1.0,
            -1.0, -1.0, -1.0,
            -1.0,  1.0, -1.0,
             1.0, -1.0, -1.0,
            -1.0,  1.0, -1.0,
             1.0,  1.0, -1.0,
            // left face (-X)
            -1.0, -1.0, -1.0,
            -1.0, -1.0,  1.0,
            -1.0,  1.0,  1.0,
            -1.0, -1.0, -1.0,
            -1.0,  1.0,  1.0,
            -1.0,  1.0, -1.0,
            // right face (+X)
             1.0, -1.0,  1.0,
             1.0, -1.0, -1.0,
             1.0,  1.0, -1.0,
             1.0, -1.0,  1.0,
             1.0,  1.0, -1.0,
             1.0,  1.0,  1.0,
            // top face (+Y)
            -1.0,  1.0,  1.0,
             1.0,  1.0,  1.0,
             1.0,  1.0, -1.0,
            -1.0,  1.0,  1.0,
             1.0,  1.0, -1.0,
            -1.0,  1.0, -1.0,
            // bottom face (-Y)
            -1.0, -1.0, -1.0,
             1.0, -1.0, -1.0,
             1.0, -1.0,  1.0,
            -1.0, -1.0, -1.0,
             1.0, -1.0,  1.0,
            -1.0, -1.0,  1.0,
        ];

        #[rustfmt::skip]
        let normals = vec![
            // front face
             0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,
             0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,
            // back face
             0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,
             0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,
            // left face
            -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,
            -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,
            // right face
             1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,
             1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,
            // top face
             0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,
             0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,
            // bottom face
             0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,
             0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,
        ];

        // Atlas row boundaries.
        const V1: f32 = 1.0 / 3.0;
        const V2: f32 = 2.0 / 3.0;

        #[rustfmt::skip]
        let uv_coords = vec![
            // front face: left column, top row
            0.0, V2,   0.5, V2,   0.5, 1.0,
            0.0, V2,   0.5, 1.0,  0.0, 1.0,
            // back face: right column, bottom row
            0.5, V1,   1.0, V1,   1.0, 0.0,
            0.5, V1,   1.0, 0.0,  0.5, 0.0,
            // left face: right column, middle row
            0.5, V1,   1.0, V1,   1.0, V2,
            0.5, V1,   1.0, V2,   0.5, V2,
            // right face: left column, middle row
            0.0, V1,   0.5, V1,   0.5, V2,
            0.0, V1,   0.5, V2,   0.0, V2,
            // top face: left column, bottom row
            0.0, 0.0,  0.5, 0.0,  0.5, V1,
            0.0, 0.0,  0.5, V1,   0.0, V1,
            // bottom face: right column, top row
            0.5, V2,   1.0, V2,   1.0, 1.0,
            0.5, V2,   1.0, 1.0,  0.5, 1.0,
        ];

        Self {
            positions,
            normals,
            uv_coords,
            indices: Vec::new(),
        }
    }

    /// Creates a UV sphere of radius 1 centered at the origin.
    ///
    /// The sphere is built on a `(num_stacks + 1) × (num_sectors + 1)`
    /// vertex grid. The stack angle sweeps from +90° at the +Z pole down
    /// to -90° at the -Z pole in `num_stacks` equal steps; the sector
    /// angle sweeps a full turn in `num_sectors` equal steps, decreasing
    /// (clockwise seen from +Z) to match the reference UV convention.
    /// The seam column is duplicated so UVs wrap cleanly.
    ///
    /// On the unit sphere the normal equals the position, and vertex
    /// `(i, j)` gets UV `(j / num_sectors, i / num_stacks)`.
    ///
    /// Triangles are indexed; the two pole rings skip their degenerate
    /// triangle, yielding exactly `2 * num_stacks * num_sectors -
    /// 2 * num_sectors` triangles. Poles remain singular grid rows shared
    /// by a full ring rather than duplicated fan centers.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateSphere`] if `num_stacks < 1` or
    /// `num_sectors < 3`; no partial buffers are produced.
    ///
    /// # Example
    ///
    /// ```
    /// use lithos::MeshData;
    ///
    /// let sphere = MeshData::sphere(20, 20).unwrap();
    /// assert_eq!(sphere.vertex_count(), 21 * 21);
    /// assert_eq!(sphere.triangle_count(), 2 * 20 * 20 - 2 * 20);
    /// ```
    pub fn sphere(num_stacks: u32, num_sectors: u32) -> Result<Self, MeshError> {
        use std::f32::consts::{FRAC_PI_2, PI, TAU};

        if num_stacks < 1 || num_sectors < 3 {
            return Err(MeshError::DegenerateSphere {
                num_stacks,
                num_sectors,
            });
        }

        let vertex_count = ((num_stacks + 1) * (num_sectors + 1)) as usize;
        let mut positions = Vec::with_capacity(vertex_count * 3);
        let mut normals = Vec::with_capacity(vertex_count * 3);
        let mut uv_coords = Vec::with_capacity(vertex_count * 2);

        for i in 0..=num_stacks {
            let stack_angle = FRAC_PI_2 - i as f32 * PI / num_stacks as f32;
            let ring_radius = stack_angle.cos();
            let z = stack_angle.sin();

            for j in 0..=num_sectors {
                // Negative sweep: clockwise from +Z, per the reference
                // UV convention.
                let sector_angle = -(j as f32) * TAU / num_sectors as f32;
                let x = ring_radius * sector_angle.cos();
                let y = ring_radius * sector_angle.sin();

                positions.extend_from_slice(&[x, y, z]);
                normals.extend_from_slice(&[x, y, z]);
                uv_coords.push(j as f32 / num_sectors as f32);
                uv_coords.push(i as f32 / num_stacks as f32);
            }
        }

        let triangle_count = (2 * num_stacks * num_sectors - 2 * num_sectors) as usize;
        let mut indices = Vec::with_capacity(triangle_count * 3);

        for i in 0..num_stacks {
            let k1 = i * (num_sectors + 1);
            let k2 = k1 + num_sectors + 1;
            for j in 0..num_sectors {
                if i != 0 {
                    indices.extend_from_slice(&[k1 + j, k2 + j, k1 + j + 1]);
                }
                if i != num_stacks - 1 {
                    indices.extend_from_slice(&[k1 + j + 1, k2 + j, k2 + j + 1]);
                }
            }
        }

        Ok(Self {
            positions,
            normals,
            uv_coords,
            indices,
        })
    }

    /// Creates a flat square plane on the XZ axis (horizontal ground plane).
    ///
    /// The plane is centered at the origin at `y = 0` with its normal
    /// pointing up (+Y): four vertices, two indexed triangles, and UVs
    /// spanning the full [0, 1] range.
    pub fn plane(size: f32) -> Self {
        let half = size * 0.5;

        #[rustfmt::skip]
        let positions = vec![
            -half, 0.0, -half,
             half, 0.0, -half,
             half, 0.0,  half,
            -half, 0.0,  half,
        ];

        #[rustfmt::skip]
        let normals = vec![
            0.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
        ];

        #[rustfmt::skip]
        let uv_coords = vec![
            0.0, 0.0,
            1.0, 0.0,
            1.0, 1.0,
            0.0, 1.0,
        ];

        Self {
            positions,
            normals,
            uv_coords,
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }

    /// Returns the number of vertices in the attribute buffers.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles this mesh draws.
    ///
    /// Counts through the index buffer when one is present, otherwise
    /// directly through the expanded vertex list.
    pub fn triangle_count(&self) -> usize {
        if self.is_indexed() {
            self.indices.len() / 3
        } else {
            self.vertex_count() / 3
        }
    }

    /// Returns `true` if this mesh draws through an index buffer.
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Interleaves the attribute buffers into a single [`Vertex3d`] list.
    ///
    /// The index buffer is unaffected; indexed meshes keep indexing into
    /// the interleaved list. The result casts to bytes via
    /// [`bytemuck::cast_slice`] for upload.
    pub fn interleave(&self) -> Vec<Vertex3d> {
        let count = self.vertex_count();
        let mut vertices = Vec::with_capacity(count);

        for i in 0..count {
            vertices.push(Vertex3d::new(
                [
                    self.positions[3 * i],
                    self.positions[3 * i + 1],
                    self.positions[3 * i + 2],
                ],
                [
                    self.normals[3 * i],
                    self.normals[3 * i + 1],
                    self.normals[3 * i + 2],
                ],
                [self.uv_coords[2 * i], self.uv_coords[2 * i + 1]],
            ));
        }

        vertices
    }

    fn position(&self, index: usize) -> Vec3 {
        Vec3::new(
            self.positions[3 * index],
            self.positions[3 * index + 1],
            self.positions[3 * index + 2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal(mesh: &MeshData, index: usize) -> Vec3 {
        Vec3::new(
            mesh.normals[3 * index],
            mesh.normals[3 * index + 1],
            mesh.normals[3 * index + 2],
        )
    }

    #[test]
    fn cube_buffer_counts() {
        let cube = MeshData::cube();
        assert_eq!(cube.positions.len(), 108);
        assert_eq!(cube.normals.len(), 108);
        assert_eq!(cube.uv_coords.len(), 72);
        assert!(cube.indices.is_empty());
        assert_eq!(cube.vertex_count(), 36);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn cube_corners_on_unit_extents() {
        let cube = MeshData::cube();
        for &coord in &cube.positions {
            assert!(coord == 1.0 || coord == -1.0);
        }
    }

    #[test]
    fn cube_face_normals_replicated() {
        let cube = MeshData::cube();
        let expected = [
            Vec3::Z,
            Vec3::NEG_Z,
            Vec3::NEG_X,
            Vec3::X,
            Vec3::Y,
            Vec3::NEG_Y,
        ];

        for direction in expected {
            let count = (0..cube.vertex_count())
                .filter(|&i| normal(&cube, i) == direction)
                .count();
            assert_eq!(count, 6, "direction {direction:?}");
        }
    }

    #[test]
    fn cube_winding_faces_outward() {
        let cube = MeshData::cube();
        for tri in 0..cube.triangle_count() {
            let a = cube.position(3 * tri);
            let b = cube.position(3 * tri + 1);
            let c = cube.position(3 * tri + 2);
            let face = (b - a).cross(c - a);
            // CCW seen from outside: geometric winding agrees with the
            // stored outward normal.
            assert!(face.dot(normal(&cube, 3 * tri)) > 0.0, "triangle {tri}");
        }
    }

    #[test]
    fn cube_uv_atlas_cells() {
        let cube = MeshData::cube();
        for &coord in &cube.uv_coords {
            assert!((0.0..=1.0).contains(&coord));
        }
        // First front-face vertex sits at the top-left atlas cell corner.
        assert_eq!(cube.uv_coords[0], 0.0);
        assert_eq!(cube.uv_coords[1], 2.0 / 3.0);
        // First top-face vertex (face 5 of 6, vertex 24) at the atlas origin.
        assert_eq!(cube.uv_coords[48], 0.0);
        assert_eq!(cube.uv_coords[49], 0.0);
    }

    #[test]
    fn sphere_buffer_counts() {
        let sphere = MeshData::sphere(4, 6).unwrap();
        assert_eq!(sphere.vertex_count(), 5 * 7);
        assert_eq!(sphere.positions.len(), sphere.normals.len());
        assert_eq!(sphere.uv_coords.len() * 3, sphere.positions.len() * 2);
        assert_eq!(sphere.triangle_count(), 2 * 4 * 6 - 2 * 6);
        assert_eq!(sphere.indices.len() % 3, 0);
    }

    #[test]
    fn sphere_indices_in_range() {
        let sphere = MeshData::sphere(7, 11).unwrap();
        let count = sphere.vertex_count() as u32;
        for &index in &sphere.indices {
            assert!(index < count);
        }
    }

    #[test]
    fn sphere_poles_on_z_axis() {
        let sphere = MeshData::sphere(4, 6).unwrap();
        // Stack 0 ring is the +Z pole, the final ring the -Z pole.
        for j in 0..=6 {
            let top = sphere.position(j);
            assert!(top.distance(Vec3::Z) < 1e-6, "sector {j}");

            let bottom = sphere.position(4 * 7 + j);
            assert!(bottom.distance(Vec3::NEG_Z) < 1e-6, "sector {j}");
        }
    }

    #[test]
    fn sphere_normals_equal_positions() {
        let sphere = MeshData::sphere(5, 8).unwrap();
        for i in 0..sphere.vertex_count() {
            assert_eq!(sphere.position(i), normal(&sphere, i));
            assert!((sphere.position(i).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_uv_grid() {
        let stacks = 3u32;
        let sectors = 5u32;
        let sphere = MeshData::sphere(stacks, sectors).unwrap();
        for i in 0..=stacks {
            for j in 0..=sectors {
                let v = (i * (sectors + 1) + j) as usize;
                assert_eq!(sphere.uv_coords[2 * v], j as f32 / sectors as f32);
                assert_eq!(sphere.uv_coords[2 * v + 1], i as f32 / stacks as f32);
            }
        }
    }

    #[test]
    fn sphere_sector_sweep_is_clockwise_from_above() {
        // With a negative sector sweep the first step off the +X axis
        // moves toward -Y.
        let sphere = MeshData::sphere(2, 4).unwrap();
        let equator_start = (4 + 1) as usize; // stack 1, sector 0
        let first = sphere.position(equator_start);
        let second = sphere.position(equator_start + 1);
        assert!(first.x > 0.99);
        assert!(second.y < -0.99);
    }

    #[test]
    fn sphere_rejects_degenerate_parameters() {
        assert!(MeshData::sphere(0, 8).is_err());
        assert!(MeshData::sphere(4, 2).is_err());
        assert!(MeshData::sphere(1, 3).is_ok());
    }

    #[test]
    fn plane_points_up() {
        let plane = MeshData::plane(10.0);
        assert_eq!(plane.vertex_count(), 4);
        assert_eq!(plane.triangle_count(), 2);
        for i in 0..plane.vertex_count() {
            assert_eq!(normal(&plane, i), Vec3::Y);
            assert_eq!(plane.position(i).y, 0.0);
            assert_eq!(plane.position(i).x.abs(), 5.0);
        }
    }

    #[test]
    fn interleave_preserves_attributes() {
        let cube = MeshData::cube();
        let vertices = cube.interleave();
        assert_eq!(vertices.len(), 36);
        assert_eq!(vertices[0].position, [-1.0, -1.0, 1.0]);
        assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertices[0].uv, [0.0, 2.0 / 3.0]);

        // Pod cast for upload stays in sync with the vertex size.
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), vertices.len() * 32);
    }
}
