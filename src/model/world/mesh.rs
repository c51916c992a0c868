use super::grid::VoxelGrid;

/// One cube face direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Offset to the neighbor cell this face looks out at.
    pub fn neighbor_offset(self) -> (i32, i32, i32) {
        match self {
            Face::Front => (0, 0, 1),
            Face::Back => (0, 0, -1),
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
        }
    }

    /// The six vertices (two triangles, CCW seen from outside) of this
    /// face on the unit cube at cell (x, y, z).
    fn vertices(self, x: i32, y: i32, z: i32) -> [[f32; 3]; 6] {
        let (x0, x1) = (x as f32, (x + 1) as f32);
        let (y0, y1) = (y as f32, (y + 1) as f32);
        let (z0, z1) = (z as f32, (z + 1) as f32);
        match self {
            Face::Front => [
                [x0, y0, z1],
                [x0, y1, z1],
                [x1, y1, z1],
                [x1, y1, z1],
                [x1, y0, z1],
                [x0, y0, z1],
            ],
            Face::Back => [
                [x1, y0, z0],
                [x1, y1, z0],
                [x0, y1, z0],
                [x0, y1, z0],
                [x0, y0, z0],
                [x1, y0, z0],
            ],
            Face::Left => [
                [x0, y0, z0],
                [x0, y1, z0],
                [x0, y1, z1],
                [x0, y1, z1],
                [x0, y0, z1],
                [x0, y0, z0],
            ],
            Face::Right => [
                [x1, y0, z1],
                [x1, y1, z1],
                [x1, y1, z0],
                [x1, y1, z0],
                [x1, y0, z0],
                [x1, y0, z1],
            ],
            Face::Top => [
                [x0, y1, z0],
                [x1, y1, z0],
                [x1, y1, z1],
                [x1, y1, z1],
                [x0, y1, z1],
                [x0, y1, z0],
            ],
            Face::Bottom => [
                [x0, y0, z1],
                [x1, y0, z1],
                [x1, y0, z0],
                [x1, y0, z0],
                [x0, y0, z0],
                [x0, y0, z1],
            ],
        }
    }
}

/// CPU-side draw buffer: parallel position and color arrays, always the
/// same length, always a multiple of 6. The renderer draws this as a
/// plain triangle list.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

impl Mesh {
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Positions as raw bytes for vertex buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as raw bytes for vertex buffer upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    fn push_face(&mut self, face: Face, x: i32, y: i32, z: i32, color: [f32; 4]) {
        self.positions.extend_from_slice(&face.vertices(x, y, z));
        for _ in 0..6 {
            self.colors.push(color);
        }
    }
}

/// Walks the whole grid and emits a quad for every face of every non-air
/// cell whose neighbor is open. No merging and no dirty tracking: an edit
/// costs one full O(volume) rebuild, which is the accepted trade-off at
/// the supported grid sizes.
pub fn build_mesh(grid: &VoxelGrid) -> Mesh {
    let mut mesh = Mesh::empty();
    let [sx, sy, sz] = grid.size();

    for x in 0..sx {
        for y in 0..sy {
            for z in 0..sz {
                let kind = grid.get(x, y, z);
                if kind.is_air() {
                    continue;
                }
                let color = kind.color();
                for face in Face::ALL {
                    let (dx, dy, dz) = face.neighbor_offset();
                    if !grid.is_solid(x + dx, y + dy, z + dz) {
                        mesh.push_face(face, x, y, z, color);
                    }
                }
            }
        }
    }
    mesh
}
