#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockType {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Wood = 4,
    Leaves = 5,
}

impl BlockType {
    /// Every block kind, air included.
    pub const ALL: [BlockType; 6] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Leaves,
    ];

    /// Kinds the player can place (everything but air).
    pub const PLACEABLE: [BlockType; 5] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Leaves,
    ];

    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }

    /// Solidity drives both collision and face culling.
    /// Leaves are walk-through, so they count as open.
    pub fn is_solid(self) -> bool {
        !matches!(self, BlockType::Air | BlockType::Leaves)
    }

    /// Flat per-kind color, one RGBA for all six faces.
    pub fn color(self) -> [f32; 4] {
        match self {
            BlockType::Grass => [0.4, 0.8, 0.3, 1.0],
            BlockType::Dirt => [0.59, 0.39, 0.2, 1.0],
            BlockType::Stone => [0.6, 0.6, 0.6, 1.0],
            BlockType::Wood => [0.5, 0.3, 0.1, 1.0],
            BlockType::Leaves => [0.2, 0.7, 0.2, 1.0],
            BlockType::Air => [1.0, 1.0, 1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solidity_covers_the_closed_set() {
        for kind in BlockType::ALL {
            let expected = !matches!(kind, BlockType::Air | BlockType::Leaves);
            assert_eq!(kind.is_solid(), expected, "{kind:?}");
        }
    }

    #[test]
    fn air_is_the_default() {
        assert_eq!(BlockType::default(), BlockType::Air);
        assert!(BlockType::Air.is_air());
        assert!(!BlockType::Leaves.is_air());
    }
}
