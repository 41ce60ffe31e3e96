//! Tile kinds and the neighbor-driven sprite variants of solid tiles

/// What occupies a map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Solid,
    /// Marks where an enemy stands when a run starts
    EnemySpawn,
    /// The exit portal occupies a 2x2 block, one quarter per kind
    PortalA,
    PortalB,
    PortalC,
    PortalD,
}

impl TileKind {
    /// Decode the integer used in map records
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileKind::Empty),
            1 => Some(TileKind::Solid),
            2 => Some(TileKind::EnemySpawn),
            3 => Some(TileKind::PortalA),
            4 => Some(TileKind::PortalB),
            5 => Some(TileKind::PortalC),
            6 => Some(TileKind::PortalD),
            _ => None,
        }
    }

    /// Integer stored in map records
    pub fn code(&self) -> u8 {
        match self {
            TileKind::Empty => 0,
            TileKind::Solid => 1,
            TileKind::EnemySpawn => 2,
            TileKind::PortalA => 3,
            TileKind::PortalB => 4,
            TileKind::PortalC => 5,
            TileKind::PortalD => 6,
        }
    }

    pub fn is_portal(&self) -> bool {
        matches!(
            self,
            TileKind::PortalA | TileKind::PortalB | TileKind::PortalC | TileKind::PortalD
        )
    }

    /// Index into the portal texture set
    pub fn portal_index(&self) -> Option<usize> {
        match self {
            TileKind::PortalA => Some(0),
            TileKind::PortalB => Some(1),
            TileKind::PortalC => Some(2),
            TileKind::PortalD => Some(3),
            _ => None,
        }
    }
}

/// Which sprite a solid tile shows, picked from its four neighbors.
///
/// The selection is biased: a covered tile always reads as buried, then
/// surface pieces (supported from below), then floating strips, then the
/// isolated block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidVariant {
    /// Solid above - buried, no grass edge
    Covered,
    /// Left end of a ground surface
    SurfaceLeft,
    /// Middle of a ground surface
    SurfaceMid,
    /// Right end of a ground surface
    SurfaceRight,
    /// Top of a one-wide column
    ColumnCap,
    /// Left end of a floating strip
    StripLeft,
    /// Middle of a floating strip
    StripMid,
    /// Right end of a floating strip
    StripRight,
    /// No solid neighbors at all
    Lone,
}

impl SolidVariant {
    /// Index into the solid texture set
    pub const fn index(&self) -> usize {
        match self {
            SolidVariant::Covered => 0,
            SolidVariant::SurfaceLeft => 1,
            SolidVariant::SurfaceMid => 2,
            SolidVariant::SurfaceRight => 3,
            SolidVariant::ColumnCap => 4,
            SolidVariant::StripLeft => 5,
            SolidVariant::StripMid => 6,
            SolidVariant::StripRight => 7,
            SolidVariant::Lone => 8,
        }
    }

    /// Number of distinct variants
    pub const COUNT: usize = 9;

    /// Every variant, ordered by `index`
    pub const ALL: [SolidVariant; Self::COUNT] = [
        SolidVariant::Covered,
        SolidVariant::SurfaceLeft,
        SolidVariant::SurfaceMid,
        SolidVariant::SurfaceRight,
        SolidVariant::ColumnCap,
        SolidVariant::StripLeft,
        SolidVariant::StripMid,
        SolidVariant::StripRight,
        SolidVariant::Lone,
    ];

    /// Pick a variant from the four neighbors. Only solid tiles count as
    /// filled; spawn markers and portal pieces do not connect.
    pub fn from_neighbors(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        if top {
            SolidVariant::Covered
        } else if bottom {
            match (left, right) {
                (true, true) => SolidVariant::SurfaceMid,
                (false, true) => SolidVariant::SurfaceLeft,
                (true, false) => SolidVariant::SurfaceRight,
                (false, false) => SolidVariant::ColumnCap,
            }
        } else if right {
            if left {
                SolidVariant::StripMid
            } else {
                SolidVariant::StripLeft
            }
        } else if left {
            SolidVariant::StripRight
        } else {
            SolidVariant::Lone
        }
    }
}

/// One cell of the map grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    /// Only meaningful while `kind` is `Solid`
    pub variant: SolidVariant,
}

impl Tile {
    pub const fn empty() -> Self {
        Tile {
            kind: TileKind::Empty,
            variant: SolidVariant::Lone,
        }
    }

    pub const fn of_kind(kind: TileKind) -> Self {
        Tile {
            kind,
            variant: SolidVariant::Lone,
        }
    }

    pub fn is_solid(&self) -> bool {
        self.kind == TileKind::Solid
    }

    pub fn is_portal(&self) -> bool {
        self.kind.is_portal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in 0u8..=6 {
            let kind = TileKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert!(TileKind::from_code(7).is_none());
        assert!(TileKind::from_code(255).is_none());
    }

    #[test]
    fn test_variant_bias_top_wins() {
        // A covered tile stays covered no matter what else surrounds it
        assert_eq!(
            SolidVariant::from_neighbors(true, true, true, true),
            SolidVariant::Covered
        );
        assert_eq!(
            SolidVariant::from_neighbors(true, false, false, false),
            SolidVariant::Covered
        );
    }

    #[test]
    fn test_variant_surface_pieces() {
        assert_eq!(
            SolidVariant::from_neighbors(false, true, true, true),
            SolidVariant::SurfaceMid
        );
        assert_eq!(
            SolidVariant::from_neighbors(false, true, true, false),
            SolidVariant::SurfaceLeft
        );
        assert_eq!(
            SolidVariant::from_neighbors(false, false, true, true),
            SolidVariant::SurfaceRight
        );
        assert_eq!(
            SolidVariant::from_neighbors(false, false, true, false),
            SolidVariant::ColumnCap
        );
    }

    #[test]
    fn test_variant_strips_and_lone() {
        assert_eq!(
            SolidVariant::from_neighbors(false, true, false, true),
            SolidVariant::StripMid
        );
        assert_eq!(
            SolidVariant::from_neighbors(false, true, false, false),
            SolidVariant::StripLeft
        );
        assert_eq!(
            SolidVariant::from_neighbors(false, false, false, true),
            SolidVariant::StripRight
        );
        assert_eq!(
            SolidVariant::from_neighbors(false, false, false, false),
            SolidVariant::Lone
        );
    }
}
