//! Entity states and facing direction

/// The behavior/animation state an entity is in. Every entity is in
/// exactly one state; transitions happen through `Entity::change_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityState {
    Idle,
    Run,
    Jump,
    Fall,
    Attack,
    Hurt,
    Dead,
}

impl EntityState {
    pub const COUNT: usize = 7;

    pub const ALL: [EntityState; Self::COUNT] = [
        EntityState::Idle,
        EntityState::Run,
        EntityState::Jump,
        EntityState::Fall,
        EntityState::Attack,
        EntityState::Hurt,
        EntityState::Dead,
    ];

    /// Index into state-keyed tables (animation frames, masks, textures)
    pub const fn index(&self) -> usize {
        match self {
            EntityState::Idle => 0,
            EntityState::Run => 1,
            EntityState::Jump => 2,
            EntityState::Fall => 3,
            EntityState::Attack => 4,
            EntityState::Hurt => 5,
            EntityState::Dead => 6,
        }
    }
}

/// Horizontal facing. Sprites are authored facing right and mirrored for
/// left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    /// Index into facing-keyed tables
    pub const fn index(&self) -> usize {
        match self {
            Facing::Right => 0,
            Facing::Left => 1,
        }
    }
}
