//! Per-kind capability tables
//!
//! Everything that distinguishes the player from an enemy lives in one
//! `EntityKind` value: sprite and hitbox geometry, movement numbers,
//! animation frame counts and combat behavior. The entity state machine
//! itself is shared and reads these tables instead of branching on who it
//! is.

use super::{EntityState, Facing};

/// Who an entity fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    Player,
    Enemy,
}

/// Enemy toughness presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Okay,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Okay, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Okay => "okay",
            Difficulty::Hard => "hard",
        }
    }

    /// Health each enemy starts a run with
    pub fn enemy_health(&self) -> i32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Okay => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// A measurement that differs by facing direction
#[derive(Debug, Clone, Copy)]
pub struct FacingPair {
    pub right: f32,
    pub left: f32,
}

impl FacingPair {
    pub const fn same(value: f32) -> Self {
        Self {
            right: value,
            left: value,
        }
    }

    pub fn get(&self, facing: Facing) -> f32 {
        match facing {
            Facing::Right => self.right,
            Facing::Left => self.left,
        }
    }
}

/// Animation frame counts, indexed by `EntityState`
#[derive(Debug, Clone, Copy)]
pub struct StateFrames([u32; EntityState::COUNT]);

impl StateFrames {
    pub const fn new(
        idle: u32,
        run: u32,
        jump: u32,
        fall: u32,
        attack: u32,
        hurt: u32,
        dead: u32,
    ) -> Self {
        Self([idle, run, jump, fall, attack, hurt, dead])
    }

    pub fn get(&self, state: EntityState) -> u32 {
        self.0[state.index()]
    }
}

/// Everything fixed about one kind of entity
#[derive(Debug, Clone)]
pub struct EntityKind {
    pub class: EntityClass,

    // Sprite geometry. `pos` is the sprite's bottom-left corner.
    pub sprite_w: f32,
    pub sprite_h: f32,

    // Hitbox geometry, anchored relative to `pos`. The sprites carry
    // different amounts of empty margin per facing, hence the pairs.
    pub hitbox_w: f32,
    pub hitbox_h: f32,
    /// Hitbox left edge: `pos.x + hitbox_left`
    pub hitbox_left: FacingPair,
    /// Hitbox bottom edge: `pos.y - hitbox_lift`
    pub hitbox_lift: f32,
    /// Body center: `pos.x + center_x`
    pub center_x: FacingPair,
    /// Body center: `pos.y - center_y_drop`
    pub center_y_drop: f32,
    /// How far `pos.x` shifts when the entity turns around, so the body
    /// stays in place under the asymmetric sprite margins
    pub flip_shift: f32,

    // Movement
    pub speed: f32,
    pub jump_ability: u32,
    pub jump_power: f32,

    // Health and combat
    pub max_health: i32,
    pub active_attack_frames: &'static [u32],
    pub attack_recovery_ms: f64,
    /// Horizontal distance at which a chasing entity attacks
    pub attack_range: f32,
    /// Whether standing on a portal tile completes the level
    pub triggers_portals: bool,
    /// Walk toward the player when out of attack range
    pub chases: bool,
    /// Keep applying move intent during the attack animation
    pub moves_while_attacking: bool,
    /// Whether the death animation ends on `step >= frames` instead of
    /// `step > frames`
    pub dead_exit_inclusive: bool,

    // Animation
    pub animation_cooldown_ms: f64,
    pub frames: StateFrames,
}

impl EntityKind {
    pub fn player() -> Self {
        Self {
            class: EntityClass::Player,
            sprite_w: 96.0,
            sprite_h: 96.0,
            hitbox_w: 36.0,
            hitbox_h: 64.0,
            hitbox_left: FacingPair {
                right: 14.0,
                left: 45.0,
            },
            hitbox_lift: 0.0,
            center_x: FacingPair {
                right: 34.0,
                left: 62.0,
            },
            center_y_drop: 32.0,
            flip_shift: 27.0,
            speed: 4.0,
            jump_ability: 1,
            jump_power: 12.0,
            max_health: 3,
            active_attack_frames: &[3, 4],
            attack_recovery_ms: 400.0,
            attack_range: 0.0,
            triggers_portals: true,
            chases: false,
            moves_while_attacking: true,
            dead_exit_inclusive: true,
            animation_cooldown_ms: 100.0,
            frames: StateFrames::new(4, 6, 4, 1, 6, 3, 6),
        }
    }

    pub fn enemy(difficulty: Difficulty) -> Self {
        Self {
            class: EntityClass::Enemy,
            sprite_w: 108.0,
            sprite_h: 64.0,
            hitbox_w: 26.0,
            hitbox_h: 53.0,
            hitbox_left: FacingPair::same(41.0),
            hitbox_lift: 4.0,
            center_x: FacingPair::same(54.0),
            center_y_drop: 34.0,
            flip_shift: 0.0,
            speed: 2.0,
            jump_ability: 0,
            jump_power: 0.0,
            max_health: difficulty.enemy_health(),
            active_attack_frames: &[7, 8, 9],
            attack_recovery_ms: 800.0,
            attack_range: 40.0,
            triggers_portals: false,
            chases: true,
            moves_while_attacking: false,
            dead_exit_inclusive: false,
            animation_cooldown_ms: 50.0,
            // Enemies have no dedicated airborne art; jump and fall reuse
            // the idle sheet
            frames: StateFrames::new(12, 18, 12, 12, 12, 12, 15),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_scales_enemy_health() {
        assert_eq!(EntityKind::enemy(Difficulty::Easy).max_health, 2);
        assert_eq!(EntityKind::enemy(Difficulty::Okay).max_health, 3);
        assert_eq!(EntityKind::enemy(Difficulty::Hard).max_health, 4);
    }

    #[test]
    fn test_frame_tables() {
        let player = EntityKind::player();
        assert_eq!(player.frames.get(EntityState::Attack), 6);
        assert_eq!(player.frames.get(EntityState::Fall), 1);

        let enemy = EntityKind::enemy(Difficulty::Easy);
        assert_eq!(
            enemy.frames.get(EntityState::Fall),
            enemy.frames.get(EntityState::Idle)
        );
        for state in EntityState::ALL {
            assert!(enemy.frames.get(state) > 0);
            assert!(player.frames.get(state) > 0);
        }
    }

    #[test]
    fn test_flip_shift_keeps_hitbox_near_place() {
        // Turning left shifts pos.x by -flip_shift while the hitbox offset
        // switches from the right margin to the left one. The two nearly
        // cancel, so the body does not teleport when the sprite mirrors.
        let kind = EntityKind::player();
        let pos_right = 100.0;
        let left_edge_right = pos_right + kind.hitbox_left.right;
        let pos_left = pos_right - kind.flip_shift;
        let left_edge_left = pos_left + kind.hitbox_left.left;
        assert!((left_edge_right - left_edge_left).abs() < 5.0);
    }
}
