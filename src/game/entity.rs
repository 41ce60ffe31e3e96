//! Entity state machine shared by the player and enemies
//!
//! One `Entity` struct drives both kinds; everything kind-specific
//! (frame counts, hitbox geometry, attack timing, chase behavior) lives
//! in the [`EntityKind`] capability table, so there is no inheritance
//! hierarchy to untangle. Per-tick flow:
//!
//! 1. `handle_state` runs the current state's logic (movement intent,
//!    attack windows, exit transitions).
//! 2. The position update sweeps the vertical axis, then the horizontal
//!    axis, against nearby solid tiles.
//! 3. Gravity decrements vertical velocity and forces Idle/Run into
//!    Fall when ground support is gone.
//! 4. The animation steps if its cooldown elapsed.
//!
//! Positions are sprite bottom-left in world coordinates, with +y down
//! (screen space) but positive vertical velocity meaning upward, so the
//! position update subtracts `vel_y`.
//!
//! Side effects the caller must act on come back as values: sounds go
//! through an [`EventQueue`], and death completion is reported once as
//! [`EntityTickOutcome::Died`] instead of invoking a callback.

use crate::ui::Rect;
use crate::world::TileMap;

use super::collision::{resolve_horizontal, resolve_vertical, PHYSICS_RADIUS};
use super::events::{EventQueue, SoundEvent};
use super::kind::{EntityClass, EntityKind};
use super::state::{EntityState, Facing};

/// What a single entity tick produced, beyond mutated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityTickOutcome {
    /// Nothing the session needs to react to
    None,
    /// The death animation finished this tick; reported exactly once.
    /// The session removes the entity (enemy) or ends the run (player).
    Died,
    /// The entity ended the tick overlapping a portal tile. Only kinds
    /// with `triggers_portals` report this; the session treats it as a
    /// level win.
    ReachedPortal,
}

pub struct Entity {
    pub kind: EntityKind,
    /// Sprite left edge, world coordinates
    pub x: f32,
    /// Sprite bottom edge, world coordinates
    pub y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
    facing: Facing,
    state: EntityState,
    health: i32,
    /// Net move request for this tick: -1 left, 0 stand, 1 right.
    /// Kept additive so simultaneous opposite keys cancel.
    move_intent: i32,
    grounded: bool,
    jump_count: u32,
    animation_step: u32,
    image_index: usize,
    last_animation_ms: f64,
    /// When the last Attack state ended; gates the next attack request
    last_attack_end_ms: f64,
    animation_paused: bool,
    active_attack: bool,
    attack_sound_played: bool,
    attack_hitbox: Option<Rect>,
    alive: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vel_x: 0.0,
            vel_y: 0.0,
            facing: Facing::Right,
            state: EntityState::Idle,
            health: kind.max_health,
            move_intent: 0,
            grounded: false,
            jump_count: 0,
            animation_step: 0,
            image_index: 0,
            last_animation_ms: 0.0,
            last_attack_end_ms: f64::NEG_INFINITY,
            animation_paused: false,
            active_attack: false,
            attack_sound_played: false,
            attack_hitbox: None,
            alive: true,
            kind,
        }
    }

    pub fn state(&self) -> EntityState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Index of the animation frame currently shown
    pub fn frame(&self) -> usize {
        self.image_index
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether the attack hitbox is live this tick
    pub fn attack_is_active(&self) -> bool {
        self.active_attack
    }

    pub fn attack_hitbox(&self) -> Option<Rect> {
        self.attack_hitbox
    }

    /// Art-cropped collision rectangle (the sprite canvas is mostly
    /// transparent padding)
    pub fn hitbox(&self) -> Rect {
        Rect::from_bottom_left(
            self.x + self.kind.hitbox_left.get(self.facing),
            self.y - self.kind.hitbox_lift,
            self.kind.hitbox_w,
            self.kind.hitbox_h,
        )
    }

    /// Horizontal center of the visible figure, world coordinates
    pub fn center_x(&self) -> f32 {
        self.x + self.kind.center_x.get(self.facing)
    }

    pub fn center_y(&self) -> f32 {
        self.y - self.kind.center_y_drop
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center_x(), self.center_y())
    }

    /// Moves the entity so its visible center lands on `center_x`.
    /// Used by the session to keep the player inside the map.
    pub fn set_center_x(&mut self, center_x: f32) {
        self.x = center_x - self.kind.center_x.get(self.facing);
    }

    pub fn set_move_intent(&mut self, intent: i32) {
        self.move_intent = intent;
    }

    /// Advance one tick. `player_center_x` feeds the chase behavior and
    /// is `None` for the player itself.
    pub fn update(
        &mut self,
        map: &TileMap,
        now_ms: f64,
        player_center_x: Option<f32>,
        sounds: &mut EventQueue<SoundEvent>,
    ) -> EntityTickOutcome {
        let mut outcome = self.handle_state(now_ms, player_center_x, sounds);
        self.update_position(map);
        if outcome == EntityTickOutcome::None
            && self.kind.triggers_portals
            && self.state != EntityState::Dead
            && self.touching_portal(map)
        {
            outcome = EntityTickOutcome::ReachedPortal;
        }
        self.handle_gravity(now_ms);
        if now_ms - self.last_animation_ms > self.kind.animation_cooldown_ms
            && !self.animation_paused
        {
            self.animate(now_ms);
        }
        if self.grounded {
            self.jump_count = 0;
        }
        outcome
    }

    /// Request a jump. Allowed from ground states and mid-air up to the
    /// kind's extra-jump allowance (the player gets one air jump).
    pub fn jump(&mut self, now_ms: f64) {
        if !matches!(
            self.state,
            EntityState::Idle | EntityState::Run | EntityState::Jump | EntityState::Fall
        ) {
            return;
        }
        if self.jump_count > self.kind.jump_ability {
            return;
        }
        self.grounded = false;
        self.vel_y = self.kind.jump_power;
        self.jump_count += 1;
        self.change_state(EntityState::Jump, now_ms);
    }

    /// Request an attack. Only honored from Idle/Run and after the
    /// recovery window since the previous attack ended has passed.
    pub fn begin_attack(&mut self, now_ms: f64) {
        if !matches!(self.state, EntityState::Idle | EntityState::Run) {
            return;
        }
        if now_ms - self.last_attack_end_ms < self.kind.attack_recovery_ms {
            return;
        }
        self.change_state(EntityState::Attack, now_ms);
        self.vel_x = 0.0;
        self.attack_sound_played = false;

        // Hitbox sits in front of the entity, sized by sprite height
        let h = self.kind.sprite_h;
        let hitbox_x = match self.facing {
            Facing::Right => self.x + h * 0.5,
            Facing::Left => self.x - h * 0.35,
        };
        self.attack_hitbox = Some(Rect::new(hitbox_x, self.y + h * 0.2, h * 0.3, h * 0.5));
    }

    /// Take a hit. Ignored while already hurt or dead, so back-to-back
    /// hits cannot stunlock or double-kill.
    pub fn receive_attack(&mut self, damage: i32, now_ms: f64, sounds: &mut EventQueue<SoundEvent>) {
        if matches!(self.state, EntityState::Hurt | EntityState::Dead) {
            return;
        }
        self.health -= damage;
        self.vel_x = 0.0;
        if self.health <= 0 {
            sounds.send(match self.kind.class {
                EntityClass::Player => SoundEvent::PlayerDeath,
                EntityClass::Enemy => SoundEvent::EnemyDeath,
            });
            self.change_state(EntityState::Dead, now_ms);
        } else {
            sounds.send(match self.kind.class {
                EntityClass::Player => SoundEvent::PlayerHurt,
                EntityClass::Enemy => SoundEvent::EnemyHurt,
            });
            self.change_state(EntityState::Hurt, now_ms);
        }
    }

    pub fn pause_animation(&mut self) {
        self.animation_paused = true;
    }

    pub fn unpause_animation(&mut self) {
        self.animation_paused = false;
    }

    fn change_state(&mut self, new_state: EntityState, now_ms: f64) {
        self.unpause_animation();
        self.active_attack = false;
        if self.state == EntityState::Attack && new_state != EntityState::Attack {
            self.last_attack_end_ms = now_ms;
        }
        self.state = new_state;
        self.animation_step = 0;
        self.animate(now_ms);
    }

    /// Select the frame for the current step, then advance the step.
    /// Also restarts the cooldown, so a flip or state change holds its
    /// first frame for a full interval.
    fn animate(&mut self, now_ms: f64) {
        self.last_animation_ms = now_ms;
        let frames = self.kind.frames.get(self.state).max(1);
        self.image_index = (self.animation_step % frames) as usize;
        self.animation_step += 1;
    }

    fn handle_state(
        &mut self,
        now_ms: f64,
        player_center_x: Option<f32>,
        sounds: &mut EventQueue<SoundEvent>,
    ) -> EntityTickOutcome {
        match self.state {
            EntityState::Dead => return self.handle_dying(),
            EntityState::Hurt => self.handle_hurt(now_ms),
            EntityState::Attack => self.handle_attack(now_ms, sounds),
            EntityState::Jump => self.handle_jump(now_ms),
            EntityState::Fall => self.handle_fall(now_ms),
            EntityState::Idle | EntityState::Run => self.handle_idle(now_ms, player_center_x),
        }
        EntityTickOutcome::None
    }

    /// Idle and Run share this handler; it applies movement intent and,
    /// for chasing kinds, steers toward the player or starts an attack.
    fn handle_idle(&mut self, now_ms: f64, player_center_x: Option<f32>) {
        self.apply_move(now_ms);
        if !self.kind.chases {
            return;
        }
        let Some(target) = player_center_x else {
            return;
        };
        let center = self.x + self.kind.sprite_w / 2.0;
        let distance = target - center;
        if distance.abs() < self.kind.attack_range {
            self.begin_attack(now_ms);
        } else if distance > 1.0 {
            self.move_intent = 1;
        } else if distance < -1.0 {
            self.move_intent = -1;
        } else {
            self.move_intent = 0;
        }
    }

    fn handle_jump(&mut self, now_ms: f64) {
        self.apply_move(now_ms);
        if self.grounded || self.animation_step >= self.kind.frames.get(EntityState::Jump) {
            self.change_state(EntityState::Fall, now_ms);
        }
    }

    fn handle_fall(&mut self, now_ms: f64) {
        self.apply_move(now_ms);
        if self.grounded {
            self.change_state(EntityState::Idle, now_ms);
        }
    }

    fn handle_attack(&mut self, now_ms: f64, sounds: &mut EventQueue<SoundEvent>) {
        if self.animation_step > self.kind.frames.get(EntityState::Attack) {
            self.change_state(EntityState::Idle, now_ms);
        }
        if self.kind.active_attack_frames.contains(&self.animation_step) {
            if !self.attack_sound_played {
                sounds.send(match self.kind.class {
                    EntityClass::Player => SoundEvent::PlayerAttack,
                    EntityClass::Enemy => SoundEvent::EnemyAttack,
                });
                self.attack_sound_played = true;
            }
            self.active_attack = true;
        } else {
            self.active_attack = false;
        }
        if self.kind.moves_while_attacking {
            self.apply_move(now_ms);
        }
    }

    fn handle_hurt(&mut self, now_ms: f64) {
        if self.animation_step > self.kind.frames.get(EntityState::Hurt) {
            self.change_state(EntityState::Idle, now_ms);
        }
    }

    fn handle_dying(&mut self) -> EntityTickOutcome {
        let count = self.kind.frames.get(EntityState::Dead);
        let done = if self.kind.dead_exit_inclusive {
            self.animation_step >= count
        } else {
            self.animation_step > count
        };
        if done && self.alive {
            self.alive = false;
            return EntityTickOutcome::Died;
        }
        EntityTickOutcome::None
    }

    fn handle_gravity(&mut self, now_ms: f64) {
        self.vel_y -= 1.0;
        if !self.grounded && matches!(self.state, EntityState::Idle | EntityState::Run) {
            self.change_state(EntityState::Fall, now_ms);
        }
    }

    /// Turn this tick's move intent into horizontal velocity and the
    /// matching Idle/Run transition, then apply any facing flip.
    fn apply_move(&mut self, now_ms: f64) {
        if self.move_intent > 0 {
            self.vel_x = self.kind.speed;
            if self.state == EntityState::Idle {
                self.change_state(EntityState::Run, now_ms);
            }
        } else if self.move_intent < 0 {
            self.vel_x = -self.kind.speed;
            if self.state == EntityState::Idle {
                self.change_state(EntityState::Run, now_ms);
            }
        } else {
            self.vel_x = 0.0;
            if self.state == EntityState::Run {
                self.change_state(EntityState::Idle, now_ms);
            }
        }
        self.try_change_direction(self.move_intent, now_ms);
    }

    /// Flip to face the movement direction. The sprite figure is not
    /// horizontally centered in its canvas, so flipping shifts the
    /// position by the kind's offset to keep the figure in place.
    fn try_change_direction(&mut self, intent: i32, now_ms: f64) {
        if intent == 0 {
            return;
        }
        if self.facing == Facing::Left && intent > 0 {
            self.facing = Facing::Right;
            self.x += self.kind.flip_shift;
            self.animate(now_ms);
        } else if self.facing == Facing::Right && intent < 0 {
            self.facing = Facing::Left;
            self.x -= self.kind.flip_shift;
            self.animate(now_ms);
        }
    }

    fn touching_portal(&self, map: &TileMap) -> bool {
        let hitbox = self.hitbox();
        let (cx, cy) = self.center();
        map.get_nearby_tiles(cx, cy, PHYSICS_RADIUS)
            .iter()
            .any(|t| t.tile.is_portal() && hitbox.overlaps(&t.rect()))
    }

    /// Commit this tick's velocity, vertical axis first. Each axis
    /// re-queries the tiles around the hitbox center because the first
    /// pass may have moved the entity.
    fn update_position(&mut self, map: &TileMap) {
        let (cx, cy) = self.center();
        let solids = map.nearby_solid_rects(cx, cy, PHYSICS_RADIUS);
        let vertical = resolve_vertical(&solids, self.hitbox(), self.vel_y);
        self.y = vertical.bottom + self.kind.hitbox_lift;
        self.vel_y = vertical.vel_y;
        self.grounded = vertical.grounded;

        let (cx, cy) = self.center();
        let solids = map.nearby_solid_rects(cx, cy, PHYSICS_RADIUS);
        let horizontal = resolve_horizontal(&solids, self.hitbox(), self.vel_x);
        self.x = horizontal.left - self.kind.hitbox_left.get(self.facing);
        self.vel_x = horizontal.vel_x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::kind::Difficulty;
    use crate::world::TileKind;

    // Two-wide map with a solid bottom row; its top edge is at y=384
    const GROUND_TOP: f32 = 384.0;

    fn ground_map() -> TileMap {
        TileMap::with_ground(2)
    }

    // A resting entity only reads as grounded from the second tick on
    // (gravity has to press it into the ground first), and the Fall to
    // Idle transition needs a third. Settle before asserting.
    fn grounded_player(map: &TileMap) -> (Entity, EventQueue<SoundEvent>) {
        let mut player = Entity::new(EntityKind::player(), 100.0, GROUND_TOP);
        let mut sounds = EventQueue::new();
        for _ in 0..3 {
            player.update(map, 0.0, None, &mut sounds);
        }
        assert!(player.grounded());
        assert_eq!(player.state(), EntityState::Idle);
        (player, sounds)
    }

    fn grounded_enemy(map: &TileMap, x: f32) -> Entity {
        let mut enemy = Entity::new(EntityKind::enemy(Difficulty::Easy), x, GROUND_TOP + 4.0);
        let mut sounds = EventQueue::new();
        for _ in 0..3 {
            enemy.update(map, 0.0, None, &mut sounds);
        }
        assert!(enemy.grounded());
        assert_eq!(enemy.state(), EntityState::Idle);
        enemy
    }

    #[test]
    fn test_move_intent_drives_run_state_and_velocity() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);

        player.set_move_intent(1);
        player.update(&map, 0.0, None, &mut sounds);
        assert_eq!(player.state(), EntityState::Run);
        assert_eq!(player.vel_x, 4.0);

        player.set_move_intent(0);
        player.update(&map, 0.0, None, &mut sounds);
        assert_eq!(player.state(), EntityState::Idle);
        assert_eq!(player.vel_x, 0.0);
    }

    #[test]
    fn test_facing_flip_shifts_player_position() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);
        let before = player.x;

        player.set_move_intent(-1);
        player.update(&map, 0.0, None, &mut sounds);
        assert_eq!(player.facing(), Facing::Left);
        // -27 flip shift, -4 of movement
        assert_eq!(player.x, before - 27.0 - 4.0);

        let before = player.x;
        player.set_move_intent(1);
        player.update(&map, 0.0, None, &mut sounds);
        assert_eq!(player.facing(), Facing::Right);
        assert_eq!(player.x, before + 27.0 + 4.0);
    }

    #[test]
    fn test_double_jump_allowed_third_jump_ignored() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);

        player.jump(0.0);
        assert_eq!(player.state(), EntityState::Jump);
        assert_eq!(player.vel_y, 12.0);

        // Air jump resets the upward velocity
        player.update(&map, 0.0, None, &mut sounds);
        player.jump(0.0);
        assert_eq!(player.vel_y, 12.0);

        // Third request falls on deaf ears
        player.update(&map, 0.0, None, &mut sounds);
        let vel_before = player.vel_y;
        player.jump(0.0);
        assert_eq!(player.vel_y, vel_before);
    }

    #[test]
    fn test_jump_count_resets_on_landing() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);

        player.jump(0.0);
        player.jump(0.0);
        // Ride the jump until the ground catches it again
        let mut now = 0.0;
        for _ in 0..120 {
            now += 101.0;
            player.update(&map, now, None, &mut sounds);
            if player.grounded() {
                break;
            }
        }
        assert!(player.grounded());

        player.jump(now);
        assert_eq!(player.state(), EntityState::Jump);
    }

    #[test]
    fn test_airborne_idle_transitions_to_fall() {
        let map = ground_map();
        let mut player = Entity::new(EntityKind::player(), 100.0, 200.0);
        let mut sounds = EventQueue::new();
        player.update(&map, 0.0, None, &mut sounds);
        assert_eq!(player.state(), EntityState::Fall);
        // Gravity has begun pulling
        assert!(player.vel_y < 0.0);
    }

    #[test]
    fn test_landing_snaps_to_tile_top_and_idles() {
        let map = ground_map();
        let mut player = Entity::new(EntityKind::player(), 100.0, 200.0);
        let mut sounds = EventQueue::new();
        let mut now = 0.0;
        for _ in 0..120 {
            now += 101.0;
            player.update(&map, now, None, &mut sounds);
            if player.grounded() {
                break;
            }
        }
        assert!(player.grounded());
        assert_eq!(player.hitbox().bottom(), GROUND_TOP);
        // One more tick for Fall to notice the ground
        player.update(&map, now + 101.0, None, &mut sounds);
        assert_eq!(player.state(), EntityState::Idle);
    }

    #[test]
    fn test_running_into_wall_snaps_hitbox_to_wall_edge() {
        let mut map = ground_map();
        // Two-tile wall at column 6, flush with the hitbox height
        assert!(map.change_type(6, 10, TileKind::Solid));
        assert!(map.change_type(6, 11, TileKind::Solid));
        let wall_x = 6.0 * 32.0;

        let (mut player, mut sounds) = grounded_player(&map);
        player.set_move_intent(1);
        let mut now = 0.0;
        for _ in 0..40 {
            now += 101.0;
            player.update(&map, now, None, &mut sounds);
        }
        assert_eq!(player.hitbox().right(), wall_x);
        assert_eq!(player.vel_x, 0.0);
        // Still trying to run, just not getting anywhere
        assert_eq!(player.state(), EntityState::Run);
    }

    #[test]
    fn test_begin_attack_builds_forward_hitbox() {
        let map = ground_map();
        let (mut player, _) = grounded_player(&map);
        let h = 96.0;

        player.begin_attack(0.0);
        assert_eq!(player.state(), EntityState::Attack);
        let hitbox = player.attack_hitbox().unwrap();
        assert_eq!(hitbox.x, player.x + h * 0.5);
        assert_eq!(hitbox.y, player.y + h * 0.2);
        assert_eq!(hitbox.w, h * 0.3);
        assert_eq!(hitbox.h, h * 0.5);
    }

    #[test]
    fn test_attack_hitbox_faces_left_when_flipped() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);
        player.set_move_intent(-1);
        player.update(&map, 0.0, None, &mut sounds);
        player.set_move_intent(0);
        player.update(&map, 0.0, None, &mut sounds);

        player.begin_attack(1000.0);
        let hitbox = player.attack_hitbox().unwrap();
        assert_eq!(hitbox.x, player.x - 96.0 * 0.35);
    }

    #[test]
    fn test_attack_sound_emitted_once_per_swing() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);
        sounds.drain().for_each(drop);

        player.begin_attack(0.0);
        let mut now = 0.0;
        let mut saw_active = false;
        for _ in 0..12 {
            now += 101.0;
            player.update(&map, now, None, &mut sounds);
            saw_active |= player.attack_is_active();
        }
        assert!(saw_active);
        assert_eq!(player.state(), EntityState::Idle);
        assert!(!player.attack_is_active());
        let swings: Vec<_> = sounds.drain().collect();
        assert_eq!(swings, vec![SoundEvent::PlayerAttack]);
    }

    #[test]
    fn test_attack_recovery_blocks_immediate_restart() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);

        player.begin_attack(0.0);
        let mut now = 0.0;
        while player.state() == EntityState::Attack {
            now += 101.0;
            player.update(&map, now, None, &mut sounds);
        }

        // Too soon after the last swing ended
        player.begin_attack(now + 100.0);
        assert_eq!(player.state(), EntityState::Idle);

        player.begin_attack(now + 500.0);
        assert_eq!(player.state(), EntityState::Attack);
    }

    #[test]
    fn test_enemy_two_hits_to_kill_reports_death_once() {
        let map = ground_map();
        let mut enemy = grounded_enemy(&map, 200.0);
        let mut sounds = EventQueue::new();
        assert_eq!(enemy.health(), 2);

        enemy.receive_attack(1, 0.0, &mut sounds);
        assert_eq!(enemy.state(), EntityState::Hurt);
        assert_eq!(sounds.drain().collect::<Vec<_>>(), vec![SoundEvent::EnemyHurt]);

        // Hits while hurt are ignored
        enemy.receive_attack(1, 0.0, &mut sounds);
        assert_eq!(enemy.health(), 1);

        // Let the hurt animation play out
        let mut now = 0.0;
        while enemy.state() == EntityState::Hurt {
            now += 51.0;
            enemy.update(&map, now, None, &mut sounds);
        }

        enemy.receive_attack(1, now, &mut sounds);
        assert_eq!(enemy.state(), EntityState::Dead);
        assert_eq!(sounds.drain().collect::<Vec<_>>(), vec![SoundEvent::EnemyDeath]);

        let mut deaths = 0;
        for _ in 0..40 {
            now += 51.0;
            if enemy.update(&map, now, None, &mut sounds) == EntityTickOutcome::Died {
                deaths += 1;
            }
        }
        assert_eq!(deaths, 1);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_hurt_recovers_to_idle() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);

        player.receive_attack(1, 0.0, &mut sounds);
        assert_eq!(player.state(), EntityState::Hurt);
        assert_eq!(player.health(), 2);

        let mut now = 0.0;
        for _ in 0..10 {
            now += 101.0;
            player.update(&map, now, None, &mut sounds);
        }
        assert_eq!(player.state(), EntityState::Idle);
    }

    #[test]
    fn test_enemy_chases_distant_player() {
        let map = ground_map();
        let mut enemy = grounded_enemy(&map, 200.0);
        let mut sounds = EventQueue::new();

        // Player far to the right: walk toward them
        enemy.update(&map, 0.0, Some(600.0), &mut sounds);
        enemy.update(&map, 0.0, Some(600.0), &mut sounds);
        assert_eq!(enemy.state(), EntityState::Run);
        assert_eq!(enemy.vel_x, 2.0);

        // Player far to the left: turn around
        enemy.update(&map, 0.0, Some(0.0), &mut sounds);
        enemy.update(&map, 0.0, Some(0.0), &mut sounds);
        assert_eq!(enemy.vel_x, -2.0);
        assert_eq!(enemy.facing(), Facing::Left);
    }

    #[test]
    fn test_enemy_attacks_player_in_range() {
        let map = ground_map();
        let mut enemy = grounded_enemy(&map, 200.0);
        let mut sounds = EventQueue::new();

        // Enemy center is x + 54; park the player 10 units away
        enemy.update(&map, 0.0, Some(enemy.x + 54.0 + 10.0), &mut sounds);
        assert_eq!(enemy.state(), EntityState::Attack);
    }

    #[test]
    fn test_enemy_ignores_player_without_position() {
        let map = ground_map();
        let mut enemy = grounded_enemy(&map, 200.0);
        let mut sounds = EventQueue::new();

        enemy.update(&map, 0.0, None, &mut sounds);
        assert_eq!(enemy.state(), EntityState::Idle);
        assert_eq!(enemy.vel_x, 0.0);
    }

    #[test]
    fn test_pause_freezes_animation_stepping() {
        let map = ground_map();
        let (mut player, mut sounds) = grounded_player(&map);

        player.pause_animation();
        let frame = player.frame();
        player.update(&map, 10_000.0, None, &mut sounds);
        assert_eq!(player.frame(), frame);

        player.unpause_animation();
        player.update(&map, 20_000.0, None, &mut sounds);
    }

    #[test]
    fn test_player_on_portal_reports_reached_portal() {
        let mut map = ground_map();
        // 2x2 portal straddling the player's standing spot
        assert!(map.place_portal(4, 9));
        let (mut player, mut sounds) = grounded_player(&map);

        let outcome = player.update(&map, 0.0, None, &mut sounds);
        assert_eq!(outcome, EntityTickOutcome::ReachedPortal);
    }

    #[test]
    fn test_enemy_walks_over_portal_unaffected() {
        let mut map = ground_map();
        assert!(map.place_portal(4, 9));
        let mut enemy = grounded_enemy(&map, 100.0);
        let mut sounds = EventQueue::new();

        let outcome = enemy.update(&map, 0.0, None, &mut sounds);
        assert_eq!(outcome, EntityTickOutcome::None);
    }

    #[test]
    fn test_set_center_x_repositions_by_facing_offset() {
        let mut player = Entity::new(EntityKind::player(), 100.0, GROUND_TOP);
        player.set_center_x(0.0);
        assert_eq!(player.x, -34.0);
        assert_eq!(player.center_x(), 0.0);
    }
}
