//! One playthrough of a level
//!
//! The session owns the map, the player, the enemies and the camera,
//! and advances them in a fixed order every tick:
//!
//! 1. Apply input to the player (intent, jump, attack, pause).
//! 2. Update the player, then clamp it back inside the map.
//! 3. Update every enemy against the player's fresh center.
//! 4. Resolve combat by pixel-mask overlap.
//! 5. Interpret the player's tick outcome (death, portal win).
//! 6. Recompute the camera from the final player position.
//!
//! Enemies are spawned once from the map's spawn tiles when the session
//! starts and the spawn tiles are cleared, so a map holds at most one
//! wave. Dead enemies are marked during the update sweep and compacted
//! afterwards, never removed mid-iteration.

use crate::input::FrameInput;
use crate::world::TileMap;

use super::camera::Camera;
use super::entity::{Entity, EntityTickOutcome};
use super::events::{EventQueue, SoundEvent};
use super::kind::{Difficulty, EntityKind};
use super::mask::MaskBook;
use super::TICK_RATE;

/// Fixed player start, slightly above the default ground line so the
/// player settles onto it
const PLAYER_SPAWN: (f32, f32) = (100.0, 367.0);

pub struct Session {
    map: TileMap,
    player: Entity,
    enemies: Vec<Entity>,
    camera: Camera,
    sounds: EventQueue<SoundEvent>,
    score: u32,
    high_score: u32,
    ticks: u32,
    paused: bool,
    over: bool,
    won: bool,
}

impl Session {
    /// Start a run on `map`. Consumes the map's enemy-spawn tiles.
    pub fn new(mut map: TileMap, difficulty: Difficulty, high_score: u32) -> Self {
        let enemies = map
            .take_enemy_spawns()
            .into_iter()
            .map(|(x, y)| Entity::new(EntityKind::enemy(difficulty), x, y))
            .collect();
        let player = Entity::new(EntityKind::player(), PLAYER_SPAWN.0, PLAYER_SPAWN.1);
        let camera = Camera::new(player.center_x(), map.pixel_width());
        Self {
            map,
            player,
            enemies,
            camera,
            sounds: EventQueue::new(),
            score: 0,
            high_score,
            ticks: 0,
            paused: false,
            over: false,
            won: false,
        }
    }

    pub fn update(&mut self, input: &FrameInput, now_ms: f64, masks: &MaskBook) {
        if input.pause_pressed && !self.over {
            self.paused = !self.paused;
        }
        if !self.paused && !self.over {
            self.tick(input, now_ms, masks);
        }
        // The camera tracks even on the game-over screen, like everything
        // else that only reads state
        self.camera
            .update(self.player.center_x(), self.map.pixel_width());
    }

    fn tick(&mut self, input: &FrameInput, now_ms: f64, masks: &MaskBook) {
        self.ticks += 1;
        self.player.set_move_intent(input.move_intent);
        if input.jump_pressed {
            self.player.jump(now_ms);
        }
        if input.attack_pressed {
            self.player.begin_attack(now_ms);
        }

        let player_outcome = self
            .player
            .update(&self.map, now_ms, None, &mut self.sounds);
        self.check_bounds();

        let player_center = self.player.center_x();
        let mut killed = 0;
        for enemy in &mut self.enemies {
            let outcome = enemy.update(&self.map, now_ms, Some(player_center), &mut self.sounds);
            if outcome == EntityTickOutcome::Died {
                killed += 1;
            }
        }
        self.enemies.retain(Entity::is_alive);
        self.score += killed;

        self.check_combat(now_ms, masks);

        match player_outcome {
            EntityTickOutcome::Died => self.finish(false),
            EntityTickOutcome::ReachedPortal => self.finish(true),
            EntityTickOutcome::None => {}
        }
    }

    /// Keep the player's visible center inside the map strip
    fn check_bounds(&mut self) {
        if self.player.center_x() < 0.0 {
            self.player.set_center_x(0.0);
        } else if self.player.center_x() > self.map.pixel_width() {
            self.player.set_center_x(self.map.pixel_width());
        }
    }

    /// Player-versus-enemy damage. The player's swing takes priority:
    /// when both sides have an active attack in the same overlap, only
    /// the enemy gets hit.
    fn check_combat(&mut self, now_ms: f64, masks: &MaskBook) {
        for enemy in &mut self.enemies {
            if !sprites_overlap(&self.player, enemy, masks) {
                continue;
            }
            if self.player.attack_is_active() {
                enemy.receive_attack(1, now_ms, &mut self.sounds);
            } else if enemy.attack_is_active() {
                self.player.receive_attack(1, now_ms, &mut self.sounds);
            }
        }
    }

    fn finish(&mut self, won: bool) {
        self.over = true;
        self.won = won;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn offset_x(&self) -> f32 {
        self.camera.offset_x()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Whole seconds of unpaused play. Stops with the session, so the end
    /// overlay shows the run's duration.
    pub fn elapsed_secs(&self) -> u32 {
        self.ticks / TICK_RATE
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Sounds requested since the last drain, in emission order
    pub fn drain_sounds(&mut self) -> impl Iterator<Item = SoundEvent> + '_ {
        self.sounds.drain()
    }
}

/// Pixel-accurate overlap between two entities' current sprite frames.
/// Offsets are truncated to whole pixels the way integer screen rects
/// would be.
fn sprites_overlap(a: &Entity, b: &Entity, masks: &MaskBook) -> bool {
    let mask_a = masks
        .for_class(a.kind.class)
        .mask(a.state(), a.facing(), a.frame());
    let mask_b = masks
        .for_class(b.kind.class)
        .mask(b.state(), b.facing(), b.frame());
    let dx = b.x as i32 - a.x as i32;
    let dy = (b.y - b.kind.sprite_h) as i32 - (a.y - a.kind.sprite_h) as i32;
    mask_a.overlap(mask_b, dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::mask::{MaskSet, SpriteMask};
    use crate::game::state::EntityState;
    use crate::world::TileKind;
    use macroquad::color::Color;
    use macroquad::texture::Image;

    // Fully opaque canvases: mask overlap degenerates to rect overlap,
    // which keeps combat positioning in tests easy to reason about
    fn solid_masks() -> MaskBook {
        let player_img = Image::gen_image_color(96, 96, Color::new(1.0, 1.0, 1.0, 1.0));
        let enemy_img = Image::gen_image_color(108, 64, Color::new(1.0, 1.0, 1.0, 1.0));
        let set = |img: &Image| {
            MaskSet::new(std::array::from_fn(|_| {
                [
                    vec![SpriteMask::from_alpha(img)],
                    vec![SpriteMask::from_alpha(img)],
                ]
            }))
        };
        MaskBook {
            player: set(&player_img),
            enemy: set(&enemy_img),
        }
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    fn run_ticks(session: &mut Session, input: &FrameInput, masks: &MaskBook, now: &mut f64, n: u32) {
        for _ in 0..n {
            *now += 34.0;
            session.update(input, *now, masks);
        }
    }

    #[test]
    fn test_spawn_tiles_become_enemies_and_clear() {
        let mut map = TileMap::with_ground(1);
        assert!(map.change_type(8, 11, TileKind::EnemySpawn));
        assert!(map.change_type(14, 11, TileKind::EnemySpawn));

        let session = Session::new(map, Difficulty::Easy, 0);
        assert_eq!(session.enemies().len(), 2);
        assert_eq!(session.enemies()[0].x, 8.0 * 32.0);
        assert_eq!(
            session.map().tile_at(8, 11).unwrap().kind,
            TileKind::Empty
        );
        assert_eq!(
            session.map().tile_at(14, 11).unwrap().kind,
            TileKind::Empty
        );
    }

    #[test]
    fn test_player_clamped_to_left_map_edge() {
        let masks = solid_masks();
        let mut session = Session::new(TileMap::with_ground(1), Difficulty::Easy, 0);
        let input = FrameInput {
            move_intent: -1,
            ..FrameInput::default()
        };

        let mut now = 0.0;
        run_ticks(&mut session, &input, &masks, &mut now, 80);
        assert_eq!(session.player().center_x(), 0.0);
        assert_eq!(session.offset_x(), 0.0);
    }

    #[test]
    fn test_portal_win_finishes_session_and_keeps_high_score() {
        let mut map = TileMap::with_ground(1);
        // Portal overlapping the spawn point: instant win
        assert!(map.place_portal(3, 9));
        let masks = solid_masks();
        let mut session = Session::new(map, Difficulty::Easy, 5);

        let mut now = 0.0;
        run_ticks(&mut session, &idle(), &masks, &mut now, 10);
        assert!(session.is_over());
        assert!(session.won());
        // Won with zero kills, so the old high score stands
        assert_eq!(session.high_score(), 5);
    }

    #[test]
    fn test_pause_freezes_the_world() {
        let masks = solid_masks();
        let mut session = Session::new(TileMap::with_ground(1), Difficulty::Easy, 0);
        let mut now = 0.0;
        run_ticks(&mut session, &idle(), &masks, &mut now, 10);

        let pause = FrameInput {
            pause_pressed: true,
            ..FrameInput::default()
        };
        session.update(&pause, now, &masks);
        assert!(session.paused());

        let walk = FrameInput {
            move_intent: 1,
            ..FrameInput::default()
        };
        let x = session.player().x;
        run_ticks(&mut session, &walk, &masks, &mut now, 10);
        assert_eq!(session.player().x, x);

        let unpause = FrameInput {
            pause_pressed: true,
            move_intent: 1,
            ..FrameInput::default()
        };
        now += 34.0;
        session.update(&unpause, now, &masks);
        assert!(!session.paused());
        run_ticks(&mut session, &walk, &masks, &mut now, 2);
        assert!(session.player().x > x);
    }

    #[test]
    fn test_elapsed_time_counts_only_unpaused_ticks() {
        let masks = solid_masks();
        let mut session = Session::new(TileMap::with_ground(1), Difficulty::Easy, 0);
        let mut now = 0.0;

        run_ticks(&mut session, &idle(), &masks, &mut now, 30);
        assert_eq!(session.elapsed_secs(), 1);

        let pause = FrameInput {
            pause_pressed: true,
            ..FrameInput::default()
        };
        session.update(&pause, now, &masks);
        run_ticks(&mut session, &idle(), &masks, &mut now, 60);
        assert_eq!(session.elapsed_secs(), 1);
    }

    #[test]
    fn test_attack_damages_overlapping_enemy() {
        let mut map = TileMap::with_ground(1);
        // Enemy materializes right next to the player
        assert!(map.change_type(6, 11, TileKind::EnemySpawn));
        let masks = solid_masks();
        let mut session = Session::new(map, Difficulty::Easy, 0);

        let swing = FrameInput {
            attack_pressed: true,
            ..FrameInput::default()
        };
        let mut now = 0.0;
        let mut hurt_seen = false;
        for _ in 0..120 {
            now += 34.0;
            session.update(&swing, now, &masks);
            if session
                .enemies()
                .first()
                .is_some_and(|e| e.state() == EntityState::Hurt)
            {
                hurt_seen = true;
                break;
            }
        }
        assert!(hurt_seen);
        assert_eq!(session.enemies()[0].health(), 1);
    }

    #[test]
    fn test_killing_the_enemy_scores_and_compacts() {
        let mut map = TileMap::with_ground(1);
        assert!(map.change_type(6, 11, TileKind::EnemySpawn));
        let masks = solid_masks();
        let mut session = Session::new(map, Difficulty::Easy, 0);

        let swing = FrameInput {
            attack_pressed: true,
            ..FrameInput::default()
        };
        let mut now = 0.0;
        for _ in 0..600 {
            now += 34.0;
            session.update(&swing, now, &masks);
            if session.enemies().is_empty() {
                break;
            }
        }
        assert!(session.enemies().is_empty());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_sounds_drain_in_order_and_empty() {
        let mut map = TileMap::with_ground(1);
        assert!(map.change_type(6, 11, TileKind::EnemySpawn));
        let masks = solid_masks();
        let mut session = Session::new(map, Difficulty::Easy, 0);

        let swing = FrameInput {
            attack_pressed: true,
            ..FrameInput::default()
        };
        let mut now = 0.0;
        let mut collected = Vec::new();
        for _ in 0..120 {
            now += 34.0;
            session.update(&swing, now, &masks);
            collected.extend(session.drain_sounds());
            if collected.contains(&SoundEvent::EnemyHurt) {
                break;
            }
        }
        assert!(collected.contains(&SoundEvent::PlayerAttack));
        assert!(collected.contains(&SoundEvent::EnemyHurt));
        assert_eq!(session.drain_sounds().count(), 0);
    }
}
