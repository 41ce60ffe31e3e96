//! Sound effects and the looped music track
//!
//! Sound files are optional. Missing ones are logged at startup and their
//! events are silently dropped, so the game runs fine without an assets
//! directory.

use macroquad::audio::{
    load_sound, play_sound, play_sound_once, stop_sound, PlaySoundParams, Sound,
};

use crate::game::SoundEvent;

const MUSIC_VOLUME: f32 = 0.4;

pub struct SoundBank {
    player_attack: Option<Sound>,
    player_hurt: Option<Sound>,
    player_death: Option<Sound>,
    enemy_attack: Option<Sound>,
    enemy_hurt: Option<Sound>,
    enemy_death: Option<Sound>,
    music: Option<Sound>,
    muted: bool,
    music_on: bool,
}

async fn load_optional(paths: &[&str]) -> Option<Sound> {
    for path in paths {
        match load_sound(path).await {
            Ok(sound) => return Some(sound),
            Err(e) => eprintln!("Failed to load sound {path}: {e}"),
        }
    }
    None
}

impl SoundBank {
    pub async fn load() -> Self {
        SoundBank {
            player_attack: load_optional(&["assets/sounds/axe1.ogg", "assets/sounds/axe1.wav"])
                .await,
            player_hurt: load_optional(&[
                "assets/sounds/player_hurt.ogg",
                "assets/sounds/player_hurt.wav",
            ])
            .await,
            player_death: load_optional(&[
                "assets/sounds/game_over.ogg",
                "assets/sounds/game_over.wav",
            ])
            .await,
            enemy_attack: load_optional(&["assets/sounds/swing.ogg", "assets/sounds/swing.wav"])
                .await,
            enemy_hurt: load_optional(&[
                "assets/sounds/enemy_hurt.ogg",
                "assets/sounds/enemy_hurt.wav",
            ])
            .await,
            // Falls back to the hurt sound when there is no dedicated one
            enemy_death: load_optional(&[
                "assets/sounds/enemy_death.ogg",
                "assets/sounds/enemy_hurt.ogg",
                "assets/sounds/enemy_hurt.wav",
            ])
            .await,
            music: load_optional(&["assets/sounds/music.ogg", "assets/sounds/music.wav"]).await,
            muted: false,
            music_on: false,
        }
    }

    pub fn play(&self, event: SoundEvent) {
        if self.muted {
            return;
        }
        let sound = match event {
            SoundEvent::PlayerAttack => &self.player_attack,
            SoundEvent::PlayerHurt => &self.player_hurt,
            SoundEvent::PlayerDeath => &self.player_death,
            SoundEvent::EnemyAttack => &self.enemy_attack,
            SoundEvent::EnemyHurt => &self.enemy_hurt,
            SoundEvent::EnemyDeath => &self.enemy_death,
        };
        if let Some(sound) = sound {
            play_sound_once(sound);
        }
    }

    /// Reconcile the music loop with the wanted state; callers can set this
    /// every frame.
    pub fn set_music(&mut self, on: bool) {
        if on == self.music_on {
            return;
        }
        self.music_on = on;
        let Some(music) = &self.music else {
            return;
        };
        if on && !self.muted {
            play_sound(
                music,
                PlaySoundParams {
                    looped: true,
                    volume: MUSIC_VOLUME,
                },
            );
        } else {
            stop_sound(music);
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        let Some(music) = &self.music else {
            return;
        };
        if self.muted {
            stop_sound(music);
        } else if self.music_on {
            play_sound(
                music,
                PlaySoundParams {
                    looped: true,
                    volume: MUSIC_VOLUME,
                },
            );
        }
    }
}
