//! Platformer simulation
//!
//! Everything that advances the game world lives here, kept free of
//! rendering so it can run headless in tests:
//!
//! - `state` / `kind`: entity state enum and per-kind capability tables
//! - `entity`: the shared player/enemy state machine
//! - `collision`: axis-separated tile resolution
//! - `mask`: pixel masks for combat overlap
//! - `camera`: horizontal scroll clamping
//! - `session`: the per-tick orchestrator tying it all together
//! - `events`: value-style sound requests out of the simulation
//! - `renderer`: draws a session and its overlays
//!
//! Design notes:
//! - Entities are one struct parameterized by [`EntityKind`], not a
//!   class hierarchy
//! - Time is threaded explicitly (`now_ms` parameters), never read from
//!   a global clock inside the simulation
//! - Simulation reports outcomes as values; playing sounds and ending
//!   screens is the caller's business

pub mod camera;
pub mod collision;
pub mod entity;
pub mod events;
pub mod kind;
pub mod mask;
pub mod renderer;
pub mod session;
pub mod state;

pub use entity::{Entity, EntityTickOutcome};
pub use events::{EventQueue, SoundEvent};
pub use kind::{Difficulty, EntityClass, EntityKind};
pub use mask::{MaskBook, MaskSet, SpriteMask};
pub use renderer::{draw_session, SessionAction};
pub use session::Session;
pub use state::{EntityState, Facing};

/// Fixed view size, matching the window the game was designed around
pub const VIEW_WIDTH: f32 = 600.0;
pub const VIEW_HEIGHT: f32 = 400.0;

/// Simulation ticks per second; the frame loop paces itself to this
pub const TICK_RATE: u32 = 30;
