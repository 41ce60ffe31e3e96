//! Generated sprite art and its GPU upload
//!
//! The game ships no image files. Every sprite is painted into a CPU image
//! when the game starts: entity sheets frame by frame, the nine solid tile
//! faces, the portal quarters and the backdrop. Collision masks are built
//! from the same images before they are uploaded, so the overlap the combat
//! code tests is exactly the overlap the player sees.
//!
//! Sheets are authored facing right; the left-facing row is a horizontal
//! mirror of the same frames.

use macroquad::prelude::*;

use super::AssetError;
use crate::game::{
    Difficulty, EntityClass, EntityKind, EntityState, Facing, MaskBook, MaskSet, SpriteMask,
};
use crate::world::SolidVariant;

const PLAYER_W: u16 = 96;
const PLAYER_H: u16 = 96;
const ENEMY_W: u16 = 108;
const ENEMY_H: u16 = 64;
const TILE: u16 = 32;
const BG_W: u16 = 640;
const BG_H: u16 = 400;

const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

// Woodcutter palette
const HAIR: Color = Color::new(0.35, 0.22, 0.12, 1.0);
const SKIN: Color = Color::new(0.87, 0.67, 0.5, 1.0);
const SHIRT: Color = Color::new(0.6, 0.2, 0.16, 1.0);
const BELT: Color = Color::new(0.25, 0.17, 0.1, 1.0);
const PANTS: Color = Color::new(0.27, 0.3, 0.38, 1.0);
const BOOTS: Color = Color::new(0.2, 0.14, 0.1, 1.0);
const AXE_HANDLE: Color = Color::new(0.48, 0.32, 0.16, 1.0);
const AXE_HEAD: Color = Color::new(0.72, 0.74, 0.78, 1.0);

// Bandit palette
const COAT: Color = Color::new(0.36, 0.22, 0.42, 1.0);
const COAT_DARK: Color = Color::new(0.26, 0.15, 0.3, 1.0);
const EN_SKIN: Color = Color::new(0.74, 0.58, 0.44, 1.0);
const EN_LEGS: Color = Color::new(0.2, 0.2, 0.24, 1.0);
const EN_BOOTS: Color = Color::new(0.12, 0.12, 0.14, 1.0);
const BLADE: Color = Color::new(0.75, 0.76, 0.8, 1.0);

// World palette
const GRASS: Color = Color::new(0.3, 0.62, 0.25, 1.0);
const GRASS_DARK: Color = Color::new(0.22, 0.48, 0.19, 1.0);
const DIRT: Color = Color::new(0.45, 0.32, 0.2, 1.0);
const DIRT_DARK: Color = Color::new(0.36, 0.25, 0.16, 1.0);
const PORTAL_LIGHT: Color = Color::new(0.7, 0.4, 0.95, 0.9);
const PORTAL_DARK: Color = Color::new(0.35, 0.12, 0.5, 0.9);
const MARKER: Color = Color::new(0.8, 0.15, 0.15, 1.0);
const SKY_TOP: Color = Color::new(0.35, 0.55, 0.85, 1.0);
const SKY_HORIZON: Color = Color::new(0.76, 0.86, 0.95, 1.0);
const SUN: Color = Color::new(0.98, 0.92, 0.7, 1.0);
const HILL_FAR: Color = Color::new(0.46, 0.6, 0.46, 1.0);
const HILL_NEAR: Color = Color::new(0.33, 0.5, 0.33, 1.0);

/// CPU-side frames for one entity class, indexed `[state][facing]`
pub struct SheetImages {
    pub frames: [[Vec<Image>; 2]; EntityState::COUNT],
}

impl SheetImages {
    fn build(kind: &EntityKind, paint: fn(EntityState, u32) -> Image) -> Self {
        let frames = std::array::from_fn(|i| {
            let state = EntityState::ALL[i];
            let right: Vec<Image> = (0..kind.frames.get(state)).map(|f| paint(state, f)).collect();
            let left: Vec<Image> = right.iter().map(mirrored).collect();
            [right, left]
        });
        SheetImages { frames }
    }

    pub fn frames(&self, state: EntityState, facing: Facing) -> &[Image] {
        &self.frames[state.index()][facing.index()]
    }
}

/// Everything `generate_art` paints, still on the CPU
pub struct GeneratedArt {
    pub player: SheetImages,
    pub enemy: SheetImages,
    pub tiles: [Image; SolidVariant::COUNT],
    pub portals: [Image; 4],
    pub spawn_marker: Image,
    pub background: Image,
}

/// Paint the full art set. Pure CPU work, deterministic.
pub fn generate_art() -> GeneratedArt {
    GeneratedArt {
        player: SheetImages::build(&EntityKind::player(), paint_player_frame),
        // Frame tables are identical across difficulties
        enemy: SheetImages::build(&EntityKind::enemy(Difficulty::Okay), paint_enemy_frame),
        tiles: std::array::from_fn(|i| paint_tile(SolidVariant::ALL[i])),
        portals: std::array::from_fn(paint_portal_quarter),
        spawn_marker: paint_spawn_marker(),
        background: paint_background(),
    }
}

/// Check the sheets against the animation tables before anything uses them.
pub fn verify_art(art: &GeneratedArt) -> Result<(), AssetError> {
    verify_sheet(EntityClass::Player, &art.player, &EntityKind::player())?;
    verify_sheet(
        EntityClass::Enemy,
        &art.enemy,
        &EntityKind::enemy(Difficulty::Okay),
    )?;
    Ok(())
}

fn verify_sheet(
    class: EntityClass,
    sheet: &SheetImages,
    kind: &EntityKind,
) -> Result<(), AssetError> {
    for state in EntityState::ALL {
        for facing in [Facing::Right, Facing::Left] {
            let actual = sheet.frames(state, facing).len();
            let expected = kind.frames.get(state) as usize;
            if actual == 0 {
                return Err(AssetError::MissingAnimation { class, state });
            }
            if actual != expected {
                return Err(AssetError::FrameCount {
                    class,
                    state,
                    expected,
                    actual,
                });
            }
        }
    }
    Ok(())
}

/// Build the collision masks the session needs, from the same images the
/// textures come from.
pub fn build_masks(art: &GeneratedArt) -> MaskBook {
    MaskBook {
        player: mask_set(&art.player),
        enemy: mask_set(&art.enemy),
    }
}

fn mask_set(sheet: &SheetImages) -> MaskSet {
    MaskSet::new(std::array::from_fn(|state| {
        [0usize, 1].map(|facing| {
            sheet.frames[state][facing]
                .iter()
                .map(SpriteMask::from_alpha)
                .collect()
        })
    }))
}

/// GPU textures for one entity class, indexed like [`SheetImages`]
pub struct SpriteSet {
    frames: [[Vec<Texture2D>; 2]; EntityState::COUNT],
}

impl SpriteSet {
    fn upload(sheet: &SheetImages) -> Self {
        SpriteSet {
            frames: std::array::from_fn(|state| {
                std::array::from_fn(|facing| {
                    sheet.frames[state][facing].iter().map(to_texture).collect()
                })
            }),
        }
    }

    pub fn frame(&self, state: EntityState, facing: Facing, index: usize) -> &Texture2D {
        let frames = &self.frames[state.index()][facing.index()];
        &frames[index % frames.len()]
    }
}

/// Every texture the renderer draws
pub struct TextureBook {
    player: SpriteSet,
    enemy: SpriteSet,
    tiles: [Texture2D; SolidVariant::COUNT],
    portals: [Texture2D; 4],
    spawn_marker: Texture2D,
    background: Texture2D,
}

impl TextureBook {
    pub fn upload(art: &GeneratedArt) -> Self {
        TextureBook {
            player: SpriteSet::upload(&art.player),
            enemy: SpriteSet::upload(&art.enemy),
            tiles: std::array::from_fn(|i| to_texture(&art.tiles[i])),
            portals: std::array::from_fn(|i| to_texture(&art.portals[i])),
            spawn_marker: to_texture(&art.spawn_marker),
            background: to_texture(&art.background),
        }
    }

    pub fn sprite(&self, class: EntityClass) -> &SpriteSet {
        match class {
            EntityClass::Player => &self.player,
            EntityClass::Enemy => &self.enemy,
        }
    }

    pub fn tile(&self, variant: SolidVariant) -> &Texture2D {
        &self.tiles[variant.index()]
    }

    pub fn portal(&self, index: usize) -> &Texture2D {
        &self.portals[index.min(3)]
    }

    pub fn spawn_marker(&self) -> &Texture2D {
        &self.spawn_marker
    }

    pub fn background(&self) -> &Texture2D {
        &self.background
    }
}

fn to_texture(image: &Image) -> Texture2D {
    let texture = Texture2D::from_image(image);
    texture.set_filter(FilterMode::Nearest);
    texture
}

fn blank(w: u16, h: u16) -> Image {
    Image::gen_image_color(w, h, TRANSPARENT)
}

/// Fill a rectangle, clipped to the image. Zero or negative sizes paint
/// nothing.
fn fill_rect(image: &mut Image, x: i32, y: i32, w: i32, h: i32, color: Color) {
    let right = (x + w).min(image.width as i32);
    let bottom = (y + h).min(image.height as i32);
    for py in y.max(0)..bottom {
        for px in x.max(0)..right {
            image.set_pixel(px as u32, py as u32, color);
        }
    }
}

fn mirrored(image: &Image) -> Image {
    let mut out = Image::gen_image_color(image.width, image.height, TRANSPARENT);
    for y in 0..image.height as u32 {
        for x in 0..image.width as u32 {
            out.set_pixel(image.width as u32 - 1 - x, y, image.get_pixel(x, y));
        }
    }
    out
}

// --- Woodcutter -------------------------------------------------------

// The body sits inside the hitbox region (x 14..50, y 32..96 when facing
// right); only the axe reaches outside it during the swing.

fn player_trunk(img: &mut Image, dx: i32, dy: i32) {
    fill_rect(img, 22 + dx, 30 + dy, 20, 6, HAIR);
    fill_rect(img, 24 + dx, 36 + dy, 16, 10, SKIN);
    fill_rect(img, 20 + dx, 46 + dy, 24, 24, SHIRT);
    fill_rect(img, 20 + dx, 70 + dy, 24, 3, BELT);
}

fn player_arm(img: &mut Image, dx: i32, dy: i32) {
    fill_rect(img, 40 + dx, 48 + dy, 8, 15, SHIRT);
    fill_rect(img, 40 + dx, 63 + dy, 8, 5, SKIN);
}

fn player_legs(img: &mut Image, left_dx: i32, right_dx: i32, top: i32, bottom: i32) {
    fill_rect(img, 21 + left_dx, top, 10, bottom - top - 5, PANTS);
    fill_rect(img, 33 + right_dx, top, 10, bottom - top - 5, PANTS);
    fill_rect(img, 21 + left_dx, bottom - 5, 10, 5, BOOTS);
    fill_rect(img, 33 + right_dx, bottom - 5, 10, 5, BOOTS);
}

enum AxePose {
    Rest,
    Windup,
    Swing,
}

fn player_axe(img: &mut Image, pose: AxePose) {
    match pose {
        AxePose::Rest => {
            fill_rect(img, 46, 54, 4, 28, AXE_HANDLE);
            fill_rect(img, 43, 50, 10, 7, AXE_HEAD);
        }
        AxePose::Windup => {
            fill_rect(img, 38, 26, 4, 26, AXE_HANDLE);
            fill_rect(img, 32, 22, 12, 7, AXE_HEAD);
        }
        AxePose::Swing => {
            fill_rect(img, 48, 46, 24, 4, AXE_HANDLE);
            fill_rect(img, 70, 38, 8, 16, AXE_HEAD);
        }
    }
}

fn paint_player_frame(state: EntityState, frame: u32) -> Image {
    let mut img = blank(PLAYER_W, PLAYER_H);
    let f = frame as i32;
    match state {
        EntityState::Idle => {
            let dy = [0, 1, 1, 0][frame as usize % 4];
            player_trunk(&mut img, 0, dy);
            player_arm(&mut img, 0, dy);
            player_legs(&mut img, 0, 0, 73, 96);
            player_axe(&mut img, AxePose::Rest);
        }
        EntityState::Run => {
            let stride = [4, 2, 0, -2, -4, 0][frame as usize % 6];
            player_trunk(&mut img, 0, 1);
            player_arm(&mut img, 0, 1);
            player_legs(&mut img, stride, -stride, 74, 96);
            player_axe(&mut img, AxePose::Rest);
        }
        EntityState::Jump => {
            player_trunk(&mut img, 0, 0);
            player_arm(&mut img, 1, -4 - f.min(2));
            player_legs(&mut img, 0, 0, 73, 90);
            player_axe(&mut img, AxePose::Rest);
        }
        EntityState::Fall => {
            player_trunk(&mut img, 0, 0);
            player_arm(&mut img, 2, -8);
            player_legs(&mut img, -3, 3, 73, 94);
            player_axe(&mut img, AxePose::Rest);
        }
        EntityState::Attack => {
            player_trunk(&mut img, 0, 0);
            player_legs(&mut img, 0, 0, 73, 96);
            match f {
                0..=2 => {
                    player_arm(&mut img, 0, -6);
                    player_axe(&mut img, AxePose::Windup);
                }
                3 | 4 => {
                    // arm stretched behind the swing
                    fill_rect(&mut img, 42, 48, 10, 6, SHIRT);
                    player_axe(&mut img, AxePose::Swing);
                }
                _ => {
                    player_arm(&mut img, 0, 0);
                    player_axe(&mut img, AxePose::Rest);
                }
            }
        }
        EntityState::Hurt => {
            player_trunk(&mut img, -f * 2, 1);
            player_arm(&mut img, -f * 2 + 2, -2);
            player_legs(&mut img, -f, f, 73, 96);
        }
        EntityState::Dead => {
            if f < 4 {
                let sink = f * 6;
                player_trunk(&mut img, -f * 2, sink);
                player_arm(&mut img, -f * 2, sink);
                player_legs(&mut img, -f, f, 73 + sink, 96);
            } else {
                // face down
                fill_rect(&mut img, 18, 84, 34, 10, SHIRT);
                fill_rect(&mut img, 52, 86, 14, 8, SKIN);
                fill_rect(&mut img, 10, 88, 8, 6, BOOTS);
            }
        }
    }
    img
}

// --- Bandit -----------------------------------------------------------

// Body in x 41..67, y 7..60; the thrust frames push the blade out toward
// the right edge of the canvas.

fn enemy_trunk(img: &mut Image, dx: i32, dy: i32) {
    fill_rect(img, 45 + dx, 7 + dy, 18, 6, COAT_DARK);
    fill_rect(img, 47 + dx, 13 + dy, 14, 10, EN_SKIN);
    fill_rect(img, 43 + dx, 23 + dy, 22, 22, COAT);
}

fn enemy_arm(img: &mut Image, dx: i32, dy: i32) {
    fill_rect(img, 60 + dx, 25 + dy, 7, 13, COAT);
    fill_rect(img, 60 + dx, 38 + dy, 7, 5, EN_SKIN);
}

fn enemy_legs(img: &mut Image, left_dx: i32, right_dx: i32) {
    fill_rect(img, 45 + left_dx, 45, 9, 12, EN_LEGS);
    fill_rect(img, 55 + right_dx, 45, 9, 12, EN_LEGS);
    fill_rect(img, 45 + left_dx, 57, 9, 3, EN_BOOTS);
    fill_rect(img, 55 + right_dx, 57, 9, 3, EN_BOOTS);
}

enum BladePose {
    Rest,
    Raised,
    Thrust,
}

fn enemy_blade(img: &mut Image, pose: BladePose) {
    match pose {
        BladePose::Rest => {
            fill_rect(img, 66, 28, 3, 18, BLADE);
            fill_rect(img, 63, 44, 9, 3, AXE_HANDLE);
        }
        BladePose::Raised => {
            fill_rect(img, 69, 12, 3, 20, BLADE);
            fill_rect(img, 66, 30, 9, 3, AXE_HANDLE);
        }
        BladePose::Thrust => {
            fill_rect(img, 66, 30, 30, 4, BLADE);
            fill_rect(img, 96, 29, 5, 6, BLADE);
            fill_rect(img, 64, 28, 3, 8, AXE_HANDLE);
        }
    }
}

fn paint_enemy_frame(state: EntityState, frame: u32) -> Image {
    let mut img = blank(ENEMY_W, ENEMY_H);
    let f = frame as i32;
    match state {
        // The idle sheet doubles as the airborne art
        EntityState::Idle | EntityState::Jump | EntityState::Fall => {
            let dy = if (f / 3) % 2 == 0 { 0 } else { 1 };
            enemy_trunk(&mut img, 0, dy);
            enemy_arm(&mut img, 0, dy);
            enemy_legs(&mut img, 0, 0);
            enemy_blade(&mut img, BladePose::Rest);
        }
        EntityState::Run => {
            let stride = [3, 2, 0, -2, -3, 0][frame as usize % 6];
            enemy_trunk(&mut img, 0, 0);
            enemy_arm(&mut img, 0, 0);
            enemy_legs(&mut img, stride, -stride);
            enemy_blade(&mut img, BladePose::Rest);
        }
        EntityState::Attack => {
            enemy_trunk(&mut img, 0, 0);
            enemy_legs(&mut img, 1, -1);
            if (7..=9).contains(&f) {
                fill_rect(&mut img, 62, 28, 8, 6, COAT);
                enemy_blade(&mut img, BladePose::Thrust);
            } else if f < 7 {
                enemy_arm(&mut img, 1, -4);
                enemy_blade(&mut img, BladePose::Raised);
            } else {
                enemy_arm(&mut img, 0, 0);
                enemy_blade(&mut img, BladePose::Rest);
            }
        }
        EntityState::Hurt => {
            let recoil = f.min(4);
            enemy_trunk(&mut img, -recoil, 1);
            enemy_arm(&mut img, -recoil, 0);
            enemy_legs(&mut img, -recoil / 2, recoil / 2);
        }
        EntityState::Dead => {
            if f < 10 {
                let sink = (f * 4).min(32);
                enemy_trunk(&mut img, -f, sink);
                enemy_legs(&mut img, -f / 2, f / 2);
            } else {
                fill_rect(&mut img, 38, 52, 30, 8, COAT);
                fill_rect(&mut img, 68, 54, 12, 6, EN_SKIN);
            }
        }
    }
    img
}

// --- World art --------------------------------------------------------

fn paint_tile(variant: SolidVariant) -> Image {
    let mut img = Image::gen_image_color(TILE, TILE, DIRT);
    for y in 0..TILE as i32 {
        for x in 0..TILE as i32 {
            if (x * 7 + y * 13) % 11 == 0 {
                img.set_pixel(x as u32, y as u32, DIRT_DARK);
            }
        }
    }

    use SolidVariant::*;
    if variant != Covered {
        fill_rect(&mut img, 0, 0, 32, 7, GRASS);
        fill_rect(&mut img, 0, 7, 32, 2, GRASS_DARK);
    }
    if matches!(variant, SurfaceLeft | ColumnCap | StripLeft | Lone) {
        fill_rect(&mut img, 0, 0, 2, 32, DIRT_DARK);
    }
    if matches!(variant, SurfaceRight | ColumnCap | StripRight | Lone) {
        fill_rect(&mut img, 30, 0, 2, 32, DIRT_DARK);
    }
    if matches!(variant, StripLeft | StripMid | StripRight | Lone) {
        fill_rect(&mut img, 0, 30, 32, 2, DIRT_DARK);
    }
    img
}

/// One quarter of the 2x2 portal. The swirl is centered on the corner the
/// quarters share, so the assembled block reads as a single ring.
fn paint_portal_quarter(index: usize) -> Image {
    let mut img = blank(TILE, TILE);
    let (cx, cy) = [(32.0, 32.0), (0.0, 32.0), (32.0, 0.0), (0.0, 0.0)][index];
    for y in 0..TILE as u32 {
        for x in 0..TILE as u32 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt();
            if d < 30.0 {
                let color = if (d / 5.0) as u32 % 2 == 0 {
                    PORTAL_LIGHT
                } else {
                    PORTAL_DARK
                };
                img.set_pixel(x, y, color);
            }
        }
    }
    img
}

/// Red cross shown for spawn markers in the editor
fn paint_spawn_marker() -> Image {
    let mut img = blank(TILE, TILE);
    for t in 0..TILE as i32 {
        for w in 0..3 {
            let x = (t + w).min(31);
            img.set_pixel(x as u32, t as u32, MARKER);
            img.set_pixel((31 - x) as u32, t as u32, MARKER);
        }
    }
    fill_rect(&mut img, 0, 0, 32, 2, MARKER);
    fill_rect(&mut img, 0, 30, 32, 2, MARKER);
    fill_rect(&mut img, 0, 0, 2, 32, MARKER);
    fill_rect(&mut img, 30, 0, 2, 32, MARKER);
    img
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        1.0,
    )
}

/// Sky gradient, sun and two hill layers; one span of the scrolling
/// backdrop.
fn paint_background() -> Image {
    let mut img = Image::gen_image_color(BG_W, BG_H, SKY_TOP);
    for y in 0..BG_H as u32 {
        let color = lerp(SKY_TOP, SKY_HORIZON, y as f32 / BG_H as f32);
        for x in 0..BG_W as u32 {
            img.set_pixel(x, y, color);
        }
    }

    for y in 38..94u32 {
        for x in 496..552u32 {
            let dx = x as f32 - 524.0;
            let dy = y as f32 - 66.0;
            if dx * dx + dy * dy < 26.0 * 26.0 {
                img.set_pixel(x, y, SUN);
            }
        }
    }

    for x in 0..BG_W as u32 {
        let far = 270.0 + 28.0 * (x as f32 / 57.0).sin();
        let near = 318.0 + 22.0 * (x as f32 / 33.0 + 1.7).sin();
        for y in far as u32..BG_H as u32 {
            img.set_pixel(x, y, HILL_FAR);
        }
        for y in near as u32..BG_H as u32 {
            img.set_pixel(x, y, HILL_NEAR);
        }
    }
    img
}
