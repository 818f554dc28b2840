use std::f64::consts::TAU;

use crate::geom::Point;

pub const ORBIT_DRAG_SENSITIVITY_DEFAULT: f64 = 0.5;
pub const ORBIT_KEY_STEP_DEFAULT: f64 = 10.0;
pub const SPLAT_COUNT_DEFAULT: usize = 50;
pub const ORBIT_BACKGROUND_DEFAULT: &str = "#1f2937";

const ROTATION_PHASE_SCALE: f64 = 0.01;
const SPLAT_BASE_RADIUS: f64 = 60.0;
const SPLAT_RADIUS_WOBBLE: f64 = 20.0;
const SPLAT_INDEX_PHASE: f64 = 0.5;
const SPLAT_ELLIPSE_SQUASH: f64 = 0.6;
const SPLAT_BASE_SIZE: f64 = 3.0;
const SPLAT_SIZE_WOBBLE: f64 = 2.0;
const SPLAT_SIZE_PHASE: f64 = 0.3;
const SPLAT_HUE_PER_INDEX: f64 = 7.0;
const SPLAT_HUE_PER_YAW: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitKey {
    Left,
    Right,
    Up,
    Down,
}

impl OrbitKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(OrbitKey::Left),
            "ArrowRight" => Some(OrbitKey::Right),
            "ArrowUp" => Some(OrbitKey::Up),
            "ArrowDown" => Some(OrbitKey::Down),
            _ => None,
        }
    }
}

/// Pitch (`x`) and yaw (`y`) accumulated without wraparound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
}

impl RotationState {
    /// Vertical motion pitches, horizontal motion yaws.
    pub fn apply_drag(&mut self, delta: Point, sensitivity: f64) {
        self.x += delta.y * sensitivity;
        self.y += delta.x * sensitivity;
    }

    pub fn apply_key(&mut self, key: OrbitKey, step: f64) {
        match key {
            OrbitKey::Left => self.y -= step,
            OrbitKey::Right => self.y += step,
            OrbitKey::Up => self.x -= step,
            OrbitKey::Down => self.x += step,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Splat {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub hue: f64,
}

impl Splat {
    pub fn fill_color(&self) -> String {
        format!("hsla({}, 70%, 60%, 0.8)", self.hue)
    }
}

/// Placeholder sprites for one frame on a `width` x `height` canvas.
pub fn splat_layout(rotation: RotationState, width: f64, height: f64, count: usize) -> Vec<Splat> {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let pitch_phase = rotation.x * ROTATION_PHASE_SCALE;
    (0..count)
        .map(|index| {
            let i = index as f64;
            let angle = (i / count as f64) * TAU + rotation.y * ROTATION_PHASE_SCALE;
            let radius = SPLAT_BASE_RADIUS + (pitch_phase + i * SPLAT_INDEX_PHASE).sin() * SPLAT_RADIUS_WOBBLE;
            let size = SPLAT_BASE_SIZE + (pitch_phase + i * SPLAT_SIZE_PHASE).sin() * SPLAT_SIZE_WOBBLE;
            // `%` keeps the dividend's sign, so negative yaw gives negative hues.
            let hue = (i * SPLAT_HUE_PER_INDEX + rotation.y * SPLAT_HUE_PER_YAW) % 360.0;
            Splat {
                x: center_x + angle.cos() * radius,
                y: center_y + angle.sin() * radius * SPLAT_ELLIPSE_SQUASH,
                size,
                hue,
            }
        })
        .collect()
}
