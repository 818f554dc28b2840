use crate::geom::Rect;

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 100.0;
pub const SLIDER_DEFAULT: f64 = 50.0;
pub const SLIDER_KEY_STEP_DEFAULT: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderKey {
    Decrease,
    Increase,
    Min,
    Max,
}

impl SliderKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(SliderKey::Decrease),
            "ArrowRight" => Some(SliderKey::Increase),
            "Home" => Some(SliderKey::Min),
            "End" => Some(SliderKey::Max),
            _ => None,
        }
    }
}

/// Reveal percentage of the overlay image, always within `[0, 100]`.
///
/// The marker offset and the overlay clip are both derived from this one
/// value so they cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SliderPosition(f64);

impl Default for SliderPosition {
    fn default() -> Self {
        Self(SLIDER_DEFAULT)
    }
}

impl SliderPosition {
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(SLIDER_MIN);
        }
        Self(value.clamp(SLIDER_MIN, SLIDER_MAX))
    }

    /// Percentage for a pointer at client `x` over `rect`. `None` when the
    /// container has no width yet.
    pub fn from_pointer(x: f64, rect: Rect) -> Option<Self> {
        if rect.width <= 0.0 {
            return None;
        }
        Some(Self::new((x - rect.left) / rect.width * 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn apply_key(self, key: SliderKey, step: f64) -> Self {
        match key {
            SliderKey::Decrease => Self::new(self.0 - step),
            SliderKey::Increase => Self::new(self.0 + step),
            SliderKey::Min => Self(SLIDER_MIN),
            SliderKey::Max => Self(SLIDER_MAX),
        }
    }

    pub fn marker_left(self) -> String {
        format!("{}%", self.0)
    }

    pub fn clip_right_inset(self) -> f64 {
        SLIDER_MAX - self.0
    }

    pub fn clip_path(self) -> String {
        format!("inset(0 {}% 0 0)", self.clip_right_inset())
    }

    pub fn aria_value(self) -> i32 {
        self.0.round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_input_falls_back_to_min() {
        assert_eq!(SliderPosition::new(f64::NAN).value(), 0.0);
        assert_eq!(SliderPosition::new(f64::INFINITY).value(), 0.0);
    }

    #[test]
    fn zero_width_container_has_no_position() {
        let rect = Rect::new(0.0, 0.0, 0.0, 40.0);
        assert!(SliderPosition::from_pointer(10.0, rect).is_none());
    }

    #[test]
    fn renders_css_values() {
        let position = SliderPosition::new(37.5);
        assert_eq!(position.marker_left(), "37.5%");
        assert_eq!(position.clip_path(), "inset(0 62.5% 0 0)");
        assert_eq!(position.aria_value(), 38);
    }

    #[test]
    fn unknown_keys_are_not_mapped() {
        assert_eq!(SliderKey::from_key("ArrowUp"), None);
        assert_eq!(SliderKey::from_key("a"), None);
        assert_eq!(SliderKey::from_key("End"), Some(SliderKey::Max));
    }
}
