use serde::{Deserialize, Serialize};

use crate::orbit::{
    ORBIT_BACKGROUND_DEFAULT, ORBIT_DRAG_SENSITIVITY_DEFAULT, ORBIT_KEY_STEP_DEFAULT,
    SPLAT_COUNT_DEFAULT,
};
use crate::slider::{SLIDER_DEFAULT, SLIDER_KEY_STEP_DEFAULT, SLIDER_MAX, SLIDER_MIN};

pub const COMPARISON_ROOT_ID: &str = "imageComparison";
pub const COMPARISON_MARKER_ID: &str = "comparisonSlider";
pub const COMPARISON_OVERLAY_ID: &str = "overlayImage";
pub const COMPARISON_CONTAINER_CLASS: &str = "comparison-container";
pub const ORBIT_CANVAS_ID: &str = "gaussianCanvas";
pub const RESIZE_DEBOUNCE_MS_DEFAULT: u32 = 250;
pub const RESIZE_SETTLE_MS_DEFAULT: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("page config is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("page config field `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    pub root_id: String,
    pub marker_id: String,
    pub overlay_id: String,
    pub container_class: String,
    pub initial_position: f64,
    pub key_step: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            root_id: COMPARISON_ROOT_ID.to_string(),
            marker_id: COMPARISON_MARKER_ID.to_string(),
            overlay_id: COMPARISON_OVERLAY_ID.to_string(),
            container_class: COMPARISON_CONTAINER_CLASS.to_string(),
            initial_position: SLIDER_DEFAULT,
            key_step: SLIDER_KEY_STEP_DEFAULT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbitConfig {
    pub canvas_id: String,
    pub drag_sensitivity: f64,
    pub key_step: f64,
    pub splat_count: usize,
    pub background: String,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            canvas_id: ORBIT_CANVAS_ID.to_string(),
            drag_sensitivity: ORBIT_DRAG_SENSITIVITY_DEFAULT,
            key_step: ORBIT_KEY_STEP_DEFAULT,
            splat_count: SPLAT_COUNT_DEFAULT,
            background: ORBIT_BACKGROUND_DEFAULT.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    pub debounce_ms: u32,
    pub settle_ms: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            debounce_ms: RESIZE_DEBOUNCE_MS_DEFAULT,
            settle_ms: RESIZE_SETTLE_MS_DEFAULT,
        }
    }
}

/// Page-level knobs. Every field has a default, so an empty object is valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub comparison: ComparisonConfig,
    pub orbit: OrbitConfig,
    pub resize: ResizeConfig,
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let initial = self.comparison.initial_position;
        if !initial.is_finite() || !(SLIDER_MIN..=SLIDER_MAX).contains(&initial) {
            return Err(ConfigError::Invalid {
                field: "comparison.initial_position",
                reason: "must be within 0..=100",
            });
        }
        if !positive(self.comparison.key_step) {
            return Err(ConfigError::Invalid {
                field: "comparison.key_step",
                reason: "must be a positive number",
            });
        }
        if !positive(self.orbit.key_step) {
            return Err(ConfigError::Invalid {
                field: "orbit.key_step",
                reason: "must be a positive number",
            });
        }
        if !self.orbit.drag_sensitivity.is_finite() {
            return Err(ConfigError::Invalid {
                field: "orbit.drag_sensitivity",
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
