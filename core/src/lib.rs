pub mod config;
pub mod drag;
pub mod geom;
pub mod orbit;
pub mod slider;
pub mod typeset;

pub use config::{ConfigError, PageConfig};
pub use drag::{DragSession, DragStep};
pub use geom::{Point, Rect};
pub use orbit::{splat_layout, OrbitKey, RotationState, Splat};
pub use slider::{SliderKey, SliderPosition};
pub use typeset::{typeset_each, MathMode, TypesetReport};
