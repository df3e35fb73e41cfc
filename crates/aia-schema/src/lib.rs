//! Immutable schema tables for the DigitalGardenController project.
//!
//! Everything the tree builder emits comes from the constants in this crate:
//! component types and names, lamp commands, effect sliders and the
//! `project.properties` template.

pub mod effects;
pub mod project;
pub mod widgets;

pub use effects::{
    DEFAULT_ROUNDING, Direction, EFFECT_SLIDERS, EffectSlider, RoundingPolicy, SLIDER_DEFAULT,
    SLIDER_MAX, SLIDER_MIN,
};
pub use widgets::{COLOR_CHANNELS, ColorChannel, ComponentType, MODE_ROWS, ModeButton};
