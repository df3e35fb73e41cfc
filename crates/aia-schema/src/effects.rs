//! Effect sliders and the linear mapping from slider position to value.

/// Slider position used for every default value.
pub const SLIDER_DEFAULT: u32 = 50;
pub const SLIDER_MIN: u32 = 0;
pub const SLIDER_MAX: u32 = 100;

/// Whether the effect value shrinks or grows as the slider moves right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Decreasing,
    Increasing,
}

/// Rule applied to the half-integer results of the linear mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// 10.5 becomes 10, 11.5 becomes 12.
    #[default]
    HalfEven,
    /// 10.5 becomes 11.
    HalfUp,
}

impl RoundingPolicy {
    #[must_use]
    pub fn apply(self, value: f64) -> i64 {
        let rounded = match self {
            Self::HalfEven => value.round_ties_even(),
            Self::HalfUp => (value + 0.5).floor(),
        };
        rounded as i64
    }
}

/// Rounding used for every generated default.
pub const DEFAULT_ROUNDING: RoundingPolicy = RoundingPolicy::HalfEven;

/// One tunable effect parameter and the widgets wired to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectSlider {
    pub slider: &'static str,
    pub label: &'static str,
    pub command_key: &'static str,
    pub base: u32,
    pub range: u32,
    pub direction: Direction,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl EffectSlider {
    /// `base ∓ range × input / 100`, rounded by `policy`.
    #[must_use]
    pub fn value_at(&self, input: u32, policy: RoundingPolicy) -> i64 {
        let delta = f64::from(self.range) * f64::from(input) / 100.0;
        let raw = match self.direction {
            Direction::Decreasing => f64::from(self.base) - delta,
            Direction::Increasing => f64::from(self.base) + delta,
        };
        policy.apply(raw)
    }

    #[must_use]
    pub fn default_value(&self) -> i64 {
        self.value_at(SLIDER_DEFAULT, DEFAULT_ROUNDING)
    }

    #[must_use]
    pub fn label_text(&self, value: i64) -> String {
        format!("{}{value}{}", self.prefix, self.suffix)
    }

    #[must_use]
    pub fn default_label_text(&self) -> String {
        self.label_text(self.default_value())
    }

    /// Command text sent before the value, e.g. `SET BLINK `.
    #[must_use]
    pub fn command_prefix(&self) -> String {
        format!("SET {} ", self.command_key)
    }

    /// Layout wrapping the label and slider.
    #[must_use]
    pub fn layout_name(&self) -> String {
        format!("{}Layout", self.slider)
    }
}

pub const EFFECT_SLIDERS: &[EffectSlider] = &[
    EffectSlider {
        slider: "BlinkSlider",
        label: "BlinkLabel",
        command_key: "BLINK",
        base: 2000,
        range: 1950,
        direction: Direction::Decreasing,
        prefix: "Blink Interval: ",
        suffix: " ms",
    },
    EffectSlider {
        slider: "ChaseSlider",
        label: "ChaseLabel",
        command_key: "CHASE",
        base: 2000,
        range: 1950,
        direction: Direction::Decreasing,
        prefix: "Chase Interval: ",
        suffix: " ms",
    },
    EffectSlider {
        slider: "FadeSlider",
        label: "FadeLabel",
        command_key: "FADE",
        base: 1,
        range: 19,
        direction: Direction::Increasing,
        prefix: "Fade Step: ",
        suffix: "",
    },
    EffectSlider {
        slider: "RainbowSlider",
        label: "RainbowLabel",
        command_key: "RAINBOW",
        base: 200,
        range: 190,
        direction: Direction::Decreasing,
        prefix: "Rainbow Speed: ",
        suffix: " ms",
    },
    EffectSlider {
        slider: "TwinkleSlider",
        label: "TwinkleLabel",
        command_key: "TWINKLE",
        base: 1,
        range: 99,
        direction: Direction::Increasing,
        prefix: "Twinkle Speed: ",
        suffix: "",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(key: &str) -> &'static EffectSlider {
        EFFECT_SLIDERS
            .iter()
            .find(|s| s.command_key == key)
            .expect("known slider")
    }

    #[test]
    fn golden_defaults_at_midpoint() {
        let defaults: Vec<i64> = EFFECT_SLIDERS.iter().map(EffectSlider::default_value).collect();
        assert_eq!(defaults, vec![1025, 1025, 10, 105, 50]);
    }

    #[test]
    fn half_even_and_half_up_differ_only_on_ties() {
        assert_eq!(RoundingPolicy::HalfEven.apply(10.5), 10);
        assert_eq!(RoundingPolicy::HalfUp.apply(10.5), 11);
        assert_eq!(RoundingPolicy::HalfEven.apply(11.5), 12);
        assert_eq!(RoundingPolicy::HalfUp.apply(11.5), 12);
        assert_eq!(RoundingPolicy::HalfEven.apply(10.4), 10);
        assert_eq!(RoundingPolicy::HalfUp.apply(10.6), 11);
    }

    #[test]
    fn half_up_would_move_the_tied_defaults() {
        assert_eq!(slider("FADE").value_at(SLIDER_DEFAULT, RoundingPolicy::HalfUp), 11);
        assert_eq!(slider("TWINKLE").value_at(SLIDER_DEFAULT, RoundingPolicy::HalfUp), 51);
        assert_eq!(slider("BLINK").value_at(SLIDER_DEFAULT, RoundingPolicy::HalfUp), 1025);
    }

    #[test]
    fn endpoints_hit_base_and_base_plus_minus_range() {
        let blink = slider("BLINK");
        assert_eq!(blink.value_at(SLIDER_MIN, DEFAULT_ROUNDING), 2000);
        assert_eq!(blink.value_at(SLIDER_MAX, DEFAULT_ROUNDING), 50);
        let fade = slider("FADE");
        assert_eq!(fade.value_at(SLIDER_MIN, DEFAULT_ROUNDING), 1);
        assert_eq!(fade.value_at(SLIDER_MAX, DEFAULT_ROUNDING), 20);
    }

    #[test]
    fn label_text_includes_suffix_when_present() {
        assert_eq!(slider("BLINK").default_label_text(), "Blink Interval: 1025 ms");
        assert_eq!(slider("FADE").default_label_text(), "Fade Step: 10");
        assert_eq!(slider("RAINBOW").default_label_text(), "Rainbow Speed: 105 ms");
        assert_eq!(slider("TWINKLE").default_label_text(), "Twinkle Speed: 50");
    }

    #[test]
    fn command_prefix_and_layout_name() {
        assert_eq!(slider("CHASE").command_prefix(), "SET CHASE ");
        assert_eq!(slider("CHASE").layout_name(), "ChaseSliderLayout");
    }
}
