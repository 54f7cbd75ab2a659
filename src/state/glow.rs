use std::ops::RangeInclusive;

pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.1..=2.0;
pub const SPEED_RANGE_SECS: RangeInclusive<f32> = 1.0..=10.0;
pub const RADIUS_RANGE: RangeInclusive<f32> = 10.0..=50.0;

pub const DEFAULT_COLOR: &str = "#FF4500";
pub const DEFAULT_GRADIENT_END: &str = "#8A2BE2";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Solid,
    Gradient,
}

/// Cosmetic settings for the highlight around the chat input.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowPreference {
    enabled: bool,
    color: String,
    gradient_end: Option<String>,
    brightness: f32,
    speed_secs: f32,
    radius: f32,
}

impl Default for GlowPreference {
    fn default() -> Self {
        Self {
            enabled: false,
            color: DEFAULT_COLOR.to_string(),
            gradient_end: None,
            brightness: 1.0,
            speed_secs: 3.0,
            radius: 20.0,
        }
    }
}

impl GlowPreference {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn gradient_end(&self) -> Option<&str> {
        self.gradient_end.as_deref()
    }

    pub fn color_mode(&self) -> ColorMode {
        if self.gradient_end.is_some() {
            ColorMode::Gradient
        } else {
            ColorMode::Solid
        }
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn speed_secs(&self) -> f32 {
        self.speed_secs
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_color(&mut self, color: &str) -> bool {
        match normalize_hex(color) {
            Some(color) => {
                self.color = color;
                true
            }
            None => false,
        }
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        match mode {
            ColorMode::Solid => self.gradient_end = None,
            ColorMode::Gradient => {
                if self.gradient_end.is_none() {
                    self.gradient_end = Some(DEFAULT_GRADIENT_END.to_string());
                }
            }
        }
    }

    /// Only meaningful in gradient mode; ignored otherwise.
    pub fn set_gradient_end(&mut self, color: &str) -> bool {
        if self.gradient_end.is_none() {
            return false;
        }
        match normalize_hex(color) {
            Some(color) => {
                self.gradient_end = Some(color);
                true
            }
            None => false,
        }
    }

    pub fn set_brightness(&mut self, value: f32) {
        self.brightness = clamp_to(value, &BRIGHTNESS_RANGE, self.brightness);
    }

    pub fn set_speed_secs(&mut self, value: f32) {
        self.speed_secs = clamp_to(value, &SPEED_RANGE_SECS, self.speed_secs);
    }

    pub fn set_radius(&mut self, value: f32) {
        self.radius = clamp_to(value, &RADIUS_RANGE, self.radius);
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>, current: f32) -> f32 {
    if value.is_nan() {
        return current;
    }
    value.clamp(*range.start(), *range.end())
}

/// Accepts `#rrggbb` (any case) and returns it upper-cased.
fn normalize_hex(raw: &str) -> Option<String> {
    let digits = raw.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        tracing::debug!(color = raw, "ignoring malformed color");
        return None;
    }
    Some(format!("#{}", digits.to_ascii_uppercase()))
}
