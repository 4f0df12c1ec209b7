use crate::surface::{ids, Surface};

pub const MIN: u8 = 0;
pub const MAX: u8 = 100;
pub const MIDPOINT: u8 = 50;
const SWEEP_STEP: u8 = 2;

/// Applies a slider position to the two comparison maps.
pub fn apply<S: Surface + ?Sized>(value: u8, surface: &mut S) {
    let value = value.min(MAX);
    let blur = f64::from(MAX - value) / 10.0;
    let opacity = f64::from(value) / 100.0;

    surface.set_text(ids::ACCURACY_SLIDER, &value.to_string());
    surface.set_style(ids::BLURRY_MAP, "filter", &format!("blur({blur}px)"));
    surface.set_style(ids::SHARP_MAP, "opacity", &opacity.to_string());
    surface.set_style(ids::BLURRY_MAP, "opacity", &(1.0 - opacity * 0.3).to_string());
}

/// One-shot 0 to 100 sweep played on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sweep {
    value: u8,
}

impl Sweep {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Advances one step and returns the new position.
    pub fn step(&mut self) -> u8 {
        self.value = self.value.saturating_add(SWEEP_STEP).min(MAX);
        self.value
    }

    pub fn is_done(&self) -> bool {
        self.value >= MAX
    }
}

/// Moves `value` by `delta`, clamped to the slider range.
pub fn nudge(value: u8, delta: i16) -> u8 {
    (i16::from(value) + delta).clamp(i16::from(MIN), i16::from(MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;

    #[test]
    fn test_apply_midpoint() {
        let mut doc = Document::new();
        apply(MIDPOINT, &mut doc);
        assert_eq!(doc.text(ids::ACCURACY_SLIDER), "50");
        assert_eq!(doc.style(ids::BLURRY_MAP, "filter"), Some("blur(5px)"));
        assert_eq!(doc.style(ids::SHARP_MAP, "opacity"), Some("0.5"));
        assert_eq!(doc.style(ids::BLURRY_MAP, "opacity"), Some("0.85"));
    }

    #[test]
    fn test_apply_extremes() {
        let mut doc = Document::new();
        apply(MIN, &mut doc);
        assert_eq!(doc.style(ids::BLURRY_MAP, "filter"), Some("blur(10px)"));
        assert_eq!(doc.style(ids::SHARP_MAP, "opacity"), Some("0"));
        assert_eq!(doc.style(ids::BLURRY_MAP, "opacity"), Some("1"));

        apply(MAX, &mut doc);
        assert_eq!(doc.style(ids::BLURRY_MAP, "filter"), Some("blur(0px)"));
        assert_eq!(doc.style(ids::SHARP_MAP, "opacity"), Some("1"));
        assert_eq!(doc.style(ids::BLURRY_MAP, "opacity"), Some("0.7"));
    }

    #[test]
    fn test_sweep_takes_fifty_steps() {
        let mut sweep = Sweep::new();
        let mut steps = 0;
        while !sweep.is_done() {
            sweep.step();
            steps += 1;
        }
        assert_eq!(steps, 50);
        assert_eq!(sweep.value(), MAX);
    }

    #[test]
    fn test_nudge_clamps() {
        assert_eq!(nudge(98, 5), 100);
        assert_eq!(nudge(3, -5), 0);
        assert_eq!(nudge(50, 5), 55);
    }
}
