//! Cross-fade between sidebar pages.

/// Alpha per second.
pub const FADE_RATE: f32 = 4.0;

/// Fades the shown page out when another tab is selected and back in once
/// the swap happened. The shown page only changes while fully transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabFader {
    alpha:  f32,
    active: usize,
}

impl Default for TabFader {
    fn default() -> Self { Self::new(0) }
}

impl TabFader {
    pub fn new(active: usize) -> Self { Self { alpha: 0.0, active } }

    /// Advance by `dt` seconds towards `selected`; returns the new alpha.
    pub fn update(&mut self, selected: usize, dt: f32) -> f32 {
        let dir = if selected == self.active { 1.0 } else { -1.0 };
        self.alpha = (self.alpha + FADE_RATE * dt.max(0.0) * dir).clamp(0.0, 1.0);
        if self.alpha == 0.0 {
            self.active = selected;
        }
        self.alpha
    }

    #[inline] pub fn alpha(&self)  -> f32   { self.alpha }
    /// Page currently drawn.
    #[inline] pub fn active(&self) -> usize { self.active }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_in_from_zero_and_clamps() {
        let mut f = TabFader::new(0);
        assert_eq!(f.alpha(), 0.0);
        assert_eq!(f.update(0, 0.125), 0.5);
        assert_eq!(f.update(0, 1.0), 1.0);
        assert_eq!(f.update(0, 1.0), 1.0);
    }

    #[test]
    fn switch_waits_for_full_fade_out() {
        let mut f = TabFader::new(0);
        f.update(0, 1.0);

        assert_eq!(f.update(2, 0.125), 0.5);
        assert_eq!(f.active(), 0, "old page still shown while fading out");

        assert_eq!(f.update(2, 0.125), 0.0);
        assert_eq!(f.active(), 2);

        assert_eq!(f.update(2, 0.125), 0.5);
        assert_eq!(f.active(), 2);
    }

    #[test]
    fn reselecting_mid_fade_reverses() {
        let mut f = TabFader::new(1);
        f.update(1, 1.0);
        f.update(3, 0.125);
        assert_eq!(f.update(1, 0.0625), 0.75);
        assert_eq!(f.active(), 1);
    }

    #[test]
    fn zero_dt_at_zero_alpha_swaps_immediately() {
        let mut f = TabFader::new(0);
        f.update(5, 0.0);
        assert_eq!(f.active(), 5);
    }
}
