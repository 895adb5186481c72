/// Easing functions mapping normalized progress `[0, 1]` to `[0, 1]`.
///
/// Every built-in curve satisfies `f(0) = 0` and `f(1) = 1`. `Custom` curves are
/// expected to follow the same convention but it is not enforced.
#[derive(Clone, Copy, Debug, Default)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    /// Caller supplied pure function.
    Custom(fn(f32) -> f32),
}

impl Ease {
    /// Applies the curve to `t`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::InCubic => t.powi(3),
            Self::OutCubic => (t - 1.0).powi(3) + 1.0,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (t - 1.0).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 + (t - 1.0).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
            Self::Custom(f) => f(t),
        }
    }
}

/// Playback direction of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    /// Mirrors progress (`1 - t`) before easing.
    Reverse,
}

impl Direction {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Forward => t,
            Self::Reverse => 1.0 - t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILT_IN: [Ease; 13] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
    ];

    #[test]
    fn built_in_curves_fix_endpoints() {
        for ease in BUILT_IN {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn built_in_curves_stay_in_unit_range() {
        for ease in BUILT_IN {
            for i in 0..=20 {
                let v = ease.apply(i as f32 / 20.0);
                assert!((-1e-6..=1.0 + 1e-6).contains(&v), "{ease:?} -> {v}");
            }
        }
    }

    #[test]
    fn in_out_curves_are_symmetric_at_half() {
        for ease in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutQuart, Ease::InOutQuint] {
            assert!((ease.apply(0.5) - 0.5).abs() < 1e-6, "{ease:?}");
        }
    }

    #[test]
    fn custom_curve_is_called() {
        fn step(t: f32) -> f32 {
            if t < 0.5 { 0.0 } else { 1.0 }
        }
        assert_eq!(Ease::Custom(step).apply(0.49), 0.0);
        assert_eq!(Ease::Custom(step).apply(0.5), 1.0);
    }

    #[test]
    fn reverse_mirrors_progress() {
        assert_eq!(Direction::Reverse.apply(0.25), 0.75);
        assert_eq!(Direction::Forward.apply(0.25), 0.25);
    }
}
