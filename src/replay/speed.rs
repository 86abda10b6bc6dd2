use std::time::Duration;

/// Auto-advance speed selector. The set is closed so every speed-dependent
/// branch is checked exhaustively at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackSpeed {
    Half,
    #[default]
    Normal,
    OneAndHalf,
    Double,
    Quadruple,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 5] = [
        PlaybackSpeed::Half,
        PlaybackSpeed::Normal,
        PlaybackSpeed::OneAndHalf,
        PlaybackSpeed::Double,
        PlaybackSpeed::Quadruple,
    ];

    /// Factor applied to the base per-move delay.
    pub fn multiplier(self) -> f64 {
        match self {
            PlaybackSpeed::Half => 2.0,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::OneAndHalf => 0.667,
            PlaybackSpeed::Double => 0.5,
            PlaybackSpeed::Quadruple => 0.25,
        }
    }

    pub fn delay(self, base: Duration) -> Duration {
        base.mul_f64(self.multiplier())
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackSpeed::Half => "0.5x",
            PlaybackSpeed::Normal => "1x",
            PlaybackSpeed::OneAndHalf => "1.5x",
            PlaybackSpeed::Double => "2x",
            PlaybackSpeed::Quadruple => "4x",
        }
    }
}
