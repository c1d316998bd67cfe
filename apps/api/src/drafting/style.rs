//! Style guide tables. Map a 1–5 level to the phrase embedded in the prompt.
//!
//! Levels are clamped on the way in, so every lookup here is total and the
//! prompt can never carry a missing guide.

use std::fmt;

/// A verbosity or formality level, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StyleLevel(u8);

impl StyleLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: StyleLevel = StyleLevel(3);

    /// Rounds to the nearest whole level and clamps into range.
    /// Callers must reject non-finite input first.
    pub fn clamped(value: f64) -> Self {
        let rounded = value.round().clamp(Self::MIN as f64, Self::MAX as f64);
        StyleLevel(rounded as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_max(self) -> bool {
        self.0 == Self::MAX
    }

    fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl Default for StyleLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StyleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

const LENGTH_GUIDE: [&str; 5] = [
    "Extremely short. 1–2 sentences maximum.",
    "Short. 2–3 sentences.",
    "Medium length. One short paragraph.",
    "Fairly detailed. Two short paragraphs.",
    "Very detailed and comprehensive reply.",
];

const FORMALITY_GUIDE: [&str; 5] = [
    "Very casual, like a quick message to a close friend.",
    "Friendly and relaxed.",
    "Polite and balanced, neither stiff nor casual.",
    "Professional and structured.",
    "Highly formal and respectful, suitable for official correspondence.",
];

pub fn length_guide(level: StyleLevel) -> &'static str {
    LENGTH_GUIDE[level.index()]
}

pub fn formality_guide(level: StyleLevel) -> &'static str {
    FORMALITY_GUIDE[level.index()]
}
