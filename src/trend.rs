use crate::model::Reading;

/// pH movement below this delta is treated as probe noise, not a trend.
const PH_NOISE_FLOOR: f64 = 0.1;

/// Direction of pH movement relative to the previous row of the displayed
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// First row, with no predecessor to compare against.
    None,
    Stable,
    Up,
    Down,
}

impl Trend {
    /// Glyph shown next to the pH column.
    pub fn glyph(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::None | Trend::Stable => "→",
        }
    }
}

/// Compare `readings[index]` against its predecessor in the same collection.
///
/// Adjacency comes from the collection as displayed, so the same reading can
/// report a different trend depending on which collection it appears in.
pub fn trend(readings: &[Reading], index: usize) -> Trend {
    if index == 0 {
        return Trend::None;
    }
    let delta = readings[index].values.ph - readings[index - 1].values.ph;
    if delta.abs() < PH_NOISE_FLOOR {
        Trend::Stable
    } else if delta > 0.0 {
        Trend::Up
    } else {
        Trend::Down
    }
}
