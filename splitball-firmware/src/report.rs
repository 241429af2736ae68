/// One pointing device report as it flows through the pointing task.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    pub buttons: u8,
    pub x: i16,
    pub y: i16,
    /// vertical scroll
    pub v: i8,
    /// horizontal scroll
    pub h: i8,
}

impl MouseReport {
    pub fn new(x: i16, y: i16) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }
}

