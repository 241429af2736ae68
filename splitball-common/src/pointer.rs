/// Number of default DPI steps that fit in [PointerConfig]'s 4 bit field.
pub const DEFAULT_DPI_STEPS: u8 = 16;
/// Number of sniping DPI steps that fit in [PointerConfig]'s 2 bit field.
pub const SNIPING_DPI_STEPS: u8 = 4;
/// Default DPI index written on first boot; 1000 DPI with the default [PointerSettings].
pub const FIRST_BOOT_DEFAULT_DPI_INDEX: u8 = 3;

const DEFAULT_DPI_MASK: u8 = 0b0000_1111;
const SNIPING_DPI_SHIFT: u8 = 4;
const SNIPING_DPI_MASK: u8 = 0b0011_0000;
const DRAGSCROLL_BIT: u8 = 0b0100_0000;
const SNIPING_BIT: u8 = 0b1000_0000;

/// The packed pointer configuration byte.
///
/// | bits | field |
/// |------|-------|
/// | 0-3  | default DPI index |
/// | 4-5  | sniping DPI index |
/// | 6    | drag-scroll enabled |
/// | 7    | sniping enabled |
///
/// ```
/// use splitball_common::pointer::PointerConfig;
///
/// let mut config = PointerConfig::first_boot();
/// config.set_sniping_enabled(true);
/// assert_eq!(config.raw(), 0x83);
///
/// // mode flags never survive a reload
/// assert_eq!(PointerConfig::from_persisted(config.raw() as u32).raw(), 0x03);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerConfig(u8);

impl PointerConfig {
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Load a value read from persistent storage. Only the low byte is used and both mode flags are
    /// cleared so the board never powers on drag-scrolling or sniping.
    pub const fn from_persisted(raw: u32) -> Self {
        Self((raw & 0xff) as u8 & !(DRAGSCROLL_BIT | SNIPING_BIT))
    }

    pub const fn first_boot() -> Self {
        Self(FIRST_BOOT_DEFAULT_DPI_INDEX)
    }

    pub const fn raw(&self) -> u8 {
        self.0
    }

    pub const fn default_dpi_index(&self) -> u8 {
        self.0 & DEFAULT_DPI_MASK
    }

    pub fn set_default_dpi_index(&mut self, index: u8) {
        self.0 = (self.0 & !DEFAULT_DPI_MASK) | (index & DEFAULT_DPI_MASK);
    }

    pub const fn sniping_dpi_index(&self) -> u8 {
        (self.0 & SNIPING_DPI_MASK) >> SNIPING_DPI_SHIFT
    }

    pub fn set_sniping_dpi_index(&mut self, index: u8) {
        self.0 = (self.0 & !SNIPING_DPI_MASK) | ((index << SNIPING_DPI_SHIFT) & SNIPING_DPI_MASK);
    }

    pub const fn is_dragscroll_enabled(&self) -> bool {
        self.0 & DRAGSCROLL_BIT != 0
    }

    pub fn set_dragscroll_enabled(&mut self, enable: bool) {
        self.set_flag(DRAGSCROLL_BIT, enable);
    }

    pub const fn is_sniping_enabled(&self) -> bool {
        self.0 & SNIPING_BIT != 0
    }

    pub fn set_sniping_enabled(&mut self, enable: bool) {
        self.set_flag(SNIPING_BIT, enable);
    }

    /// Move the default DPI index one step, wrapping within its 16 steps.
    pub fn step_default_dpi(&mut self, forward: bool) {
        self.set_default_dpi_index(step(self.default_dpi_index(), forward));
    }

    /// Move the sniping DPI index one step, wrapping within its 4 steps.
    pub fn step_sniping_dpi(&mut self, forward: bool) {
        self.set_sniping_dpi_index(step(self.sniping_dpi_index(), forward));
    }

    fn set_flag(&mut self, bit: u8, enable: bool) {
        if enable {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

#[inline]
fn step(index: u8, forward: bool) -> u8 {
    if forward {
        index.wrapping_add(1)
    } else {
        index.wrapping_sub(1)
    }
}

/// Per keyboard pointer constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSettings {
    pub minimum_default_dpi: u16,
    pub default_dpi_config_step: u16,
    pub minimum_sniping_dpi: u16,
    pub sniping_dpi_config_step: u16,
    /// Fixed DPI for drag-scroll.
    pub dragscroll_dpi: u16,
    /// Accumulated movement needed before one scroll tick is emitted.
    pub dragscroll_buffer_size: i16,
    pub dragscroll_reverse_x: bool,
    pub dragscroll_reverse_y: bool,
}
impl Default for PointerSettings {
    fn default() -> Self {
        Self::new()
    }
}
impl PointerSettings {
    pub const fn new() -> Self {
        Self {
            minimum_default_dpi: 400,
            default_dpi_config_step: 200,
            minimum_sniping_dpi: 200,
            sniping_dpi_config_step: 100,
            dragscroll_dpi: 100,
            dragscroll_buffer_size: 6,
            dragscroll_reverse_x: false,
            dragscroll_reverse_y: false,
        }
    }

    pub const fn with_default_dpi(mut self, minimum: u16, config_step: u16) -> Self {
        self.minimum_default_dpi = minimum;
        self.default_dpi_config_step = config_step;
        self
    }

    pub const fn with_sniping_dpi(mut self, minimum: u16, config_step: u16) -> Self {
        self.minimum_sniping_dpi = minimum;
        self.sniping_dpi_config_step = config_step;
        self
    }

    pub const fn with_dragscroll(mut self, dpi: u16, buffer_size: i16) -> Self {
        self.dragscroll_dpi = dpi;
        self.dragscroll_buffer_size = buffer_size;
        self
    }

    pub const fn with_dragscroll_reverse(mut self, x: bool, y: bool) -> Self {
        self.dragscroll_reverse_x = x;
        self.dragscroll_reverse_y = y;
        self
    }

    /// DPI for a default DPI step. Wraps at `u16::MAX` like the firmware's 16 bit DPI values.
    pub const fn default_dpi_at(&self, index: u8) -> u16 {
        (index as u16)
            .wrapping_mul(self.default_dpi_config_step)
            .wrapping_add(self.minimum_default_dpi)
    }

    pub const fn sniping_dpi_at(&self, index: u8) -> u16 {
        (index as u16)
            .wrapping_mul(self.sniping_dpi_config_step)
            .wrapping_add(self.minimum_sniping_dpi)
    }

    pub const fn default_dpi(&self, config: &PointerConfig) -> u16 {
        self.default_dpi_at(config.default_dpi_index())
    }

    pub const fn sniping_dpi(&self, config: &PointerConfig) -> u16 {
        self.sniping_dpi_at(config.sniping_dpi_index())
    }

    /// The CPI the sensor should run at. Drag-scroll wins over sniping.
    pub const fn active_cpi(&self, config: &PointerConfig) -> u16 {
        if config.is_dragscroll_enabled() {
            self.dragscroll_dpi
        } else if config.is_sniping_enabled() {
            self.sniping_dpi(config)
        } else {
            self.default_dpi(config)
        }
    }

    /// Find the default DPI index producing `dpi` exactly.
    pub fn default_dpi_index_of(&self, dpi: u16) -> Option<u8> {
        (0..DEFAULT_DPI_STEPS).find(|i| self.default_dpi_at(*i) == dpi)
    }

    /// Find the sniping DPI index producing `dpi` exactly.
    pub fn sniping_dpi_index_of(&self, dpi: u16) -> Option<u8> {
        (0..SNIPING_DPI_STEPS).find(|i| self.sniping_dpi_at(*i) == dpi)
    }
}

#[cfg(test)]
#[path = "pointer_test.rs"]
mod test;
