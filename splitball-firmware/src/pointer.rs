use splitball_common::pointer::{PointerConfig, PointerSettings};

use crate::report::MouseReport;

/// Pointer modes and DPI state for one keyboard. The drag-scroll buffers carry partial movement
/// between reports.
#[derive(Debug)]
pub struct Pointer {
    config: PointerConfig,
    settings: PointerSettings,
    scroll_buffer_x: i16,
    scroll_buffer_y: i16,
}

impl Pointer {
    pub const fn new(settings: PointerSettings) -> Self {
        Self {
            config: PointerConfig::from_raw(0),
            settings,
            scroll_buffer_x: 0,
            scroll_buffer_y: 0,
        }
    }

    pub fn config(&self) -> PointerConfig {
        self.config
    }

    pub fn settings(&self) -> &PointerSettings {
        &self.settings
    }

    pub(crate) fn load(&mut self, raw: u32) {
        self.config = PointerConfig::from_persisted(raw);
    }

    pub(crate) fn reset(&mut self) {
        self.config = PointerConfig::first_boot();
    }

    pub fn default_dpi(&self) -> u16 {
        self.settings.default_dpi(&self.config)
    }

    pub fn sniping_dpi(&self) -> u16 {
        self.settings.sniping_dpi(&self.config)
    }

    pub fn active_cpi(&self) -> u16 {
        self.settings.active_cpi(&self.config)
    }

    pub(crate) fn step_default_dpi(&mut self, forward: bool) {
        self.config.step_default_dpi(forward);
    }

    pub(crate) fn step_sniping_dpi(&mut self, forward: bool) {
        self.config.step_sniping_dpi(forward);
    }

    pub fn is_sniping_enabled(&self) -> bool {
        self.config.is_sniping_enabled()
    }

    pub(crate) fn set_sniping_enabled(&mut self, enable: bool) {
        self.config.set_sniping_enabled(enable);
    }

    pub fn is_dragscroll_enabled(&self) -> bool {
        self.config.is_dragscroll_enabled()
    }

    pub(crate) fn set_dragscroll_enabled(&mut self, enable: bool) {
        self.config.set_dragscroll_enabled(enable);
    }

    /// Turn pointer movement into scroll ticks while drag-scroll is enabled.
    ///
    /// Movement is accumulated per axis and one tick (in the direction of the accumulated movement)
    /// is emitted each time the accumulator exceeds the buffer size, after which it restarts from
    /// zero. The pointer itself does not move.
    pub(crate) fn dragscroll(&mut self, report: &mut MouseReport) {
        if !self.config.is_dragscroll_enabled() {
            return;
        }
        let s = &self.settings;
        self.scroll_buffer_x = accumulate(self.scroll_buffer_x, report.x, s.dragscroll_reverse_x);
        self.scroll_buffer_y = accumulate(self.scroll_buffer_y, report.y, s.dragscroll_reverse_y);
        report.x = 0;
        report.y = 0;
        if self.scroll_buffer_x.unsigned_abs() > s.dragscroll_buffer_size.unsigned_abs() {
            report.h = if self.scroll_buffer_x > 0 { 1 } else { -1 };
            self.scroll_buffer_x = 0;
        }
        if self.scroll_buffer_y.unsigned_abs() > s.dragscroll_buffer_size.unsigned_abs() {
            report.v = if self.scroll_buffer_y > 0 { 1 } else { -1 };
            self.scroll_buffer_y = 0;
        }
    }

    #[cfg(test)]
    pub(crate) fn scroll_buffers(&self) -> (i16, i16) {
        (self.scroll_buffer_x, self.scroll_buffer_y)
    }
}

#[inline]
fn accumulate(buffer: i16, delta: i16, reverse: bool) -> i16 {
    if reverse {
        buffer.saturating_sub(delta)
    } else {
        buffer.saturating_add(delta)
    }
}

#[cfg(test)]
#[path = "pointer_test.rs"]
mod test;
