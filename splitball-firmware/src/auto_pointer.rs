use crate::{
    host::{Host, LayerState},
    report::MouseReport,
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AutoPointerSettings {
    /// Layer turned on while the trackball moves.
    pub layer: u8,
    /// in milliseconds
    pub timeout: u16,
    /// Movement on either axis above this turns the layer on.
    pub threshold: u8,
    /// When set, sniping follows whether this layer is active.
    pub sniping_layer: Option<u8>,
}
impl Default for AutoPointerSettings {
    fn default() -> Self {
        Self::new(4)
    }
}
impl AutoPointerSettings {
    pub const fn new(layer: u8) -> Self {
        Self {
            layer,
            timeout: 1000,
            threshold: 8,
            sniping_layer: None,
        }
    }

    pub const fn with_timeout(mut self, timeout: u16) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub const fn with_sniping_layer(mut self, layer: u8) -> Self {
        self.sniping_layer = Some(layer);
        self
    }
}

/// Turns a pointer layer on when the trackball moves and back off once it has been still for the
/// timeout.
#[derive(Debug)]
pub struct AutoPointerLayer {
    settings: AutoPointerSettings,
    /// Time of the last qualifying movement; `None` while the layer is off.
    last_motion: Option<u64>,
}

impl AutoPointerLayer {
    pub const fn new(settings: AutoPointerSettings) -> Self {
        Self {
            settings,
            last_motion: None,
        }
    }

    pub fn settings(&self) -> &AutoPointerSettings {
        &self.settings
    }

    pub fn is_active(&self) -> bool {
        self.last_motion.is_some()
    }

    pub fn motion(&mut self, report: &MouseReport, now: u64, host: &mut impl Host) {
        let threshold = self.settings.threshold as u16;
        if report.x.unsigned_abs() > threshold || report.y.unsigned_abs() > threshold {
            if self.last_motion.is_none() {
                crate::debug!("auto pointer layer {} on", self.settings.layer);
                host.layer_on(self.settings.layer);
            }
            self.last_motion = Some(now);
        }
    }

    pub fn scan(&mut self, now: u64, host: &mut impl Host) {
        if let Some(t) = self.last_motion {
            if now.saturating_sub(t) >= self.settings.timeout as u64 {
                crate::debug!("auto pointer layer {} off", self.settings.layer);
                self.last_motion = None;
                host.layer_off(self.settings.layer);
            }
        }
    }

    /// Whether sniping should be on for `state`, or `None` when sniping is not tied to a layer.
    pub fn sniping_for(&self, state: LayerState) -> Option<bool> {
        self.settings
            .sniping_layer
            .map(|layer| layer < 32 && state & (1 << layer) != 0)
    }
}

#[cfg(test)]
#[path = "auto_pointer_test.rs"]
mod test;
