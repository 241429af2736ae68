use std::fmt::Write;

use anyhow::{anyhow, bail, Context, Result};
use splitball_common::{
    keycodes::PointerKey,
    pointer::{PointerConfig, PointerSettings, DEFAULT_DPI_STEPS, SNIPING_DPI_STEPS},
};
use splitball_firmware::keyboards::{self, KeyboardDefinition};

pub type Definition = KeyboardDefinition<8, 5>;

/// Parse a decimal, `0x` hex or `0b` binary number.
pub fn parse_number(v: &str) -> Result<u32> {
    let v = v.trim().to_lowercase();
    let (digits, radix) = if let Some(hex) = v.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(bin) = v.strip_prefix("0b") {
        (bin, 2)
    } else {
        (v.as_str(), 10)
    };
    u32::from_str_radix(digits, radix).with_context(|| format!("Invalid number \"{v}\""))
}

/// Parse a config byte, or the whole eeconfig keyboard word which keeps the config in its low
/// byte.
pub fn parse_raw(v: &str) -> Result<PointerConfig> {
    let n = parse_number(v)?;
    if n > u8::MAX as u32 {
        log::info!("using low byte of {n:#010x}");
    }
    Ok(PointerConfig::from_raw(n as u8))
}

pub fn keyboard(name: &str) -> Result<&'static Definition> {
    keyboards::by_name(name).ok_or_else(|| {
        anyhow!(
            "Unknown keyboard \"{name}\"; expected one of: {}, {}",
            keyboards::A_DUX.name,
            keyboards::CHARYBDIS_3X5.name
        )
    })
}

fn on_off(v: bool) -> &'static str {
    if v {
        "on"
    } else {
        "off"
    }
}

pub fn decode(settings: &PointerSettings, config: PointerConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "raw:            {:#04x} ({:#010b})", config.raw(), config.raw());
    let _ = writeln!(
        out,
        "default dpi:    {} (step {} of {})",
        settings.default_dpi(&config),
        config.default_dpi_index(),
        DEFAULT_DPI_STEPS
    );
    let _ = writeln!(
        out,
        "sniping dpi:    {} (step {} of {})",
        settings.sniping_dpi(&config),
        config.sniping_dpi_index(),
        SNIPING_DPI_STEPS
    );
    let _ = writeln!(out, "sniping:        {}", on_off(config.is_sniping_enabled()));
    let _ = writeln!(out, "drag-scroll:    {}", on_off(config.is_dragscroll_enabled()));
    let _ = write!(out, "sensor cpi:     {}", settings.active_cpi(&config));
    if config.is_sniping_enabled() || config.is_dragscroll_enabled() {
        let _ = write!(
            out,
            "\nstored modes are cleared at boot; boots at {} cpi",
            settings.default_dpi(&config)
        );
    }
    out
}

pub fn encode(settings: &PointerSettings, default_dpi: u16, sniping_dpi: u16) -> Result<u8> {
    let Some(default_index) = settings.default_dpi_index_of(default_dpi) else {
        bail!(
            "{default_dpi} is not a default dpi step; run dpi-table for the valid values"
        );
    };
    let Some(sniping_index) = settings.sniping_dpi_index_of(sniping_dpi) else {
        bail!(
            "{sniping_dpi} is not a sniping dpi step; run dpi-table for the valid values"
        );
    };
    let mut config = PointerConfig::from_raw(0);
    config.set_default_dpi_index(default_index);
    config.set_sniping_dpi_index(sniping_index);
    log::debug!("encoded {default_dpi}/{sniping_dpi} as {:#04x}", config.raw());
    Ok(config.raw())
}

pub fn dpi_table(settings: &PointerSettings) -> String {
    let mut out = String::from("step  default  sniping\n");
    for i in 0..DEFAULT_DPI_STEPS {
        let _ = write!(out, "{i:>4}  {:>7}", settings.default_dpi_at(i));
        if i < SNIPING_DPI_STEPS {
            let _ = write!(out, "  {:>7}", settings.sniping_dpi_at(i));
        }
        out.push('\n');
    }
    let _ = write!(out, "drag-scroll: {} cpi", settings.dragscroll_dpi);
    out
}

pub fn keycode_table() -> String {
    let mut out = String::new();
    for key in PointerKey::iter() {
        let _ = writeln!(
            out,
            "{:#06x}  {:<8} {}",
            key.code(),
            key.short_name(),
            key.name()
        );
    }
    out
}

pub fn describe(def: &Definition) -> String {
    let mut out = String::new();
    let (rows, cols) = def.matrix_size();
    let _ = writeln!(out, "keyboard:       {}", def.name);
    let _ = writeln!(out, "matrix:         {rows}x{cols}");
    let _ = writeln!(out, "layers:         {}", def.dynamic_keymap_layer_count);
    let _ = writeln!(
        out,
        "vial uid:       {}",
        def.vial_keyboard_uid
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    );
    let _ = writeln!(out, "hand swap:      {}", on_off(def.hand_swap.is_some()));
    match def.usb_vbus_pin {
        Some(pin) => {
            let _ = writeln!(out, "master half:    USB VBUS on GP{pin}");
        }
        None => {
            let _ = writeln!(out, "master half:    always");
        }
    }
    match def.auto_pointer {
        Some(ap) => {
            let _ = writeln!(
                out,
                "pointer layer:  {} (timeout {}ms, threshold {})",
                ap.layer, ap.timeout, ap.threshold
            );
        }
        None => {
            let _ = writeln!(out, "pointer layer:  off");
        }
    }
    let o = &def.orientation;
    let _ = write!(
        out,
        "sensor:         rotation {}°, invert x {}, invert y {}",
        o.rotation,
        on_off(o.invert_x),
        on_off(o.invert_y)
    );
    out
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
