/// Register addresses in the ADS1115 memory map.
#[derive(Clone, Copy)]
#[repr(u8)]
pub(crate) enum Register {
    /// Conversion Register (signed, read-only)
    Conversion = 0x00,
    /// Configuration Register
    Config,
    /// Low Threshold Register (signed)
    LoThresh,
    /// High Threshold Register (signed)
    HiThresh,
}

/// Operational-status / single-shot-start bit of the configuration
/// register as the device presents it on the wire: reads as 1 when the
/// device is idle, 0 while a conversion is in progress; writing a 1
/// starts a conversion in single-shot mode.
pub(crate) const OS_MASK: u16 = 0x0080;

// Configuration register field layout, LSB upward:
// [mux:3][pga:3][mode:1][rate:3][compMode:1][compPol:1][compLatch:1][compQueue:2]
pub(crate) const COMP_QUE_MASK: u16 = 0x03;
pub(crate) const COMP_LAT_SHIFT: u16 = 2;
pub(crate) const COMP_POL_SHIFT: u16 = 3;
pub(crate) const COMP_MODE_SHIFT: u16 = 4;
pub(crate) const RATE_SHIFT: u16 = 5;
pub(crate) const MODE_SHIFT: u16 = 8;
pub(crate) const PGA_SHIFT: u16 = 9;
pub(crate) const MUX_SHIFT: u16 = 12;

// Maximum raw value of each stored configuration field.
pub(crate) const MUX_MAX: u16 = 7;
pub(crate) const PGA_MAX: u16 = 7;
pub(crate) const MODE_MAX: u16 = 1;
pub(crate) const RATE_MAX: u16 = 7;
pub(crate) const COMP_MODE_MAX: u16 = 1;
pub(crate) const COMP_POL_MAX: u16 = 1;
pub(crate) const COMP_LAT_MAX: u16 = 1;
pub(crate) const COMP_QUE_MAX: u16 = 3;
