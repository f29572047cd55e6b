//! # TI ADS1115 Driver
//!
//! Controls the ADS1115 A/D converter and reads sampled values over I2C.
//!
//! Configuration is staged locally: the `set_*` methods only mutate the
//! stored fields, and [`Ads::write_config`] pushes the assembled 16-bit word
//! to the device in one transaction. Every bus operation is blocking and
//! takes `&mut self`; sharing a handle across threads requires external
//! synchronization by the caller.

#![cfg_attr(not(test), no_std)]

use crate::ads1115::Ads1115;
use core::result::Result;
use embedded_hal::i2c;

mod ads1115;
mod registers;

/// Default I2C device address (ADDR pin tied to ground).
pub const DEFAULT_DEVICE_ADDRESS: u8 = 0x48;

/// Input multiplexer selection.
#[derive(Clone, Copy)]
#[repr(u16)]
pub enum MuxMode {
    /// Differential, AIN0 positive, AIN1 negative
    Diff0_1 = 0,
    /// Differential, AIN0 positive, AIN3 negative
    Diff0_3 = 1,
    /// Differential, AIN1 positive, AIN3 negative
    Diff1_3 = 2,
    /// Differential, AIN2 positive, AIN3 negative
    Diff2_3 = 3,
    /// Single-ended AIN0
    Single0 = 4,
    /// Single-ended AIN1
    Single1 = 5,
    /// Single-ended AIN2
    Single2 = 6,
    /// Single-ended AIN3
    Single3 = 7,
}

/// Programmable gain amplifier full-scale range.
#[derive(Clone, Copy)]
#[repr(u16)]
pub enum PgaMode {
    /// Full Scale Range = +/- 6.144V
    Fs6_144 = 0,
    /// Full Scale Range = +/- 4.096V
    Fs4_096 = 1,
    /// Full Scale Range = +/- 2.048V
    Fs2_048 = 2,
    /// Full Scale Range = +/- 1.024V
    Fs1_024 = 3,
    /// Full Scale Range = +/- 0.512V
    Fs0_512 = 4,
    /// Full Scale Range = +/- 0.256V
    Fs0_256 = 5,
    /// Full Scale Range = +/- 0.256V (aliased code)
    Fs0_256B = 6,
    /// Full Scale Range = +/- 0.256V (aliased code)
    Fs0_256C = 7,
}

/// Continuous vs. single-shot conversion.
#[derive(Clone, Copy)]
#[repr(u16)]
pub enum ConversionMode {
    Continuous = 0,
    SingleShot = 1,
}

/// A/D sampling rate.
#[derive(Clone, Copy)]
#[repr(u16)]
pub enum DataRate {
    Sps8 = 0,
    Sps16 = 1,
    Sps32 = 2,
    Sps64 = 3,
    Sps128 = 4,
    Sps250 = 5,
    Sps475 = 6,
    Sps860 = 7,
}

/// Comparator mode.
#[derive(Clone, Copy)]
#[repr(u16)]
pub enum ComparatorMode {
    Traditional = 0,
    Window = 1,
}

/// Polarity of the ALERT/RDY pin.
#[derive(Clone, Copy)]
#[repr(u16)]
pub enum ComparatorPolarity {
    ActiveLow = 0,
    ActiveHigh = 1,
}

/// Whether the ALERT/RDY pin latches once asserted.
#[derive(Clone, Copy)]
#[repr(u16)]
pub enum ComparatorLatch {
    NonLatching = 0,
    Latching = 1,
}

/// Number of out-of-range conversions before the comparator asserts,
/// or disabled.
#[derive(Clone, Copy)]
#[repr(u16)]
pub enum ComparatorQueue {
    AssertAfterOne = 0,
    AssertAfterTwo = 1,
    AssertAfterFour = 2,
    Disabled = 3,
}

/// Errors that can occur when using the ADS1115 driver.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// An underlying bus transfer failed; the transport error is passed
    /// through verbatim, with no retry.
    Bus(E),
    /// A setter received a value exceeding its field's maximum; the stored
    /// configuration is unchanged.
    InvalidFieldValue,
    /// The construction-time probe read failed; no usable handle exists.
    DeviceUnreachable(E),
}

/// The supported A/D converter models.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    Ads1115,
}

impl core::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorKind::Ads1115 => f.write_str("ADS1115"),
        }
    }
}

/// Model-specific register logic, one variant per supported chip.
enum Model {
    Ads1115(Ads1115),
}

/// Handle bound to one physical A/D converter.
pub struct Ads<D, const DEVICE_ADDRESS: u8 = DEFAULT_DEVICE_ADDRESS>
where
    D: i2c::I2c,
{
    i2c_dev: D,
    model: Model,
}

impl<D, const DEVICE_ADDRESS: u8, E> Ads<D, DEVICE_ADDRESS>
where
    D: i2c::I2c<Error = E>,
{
    /// Creates a new driver handle for the given chip model.
    ///
    /// Issues one read of the configuration register to confirm the device
    /// responds; if that read fails the handle is not created and
    /// [`Error::DeviceUnreachable`] is returned.
    ///
    /// The stored configuration starts at zero rather than being read back
    /// from the device, so set every field of interest before the first
    /// [`write_config`](Self::write_config).
    pub fn try_new(kind: SensorKind, i2c_dev: D) -> Result<Self, Error<E>> {
        let model = match kind {
            SensorKind::Ads1115 => Model::Ads1115(Ads1115::default()),
        };
        let mut adc = Self { i2c_dev, model };
        adc.read_config().map_err(|err| match err {
            Error::Bus(e) => Error::DeviceUnreachable(e),
            other => other,
        })?;
        Ok(adc)
    }

    /// Returns which chip model this handle drives.
    pub fn kind(&self) -> SensorKind {
        match self.model {
            Model::Ads1115(_) => SensorKind::Ads1115,
        }
    }

    /// Releases the handle, handing the bus device back to the caller.
    pub fn release(self) -> D {
        self.i2c_dev
    }

    /// Reads the raw 16-bit configuration register from the device.
    pub fn read_config(&mut self) -> Result<u16, Error<E>> {
        match &self.model {
            Model::Ads1115(m) => m.read_config(&mut self.i2c_dev, DEVICE_ADDRESS),
        }
    }

    /// Writes the stored configuration fields to the device as one 16-bit
    /// configuration word.
    pub fn write_config(&mut self) -> Result<(), Error<E>> {
        match &self.model {
            Model::Ads1115(m) => m.write_config(&mut self.i2c_dev, DEVICE_ADDRESS),
        }
    }

    /// Sets the input multiplexer mode in the stored configuration.
    /// Does not touch the bus.
    pub fn set_mux_mode(&mut self, value: u16) -> Result<(), Error<E>> {
        match &mut self.model {
            Model::Ads1115(m) => m.set_mux_mode(value),
        }
    }

    /// Sets the PGA full-scale range in the stored configuration.
    /// Does not touch the bus.
    pub fn set_pga_mode(&mut self, value: u16) -> Result<(), Error<E>> {
        match &mut self.model {
            Model::Ads1115(m) => m.set_pga_mode(value),
        }
    }

    /// Sets continuous or single-shot conversion in the stored
    /// configuration. Does not touch the bus.
    pub fn set_conversion_mode(&mut self, value: u16) -> Result<(), Error<E>> {
        match &mut self.model {
            Model::Ads1115(m) => m.set_conversion_mode(value),
        }
    }

    /// Sets the sampling rate in the stored configuration.
    /// Does not touch the bus.
    pub fn set_data_rate(&mut self, value: u16) -> Result<(), Error<E>> {
        match &mut self.model {
            Model::Ads1115(m) => m.set_data_rate(value),
        }
    }

    /// Sets traditional or window comparator in the stored configuration.
    /// Does not touch the bus.
    pub fn set_comparator_mode(&mut self, value: u16) -> Result<(), Error<E>> {
        match &mut self.model {
            Model::Ads1115(m) => m.set_comparator_mode(value),
        }
    }

    /// Sets the comparator alert polarity in the stored configuration.
    /// Does not touch the bus.
    pub fn set_comparator_polarity(&mut self, value: u16) -> Result<(), Error<E>> {
        match &mut self.model {
            Model::Ads1115(m) => m.set_comparator_polarity(value),
        }
    }

    /// Sets comparator latching in the stored configuration.
    /// Does not touch the bus.
    pub fn set_comparator_latch(&mut self, value: u16) -> Result<(), Error<E>> {
        match &mut self.model {
            Model::Ads1115(m) => m.set_comparator_latch(value),
        }
    }

    /// Sets the comparator queue length in the stored configuration.
    /// Does not touch the bus.
    pub fn set_comparator_queue(&mut self, value: u16) -> Result<(), Error<E>> {
        match &mut self.model {
            Model::Ads1115(m) => m.set_comparator_queue(value),
        }
    }

    /// Reads the configuration register with the operational-status bit
    /// forced set. Bit 7 set means idle/ready; during a conversion the
    /// device itself reports it clear.
    pub fn read_status(&mut self) -> Result<u16, Error<E>> {
        match &self.model {
            Model::Ads1115(m) => m.read_status(&mut self.i2c_dev, DEVICE_ADDRESS),
        }
    }

    /// Triggers a one-shot conversion by setting the start bit in the
    /// configuration register as currently held by the hardware.
    pub fn start_conversion(&mut self) -> Result<(), Error<E>> {
        match &self.model {
            Model::Ads1115(m) => m.start_conversion(&mut self.i2c_dev, DEVICE_ADDRESS),
        }
    }

    /// Reads the low comparator threshold register.
    pub fn read_lo_threshold(&mut self) -> Result<i16, Error<E>> {
        match &self.model {
            Model::Ads1115(m) => m.read_lo_threshold(&mut self.i2c_dev, DEVICE_ADDRESS),
        }
    }

    /// Reads the high comparator threshold register.
    pub fn read_hi_threshold(&mut self) -> Result<i16, Error<E>> {
        match &self.model {
            Model::Ads1115(m) => m.read_hi_threshold(&mut self.i2c_dev, DEVICE_ADDRESS),
        }
    }

    /// Reads the most recent conversion result, in raw ADC counts.
    pub fn read_conversion(&mut self) -> Result<i16, Error<E>> {
        match &self.model {
            Model::Ads1115(m) => m.read_conversion(&mut self.i2c_dev, DEVICE_ADDRESS),
        }
    }
}
