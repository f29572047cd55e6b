//! ADS1115 register model: the stored configuration fields, the bit-packing
//! into the 16-bit configuration word, and the raw register transactions.

use crate::registers::*;
use crate::Error;
use byteorder::{BigEndian, ByteOrder};
use embedded_hal::i2c;

/// Stored (not-yet-written) configuration for one ADS1115.
///
/// Fields start at zero and are only changed by the setters; they are never
/// read back from the device. Callers must set every field of interest
/// before the first [`write_config`](Ads1115::write_config), since omitted
/// fields serialize as zero rather than inheriting the hardware state.
#[derive(Default)]
pub(crate) struct Ads1115 {
    mux: u16,
    pga: u16,
    conversion_mode: u16,
    data_rate: u16,
    comparator_mode: u16,
    comparator_polarity: u16,
    comparator_latch: u16,
    comparator_queue: u16,
}

/// Validates `value` against the field maximum before storing it. Leaves the
/// slot untouched on rejection.
fn store_field<E>(slot: &mut u16, value: u16, max: u16) -> Result<(), Error<E>> {
    if value > max {
        return Err(Error::InvalidFieldValue);
    }
    *slot = value;
    Ok(())
}

impl Ads1115 {
    /// Packs the stored fields into the 16-bit configuration word.
    ///
    /// The word is always derived fresh from the stored fields; it is never
    /// itself the source of truth.
    pub(crate) fn assembled_config(&self) -> u16 {
        (self.comparator_queue & COMP_QUE_MASK)
            | (self.comparator_latch & 1) << COMP_LAT_SHIFT
            | (self.comparator_polarity & 1) << COMP_POL_SHIFT
            | (self.comparator_mode & 1) << COMP_MODE_SHIFT
            | (self.data_rate & RATE_MAX) << RATE_SHIFT
            | (self.conversion_mode & 1) << MODE_SHIFT
            | (self.pga & PGA_MAX) << PGA_SHIFT
            | (self.mux & MUX_MAX) << MUX_SHIFT
    }

    pub(crate) fn set_mux_mode<E>(&mut self, value: u16) -> Result<(), Error<E>> {
        store_field(&mut self.mux, value, MUX_MAX)
    }

    pub(crate) fn set_pga_mode<E>(&mut self, value: u16) -> Result<(), Error<E>> {
        store_field(&mut self.pga, value, PGA_MAX)
    }

    pub(crate) fn set_conversion_mode<E>(&mut self, value: u16) -> Result<(), Error<E>> {
        store_field(&mut self.conversion_mode, value, MODE_MAX)
    }

    pub(crate) fn set_data_rate<E>(&mut self, value: u16) -> Result<(), Error<E>> {
        store_field(&mut self.data_rate, value, RATE_MAX)
    }

    pub(crate) fn set_comparator_mode<E>(&mut self, value: u16) -> Result<(), Error<E>> {
        store_field(&mut self.comparator_mode, value, COMP_MODE_MAX)
    }

    pub(crate) fn set_comparator_polarity<E>(&mut self, value: u16) -> Result<(), Error<E>> {
        store_field(&mut self.comparator_polarity, value, COMP_POL_MAX)
    }

    pub(crate) fn set_comparator_latch<E>(&mut self, value: u16) -> Result<(), Error<E>> {
        store_field(&mut self.comparator_latch, value, COMP_LAT_MAX)
    }

    pub(crate) fn set_comparator_queue<E>(&mut self, value: u16) -> Result<(), Error<E>> {
        store_field(&mut self.comparator_queue, value, COMP_QUE_MAX)
    }

    /// Reads the raw configuration register from the device.
    pub(crate) fn read_config<D: i2c::I2c>(
        &self,
        i2c: &mut D,
        address: u8,
    ) -> Result<u16, Error<D::Error>> {
        read_register_u16(i2c, address, Register::Config)
    }

    /// Serializes the stored fields and writes them to the configuration
    /// register.
    pub(crate) fn write_config<D: i2c::I2c>(
        &self,
        i2c: &mut D,
        address: u8,
    ) -> Result<(), Error<D::Error>> {
        write_register_u16(i2c, address, Register::Config, self.assembled_config())
    }

    /// Reads the configuration register with the operational-status bit
    /// forced set (idle/ready per the device's encoding).
    pub(crate) fn read_status<D: i2c::I2c>(
        &self,
        i2c: &mut D,
        address: u8,
    ) -> Result<u16, Error<D::Error>> {
        Ok(self.read_config(i2c, address)? | OS_MASK)
    }

    /// Triggers a one-shot conversion: reads the live configuration
    /// register, sets the start bit and writes it back, leaving every other
    /// bit as the device currently holds it (which may differ from the
    /// stored fields if `write_config` was never called).
    pub(crate) fn start_conversion<D: i2c::I2c>(
        &self,
        i2c: &mut D,
        address: u8,
    ) -> Result<(), Error<D::Error>> {
        let cfg = read_register_u16(i2c, address, Register::Config)?;
        write_register_u16(i2c, address, Register::Config, cfg | OS_MASK)
    }

    pub(crate) fn read_lo_threshold<D: i2c::I2c>(
        &self,
        i2c: &mut D,
        address: u8,
    ) -> Result<i16, Error<D::Error>> {
        read_register_i16(i2c, address, Register::LoThresh)
    }

    pub(crate) fn read_hi_threshold<D: i2c::I2c>(
        &self,
        i2c: &mut D,
        address: u8,
    ) -> Result<i16, Error<D::Error>> {
        read_register_i16(i2c, address, Register::HiThresh)
    }

    /// Reads the most recent conversion result in raw ADC counts.
    pub(crate) fn read_conversion<D: i2c::I2c>(
        &self,
        i2c: &mut D,
        address: u8,
    ) -> Result<i16, Error<D::Error>> {
        read_register_i16(i2c, address, Register::Conversion)
    }
}

/// Reads a 16-bit big-endian register.
fn read_register_u16<D: i2c::I2c>(
    i2c: &mut D,
    address: u8,
    reg: Register,
) -> Result<u16, Error<D::Error>> {
    let mut buf = [0u8; 2];
    i2c.write_read(address, &[reg as u8], &mut buf)
        .map_err(Error::Bus)?;
    Ok(BigEndian::read_u16(&buf))
}

/// Reads a 16-bit big-endian register, signed.
fn read_register_i16<D: i2c::I2c>(
    i2c: &mut D,
    address: u8,
    reg: Register,
) -> Result<i16, Error<D::Error>> {
    let mut buf = [0u8; 2];
    i2c.write_read(address, &[reg as u8], &mut buf)
        .map_err(Error::Bus)?;
    Ok(BigEndian::read_i16(&buf))
}

/// Writes a 16-bit big-endian value to a register.
fn write_register_u16<D: i2c::I2c>(
    i2c: &mut D,
    address: u8,
    reg: Register,
    value: u16,
) -> Result<(), Error<D::Error>> {
    let mut frame = [reg as u8, 0, 0];
    BigEndian::write_u16(&mut frame[1..], value);
    i2c.write(address, &frame).map_err(Error::Bus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    type SetResult = Result<(), Error<Infallible>>;

    #[test]
    fn each_field_lands_at_its_documented_offset() {
        let cases: [(fn(&mut Ads1115, u16) -> SetResult, u16, u16); 8] = [
            (Ads1115::set_mux_mode, 7, 12),
            (Ads1115::set_pga_mode, 7, 9),
            (Ads1115::set_conversion_mode, 1, 8),
            (Ads1115::set_data_rate, 7, 5),
            (Ads1115::set_comparator_mode, 1, 4),
            (Ads1115::set_comparator_polarity, 1, 3),
            (Ads1115::set_comparator_latch, 1, 2),
            (Ads1115::set_comparator_queue, 3, 0),
        ];

        for (set, max, shift) in cases {
            for value in 0..=max {
                let mut model = Ads1115::default();
                set(&mut model, value).unwrap();
                assert_eq!(model.assembled_config(), value << shift);
            }
        }
    }

    #[test]
    fn assembled_word_is_the_or_of_shifted_fields() {
        let mut model = Ads1115::default();
        model.set_mux_mode::<Infallible>(3).unwrap();
        model.set_pga_mode::<Infallible>(2).unwrap();
        model.set_conversion_mode::<Infallible>(1).unwrap();
        model.set_data_rate::<Infallible>(6).unwrap();
        model.set_comparator_mode::<Infallible>(1).unwrap();
        model.set_comparator_polarity::<Infallible>(1).unwrap();
        model.set_comparator_latch::<Infallible>(1).unwrap();
        model.set_comparator_queue::<Infallible>(2).unwrap();

        assert_eq!(
            model.assembled_config(),
            3 << 12 | 2 << 9 | 1 << 8 | 6 << 5 | 1 << 4 | 1 << 3 | 1 << 2 | 2
        );
    }

    #[test]
    fn out_of_range_values_are_rejected_and_leave_the_field_unchanged() {
        let cases: [(fn(&mut Ads1115, u16) -> SetResult, u16); 8] = [
            (Ads1115::set_mux_mode, 7),
            (Ads1115::set_pga_mode, 7),
            (Ads1115::set_conversion_mode, 1),
            (Ads1115::set_data_rate, 7),
            (Ads1115::set_comparator_mode, 1),
            (Ads1115::set_comparator_polarity, 1),
            (Ads1115::set_comparator_latch, 1),
            (Ads1115::set_comparator_queue, 3),
        ];

        for (set, max) in cases {
            let mut model = Ads1115::default();
            set(&mut model, max).unwrap();
            let before = model.assembled_config();

            assert_eq!(set(&mut model, max + 1), Err(Error::InvalidFieldValue));
            assert_eq!(model.assembled_config(), before);
        }
    }

    #[test]
    fn single_ended_continuous_low_rate_word() {
        // Single-ended channel 0, +/- 0.256V full scale, continuous at
        // 8 SPS, comparator disabled.
        let mut model = Ads1115::default();
        model.set_mux_mode::<Infallible>(4).unwrap();
        model.set_pga_mode::<Infallible>(5).unwrap();
        model.set_conversion_mode::<Infallible>(0).unwrap();
        model.set_data_rate::<Infallible>(0).unwrap();
        model.set_comparator_mode::<Infallible>(0).unwrap();
        model.set_comparator_polarity::<Infallible>(0).unwrap();
        model.set_comparator_latch::<Infallible>(0).unwrap();
        model.set_comparator_queue::<Infallible>(3).unwrap();

        assert_eq!(model.assembled_config(), 0x4A03);
    }
}
