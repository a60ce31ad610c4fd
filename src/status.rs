//! Status register access.

use crate::{BitFlags, Ds1337, Error, Register};

impl<I2C, E> Ds1337<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Read the status register.
    pub fn status(&mut self) -> Result<u8, Error<E>> {
        self.read_register(Register::STATUS)
    }

    /// Write the status register.
    pub fn set_status(&mut self, status: u8) -> Result<(), Error<E>> {
        self.write_register(Register::STATUS, status)
    }

    /// Clear the whole status register.
    pub fn clear_status(&mut self) -> Result<(), Error<E>> {
        self.set_status(0)
    }

    /// Clear the bits in `mask`, leaving the rest of the register unchanged.
    ///
    /// Performs a read-modify-write with AND-complement arithmetic; a failed
    /// read leaves the register unmodified. This is what makes the alarm
    /// flags de-assert reliably.
    pub fn clear_status_bits(&mut self, mask: u8) -> Result<(), Error<E>> {
        let status = self.status()?;
        self.set_status(status & !mask)
    }

    /// Whether alarm 1 has matched the current time.
    ///
    /// The flag stays asserted until cleared with
    /// [`clear_alarm1_matched_flag`](Self::clear_alarm1_matched_flag).
    pub fn has_alarm1_matched(&mut self) -> Result<bool, Error<E>> {
        Ok(self.status()? & BitFlags::ALARM1F != 0)
    }

    /// Clear the alarm 1 matched flag.
    pub fn clear_alarm1_matched_flag(&mut self) -> Result<(), Error<E>> {
        self.clear_status_bits(BitFlags::ALARM1F)
    }

    /// Whether alarm 2 has matched the current time.
    ///
    /// The flag stays asserted until cleared with
    /// [`clear_alarm2_matched_flag`](Self::clear_alarm2_matched_flag).
    pub fn has_alarm2_matched(&mut self) -> Result<bool, Error<E>> {
        Ok(self.status()? & BitFlags::ALARM2F != 0)
    }

    /// Clear the alarm 2 matched flag.
    pub fn clear_alarm2_matched_flag(&mut self) -> Result<(), Error<E>> {
        self.clear_status_bits(BitFlags::ALARM2F)
    }

    /// Whether the oscillator is stopped or has stopped at some point.
    pub fn has_been_stopped(&mut self) -> Result<bool, Error<E>> {
        Ok(self.status()? & BitFlags::OSC_STOP != 0)
    }

    /// Clear the has-been-stopped flag.
    pub fn clear_has_been_stopped_flag(&mut self) -> Result<(), Error<E>> {
        self.clear_status_bits(BitFlags::OSC_STOP)
    }
}
