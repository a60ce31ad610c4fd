//! Control register access.

use crate::{BitFlags, Ds1337, Error, Register, SqWFreq};

impl<I2C, E> Ds1337<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Read the control register.
    pub fn control(&mut self) -> Result<u8, Error<E>> {
        self.read_register(Register::CONTROL)
    }

    /// Write the control register.
    pub fn set_control(&mut self, control: u8) -> Result<(), Error<E>> {
        self.write_register(Register::CONTROL, control)
    }

    /// Set the bits in `mask` high, leaving the rest of the register
    /// unchanged.
    ///
    /// Performs a read-modify-write; a failed read leaves the register
    /// unmodified.
    pub fn set_control_bits(&mut self, mask: u8) -> Result<(), Error<E>> {
        let control = self.control()?;
        self.set_control(control | mask)
    }

    /// Clear the bits in `mask` by overwriting the control register with
    /// `!mask`.
    ///
    /// Warning: unlike [`set_control_bits`](Self::set_control_bits) this is
    /// not a read-modify-write. Every bit outside `mask` is set high, so any
    /// prior register state is discarded. This legacy behavior is kept for
    /// compatibility. To clear bits while keeping the rest of the register,
    /// read [`control`](Self::control) and write the masked value back with
    /// [`set_control`](Self::set_control), or use the typed helpers such as
    /// [`disable_alarm1_interrupts`](Self::disable_alarm1_interrupts).
    pub fn clear_control_bits(&mut self, mask: u8) -> Result<(), Error<E>> {
        self.set_control(!mask)
    }

    /// Enable the oscillator (set the clock running) (default).
    pub fn enable(&mut self) -> Result<(), Error<E>> {
        let control = self.control()?;
        self.set_control(control & !BitFlags::EOSC)
    }

    /// Disable the oscillator (stops the clock).
    pub fn disable(&mut self) -> Result<(), Error<E>> {
        let control = self.control()?;
        self.set_control(control | BitFlags::EOSC)
    }

    /// Set the square-wave output frequency.
    pub fn set_square_wave_frequency(&mut self, freq: SqWFreq) -> Result<(), Error<E>> {
        let control = self.control()?;
        let new_control = match freq {
            SqWFreq::_1Hz => control & !BitFlags::RS2 & !BitFlags::RS1,
            SqWFreq::_4_096Hz => (control & !BitFlags::RS2) | BitFlags::RS1,
            SqWFreq::_8_192Hz => (control | BitFlags::RS2) & !BitFlags::RS1,
            SqWFreq::_32_768Hz => control | BitFlags::RS2 | BitFlags::RS1,
        };
        self.set_control(new_control)
    }

    /// Enable Alarm1 interrupts.
    pub fn enable_alarm1_interrupts(&mut self) -> Result<(), Error<E>> {
        self.set_control_bits(BitFlags::ALARM1_INT_EN)
    }

    /// Disable Alarm1 interrupts.
    pub fn disable_alarm1_interrupts(&mut self) -> Result<(), Error<E>> {
        let control = self.control()?;
        self.set_control(control & !BitFlags::ALARM1_INT_EN)
    }

    /// Enable Alarm2 interrupts.
    pub fn enable_alarm2_interrupts(&mut self) -> Result<(), Error<E>> {
        self.set_control_bits(BitFlags::ALARM2_INT_EN)
    }

    /// Disable Alarm2 interrupts.
    pub fn disable_alarm2_interrupts(&mut self) -> Result<(), Error<E>> {
        let control = self.control()?;
        self.set_control(control & !BitFlags::ALARM2_INT_EN)
    }
}
