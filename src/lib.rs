//! Platform-agnostic Rust driver for the DS1337 I2C real-time clock (RTC).
//!
//! The driver owns the I2C bus instance handed to [`Ds1337::new`] and talks
//! to the chip at its fixed 7-bit address, 0x68. All operations are
//! synchronous and blocking; each one performs one or two bus transactions
//! and returns only after completion or failure.

#![deny(unsafe_code)]
#![no_std]

pub use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

mod alarms;
mod bcd;
mod configuration;
mod datetime;
mod status;

pub use crate::alarms::{Alarm1, Alarm2};
pub use crate::bcd::{decode_bcd, encode_bcd};
pub use crate::datetime::Time;

/// All possible errors in this crate
#[derive(Debug)]
pub enum Error<E> {
    /// A write transaction on the I²C bus failed.
    Write(E),
    /// A read transaction on the I²C bus failed or returned fewer bytes
    /// than requested.
    Read(E),
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// It was not possible to read a valid date and/or time.
    /// The device is probably missing initialization.
    InvalidDeviceState,
}

/// Square-wave output frequency (RS2/RS1 bits of the control register)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqWFreq {
    /// 1 Hz (default)
    _1Hz,
    /// 4.096 kHz
    _4_096Hz,
    /// 8.192 kHz
    _8_192Hz,
    /// 32.768 kHz
    _32_768Hz,
}

struct Register;

impl Register {
    const SECONDS: u8 = 0x00;
    const MINUTES: u8 = 0x01;
    const HOURS: u8 = 0x02;
    const DOW: u8 = 0x03;
    const DOM: u8 = 0x04;
    const MONTH: u8 = 0x05;
    const YEAR: u8 = 0x06;
    const ALARM1_SECONDS: u8 = 0x07;
    const ALARM2_MINUTES: u8 = 0x0B;
    const CONTROL: u8 = 0x0E;
    const STATUS: u8 = 0x0F;
}

struct BitFlags;

impl BitFlags {
    const H24_H12: u8 = 0b0100_0000;
    const AM_PM: u8 = 0b0010_0000;
    const CENTURY: u8 = 0b1000_0000;
    const WEEKDAY: u8 = 0b0100_0000;
    const EOSC: u8 = 0b1000_0000;
    const RS2: u8 = 0b0000_1000;
    const RS1: u8 = 0b0000_0100;
    const ALARM2_INT_EN: u8 = 0b0000_0010;
    const ALARM1_INT_EN: u8 = 0b0000_0001;
    const OSC_STOP: u8 = 0b1000_0000;
    const ALARM2F: u8 = 0b0000_0010;
    const ALARM1F: u8 = 0b0000_0001;
}

const DEVICE_ADDRESS: u8 = 0b110_1000;

/// DS1337 RTC driver
#[derive(Debug, Default)]
pub struct Ds1337<I2C> {
    i2c: I2C,
}

impl<I2C, E> Ds1337<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Create a new instance of the DS1337 device.
    pub fn new(i2c: I2C) -> Self {
        Ds1337 { i2c }
    }

    /// Destroy driver instance, return the I²C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub(crate) fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error<E>> {
        self.write_payload(&[register, data])
    }

    pub(crate) fn write_payload(&mut self, payload: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(DEVICE_ADDRESS, payload).map_err(Error::Write)
    }

    pub(crate) fn read_register(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut data = [0];
        self.read_payload(register, &mut data)?;
        Ok(data[0])
    }

    /// Set the register pointer, then read `payload.len()` bytes sequentially.
    pub(crate) fn read_payload(&mut self, register: u8, payload: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write(DEVICE_ADDRESS, &[register])
            .map_err(Error::Write)?;
        self.i2c.read(DEVICE_ADDRESS, payload).map_err(Error::Read)
    }
}
