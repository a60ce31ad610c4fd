//! Alarm register access.
//!
//! Alarm 1 matches with second granularity, alarm 2 with minute granularity.
//! Every field a variant leaves unspecified is written with the wildcard
//! byte `0x80` so the chip ignores it when matching. Weekday variants set
//! the day/date mode bit (`0x40`) in the last alarm register; date variants
//! leave it clear.

use crate::bcd::encode_bcd;
use crate::{BitFlags, Ds1337, Error, Register};

const WILDCARD: u8 = 0x80;

/// Alarm 1 match condition (second granularity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm1 {
    /// Match once per second.
    EverySecond,
    /// Match at the given second of every minute.
    AtSecond(u8),
    /// Match at the given minute and second of every hour.
    AtMinute { minute: u8, second: u8 },
    /// Match at the given time once per day.
    AtHour { hour: u8, minute: u8, second: u8 },
    /// Match at the given day of the week (1-7) and time once per week.
    AtWeekday {
        weekday: u8,
        hour: u8,
        minute: u8,
        second: u8,
    },
    /// Match at the given day of the month (1-31) and time once per month.
    AtDate {
        date: u8,
        hour: u8,
        minute: u8,
        second: u8,
    },
}

/// Alarm 2 match condition (minute granularity, always at 0 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm2 {
    /// Match once per minute.
    EveryMinute,
    /// Match at the given minute of every hour.
    AtMinute(u8),
    /// Match at the given hour and minute once per day.
    AtHour { hour: u8, minute: u8 },
    /// Match at the given day of the week (1-7), hour and minute once per week.
    AtWeekday { weekday: u8, hour: u8, minute: u8 },
    /// Match at the given day of the month (1-31), hour and minute once per month.
    AtDate { date: u8, hour: u8, minute: u8 },
}

impl<I2C, E> Ds1337<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Configure alarm 1.
    ///
    /// Writes the four alarm-1 registers in one transaction. Returns
    /// `Error::InvalidInputData` if any field is out of range.
    pub fn set_alarm1(&mut self, alarm: Alarm1) -> Result<(), Error<E>> {
        let [a, b, c, d] = match alarm {
            Alarm1::EverySecond => [WILDCARD; 4],
            Alarm1::AtSecond(second) => {
                if second > 59 {
                    return Err(Error::InvalidInputData);
                }
                [encode_bcd(second), WILDCARD, WILDCARD, WILDCARD]
            }
            Alarm1::AtMinute { minute, second } => {
                if minute > 59 || second > 59 {
                    return Err(Error::InvalidInputData);
                }
                [encode_bcd(second), encode_bcd(minute), WILDCARD, WILDCARD]
            }
            Alarm1::AtHour {
                hour,
                minute,
                second,
            } => {
                if hour > 23 || minute > 59 || second > 59 {
                    return Err(Error::InvalidInputData);
                }
                [
                    encode_bcd(second),
                    encode_bcd(minute),
                    encode_bcd(hour),
                    WILDCARD,
                ]
            }
            Alarm1::AtWeekday {
                weekday,
                hour,
                minute,
                second,
            } => {
                if !(1..=7).contains(&weekday) || hour > 23 || minute > 59 || second > 59 {
                    return Err(Error::InvalidInputData);
                }
                [
                    encode_bcd(second),
                    encode_bcd(minute),
                    encode_bcd(hour),
                    BitFlags::WEEKDAY | encode_bcd(weekday),
                ]
            }
            Alarm1::AtDate {
                date,
                hour,
                minute,
                second,
            } => {
                if !(1..=31).contains(&date) || hour > 23 || minute > 59 || second > 59 {
                    return Err(Error::InvalidInputData);
                }
                [
                    encode_bcd(second),
                    encode_bcd(minute),
                    encode_bcd(hour),
                    encode_bcd(date),
                ]
            }
        };
        self.write_payload(&[Register::ALARM1_SECONDS, a, b, c, d])
    }

    /// Configure alarm 2.
    ///
    /// Writes the three alarm-2 registers in one transaction. Returns
    /// `Error::InvalidInputData` if any field is out of range.
    pub fn set_alarm2(&mut self, alarm: Alarm2) -> Result<(), Error<E>> {
        let [a, b, c] = match alarm {
            Alarm2::EveryMinute => [WILDCARD; 3],
            Alarm2::AtMinute(minute) => {
                if minute > 59 {
                    return Err(Error::InvalidInputData);
                }
                [encode_bcd(minute), WILDCARD, WILDCARD]
            }
            Alarm2::AtHour { hour, minute } => {
                if hour > 23 || minute > 59 {
                    return Err(Error::InvalidInputData);
                }
                [encode_bcd(minute), encode_bcd(hour), WILDCARD]
            }
            Alarm2::AtWeekday {
                weekday,
                hour,
                minute,
            } => {
                if !(1..=7).contains(&weekday) || hour > 23 || minute > 59 {
                    return Err(Error::InvalidInputData);
                }
                [
                    encode_bcd(minute),
                    encode_bcd(hour),
                    BitFlags::WEEKDAY | encode_bcd(weekday),
                ]
            }
            Alarm2::AtDate { date, hour, minute } => {
                if !(1..=31).contains(&date) || hour > 23 || minute > 59 {
                    return Err(Error::InvalidInputData);
                }
                [encode_bcd(minute), encode_bcd(hour), encode_bcd(date)]
            }
        };
        self.write_payload(&[Register::ALARM2_MINUTES, a, b, c])
    }
}
