use ds1337::{DateTimeAccess, Error, NaiveDate, Time};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::Transaction as I2cTrans;

mod common;
use crate::common::{destroy, new_ds1337, DEVICE_ADDRESS};

#[test]
fn reads_time_in_24_hour_mode() {
    let mut dev = new_ds1337(&[
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]),
        I2cTrans::read(
            DEVICE_ADDRESS,
            vec![0x45, 0x03, 0x09, 0x01, 0x07, 0x05, 0x23],
        ),
    ]);
    let time = dev.read_time().unwrap();
    assert_eq!(time, Time::new(23, 5, 7, 9, 3, 45));
    destroy(dev);
}

#[test]
fn reads_century_from_month_register() {
    // month register 0x85: century bit set, May
    let mut dev = new_ds1337(&[
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]),
        I2cTrans::read(
            DEVICE_ADDRESS,
            vec![0x00, 0x00, 0x00, 0x01, 0x01, 0x85, 0x05],
        ),
    ]);
    let time = dev.read_time().unwrap();
    assert_eq!(time.year, 105);
    assert_eq!(time.month, 5);
    destroy(dev);
}

#[test]
fn keeps_legacy_12_hour_decode() {
    // 0x61 = 12-hour mode, PM, BCD hour 1. The decode ignores the BCD
    // digits entirely and only counts the ten-hour and AM/PM bits.
    let mut dev = new_ds1337(&[
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]),
        I2cTrans::read(
            DEVICE_ADDRESS,
            vec![0x00, 0x00, 0x61, 0x01, 0x01, 0x01, 0x00],
        ),
    ]);
    assert_eq!(dev.read_time().unwrap().hour, 12);
    destroy(dev);

    // 0x49 = 12-hour mode, AM, BCD hour 9 decodes to 0
    let mut dev = new_ds1337(&[
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]),
        I2cTrans::read(
            DEVICE_ADDRESS,
            vec![0x00, 0x00, 0x49, 0x01, 0x01, 0x01, 0x00],
        ),
    ]);
    assert_eq!(dev.read_time().unwrap().hour, 0);
    destroy(dev);
}

#[test]
fn writes_time_in_24_hour_form() {
    let mut dev = new_ds1337(&[I2cTrans::write(
        DEVICE_ADDRESS,
        vec![0x00, 0x45, 0x03, 0x09, 0x01, 0x07, 0x05, 0x23],
    )]);
    dev.write_time(&Time::new(23, 5, 7, 9, 3, 45)).unwrap();
    destroy(dev);
}

#[test]
fn sets_century_bit_for_years_past_2100() {
    let mut dev = new_ds1337(&[I2cTrans::write(
        DEVICE_ADDRESS,
        vec![0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x81, 0x05],
    )]);
    dev.write_time(&Time::new(105, 1, 1, 0, 0, 0)).unwrap();
    destroy(dev);
}

#[test]
fn round_trips_written_time() {
    let wire = [0x59, 0x59, 0x23, 0x01, 0x31, 0x92, 0x50];
    let mut payload = vec![0x00];
    payload.extend_from_slice(&wire);
    let mut dev = new_ds1337(&[
        I2cTrans::write(DEVICE_ADDRESS, payload),
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]),
        I2cTrans::read(DEVICE_ADDRESS, wire.to_vec()),
    ]);
    let time = Time::new(150, 12, 31, 23, 59, 59);
    dev.write_time(&time).unwrap();
    assert_eq!(dev.read_time().unwrap(), time);
    destroy(dev);
}

#[test]
fn rejects_out_of_range_fields() {
    let mut dev = new_ds1337(&[]);
    for time in [
        Time::new(200, 1, 1, 0, 0, 0),
        Time::new(0, 0, 1, 0, 0, 0),
        Time::new(0, 13, 1, 0, 0, 0),
        Time::new(0, 1, 0, 0, 0, 0),
        Time::new(0, 1, 32, 0, 0, 0),
        Time::new(0, 1, 1, 24, 0, 0),
        Time::new(0, 1, 1, 0, 60, 0),
        Time::new(0, 1, 1, 0, 0, 60),
    ] {
        assert!(matches!(
            dev.write_time(&time),
            Err(Error::InvalidInputData)
        ));
    }
    destroy(dev);
}

#[test]
fn surfaces_pointer_set_failure_as_write_error() {
    let mut dev = new_ds1337(&[
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]).with_error(ErrorKind::Other)
    ]);
    assert!(matches!(dev.read_time(), Err(Error::Write(_))));
    destroy(dev);
}

#[test]
fn surfaces_short_read_as_read_error() {
    let mut dev = new_ds1337(&[
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]),
        I2cTrans::read(DEVICE_ADDRESS, vec![0; 7]).with_error(ErrorKind::Other),
    ]);
    assert!(matches!(dev.read_time(), Err(Error::Read(_))));
    destroy(dev);
}

#[test]
fn exposes_datetime_access() {
    let mut dev = new_ds1337(&[
        I2cTrans::write(
            DEVICE_ADDRESS,
            vec![0x00, 0x45, 0x03, 0x09, 0x01, 0x07, 0x05, 0x23],
        ),
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]),
        I2cTrans::read(
            DEVICE_ADDRESS,
            vec![0x45, 0x03, 0x09, 0x01, 0x07, 0x05, 0x23],
        ),
    ]);
    let datetime = NaiveDate::from_ymd_opt(2023, 5, 7)
        .unwrap()
        .and_hms_opt(9, 3, 45)
        .unwrap();
    dev.set_datetime(&datetime).unwrap();
    assert_eq!(dev.datetime().unwrap(), datetime);
    destroy(dev);
}

#[test]
fn rejects_datetime_outside_chip_range() {
    let mut dev = new_ds1337(&[]);
    let too_early = NaiveDate::from_ymd_opt(1999, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    assert!(matches!(
        dev.set_datetime(&too_early),
        Err(Error::InvalidInputData)
    ));
    destroy(dev);
}

#[test]
fn reports_invalid_device_state_for_unreadable_calendar() {
    // Feb 31 decodes fine as a raw Time but is not a real date.
    let mut dev = new_ds1337(&[
        I2cTrans::write(DEVICE_ADDRESS, vec![0x00]),
        I2cTrans::read(
            DEVICE_ADDRESS,
            vec![0x00, 0x00, 0x00, 0x01, 0x31, 0x02, 0x23],
        ),
    ]);
    assert!(matches!(dev.datetime(), Err(Error::InvalidDeviceState)));
    destroy(dev);
}
