use ds1337::Ds1337;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEVICE_ADDRESS: u8 = 0x68;

pub fn new_ds1337(transactions: &[I2cTrans]) -> Ds1337<I2cMock> {
    Ds1337::new(I2cMock::new(transactions))
}

pub fn destroy(device: Ds1337<I2cMock>) {
    device.destroy().done();
}
