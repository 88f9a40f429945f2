//! Host-side test doubles: a recording lockable bus, an `embedded-hal` I2C
//! peripheral, a reset pin and a delay that only counts.

extern crate std;

use core::convert::Infallible;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::i2c::{self, ErrorKind, Operation};

use crate::bus::LockableBus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Lock,
    Unlock,
    Write(u8, Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Nack,
}

/// Records every lock, unlock and write in order.
pub struct MockBus {
    pub events: Vec<Event>,
    /// Number of upcoming `try_lock` calls that report the bus as busy.
    pub busy_attempts: usize,
    /// Zero-based index of the write that should fail.
    pub fail_on_write: Option<usize>,
    pub lock_attempts: usize,
    locked: bool,
    writes: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            busy_attempts: 0,
            fail_on_write: None,
            lock_attempts: 0,
            locked: false,
            writes: 0,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Payloads of all successful writes, in order.
    pub fn writes(&self) -> Vec<&[u8]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Write(_, bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl LockableBus for MockBus {
    type Error = MockError;

    fn try_lock(&mut self) -> bool {
        self.lock_attempts += 1;
        if self.busy_attempts > 0 {
            self.busy_attempts -= 1;
            return false;
        }
        if self.locked {
            return false;
        }
        self.locked = true;
        self.events.push(Event::Lock);
        true
    }

    fn unlock(&mut self) {
        self.locked = false;
        self.events.push(Event::Unlock);
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        let index = self.writes;
        self.writes += 1;
        if self.fail_on_write == Some(index) {
            return Err(MockError::Nack);
        }
        self.events.push(Event::Write(address, bytes.to_vec()));
        Ok(())
    }
}

/// Minimal `embedded-hal` I2C peripheral that records writes.
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self { writes: Vec::new() }
    }
}

impl i2c::ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}

/// Reset line that records every level it is driven to.
pub struct MockPin {
    pub levels: Vec<bool>,
}

impl MockPin {
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }
}

impl PinErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

/// Reset line whose driver always reports a fault.
pub struct BrokenPin;

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl PinErrorType for BrokenPin {
    type Error = PinFault;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

/// Delay that accumulates requested time instead of sleeping.
pub struct MockDelay {
    elapsed_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { elapsed_ns: 0 }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}
