//! Lockable I2C bus abstraction.
//!
//! The SH1106 may share its bus with other devices, so the driver groups
//! related writes (the whole bring-up sequence, one full framebuffer
//! flush) under an exclusive lock. [`LockableBus`] is the capability the
//! driver needs; [`BusGuard`] acquires it by retrying and releases it on
//! drop, so every exit path (including `?` on a failed write) unlocks.
//!
//! Two adapters over `embedded-hal` I2C peripherals are provided:
//! - [`ExclusiveBus`]: the driver owns the peripheral outright.
//! - [`BusArbiter`] / [`SharedBus`]: one peripheral handed out to several
//!   consumers that cooperate through a shared lock flag (`shared-bus`
//!   feature, on by default).

#[cfg(feature = "shared-bus")]
use core::cell::RefCell;

#[cfg(feature = "shared-bus")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Default bound for [`wait_for_bus`].
pub const PROBE_TIMEOUT_MS: u32 = 1000;

/// A bus with cooperative locking and whole-transaction writes.
pub trait LockableBus {
    /// Error returned by a failed write.
    type Error;

    /// Attempt to take the lock without blocking.
    ///
    /// Returns `true` if the caller now holds the lock.
    fn try_lock(&mut self) -> bool;

    /// Release a lock taken with [`try_lock`](Self::try_lock).
    fn unlock(&mut self);

    /// Write `bytes` to `address` as one bus transaction.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<B: LockableBus + ?Sized> LockableBus for &mut B {
    type Error = B::Error;

    fn try_lock(&mut self) -> bool {
        (**self).try_lock()
    }

    fn unlock(&mut self) {
        (**self).unlock()
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, bytes)
    }
}

/// Scoped bus acquisition.
///
/// [`BusGuard::acquire`] spins on [`LockableBus::try_lock`] until it
/// succeeds; dropping the guard unlocks.
pub struct BusGuard<'a, B: LockableBus> {
    bus: &'a mut B,
}

impl<'a, B: LockableBus> BusGuard<'a, B> {
    /// Block until the bus lock is held.
    pub fn acquire(bus: &'a mut B) -> Self {
        while !bus.try_lock() {
            core::hint::spin_loop();
        }
        Self { bus }
    }

    /// Write one transaction while holding the lock.
    pub fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), B::Error> {
        self.bus.write(address, bytes)
    }
}

impl<B: LockableBus> Drop for BusGuard<'_, B> {
    fn drop(&mut self) {
        self.bus.unlock();
    }
}

/// Wait up to `timeout_ms` for the bus to become available.
///
/// Polls [`LockableBus::try_lock`] once per millisecond. Returns `true` if
/// the lock was obtained (it is released again before returning) and
/// `false` on timeout. Bus readiness at startup is best-effort: callers are
/// expected to carry on either way.
pub fn wait_for_bus<B, D>(bus: &mut B, delay: &mut D, timeout_ms: u32) -> bool
where
    B: LockableBus,
    D: DelayNs,
{
    let mut waited_ms = 0;
    loop {
        if bus.try_lock() {
            bus.unlock();
            return true;
        }
        if waited_ms >= timeout_ms {
            #[cfg(feature = "defmt")]
            defmt::warn!("I2C bus still locked after {} ms, continuing", timeout_ms);
            return false;
        }
        delay.delay_ms(1);
        waited_ms += 1;
    }
}

// ---------------------------------------------------------------------------
// Exclusive ownership
// ---------------------------------------------------------------------------

/// An I2C peripheral owned by a single consumer.
///
/// The lock is a local flag, so [`try_lock`](LockableBus::try_lock) only
/// fails if the same consumer tries to lock twice.
pub struct ExclusiveBus<I2C> {
    i2c: I2C,
    locked: bool,
}

impl<I2C> ExclusiveBus<I2C> {
    /// Wrap an I2C peripheral (takes ownership for exclusive access).
    pub fn new(i2c: I2C) -> Self {
        Self { i2c, locked: false }
    }

    /// Give the peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> LockableBus for ExclusiveBus<I2C> {
    type Error = I2C::Error;

    fn try_lock(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        true
    }

    fn unlock(&mut self) {
        self.locked = false;
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }
}

// ---------------------------------------------------------------------------
// Cooperative sharing
// ---------------------------------------------------------------------------

/// Peripheral plus lock flag, kept together under one mutex.
#[cfg(feature = "shared-bus")]
struct ArbiterState<I2C> {
    i2c: I2C,
    locked: bool,
}

/// Owner of an I2C peripheral shared between several consumers.
///
/// Each consumer gets its own [`SharedBus`] handle from
/// [`handle()`](Self::handle). At most one handle holds the lock at a time.
/// State lives in a critical-section mutex, so the arbiter is `Sync` and can
/// sit in a `static` shared between tasks.
///
/// ```ignore
/// static BUS: StaticCell<BusArbiter<I2c<'static, I2C0, Blocking>>> = StaticCell::new();
///
/// let arbiter = BUS.init(BusArbiter::new(i2c));
/// let mut oled = Sh1106::new(arbiter.handle(), Sh1106Config::default(), &mut delay)?;
/// let mut other = SomeSensor::new(arbiter.handle());
/// ```
#[cfg(feature = "shared-bus")]
pub struct BusArbiter<I2C> {
    state: Mutex<CriticalSectionRawMutex, RefCell<ArbiterState<I2C>>>,
}

#[cfg(feature = "shared-bus")]
impl<I2C> BusArbiter<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            state: Mutex::new(RefCell::new(ArbiterState { i2c, locked: false })),
        }
    }

    /// A new consumer handle.
    pub fn handle(&self) -> SharedBus<'_, I2C> {
        SharedBus {
            arbiter: self,
            held: false,
        }
    }

    /// `true` while any handle holds the lock.
    pub fn is_locked(&self) -> bool {
        self.state.lock(|state| state.borrow().locked)
    }

    pub fn into_inner(self) -> I2C {
        self.state.into_inner().into_inner().i2c
    }

    /// Take the lock if it is free. Test-and-set runs in one critical
    /// section.
    fn acquire(&self) -> bool {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            if state.locked {
                return false;
            }
            state.locked = true;
            true
        })
    }

    fn release(&self) {
        self.state.lock(|state| state.borrow_mut().locked = false);
    }
}

/// One consumer's view of a [`BusArbiter`].
///
/// Dropping a handle that still holds the lock releases it.
#[cfg(feature = "shared-bus")]
pub struct SharedBus<'a, I2C> {
    arbiter: &'a BusArbiter<I2C>,
    held: bool,
}

#[cfg(feature = "shared-bus")]
impl<I2C: I2c> LockableBus for SharedBus<'_, I2C> {
    type Error = I2C::Error;

    fn try_lock(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = self.arbiter.acquire();
        self.held
    }

    fn unlock(&mut self) {
        if self.held {
            self.arbiter.release();
            self.held = false;
        }
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.arbiter
            .state
            .lock(|state| state.borrow_mut().i2c.write(address, bytes))
    }
}

#[cfg(feature = "shared-bus")]
impl<I2C> Drop for SharedBus<'_, I2C> {
    fn drop(&mut self) {
        if self.held {
            self.arbiter.release();
        }
    }
}
