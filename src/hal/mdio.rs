//! MDIO (Management Data Input/Output) HAL
//!
//! Register-level access to PHY registers through the DesignWare GMAC GMII
//! address/data register pair. A transaction packs the PHY address, register
//! number and CSR clock range into the GMII address register with the busy
//! bit set, then spins until the MAC clears busy.
//!
//! The register pair is reached through [`MiiRegisters`], so the protocol in
//! [`GmacMdio`] runs unchanged against real MMIO ([`MmioMiiRegisters`]) or a
//! test double.

use embedded_hal::delay::DelayNs;

use crate::error::{ConfigError, Result};
use crate::hal::wait::{WaitBudget, wait_until};
use crate::internal::constants::{MDIO_READ_BUSY_POLLS, MDIO_WRITE_BUSY_POLLS};
use crate::internal::register::{
    GMACMIIADDR_CR_MASK, GMACMIIADDR_CR_SHIFT, GMACMIIADDR_GB, GMACMIIADDR_GR_MASK,
    GMACMIIADDR_GR_SHIFT, GMACMIIADDR_GW, GMACMIIADDR_PA_MASK, GMACMIIADDR_PA_SHIFT,
    GMACMIIDATA_GD_MASK, GmiiRegs,
};

pub use crate::internal::phy_regs::standard::{
    anar, anlpar, bmcr, bmsr, gbcr, gbsr, mmd_ctrl, phy_reg,
};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// CSR clock range field values of the GMII address register
///
/// The MDC clock must not exceed 2.5 MHz per IEEE 802.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MdcClockDivider {
    /// Clock/42 (60-100 MHz CSR clock)
    Div42 = 0,
    /// Clock/62 (100-150 MHz CSR clock)
    Div62 = 1,
    /// Clock/16 (20-35 MHz CSR clock)
    Div16 = 2,
    /// Clock/26 (35-60 MHz CSR clock)
    Div26 = 3,
    /// Clock/102 (150-250 MHz CSR clock)
    #[default]
    Div102 = 4,
    /// Clock/124 (250-300 MHz CSR clock)
    Div124 = 5,
}

impl MdcClockDivider {
    /// Get the appropriate divider for a given CSR clock frequency
    pub const fn from_csr_clock_hz(csr_clk_hz: u32) -> Self {
        if csr_clk_hz < 35_000_000 {
            Self::Div16
        } else if csr_clk_hz < 60_000_000 {
            Self::Div26
        } else if csr_clk_hz < 100_000_000 {
            Self::Div42
        } else if csr_clk_hz < 150_000_000 {
            Self::Div62
        } else if csr_clk_hz < 250_000_000 {
            Self::Div102
        } else {
            Self::Div124
        }
    }

    /// Get the divider value for register programming
    pub const fn to_reg_value(self) -> u32 {
        self as u32
    }
}

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Every PHY-level component talks to the transceiver through this trait.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Check if the MDIO bus is busy
    fn is_busy(&self) -> bool;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }

    fn is_busy(&self) -> bool {
        (**self).is_busy()
    }
}

// =============================================================================
// GMII Register Pair
// =============================================================================

/// The GMII address and data registers of one GMAC
pub trait MiiRegisters {
    /// Read the GMII address register
    fn read_address(&self) -> u32;

    /// Write the GMII address register
    fn write_address(&self, value: u32);

    /// Read the GMII data register
    fn read_data(&self) -> u32;

    /// Write the GMII data register
    fn write_data(&self, value: u32);
}

/// Memory-mapped GMII register pair at a caller-supplied MAC base address
#[derive(Debug, Clone, Copy)]
pub struct MmioMiiRegisters {
    regs: GmiiRegs,
}

impl MmioMiiRegisters {
    /// Access the GMII registers of the GMAC mapped at `base`
    ///
    /// # Safety
    /// `base` must point at a DesignWare GMAC register block that stays
    /// mapped for as long as this value is used, and no other code may
    /// drive its GMII registers concurrently.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            // SAFETY: forwarded from the caller
            regs: unsafe { GmiiRegs::new(base) },
        }
    }

    /// MAC base address
    pub const fn base(&self) -> usize {
        self.regs.base()
    }
}

impl MiiRegisters for MmioMiiRegisters {
    fn read_address(&self) -> u32 {
        self.regs.mii_address()
    }

    fn write_address(&self, value: u32) {
        self.regs.set_mii_address(value);
    }

    fn read_data(&self) -> u32 {
        self.regs.mii_data()
    }

    fn write_data(&self, value: u32) {
        self.regs.set_mii_data(value);
    }
}

// =============================================================================
// GMAC MDIO Controller
// =============================================================================

/// MDIO controller driving the GMAC's GMII register pair
///
/// Busy polling spins with a memory fence between checks. Reads may poll
/// up to 10,000 times and writes up to 1,000 times by default.
#[derive(Debug)]
pub struct GmacMdio<R: MiiRegisters, D: DelayNs> {
    regs: R,
    delay: D,
    clock_divider: MdcClockDivider,
    read_budget: WaitBudget,
    write_budget: WaitBudget,
}

/// Hardware MDIO controller
pub type MmioGmacMdio<D> = GmacMdio<MmioMiiRegisters, D>;

impl<R: MiiRegisters, D: DelayNs> GmacMdio<R, D> {
    /// Create a controller with the default clock range and busy bounds
    pub fn new(regs: R, delay: D) -> Self {
        Self {
            regs,
            delay,
            clock_divider: MdcClockDivider::default(),
            read_budget: WaitBudget::spin(MDIO_READ_BUSY_POLLS),
            write_budget: WaitBudget::spin(MDIO_WRITE_BUSY_POLLS),
        }
    }

    /// Create a controller with a custom clock divider
    pub fn with_clock_divider(regs: R, delay: D, divider: MdcClockDivider) -> Self {
        let mut mdio = Self::new(regs, delay);
        mdio.clock_divider = divider;
        mdio
    }

    /// Set the clock divider based on CSR clock frequency
    pub fn configure_for_csr_clock(&mut self, csr_clk_hz: u32) {
        self.clock_divider = MdcClockDivider::from_csr_clock_hz(csr_clk_hz);
    }

    /// Replace the busy-wait budgets for reads and writes
    pub fn set_busy_budgets(&mut self, read: WaitBudget, write: WaitBudget) {
        self.read_budget = read;
        self.write_budget = write;
    }

    /// Current clock divider
    pub fn clock_divider(&self) -> MdcClockDivider {
        self.clock_divider
    }

    /// Borrow the register pair
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Give back the register pair and delay provider
    pub fn release(self) -> (R, D) {
        (self.regs, self.delay)
    }

    fn check_addresses(phy_addr: u8, reg_addr: u8) -> Result<()> {
        if phy_addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress.into());
        }
        if reg_addr > MAX_REG_ADDR {
            return Err(ConfigError::InvalidRegister.into());
        }
        Ok(())
    }

    fn wait_not_busy(&mut self, budget: WaitBudget) -> Result<()> {
        let regs = &self.regs;
        wait_until(&mut self.delay, budget, || {
            Ok(regs.read_address() & GMACMIIADDR_GB == 0)
        })?;
        Ok(())
    }
}

/// Build the GMII address register value for one transaction
///
/// Out-of-range inputs are masked to their 5-bit fields.
pub const fn build_mii_addr(
    phy_addr: u8,
    reg_addr: u8,
    divider: MdcClockDivider,
    is_write: bool,
) -> u32 {
    // PHY address (bits 15:11)
    let mut addr = ((phy_addr as u32) << GMACMIIADDR_PA_SHIFT) & GMACMIIADDR_PA_MASK;

    // Register address (bits 10:6)
    addr |= ((reg_addr as u32) << GMACMIIADDR_GR_SHIFT) & GMACMIIADDR_GR_MASK;

    // Clock range (bits 5:2)
    addr |= (divider.to_reg_value() << GMACMIIADDR_CR_SHIFT) & GMACMIIADDR_CR_MASK;

    // Write flag (bit 1)
    if is_write {
        addr |= GMACMIIADDR_GW;
    }

    // Busy flag (bit 0) starts the transaction
    addr | GMACMIIADDR_GB
}

impl<R: MiiRegisters, D: DelayNs> MdioBus for GmacMdio<R, D> {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        Self::check_addresses(phy_addr, reg_addr)?;

        let addr = build_mii_addr(phy_addr, reg_addr, self.clock_divider, false);
        self.regs.write_address(addr);

        self.wait_not_busy(self.read_budget)?;

        Ok((self.regs.read_data() & GMACMIIDATA_GD_MASK) as u16)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        Self::check_addresses(phy_addr, reg_addr)?;

        // Data must be in place before the command word starts the cycle
        self.regs.write_data(u32::from(value));

        let addr = build_mii_addr(phy_addr, reg_addr, self.clock_divider, true);
        self.regs.write_address(addr);

        self.wait_not_busy(self.write_budget)
    }

    fn is_busy(&self) -> bool {
        (self.regs.read_address() & GMACMIIADDR_GB) != 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
