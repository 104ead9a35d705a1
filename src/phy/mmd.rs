//! Indirect MMD register access
//!
//! Clause 45 MMD registers are reached through the Clause 22 pair MMD_CTRL
//! (13) and MMD_DATA (14):
//!
//! 1. MMD_CTRL = device address (function "address")
//! 2. MMD_DATA = register number
//! 3. MMD_CTRL = `0x4000 | device address` (data, no post increment)
//! 4. read or write MMD_DATA
//!
//! Every access therefore costs four bus transactions.

use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::standard::{mmd_ctrl, phy_reg};

/// An MMD device address (5 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mmd(pub u8);

impl Mmd {
    /// Device address masked to its 5-bit field
    pub const fn devad(self) -> u16 {
        self.0 as u16 & mmd_ctrl::DEVAD_MASK
    }

    /// MMD_CTRL word opening a data access without post increment
    const fn data_word(self) -> u16 {
        (mmd_ctrl::FN_DATA_NO_POST_INC << mmd_ctrl::FUNCTION_SHIFT) | self.devad()
    }
}

fn select<M: MdioBus>(mdio: &mut M, phy_addr: u8, mmd: Mmd, reg: u16) -> Result<()> {
    let address_word = (mmd_ctrl::FN_ADDRESS << mmd_ctrl::FUNCTION_SHIFT) | mmd.devad();
    mdio.write(phy_addr, phy_reg::MMD_CTRL, address_word)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd.data_word())
}

/// Read an MMD register
pub fn read<M: MdioBus>(mdio: &mut M, phy_addr: u8, mmd: Mmd, reg: u16) -> Result<u16> {
    select(mdio, phy_addr, mmd, reg)?;
    mdio.read(phy_addr, phy_reg::MMD_DATA)
}

/// Write an MMD register
pub fn write<M: MdioBus>(mdio: &mut M, phy_addr: u8, mmd: Mmd, reg: u16, value: u16) -> Result<()> {
    select(mdio, phy_addr, mmd, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, value)
}
