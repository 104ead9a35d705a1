//! Negotiated link parameter resolution
//!
//! Picks the highest speed the link partner advertises, with 1000BASE-T
//! taking priority over 100BASE-TX over 10BASE-T. Gigabit duplex is full
//! only when both ends advertise 1000BASE-T full duplex; for 10/100 the
//! partner's full-duplex bit at the chosen speed decides.

use crate::driver::config::{Duplex, Speed};
use crate::driver::state::PhyAddress;
use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::standard::{anlpar, gbsr, phy_reg};
use crate::phy::generic::LinkStatus;

/// Resolve speed and duplex from raw register values
///
/// - `partner_1000`: 1000BASE-T status (GBSR, reg 10)
/// - `local_advertised_1000`: 1000BASE-T control (GBCR, reg 9)
/// - `partner_10_100`: link partner ability (ANLPAR, reg 5)
pub const fn resolve(partner_1000: u16, local_advertised_1000: u16, partner_10_100: u16) -> LinkStatus {
    // GBCR bits 9:8 line up with GBSR bits 11:10 after the shift
    let common_1000 = partner_1000 & (local_advertised_1000 << gbsr::ADV_TO_LP_SHIFT);

    let (speed, full) = if partner_1000 & gbsr::LP_1000 != 0 {
        (Speed::Mbps1000, common_1000 & gbsr::LP_1000_FULL != 0)
    } else if partner_10_100 & anlpar::CAN_100 != 0 {
        (Speed::Mbps100, partner_10_100 & anlpar::CAN_100_FD != 0)
    } else {
        (Speed::Mbps10, partner_10_100 & anlpar::CAN_10_FD != 0)
    };

    let duplex = if full { Duplex::Full } else { Duplex::Half };
    LinkStatus::new(speed, duplex)
}

/// Read GBSR, GBCR and ANLPAR and resolve them
pub fn read_capability<M: MdioBus>(mdio: &mut M, address: PhyAddress) -> Result<LinkStatus> {
    let phy_addr = address.get();
    let partner_1000 = mdio.read(phy_addr, phy_reg::GBSR)?;
    let local_1000 = mdio.read(phy_addr, phy_reg::GBCR)?;
    let partner_10_100 = mdio.read(phy_addr, phy_reg::ANLPAR)?;

    Ok(resolve(partner_1000, local_1000, partner_10_100))
}
