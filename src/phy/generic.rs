//! Generic PHY Types and Helpers
//!
//! Link parameters, identifiers and capability sets common to every
//! transceiver, plus helpers built only on the IEEE 802.3 Clause 22
//! registers.

use crate::driver::config::{Duplex, Speed};
use crate::error::Result;
use crate::hal::mdio::MdioBus;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// Contains the negotiated or configured link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 1000 Mbps Full Duplex
    pub const fn gigabit_full() -> Self {
        Self::new(Speed::Mbps1000, Duplex::Full)
    }

    /// 1000 Mbps Half Duplex
    pub const fn gigabit_half() -> Self {
        Self::new(Speed::Mbps1000, Duplex::Half)
    }

    /// 100 Mbps Full Duplex
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }

    /// 100 Mbps Half Duplex
    pub const fn fast_half() -> Self {
        Self::new(Speed::Mbps100, Duplex::Half)
    }

    /// 10 Mbps Full Duplex
    pub const fn slow_full() -> Self {
        Self::new(Speed::Mbps10, Duplex::Full)
    }

    /// 10 Mbps Half Duplex
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

impl core::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.speed, self.duplex)
    }
}

// =============================================================================
// PHY Identifier
// =============================================================================

/// Contents of the PHYIDR1/PHYIDR2 register pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyId {
    /// PHYIDR1
    pub id1: u16,
    /// PHYIDR2
    pub id2: u16,
}

impl PhyId {
    /// Wrap a raw identifier pair
    pub const fn new(id1: u16, id2: u16) -> Self {
        Self { id1, id2 }
    }

    /// `(PHYIDR1 << 16) | PHYIDR2`
    pub const fn raw(&self) -> u32 {
        ((self.id1 as u32) << 16) | self.id2 as u32
    }

    /// Organizationally unique identifier bits 3-24
    pub const fn oui(&self) -> u32 {
        ((self.id1 as u32) << 6) | ((self.id2 as u32) >> 10)
    }

    /// Manufacturer model number (6 bits)
    pub const fn model(&self) -> u8 {
        ((self.id2 >> 4) & 0x3F) as u8
    }

    /// Revision number (4 bits)
    pub const fn revision(&self) -> u8 {
        (self.id2 & 0x0F) as u8
    }
}

impl core::fmt::Display for PhyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:04X}:{:04X} (OUI {:06X}, model {:02X}, rev {})",
            self.id1,
            self.id2,
            self.oui(),
            self.model(),
            self.revision()
        )
    }
}

// =============================================================================
// PHY Capabilities
// =============================================================================

/// PHY hardware capabilities
///
/// Indicates what features the PHY chip supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyCapabilities {
    /// Supports 100BASE-TX Full Duplex
    pub speed_100_fd: bool,
    /// Supports 100BASE-TX Half Duplex
    pub speed_100_hd: bool,
    /// Supports 10BASE-T Full Duplex
    pub speed_10_fd: bool,
    /// Supports 10BASE-T Half Duplex
    pub speed_10_hd: bool,
    /// Has the extended status register (1000BASE-T abilities)
    pub extended_status: bool,
    /// Supports auto-negotiation
    pub auto_negotiation: bool,
    /// Supports PAUSE flow control
    pub pause: bool,
}

// =============================================================================
// Standard Register Helpers
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use embedded_hal::delay::DelayNs;

    use super::*;
    use crate::hal::wait::{WaitBudget, wait_until};
    use crate::internal::phy_regs::standard::{anar, bmcr, bmsr, phy_reg};

    /// Read BMSR and check link status bit
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Read BMSR and check AN complete bit
    pub fn is_an_complete<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::AN_COMPLETE) != 0)
    }

    /// Perform soft reset via BMCR
    ///
    /// Writes BMCR.RESET and polls until the bit self-clears.
    ///
    /// # Errors
    ///
    /// [`IoError::Timeout`](crate::IoError::Timeout) if the bit is still set
    /// when the budget runs out.
    pub fn soft_reset<M: MdioBus, D: DelayNs>(
        mdio: &mut M,
        phy_addr: u8,
        delay: &mut D,
        budget: WaitBudget,
    ) -> Result<()> {
        mdio.write(phy_addr, phy_reg::BMCR, bmcr::RESET)?;

        wait_until(delay, budget, || {
            Ok(mdio.read(phy_addr, phy_reg::BMCR)? & bmcr::RESET == 0)
        })?;
        Ok(())
    }

    /// Force speed and duplex
    ///
    /// Disables auto-negotiation and programs the BMCR speed select bits.
    pub fn force_link<M: MdioBus>(mdio: &mut M, phy_addr: u8, status: LinkStatus) -> Result<()> {
        let mut bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        bmcr_val &= !(bmcr::AN_ENABLE | bmcr::ISOLATE | bmcr::SPEED_100 | bmcr::SPEED_1000);

        match status.speed {
            Speed::Mbps10 => {}
            Speed::Mbps100 => bmcr_val |= bmcr::SPEED_100,
            Speed::Mbps1000 => bmcr_val |= bmcr::SPEED_1000,
        }

        if matches!(status.duplex, Duplex::Full) {
            bmcr_val |= bmcr::DUPLEX_FULL;
        } else {
            bmcr_val &= !bmcr::DUPLEX_FULL;
        }

        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val)
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<PhyId> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)?;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)?;
        Ok(PhyId::new(id1, id2))
    }

    /// Read capabilities from BMSR and the pause bit from ANAR
    pub fn read_capabilities<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<PhyCapabilities> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        let anar_val = mdio.read(phy_addr, phy_reg::ANAR)?;

        Ok(PhyCapabilities {
            speed_100_fd: (bmsr_val & bmsr::TX_FD_CAPABLE) != 0,
            speed_100_hd: (bmsr_val & bmsr::TX_HD_CAPABLE) != 0,
            speed_10_fd: (bmsr_val & bmsr::T10_FD_CAPABLE) != 0,
            speed_10_hd: (bmsr_val & bmsr::T10_HD_CAPABLE) != 0,
            extended_status: (bmsr_val & bmsr::ESTATUS) != 0,
            auto_negotiation: (bmsr_val & bmsr::AN_ABILITY) != 0,
            pause: (anar_val & anar::PAUSE) != 0,
        })
    }

    /// Get link status from BMCR (when AN is disabled or for current state)
    pub fn link_status_from_bmcr<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<LinkStatus> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        let speed = match (
            bmcr_val & bmcr::SPEED_1000 != 0,
            bmcr_val & bmcr::SPEED_100 != 0,
        ) {
            (true, false) => Speed::Mbps1000,
            (false, true) => Speed::Mbps100,
            // 0/0 is 10 Mbps; 1/1 is reserved
            _ => Speed::Mbps10,
        };

        let duplex = if (bmcr_val & bmcr::DUPLEX_FULL) != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };

        Ok(LinkStatus::new(speed, duplex))
    }
}
