//! Auto-negotiation start
//!
//! Advertises every 10/100 mode plus 1000BASE-T half and full duplex, then
//! enables and restarts negotiation. Completion is observed later by the
//! link monitor.

use crate::driver::state::PhyAddress;
use crate::error::{DeviceError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::standard::{anar, bmcr, bmsr, gbcr, phy_reg};
use crate::phy::events::{EventSink, PhyEvent, emit};

/// Read-modify-write: set `bits` in a register
fn set_bits<M: MdioBus>(mdio: &mut M, phy_addr: u8, reg: u8, bits: u16) -> Result<()> {
    let value = mdio.read(phy_addr, reg)?;
    mdio.write(phy_addr, reg, value | bits)
}

/// Advertise all modes and restart auto-negotiation
///
/// Existing register contents are preserved; only the advertisement and
/// control bits are OR-ed in.
///
/// # Errors
///
/// [`DeviceError::AutoNegotiationUnsupported`] if BMSR lacks the ability
/// bit. Nothing is written in that case.
pub fn negotiate<M, S>(mdio: &mut M, address: PhyAddress, sink: &mut S) -> Result<()>
where
    M: MdioBus,
    S: EventSink + ?Sized,
{
    let phy_addr = address.get();

    let status = mdio.read(phy_addr, phy_reg::BMSR)?;
    if status & bmsr::AN_ABILITY == 0 {
        emit(sink, PhyEvent::AutoNegotiationUnsupported);
        return Err(DeviceError::AutoNegotiationUnsupported.into());
    }

    set_bits(mdio, phy_addr, phy_reg::ANAR, anar::ALL_10_100)?;
    set_bits(mdio, phy_addr, phy_reg::GBCR, gbcr::ADV_1000)?;
    set_bits(mdio, phy_addr, phy_reg::BMCR, bmcr::AN_ENABLE | bmcr::AN_RESTART)?;

    emit(sink, PhyEvent::AutoNegotiationStarted);
    Ok(())
}
