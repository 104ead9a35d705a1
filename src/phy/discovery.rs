//! PHY discovery
//!
//! Scans MDIO addresses 0-31 in ascending order and takes the first one
//! whose identifier registers both answer with something other than
//! all-ones. A read that fails disqualifies that address only.

use crate::driver::state::{DriverState, PhyAddress};
use crate::error::{ConfigError, DeviceError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::constants::{PHY_ADDR_COUNT, PHY_INVALID_ID};
use crate::internal::phy_regs::standard::phy_reg;
use crate::phy::events::{EventSink, PhyEvent, emit};
use crate::phy::generic::PhyId;

/// Read the identifier pair at one address
///
/// Returns `None` if either read fails or either word is 0xFFFF.
pub fn probe<M: MdioBus>(mdio: &mut M, address: PhyAddress) -> Option<PhyId> {
    let id1 = mdio.read(address.get(), phy_reg::PHYIDR1).ok()?;
    let id2 = mdio.read(address.get(), phy_reg::PHYIDR2).ok()?;

    if id1 == PHY_INVALID_ID || id2 == PHY_INVALID_ID {
        return None;
    }
    Some(PhyId::new(id1, id2))
}

/// Lowest responding address on the bus
pub fn scan<M: MdioBus>(mdio: &mut M) -> Option<(PhyAddress, PhyId)> {
    (0..PHY_ADDR_COUNT)
        .filter_map(|raw| PhyAddress::new(raw).ok())
        .find_map(|address| probe(mdio, address).map(|id| (address, id)))
}

/// Find the PHY and store its address in `state`
///
/// # Errors
///
/// - [`ConfigError::AlreadyInitialized`] if `state` already has an address;
///   the bus is not touched.
/// - [`DeviceError::NotFound`] if no address answers.
pub fn discover<M, S>(mdio: &mut M, state: &mut DriverState, sink: &mut S) -> Result<PhyAddress>
where
    M: MdioBus,
    S: EventSink + ?Sized,
{
    if state.address().is_some() {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    let Some((address, id)) = scan(mdio) else {
        emit(sink, PhyEvent::NotFound);
        return Err(DeviceError::NotFound.into());
    };

    state.set_address(address)?;
    emit(sink, PhyEvent::Detected { address, id });
    Ok(address)
}
