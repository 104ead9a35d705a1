//! Ethernet PHY Management
//!
//! Everything above the raw MDIO bus: finding the transceiver, vendor
//! bring-up, auto-negotiation and link monitoring.
//!
//! # Architecture
//!
//! The PHY layer talks to hardware only through the [`MdioBus`] trait, so
//! it runs unchanged against the GMAC register pair or a mock bus.
//!
//! | Module | Role |
//! |--------|------|
//! | [`discovery`] | scan addresses 0-31 for a responding PHY |
//! | [`vendor`] | soft reset plus chip-specific register sequences |
//! | [`mmd`] | Clause 45 registers through MMD_CTRL/MMD_DATA |
//! | [`autoneg`] | advertise 10/100/1000 and restart negotiation |
//! | [`link`] | link state machine and MAC notification |
//! | [`capability`] | negotiated speed and duplex from register values |
//! | [`events`] | observable [`PhyEvent`]s |
//!
//! # Supported PHY Chips
//!
//! Any IEEE 802.3 Clause 22 PHY works with [`VendorProfile::Generic`].
//! RTL8211F, AR8035 and KSZ9031 get their extra setup through
//! [`VendorConfig`] implementations.
//!
//! [`MdioBus`]: crate::hal::mdio::MdioBus
//! [`VendorProfile::Generic`]: crate::driver::config::VendorProfile::Generic

pub mod autoneg;
pub mod capability;
pub mod discovery;
pub mod events;
pub mod generic;
pub mod link;
pub mod mmd;
pub mod vendor;

pub use capability::{read_capability, resolve};
pub use events::{EventSink, NoopSink, PhyEvent};
pub use generic::{LinkStatus, PhyCapabilities, PhyId, ieee802_3};
pub use link::{LinkMonitor, MacLink};
pub use mmd::Mmd;
pub use vendor::{Ar8035, Generic, Ksz9031, Rtl8211f, VendorConfig};

// Re-export IEEE 802.3 standard register definitions from mdio
pub use crate::hal::mdio::{anar, anlpar, bmcr, bmsr, gbcr, gbsr, phy_reg};
