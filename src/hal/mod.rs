//! Hardware Abstraction Layer
//!
//! Register-level access underneath the PHY layer.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus over the GMAC GMII address/data register pair
//! - [`wait`]: bounded polling shared by every hardware wait
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod mdio;
pub mod wait;

// Re-export commonly used types
pub use mdio::{
    GmacMdio, MdcClockDivider, MdioBus, MiiRegisters, MmioGmacMdio, MmioMiiRegisters,
};
pub use wait::{WaitBudget, wait_until};
