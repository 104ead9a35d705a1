//! Centralized Constants
//!
//! Single source of truth for the poll bounds and delays used throughout the
//! PHY core.
//!
//! # Note
//!
//! Register addresses and bit definitions live in
//! [`phy_regs`](super::phy_regs) and [`register`](super::register).

// =============================================================================
// MDIO busy-wait bounds
// =============================================================================

/// Maximum busy-flag polls after starting an MDIO read
///
/// Ten times the write bound. Both values are kept as shipped; nothing
/// documents why they differ.
pub const MDIO_READ_BUSY_POLLS: u32 = 10_000;

/// Maximum busy-flag polls after starting an MDIO write
pub const MDIO_WRITE_BUSY_POLLS: u32 = 1_000;

// =============================================================================
// PHY-level waits
// =============================================================================

/// Delay between PHY register polls in microseconds
pub const PHY_POLL_INTERVAL_US: u32 = 1;

/// Maximum polls waiting for BMCR.RESET to self-clear
pub const SOFT_RESET_POLLS: u32 = 200_000;

/// Maximum polls waiting for BMSR link status (immediate-check policy)
pub const LINK_UP_POLLS: u32 = 200_000;

/// Maximum polls waiting for auto-negotiation complete (immediate-check policy)
pub const AN_COMPLETE_POLLS: u32 = 200_000;

/// Maximum polls waiting for auto-negotiation complete (debounced policy)
pub const AN_COMPLETE_DEBOUNCED_POLLS: u32 = 10_000;

// =============================================================================
// Discovery
// =============================================================================

/// Number of addresses on an MDIO bus
pub const PHY_ADDR_COUNT: u8 = 32;

/// Identifier value read back from an address with nothing attached
pub const PHY_INVALID_ID: u16 = 0xFFFF;
