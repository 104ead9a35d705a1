//! DesignWare GMAC PHY Management
//!
//! A `no_std`, `no_alloc` Rust implementation of Ethernet PHY management for
//! the Synopsys DesignWare GMAC.
//!
//! This crate finds the PHY on the MDIO bus, runs the vendor bring-up for the
//! fitted transceiver, starts auto-negotiation and then tracks the link,
//! telling the MAC the negotiated speed and duplex.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Driver Layer** ([`driver`]): the [`Phy`] facade, [`PhyConfig`] and per-instance state
//! 2. **PHY Layer** ([`phy`]): discovery, vendor sequences, auto-negotiation, link monitoring
//! 3. **HAL Layer** ([`hal`]): MDIO over the GMII address/data registers, bounded waits
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3**: Clause 22 MDIO frames and registers, Clause 45 MMD indirection
//! - **Synopsys DWMAC**: GMII address (0x10) and data (0x14) register layout
//!
//! # Supported PHY Chips
//!
//! - Any Clause 22 PHY through [`VendorProfile::Generic`]
//! - Realtek RTL8211F, Qualcomm Atheros AR8035, Microchip KSZ9031
//!
//! Additional PHY sequences can be added by implementing [`VendorConfig`].
//!
//! # Features
//!
//! - `rtl8211f`, `ar8035`, `ksz9031`: build-time default [`VendorProfile`]
//!   (mutually exclusive; the profile in [`PhyConfig`] always wins)
//! - `defmt`: Enable defmt formatting and log output
//!
//! # Example
//!
//! ```ignore
//! use dwmac_phy::{GmacMdio, MmioMiiRegisters, MonitorPolicy, Phy, PhyConfig};
//! use embedded_hal::delay::DelayNs;
//!
//! // Your delay implementation
//! let mut delay = /* your DelayNs implementation */;
//!
//! // GMII register pair of the MAC
//! let regs = unsafe { MmioMiiRegisters::new(GMAC_BASE) };
//! let mut mdio = GmacMdio::new(regs, delay.clone());
//!
//! let config = PhyConfig::new().with_policy(MonitorPolicy::DebouncedSample);
//! let mut phy = Phy::new(config);
//! phy.init(&mut mdio, &mut delay)?;
//!
//! // Periodic link check
//! let mut mac = |speed, duplex| gmac.set_speed_duplex(speed, duplex);
//! match phy.poll_link(&mut mdio, &mut delay, &mut mac) {
//!     Ok(state) => report(state),
//!     Err(e) if e.is_timeout() => report(LinkState::Down),
//!     Err(e) => return Err(e),
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]
#[cfg(any(
    all(feature = "rtl8211f", feature = "ar8035"),
    all(feature = "rtl8211f", feature = "ksz9031"),
    all(feature = "ar8035", feature = "ksz9031")
))]
compile_error!("Features 'rtl8211f', 'ar8035' and 'ksz9031' are mutually exclusive.");

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{Duplex, MonitorPolicy, PhyConfig, SkewConfig, Speed, VendorProfile};
pub use driver::phy::Phy;
pub use driver::state::{DriverState, LinkState, PhyAddress};
pub use error::{
    ConfigError, ConfigResult, DeviceError, DeviceResult, Error, IoError, IoResult, Result,
};
pub use hal::mdio::{GmacMdio, MdcClockDivider, MdioBus, MiiRegisters, MmioMiiRegisters};
pub use hal::wait::WaitBudget;

// Re-export PHY types
pub use phy::{
    EventSink, LinkMonitor, LinkStatus, MacLink, NoopSink, PhyCapabilities, PhyEvent, PhyId,
    VendorConfig,
};

/// Low-level register accessors for advanced use.
///
/// These are intentionally separated from the primary facade. Most users should
/// prefer [`GmacMdio`] instead of touching registers directly.
///
/// # Safety
///
/// Direct register access bypasses the busy-bit handshake. Use only if no
/// MDIO transaction can be in flight.
pub mod unsafe_registers {
    pub use crate::internal::register::GmiiRegs;
}

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Auto-negotiation
        AN_COMPLETE_DEBOUNCED_POLLS,
        AN_COMPLETE_POLLS,
        // Link
        LINK_UP_POLLS,
        // MDIO busy bit
        MDIO_READ_BUSY_POLLS,
        MDIO_WRITE_BUSY_POLLS,
        // Discovery
        PHY_ADDR_COUNT,
        PHY_INVALID_ID,
        // Timing
        PHY_POLL_INTERVAL_US,
        SOFT_RESET_POLLS,
    };
}
