//! Core driver components for the PHY management core.
//!
//! - [`config`] - Configuration types and builder patterns
//! - [`state`] - Discovered address and recorded link state
//! - [`phy`] - The [`Phy`] facade tying the PHY layer together
//!
//! # Example
//!
//! ```ignore
//! use dwmac_phy::driver::{MonitorPolicy, Phy, PhyConfig, VendorProfile};
//!
//! let config = PhyConfig::new()
//!     .with_profile(VendorProfile::Ksz9031)
//!     .with_policy(MonitorPolicy::DebouncedSample);
//! let mut phy = Phy::new(config);
//! ```

// Submodules
pub mod config;
pub mod phy;
pub mod state;

// Re-exports for convenience
pub use config::{Duplex, MonitorPolicy, PhyConfig, SkewConfig, Speed, VendorProfile};
pub use phy::Phy;
pub use state::{DriverState, LinkState, PhyAddress};
