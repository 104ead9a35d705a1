//! PHY Register Definitions
//!
//! Register definitions for PHY devices accessed via MDIO. These are distinct
//! from the GMAC memory-mapped registers in [`register`](super::register).
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers
//! - [`vendor`] - RTL8211F, AR8035 and KSZ9031 specific registers

pub mod standard;
pub mod vendor;
