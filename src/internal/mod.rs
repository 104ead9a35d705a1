//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`register`]: GMII address/data register definitions
//! - [`constants`]: Poll bounds and delays
//! - [`phy_regs`]: IEEE 802.3 and vendor PHY register definitions
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Do not depend on any types
//! or functions in this module from external code.

pub(crate) mod constants;
pub(crate) mod phy_regs;
pub(crate) mod register;
