//! Per-instance driver state
//!
//! [`DriverState`] holds everything that changes after construction: the
//! discovered PHY address and the link state seen by the last two
//! monitoring calls. It is owned by one [`Phy`](super::phy::Phy) and passed
//! explicitly to discovery and link monitoring.

use crate::error::{ConfigError, ConfigResult};
use crate::hal::mdio::MAX_PHY_ADDR;

/// A PHY address on the MDIO bus (0-31)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyAddress(u8);

impl PhyAddress {
    /// Checked constructor
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPhyAddress`] above 31.
    pub const fn new(addr: u8) -> ConfigResult<Self> {
        if addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress);
        }
        Ok(Self(addr))
    }

    /// Raw 5-bit address
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PhyAddress {
    type Error = ConfigError;

    fn try_from(addr: u8) -> ConfigResult<Self> {
        Self::new(addr)
    }
}

impl From<PhyAddress> for u8 {
    fn from(addr: PhyAddress) -> u8 {
        addr.0
    }
}

impl core::fmt::Display for PhyAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Link state as reported by BMSR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Link established
    Up,
    /// No link
    #[default]
    Down,
}

impl LinkState {
    /// `true` for [`LinkState::Up`]
    pub const fn is_up(self) -> bool {
        matches!(self, LinkState::Up)
    }

    pub(crate) const fn from_bit(up: bool) -> Self {
        if up { LinkState::Up } else { LinkState::Down }
    }
}

/// Mutable state of one PHY driver instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverState {
    address: Option<PhyAddress>,
    /// Link state recorded by the latest monitoring call
    pub current_link: LinkState,
    /// Link state as of the end of the previous monitoring call
    pub previous_link: LinkState,
}

impl DriverState {
    /// Fresh state: no address, link down
    pub const fn new() -> Self {
        Self {
            address: None,
            current_link: LinkState::Down,
            previous_link: LinkState::Down,
        }
    }

    /// Discovered PHY address, if any
    pub const fn address(&self) -> Option<PhyAddress> {
        self.address
    }

    /// Discovered PHY address
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotInitialized`] before discovery.
    pub fn require_address(&self) -> ConfigResult<PhyAddress> {
        self.address.ok_or(ConfigError::NotInitialized)
    }

    /// Store the discovered address; only the first call succeeds
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInitialized`] if an address is set.
    pub fn set_address(&mut self, address: PhyAddress) -> ConfigResult<()> {
        if self.address.is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }
        self.address = Some(address);
        Ok(())
    }

    /// Record a sampled link state; `true` if it differs from the last call
    pub(crate) fn observe(&mut self, sampled: LinkState) -> bool {
        self.current_link = sampled;
        self.current_link != self.previous_link
    }

    /// Close a monitoring call: the current state becomes the previous one
    pub(crate) fn settle(&mut self) {
        self.previous_link = self.current_link;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phy_address_range() {
        assert_eq!(PhyAddress::new(0).unwrap().get(), 0);
        assert_eq!(PhyAddress::new(31).unwrap().get(), 31);
        assert_eq!(PhyAddress::new(32), Err(ConfigError::InvalidPhyAddress));
        assert_eq!(PhyAddress::try_from(255u8), Err(ConfigError::InvalidPhyAddress));
        assert_eq!(u8::from(PhyAddress::new(7).unwrap()), 7);
    }

    #[test]
    fn new_state_is_down_without_address() {
        let state = DriverState::new();
        assert_eq!(state.address(), None);
        assert_eq!(state.current_link, LinkState::Down);
        assert_eq!(state.previous_link, LinkState::Down);
        assert_eq!(state.require_address(), Err(ConfigError::NotInitialized));
    }

    #[test]
    fn address_is_set_once() {
        let mut state = DriverState::new();
        let seven = PhyAddress::new(7).unwrap();

        state.set_address(seven).unwrap();
        assert_eq!(state.require_address(), Ok(seven));

        let other = PhyAddress::new(3).unwrap();
        assert_eq!(state.set_address(other), Err(ConfigError::AlreadyInitialized));
        assert_eq!(state.address(), Some(seven));
    }

    #[test]
    fn observe_then_settle() {
        let mut state = DriverState::new();

        assert!(!state.observe(LinkState::Down));
        state.settle();

        assert!(state.observe(LinkState::Up));
        assert_eq!(state.previous_link, LinkState::Down);
        assert_eq!(state.current_link, LinkState::Up);

        state.settle();
        assert_eq!(state.previous_link, LinkState::Up);
        assert!(!state.observe(LinkState::Up));
        assert!(state.observe(LinkState::Down));
    }
}
