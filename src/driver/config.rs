//! PHY configuration types
//!
//! Link parameters, vendor profile selection, monitoring policy and the
//! wait budgets used during bring-up and link monitoring.

use crate::hal::wait::WaitBudget;
use crate::internal::constants::{
    AN_COMPLETE_DEBOUNCED_POLLS, AN_COMPLETE_POLLS, LINK_UP_POLLS, PHY_POLL_INTERVAL_US,
    SOFT_RESET_POLLS,
};
use crate::internal::phy_regs::vendor::ksz9031;

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
    /// 1000 Mbps
    Mbps1000,
}

impl Speed {
    /// Speed in megabits per second
    pub const fn mbps(self) -> u16 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
            Speed::Mbps1000 => 1000,
        }
    }
}

impl core::fmt::Display for Speed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Speed::Mbps10 => f.write_str("10 Mbps"),
            Speed::Mbps100 => f.write_str("100 Mbps"),
            Speed::Mbps1000 => f.write_str("1 Gbps"),
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

impl core::fmt::Display for Duplex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Duplex::Half => f.write_str("Half Duplex"),
            Duplex::Full => f.write_str("Full Duplex"),
        }
    }
}

// =============================================================================
// Vendor Profile
// =============================================================================

/// Transceiver-specific bring-up sequence to run after the soft reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VendorProfile {
    /// IEEE registers only
    Generic,
    /// Realtek RTL8211F: LED page setup
    Rtl8211f,
    /// Qualcomm Atheros AR8035: hibernation disabled
    Ar8035,
    /// Microchip KSZ9031: RGMII pad skew and FLP timing
    Ksz9031,
}

impl VendorProfile {
    /// Profile selected by the enabled cargo feature, `Generic` when none is
    pub const fn build_default() -> Self {
        if cfg!(feature = "rtl8211f") {
            Self::Rtl8211f
        } else if cfg!(feature = "ar8035") {
            Self::Ar8035
        } else if cfg!(feature = "ksz9031") {
            Self::Ksz9031
        } else {
            Self::Generic
        }
    }
}

impl Default for VendorProfile {
    fn default() -> Self {
        Self::build_default()
    }
}

// =============================================================================
// Link Monitoring Policy
// =============================================================================

/// How the link monitor samples BMSR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorPolicy {
    /// Wait for link, then negotiation, unless the first sample is already up
    #[default]
    ImmediateCheck,
    /// Sample once and only act on a change
    DebouncedSample,
}

// =============================================================================
// KSZ9031 Pad Skew
// =============================================================================

/// RGMII pad skew values written to MMD device 2 on a KSZ9031
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SkewConfig {
    /// Control signal pad skew (register 4)
    pub control: u16,
    /// RX data pad skew (register 5)
    pub rx_data: u16,
    /// TX data pad skew (register 6)
    pub tx_data: u16,
    /// Clock pad skew (register 8)
    pub clock: u16,
}

impl SkewConfig {
    /// Board defaults: no data skew, maximum clock delay
    pub const fn new() -> Self {
        Self {
            control: ksz9031::CTRL_PAD_SKEW_DEFAULT,
            rx_data: ksz9031::RX_DATA_PAD_SKEW_DEFAULT,
            tx_data: ksz9031::TX_DATA_PAD_SKEW_DEFAULT,
            clock: ksz9031::CLK_PAD_SKEW_DEFAULT,
        }
    }
}

impl Default for SkewConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// PHY Configuration
// =============================================================================

/// Configuration for one PHY driver instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig {
    /// Vendor bring-up sequence
    pub profile: VendorProfile,
    /// Link monitoring policy
    pub policy: MonitorPolicy,
    /// Wait for BMCR.RESET to self-clear
    pub reset_budget: WaitBudget,
    /// Wait for BMSR link status (immediate-check policy)
    pub link_budget: WaitBudget,
    /// Wait for negotiation after the link wait succeeds (immediate-check policy)
    pub an_budget: WaitBudget,
    /// Wait for negotiation to complete (debounced policy)
    pub debounced_an_budget: WaitBudget,
    /// KSZ9031 pad skew values
    pub skew: SkewConfig,
}

impl PhyConfig {
    /// Create a new configuration with defaults
    ///
    /// The profile comes from the enabled cargo feature, if any.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            profile: VendorProfile::build_default(),
            policy: MonitorPolicy::ImmediateCheck,
            reset_budget: WaitBudget::polls(SOFT_RESET_POLLS, PHY_POLL_INTERVAL_US),
            link_budget: WaitBudget::polls(LINK_UP_POLLS, PHY_POLL_INTERVAL_US),
            an_budget: WaitBudget::polls(AN_COMPLETE_POLLS, PHY_POLL_INTERVAL_US),
            debounced_an_budget: WaitBudget::polls(
                AN_COMPLETE_DEBOUNCED_POLLS,
                PHY_POLL_INTERVAL_US,
            ),
            skew: SkewConfig::new(),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the vendor profile
    #[must_use]
    pub const fn with_profile(mut self, profile: VendorProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the link monitoring policy
    #[must_use]
    pub const fn with_policy(mut self, policy: MonitorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the soft reset wait
    #[must_use]
    pub const fn with_reset_budget(mut self, budget: WaitBudget) -> Self {
        self.reset_budget = budget;
        self
    }

    /// Set the link-up wait used by the immediate-check policy
    #[must_use]
    pub const fn with_link_budget(mut self, budget: WaitBudget) -> Self {
        self.link_budget = budget;
        self
    }

    /// Set the negotiation wait used by the immediate-check policy
    #[must_use]
    pub const fn with_an_budget(mut self, budget: WaitBudget) -> Self {
        self.an_budget = budget;
        self
    }

    /// Set the negotiation wait used by the debounced policy
    #[must_use]
    pub const fn with_debounced_an_budget(mut self, budget: WaitBudget) -> Self {
        self.debounced_an_budget = budget;
        self
    }

    /// Set the KSZ9031 pad skew values
    #[must_use]
    pub const fn with_skew(mut self, skew: SkewConfig) -> Self {
        self.skew = skew;
        self
    }
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self::new()
    }
}
