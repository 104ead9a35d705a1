//! Vendor-specific PHY register definitions
//!
//! Addresses and values for the transceivers that need bring-up tweaks
//! beyond the IEEE registers.

// Complete register maps; not every value is used by the driver
#![allow(dead_code)]

// =============================================================================
// Realtek RTL8211F
// =============================================================================

/// RTL8211F paged registers
pub mod rtl8211f {
    /// Page select register
    pub const PAGESEL: u8 = 0x1F;
    /// LED configuration page
    pub const PAGE_LED: u16 = 0x0D04;
    /// Default page
    pub const PAGE_DEFAULT: u16 = 0x0000;
    /// LED control register (LED page)
    pub const LCR: u8 = 0x10;
    /// EEE LED control register (LED page)
    pub const EEELCR: u8 = 0x11;
    /// LED0 link 10/100/1000, LED1 link 100 + activity, LED2 link 1000 + activity
    pub const LCR_VALUE: u16 = 0xC102;
    /// EEE LED indication disabled
    pub const EEELCR_VALUE: u16 = 0x0000;
}

// =============================================================================
// Qualcomm Atheros AR8035
// =============================================================================

/// AR8035 debug port
pub mod ar8035 {
    /// Debug port address offset register
    pub const DBG_ADDR: u8 = 0x1D;
    /// Debug port data register
    pub const DBG_DATA: u8 = 0x1E;
    /// Hibernation control debug register
    pub const DBG_HIB_CTRL: u16 = 0x0B;
    /// Power hibernate enable
    pub const HIB_CTRL_PS_HIB_EN: u16 = 1 << 15;
}

// =============================================================================
// Microchip KSZ9031
// =============================================================================

/// KSZ9031 MMD registers
pub mod ksz9031 {
    /// MMD device holding the auto-negotiation FLP timers
    pub const MMD_AN_DEVAD: u8 = 0;
    /// FLP burst transmit timer, low word
    pub const FLP_BURST_TX_LO: u16 = 3;
    /// FLP burst transmit timer, high word
    pub const FLP_BURST_TX_HI: u16 = 4;
    /// 16 ms FLP burst interval, low word
    pub const FLP_BURST_TX_LO_VALUE: u16 = 0x1A80;
    /// 16 ms FLP burst interval, high word
    pub const FLP_BURST_TX_HI_VALUE: u16 = 0x0006;

    /// MMD device holding the RGMII pad skew registers
    pub const MMD_SKEW_DEVAD: u8 = 2;
    /// RGMII control signal pad skew
    pub const CTRL_PAD_SKEW: u16 = 4;
    /// RGMII RX data pad skew
    pub const RX_DATA_PAD_SKEW: u16 = 5;
    /// RGMII TX data pad skew
    pub const TX_DATA_PAD_SKEW: u16 = 6;
    /// GMII clock pad skew
    pub const CLK_PAD_SKEW: u16 = 8;

    /// Default control signal skew
    pub const CTRL_PAD_SKEW_DEFAULT: u16 = 0x0000;
    /// Default RX data skew
    pub const RX_DATA_PAD_SKEW_DEFAULT: u16 = 0x0000;
    /// Default TX data skew
    pub const TX_DATA_PAD_SKEW_DEFAULT: u16 = 0x0000;
    /// Default clock skew (maximum RX/TX clock delay)
    pub const CLK_PAD_SKEW_DEFAULT: u16 = 0x03FC;
}
