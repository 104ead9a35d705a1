//! IEEE 802.3 PHY Register Definitions
//!
//! Standard PHY register addresses and bit definitions from IEEE 802.3
//! Clause 22, plus the Clause 45 indirection pair (registers 13/14) used to
//! reach MMD registers.
//!
//! # Standard Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 4 | ANAR | Auto-Negotiation Advertisement |
//! | 5 | ANLPAR | Link Partner Ability |
//! | 9 | GBCR | 1000BASE-T Control |
//! | 10 | GBSR | 1000BASE-T Status |
//! | 13 | MMD_CTRL | MMD Access Control |
//! | 14 | MMD_DATA | MMD Access Address/Data |

// Complete register maps; not every bit is used by the driver
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u8 = 6;
    /// 1000BASE-T Control Register
    pub const GBCR: u8 = 9;
    /// 1000BASE-T Status Register
    pub const GBSR: u8 = 10;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Address/Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select LSB (100 Mbps if set and SPEED_1000 clear)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from the MII
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
    /// Speed select MSB (1000 Mbps if set and SPEED_100 clear)
    pub const SPEED_1000: u16 = 1 << 6;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-T4 capable
    pub const T4_CAPABLE: u16 = 1 << 15;
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Extended status register present (1000BASE-T abilities in reg 15)
    pub const ESTATUS: u16 = 1 << 8;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault detected
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (1 = link up, 0 = link down)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Extended register capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// ANAR / ANLPAR - Advertisement and Link Partner Ability (Registers 4/5)
// =============================================================================

/// ANAR (Auto-Negotiation Advertisement Register) bits
pub mod anar {
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-TX full duplex advertised
    pub const TX_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex advertised
    pub const TX_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex advertised
    pub const T10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex advertised
    pub const T10_HD: u16 = 1 << 5;
    /// All 10/100 abilities
    pub const ALL_10_100: u16 = TX_FD | TX_HD | T10_FD | T10_HD;
    /// Selector field mask
    pub const SELECTOR: u16 = 0x001F;
    /// IEEE 802.3 selector value
    pub const SELECTOR_IEEE802_3: u16 = 0x0001;
}

/// ANLPAR (Auto-Negotiation Link Partner Ability Register) bits
///
/// Same bit layout as ANAR, but represents what the link partner advertises.
pub mod anlpar {
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-TX full duplex capable
    pub const CAN_100_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex capable
    pub const CAN_100_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex capable
    pub const CAN_10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex capable
    pub const CAN_10_HD: u16 = 1 << 5;
    /// Either 100BASE-TX ability
    pub const CAN_100: u16 = CAN_100_FD | CAN_100_HD;
}

// =============================================================================
// GBCR / GBSR - 1000BASE-T Control and Status (Registers 9/10)
// =============================================================================

/// GBCR (1000BASE-T Control Register) bits
pub mod gbcr {
    /// Advertise 1000BASE-T half duplex
    pub const ADV_1000_HALF: u16 = 1 << 8;
    /// Advertise 1000BASE-T full duplex
    pub const ADV_1000_FULL: u16 = 1 << 9;
    /// Both 1000BASE-T abilities
    pub const ADV_1000: u16 = ADV_1000_HALF | ADV_1000_FULL;
}

/// GBSR (1000BASE-T Status Register) bits
///
/// The partner bits sit two positions above the matching GBCR advertisement
/// bits, so `GBCR << 2` lines up with them.
pub mod gbsr {
    /// Link partner is 1000BASE-T half duplex capable
    pub const LP_1000_HALF: u16 = 1 << 10;
    /// Link partner is 1000BASE-T full duplex capable
    pub const LP_1000_FULL: u16 = 1 << 11;
    /// Either partner 1000BASE-T ability
    pub const LP_1000: u16 = LP_1000_HALF | LP_1000_FULL;
    /// Shift aligning GBCR advertisement bits with GBSR partner bits
    pub const ADV_TO_LP_SHIFT: u32 = 2;
}

// =============================================================================
// MMD_CTRL - MMD Access Control (Register 13)
// =============================================================================

/// MMD access control register fields
pub mod mmd_ctrl {
    /// Function field shift
    pub const FUNCTION_SHIFT: u32 = 14;
    /// Device address field mask
    pub const DEVAD_MASK: u16 = 0x001F;
    /// Function: address
    pub const FN_ADDRESS: u16 = 0;
    /// Function: data, no post increment
    pub const FN_DATA_NO_POST_INC: u16 = 1;
    /// Function: data, post increment on reads and writes
    pub const FN_DATA_POST_INC_RW: u16 = 2;
    /// Function: data, post increment on writes only
    pub const FN_DATA_POST_INC_W: u16 = 3;
}
