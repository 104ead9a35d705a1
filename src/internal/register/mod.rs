//! Memory-mapped GMAC register definitions
//!
//! Only the GMII address/data pair used for station management is described
//! here. The MAC base address is supplied by the caller at runtime, so the
//! accessors take it from `self` instead of a fixed peripheral base.
//! All register access is volatile to ensure proper hardware interaction.

// =============================================================================
// Register Offsets
// =============================================================================

/// GMAC GMII Address Register offset
pub const GMACMIIADDR_OFFSET: usize = 0x10;
/// GMAC GMII Data Register offset
pub const GMACMIIDATA_OFFSET: usize = 0x14;

// =============================================================================
// GMAC GMII Address Register (GMACMIIADDR) Bits
// =============================================================================

/// GMII Busy
pub const GMACMIIADDR_GB: u32 = 1 << 0;
/// GMII Write
pub const GMACMIIADDR_GW: u32 = 1 << 1;
/// CSR Clock Range shift
pub const GMACMIIADDR_CR_SHIFT: u32 = 2;
/// CSR Clock Range mask (4 bits)
pub const GMACMIIADDR_CR_MASK: u32 = 0xF << 2;
/// GMII Register shift
pub const GMACMIIADDR_GR_SHIFT: u32 = 6;
/// GMII Register mask (5 bits)
pub const GMACMIIADDR_GR_MASK: u32 = 0x1F << 6;
/// Physical Layer Address shift
pub const GMACMIIADDR_PA_SHIFT: u32 = 11;
/// Physical Layer Address mask (5 bits)
pub const GMACMIIADDR_PA_MASK: u32 = 0x1F << 11;

/// GMII Data mask (16 bits)
pub const GMACMIIDATA_GD_MASK: u32 = 0xFFFF;

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}

// =============================================================================
// Register Access Macros
// =============================================================================

/// Generate read/write accessor methods for a register relative to `self.base`.
///
/// # Example
/// ```ignore
/// impl GmiiRegs {
///     reg_rw!(mii_address, set_mii_address, GMACMIIADDR_OFFSET, "GMII Address register");
/// }
/// ```
macro_rules! reg_rw {
    ($read_fn:ident, $write_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn(&self) -> u32 {
            // SAFETY: `base` was vouched for by the caller of `GmiiRegs::new`
            unsafe { $crate::internal::register::read_reg(self.base + $offset) }
        }

        #[doc = concat!("Write ", $doc)]
        #[inline(always)]
        pub fn $write_fn(&self, value: u32) {
            // SAFETY: `base` was vouched for by the caller of `GmiiRegs::new`
            unsafe { $crate::internal::register::write_reg(self.base + $offset, value) }
        }
    };
}

// =============================================================================
// GMII Register Block
// =============================================================================

/// GMII address/data register pair of one GMAC instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GmiiRegs {
    base: usize,
}

impl GmiiRegs {
    /// Wrap the GMAC register block at `base`
    ///
    /// # Safety
    /// `base` must be the address of a mapped DesignWare GMAC register block
    /// that stays valid for the lifetime of the returned value.
    #[inline(always)]
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Get the base address
    #[inline(always)]
    pub const fn base(&self) -> usize {
        self.base
    }

    reg_rw!(mii_address, set_mii_address, GMACMIIADDR_OFFSET, "GMII Address register");
    reg_rw!(mii_data, set_mii_data, GMACMIIDATA_OFFSET, "GMII Data register");
}
