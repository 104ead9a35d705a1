//! Vendor-specific PHY bring-up
//!
//! [`configure`] runs the full bring-up of a discovered transceiver: soft
//! reset, the sequence for the selected [`VendorProfile`], then
//! auto-negotiation. Each vendor sequence is a [`VendorConfig`]
//! implementation so boards can also call one directly.
//!
//! # Supported Chips
//!
//! | Profile | Chip | Sequence |
//! |---------|------|----------|
//! | `Generic` | any | none |
//! | `Rtl8211f` | Realtek RTL8211F | LED page: LCR = 0xC102, EEELCR = 0 |
//! | `Ar8035` | Qualcomm Atheros AR8035 | debug reg 0x0B: hibernation off |
//! | `Ksz9031` | Microchip KSZ9031 | MMD 2 pad skew, MMD 0 FLP timing |

use embedded_hal::delay::DelayNs;

use crate::driver::config::{PhyConfig, SkewConfig, VendorProfile};
use crate::driver::state::PhyAddress;
use crate::error::{DeviceError, Error, IoError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::vendor::{ar8035, ksz9031, rtl8211f};
use crate::phy::autoneg;
use crate::phy::events::{EventSink, PhyEvent, emit};
use crate::phy::generic::ieee802_3;
use crate::phy::mmd::{self, Mmd};

// =============================================================================
// Vendor Sequence Trait
// =============================================================================

/// A transceiver-specific register sequence run after soft reset
pub trait VendorConfig {
    /// Program the vendor registers of the PHY at `phy_addr`
    ///
    /// Write failures abort the sequence. Readbacks are reported to `sink`
    /// and never fail the sequence.
    fn apply_vendor_config<M, S>(&self, mdio: &mut M, phy_addr: u8, sink: &mut S) -> Result<()>
    where
        M: MdioBus,
        S: EventSink + ?Sized;
}

/// No vendor registers touched
#[derive(Debug, Clone, Copy, Default)]
pub struct Generic;

impl VendorConfig for Generic {
    fn apply_vendor_config<M, S>(&self, _mdio: &mut M, _phy_addr: u8, _sink: &mut S) -> Result<()>
    where
        M: MdioBus,
        S: EventSink + ?Sized,
    {
        Ok(())
    }
}

/// Realtek RTL8211F LED setup
#[derive(Debug, Clone, Copy, Default)]
pub struct Rtl8211f;

impl VendorConfig for Rtl8211f {
    fn apply_vendor_config<M, S>(&self, mdio: &mut M, phy_addr: u8, _sink: &mut S) -> Result<()>
    where
        M: MdioBus,
        S: EventSink + ?Sized,
    {
        mdio.write(phy_addr, rtl8211f::PAGESEL, rtl8211f::PAGE_LED)?;
        mdio.write(phy_addr, rtl8211f::LCR, rtl8211f::LCR_VALUE)?;
        mdio.write(phy_addr, rtl8211f::EEELCR, rtl8211f::EEELCR_VALUE)?;
        mdio.write(phy_addr, rtl8211f::PAGESEL, rtl8211f::PAGE_DEFAULT)
    }
}

/// Qualcomm Atheros AR8035: disable power hibernation
#[derive(Debug, Clone, Copy, Default)]
pub struct Ar8035;

impl VendorConfig for Ar8035 {
    fn apply_vendor_config<M, S>(&self, mdio: &mut M, phy_addr: u8, sink: &mut S) -> Result<()>
    where
        M: MdioBus,
        S: EventSink + ?Sized,
    {
        mdio.write(phy_addr, ar8035::DBG_ADDR, ar8035::DBG_HIB_CTRL)?;
        let current = mdio.read(phy_addr, ar8035::DBG_DATA)?;
        let written = current & !ar8035::HIB_CTRL_PS_HIB_EN;
        mdio.write(phy_addr, ar8035::DBG_DATA, written)?;

        if let Ok(read) = mdio.read(phy_addr, ar8035::DBG_DATA) {
            #[cfg(feature = "defmt")]
            if read & ar8035::HIB_CTRL_PS_HIB_EN != 0 {
                defmt::warn!("AR8035 hibernation still enabled");
            }
            emit(
                sink,
                PhyEvent::VendorReadback {
                    devad: None,
                    register: ar8035::DBG_HIB_CTRL,
                    written,
                    read,
                },
            );
        }
        Ok(())
    }
}

/// Microchip KSZ9031 RGMII pad skew and FLP burst timing
#[derive(Debug, Clone, Copy, Default)]
pub struct Ksz9031 {
    /// Pad skew values for MMD device 2
    pub skew: SkewConfig,
}

impl Ksz9031 {
    /// Sequence with the given pad skew values
    pub const fn new(skew: SkewConfig) -> Self {
        Self { skew }
    }

    const fn skew_writes(&self) -> [(u16, u16); 4] {
        [
            (ksz9031::CTRL_PAD_SKEW, self.skew.control),
            (ksz9031::CLK_PAD_SKEW, self.skew.clock),
            (ksz9031::RX_DATA_PAD_SKEW, self.skew.rx_data),
            (ksz9031::TX_DATA_PAD_SKEW, self.skew.tx_data),
        ]
    }
}

const KSZ9031_FLP_WRITES: [(u16, u16); 2] = [
    (ksz9031::FLP_BURST_TX_LO, ksz9031::FLP_BURST_TX_LO_VALUE),
    (ksz9031::FLP_BURST_TX_HI, ksz9031::FLP_BURST_TX_HI_VALUE),
];

/// Write a group of MMD registers, then read each one back
fn program_mmd_group<M, S>(
    mdio: &mut M,
    phy_addr: u8,
    device: Mmd,
    writes: &[(u16, u16)],
    sink: &mut S,
) -> Result<()>
where
    M: MdioBus,
    S: EventSink + ?Sized,
{
    for &(reg, value) in writes {
        mmd::write(mdio, phy_addr, device, reg, value)?;
    }

    for &(reg, written) in writes {
        match mmd::read(mdio, phy_addr, device, reg) {
            Ok(read) => emit(
                sink,
                PhyEvent::VendorReadback {
                    devad: Some(device.0),
                    register: reg,
                    written,
                    read,
                },
            ),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("MMD {}/{=u16} readback failed: {}", device.0, reg, _e);
            }
        }
    }
    Ok(())
}

impl VendorConfig for Ksz9031 {
    fn apply_vendor_config<M, S>(&self, mdio: &mut M, phy_addr: u8, sink: &mut S) -> Result<()>
    where
        M: MdioBus,
        S: EventSink + ?Sized,
    {
        program_mmd_group(
            mdio,
            phy_addr,
            Mmd(ksz9031::MMD_SKEW_DEVAD),
            &self.skew_writes(),
            sink,
        )?;
        program_mmd_group(
            mdio,
            phy_addr,
            Mmd(ksz9031::MMD_AN_DEVAD),
            &KSZ9031_FLP_WRITES,
            sink,
        )
    }
}

// =============================================================================
// Profile Dispatch
// =============================================================================

/// Run the vendor sequence selected by `profile`
pub fn apply_profile<M, S>(
    profile: VendorProfile,
    skew: SkewConfig,
    mdio: &mut M,
    phy_addr: u8,
    sink: &mut S,
) -> Result<()>
where
    M: MdioBus,
    S: EventSink + ?Sized,
{
    #[cfg(feature = "defmt")]
    defmt::debug!("applying {} vendor sequence", profile);

    match profile {
        VendorProfile::Generic => Generic.apply_vendor_config(mdio, phy_addr, sink),
        VendorProfile::Rtl8211f => Rtl8211f.apply_vendor_config(mdio, phy_addr, sink),
        VendorProfile::Ar8035 => Ar8035.apply_vendor_config(mdio, phy_addr, sink),
        VendorProfile::Ksz9031 => Ksz9031::new(skew).apply_vendor_config(mdio, phy_addr, sink),
    }
}

/// Bring up a discovered PHY
///
/// Soft reset, vendor sequence, then auto-negotiation. The first failing
/// step ends the bring-up; earlier steps are not undone.
///
/// # Errors
///
/// - [`DeviceError::ResetFailed`] if BMCR.RESET does not self-clear
/// - [`DeviceError::AutoNegotiationUnsupported`] from auto-negotiation
/// - any bus error from the vendor sequence or auto-negotiation
pub fn configure<M, D, S>(
    mdio: &mut M,
    delay: &mut D,
    address: PhyAddress,
    config: &PhyConfig,
    sink: &mut S,
) -> Result<()>
where
    M: MdioBus,
    D: DelayNs,
    S: EventSink + ?Sized,
{
    let phy_addr = address.get();

    match ieee802_3::soft_reset(mdio, phy_addr, delay, config.reset_budget) {
        Ok(()) => {}
        Err(Error::Io(IoError::Timeout)) => {
            emit(sink, PhyEvent::ResetTimeout);
            return Err(DeviceError::ResetFailed.into());
        }
        Err(e) => return Err(e),
    }

    apply_profile(config.profile, config.skew, mdio, phy_addr, sink)?;

    autoneg::negotiate(mdio, address, sink)
}
