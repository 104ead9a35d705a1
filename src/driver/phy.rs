//! PHY driver facade
//!
//! [`Phy`] ties discovery, vendor bring-up, auto-negotiation and link
//! monitoring to one [`DriverState`]. The MDIO bus and delay are borrowed
//! per call so the same bus can serve other users between calls.
//!
//! # Example
//!
//! ```ignore
//! use dwmac_phy::{GmacMdio, MmioMiiRegisters, Phy, PhyConfig, VendorProfile};
//!
//! let regs = unsafe { MmioMiiRegisters::new(GMAC0_BASE) };
//! let mut mdio = GmacMdio::new(regs, delay.clone());
//!
//! let mut phy = Phy::new(PhyConfig::new().with_profile(VendorProfile::Rtl8211f));
//! phy.init(&mut mdio, &mut delay)?;
//!
//! loop {
//!     let _ = phy.poll_link(&mut mdio, &mut delay, &mut |speed, duplex| {
//!         gmac.set_speed_duplex(speed, duplex);
//!     });
//!     timer.wait_ms(1000);
//! }
//! ```

use embedded_hal::delay::DelayNs;

use crate::driver::config::PhyConfig;
use crate::driver::state::{DriverState, LinkState, PhyAddress};
use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::phy::events::{EventSink, NoopSink};
use crate::phy::generic::{LinkStatus, PhyCapabilities, PhyId, ieee802_3};
use crate::phy::link::{LinkMonitor, MacLink};
use crate::phy::{autoneg, capability, discovery, vendor};

/// One managed PHY
#[derive(Debug)]
pub struct Phy<S: EventSink = NoopSink> {
    config: PhyConfig,
    state: DriverState,
    monitor: LinkMonitor,
    sink: S,
}

impl Phy<NoopSink> {
    /// Create a driver that discards events
    pub const fn new(config: PhyConfig) -> Self {
        Self::with_sink(config, NoopSink)
    }
}

impl<S: EventSink> Phy<S> {
    /// Create a driver reporting events to `sink`
    pub const fn with_sink(config: PhyConfig, sink: S) -> Self {
        Self {
            config,
            state: DriverState::new(),
            monitor: LinkMonitor::from_config(&config),
            sink,
        }
    }

    // =========================================================================
    // Bring-up
    // =========================================================================

    /// Discover and configure the PHY
    ///
    /// Any failure leaves the interface unusable; there is no rollback.
    pub fn init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<PhyAddress> {
        let address = self.discover(mdio)?;
        self.configure(mdio, delay)?;

        #[cfg(feature = "defmt")]
        defmt::info!("PHY at {} initialized", address);

        Ok(address)
    }

    /// Scan the bus and remember the first responding address
    pub fn discover<M: MdioBus>(&mut self, mdio: &mut M) -> Result<PhyAddress> {
        discovery::discover(mdio, &mut self.state, &mut self.sink)
    }

    /// Reset, apply the vendor sequence and start auto-negotiation
    pub fn configure<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        let address = self.state.require_address()?;
        vendor::configure(mdio, delay, address, &self.config, &mut self.sink)
    }

    /// Advertise all modes and restart auto-negotiation
    pub fn negotiate<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        let address = self.state.require_address()?;
        autoneg::negotiate(mdio, address, &mut self.sink)
    }

    /// Soft reset through BMCR
    pub fn soft_reset<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        let address = self.state.require_address()?;
        ieee802_3::soft_reset(mdio, address.get(), delay, self.config.reset_budget)
    }

    // =========================================================================
    // Link
    // =========================================================================

    /// Run one link monitoring step, notifying `mac` on link-up
    pub fn poll_link<M, D, L>(&mut self, mdio: &mut M, delay: &mut D, mac: &mut L) -> Result<LinkState>
    where
        M: MdioBus,
        D: DelayNs,
        L: MacLink + ?Sized,
    {
        self.monitor
            .poll(mdio, delay, &mut self.state, mac, &mut self.sink)
    }

    /// Speed and duplex from the current negotiation result
    pub fn read_capability<M: MdioBus>(&mut self, mdio: &mut M) -> Result<LinkStatus> {
        capability::read_capability(mdio, self.state.require_address()?)
    }

    /// Disable auto-negotiation and force speed and duplex
    pub fn force_link<M: MdioBus>(&mut self, mdio: &mut M, status: LinkStatus) -> Result<()> {
        let address = self.state.require_address()?;
        ieee802_3::force_link(mdio, address.get(), status)
    }

    // =========================================================================
    // Identification
    // =========================================================================

    /// Identifier registers of the discovered PHY
    pub fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyId> {
        ieee802_3::read_phy_id(mdio, self.state.require_address()?.get())
    }

    /// Ability bits of the discovered PHY
    pub fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        ieee802_3::read_capabilities(mdio, self.state.require_address()?.get())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Configuration this driver was built with
    pub const fn config(&self) -> &PhyConfig {
        &self.config
    }

    /// Discovered address, if any
    pub const fn address(&self) -> Option<PhyAddress> {
        self.state.address()
    }

    /// Driver state
    pub const fn state(&self) -> &DriverState {
        &self.state
    }

    /// Link state recorded by the last [`poll_link`](Self::poll_link)
    pub const fn link_state(&self) -> LinkState {
        self.state.current_link
    }

    /// `true` if the last poll recorded the link as up
    pub const fn is_link_up(&self) -> bool {
        self.state.current_link.is_up()
    }

    /// Event sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Event sink, mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the driver and return the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::config::{Duplex, MonitorPolicy, Speed, VendorProfile};
    use crate::error::{ConfigError, DeviceError, Error};
    use crate::hal::wait::WaitBudget;
    use crate::internal::phy_regs::standard::{anar, bmcr, gbcr, phy_reg};
    use crate::phy::events::PhyEvent;
    use crate::test_utils::{MockDelay, MockMac, MockMdioBus, RecordingSink};

    fn board() -> MockMdioBus {
        let mdio = MockMdioBus::empty_bus();
        mdio.setup_gigabit_phy(7, 0x0022, 0x1622);
        mdio
    }

    fn generic() -> PhyConfig {
        PhyConfig::new()
            .with_profile(VendorProfile::Generic)
            .with_link_budget(WaitBudget::polls(5, 1))
    }

    #[test]
    fn bring_up_and_first_link() {
        let mut mdio = board();
        let mut delay = MockDelay::new();
        let mut mac = MockMac::new();
        let mut phy = Phy::with_sink(generic(), RecordingSink::new());

        let address = phy.init(&mut mdio, &mut delay).unwrap();
        assert_eq!(address.get(), 7);

        let anar_val = mdio.get_register(7, phy_reg::ANAR).unwrap();
        assert_eq!(anar_val & anar::ALL_10_100, anar::ALL_10_100);
        let gbcr_val = mdio.get_register(7, phy_reg::GBCR).unwrap();
        assert_eq!(gbcr_val & gbcr::ADV_1000, gbcr::ADV_1000);
        let restart = mdio.writes_to(7, phy_reg::BMCR);
        assert_ne!(restart.last().copied().unwrap() & bmcr::AN_RESTART, 0);

        mdio.simulate_link_up_1000_fd(7);
        assert_eq!(phy.poll_link(&mut mdio, &mut delay, &mut mac).unwrap(), LinkState::Up);
        assert_eq!(mac.applied, [(Speed::Mbps1000, Duplex::Full)]);
        assert!(phy.is_link_up());

        let events = &phy.sink().events;
        assert!(matches!(events[0], PhyEvent::Detected { .. }));
        assert!(events.contains(&PhyEvent::AutoNegotiationStarted));
        assert!(events.contains(&PhyEvent::LinkUp(LinkStatus::gigabit_full())));
    }

    #[test]
    fn init_fails_without_phy() {
        let mut mdio = MockMdioBus::empty_bus();
        let mut phy = Phy::new(generic());

        let err = phy.init(&mut mdio, &mut MockDelay::new()).unwrap_err();

        assert_eq!(err, Error::Device(DeviceError::NotFound));
        assert_eq!(phy.address(), None);
        assert!(mdio.get_writes().is_empty());
    }

    #[test]
    fn init_fails_without_autonegotiation() {
        let mut mdio = board();
        mdio.set_register(7, phy_reg::BMSR, 0);
        let mut phy = Phy::new(generic());

        let err = phy.init(&mut mdio, &mut MockDelay::new()).unwrap_err();
        assert_eq!(err, Error::Device(DeviceError::AutoNegotiationUnsupported));
    }

    #[test]
    fn init_twice_is_rejected() {
        let mut mdio = board();
        let mut delay = MockDelay::new();
        let mut phy = Phy::new(generic());

        phy.init(&mut mdio, &mut delay).unwrap();
        let err = phy.init(&mut mdio, &mut delay).unwrap_err();

        assert_eq!(err, Error::Config(ConfigError::AlreadyInitialized));
    }

    #[test]
    fn operations_need_discovery() {
        let mut mdio = board();
        let mut delay = MockDelay::new();
        let mut phy = Phy::new(generic());
        let not_init = Error::Config(ConfigError::NotInitialized);

        assert_eq!(phy.configure(&mut mdio, &mut delay).unwrap_err(), not_init);
        assert_eq!(phy.negotiate(&mut mdio).unwrap_err(), not_init);
        assert_eq!(phy.read_capability(&mut mdio).unwrap_err(), not_init);
        assert_eq!(
            phy.poll_link(&mut mdio, &mut delay, &mut MockMac::new()).unwrap_err(),
            not_init
        );
        assert!(mdio.get_reads().is_empty());
        assert!(mdio.get_writes().is_empty());
    }

    #[test]
    fn debounced_policy_from_config() {
        let mut mdio = board();
        let mut delay = MockDelay::new();
        let mut mac = MockMac::new();
        let mut phy = Phy::new(generic().with_policy(MonitorPolicy::DebouncedSample));
        phy.init(&mut mdio, &mut delay).unwrap();

        mdio.simulate_link_up_100_fd(7);
        phy.poll_link(&mut mdio, &mut delay, &mut mac).unwrap();
        phy.poll_link(&mut mdio, &mut delay, &mut mac).unwrap();

        assert_eq!(mac.applied, [(Speed::Mbps100, Duplex::Full)]);
        assert_eq!(phy.link_state(), LinkState::Up);
    }

    #[test]
    fn identification_after_discovery() {
        let mut mdio = board();
        let mut phy = Phy::new(generic());
        phy.discover(&mut mdio).unwrap();

        let id = phy.phy_id(&mut mdio).unwrap();
        assert_eq!(id, PhyId::new(0x0022, 0x1622));
        assert!(phy.capabilities(&mut mdio).unwrap().auto_negotiation);
    }

    #[test]
    fn force_link_disables_autonegotiation() {
        let mut mdio = board();
        let mut phy = Phy::new(generic());
        phy.discover(&mut mdio).unwrap();

        phy.force_link(&mut mdio, LinkStatus::fast_full()).unwrap();

        let value = mdio.get_register(7, phy_reg::BMCR).unwrap();
        assert_eq!(value & bmcr::AN_ENABLE, 0);
        assert_ne!(value & bmcr::SPEED_100, 0);
    }
}
