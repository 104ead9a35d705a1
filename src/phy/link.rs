//! Link monitoring
//!
//! [`LinkMonitor`] samples BMSR link status, waits for auto-negotiation to
//! complete when the link comes up, and tells the MAC the resolved speed and
//! duplex. It is called periodically by the owner of the PHY; there are no
//! interrupts.
//!
//! # Policies
//!
//! | Policy | Link down | Link up |
//! |--------|-----------|---------|
//! | [`ImmediateCheck`](MonitorPolicy::ImmediateCheck) | waits for link, then for AN; Down if the link never comes | up on the first sample: no wait |
//! | [`DebouncedSample`](MonitorPolicy::DebouncedSample) | one sample, no wait | waits for AN only on a change |
//!
//! Either way the MAC is told at most once per Down to Up transition and
//! never on Up to Down or on an unchanged sample.

use embedded_hal::delay::DelayNs;

use crate::driver::config::{Duplex, MonitorPolicy, PhyConfig, Speed};
use crate::driver::state::{DriverState, LinkState, PhyAddress};
use crate::error::{Error, IoError, Result};
use crate::hal::mdio::MdioBus;
use crate::hal::wait::{WaitBudget, wait_until};
use crate::phy::capability::read_capability;
use crate::phy::events::{EventSink, PhyEvent, emit};
use crate::phy::generic::ieee802_3;

// =============================================================================
// MAC Notification
// =============================================================================

/// Receiver of negotiated link parameters
///
/// Called once per link-up with the resolved speed and duplex. The MAC
/// reprograms itself; nothing is returned.
pub trait MacLink {
    /// Reconfigure the MAC for the negotiated link
    fn apply_config(&mut self, speed: Speed, duplex: Duplex);
}

impl<F: FnMut(Speed, Duplex)> MacLink for F {
    fn apply_config(&mut self, speed: Speed, duplex: Duplex) {
        self(speed, duplex)
    }
}

// =============================================================================
// Link Monitor
// =============================================================================

/// Link state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkMonitor {
    /// Sampling policy
    pub policy: MonitorPolicy,
    /// Wait for link status (immediate check)
    pub link_budget: WaitBudget,
    /// Wait for negotiation (immediate check)
    pub an_budget: WaitBudget,
    /// Wait for negotiation (debounced sample)
    pub debounced_an_budget: WaitBudget,
}

impl LinkMonitor {
    /// Monitor using the policy and budgets in `config`
    pub const fn from_config(config: &PhyConfig) -> Self {
        Self {
            policy: config.policy,
            link_budget: config.link_budget,
            an_budget: config.an_budget,
            debounced_an_budget: config.debounced_an_budget,
        }
    }

    /// Run one monitoring step
    ///
    /// Returns the link state recorded by this call. `mac` is notified on a
    /// Down to Up transition once negotiation has completed.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotInitialized`](crate::ConfigError::NotInitialized)
    ///   if no PHY address has been discovered
    /// - [`IoError::Timeout`] if the link came up but negotiation did not
    ///   finish; treat as link not ready
    /// - bus errors while reading the negotiated parameters
    pub fn poll<M, D, L, S>(
        &self,
        mdio: &mut M,
        delay: &mut D,
        state: &mut DriverState,
        mac: &mut L,
        sink: &mut S,
    ) -> Result<LinkState>
    where
        M: MdioBus,
        D: DelayNs,
        L: MacLink + ?Sized,
        S: EventSink + ?Sized,
    {
        let address = state.require_address()?;

        let result = match self.policy {
            MonitorPolicy::ImmediateCheck => {
                self.immediate_check(mdio, delay, address, state, mac, sink)
            }
            MonitorPolicy::DebouncedSample => {
                self.debounced_sample(mdio, delay, address, state, mac, sink)
            }
        };

        state.settle();
        result
    }

    fn immediate_check<M, D, L, S>(
        &self,
        mdio: &mut M,
        delay: &mut D,
        address: PhyAddress,
        state: &mut DriverState,
        mac: &mut L,
        sink: &mut S,
    ) -> Result<LinkState>
    where
        M: MdioBus,
        D: DelayNs,
        L: MacLink + ?Sized,
        S: EventSink + ?Sized,
    {
        let phy_addr = address.get();

        match ieee802_3::is_link_up(mdio, phy_addr) {
            // Already up: no negotiation wait
            Ok(true) => {}
            Ok(false) => {
                if let Err(e) =
                    wait_until(delay, self.link_budget, || ieee802_3::is_link_up(mdio, phy_addr))
                {
                    if e.is_timeout() {
                        emit(sink, PhyEvent::LinkWaitTimeout);
                    }
                    record_down(state, sink);
                    return Ok(LinkState::Down);
                }

                if let Err(e) = wait_for_an(mdio, delay, phy_addr, self.an_budget, sink) {
                    record_down(state, sink);
                    return Err(e);
                }
            }
            Err(_) => {
                record_down(state, sink);
                return Ok(LinkState::Down);
            }
        }

        if state.observe(LinkState::Up) {
            link_up(mdio, address, state, mac, sink)?;
        }
        Ok(LinkState::Up)
    }

    fn debounced_sample<M, D, L, S>(
        &self,
        mdio: &mut M,
        delay: &mut D,
        address: PhyAddress,
        state: &mut DriverState,
        mac: &mut L,
        sink: &mut S,
    ) -> Result<LinkState>
    where
        M: MdioBus,
        D: DelayNs,
        L: MacLink + ?Sized,
        S: EventSink + ?Sized,
    {
        let phy_addr = address.get();

        let sampled = LinkState::from_bit(ieee802_3::is_link_up(mdio, phy_addr)?);
        if !state.observe(sampled) {
            return Ok(sampled);
        }

        match sampled {
            LinkState::Down => {
                emit(sink, PhyEvent::LinkDown);
            }
            LinkState::Up => {
                // Up stays recorded if negotiation stalls
                wait_for_an(mdio, delay, phy_addr, self.debounced_an_budget, sink)?;
                link_up(mdio, address, state, mac, sink)?;
            }
        }
        Ok(sampled)
    }
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::from_config(&PhyConfig::new())
    }
}

fn wait_for_an<M, D, S>(
    mdio: &mut M,
    delay: &mut D,
    phy_addr: u8,
    budget: WaitBudget,
    sink: &mut S,
) -> Result<()>
where
    M: MdioBus,
    D: DelayNs,
    S: EventSink + ?Sized,
{
    match wait_until(delay, budget, || ieee802_3::is_an_complete(mdio, phy_addr)) {
        Ok(_) => {
            emit(sink, PhyEvent::AutoNegotiationComplete);
            Ok(())
        }
        Err(Error::Io(IoError::Timeout)) => {
            emit(sink, PhyEvent::AutoNegotiationTimeout);
            Err(IoError::Timeout.into())
        }
        Err(e) => Err(e),
    }
}

/// Record Down, reporting the transition if the link was up
fn record_down<S: EventSink + ?Sized>(state: &mut DriverState, sink: &mut S) {
    if state.observe(LinkState::Down) {
        emit(sink, PhyEvent::LinkDown);
    }
}

/// Resolve the negotiated parameters and hand them to the MAC
///
/// A failed read leaves the link recorded as Down so the next call retries.
fn link_up<M, L, S>(
    mdio: &mut M,
    address: PhyAddress,
    state: &mut DriverState,
    mac: &mut L,
    sink: &mut S,
) -> Result<()>
where
    M: MdioBus,
    L: MacLink + ?Sized,
    S: EventSink + ?Sized,
{
    let status = match read_capability(mdio, address) {
        Ok(status) => status,
        Err(e) => {
            state.current_link = LinkState::Down;
            return Err(e);
        }
    };

    mac.apply_config(status.speed, status.duplex);
    emit(sink, PhyEvent::LinkUp(status));
    Ok(())
}
