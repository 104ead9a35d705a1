//! PHY events
//!
//! Bring-up and link monitoring report what they observe as [`PhyEvent`]s
//! delivered to an [`EventSink`]. Sinks are optional: [`NoopSink`] drops
//! everything, and no code path depends on whether an event was consumed.
//! With the `defmt` feature each event is also logged.

use crate::driver::state::PhyAddress;
use crate::phy::generic::{LinkStatus, PhyId};

/// Something the PHY core observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyEvent {
    /// A transceiver answered discovery
    Detected {
        /// Bus address
        address: PhyAddress,
        /// Identifier registers
        id: PhyId,
    },
    /// Discovery found no transceiver
    NotFound,
    /// BMCR.RESET did not self-clear in time
    ResetTimeout,
    /// A vendor register was read back after programming
    VendorReadback {
        /// MMD device, or `None` for a Clause 22 / debug-port register
        devad: Option<u8>,
        /// Register number within the device
        register: u16,
        /// Value that was written
        written: u16,
        /// Value read back
        read: u16,
    },
    /// BMSR reports no auto-negotiation ability
    AutoNegotiationUnsupported,
    /// Auto-negotiation advertised and restarted
    AutoNegotiationStarted,
    /// Auto-negotiation finished after link came up
    AutoNegotiationComplete,
    /// Link came up but negotiation did not finish in time
    AutoNegotiationTimeout,
    /// Link came up with the given parameters
    LinkUp(LinkStatus),
    /// Link went down
    LinkDown,
    /// Link did not come up within the wait budget
    LinkWaitTimeout,
}

/// Consumer of [`PhyEvent`]s
pub trait EventSink {
    /// Receive one event
    fn record(&mut self, event: PhyEvent);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    #[inline(always)]
    fn record(&mut self, _event: PhyEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: PhyEvent) {
        (**self).record(event);
    }
}

/// Deliver an event to the sink and mirror it to the log
pub(crate) fn emit<S: EventSink + ?Sized>(sink: &mut S, event: PhyEvent) {
    #[cfg(feature = "defmt")]
    match event {
        PhyEvent::Detected { address, id } => {
            defmt::info!("PHY detected at address {}: {}", address, id);
        }
        PhyEvent::NotFound => defmt::warn!("no PHY found on MDIO bus"),
        PhyEvent::ResetTimeout => defmt::warn!("PHY soft reset timed out"),
        PhyEvent::VendorReadback {
            devad,
            register,
            written,
            read,
        } => {
            defmt::debug!(
                "vendor reg {}/{=u16:#x}: wrote {=u16:#x}, read {=u16:#x}",
                devad,
                register,
                written,
                read
            );
        }
        PhyEvent::AutoNegotiationUnsupported => {
            defmt::warn!("PHY does not support auto-negotiation");
        }
        PhyEvent::AutoNegotiationStarted => defmt::debug!("auto-negotiation restarted"),
        PhyEvent::AutoNegotiationComplete => defmt::debug!("auto-negotiation complete"),
        PhyEvent::AutoNegotiationTimeout => defmt::warn!("auto-negotiation timed out"),
        PhyEvent::LinkUp(status) => defmt::info!("link up: {}", status),
        PhyEvent::LinkDown => defmt::info!("link down"),
        PhyEvent::LinkWaitTimeout => defmt::debug!("link wait timed out"),
    }

    sink.record(event);
}
