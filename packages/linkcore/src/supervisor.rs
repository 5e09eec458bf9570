use log::{info, warn};

use crate::event::{disconnect_reason_label, LinkEvent};
use crate::outcome::{Outcome, OutcomeLatch};
use crate::state::{ConnectionState, LinkPhase};

/// What the driver layer must do next after feeding an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkDirective {
    /// Issue (or re-issue) an association request.
    Associate,
    /// Bring-up is over; unblock the caller with this outcome.
    Resolve(Outcome),
    /// Nothing to do. Events arriving before `begin()` or after resolution
    /// land here.
    Ignore,
}

/// Event-driven supervisor for one station link.
///
/// Owns the link state and the per-cycle outcome latch; no process-wide
/// mutable state. One instance serves successive bring-up cycles, each
/// opened with [`begin`](Self::begin). Single-flight: callers must not run
/// two cycles concurrently.
pub struct ConnectionSupervisor {
    state: ConnectionState,
    latch: OutcomeLatch,
}

impl ConnectionSupervisor {
    pub const fn new(retry_limit: u32) -> Self {
        Self {
            state: ConnectionState::new(retry_limit),
            latch: OutcomeLatch::new(),
        }
    }

    /// Opens a bring-up cycle: fresh latch, zeroed retry counter.
    pub fn begin(&mut self) {
        self.state.phase = LinkPhase::Associating;
        self.state.retry_count = 0;
        self.latch = OutcomeLatch::new();
    }

    /// Applies one lifecycle event in delivery order.
    ///
    /// The latch makes resolution first-set-wins: once an outcome is
    /// latched, every further event is ignored for the rest of the cycle.
    pub fn on_event(&mut self, event: LinkEvent) -> LinkDirective {
        if self.latch.is_resolved() {
            info!("link event {} ignored after resolution", event.kind());
            return LinkDirective::Ignore;
        }
        if self.state.phase == LinkPhase::Idle {
            warn!("link event {} before bring-up started", event.kind());
            return LinkDirective::Ignore;
        }

        match event {
            LinkEvent::LinkStart => LinkDirective::Associate,
            LinkEvent::LinkLost { reason } => {
                if self.state.retries_left() {
                    self.state.retry_count += 1;
                    self.state.phase = LinkPhase::Retrying;
                    info!(
                        "link lost ({}), retry {} of {}",
                        disconnect_reason_label(reason),
                        self.state.retry_count,
                        self.state.retry_limit
                    );
                    LinkDirective::Associate
                } else {
                    self.state.phase = LinkPhase::Failed;
                    self.latch.set(Outcome::Failed);
                    warn!(
                        "link lost ({}), retry budget of {} exhausted",
                        disconnect_reason_label(reason),
                        self.state.retry_limit
                    );
                    LinkDirective::Resolve(Outcome::Failed)
                }
            }
            LinkEvent::AddressAcquired { addr } => {
                self.state.retry_count = 0;
                self.state.phase = LinkPhase::Connected;
                self.latch.set(Outcome::Connected);
                info!(
                    "address acquired {}.{}.{}.{}",
                    addr[0], addr[1], addr[2], addr[3]
                );
                LinkDirective::Resolve(Outcome::Connected)
            }
        }
    }

    pub const fn outcome(&self) -> Option<Outcome> {
        self.latch.get()
    }

    pub const fn phase(&self) -> LinkPhase {
        self.state.phase
    }

    pub const fn state(&self) -> &ConnectionState {
        &self.state
    }
}
