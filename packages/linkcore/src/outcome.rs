/// Terminal result of one link bring-up attempt. The only values that cross
/// the supervisor boundary; intermediate phases never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Connected,
    Failed,
}

impl Outcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Failed => "failed",
        }
    }
}

/// First-set-wins outcome latch, scoped to a single bring-up cycle.
///
/// Setting after resolution is a no-op, not an error, so racing loss and
/// address-acquisition events resolve in delivery order and only one outcome
/// is ever observable from one cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeLatch {
    slot: Option<Outcome>,
}

impl OutcomeLatch {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Latches `outcome` if unresolved. Returns whether this call won.
    pub fn set(&mut self, outcome: Outcome) -> bool {
        if self.slot.is_some() {
            return false;
        }
        self.slot = Some(outcome);
        true
    }

    pub const fn get(&self) -> Option<Outcome> {
        self.slot
    }

    pub const fn is_resolved(&self) -> bool {
        self.slot.is_some()
    }
}
