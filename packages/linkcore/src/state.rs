#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkPhase {
    Idle,
    Associating,
    Retrying,
    Connected,
    Failed,
}

impl LinkPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Associating => "Associating",
            Self::Retrying => "Retrying",
            Self::Connected => "Connected",
            Self::Failed => "Failed",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Connected | Self::Failed)
    }
}

/// Mutable link state, exclusively owned by the supervisor.
///
/// Invariant: `retry_count <= retry_limit`. A `Connected` phase implies the
/// counter was reset to zero on the transition that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionState {
    pub phase: LinkPhase,
    pub retry_count: u32,
    pub retry_limit: u32,
}

impl ConnectionState {
    pub const fn new(retry_limit: u32) -> Self {
        Self {
            phase: LinkPhase::Idle,
            retry_count: 0,
            retry_limit,
        }
    }

    pub const fn retries_left(&self) -> bool {
        self.retry_count < self.retry_limit
    }
}
