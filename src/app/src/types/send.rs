use serde::{Deserialize, Serialize};

use super::credentials::{Credentials, Device};

/// Time the simulated transmission takes before it settles
pub const SEND_DELAY_MILLIS: u64 = 2000;

/// Share of simulated transmissions that succeed, in percent
pub const SEND_SUCCESS_PERCENT: u32 = 70;

/// Result of a simulated credential transmission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SendOutcome {
    Delivered { device: Device },
    Failed { device: Device },
}

impl SendOutcome {
    /// Map a uniformly distributed sample onto an outcome.
    ///
    /// `SEND_SUCCESS_PERCENT` of all samples (taken modulo 100) yield `Delivered`.
    pub fn roll(device: Device, sample: u32) -> Self {
        if sample % 100 < SEND_SUCCESS_PERCENT {
            Self::Delivered { device }
        } else {
            Self::Failed { device }
        }
    }

    pub fn device(&self) -> Device {
        match self {
            Self::Delivered { device } | Self::Failed { device } => *device,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// State of the simulated send action
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SendState {
    #[default]
    Idle,
    Sending {
        credentials: Credentials,
    },
}

impl SendState {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }
}
