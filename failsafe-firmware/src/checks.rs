//! Board health checks registered with the supervisor

use defmt::*;
use embassy_rp::gpio::Input;

use failsafe_core::HealthCheck;

use crate::channels;

/// Supply monitor check
///
/// The power-good output of the supply supervisor must read high.
pub struct SupplyCheck {
    power_good: Input<'static>,
}

impl SupplyCheck {
    pub fn new(power_good: Input<'static>) -> Self {
        Self { power_good }
    }
}

impl HealthCheck for SupplyCheck {
    fn is_healthy(&mut self) -> bool {
        self.power_good.is_high()
    }
}

/// Background task liveness check
///
/// Healthy while the heartbeat counter keeps moving between feeds. The
/// first evaluation only records a baseline, since spawned tasks have not
/// run yet when the main loop feeds for the first time.
pub struct HeartbeatCheck {
    last_seen: Option<u32>,
}

impl HeartbeatCheck {
    pub const fn new() -> Self {
        Self { last_seen: None }
    }
}

impl Default for HeartbeatCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for HeartbeatCheck {
    fn is_healthy(&mut self) -> bool {
        let count = channels::heartbeat_count();
        let alive = match self.last_seen {
            Some(last) => last != count,
            None => true,
        };

        if !alive {
            warn!("Heartbeat stuck at {}", count);
        }

        self.last_seen = Some(count);
        alive
    }
}
