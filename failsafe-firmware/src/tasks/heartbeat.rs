//! Heartbeat task
//!
//! Proves the executor still schedules background work. The "heartbeat"
//! health check fails if the counter stops moving.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels;
use crate::settings::HEARTBEAT_PERIOD_MS;

#[embassy_executor::task]
pub async fn heartbeat_task() {
    info!("Heartbeat task started");

    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_PERIOD_MS as u64));

    loop {
        channels::beat();
        ticker.next().await;
    }
}
