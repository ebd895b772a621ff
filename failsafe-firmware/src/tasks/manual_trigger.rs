//! Manual safe-mode button
//!
//! A debounced press on the safe-mode button forces the supervisor into
//! safe mode with the `Manual` reason.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::settings::DEBOUNCE_MS;
use crate::Supervisor;

/// Button task
///
/// The button is active low. Once safe mode is entered by any cause there
/// is nothing left to do, so the task exits.
#[embassy_executor::task]
pub async fn manual_trigger_task(mut button: Input<'static>, supervisor: &'static Supervisor) {
    info!("Manual trigger task started");

    loop {
        button.wait_for_falling_edge().await;
        Timer::after_millis(DEBOUNCE_MS as u64).await;

        if button.is_low() {
            warn!("Safe-mode button pressed");
            supervisor.trigger_manual_safe_mode();
        }

        if supervisor.is_safe_mode() {
            info!(
                "Safe mode latched ({}), manual trigger task exiting",
                supervisor.last_failure_reason()
            );
            return;
        }
    }
}
