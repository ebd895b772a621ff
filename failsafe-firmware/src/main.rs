//! Failsafe - reference firmware
//!
//! Runs the fail-safe supervisor on an RP2040 board. The main loop feeds
//! the supervisor every period and only drives its output while the
//! supervisor reports the normal state. Safe mode is terminal: the output
//! stays off until the board is reset.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use failsafe_core::traits::DefmtSink;
use failsafe_core::{HealthCheck, SharedSupervisor, SupervisorConfig};

mod channels;
mod checks;
mod clock;
mod settings;
mod tasks;

use checks::{HeartbeatCheck, SupplyCheck};
use clock::EmbassyClock;

/// Health check slots
pub const MAX_CHECKS: usize = 4;

/// Supervisor shared between the main loop and the button task
pub type Supervisor =
    SharedSupervisor<'static, CriticalSectionRawMutex, EmbassyClock, DefmtSink, MAX_CHECKS>;

static SUPERVISOR: StaticCell<Supervisor> = StaticCell::new();
static SUPPLY_CHECK: StaticCell<SupplyCheck> = StaticCell::new();
static HEARTBEAT_CHECK: StaticCell<HeartbeatCheck> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Failsafe firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let supervisor: &'static Supervisor =
        SUPERVISOR.init(SharedSupervisor::new(EmbassyClock, DefmtSink));

    // Power-good output of the supply monitor, high when the rail is in range
    let power_good = Input::new(p.PIN_22, Pull::Down);
    register(supervisor, "supply", SUPPLY_CHECK.init(SupplyCheck::new(power_good)));
    register(supervisor, "heartbeat", HEARTBEAT_CHECK.init(HeartbeatCheck::new()));

    let config = SupervisorConfig::with_timeout(settings::LOOP_TIMEOUT_MS);
    if let Err(e) = supervisor.initialize_with(&config) {
        warn!("Supervisor already initialized: {:?}", e);
    }
    info!(
        "Supervisor armed: {} ms budget, {} checks",
        config.loop_timeout_ms,
        supervisor.with(|sup| sup.check_count())
    );

    // Safe-mode button, active low
    let button = Input::new(p.PIN_15, Pull::Up);

    spawner.spawn(tasks::heartbeat_task()).unwrap();
    spawner
        .spawn(tasks::manual_trigger_task(button, supervisor))
        .unwrap();

    info!("All tasks spawned, entering main loop");

    // The status LED stands in for the outputs the application actuates
    let mut output = Output::new(p.PIN_25, Level::Low);
    let mut ticker = Ticker::every(Duration::from_millis(settings::LOOP_PERIOD_MS as u64));
    let mut outputs_disabled = false;

    loop {
        let state = supervisor.feed();

        if state.outputs_allowed() {
            output.toggle();
        } else if !outputs_disabled {
            output.set_low();
            outputs_disabled = true;
            error!(
                "Outputs disabled: {} ({} ms since last good feed)",
                supervisor.last_failure_reason(),
                supervisor.with(|sup| sup.elapsed_since_feed_ms())
            );
        }

        ticker.next().await;
    }
}

/// Register a check, failing safe if the registry is full
fn register(
    supervisor: &'static Supervisor,
    name: &'static str,
    check: &'static mut (dyn HealthCheck + Send),
) {
    if let Err(e) = supervisor.register_check(name, check) {
        error!("Cannot register check {=str}: {:?}", name, e);
        supervisor.mark_critical_error("Check registry full");
    }
}
