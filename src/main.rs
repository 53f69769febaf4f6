use anyhow::Result;
use config::Config;
use telemetry::init_tracing;
use tracing::info;
use wwtp_energy::{compute, config, telemetry};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;
    let report = compute(&cfg.plant);

    info!(
        flow_m3_d = cfg.plant.flow_m3_d,
        total_power_kw = report.total_power.value,
        total_daily_energy_kwh = report.total_daily_energy.value,
        total_energy_per_m3_kwh = report.total_energy_per_m3.value,
        "plant energy demand"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
