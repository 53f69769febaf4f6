use tracing::debug;

use super::constants::*;
use super::inputs::PlantInputs;
use super::report::{EnergyReport, MetricKey};

/// Maps a degenerate quotient (zero or NaN) to +0.0
fn zero_default(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Stateless plant energy model
///
/// Total over all numeric inputs: nothing is validated, and the only guards are
/// the zero defaults on the aeration and per-m3 quotients.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyCalculator;

impl EnergyCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn aeration_power_kw(&self, otr_kg_o2_h: f64) -> f64 {
        zero_default(otr_kg_o2_h / SAE_KG_O2_PER_KWH)
    }

    /// Anoxic zone mixing (kW)
    pub fn mixing_power_kw(&self, anoxic_volume_m3: f64, mixing_kw_per_1000m3: f64) -> f64 {
        anoxic_volume_m3 * mixing_kw_per_1000m3 / 1000.0
    }

    /// Hydraulic power `rho * g * Q * H`, with Q in m3/d and the result in kW
    pub fn influent_pumping_power_kw(&self, flow_m3_d: f64, head_m: f64) -> f64 {
        WATER_DENSITY_KG_M3 * GRAVITY_M_S2 * flow_m3_d * head_m / 1000.0 / SECONDS_PER_DAY
    }

    pub fn external_pumping_power_kw(&self, flow_m3_d: f64, ras_ratio: f64) -> f64 {
        flow_m3_d * ras_ratio * EXTERNAL_RECIRCULATION_KWH_M3 / HOURS_PER_DAY
    }

    pub fn internal_pumping_power_kw(&self, flow_m3_d: f64, ir_ratio: f64) -> f64 {
        flow_m3_d * ir_ratio * INTERNAL_RECIRCULATION_KWH_M3 / HOURS_PER_DAY
    }

    pub fn wastage_pumping_power_kw(&self, wastage_flow_m3_d: f64) -> f64 {
        wastage_flow_m3_d * WASTAGE_KWH_M3 / HOURS_PER_DAY
    }

    /// Dewatering, with solids production converted from kg/d to t/d
    pub fn dewatering_power_kw(&self, tss_production_kg_d: f64) -> f64 {
        tss_production_kg_d / 1000.0 * DEWATERING_KWH_PER_TDM / HOURS_PER_DAY
    }

    /// Remaining plant load from the empirical regressions
    pub fn other_power_kw(&self, flow_m3_d: f64, has_primary_settler: bool) -> f64 {
        let regression = if has_primary_settler {
            OTHER_POWER_WITH_PST
        } else {
            OTHER_POWER_WITHOUT_PST
        };
        regression.daily_energy_kwh(flow_m3_d) / HOURS_PER_DAY
    }

    /// Daily energy per treated m3; 0 when there is no flow
    pub fn energy_per_m3(&self, total_power_kw: f64, flow_m3_d: f64) -> f64 {
        if flow_m3_d == 0.0 {
            return 0.0;
        }
        zero_default(total_power_kw * HOURS_PER_DAY / flow_m3_d)
    }

    pub fn compute(&self, inputs: &PlantInputs) -> EnergyReport {
        let q = inputs.flow_m3_d;

        let aeration_power = self.aeration_power_kw(inputs.otr_kg_o2_h);
        let mixing_power =
            self.mixing_power_kw(inputs.anoxic_volume_m3, inputs.anoxic_mixing_kw_per_1000m3);

        let pumping_power_influent = self.influent_pumping_power_kw(q, inputs.influent_head_m);
        let pumping_power_external = self.external_pumping_power_kw(q, inputs.ras_ratio);
        let pumping_power_internal = self.internal_pumping_power_kw(q, inputs.ir_ratio);
        let pumping_power_wastage = self.wastage_pumping_power_kw(inputs.wastage_flow_m3_d);
        let pumping_power = pumping_power_influent
            + pumping_power_external
            + pumping_power_internal
            + pumping_power_wastage;

        let dewatering_power = self.dewatering_power_kw(inputs.tss_production_kg_d);
        let other_power = self.other_power_kw(q, inputs.has_primary_settler);

        let total_power =
            aeration_power + mixing_power + pumping_power + dewatering_power + other_power;

        let report = EnergyReport {
            sae: MetricKey::Sae.metric(SAE_KG_O2_PER_KWH),
            aeration_power: MetricKey::AerationPower.metric(aeration_power),
            mixing_power: MetricKey::MixingPower.metric(mixing_power),
            pumping_power_influent: MetricKey::PumpingPowerInfluent.metric(pumping_power_influent),
            pumping_power_external: MetricKey::PumpingPowerExternal.metric(pumping_power_external),
            pumping_power_internal: MetricKey::PumpingPowerInternal.metric(pumping_power_internal),
            pumping_power_wastage: MetricKey::PumpingPowerWastage.metric(pumping_power_wastage),
            pumping_power: MetricKey::PumpingPower.metric(pumping_power),
            dewatering_power: MetricKey::DewateringPower.metric(dewatering_power),
            other_power: MetricKey::OtherPower.metric(other_power),
            total_power: MetricKey::TotalPower.metric(total_power),
            total_daily_energy: MetricKey::TotalDailyEnergy.metric(total_power * HOURS_PER_DAY),
            total_energy_per_m3: MetricKey::TotalEnergyPerM3
                .metric(self.energy_per_m3(total_power, q)),
        };

        debug!(
            total_power_kw = total_power,
            has_primary_settler = inputs.has_primary_settler,
            report = ?report,
            "computed plant energy demand"
        );

        report
    }
}

/// Compute the energy breakdown for one set of plant inputs
pub fn compute(inputs: &PlantInputs) -> EnergyReport {
    EnergyCalculator::new().compute(inputs)
}
