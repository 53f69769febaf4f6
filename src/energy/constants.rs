//! Fixed factors used by the plant energy model.

/// Standard aeration efficiency (kg O2 per kWh)
pub const SAE_KG_O2_PER_KWH: f64 = 4.0;

/// Water density (kg/m3)
pub const WATER_DENSITY_KG_M3: f64 = 1000.0;

/// Gravitational acceleration (m/s2)
pub const GRAVITY_M_S2: f64 = 9.81;

/// External (return sludge) recirculation pumping factor (kWh/m3)
pub const EXTERNAL_RECIRCULATION_KWH_M3: f64 = 0.008;

/// Internal (anoxic) recirculation pumping factor (kWh/m3)
pub const INTERNAL_RECIRCULATION_KWH_M3: f64 = 0.004;

/// Sludge wastage pumping factor (kWh/m3)
pub const WASTAGE_KWH_M3: f64 = 0.050;

/// Dewatering energy per tonne of dry matter (kWh/tDM)
pub const DEWATERING_KWH_PER_TDM: f64 = 20.0;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// Linear regression for the remaining plant load, `slope * Q + intercept` (kWh/d).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OtherPowerRegression {
    pub slope_kwh_per_m3: f64,
    pub intercept_kwh_d: f64,
}

impl OtherPowerRegression {
    pub fn daily_energy_kwh(&self, flow_m3_d: f64) -> f64 {
        self.slope_kwh_per_m3 * flow_m3_d + self.intercept_kwh_d
    }
}

/// Plants with a primary settling tank
pub const OTHER_POWER_WITH_PST: OtherPowerRegression = OtherPowerRegression {
    slope_kwh_per_m3: 0.0124,
    intercept_kwh_d: 337.77,
};

/// Plants without primary settling
pub const OTHER_POWER_WITHOUT_PST: OtherPowerRegression = OtherPowerRegression {
    slope_kwh_per_m3: 0.0165,
    intercept_kwh_d: 337.59,
};
