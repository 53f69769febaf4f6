use serde::{ser::SerializeMap, Serialize, Serializer};
use std::fmt;
use strum::{AsRefStr, EnumCount, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Report lookup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

/// Names of the reported quantities, in output order
///
/// The string form is the wire name used as the JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum MetricKey {
    #[strum(to_string = "SAE", serialize = "sae")]
    Sae,
    AerationPower,
    MixingPower,
    PumpingPowerInfluent,
    PumpingPowerExternal,
    PumpingPowerInternal,
    PumpingPowerWastage,
    PumpingPower,
    DewateringPower,
    OtherPower,
    TotalPower,
    TotalDailyEnergy,
    #[strum(serialize = "total_energy_per_m3")]
    TotalEnergyPerM3,
}

impl MetricKey {
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKey::Sae => "kg_O2/kWh",
            MetricKey::TotalDailyEnergy => "kWh/d",
            MetricKey::TotalEnergyPerM3 => "kWh/m3",
            _ => "kW",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MetricKey::Sae => "kg O2 that can be aerated with 1 kWh of energy",
            MetricKey::AerationPower => "Power needed for aeration (=OTRf/SAE)",
            MetricKey::MixingPower => "Power needed for anoxic mixing",
            MetricKey::PumpingPowerInfluent => "Power needed for pumping influent",
            MetricKey::PumpingPowerExternal => "Power needed for pumping (external recirculation)",
            MetricKey::PumpingPowerInternal => "Power needed for pumping (internal recirculation)",
            MetricKey::PumpingPowerWastage => "Power needed for pumping (wastage recirculation)",
            MetricKey::PumpingPower => "Power needed for pumping (ext+int+was)",
            MetricKey::DewateringPower => "Power needed for dewatering",
            MetricKey::OtherPower => "Power needed for 'other' (20% of total)",
            MetricKey::TotalPower => "Total power needed",
            MetricKey::TotalDailyEnergy => "Total daily energy needed",
            MetricKey::TotalEnergyPerM3 => "Total energy needed per m3",
        }
    }

    /// Tag a raw value with this key's unit and description
    pub fn metric(self, value: f64) -> Metric {
        Metric {
            value,
            unit: self.unit(),
            description: self.description(),
        }
    }
}

/// A single reported quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub value: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

/// Power and energy breakdown of a plant
///
/// Power figures are averages in kW. Serializes as an object keyed by
/// [`MetricKey`] wire names, in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReport {
    pub sae: Metric,
    pub aeration_power: Metric,
    pub mixing_power: Metric,
    pub pumping_power_influent: Metric,
    pub pumping_power_external: Metric,
    pub pumping_power_internal: Metric,
    pub pumping_power_wastage: Metric,
    pub pumping_power: Metric,
    pub dewatering_power: Metric,
    pub other_power: Metric,
    pub total_power: Metric,
    pub total_daily_energy: Metric,
    pub total_energy_per_m3: Metric,
}

impl EnergyReport {
    pub fn get(&self, key: MetricKey) -> &Metric {
        match key {
            MetricKey::Sae => &self.sae,
            MetricKey::AerationPower => &self.aeration_power,
            MetricKey::MixingPower => &self.mixing_power,
            MetricKey::PumpingPowerInfluent => &self.pumping_power_influent,
            MetricKey::PumpingPowerExternal => &self.pumping_power_external,
            MetricKey::PumpingPowerInternal => &self.pumping_power_internal,
            MetricKey::PumpingPowerWastage => &self.pumping_power_wastage,
            MetricKey::PumpingPower => &self.pumping_power,
            MetricKey::DewateringPower => &self.dewatering_power,
            MetricKey::OtherPower => &self.other_power,
            MetricKey::TotalPower => &self.total_power,
            MetricKey::TotalDailyEnergy => &self.total_daily_energy,
            MetricKey::TotalEnergyPerM3 => &self.total_energy_per_m3,
        }
    }

    /// Look a metric up by its wire name (e.g. `"SAE"`, `"total_power"`)
    pub fn metric_by_name(&self, name: &str) -> Result<&Metric, ReportError> {
        let key: MetricKey = name
            .parse()
            .map_err(|_| ReportError::UnknownMetric(name.to_string()))?;
        Ok(self.get(key))
    }

    /// All metrics in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, &Metric)> + '_ {
        MetricKey::iter().map(move |key| (key, self.get(key)))
    }

    /// Sum of the five subsystem powers (kW)
    pub fn subsystem_sum_kw(&self) -> f64 {
        self.aeration_power.value
            + self.mixing_power.value
            + self.pumping_power.value
            + self.dewatering_power.value
            + self.other_power.value
    }
}

impl Serialize for EnergyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MetricKey::COUNT))?;
        for (key, metric) in self.iter() {
            map.serialize_entry(key.as_ref(), metric)?;
        }
        map.end()
    }
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, metric) in self.iter() {
            writeln!(
                f,
                "{:<24} {:>12.4} {:<10} {}",
                key.as_ref(),
                metric.value,
                metric.unit,
                metric.description
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::{compute, PlantInputs};

    #[test]
    fn test_wire_names() {
        assert_eq!(MetricKey::Sae.as_ref(), "SAE");
        assert_eq!(MetricKey::PumpingPowerInfluent.as_ref(), "pumping_power_influent");
        assert_eq!(MetricKey::TotalEnergyPerM3.as_ref(), "total_energy_per_m3");
        assert_eq!("SAE".parse::<MetricKey>().unwrap(), MetricKey::Sae);
        assert_eq!("sae".parse::<MetricKey>().unwrap(), MetricKey::Sae);
    }

    #[test]
    fn test_units() {
        assert_eq!(MetricKey::Sae.unit(), "kg_O2/kWh");
        assert_eq!(MetricKey::AerationPower.unit(), "kW");
        assert_eq!(MetricKey::TotalDailyEnergy.unit(), "kWh/d");
        assert_eq!(MetricKey::TotalEnergyPerM3.unit(), "kWh/m3");
    }

    #[test]
    fn test_iter_covers_every_metric_in_order() {
        let report = compute(&PlantInputs::default());
        let keys: Vec<MetricKey> = report.iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), MetricKey::COUNT);
        assert_eq!(keys.first(), Some(&MetricKey::Sae));
        assert_eq!(keys.last(), Some(&MetricKey::TotalEnergyPerM3));
        for (key, metric) in report.iter() {
            assert_eq!(metric.unit, key.unit());
            assert_eq!(metric.description, key.description());
        }
    }

    #[test]
    fn test_metric_by_name() {
        let report = compute(&PlantInputs::default());
        assert_eq!(report.metric_by_name("aeration_power").unwrap().value, 45.0);
        assert_eq!(
            report.metric_by_name("power").unwrap_err(),
            ReportError::UnknownMetric("power".to_string())
        );
    }

    #[test]
    fn test_serializes_as_keyed_object() {
        let report = compute(&PlantInputs::default());
        let json = serde_json::to_value(&report).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), MetricKey::COUNT);
        assert_eq!(json["SAE"]["value"], 4.0);
        assert_eq!(json["SAE"]["unit"], "kg_O2/kWh");
        assert_eq!(json["mixing_power"]["description"], "Power needed for anoxic mixing");
    }

    #[test]
    fn test_display_lists_every_metric() {
        let report = compute(&PlantInputs::default());
        let table = report.to_string();
        assert_eq!(table.lines().count(), MetricKey::COUNT);
        assert!(table.starts_with("SAE"));
        assert!(table.contains("total_energy_per_m3"));
    }
}
