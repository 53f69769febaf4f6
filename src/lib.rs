pub mod config;
pub mod energy;
pub mod telemetry;

pub use energy::{compute, EnergyCalculator, EnergyReport, Metric, MetricKey, PlantInputs};
