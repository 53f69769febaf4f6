/// Plant Energy Model
///
/// Derives the electrical power draw of a wastewater treatment plant for five
/// subsystems (aeration, anoxic mixing, pumping, dewatering, other) from a handful
/// of process variables, and sums them into daily and per-m3 totals.

pub mod calculator;
pub mod constants;
pub mod inputs;
pub mod report;

pub use calculator::{compute, EnergyCalculator};
pub use inputs::PlantInputs;
pub use report::{EnergyReport, Metric, MetricKey, ReportError};
