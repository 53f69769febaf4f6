use serde::{Deserialize, Serialize};

/// Process variables of a treatment plant for one energy calculation
///
/// Every field is accepted as-is: zero and negative values are not rejected and
/// simply propagate through the formulas. Deserialization accepts both the field
/// names below and the short process symbols (`Q`, `Qwas`, `RAS`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantInputs {
    /// Influent flowrate (m3/d)
    #[serde(alias = "Q")]
    pub flow_m3_d: f64,

    /// Sludge wastage flowrate (m3/d)
    #[serde(alias = "Qwas")]
    pub wastage_flow_m3_d: f64,

    /// Return activated sludge recycle ratio
    #[serde(alias = "RAS")]
    pub ras_ratio: f64,

    /// Oxygen transfer requirement (kg O2/h)
    #[serde(alias = "OTRf")]
    pub otr_kg_o2_h: f64,

    /// Anoxic mixing power density (kW per 1000 m3)
    #[serde(alias = "Anoxic_mixing_energy")]
    pub anoxic_mixing_kw_per_1000m3: f64,

    /// Internal recirculation ratio
    #[serde(alias = "IR")]
    pub ir_ratio: f64,

    /// Total suspended solids production (kg/d)
    #[serde(alias = "P_X_TSS")]
    pub tss_production_kg_d: f64,

    /// Influent pumping lift plus friction head (m)
    #[serde(alias = "influent_H")]
    pub influent_head_m: f64,

    /// Whether the plant has a primary settling tank
    #[serde(alias = "is_PST")]
    pub has_primary_settler: bool,

    /// Anoxic reactor volume (m3)
    #[serde(alias = "V_nox")]
    pub anoxic_volume_m3: f64,
}

impl PlantInputs {
    /// Build inputs from the ten process variables in their conventional order:
    /// `Q, Qwas, RAS, OTRf, Anoxic_mixing_energy, IR, P_X_TSS, influent_H, is_PST, V_nox`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flow_m3_d: f64,
        wastage_flow_m3_d: f64,
        ras_ratio: f64,
        otr_kg_o2_h: f64,
        anoxic_mixing_kw_per_1000m3: f64,
        ir_ratio: f64,
        tss_production_kg_d: f64,
        influent_head_m: f64,
        has_primary_settler: bool,
        anoxic_volume_m3: f64,
    ) -> Self {
        Self {
            flow_m3_d,
            wastage_flow_m3_d,
            ras_ratio,
            otr_kg_o2_h,
            anoxic_mixing_kw_per_1000m3,
            ir_ratio,
            tss_production_kg_d,
            influent_head_m,
            has_primary_settler,
            anoxic_volume_m3,
        }
    }

    pub fn with_flow(mut self, flow_m3_d: f64) -> Self {
        self.flow_m3_d = flow_m3_d;
        self
    }

    pub fn with_otr(mut self, otr_kg_o2_h: f64) -> Self {
        self.otr_kg_o2_h = otr_kg_o2_h;
        self
    }

    pub fn with_primary_settler(mut self, has_primary_settler: bool) -> Self {
        self.has_primary_settler = has_primary_settler;
        self
    }
}

impl Default for PlantInputs {
    /// Reference plant of roughly 100 000 population equivalent
    fn default() -> Self {
        Self::new(22700.0, 180.0, 0.6, 180.0, 5.0, 3.0, 1800.0, 10.0, true, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_order_matches_fields() {
        let inputs = PlantInputs::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, false, 9.0);
        assert_eq!(inputs.flow_m3_d, 1.0);
        assert_eq!(inputs.wastage_flow_m3_d, 2.0);
        assert_eq!(inputs.ras_ratio, 3.0);
        assert_eq!(inputs.otr_kg_o2_h, 4.0);
        assert_eq!(inputs.anoxic_mixing_kw_per_1000m3, 5.0);
        assert_eq!(inputs.ir_ratio, 6.0);
        assert_eq!(inputs.tss_production_kg_d, 7.0);
        assert_eq!(inputs.influent_head_m, 8.0);
        assert!(!inputs.has_primary_settler);
        assert_eq!(inputs.anoxic_volume_m3, 9.0);
    }

    #[test]
    fn test_deserialize_from_process_symbols() {
        let json = r#"{
            "Q": 30000, "Qwas": 200, "RAS": 0.5, "OTRf": 150,
            "Anoxic_mixing_energy": 4, "IR": 2, "P_X_TSS": 2000,
            "influent_H": 12, "is_PST": false, "V_nox": 1500
        }"#;
        let inputs: PlantInputs = serde_json::from_str(json).unwrap();
        assert_eq!(
            inputs,
            PlantInputs::new(30000.0, 200.0, 0.5, 150.0, 4.0, 2.0, 2000.0, 12.0, false, 1500.0)
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_reference_plant() {
        let inputs: PlantInputs = serde_json::from_str(r#"{"flow_m3_d": 5000}"#).unwrap();
        assert_eq!(inputs, PlantInputs::default().with_flow(5000.0));
    }

    #[test]
    fn test_negative_values_are_kept() {
        let inputs = PlantInputs::default().with_flow(-10.0).with_otr(-1.0);
        assert_eq!(inputs.flow_m3_d, -10.0);
        assert_eq!(inputs.otr_kg_o2_h, -1.0);
    }
}
