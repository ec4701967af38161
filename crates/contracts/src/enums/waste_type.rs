use serde::{Deserialize, Serialize};

/// Kinds of waste offered on the waste type step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteType {
    Household,
    Construction,
    Garden,
    Commercial,
}

impl WasteType {
    pub fn code(&self) -> &'static str {
        match self {
            WasteType::Household => "household",
            WasteType::Construction => "construction",
            WasteType::Garden => "garden",
            WasteType::Commercial => "commercial",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WasteType::Household => "Household Waste",
            WasteType::Construction => "Construction Waste",
            WasteType::Garden => "Garden Waste",
            WasteType::Commercial => "Commercial Waste",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WasteType::Household => "General household items, furniture and clear-outs",
            WasteType::Construction => "Building materials, rubble and renovation debris",
            WasteType::Garden => "Green waste, soil, branches and garden clearance",
            WasteType::Commercial => "Office, retail and business waste",
        }
    }

    /// Soil, rubble and similar heavy loads need a skip that allows heavy waste.
    pub fn is_heavy(&self) -> bool {
        matches!(self, WasteType::Construction | WasteType::Garden)
    }

    pub fn all() -> [WasteType; 4] {
        [
            WasteType::Household,
            WasteType::Construction,
            WasteType::Garden,
            WasteType::Commercial,
        ]
    }
}
