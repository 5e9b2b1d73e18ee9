use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Hospital directory entry. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Pre-computed display distance, e.g. "2.1 km".
    pub distance: String,
    pub rating: f32,
    pub services: Vec<String>,
    pub open_24x7: bool,
    pub coordinates: Coordinates,
}

/// Emergency hotline shown by the emergency panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub number: String,
    pub location: String,
}
