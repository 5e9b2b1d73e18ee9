//! Static reference data shipped with the dashboard.

mod emergency_contacts;
mod hospitals;
mod quiz_bank;
mod tutorials;

pub use emergency_contacts::emergency_contacts;
pub use hospitals::hospitals;
pub use quiz_bank::quiz_questions;
pub use tutorials::tutorials;

/// One-tap prompts offered under the chat input.
pub const QUICK_TOPICS: &[&str] = &[
    "CPR Steps",
    "Choking Relief",
    "Burn Treatment",
    "Bleeding Control",
    "Stroke Signs",
    "Fracture First Aid",
    "Heatstroke Care",
    "Seizure Response",
];
