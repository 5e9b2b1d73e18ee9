use std::sync::LazyLock;

use crate::models::ContactRecord;

static CONTACTS: LazyLock<Vec<ContactRecord>> = LazyLock::new(|| {
    [
        ("Apollo Hospital Delhi", "+91-11-2692-5858", "New Delhi"),
        ("Fortis Hospital Mumbai", "+91-22-6754-3333", "Mumbai"),
        ("Max Super Speciality", "+91-11-2651-5050", "New Delhi"),
        ("Manipal Hospital", "+91-80-2502-4444", "Bangalore"),
        ("AIIMS Emergency", "+91-11-2658-8500", "New Delhi"),
    ]
    .into_iter()
    .map(|(name, number, location)| ContactRecord {
        name: name.to_string(),
        number: number.to_string(),
        location: location.to_string(),
    })
    .collect()
});

/// Verified emergency hotlines for the emergency panel.
pub fn emergency_contacts() -> &'static [ContactRecord] {
    &CONTACTS
}
