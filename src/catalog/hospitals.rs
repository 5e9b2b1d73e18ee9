use std::sync::LazyLock;

use crate::models::{Coordinates, HospitalRecord};

struct Entry {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    phone: &'static str,
    distance: &'static str,
    rating: f32,
    services: &'static [&'static str],
    open_24x7: bool,
    lat: f64,
    lng: f64,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "1",
        name: "Apollo Hospitals",
        address: "21, Greams Lane, Off Greams Road, Chennai - 600006",
        phone: "+91-44-2829-3333",
        distance: "2.1 km",
        rating: 4.6,
        services: &["Emergency", "ICU", "Cardiology", "Neurology"],
        open_24x7: true,
        lat: 13.0638,
        lng: 80.2643,
    },
    Entry {
        id: "2",
        name: "Fortis Malar Hospital",
        address: "52, 1st Main Road, Gandhi Nagar, Adyar, Chennai - 600020",
        phone: "+91-44-4200-7575",
        distance: "3.5 km",
        rating: 4.3,
        services: &["Emergency", "Oncology", "Orthopedics", "Pediatrics"],
        open_24x7: true,
        lat: 13.0067,
        lng: 80.2575,
    },
    Entry {
        id: "3",
        name: "MIOT International",
        address: "4/112, Mount Poonamallee Road, Manapakkam, Chennai - 600089",
        phone: "+91-44-4200-2288",
        distance: "4.8 km",
        rating: 4.4,
        services: &["Emergency", "Trauma", "Cardiology", "Nephrology"],
        open_24x7: true,
        lat: 13.0105,
        lng: 80.1767,
    },
    Entry {
        id: "4",
        name: "Government General Hospital",
        address: "EVR Periyar Salai, Park Town, Chennai - 600003",
        phone: "+91-44-2530-5000",
        distance: "5.2 km",
        rating: 4.2,
        services: &["Emergency", "Critical Care", "Surgery", "Trauma"],
        open_24x7: true,
        lat: 13.0827,
        lng: 80.2757,
    },
    Entry {
        id: "5",
        name: "Sri Ramachandra Medical Centre",
        address: "No.1, Ramachandra Nagar, Porur, Chennai - 600116",
        phone: "+91-44-2476-7000",
        distance: "6.9 km",
        rating: 4.3,
        services: &["Emergency", "ICU", "Gastroenterology", "Oncology"],
        open_24x7: true,
        lat: 13.0370,
        lng: 80.1533,
    },
    Entry {
        id: "6",
        name: "N S Hospital",
        address: "Sembarambakkam, Chennai - 600073",
        phone: "+91-44-xxxx-xxxx",
        distance: "3.2 km",
        rating: 4.0,
        services: &["General Medicine", "Pediatrics", "Emergency"],
        open_24x7: true,
        lat: 13.0100,
        lng: 80.1000,
    },
    Entry {
        id: "7",
        name: "Annai Theresa Hospitals Pvt Ltd",
        address: "Sembarambakkam, Chennai - 600073",
        phone: "+91-44-yyyy-yyyy",
        distance: "3.5 km",
        rating: 4.2,
        services: &["Emergency", "Maternity", "Surgery"],
        open_24x7: true,
        lat: 13.0120,
        lng: 80.1050,
    },
    Entry {
        id: "8",
        name: "Annai Arul Hospital",
        address: "Sembarambakkam, Chennai - 600073",
        phone: "+91-44-zzzz-zzzz",
        distance: "3.6 km",
        rating: 4.1,
        services: &["Emergency", "Orthopaedics", "ICU"],
        open_24x7: true,
        lat: 13.0130,
        lng: 80.1080,
    },
    Entry {
        id: "9",
        name: "Jolen Hospital",
        address: "Velachery Main Rd, Sembarambakkam, Chennai - 600073",
        phone: "+91-44-aaaa-aaaa",
        distance: "3.8 km",
        rating: 4.0,
        services: &["General Surgery", "Emergency"],
        open_24x7: false,
        lat: 13.0150,
        lng: 80.1100,
    },
    Entry {
        id: "10",
        name: "Homeocare International Pvt Ltd",
        address: "Mudichur Road, Tambaram West (near Sembarambakkam), Chennai",
        phone: "+91-44-bbbb-bbbb",
        distance: "4.0 km",
        rating: 4.4,
        services: &["Homeopathy", "Emergency"],
        open_24x7: true,
        lat: 13.0080,
        lng: 80.0950,
    },
];

static HOSPITALS: LazyLock<Vec<HospitalRecord>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|e| HospitalRecord {
            id: e.id.to_string(),
            name: e.name.to_string(),
            address: e.address.to_string(),
            phone: e.phone.to_string(),
            distance: e.distance.to_string(),
            rating: e.rating,
            services: e.services.iter().map(|s| s.to_string()).collect(),
            open_24x7: e.open_24x7,
            coordinates: Coordinates {
                lat: e.lat,
                lng: e.lng,
            },
        })
        .collect()
});

/// Hospital directory in its default (unsorted) display order.
pub fn hospitals() -> &'static [HospitalRecord] {
    &HOSPITALS
}
