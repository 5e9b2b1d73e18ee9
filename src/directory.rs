//! Hospital and contact directory: search, reported-distance ordering,
//! and the call / directions links the UI opens.

use crate::models::{ContactRecord, Coordinates, HospitalRecord, PersonalContact};

/// A record that can be matched by the directory search box.
pub trait Searchable {
    fn name(&self) -> &str;

    /// Secondary strings the query may match (services, location, relation).
    fn tags(&self) -> Vec<&str>;
}

impl Searchable for HospitalRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> Vec<&str> {
        self.services.iter().map(String::as_str).collect()
    }
}

impl Searchable for ContactRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> Vec<&str> {
        vec![self.location.as_str()]
    }
}

impl Searchable for PersonalContact {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> Vec<&str> {
        vec![self.relation.as_str()]
    }
}

/// Entries whose name or any tag contains `query`, ignoring case.
/// A blank query keeps everything. Input order is preserved.
pub fn filter_by_query<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.name().to_lowercase().contains(&needle)
                || item
                    .tags()
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn filter_hospitals<'a>(hospitals: &'a [HospitalRecord], query: &str) -> Vec<&'a HospitalRecord> {
    filter_by_query(hospitals, query)
}

pub fn filter_contacts<'a>(contacts: &'a [ContactRecord], query: &str) -> Vec<&'a ContactRecord> {
    filter_by_query(contacts, query)
}

/// Leading number of a display distance such as "2.1 km".
///
/// Reads the longest numeric prefix after leading whitespace, so "3km"
/// gives 3.0. Returns None when there is no number at the start.
pub fn parse_distance(distance: &str) -> Option<f64> {
    let s = distance.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Stable ascending sort by the reported display distance.
///
/// The device position is not used: ordering relies on the distance strings
/// baked into the records. Unparsable distances go last.
pub fn sort_by_reported_distance(hospitals: &mut [&HospitalRecord]) {
    hospitals.sort_by(|a, b| {
        let da = parse_distance(&a.distance).unwrap_or(f64::INFINITY);
        let db = parse_distance(&b.distance).unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
}

/// `tel:` link for a phone number, whitespace removed.
pub fn tel_link(number: &str) -> String {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{compact}")
}

/// Google Maps driving directions to `destination`.
pub fn directions_url(destination: Coordinates) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}&travelmode=driving",
        destination.lat, destination.lng
    )
}

/// Search state of the hospital locator panel.
#[derive(Debug, Clone)]
pub struct HospitalLocator<'a> {
    hospitals: &'a [HospitalRecord],
    query: String,
    located: bool,
}

impl<'a> HospitalLocator<'a> {
    pub fn new(hospitals: &'a [HospitalRecord]) -> Self {
        Self {
            hospitals,
            query: String::new(),
            located: false,
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Mark the device as located; the list is then ordered by reported distance.
    pub fn set_located(&mut self, located: bool) {
        self.located = located;
    }

    pub fn is_located(&self) -> bool {
        self.located
    }

    /// Hospitals to display: filtered by the query, nearest first once located.
    pub fn visible(&self) -> Vec<&'a HospitalRecord> {
        let mut shown = filter_hospitals(self.hospitals, &self.query);
        if self.located {
            sort_by_reported_distance(&mut shown);
        }
        shown
    }

    pub fn find(&self, id: &str) -> Option<&'a HospitalRecord> {
        self.hospitals.iter().find(|h| h.id == id)
    }
}
