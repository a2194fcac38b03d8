use crate::locations::models::{Location, PlaceName};
use crate::map::models::LatLng;
use serde::Serialize;

pub const TOTAL_ROW_LABEL: &str = "Total";

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub position: LatLng,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountRow {
    pub city: String,
    pub state: String,
    pub count: u64,
}

pub fn markers(locations: &[Location]) -> Vec<Marker> {
    locations
        .iter()
        .map(|location| Marker {
            position: location.position,
            label: match &location.place {
                PlaceName::Named { city, state } => format!("{city}, {state}"),
                PlaceName::Unnamed => {
                    format!("({}, {})", location.position.lat, location.position.lng)
                }
            },
        })
        .collect()
}

/// Groups locations by their display `(city, state)` pair in first-seen
/// order and appends the grand-total row. Recomputed on every read.
pub fn count_summary(locations: &[Location]) -> Vec<CountRow> {
    let mut rows: Vec<CountRow> = Vec::new();
    for location in locations {
        let city = location.place.city();
        let state = location.place.state();
        match rows
            .iter_mut()
            .find(|row| row.city == city && row.state == state)
        {
            Some(row) => row.count += 1,
            None => rows.push(CountRow {
                city: city.to_string(),
                state: state.to_string(),
                count: 1,
            }),
        }
    }
    let total = rows.iter().map(|row| row.count).sum();
    rows.push(CountRow {
        city: TOTAL_ROW_LABEL.to_string(),
        state: String::new(),
        count: total,
    });
    rows
}
