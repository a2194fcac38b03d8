use serde::Deserialize;

/// The two mutually exclusive submission modes. Coordinates arrive as the
/// raw text the user typed; the pipeline owns parsing them.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SubmitLocationRequest {
    Place {
        city: String,
        state: String,
    },
    Coordinates {
        latitude: String,
        longitude: String,
    },
}
