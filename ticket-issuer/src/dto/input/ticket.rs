use serde::Deserialize;

///
/// Ticket issuance form.
///
/// Missing fields deserialize to empty strings,
/// so they are reported by validation instead of the extractor.
///
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ticket {
    #[serde(alias = "vatin")]
    pub taxpayer_id: String,
    pub first_name: String,
    pub last_name: String,
}
