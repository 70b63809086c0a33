use serde::Deserialize;

/*
    GET /v3/devices/{id}/ returns the full device resource:

    {
        "id": "015c3c9fef310000000000010010007d",
        "state": "registered",
        "account_id": ...,
        "bootstrap_expiration_date": ...,
        ...
    }
*/
/// The subset of the directory's device resource that host tests consume.
#[derive(Clone, Debug, Deserialize)]
pub struct Device {
    pub id: String,

    /// Lifecycle state as reported by the directory, eg. "registered" or
    /// "deregistered". Treated as opaque and forwarded verbatim.
    pub state: String,
}
