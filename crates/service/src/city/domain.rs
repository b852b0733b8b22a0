use serde::{Deserialize, Serialize};

/// Body of `POST /cities`. A client-supplied id is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CityInput {
    pub name: String,
}
