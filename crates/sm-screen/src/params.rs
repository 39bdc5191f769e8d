//! Navigation parameters the screen is opened with.
//!
//! ```text
//! ?from=Hà Nội&to=Sài Gòn&departDate=2025-07-01&trainId=SE1
//!  &trainName=Tàu SE1&passengers={"adult":2,"child":1}
//!  &isRoundTrip=true&returnDate=2025-07-05
//! ```

use sm_core::Party;
use url::form_urlencoded;

use crate::{ScreenError, ScreenResult};

/// Shown when no train name was passed.
pub const UNKNOWN_TRAIN_NAME: &str = "SE?";

const TRAIN_NAME_PREFIX: &str = "tàu";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub from:          String,
    pub to:            String,
    pub depart_date:   String,
    pub train_id:      String,
    /// As passed, prefix included.
    pub train_name:    Option<String>,
    pub party:         Party,
    pub is_round_trip: bool,
    pub return_date:   Option<String>,
}

impl RouteParams {
    /// Parse a query string, with or without the leading `?`.  Missing text
    /// fields are empty; a missing party is empty; a malformed party is an
    /// error.
    pub fn from_query(query: &str) -> ScreenResult<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = RouteParams::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "from"        => params.from = value.into_owned(),
                "to"          => params.to = value.into_owned(),
                "departDate"  => params.depart_date = value.into_owned(),
                "trainId"     => params.train_id = value.into_owned(),
                "trainName"   => params.train_name = Some(value.into_owned()),
                "isRoundTrip" => params.is_round_trip = value == "true",
                "returnDate"  => params.return_date = Some(value.into_owned()),
                "passengers"  => {
                    params.party = serde_json::from_str(&value)
                        .map_err(|e| ScreenError::Params(format!("passengers: {e}")))?;
                }
                _ => {}
            }
        }
        Ok(params)
    }

    /// Train name without a leading `"Tàu"`, or [`UNKNOWN_TRAIN_NAME`].
    pub fn display_train_name(&self) -> String {
        let Some(raw) = self.train_name.as_deref().filter(|n| !n.is_empty()) else {
            return UNKNOWN_TRAIN_NAME.to_owned();
        };
        strip_train_prefix(raw).to_owned()
    }
}

fn strip_train_prefix(name: &str) -> &str {
    let Some((head, _)) = name.char_indices().nth(TRAIN_NAME_PREFIX.chars().count()) else {
        return if name.to_lowercase() == TRAIN_NAME_PREFIX { "" } else { name };
    };
    let (prefix, rest) = name.split_at(head);
    if prefix.to_lowercase() == TRAIN_NAME_PREFIX {
        rest.trim_start()
    } else {
        name
    }
}
