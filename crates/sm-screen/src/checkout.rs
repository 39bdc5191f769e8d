//! The record handed to the passenger-information step.

use serde::{Deserialize, Serialize};
use sm_core::{Party, Price};
use url::form_urlencoded;

use crate::{RouteParams, ScreenResult};

/// Session record written on checkout.
///
/// Serialises with camelCase keys:
///
/// ```json
/// { "trainId": "SE1", "trainName": "Tàu SE1", "selectedSeats": "6-1,6-2",
///   "totalPrice": 2900000, "from": "Hà Nội", "to": "Sài Gòn",
///   "departDate": "2025-07-01", "returnDate": null, "isRoundTrip": false,
///   "passenger": { "adult": 2, ... }, "totalPassengers": 2 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRecord {
    pub train_id:         String,
    pub train_name:       Option<String>,
    /// Comma-joined seat ids.
    pub selected_seats:   String,
    pub total_price:      Price,
    pub from:             String,
    pub to:               String,
    pub depart_date:      String,
    pub return_date:      Option<String>,
    pub is_round_trip:    bool,
    pub passenger:        Party,
    pub total_passengers: usize,
}

impl CheckoutRecord {
    pub fn new(params: &RouteParams, selected_seats: String, total_price: Price) -> Self {
        Self {
            train_id:         params.train_id.clone(),
            train_name:       params.train_name.clone(),
            selected_seats,
            total_price,
            from:             params.from.clone(),
            to:               params.to.clone(),
            depart_date:      params.depart_date.clone(),
            return_date:      params.return_date.clone(),
            is_round_trip:    params.is_round_trip,
            passenger:        params.party,
            total_passengers: params.party.total(),
        }
    }

    pub fn to_json(&self) -> ScreenResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Query string for the next step.  Empty optional fields are left out;
    /// `totalPrice`, `isRoundTrip` and `passenger` are always present.
    pub fn to_query_string(&self) -> ScreenResult<String> {
        let mut q = form_urlencoded::Serializer::new(String::new());
        let optional = [
            ("trainId", Some(self.train_id.as_str())),
            ("trainName", self.train_name.as_deref()),
            ("selectedSeats", Some(self.selected_seats.as_str())),
        ];
        for (key, value) in optional {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                q.append_pair(key, v);
            }
        }
        q.append_pair("totalPrice", &self.total_price.0.to_string());
        for (key, value) in [("from", &self.from), ("to", &self.to), ("departDate", &self.depart_date)] {
            if !value.is_empty() {
                q.append_pair(key, value);
            }
        }
        if let Some(date) = self.return_date.as_deref().filter(|d| !d.is_empty()) {
            q.append_pair("returnDate", date);
        }
        q.append_pair("isRoundTrip", if self.is_round_trip { "true" } else { "false" });
        q.append_pair("passenger", &serde_json::to_string(&self.passenger)?);
        Ok(q.finish())
    }
}
