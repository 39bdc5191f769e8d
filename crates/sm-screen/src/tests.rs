//! Unit tests for sm-screen.

use std::io::Cursor;
use std::time::{Duration, Instant};

use sm_core::{CoachId, Party, Price, ScreenConfig, SeatId, SeatNo};
use sm_fare::{FareBook, load_fares_reader};
use sm_lattice::SeatStatus;

use crate::{Notice, NoticeLog, RouteParams, ScreenBuilder, SeatScreen, ToggleOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sid(coach: u8, n: u16) -> SeatId {
    SeatId::new(CoachId(coach), SeatNo(n))
}

fn se1_params(party: Party) -> RouteParams {
    RouteParams {
        from:          "HÀ NỘI".into(),
        to:            "SÀI GÒN".into(),
        depart_date:   "2025-07-01".into(),
        train_id:      "SE1".into(),
        train_name:    Some("Tàu SE1".into()),
        party,
        is_round_trip: false,
        return_date:   None,
    }
}

/// Fixed seed, nobody aboard.
fn empty_config() -> ScreenConfig {
    ScreenConfig { seed: Some(7), occupancy_probability: 0.0, ..ScreenConfig::default() }
}

/// Coach 6 of SE1 Hà Nội → Sài Gòn, seat n costs 1,400,000 + n × 1,000.
fn se1_book() -> FareBook {
    let mut csv = String::from("train_id,origin,destination,category,car,seat,price\n");
    for n in 1..=28u64 {
        csv.push_str(&format!("SE1,Hà Nội,Sài Gòn,k4,6,{n},{}\n", 1_400_000 + n * 1_000));
    }
    load_fares_reader(Cursor::new(csv)).unwrap()
}

fn screen(party: Party) -> SeatScreen<NoticeLog> {
    ScreenBuilder::new(se1_params(party))
        .config(empty_config())
        .observer(NoticeLog::default())
        .build()
        .unwrap()
}

fn no_seat_selected(s: &SeatScreen<NoticeLog>) -> bool {
    s.lattice().seats().all(|seat| seat.status != SeatStatus::Selected)
}

// ── Route parameters ──────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use super::*;
    use crate::ScreenError;
    use url::form_urlencoded;

    #[test]
    fn parses_every_key() {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("from", "Hà Nội")
            .append_pair("to", "Sài Gòn")
            .append_pair("departDate", "2025-07-01")
            .append_pair("trainId", "SE1")
            .append_pair("trainName", "Tàu SE1")
            .append_pair("passengers", r#"{"adult":2,"child":1}"#)
            .append_pair("isRoundTrip", "true")
            .append_pair("returnDate", "2025-07-05")
            .append_pair("utm_source", "ignored")
            .finish();
        let p = RouteParams::from_query(&format!("?{query}")).unwrap();
        assert_eq!(p.from, "Hà Nội");
        assert_eq!(p.to, "Sài Gòn");
        assert_eq!(p.train_id, "SE1");
        assert_eq!(p.party, Party { adult: 2, child: 1, ..Party::default() });
        assert!(p.is_round_trip);
        assert_eq!(p.return_date.as_deref(), Some("2025-07-05"));
        assert_eq!(p.display_train_name(), "SE1");
    }

    #[test]
    fn missing_fields_default() {
        let p = RouteParams::from_query("trainId=SE3").unwrap();
        assert!(p.party.is_empty());
        assert!(!p.is_round_trip);
        assert_eq!(p.display_train_name(), "SE?");
    }

    #[test]
    fn malformed_party_is_error() {
        let result = RouteParams::from_query("passengers=%7Bnope");
        assert!(matches!(result, Err(ScreenError::Params(_))));
    }

    #[test]
    fn oversized_party_parses_but_cannot_build() {
        for passengers in [r#"{"adult":4294967295,"child":1}"#, r#"{"adult":4000000000}"#] {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("trainId", "SE1")
                .append_pair("passengers", passengers)
                .finish();
            let p = RouteParams::from_query(&query).unwrap();
            assert!(p.party.total() >= 4_000_000_000);
            let result = ScreenBuilder::new(p).config(empty_config()).build();
            assert!(matches!(result, Err(ScreenError::Params(_))));
        }
    }

    #[test]
    fn party_filling_the_train_still_builds() {
        let full = Party::adults(322);
        let s = ScreenBuilder::new(se1_params(full)).config(empty_config()).build().unwrap();
        assert_eq!(s.selection().limit(), 322);
        let over = Party { adult: 322, student: 1, ..Party::default() };
        let result = ScreenBuilder::new(se1_params(over)).config(empty_config()).build();
        assert!(matches!(result, Err(ScreenError::Params(_))));
    }

    #[test]
    fn train_name_prefix_is_case_insensitive() {
        let mut p = RouteParams::default();
        for (raw, shown) in [("Tàu SE1", "SE1"), ("TÀU  SE3", "SE3"), ("SE5", "SE5"), ("", "SE?")] {
            p.train_name = Some(raw.into());
            assert_eq!(p.display_train_name(), shown);
        }
    }
}

// ── Debounce ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod debounce {
    use super::*;
    use crate::Debouncer;

    #[test]
    fn fires_once_after_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.schedule(t0, 1);
        assert_eq!(d.poll(t0 + Duration::from_millis(299)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(300)), Some(1));
        assert_eq!(d.poll(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn reschedule_replaces_and_restarts() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.schedule(t0, 1);
        d.schedule(t0 + Duration::from_millis(200), 2);
        assert_eq!(d.poll(t0 + Duration::from_millis(300)), None);
        assert_eq!(d.deadline(), Some(t0 + Duration::from_millis(500)));
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), Some(2));
    }

    #[test]
    fn cancel_drops_pending() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.schedule(t0, "x");
        assert_eq!(d.cancel(), Some("x"));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + Duration::from_secs(1)), None);
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn toggle_selects_and_deselects() {
        let mut s = screen(Party::adults(2));
        assert_eq!(s.toggle_seat(sid(3, 1)), ToggleOutcome::Selected);
        assert_eq!(s.lattice().seat(sid(3, 1)).unwrap().status, SeatStatus::Selected);
        assert_eq!(s.toggle_seat(sid(3, 1)), ToggleOutcome::Deselected);
        assert_eq!(s.lattice().seat(sid(3, 1)).unwrap().status, SeatStatus::Available);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn limit_is_refused_with_notice() {
        let mut s = screen(Party::adults(2));
        s.toggle_seat(sid(3, 1));
        s.toggle_seat(sid(3, 2));
        assert_eq!(s.toggle_seat(sid(3, 3)), ToggleOutcome::LimitReached);
        assert_eq!(s.selection().seats(), &[sid(3, 1), sid(3, 2)]);
        assert_eq!(s.lattice().seat(sid(3, 3)).unwrap().status, SeatStatus::Available);
        assert_eq!(s.observer().last(), Some(&Notice::SelectionLimit { limit: 2 }));
        assert!(s.observer().last().unwrap().to_string().starts_with("You have already selected 2 seats"));
    }

    #[test]
    fn unavailable_and_unknown_seats_are_ignored() {
        let mut s = screen(Party::adults(2));
        s.lattice.set_status(sid(4, 4), SeatStatus::Occupied).unwrap();
        assert_eq!(s.toggle_seat(sid(4, 4)), ToggleOutcome::Unavailable);
        assert_eq!(s.toggle_seat(sid(4, 99)), ToggleOutcome::UnknownSeat);
        assert_eq!(s.toggle_seat(sid(42, 1)), ToggleOutcome::UnknownSeat);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn select_then_clear_leaves_nothing_selected() {
        let mut s = screen(Party::adults(3));
        for n in 1..=3 {
            s.toggle_seat(sid(7, n));
        }
        assert_eq!(s.selection().len(), 3);
        s.clear_selection();
        assert!(s.selection().is_empty());
        assert!(no_seat_selected(&s));
    }

    #[test]
    fn total_is_sum_of_seat_prices() {
        let mut s = screen(Party::adults(2));
        s.toggle_seat(sid(1, 1));
        s.toggle_seat(sid(6, 1));
        assert_eq!(s.total_price(), Price(850_000 + 1_200_000));
    }
}

// ── Auto-selection ────────────────────────────────────────────────────────────

#[cfg(test)]
mod auto {
    use super::*;
    use sm_core::CoachCategory;
    use sm_select::Outcome;

    #[test]
    fn se1_party_of_four_takes_first_empty_compartment() {
        let mut s = ScreenBuilder::new(se1_params(Party::adults(4)))
            .config(empty_config())
            .fares(se1_book())
            .build()
            .unwrap();
        let result = s.auto_select();
        assert_eq!(result.outcome, Outcome::Complete);
        assert_eq!(s.active_coach(), CoachId(6));
        assert_eq!(s.selection().seats(), &[sid(6, 1), sid(6, 2), sid(6, 3), sid(6, 4)]);
        assert_eq!(s.total_price(), Price(4 * 1_400_000 + 1_000 + 2_000 + 3_000 + 4_000));
    }

    #[test]
    fn se1_with_random_occupancy_uses_an_empty_compartment() {
        let config = ScreenConfig { seed: Some(2025), ..ScreenConfig::default() };
        let mut s = ScreenBuilder::new(se1_params(Party::adults(4)))
            .config(config)
            .fares(se1_book())
            .build()
            .unwrap();
        let expected = s
            .lattice()
            .coaches()
            .iter()
            .filter(|c| c.coach.category == CoachCategory::FourBerth)
            .find_map(|c| c.first_empty_compartment().map(|i| (c.id(), i)));
        let result = s.auto_select();
        match expected {
            Some((coach, idx)) => {
                let want: Vec<SeatId> =
                    s.lattice().compartment_seats(coach, idx).iter().map(|seat| seat.id).collect();
                let mut got = s.selection().seats().to_vec();
                got.sort();
                assert_eq!(got, want);
                let sum: Price = want.iter().map(|&id| s.lattice().seat(id).unwrap().price).sum();
                assert_eq!(s.total_price(), sum);
            }
            None => assert!(result.fell_back),
        }
    }

    #[test]
    fn child_and_adult_sit_near_toilet() {
        let party = Party { adult: 1, child: 1, ..Party::default() };
        let mut s = screen(party);
        assert_eq!(s.observer().notices, vec![Notice::ToiletSuggestion]);
        s.auto_select();
        let seats = s.selection().seats().to_vec();
        assert_eq!(seats.len(), 2);
        assert!(seats.iter().all(|id| id.coach == CoachId(1)));
        let mut d: Vec<f64> =
            seats.iter().map(|&id| s.lattice().seat(id).unwrap().toilet_distance()).collect();
        d.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(d, vec![0.0, 1.0]);
        assert!(matches!(s.observer().last(), Some(Notice::AutoSelect { .. })));
    }

    #[test]
    fn rerun_releases_previous_pick() {
        let mut s = screen(Party::adults(4));
        s.auto_select();
        let first = s.selection().seats().to_vec();
        s.auto_select();
        assert_eq!(s.selection().seats(), first.as_slice());
        let selected = s.lattice().seats().filter(|x| x.status == SeatStatus::Selected).count();
        assert_eq!(selected, 4);
    }

    #[test]
    fn empty_party_selects_nothing() {
        let mut s = screen(Party::default());
        let result = s.auto_select();
        assert_eq!(result.outcome, Outcome::EmptyParty);
        assert!(s.selection().is_empty());
        assert!(s.observer().notices.is_empty());
    }
}

// ── Filtering ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod filtering {
    use super::*;
    use crate::UNKNOWN_TRAIN_NAME;

    #[test]
    fn initial_range_spans_actual_prices() {
        let s = screen(Party::adults(1));
        assert_eq!(s.criteria().price.min(), Price(850_000));
        assert_eq!(s.criteria().price.max(), Price(1_200_000));
        assert_ne!(s.train_name(), UNKNOWN_TRAIN_NAME);
    }

    #[test]
    fn inverted_range_is_ignored() {
        let mut s = screen(Party::adults(1));
        let before = s.criteria().price;
        assert!(!s.set_price_range(Price(2), Price(1), Instant::now()));
        assert_eq!(s.criteria().price, before);
        assert_eq!(
            s.observer().last(),
            Some(&Notice::InvalidPriceRange { min: Price(2), max: Price(1) })
        );
    }

    #[test]
    fn no_record_types_is_refused() {
        let mut s = screen(Party::adults(1));
        s.set_record_types([]);
        assert!(s.apply_filter().is_none());
        assert!(!s.is_filter_active());
        assert_eq!(s.observer().last(), Some(&Notice::NoRecordTypes));
    }

    #[test]
    fn apply_moves_to_best_coach_and_highlights() {
        let mut s = screen(Party::adults(1));
        let out = s.apply_filter().unwrap();
        assert!(s.is_filter_active());
        assert_eq!(out.len(), 322);
        assert_eq!(Some(s.active_coach()), out.best_coach);
        assert!(s.is_highlighted(out.seat_ids[0]));
        assert_eq!(
            s.observer().last(),
            Some(&Notice::FilterResult { matches: 322, best_coach: out.best_coach })
        );
    }

    #[test]
    fn price_change_reruns_after_debounce() {
        let mut s = screen(Party::adults(1));
        s.apply_filter();
        let t0 = Instant::now();
        assert!(s.set_price_range(Price(1_000_000), Price(2_000_000), t0));
        assert!(s.poll_timers(t0 + Duration::from_millis(299)).is_none());
        let out = s.poll_timers(t0 + Duration::from_millis(300)).unwrap();
        assert_eq!(out.len(), 140);
        for id in &out.seat_ids {
            assert_eq!(s.lattice().seat(*id).unwrap().price, Price(1_200_000));
        }
        assert!(s.pending_filter().is_none());
    }

    #[test]
    fn price_change_while_inactive_schedules_nothing() {
        let mut s = screen(Party::adults(1));
        let t0 = Instant::now();
        s.set_price_range(Price(900_000), Price(1_000_000), t0);
        assert!(s.pending_filter().is_none());
        assert!(s.poll_timers(t0 + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn reset_restores_everything() {
        let mut s = screen(Party::adults(1));
        s.apply_filter();
        s.toggle_record_type(sm_filter::RecordType::Standard);
        s.set_priority(sm_filter::PriorityPreference::HighOnly);
        s.set_price_range(Price(900_000), Price(1_000_000), Instant::now());
        assert!(s.pending_filter().is_some());

        s.reset_filter();
        assert!(!s.is_filter_active());
        assert!(s.filter_outcome().is_none());
        assert!(s.pending_filter().is_none());
        assert_eq!(s.criteria().record_types.len(), 3);
        assert_eq!(s.criteria().priority, sm_filter::PriorityPreference::All);
        assert_eq!(s.criteria().price.min(), Price(850_000));
        assert_eq!(s.observer().last(), Some(&Notice::FiltersReset));
    }

    #[test]
    fn histogram_covers_every_seat() {
        let s = screen(Party::adults(1));
        let h = s.histogram();
        assert_eq!(h.len(), 20);
        assert_eq!(h.counts().iter().sum::<usize>(), 322);
    }
}

// ── Fares and coaches ─────────────────────────────────────────────────────────

#[cfg(test)]
mod fares {
    use super::*;
    use crate::ScreenError;
    use sm_fare::FareError;

    #[test]
    fn late_fares_rebuild_and_clear_selection() {
        let mut s = screen(Party::adults(1));
        s.toggle_seat(sid(6, 1));
        assert_eq!(s.total_price(), Price(1_200_000));

        s.install_fares(se1_book()).unwrap();
        assert!(s.has_fares());
        assert!(s.selection().is_empty());
        assert!(no_seat_selected(&s));
        assert_eq!(s.lattice().seat(sid(6, 1)).unwrap().price, Price(1_401_000));
        assert_eq!(s.criteria().price.max(), Price(1_428_000));
    }

    #[test]
    fn failed_load_keeps_defaults() {
        let mut s = screen(Party::adults(1));
        let err = FareError::Parse("bad row".into());
        s.install_fare_result(Err(err)).unwrap();
        assert!(!s.has_fares());
        assert_eq!(s.lattice().seat(sid(6, 1)).unwrap().price, Price(1_200_000));
        assert!(matches!(s.observer().last(), Some(Notice::FaresUnavailable { .. })));
    }

    #[test]
    fn active_coach_must_exist() {
        let mut s = screen(Party::adults(1));
        assert_eq!(s.active_coach(), CoachId(1));
        s.set_active_coach(CoachId(9)).unwrap();
        assert_eq!(s.active_coach(), CoachId(9));
        assert!(matches!(s.set_active_coach(CoachId(11)), Err(ScreenError::Core(_))));
        assert_eq!(s.active_coach(), CoachId(9));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ScreenConfig { histogram_bins: 0, ..ScreenConfig::default() };
        let result = ScreenBuilder::new(se1_params(Party::adults(1))).config(config).build();
        assert!(matches!(result, Err(ScreenError::Core(_))));
    }
}

// ── Checkout ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod checkout {
    use super::*;
    use crate::{CheckoutWriter, CsvCheckoutLog, JsonSessionWriter, ScreenError};
    use url::form_urlencoded;

    fn seated() -> SeatScreen<NoticeLog> {
        let mut s = screen(Party::adults(2));
        s.toggle_seat(sid(6, 1));
        s.toggle_seat(sid(6, 2));
        s
    }

    #[test]
    fn incomplete_selection_is_refused() {
        let mut s = screen(Party::adults(2));
        assert!(matches!(
            s.checkout(),
            Err(ScreenError::IncompleteSelection { selected: 0, required: 2 })
        ));
        s.toggle_seat(sid(6, 1));
        assert!(matches!(
            s.checkout(),
            Err(ScreenError::IncompleteSelection { selected: 1, required: 2 })
        ));
    }

    #[test]
    fn record_fields() {
        let r = seated().checkout().unwrap();
        assert_eq!(r.train_id, "SE1");
        assert_eq!(r.train_name.as_deref(), Some("Tàu SE1"));
        assert_eq!(r.selected_seats, "6-1,6-2");
        assert_eq!(r.total_price, Price(2_400_000));
        assert_eq!(r.total_passengers, 2);
    }

    #[test]
    fn json_uses_camel_case() {
        let json = seated().checkout().unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["selectedSeats"], "6-1,6-2");
        assert_eq!(value["totalPrice"], 2_400_000);
        assert_eq!(value["isRoundTrip"], false);
        assert_eq!(value["passenger"]["adult"], 2);
        assert_eq!(value["totalPassengers"], 2);
    }

    #[test]
    fn query_string_carries_same_fields() {
        let q = seated().checkout().unwrap().to_query_string().unwrap();
        let pairs: Vec<(String, String)> = form_urlencoded::parse(q.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let get = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
        assert_eq!(get("selectedSeats"), Some("6-1,6-2"));
        assert_eq!(get("totalPrice"), Some("2400000"));
        assert_eq!(get("from"), Some("HÀ NỘI"));
        assert_eq!(get("isRoundTrip"), Some("false"));
        assert_eq!(get("returnDate"), None);
        let party: Party = serde_json::from_str(get("passenger").unwrap()).unwrap();
        assert_eq!(party, Party::adults(2));
    }

    #[test]
    fn json_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = JsonSessionWriter::in_dir(dir.path());
        let record = seated().checkout_to(&mut writer).unwrap();
        assert_eq!(writer.load().unwrap(), record);
    }

    #[test]
    fn csv_log_appends_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkouts.csv");
        let mut log = CsvCheckoutLog::new(&path).unwrap();
        let s = seated();
        s.checkout_to(&mut log).unwrap();
        log.write(&s.checkout().unwrap()).unwrap();
        log.finish().unwrap();
        log.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("train_id,train_name,selected_seats"));
        assert!(lines[1].contains("\"6-1,6-2\""));
        assert!(lines[1].ends_with(",false,2"));
    }
}
