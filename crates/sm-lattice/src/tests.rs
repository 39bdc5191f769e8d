//! Unit tests for sm-lattice.

use std::collections::HashSet;

use sm_core::{Behavior, CoachCategory, CoachId, Price, SeatId, SeatNo, SeatRng};
use sm_fare::{FareBook, FareEntry, RoutePricing, fare_key};
use sm_noise::FixedBehavior;

use crate::{
    Coach, Fleet, LatticeBuilder, LatticeError, SeatStatus, TrainLattice, build_seats, position,
    toilet_distance,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SOCIAL: FixedBehavior = FixedBehavior(Behavior::Social);

fn empty_train() -> TrainLattice {
    LatticeBuilder::new("SE1")
        .classifier(&SOCIAL)
        .occupancy_probability(0.0)
        .build(&mut SeatRng::new(1))
        .unwrap()
}

fn coach(id: u8, category: CoachCategory, capacity: u16) -> Coach {
    Coach::new(CoachId(id), category, capacity, Price(1))
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet {
    use super::*;

    #[test]
    fn standard_layout() {
        let fleet = Fleet::standard();
        assert_eq!(fleet.len(), 10);
        assert_eq!(fleet.total_capacity(), 322);
        assert_eq!(fleet.get(CoachId(4)).unwrap().category, CoachCategory::SixBerth);
        assert_eq!(fleet.get(CoachId(6)).unwrap().base_price, Price(1_500_000));
        assert_eq!(fleet.get(CoachId(6)).unwrap().compartment_count(), 7);
        assert_eq!(fleet.get(CoachId(1)).unwrap().compartment_count(), 0);
    }

    #[test]
    fn rejects_duplicates_and_empty_coaches() {
        let dup = Fleet::new(vec![
            coach(1, CoachCategory::Seating, 28),
            coach(1, CoachCategory::FourBerth, 28),
        ]);
        assert!(matches!(dup, Err(LatticeError::DuplicateCoach(CoachId(1)))));

        let empty = Fleet::new(vec![coach(3, CoachCategory::SixBerth, 0)]);
        assert!(matches!(empty, Err(LatticeError::EmptyCoach(CoachId(3)))));

        assert!(matches!(Fleet::new(vec![]), Err(LatticeError::Config(_))));
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use super::*;

    #[test]
    fn positions_by_category() {
        assert_eq!(position(CoachCategory::Seating, 5), (1, 1));
        assert_eq!(position(CoachCategory::SixBerth, 0), (0, 1));
        assert_eq!(position(CoachCategory::SixBerth, 2), (0, 2));
        assert_eq!(position(CoachCategory::SixBerth, 5), (0, 3));
        assert_eq!(position(CoachCategory::SixBerth, 6), (1, 1));
        assert_eq!(position(CoachCategory::FourBerth, 3), (0, 2));
        assert_eq!(position(CoachCategory::FourBerth, 4), (1, 1));
    }

    #[test]
    fn toilet_distance_metric() {
        assert_eq!(toilet_distance(CoachCategory::Seating, 3), 0.0);
        assert_eq!(toilet_distance(CoachCategory::Seating, 0), 3.0);
        assert_eq!(toilet_distance(CoachCategory::Seating, 4), 10f64.sqrt());
        assert_eq!(toilet_distance(CoachCategory::SixBerth, 13), 2.0);
        assert_eq!(toilet_distance(CoachCategory::FourBerth, 27), 6.0);
    }
}

// ── build_seats ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod build {
    use super::*;

    #[test]
    fn capacity_and_unique_ids() {
        let pricing = RoutePricing::defaults("SE1");
        let mut rng = SeatRng::new(3);
        for c in Fleet::standard().coaches() {
            let seats = build_seats(c, &pricing, &SOCIAL, &mut rng, 0.15);
            assert_eq!(seats.len(), c.capacity as usize);
            let ids: HashSet<SeatId> = seats.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), seats.len());
            for (i, s) in seats.iter().enumerate() {
                assert_eq!(s.index, i);
                assert_eq!(s.id.number, SeatNo(i as u16 + 1));
                assert_eq!(s.category, c.category);
            }
        }
    }

    #[test]
    fn default_prices_never_zero() {
        let lattice = empty_train();
        assert!(lattice.prices().all(|p| !p.is_zero()));
        assert_eq!(lattice.seat(SeatId::new(CoachId(6), SeatNo(1))).unwrap().price, Price(1_200_000));
        assert_eq!(lattice.seat(SeatId::new(CoachId(1), SeatNo(1))).unwrap().price, Price(850_000));
    }

    #[test]
    fn table_prices_applied_per_seat() {
        let mut book = FareBook::new();
        let route = book.train_mut("SE1").route_mut("Hà Nội", "Sài Gòn");
        let key = fare_key("SE1", CoachCategory::FourBerth, CoachId(6), SeatNo(2));
        route.insert(key, FareEntry { car: 6, row: 1, price: Price(1_450_000) });

        let lattice = LatticeBuilder::new("SE1")
            .pricing(book.route_pricing("SE1", "HA NOI", "HO CHI MINH"))
            .classifier(&SOCIAL)
            .build(&mut SeatRng::new(9))
            .unwrap();
        let seat = |n| lattice.seat(SeatId::new(CoachId(6), SeatNo(n))).unwrap().price;
        assert_eq!(seat(2), Price(1_450_000));
        assert_eq!(seat(3), Price(1_200_000));
    }

    #[test]
    fn near_toilet_flags() {
        let lattice = empty_train();
        let near = |c, n| lattice.seat(SeatId::new(CoachId(c), SeatNo(n))).unwrap().near_toilet;
        // seating: indices 2, 3 and 7 lie within one cell of (0, 3)
        assert!(near(1, 3));
        assert!(near(1, 4));
        assert!(near(1, 8));
        assert!(!near(1, 7));
        assert!(!near(1, 1));
        // sleepers: compartment 0 only
        assert!(near(3, 6));
        assert!(!near(3, 7));
        assert!(near(6, 4));
        assert!(!near(6, 5));
    }

    #[test]
    fn similar_behavior_and_neighbour_counts() {
        let full = LatticeBuilder::new("SE1")
            .classifier(&SOCIAL)
            .occupancy_probability(1.0)
            .build(&mut SeatRng::new(1))
            .unwrap();
        for c in full.coaches() {
            let expected = match c.coach.category {
                CoachCategory::SixBerth => 5,
                _ => 3,
            };
            for s in &c.seats {
                assert!(s.near_similar_behavior);
                assert_eq!(s.passengers_nearby, expected, "{}", s.id);
            }
        }
        assert!(empty_train().seats().all(|s| s.passengers_nearby == 0));
    }

    #[test]
    fn default_classifier_uses_noise_tables() {
        let lattice = LatticeBuilder::new("SE1")
            .occupancy_probability(0.0)
            .build(&mut SeatRng::new(5))
            .unwrap();
        let c1 = lattice.coach(CoachId(1)).unwrap();
        let c2 = lattice.coach(CoachId(2)).unwrap();
        assert!(c1.seats.iter().all(|s| s.behavior == Behavior::Social));
        assert!(c2.seats.iter().all(|s| s.behavior == Behavior::Quiet));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    fn statuses(seed: u64) -> Vec<SeatStatus> {
        LatticeBuilder::new("SE1")
            .build(&mut SeatRng::new(seed))
            .unwrap()
            .seats()
            .map(|s| s.status)
            .collect()
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(statuses(42), statuses(42));
    }

    #[test]
    fn different_seed_different_layout() {
        assert_ne!(statuses(1), statuses(2));
    }

    #[test]
    fn occupancy_is_roughly_fifteen_percent() {
        let occupied = statuses(7).iter().filter(|&&s| s == SeatStatus::Occupied).count();
        // 322 seats at p = 0.15 → mean ≈ 48
        assert!((15..=90).contains(&occupied), "occupied = {occupied}");
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn compartment_helpers() {
        let mut lattice = empty_train();
        assert_eq!(lattice.compartment_seats(CoachId(6), 0).len(), 4);
        assert_eq!(lattice.compartment_seats(CoachId(3), 6).len(), 6);
        assert!(lattice.compartment_seats(CoachId(3), 7).is_empty());
        assert!(lattice.compartment_seats(CoachId(1), 0).is_empty());
        assert_eq!(lattice.first_empty_compartment(CoachId(6)), Some(0));
        assert_eq!(lattice.first_empty_compartment(CoachId(1)), None);

        lattice.set_status(SeatId::new(CoachId(6), SeatNo(3)), SeatStatus::Occupied).unwrap();
        assert!(!lattice.is_compartment_empty(CoachId(6), 0));
        assert_eq!(lattice.first_empty_compartment(CoachId(6)), Some(1));
        assert_eq!(lattice.available_count(CoachId(6)), 27);
    }

    #[test]
    fn lookup_and_positions() {
        let lattice = empty_train();
        assert_eq!(lattice.seat_count(), 322);
        assert_eq!(lattice.coach_position(CoachId(6)), Some(5));
        assert!(lattice.seat(SeatId::new(CoachId(1), SeatNo(29))).is_none());
        assert!(lattice.seat(SeatId::new(CoachId(11), SeatNo(1))).is_none());
        assert_eq!(lattice.available_count(CoachId(11)), 0);
        assert_eq!(lattice.price_bounds(), Some((Price(850_000), Price(1_200_000))));
    }

    #[test]
    fn release_selected_restores_availability() {
        let mut lattice = empty_train();
        for n in 1..=3 {
            lattice.set_status(SeatId::new(CoachId(2), SeatNo(n)), SeatStatus::Selected).unwrap();
        }
        assert_eq!(lattice.release_selected(), 3);
        assert!(lattice.seats().all(|s| s.status != SeatStatus::Selected));
        assert_eq!(lattice.release_selected(), 0);
    }

    #[test]
    fn unknown_seat_status_is_error() {
        let mut lattice = empty_train();
        let err = lattice.set_status(SeatId::new(CoachId(12), SeatNo(1)), SeatStatus::Reserved);
        assert!(matches!(err, Err(LatticeError::Core(_))));
    }

    #[test]
    fn occupancy_out_of_range_rejected() {
        let result = LatticeBuilder::new("SE1")
            .occupancy_probability(1.5)
            .build(&mut SeatRng::new(0));
        assert!(matches!(result, Err(LatticeError::Config(_))));
    }
}
