//! Unit tests for wr-zone.

#[cfg(test)]
mod helpers {
    use wr_core::{Point, ZoneId};

    use crate::ZoneRegistry;

    /// Three zones: healthy (20), warning (60), critical (90).
    pub fn three_zones() -> (ZoneRegistry, [ZoneId; 3]) {
        let mut reg = ZoneRegistry::new(100);
        let a = reg.add_zone("GARDEN", 20, Point::new(0.0, 0.0)).unwrap();
        let b = reg.add_zone("DAMRO", 60, Point::new(1.0, 0.0)).unwrap();
        let c = reg.add_zone("SAMATH", 90, Point::new(2.0, 0.0)).unwrap();
        (reg, [a, b, c])
    }
}

// ── Priority ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod priority {
    use crate::Priority;

    #[test]
    fn thresholds() {
        assert_eq!(Priority::from_waste(0), Priority::Healthy);
        assert_eq!(Priority::from_waste(50), Priority::Healthy);
        assert_eq!(Priority::from_waste(51), Priority::Warning);
        assert_eq!(Priority::from_waste(80), Priority::Warning);
        assert_eq!(Priority::from_waste(81), Priority::Critical);
        assert_eq!(Priority::from_waste(100), Priority::Critical);
    }

    #[test]
    fn ranks_and_order() {
        assert_eq!(Priority::Critical.rank(), 1);
        assert_eq!(Priority::Warning.rank(), 2);
        assert_eq!(Priority::Healthy.rank(), 3);
        assert!(Priority::Critical < Priority::Healthy);
        assert_eq!(Priority::Warning.to_string(), "WARNING");
    }
}

// ── History ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod history {
    use crate::History;

    #[test]
    fn seeded_with_initial_reading() {
        let h = History::new(5, 42);
        assert_eq!(h.len(), 1);
        assert!(!h.is_empty());
        assert_eq!(h.last(), Some(42));
        assert_eq!(h.second_to_last(), None);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut h = History::new(3, 1);
        assert_eq!(h.push(2), None);
        assert_eq!(h.push(3), None);
        assert_eq!(h.push(4), Some(1));
        assert_eq!(h.to_vec(), vec![2, 3, 4]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn recent_returns_tail() {
        let mut h = History::new(100, 0);
        for v in 1..=20 {
            h.push(v);
        }
        assert_eq!(h.recent(3), vec![18, 19, 20]);
        assert_eq!(h.recent(100).len(), 21);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut h = History::new(0, 5);
        assert_eq!(h.capacity(), 1);
        assert_eq!(h.push(6), Some(5));
        assert_eq!(h.to_vec(), vec![6]);
    }
}

// ── Range-max index ───────────────────────────────────────────────────────────

#[cfg(test)]
mod range_max {
    use wr_core::PlannerRng;

    use crate::RangeMaxIndex;

    #[test]
    fn full_range_is_true_maximum() {
        let mut rng = PlannerRng::new(11);
        for len in 1..40 {
            let values: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=100u8)).collect();
            let idx = RangeMaxIndex::build(&values);
            assert_eq!(idx.query(0, len - 1), values.iter().copied().max());
            assert_eq!(idx.max(), values.iter().copied().max());
        }
    }

    #[test]
    fn every_subrange_matches_brute_force() {
        let values: Vec<u8> = vec![5, 1, 9, 3, 7, 7, 2, 8, 0, 4, 6];
        let idx = RangeMaxIndex::build(&values);
        for lo in 0..values.len() {
            for hi in lo..values.len() {
                let expected = values[lo..=hi].iter().copied().max();
                assert_eq!(idx.query(lo, hi), expected, "range {lo}..={hi}");
            }
        }
    }

    #[test]
    fn update_leaves_disjoint_range_unchanged() {
        let values: Vec<u8> = vec![10, 20, 30, 40, 50, 60];
        let mut idx = RangeMaxIndex::build(&values);
        let before = idx.query(0, 2);
        idx.update(5, 99).unwrap();
        assert_eq!(idx.query(0, 2), before);
        assert_eq!(idx.query(3, 5), Some(99));
        assert_eq!(idx.max(), Some(99));
    }

    #[test]
    fn update_lowering_the_maximum() {
        let mut idx = RangeMaxIndex::build(&[3u8, 90, 4]);
        idx.update(1, 1).unwrap();
        assert_eq!(idx.max(), Some(4));
    }

    #[test]
    fn invalid_ranges() {
        let idx = RangeMaxIndex::build(&[1u8, 2, 3]);
        assert_eq!(idx.query(2, 1), None);
        assert_eq!(idx.query(0, 3), None);
        let empty = RangeMaxIndex::<u8>::build(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.max(), None);
        assert_eq!(empty.query(0, 0), None);
    }

    #[test]
    fn update_out_of_range_errors() {
        let mut idx = RangeMaxIndex::build(&[1u8, 2]);
        assert!(idx.update(2, 5).is_err());
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use wr_core::{Point, ZoneId};

    use crate::{Priority, ZoneError, ZoneRegistry};

    #[test]
    fn ids_are_dense_and_zero_based() {
        let (reg, [a, b, c]) = super::helpers::three_zones();
        assert_eq!([a, b, c], [ZoneId(0), ZoneId(1), ZoneId(2)]);
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.ids().collect::<Vec<_>>(), vec![a, b, c]);
    }

    #[test]
    fn initial_level_is_clamped_and_seeds_history() {
        let mut reg = ZoneRegistry::new(10);
        let hi = reg.add_zone("HIGH", 250, Point::default()).unwrap();
        let lo = reg.add_zone("LOW", -5, Point::default()).unwrap();
        assert_eq!(reg.waste(hi).unwrap(), 100);
        assert_eq!(reg.priority(hi).unwrap(), Priority::Critical);
        assert_eq!(reg.waste(lo).unwrap(), 0);
        assert_eq!(reg.history(hi).unwrap().to_vec(), vec![100]);
        assert_eq!(reg.history_len(lo).unwrap(), 1);
    }

    #[test]
    fn duplicate_names_rejected_case_insensitively() {
        let (mut reg, _) = super::helpers::three_zones();
        let err = reg.add_zone("garden", 10, Point::default()).unwrap_err();
        assert!(matches!(err, ZoneError::DuplicateName(_)));
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn find_by_name_is_exact() {
        let (reg, [a, ..]) = super::helpers::three_zones();
        assert_eq!(reg.find_by_name("garden"), Some(a));
        assert_eq!(reg.find_by_name("GARD"), None);
    }

    #[test]
    fn unknown_zone_is_typed_error() {
        let (mut reg, _) = super::helpers::three_zones();
        assert!(matches!(reg.waste(ZoneId(9)), Err(ZoneError::NotFound(ZoneId(9)))));
        assert!(reg.update_waste(ZoneId(9), 10).is_err());
        assert!(reg.collect(ZoneId(9)).is_err());
    }

    #[test]
    fn update_rejects_out_of_range() {
        let (mut reg, [a, ..]) = super::helpers::three_zones();
        let err = reg.update_waste(a, 101).unwrap_err();
        assert!(matches!(err, ZoneError::WasteOutOfRange { value: 101, .. }));
        assert!(reg.update_waste(a, -1).is_err());
        assert_eq!(reg.waste(a).unwrap(), 20);
    }

    #[test]
    fn update_rederives_priority_and_records() {
        let (mut reg, [a, ..]) = super::helpers::three_zones();
        reg.update_waste(a, 85).unwrap();
        assert_eq!(reg.priority(a).unwrap(), Priority::Critical);
        assert_eq!(reg.history(a).unwrap().to_vec(), vec![20, 85]);
        assert_eq!(reg.get(a).unwrap().history_max(), Some(85));
    }

    #[test]
    fn raise_clamps_at_hundred() {
        let (mut reg, [_, _, c]) = super::helpers::three_zones();
        assert_eq!(reg.raise_waste(c, 30).unwrap(), 100);
        assert_eq!(reg.waste(c).unwrap(), 100);
        assert_eq!(reg.history(c).unwrap().last(), Some(100));
    }

    #[test]
    fn collect_zeroes_without_recording() {
        let (mut reg, [_, b, _]) = super::helpers::three_zones();
        assert_eq!(reg.collect(b).unwrap(), 60);
        assert_eq!(reg.waste(b).unwrap(), 0);
        assert_eq!(reg.priority(b).unwrap(), Priority::Healthy);
        assert_eq!(reg.history_len(b).unwrap(), 1);
    }

    #[test]
    fn record_reading_keeps_current_level() {
        let (mut reg, [a, ..]) = super::helpers::three_zones();
        reg.record_reading(a, 140).unwrap();
        assert_eq!(reg.waste(a).unwrap(), 20);
        assert_eq!(reg.history(a).unwrap().to_vec(), vec![20, 100]);
    }

    #[test]
    fn history_bound_enforced_through_registry() {
        let mut reg = ZoneRegistry::new(3);
        let z = reg.add_zone("Z", 1, Point::default()).unwrap();
        for v in 2..=6 {
            reg.update_waste(z, v).unwrap();
        }
        assert_eq!(reg.history(z).unwrap().to_vec(), vec![4, 5, 6]);
        assert_eq!(reg.get(z).unwrap().range_index().len(), 3);
    }

    #[test]
    fn filters() {
        let (reg, [a, b, c]) = super::helpers::three_zones();
        assert_eq!(reg.in_waste_range(10, 60), vec![a, b]);
        assert_eq!(reg.critical(), vec![c]);
        assert_eq!(reg.with_priority(Priority::Warning), vec![b]);
        assert_eq!(reg.needing_collection(50), vec![b, c]);
        assert_eq!(reg.levels(), vec![20, 60, 90]);
    }

    #[test]
    fn ranked_fullest_first_ties_by_id() {
        let mut reg = ZoneRegistry::new(100);
        let a = reg.add_zone("A", 40, Point::default()).unwrap();
        let b = reg.add_zone("B", 90, Point::default()).unwrap();
        let c = reg.add_zone("C", 40, Point::default()).unwrap();
        let d = reg.add_zone("D", 75, Point::default()).unwrap();
        assert_eq!(reg.ranked_by_waste(), vec![b, d, a, c]);
        assert!(ZoneRegistry::new(100).ranked_by_waste().is_empty());
    }
}

// ── Forecast ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod forecast {
    use wr_core::{PlannerRng, Point};

    use crate::{ZoneRegistry, compute_prediction, forecast, predict_next, trend};

    fn zone_with_history() -> (ZoneRegistry, wr_core::ZoneId) {
        let mut reg = ZoneRegistry::new(100);
        let z = reg.add_zone("DATT", 50, Point::default()).unwrap();
        reg.update_waste(z, 60).unwrap(); // history [50, 60], current 60
        (reg, z)
    }

    #[test]
    fn trend_from_second_to_last() {
        let (reg, z) = zone_with_history();
        assert_eq!(trend(reg.history(z).unwrap(), 60), 10);
    }

    #[test]
    fn single_reading_has_zero_trend() {
        let mut reg = ZoneRegistry::new(100);
        let z = reg.add_zone("NEW", 40, Point::default()).unwrap();
        assert_eq!(trend(reg.history(z).unwrap(), 40), 0);
    }

    #[test]
    fn compute_prediction_clamps() {
        assert_eq!(compute_prediction(95, 10, 10), 100);
        assert_eq!(compute_prediction(5, -10, -10), 0);
        assert_eq!(compute_prediction(60, 10, -3), 67);
    }

    #[test]
    fn prediction_within_jitter_band() {
        let (reg, z) = zone_with_history();
        let mut rng = PlannerRng::new(3);
        for _ in 0..200 {
            let p = forecast(&reg, z, &mut rng, 10).unwrap();
            assert_eq!(p.trend, 10);
            assert!((60..=80).contains(&p.value), "prediction {} outside [60, 80]", p.value);
        }
    }

    #[test]
    fn forecast_is_read_only() {
        let (reg, z) = zone_with_history();
        let mut rng = PlannerRng::new(3);
        let _ = forecast(&reg, z, &mut rng, 10).unwrap();
        assert_eq!(reg.history_len(z).unwrap(), 2);
    }

    #[test]
    fn predict_next_records_each_call() {
        let (mut reg, z) = zone_with_history();
        let mut rng = PlannerRng::new(3);
        let p1 = predict_next(&mut reg, z, &mut rng, 10).unwrap();
        let p2 = predict_next(&mut reg, z, &mut rng, 10).unwrap();
        let hist = reg.history(z).unwrap().to_vec();
        assert_eq!(hist.len(), 4);
        assert_eq!(hist[2], p1.value);
        assert_eq!(hist[3], p2.value);
        // Current level is untouched by forecasting.
        assert_eq!(reg.waste(z).unwrap(), 60);
        assert_eq!(reg.get(z).unwrap().history_max(), hist.iter().copied().max());
    }

    #[test]
    fn zero_jitter_is_deterministic() {
        let (reg, z) = zone_with_history();
        let mut rng = PlannerRng::new(99);
        let p = forecast(&reg, z, &mut rng, 0).unwrap();
        assert_eq!(p.value, 70);
        assert_eq!(p.max_recent, Some(60));
        assert!((p.average_recent - 55.0).abs() < 1e-9);
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use wr_core::Point;

    use crate::{History, HistoryStats, WasteSummary, ZoneRegistry, trend_report};

    #[test]
    fn summary_counts_classes() {
        let (reg, _) = super::helpers::three_zones();
        let s = WasteSummary::of(&reg);
        assert_eq!(s.zones, 3);
        assert_eq!(s.total, 170);
        assert_eq!((s.critical, s.warning, s.healthy), (1, 1, 1));
        assert_eq!(s.min, Some(20));
        assert_eq!(s.max, Some(90));
        assert!((s.average - 170.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn summary_of_empty_registry() {
        let s = WasteSummary::of(&ZoneRegistry::new(10));
        assert_eq!(s.zones, 0);
        assert_eq!(s.average, 0.0);
        assert_eq!(s.min, None);
    }

    #[test]
    fn history_stats() {
        let mut h = History::new(100, 10);
        for v in [30, 20, 40] {
            h.push(v);
        }
        let s = HistoryStats::of(&h).unwrap();
        assert_eq!(s.records, 4);
        assert_eq!((s.min, s.max), (10, 40));
        assert!((s.average - 25.0).abs() < 1e-9);
        assert!((s.trend_per_reading - 10.0).abs() < 1e-9);
        assert_eq!(s.recent, vec![10, 30, 20, 40]);
    }

    #[test]
    fn history_stats_need_two_readings() {
        assert!(HistoryStats::of(&History::new(10, 5)).is_none());
    }

    #[test]
    fn trend_report_marks_single_reading_zones() {
        let mut reg = ZoneRegistry::new(100);
        let a = reg.add_zone("A", 30, Point::default()).unwrap();
        let b = reg.add_zone("B", 30, Point::default()).unwrap();
        reg.update_waste(b, 45).unwrap();
        let report = trend_report(&reg);
        assert_eq!(report[a.index()].trend, None);
        assert_eq!(report[a.index()].historical_max, None);
        assert_eq!(report[b.index()].trend, Some(15));
        assert_eq!(report[b.index()].historical_max, Some(45));
    }
}
