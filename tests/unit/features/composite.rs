//! Validates min-max normalization and composite score behavior

#[cfg(test)]
mod tests {
    use slideheat::RenderError;
    use slideheat::features::FeatureTable;
    use slideheat::features::composite::{
        append_composite, finite_mean, finite_range, min_max_normalize,
    };
    use slideheat::io::configuration::COMPOSITE_COLUMN;
    use std::path::Path;

    fn load_table(dir: &Path, content: &str) -> FeatureTable {
        std::fs::write(dir.join("slide.csv"), content).unwrap();
        FeatureTable::load(dir, "slide").unwrap()
    }

    #[test]
    fn test_min_max_maps_extremes_to_unit_range() {
        let normalized = min_max_normalize(&[2.0, 4.0, 6.0]);
        assert_eq!(normalized, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_min_max_all_equal_maps_to_zero() {
        let normalized = min_max_normalize(&[3.0, 3.0, 3.0]);
        assert_eq!(normalized, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_min_max_coerces_infinities_to_nan() {
        let normalized = min_max_normalize(&[f64::INFINITY, 1.0, 3.0, f64::NEG_INFINITY]);
        assert!(normalized[0].is_nan());
        assert_eq!(normalized[1], 0.0);
        assert_eq!(normalized[2], 1.0);
        assert!(normalized[3].is_nan());
    }

    #[test]
    fn test_min_max_preserves_nan() {
        let normalized = min_max_normalize(&[1.0, f64::NAN, 2.0]);
        assert_eq!(normalized[0], 0.0);
        assert!(normalized[1].is_nan());
        assert_eq!(normalized[2], 1.0);
    }

    #[test]
    fn test_min_max_all_missing_stays_missing() {
        let normalized = min_max_normalize(&[f64::NAN, f64::INFINITY]);
        assert!(normalized.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_finite_range_skips_non_finite() {
        let range = finite_range([f64::NAN, 3.0, f64::INFINITY, -1.0, 2.0]);
        assert_eq!(range, Some((-1.0, 3.0)));
        assert_eq!(finite_range::<f64, _>([f64::NAN]), None);
        assert_eq!(finite_range::<f32, _>([]), None);
    }

    #[test]
    fn test_finite_mean() {
        assert_eq!(finite_mean(&[1.0, f64::NAN, 3.0]), 2.0);
        assert!(finite_mean(&[f64::NAN]).is_nan());
        assert!(finite_mean(&[]).is_nan());
    }

    #[test]
    fn test_append_composite_averages_normalized_columns() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = load_table(
            dir.path(),
            ",FeatA,FeatB\ntile_1,0.0,10.0\ntile_2,1.0,20.0\ntile_3,2.0,30.0\n",
        );

        let summary = append_composite(
            &mut table,
            &[("FeatA", "A"), ("FeatB", "B")],
            "slide",
        )
        .unwrap();

        assert_eq!(summary.contributing, vec!["FeatA", "FeatB"]);
        assert!(summary.skipped.is_empty());

        // Both columns normalize to [0, 0.5, 1], so the mean matches
        let composite = table.column(COMPOSITE_COLUMN).unwrap();
        assert_eq!(composite, &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_append_composite_excludes_row_missing_values_from_mean() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = load_table(
            dir.path(),
            ",FeatA,FeatB\ntile_1,0.0,bad\ntile_2,1.0,20.0\ntile_3,2.0,30.0\n",
        );

        append_composite(&mut table, &[("FeatA", "A"), ("FeatB", "B")], "slide").unwrap();

        // Row 1 only has FeatA, so its composite is FeatA's normalized value
        let composite = table.column(COMPOSITE_COLUMN).unwrap();
        assert_eq!(composite[0], 0.0);
        assert_eq!(composite[1], 0.5 / 2.0 + 0.0 / 2.0);
        assert_eq!(composite[2], 1.0);
    }

    #[test]
    fn test_append_composite_skips_absent_and_all_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = load_table(
            dir.path(),
            ",FeatA,Empty\ntile_1,1.0,\ntile_2,3.0,\n",
        );

        let summary = append_composite(
            &mut table,
            &[("FeatA", "A"), ("Empty", "E"), ("Absent", "X")],
            "slide",
        )
        .unwrap();

        assert_eq!(summary.contributing, vec!["FeatA"]);
        assert_eq!(summary.skipped, vec!["Empty", "Absent"]);

        // All-missing columns are excluded entirely, never treated as zero
        let composite = table.column(COMPOSITE_COLUMN).unwrap();
        assert_eq!(composite, &[0.0, 1.0]);
    }

    #[test]
    fn test_append_composite_row_with_nothing_contributing_is_nan() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = load_table(dir.path(), ",FeatA\ntile_1,1.0\ntile_2,\ntile_3,3.0\n");

        append_composite(&mut table, &[("FeatA", "A")], "slide").unwrap();
        let composite = table.column(COMPOSITE_COLUMN).unwrap();
        assert!(composite[1].is_nan());
    }

    #[test]
    fn test_append_composite_without_valid_features_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = load_table(dir.path(), ",Empty\ntile_1,\ntile_2,\n");

        let err = append_composite(&mut table, &[("Empty", "E"), ("Absent", "X")], "slide_a")
            .unwrap_err();
        match err {
            RenderError::NoValidFeatures { slide } => assert_eq!(slide, "slide_a"),
            other => panic!("Expected NoValidFeatures, got {other}"),
        }
    }
}
