//! Validates the per-slide feature means summary export

#[cfg(test)]
mod tests {
    use slideheat::features::FeatureTable;
    use slideheat::features::composite::append_composite;
    use slideheat::io::configuration::MEANS_FILENAME;
    use slideheat::render::means::export_means;
    use std::path::Path;

    const FEATURES: [(&str, &str); 2] = [("FeatA", "A"), ("FeatB", "B")];

    fn build_table(dir: &Path, name: &str, content: &str) -> FeatureTable {
        std::fs::write(dir.join(format!("{name}.csv")), content).unwrap();
        let mut table = FeatureTable::load(dir, name).unwrap();
        append_composite(&mut table, &FEATURES, name).unwrap();
        table
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_header_written_once_and_rows_appended() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("out");
        std::fs::create_dir_all(&save_dir).unwrap();

        let table_a = build_table(dir.path(), "slide_a", ",FeatA\nt1,1.0\nt2,3.0\n");
        let table_b = build_table(dir.path(), "slide_b", ",FeatA\nt1,5.0\nt2,7.0\n");

        let path = export_means(&table_a, &FEATURES, "slide_a", &save_dir).unwrap();
        export_means(&table_b, &FEATURES, "slide_b", &save_dir).unwrap();

        assert_eq!(path, save_dir.join(MEANS_FILENAME));
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["slide_name", "FeatA", "FeatB", "CompositeFeature"]);
        assert_eq!(rows[1][0], "slide_a");
        assert_eq!(rows[1][1], "2.000000");
        assert_eq!(rows[2][0], "slide_b");
        assert_eq!(rows[2][1], "6.000000");
    }

    #[test]
    fn test_composite_mean_is_last_column() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("out");
        std::fs::create_dir_all(&save_dir).unwrap();

        let table = build_table(dir.path(), "s", ",FeatA\nt1,0.0\nt2,2.0\n");
        let path = export_means(&table, &FEATURES, "s", &save_dir).unwrap();
        let rows = read_rows(&path);

        // Composite column normalizes to [0, 1], so its mean is 0.5
        assert_eq!(rows[1].last().unwrap(), "0.500000");
    }

    #[test]
    fn test_rows_stay_aligned_when_slides_differ_in_features() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("out");
        std::fs::create_dir_all(&save_dir).unwrap();

        // FeatB exists only in the first slide's table
        let table_a = build_table(
            dir.path(),
            "slide_a",
            ",FeatA,FeatB\nt1,1.0,4.0\nt2,3.0,8.0\n",
        );
        let table_b = build_table(dir.path(), "slide_b", ",FeatA\nt1,5.0\nt2,7.0\n");

        let path = export_means(&table_a, &FEATURES, "slide_a", &save_dir).unwrap();
        export_means(&table_b, &FEATURES, "slide_b", &save_dir).unwrap();

        let rows = read_rows(&path);
        assert!(rows.iter().all(|row| row.len() == rows[0].len()));

        // Every value sits under its own header column
        assert_eq!(rows[1], vec!["slide_a", "2.000000", "6.000000", "0.500000"]);
        assert_eq!(rows[2][1], "6.000000");
        assert_eq!(rows[2][2], "NaN");
        assert_eq!(rows[2][3], "0.500000");
    }

    #[test]
    fn test_all_missing_feature_writes_nan() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("out");
        std::fs::create_dir_all(&save_dir).unwrap();

        let table = build_table(dir.path(), "s", ",FeatA,FeatB\nt1,1.0,\nt2,3.0,\n");
        let path = export_means(&table, &FEATURES, "s", &save_dir).unwrap();
        let rows = read_rows(&path);
        assert_eq!(rows[1][2], "NaN");
    }

    #[test]
    fn test_overflowing_mean_is_written_as_infinity() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("out");
        std::fs::create_dir_all(&save_dir).unwrap();

        // Each cell is finite but the running sum overflows to infinity
        let table = build_table(dir.path(), "s", ",FeatA\nt1,1.7e308\nt2,1.7e308\n");
        let path = export_means(&table, &FEATURES, "s", &save_dir).unwrap();
        let rows = read_rows(&path);
        assert_eq!(rows[1][1], "inf");
    }
}
