//! Smoke tests for multi-slide progress display

#[cfg(test)]
mod tests {
    use slideheat::io::progress::ProgressManager;

    #[test]
    fn test_small_batch_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.start_slide(0, "917_HE", 5);
        pm.update_stage(0, 1);
        pm.update_stage(0, 5);
        pm.complete_slide(0);

        pm.start_slide(1, "987_HE", 5);
        pm.complete_slide(1);
        pm.finish();
    }

    #[test]
    fn test_large_batch_switches_to_batch_mode() {
        let mut pm = ProgressManager::new();
        pm.initialize(50);

        for index in 0..50 {
            pm.start_slide(index, &format!("slide_{index}"), 3);
            pm.update_stage(index, 3);
            pm.complete_slide(index);
        }
        pm.finish();
    }

    #[test]
    fn test_out_of_order_updates_do_not_panic() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);

        // Updates for a slide never started are ignored
        pm.update_stage(2, 1);
        pm.complete_slide(1);
        pm.finish();
    }

    #[test]
    fn test_default_matches_new() {
        let mut pm = ProgressManager::default();
        pm.initialize(1);
        pm.start_slide(0, "only", 1);
        pm.finish();
    }
}
