//! Validates plasma colormap endpoints and clamping

#[cfg(test)]
mod tests {
    use image::Rgb;
    use slideheat::render::colormap::plasma;

    #[test]
    fn test_plasma_endpoints_match_anchors() {
        assert_eq!(plasma(0.0), Rgb([13, 8, 135]));
        assert_eq!(plasma(1.0), Rgb([240, 249, 33]));
        assert_eq!(plasma(0.5), Rgb([189, 55, 134]));
    }

    #[test]
    fn test_plasma_clamps_out_of_range_inputs() {
        assert_eq!(plasma(-2.5), plasma(0.0));
        assert_eq!(plasma(7.0), plasma(1.0));
    }

    #[test]
    fn test_plasma_maps_nan_to_low_end() {
        assert_eq!(plasma(f32::NAN), plasma(0.0));
    }

    #[test]
    fn test_plasma_interpolates_between_anchors() {
        // Halfway between the 0.0 and 0.125 anchors
        let Rgb([r, g, b]) = plasma(0.0625);
        assert_eq!(r, 42); // midpoint of 13 and 70, rounded
        assert_eq!(g, 6); // midpoint of 8 and 3, rounded
        assert_eq!(b, 147);
    }

    #[test]
    fn test_plasma_red_channel_increases_over_lower_range() {
        let mut previous = 0u8;
        for step in 0..=8 {
            let Rgb([r, _, _]) = plasma(step as f32 / 8.0 * 0.875);
            assert!(r >= previous, "red dipped at step {step}");
            previous = r;
        }
    }
}
