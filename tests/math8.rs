mod tests {
    use myrtio_brightness_groups::math8::{clamp_percent, percent8};

    #[test]
    fn test_percent8() {
        assert_eq!(percent8(255, 50), 127);
        assert_eq!(percent8(200, 50), 100);
        assert_eq!(percent8(99, 33), 32);
        assert_eq!(percent8(1, 99), 0);
        assert_eq!(percent8(255, 1), 2);
    }

    #[test]
    fn test_percent8_bounds() {
        for value in 0..=255u8 {
            assert_eq!(percent8(value, 100), value);
            assert_eq!(percent8(value, 0), 0);
            for scale in [1u8, 10, 33, 50, 67, 99] {
                let scaled = percent8(value, scale);
                assert!(scaled <= value);
                assert_eq!(u16::from(scaled), u16::from(value) * u16::from(scale) / 100);
            }
        }
    }

    #[test]
    fn test_percent8_over_full_scale() {
        assert_eq!(percent8(200, 150), 200);
        assert_eq!(percent8(200, 255), 200);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(0), 0);
        assert_eq!(clamp_percent(100), 100);
        assert_eq!(clamp_percent(101), 100);
        assert_eq!(clamp_percent(255), 100);
    }
}
