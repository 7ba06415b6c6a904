mod tests {
    use uart_pixel_driver::Layout;

    #[test]
    fn test_default_is_identity() {
        let layout = Layout::default();
        assert_eq!(layout.group(), 1);
        assert_eq!(layout.zigzag(), 0);
        for visual in 0..16 {
            assert_eq!(layout.wired_index(visual), visual);
        }
        assert_eq!(layout.physical_range(5), 5..6);
    }

    #[test]
    fn test_zero_group_is_clamped() {
        assert_eq!(Layout::new(0, 0).group(), 1);
    }

    #[test]
    fn test_group_ranges() {
        let layout = Layout::new(3, 0);
        assert_eq!(layout.physical_range(0), 0..3);
        assert_eq!(layout.physical_range(1), 3..6);
        assert_eq!(layout.physical_range(2), 6..9);
    }

    #[test]
    fn test_zigzag_reverses_odd_runs() {
        let layout = Layout::new(1, 3);
        // Even run: unchanged.
        assert_eq!(layout.wired_index(0), 0);
        assert_eq!(layout.wired_index(1), 1);
        assert_eq!(layout.wired_index(2), 2);
        // Odd run: reversed in place.
        assert_eq!(layout.wired_index(3), 5);
        assert_eq!(layout.wired_index(4), 4);
        assert_eq!(layout.wired_index(5), 3);
        // Next even run: unchanged again.
        assert_eq!(layout.wired_index(6), 6);
    }

    #[test]
    fn test_zigzag_is_an_involution() {
        let layout = Layout::new(1, 4);
        for visual in 0..32 {
            let wired = layout.wired_index(visual);
            assert_eq!(layout.wired_index(wired), visual);
        }
    }
}
