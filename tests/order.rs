mod tests {
    use uart_pixel_driver::{Channel, ColorOrder};

    const ALL_ORDERS: [ColorOrder; 12] = [
        ColorOrder::Rgb,
        ColorOrder::Grb,
        ColorOrder::Brg,
        ColorOrder::Rbg,
        ColorOrder::Gbr,
        ColorOrder::Bgr,
        ColorOrder::Rgbw,
        ColorOrder::Grbw,
        ColorOrder::Brgw,
        ColorOrder::Rbgw,
        ColorOrder::Gbrw,
        ColorOrder::Bgrw,
    ];

    #[test]
    fn test_expected_offsets() {
        let expected: [(ColorOrder, [usize; 3], Option<usize>); 12] = [
            (ColorOrder::Rgb, [0, 1, 2], None),
            (ColorOrder::Grb, [1, 0, 2], None),
            (ColorOrder::Brg, [1, 2, 0], None),
            (ColorOrder::Rbg, [0, 2, 1], None),
            (ColorOrder::Gbr, [2, 0, 1], None),
            (ColorOrder::Bgr, [2, 1, 0], None),
            (ColorOrder::Rgbw, [0, 1, 2], Some(3)),
            (ColorOrder::Grbw, [1, 0, 2], Some(3)),
            (ColorOrder::Brgw, [1, 2, 0], Some(3)),
            (ColorOrder::Rbgw, [0, 2, 1], Some(3)),
            (ColorOrder::Gbrw, [2, 0, 1], Some(3)),
            (ColorOrder::Bgrw, [2, 1, 0], Some(3)),
        ];
        for (order, rgb, white) in expected {
            assert_eq!(order.rgb_offsets(), rgb, "{order:?}");
            assert_eq!(order.white_offset(), white, "{order:?}");
        }
    }

    #[test]
    fn test_offsets_are_a_bijection() {
        for order in ALL_ORDERS {
            let mut offsets: Vec<usize> = order.rgb_offsets().to_vec();
            if let Some(w) = order.white_offset() {
                offsets.push(w);
            }
            offsets.sort_unstable();
            let expected: Vec<usize> = (0..order.channel_count()).collect();
            assert_eq!(offsets, expected, "{order:?}");
        }
    }

    #[test]
    fn test_offset_of_matches_tables() {
        for order in ALL_ORDERS {
            let [r, g, b] = order.rgb_offsets();
            assert_eq!(order.offset_of(Channel::R), Some(r));
            assert_eq!(order.offset_of(Channel::G), Some(g));
            assert_eq!(order.offset_of(Channel::B), Some(b));
            assert_eq!(order.offset_of(Channel::W), order.white_offset());
        }
    }

    #[test]
    fn test_white_only_on_four_channel_orders() {
        for order in ALL_ORDERS {
            assert_eq!(order.has_white(), order.channel_count() == 4);
            assert_eq!(order.offset_of(Channel::W).is_some(), order.has_white());
        }
    }
}
