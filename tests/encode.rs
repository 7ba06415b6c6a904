mod tests {
    use uart_pixel_driver::encode::{
        GECE_LOOKUP, GECE_PACKET_BITS, GecePacket, WS2811_LOOKUP, expand_ws2811,
    };

    #[test]
    fn test_ws2811_lookup_values() {
        assert_eq!(WS2811_LOOKUP, [0b0011_0111, 0b0000_0111, 0b0011_0100, 0b0000_0100]);
    }

    #[test]
    fn test_expand_is_msb_first() {
        // 10 10 01 01
        assert_eq!(
            expand_ws2811(0xA5),
            [
                WS2811_LOOKUP[0b10],
                WS2811_LOOKUP[0b10],
                WS2811_LOOKUP[0b01],
                WS2811_LOOKUP[0b01],
            ]
        );
        assert_eq!(expand_ws2811(0x00), [WS2811_LOOKUP[0]; 4]);
        assert_eq!(expand_ws2811(0xFF), [WS2811_LOOKUP[3]; 4]);
    }

    #[test]
    fn test_expand_round_trips_every_byte() {
        let decode = |symbol: u8| -> u8 {
            WS2811_LOOKUP
                .iter()
                .position(|&entry| entry == symbol)
                .expect("symbol not in lookup table") as u8
        };
        for value in 0..=255u8 {
            let symbols = expand_ws2811(value);
            let mut rebuilt = 0u8;
            for symbol in symbols {
                rebuilt = (rebuilt << 2) | decode(symbol);
            }
            assert_eq!(rebuilt, value);
        }
    }

    #[test]
    fn test_gece_compose_reference_packet() {
        let packet = GecePacket {
            address: 0x2A,
            brightness: 0xCC,
            red: 0x5,
            green: 0x3,
            blue: 0xF,
        };
        assert_eq!(packet.compose(), 0x02AC_CF35);
    }

    #[test]
    fn test_gece_for_pixel_takes_high_nibbles() {
        let packet = GecePacket::for_pixel(0x2A, 0xCC, 0x5A, 0x3C, 0xF0);
        assert_eq!(packet.red, 0x5);
        assert_eq!(packet.green, 0x3);
        assert_eq!(packet.blue, 0xF);
        assert_eq!(packet.compose(), 0x02AC_CF35);
    }

    #[test]
    fn test_gece_encode_is_msb_first() {
        let mut out = [0u8; GECE_PACKET_BITS];

        // Address bit 25 set, everything else clear.
        let packet = GecePacket {
            address: 0b10_0000,
            brightness: 0,
            red: 0,
            green: 0,
            blue: 0,
        };
        packet.encode_into(&mut out);
        assert_eq!(out[0], GECE_LOOKUP[1]);
        assert!(out[1..].iter().all(|&b| b == GECE_LOOKUP[0]));

        // Red bit 0 set lands in the last byte out.
        let packet = GecePacket {
            address: 0,
            brightness: 0,
            red: 1,
            green: 0,
            blue: 0,
        };
        packet.encode_into(&mut out);
        assert_eq!(out[GECE_PACKET_BITS - 1], GECE_LOOKUP[1]);
        assert!(out[..GECE_PACKET_BITS - 1].iter().all(|&b| b == GECE_LOOKUP[0]));
    }
}
