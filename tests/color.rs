mod tests {
    use strip_director::Rgb;
    use strip_director::color::{
        BLACK, BLUE, Color, DARK_GREEN, GREEN, PaletteDisplay, RED, WHITE, combine,
    };

    #[test]
    fn test_packing() {
        let color = Color::new(0x12, 0x34, 0x56);
        assert_eq!(color.to_u32(), 0x0012_3456);
        assert_eq!((color.r(), color.g(), color.b()), (0x12, 0x34, 0x56));
        assert_eq!(Color::from_u32(0xFF12_3456), color);
        assert_eq!(color.to_grb(), 0x0034_1256);
    }

    #[test]
    fn test_scale_bounds() {
        for value in [0x00_0000, 0x12_3456, 0xFF_FFFF, 0x80_0001, 0x00_FF00] {
            let color = Color::from_u32(value);
            assert_eq!(color.scale(0), BLACK);
            assert_eq!(color.scale(255), color);
        }
    }

    #[test]
    fn test_scale_floors_each_channel() {
        let color = Color::new(255, 128, 1);
        assert_eq!(color.scale(128), Color::new(128, 64, 0));
        assert_eq!(WHITE.scale(63), Color::new(63, 63, 63));
        assert_eq!(DARK_GREEN.scale(191), Color::new(0, 47, 0));
    }

    #[test]
    fn test_combine_is_bitwise_or() {
        assert_eq!(combine([RED, BLUE]), Color::new(255, 0, 255));
        assert_eq!(combine([]), BLACK);
        // Overlapping channels OR together rather than add
        let a = Color::new(0x0F, 0x10, 0);
        let b = Color::new(0xF0, 0x01, 0);
        assert_eq!(combine([a, b]), Color::new(0xFF, 0x11, 0));
        assert_eq!(combine([GREEN, GREEN]), GREEN);

        let mut cell = BLACK;
        cell |= a;
        cell |= b;
        assert_eq!(cell, a | b);
    }

    #[test]
    fn test_rgb_conversion() {
        let rgb = Rgb {
            r: 1,
            g: 2,
            b: 3,
        };
        let color = Color::from(rgb);
        assert_eq!(color, Color::new(1, 2, 3));
        assert_eq!(Rgb::from(color), rgb);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(0, 255, 1).to_string(), "0x00ff01");
        assert_eq!(
            PaletteDisplay(&[RED, BLUE]).to_string(),
            "[0xff0000, 0x0000ff]"
        );
        assert_eq!(PaletteDisplay(&[]).to_string(), "[]");
    }
}
