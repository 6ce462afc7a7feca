mod tests {
    use myrtio_brightness_groups::color::{
        Rgbw, White, pack_rgbw, rgbw_from_u32, rgbw_to_u32, scale_rgbw,
    };

    const WARM: Rgbw = Rgbw {
        r: 0x11,
        g: 0x22,
        b: 0x33,
        a: White(0x44),
    };

    #[test]
    fn test_rgbw_from_u32() {
        let color = rgbw_from_u32(0x4411_2233);
        assert_eq!(color.r, 0x11);
        assert_eq!(color.g, 0x22);
        assert_eq!(color.b, 0x33);
        assert_eq!(color.a.0, 0x44);
    }

    #[test]
    fn test_rgbw_to_u32() {
        assert_eq!(rgbw_to_u32(WARM), 0x4411_2233);
        assert_eq!(pack_rgbw(0x11, 0x22, 0x33, 0x44), 0x4411_2233);
        assert_eq!(pack_rgbw(255, 0, 0, 0), 0x00FF_0000);
        assert_eq!(pack_rgbw(0, 0, 0, 255), 0xFF00_0000);
    }

    #[test]
    fn test_scale_rgbw() {
        let color = pack_rgbw(200, 100, 50, 255);
        let scaled = scale_rgbw(rgbw_from_u32(color), 50);
        assert_eq!(rgbw_to_u32(scaled), pack_rgbw(100, 50, 25, 127));

        assert_eq!(rgbw_to_u32(scale_rgbw(WARM, 100)), 0x4411_2233);
        assert_eq!(rgbw_to_u32(scale_rgbw(WARM, 0)), 0);
    }
}
