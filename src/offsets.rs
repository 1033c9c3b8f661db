/// Part sizes and anchor offsets for a given robot scale.
///
/// All ratios are fixed relative to a nominal 100-unit body height; sizes are
/// floor-truncated to integers after scaling. Note that `arm_offset_x`'s `+10`
/// and `leg_offset_x`'s `20` are unscaled pixel constants, unlike every other
/// spatial offset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Offsets {
    pub body_size: (u32, u32),
    pub head_size: (u32, u32),
    pub arm_size: (u32, u32),
    pub leg_size: (u32, u32),
    /// Vertical distance from body center to head center (negative = up).
    pub head_offset_y: i32,
    pub arm_offset_x: i32,
    pub arm_offset_y: i32,
    pub leg_offset_x: i32,
    pub leg_offset_y: i32,
}

impl Offsets {
    /// Computes the layout for `scale`. Pure function of `scale`; the caller
    /// is responsible for keeping `scale >= 0.1`.
    pub fn for_scale(scale: f64) -> Offsets {
        let (body_w, body_h) = (120.0 * scale, 100.0 * scale);
        let (head_w, head_h) = (100.0 * scale, 90.0 * scale);
        let (arm_w, arm_h) = (35.0 * scale, 90.0 * scale);
        let (leg_w, leg_h) = (40.0 * scale, 100.0 * scale);
        Offsets {
            body_size: (body_w as u32, body_h as u32),
            head_size: (head_w as u32, head_h as u32),
            arm_size: (arm_w as u32, arm_h as u32),
            leg_size: (leg_w as u32, leg_h as u32),
            // Head sits above the body with a fixed 5-unit (scaled) overlap.
            head_offset_y: -((((body_h / 2.0).floor() + (head_h / 2.0).floor())
                - 5.0 * scale) as i32),
            arm_offset_x: ((body_w / 2.0).floor() + 10.0) as i32,
            arm_offset_y: -((body_h / 4.0).floor() as i32),
            leg_offset_x: 20,
            leg_offset_y: (body_h / 2.0).floor() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_strictly_positive_down_to_minimum_scale() {
        for i in 1..=50 {
            let scale = 0.1 * i as f64;
            let offsets = Offsets::for_scale(scale);
            for (w, h) in [
                offsets.body_size,
                offsets.head_size,
                offsets.arm_size,
                offsets.leg_size,
            ] {
                assert!(w > 0 && h > 0, "zero-area part at scale {scale}");
            }
        }
    }

    #[test]
    fn idempotent_for_equal_scale() {
        assert_eq!(Offsets::for_scale(0.73), Offsets::for_scale(0.73));
        assert_eq!(Offsets::for_scale(1.0), Offsets::for_scale(1.0));
    }

    #[test]
    fn reference_layout_at_unit_scale() {
        let offsets = Offsets::for_scale(1.0);
        assert_eq!(offsets.body_size, (120, 100));
        assert_eq!(offsets.head_size, (100, 90));
        assert_eq!(offsets.arm_size, (35, 90));
        assert_eq!(offsets.leg_size, (40, 100));
        assert_eq!(offsets.head_offset_y, -90);
        assert_eq!(offsets.arm_offset_x, 70);
        assert_eq!(offsets.arm_offset_y, -25);
        assert_eq!(offsets.leg_offset_x, 20);
        assert_eq!(offsets.leg_offset_y, 50);
    }

    #[test]
    fn horizontal_limb_constants_are_unscaled() {
        for scale in [0.1, 0.5, 2.0, 3.7] {
            let offsets = Offsets::for_scale(scale);
            assert_eq!(offsets.leg_offset_x, 20);
            let half_body = (120.0 * scale / 2.0).floor() as i32;
            assert_eq!(offsets.arm_offset_x - half_body, 10);
        }
    }
}
