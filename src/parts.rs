use crate::offsets::Offsets;

/// The six body parts of the robot, back-to-front draw order is fixed
/// elsewhere; this enum is the closed set of parts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Part {
    Body,
    Head,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Part {
    pub const ALL: [Part; 6] = [
        Part::Body,
        Part::Head,
        Part::LeftArm,
        Part::RightArm,
        Part::LeftLeg,
        Part::RightLeg,
    ];

    /// Texture file name for this part under the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Part::Body => "body.png",
            Part::Head => "head.png",
            Part::LeftArm => "left_arm.png",
            Part::RightArm => "right_arm.png",
            Part::LeftLeg => "left_leg.png",
            Part::RightLeg => "right_leg.png",
        }
    }

    /// Rendered size of this part at the given layout.
    pub fn size(self, offsets: &Offsets) -> (u32, u32) {
        match self {
            Part::Body => offsets.body_size,
            Part::Head => offsets.head_size,
            Part::LeftArm | Part::RightArm => offsets.arm_size,
            Part::LeftLeg | Part::RightLeg => offsets.leg_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arms_and_legs_share_sizes() {
        let offsets = Offsets::for_scale(1.0);
        assert_eq!(
            Part::LeftArm.size(&offsets),
            Part::RightArm.size(&offsets)
        );
        assert_eq!(
            Part::LeftLeg.size(&offsets),
            Part::RightLeg.size(&offsets)
        );
    }

    #[test]
    fn file_names_are_distinct() {
        for (i, a) in Part::ALL.iter().enumerate() {
            for b in &Part::ALL[i + 1..] {
                assert_ne!(a.file_name(), b.file_name());
            }
        }
    }
}
