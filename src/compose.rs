use std::f64::consts::PI;

use crate::offsets::Offsets;
use crate::parts::Part;

/// Peak vertical leg travel in pixels.
pub const LEG_SWING: f64 = 15.0;
/// Peak arm rotation in degrees.
pub const ARM_SWING: f64 = 5.0;

/// How a draw command's anchor point maps onto the image.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Anchor {
    /// Anchor at the geometric center of the image (body, head).
    Center,
    /// Anchor at the horizontal-center/top edge of the image (arms, legs,
    /// whose natural pivot is at the top).
    MidTop,
}

/// One part placement for the current frame; produced and consumed within a
/// single paint pass.
#[derive(Clone, Copy, Debug)]
pub struct DrawCommand {
    pub part: Part,
    pub anchor: [f64; 2],
    pub anchor_kind: Anchor,
    /// Rotation in degrees, counterclockwise, about the image center.
    pub angle: f64,
}

pub fn left_leg_offset(phase: f64) -> f64 {
    LEG_SWING * phase.sin()
}

pub fn right_leg_offset(phase: f64) -> f64 {
    LEG_SWING * (phase + PI).sin()
}

pub fn left_arm_angle(phase: f64) -> f64 {
    ARM_SWING * (phase + PI).sin()
}

pub fn right_arm_angle(phase: f64) -> f64 {
    ARM_SWING * phase.sin()
}

/// Builds the frame's draw list in fixed back-to-front order: legs behind the
/// body, arms and head in front. The contralateral gait falls out of the
/// swing functions: the left arm is in phase with the right leg.
pub fn draw_list(position: [f64; 2], phase: f64, offsets: &Offsets) -> Vec<DrawCommand> {
    let [x, y] = position;
    let leg_y = y + offsets.leg_offset_y as f64;
    let arm_y = y + offsets.arm_offset_y as f64;
    vec![
        DrawCommand {
            part: Part::LeftLeg,
            anchor: [x - offsets.leg_offset_x as f64, leg_y + left_leg_offset(phase)],
            anchor_kind: Anchor::MidTop,
            angle: 0.0,
        },
        DrawCommand {
            part: Part::RightLeg,
            anchor: [x + offsets.leg_offset_x as f64, leg_y + right_leg_offset(phase)],
            anchor_kind: Anchor::MidTop,
            angle: 0.0,
        },
        DrawCommand {
            part: Part::Body,
            anchor: [x, y],
            anchor_kind: Anchor::Center,
            angle: 0.0,
        },
        DrawCommand {
            part: Part::LeftArm,
            anchor: [x - offsets.arm_offset_x as f64, arm_y],
            anchor_kind: Anchor::MidTop,
            angle: left_arm_angle(phase),
        },
        DrawCommand {
            part: Part::RightArm,
            anchor: [x + offsets.arm_offset_x as f64, arm_y],
            anchor_kind: Anchor::MidTop,
            angle: right_arm_angle(phase),
        },
        DrawCommand {
            part: Part::Head,
            anchor: [x, y + offsets.head_offset_y as f64],
            anchor_kind: Anchor::Center,
            angle: 0.0,
        },
    ]
}
