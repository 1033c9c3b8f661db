use druid::Data;

/// Units moved per frame per held direction key, and per seek step.
pub const MOVE_SPEED: f64 = 5.0;
/// Walk-cycle phase advance per frame per movement input.
pub const STEP_SPEED: f64 = 0.1;
/// Scale change per frame per held zoom key.
pub const ZOOM_SPEED: f64 = 0.01;
/// Hard floor for the robot scale.
pub const MIN_SCALE: f64 = 0.1;

/// Tint palette cycled by the tint key, indexed by `AppState::tint_index`.
pub const TINT_COLORS: [[u8; 3]; 5] = [
    [50, 50, 60],
    [50, 0, 0],
    [0, 50, 0],
    [60, 0, 70],
    [100, 50, 0],
];

/// Direction and zoom keys held during the current frame.
#[derive(Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
}

/// Application state
#[derive(Clone, Data)]
pub struct AppState {
    /// Robot position (body center) in window coordinates
    pub position: [f64; 2],
    /// Robot scale, clamped to `MIN_SCALE`
    pub scale: f64,
    /// Walk-cycle phase; advances monotonically, never wrapped
    pub phase: f64,
    /// Tint mode enabled
    pub tint_enabled: bool,
    /// Current index into `TINT_COLORS`
    pub tint_index: u32,
    /// Click-to-move target, cleared on arrival
    pub target: Option<[f64; 2]>,
    /// Enable debug overlay
    pub debug: bool,
}

impl AppState {
    /// Initial state: robot centered in a `width` x `height` window.
    pub fn new(width: f64, height: f64, debug: bool) -> Self {
        AppState {
            position: [width / 2.0, height / 2.0],
            scale: 1.0,
            phase: 0.0,
            tint_enabled: false,
            tint_index: 0,
            target: None,
            debug,
        }
    }

    /// Applies one frame of movement, zoom and seek. Each movement input
    /// advances the phase independently, so holding several keys speeds up
    /// the walk cycle. Keyboard movement and pointer seek both apply within
    /// the same frame.
    pub fn advance(&mut self, input: &InputState) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if input.left {
            dx -= MOVE_SPEED;
            self.phase += STEP_SPEED;
        }
        if input.right {
            dx += MOVE_SPEED;
            self.phase += STEP_SPEED;
        }
        if input.up {
            dy -= MOVE_SPEED;
            self.phase += STEP_SPEED;
        }
        if input.down {
            dy += MOVE_SPEED;
            self.phase += STEP_SPEED;
        }
        self.position[0] += dx;
        self.position[1] += dy;

        if input.zoom_in {
            self.scale += ZOOM_SPEED;
            self.phase += STEP_SPEED;
        }
        if input.zoom_out {
            self.scale = (self.scale - ZOOM_SPEED).max(MIN_SCALE);
            self.phase += STEP_SPEED;
        }

        if let Some(target) = self.target {
            let mdx = target[0] - self.position[0];
            let mdy = target[1] - self.position[1];
            let dist = mdx.hypot(mdy);
            if dist > MOVE_SPEED {
                self.position[0] += mdx / dist * MOVE_SPEED;
                self.position[1] += mdy / dist * MOVE_SPEED;
                self.phase += STEP_SPEED;
            } else {
                // Arrival is exact: snap to the target, no overshoot.
                self.position = target;
                self.target = None;
            }
        }
    }

    /// Tint key handler: enables tinting and steps to the next palette color.
    /// The first press lands on palette index 1, not 0.
    pub fn cycle_tint(&mut self) {
        self.tint_enabled = true;
        self.tint_index = (self.tint_index + 1) % TINT_COLORS.len() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(800.0, 600.0, false)
    }

    #[test]
    fn direction_keys_move_and_step() {
        let mut s = state();
        s.advance(&InputState {
            right: true,
            down: true,
            ..Default::default()
        });
        assert_eq!(s.position, [405.0, 305.0]);
        // Two held keys each advance the phase.
        assert!((s.phase - 2.0 * STEP_SPEED).abs() < 1e-12);
    }

    #[test]
    fn zoom_never_drops_below_floor() {
        let mut s = state();
        s.scale = 0.12;
        let input = InputState {
            zoom_out: true,
            ..Default::default()
        };
        for _ in 0..100 {
            s.advance(&input);
        }
        assert_eq!(s.scale, MIN_SCALE);
    }

    #[test]
    fn seek_moves_exactly_move_speed_toward_distant_target() {
        let mut s = state();
        s.target = Some([400.0 + 30.0, 300.0 + 40.0]);
        s.advance(&InputState::default());
        // 3-4-5 triangle: unit vector (0.6, 0.8) times MOVE_SPEED.
        assert!((s.position[0] - 403.0).abs() < 1e-9);
        assert!((s.position[1] - 304.0).abs() < 1e-9);
        assert!(s.target.is_some());
        assert!(s.phase > 0.0);
    }

    #[test]
    fn seek_snaps_and_clears_target_within_reach() {
        let mut s = state();
        s.target = Some([403.0, 302.0]);
        s.advance(&InputState::default());
        assert_eq!(s.position, [403.0, 302.0]);
        assert!(s.target.is_none());
    }

    #[test]
    fn keyboard_and_seek_apply_in_the_same_frame() {
        let mut s = state();
        s.target = Some([500.0, 300.0]);
        s.advance(&InputState {
            up: true,
            ..Default::default()
        });
        // Key moved the robot up, then the seek step pulled it toward the
        // target from the already-moved position (100, 5) away.
        let dist = 10025.0_f64.sqrt();
        assert!((s.position[0] - (400.0 + 500.0 / dist)).abs() < 1e-9);
        assert!((s.position[1] - (295.0 + 25.0 / dist)).abs() < 1e-9);
    }

    #[test]
    fn tint_cycles_through_palette() {
        let mut s = state();
        assert!(!s.tint_enabled);
        s.cycle_tint();
        assert!(s.tint_enabled);
        assert_eq!(s.tint_index, 1);
        for _ in 0..7 {
            s.cycle_tint();
        }
        assert_eq!(s.tint_index, 8 % 5);
    }
}
