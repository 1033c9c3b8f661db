use crate::compose::{draw_list, Anchor};
use crate::graphics::{blit_sprite, fill_background, rotate_sprite, BACKGROUND};
use crate::offsets::Offsets;
use crate::sprites::{PartSprites, SpriteCache};
use crate::state::{AppState, InputState, TINT_COLORS};
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{
    commands,
    piet::{InterpolationMode, Text, TextLayout, TextLayoutBuilder},
    Color, MouseButton, RenderContext, Widget,
};
use image::RgbaImage;
use std::time::{Duration, Instant};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Robot widget: owns the textures and the per-frame input snapshot, drives
/// the update/compose/present cycle off a 16 ms timer.
pub struct RobotWidget {
    sprites: PartSprites,
    cache: SpriteCache,
    held: InputState,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl RobotWidget {
    pub fn new(sprites: PartSprites) -> Self {
        RobotWidget {
            sprites,
            cache: SpriteCache::new(),
            held: InputState::default(),
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    /// Updates the held-key snapshot from a key transition. Returns false for
    /// keys that are not part of the movement/zoom surface.
    fn set_held(&mut self, key: &druid::keyboard_types::Key, pressed: bool) -> bool {
        use druid::keyboard_types::Key;
        match key {
            Key::ArrowLeft => self.held.left = pressed,
            Key::ArrowRight => self.held.right = pressed,
            Key::ArrowUp => self.held.up = pressed,
            Key::ArrowDown => self.held.down = pressed,
            Key::Character(s) => match s.as_str() {
                "w" | "W" => self.held.zoom_in = pressed,
                "s" | "S" => self.held.zoom_out = pressed,
                _ => return false,
            },
            _ => return false,
        }
        true
    }
}

impl Widget<AppState> for RobotWidget {
    /// Handle events for the robot widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                ctx.request_timer(FRAME_INTERVAL);
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::Timer(_) => {
                data.advance(&self.held);
                ctx.request_paint();
                ctx.request_timer(FRAME_INTERVAL);
            }
            Event::KeyDown(key_event) => {
                if self.set_held(&key_event.key, true) {
                    return;
                }
                if let druid::keyboard_types::Key::Character(s) = &key_event.key {
                    match s.as_str() {
                        // Edge-triggered: one palette step per press, not per
                        // frame held.
                        " " => {
                            if !key_event.repeat {
                                data.cycle_tint();
                                ctx.request_paint();
                            }
                        }
                        "d" | "D" => {
                            if !key_event.repeat {
                                data.debug = !data.debug;
                                ctx.request_paint();
                            }
                        }
                        "q" | "Q" => {
                            // Submit the QUIT_APP command to exit the application
                            ctx.submit_command(commands::QUIT_APP);
                        }
                        _ => {}
                    }
                }
            }
            Event::KeyUp(key_event) => {
                self.set_held(&key_event.key, false);
            }
            Event::MouseDown(mouse_event) => {
                if mouse_event.button == MouseButton::Left {
                    data.target = Some([mouse_event.pos.x, mouse_event.pos.y]);
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    /// Determines the layout constraints for the robot widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        bc.max()
    }

    /// Paint the robot widget
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let size = ctx.size();
        let width = size.width as usize;
        let height = size.height as usize;

        // Create and clear the pixel buffer
        let mut pixel_data = vec![0u8; width * height * 4];
        fill_background(&mut pixel_data, BACKGROUND);

        let offsets = Offsets::for_scale(data.scale);
        let tint = if data.tint_enabled {
            let color = TINT_COLORS[data.tint_index as usize % TINT_COLORS.len()];
            Some((data.tint_index, color))
        } else {
            None
        };

        // Composite all six parts back-to-front
        for command in draw_list(data.position, data.phase, &offsets) {
            let part_size = command.part.size(&offsets);
            let sprite = self
                .cache
                .get(command.part, self.sprites.get(command.part), part_size, tint);
            let rotated;
            let sprite: &RgbaImage = if command.angle != 0.0 {
                rotated = rotate_sprite(sprite, command.angle);
                &rotated
            } else {
                sprite
            };
            let sprite_w = sprite.width() as f64;
            let sprite_h = sprite.height() as f64;
            let (left, top) = match command.anchor_kind {
                Anchor::Center => (
                    command.anchor[0] - sprite_w / 2.0,
                    command.anchor[1] - sprite_h / 2.0,
                ),
                Anchor::MidTop => (command.anchor[0] - sprite_w / 2.0, command.anchor[1]),
            };
            blit_sprite(
                &mut pixel_data,
                width,
                height,
                sprite,
                left.round() as i64,
                top.round() as i64,
            );
        }

        // Create and draw the image
        let image = ctx
            .make_image(
                width,
                height,
                &pixel_data,
                druid::piet::ImageFormat::RgbaSeparate,
            )
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);

        // Add debug info if debug mode is enabled
        if data.debug {
            let text = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 10.0));

            // Draw position
            let text = format!(
                "Position: ({:.1}, {:.1})",
                data.position[0], data.position[1]
            );
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 30.0));

            // Draw scale and phase
            let text = format!("Scale: {:.2}, Phase: {:.2}", data.scale, data.phase);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 50.0));

            // Draw tint state
            let text = if data.tint_enabled {
                format!("Tint: palette {}", data.tint_index)
            } else {
                "Tint: off".to_string()
            };
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 70.0));

            // Draw FPS
            let text = format!("FPS: {:.2}", self.fps);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 90.0));
        }
    }
}
