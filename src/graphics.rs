use image::RgbaImage;

/// Background color cleared at the start of every frame.
pub const BACKGROUND: [u8; 3] = [40, 40, 40];

/// Fills the RGBA pixel buffer with an opaque flat color.
pub fn fill_background(pixel_data: &mut [u8], color: [u8; 3]) {
    for pixel in pixel_data.chunks_exact_mut(4) {
        pixel[0] = color[0];
        pixel[1] = color[1];
        pixel[2] = color[2];
        pixel[3] = 255;
    }
}

/// Resamples `src` to `width` x `height` with nearest-neighbor sampling,
/// preserving alpha. Degenerate requests are clamped to 1x1 so a very small
/// scale never produces a zero-area image.
pub fn scale_sprite(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let width = width.max(1);
    let height = height.max(1);
    let mut out = RgbaImage::new(width, height);
    for y in 0..height {
        let sy = (y as u64 * src.height() as u64 / height as u64) as u32;
        for x in 0..width {
            let sx = (x as u64 * src.width() as u64 / width as u64) as u32;
            out.put_pixel(x, y, *src.get_pixel(sx, sy));
        }
    }
    out
}

/// Rotates `src` counterclockwise by `degrees` about its center. The output
/// is the bounding box of the rotated image; uncovered pixels are fully
/// transparent.
pub fn rotate_sprite(src: &RgbaImage, degrees: f64) -> RgbaImage {
    let (sin_t, cos_t) = degrees.to_radians().sin_cos();
    let src_w = src.width() as f64;
    let src_h = src.height() as f64;
    let out_w = (src_w * cos_t.abs() + src_h * sin_t.abs()).ceil().max(1.0) as u32;
    let out_h = (src_w * sin_t.abs() + src_h * cos_t.abs()).ceil().max(1.0) as u32;
    let out_cx = out_w as f64 / 2.0;
    let out_cy = out_h as f64 / 2.0;
    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let mut out = RgbaImage::new(out_w, out_h);
    for y in 0..out_h {
        for x in 0..out_w {
            let dx = x as f64 + 0.5 - out_cx;
            let dy = y as f64 + 0.5 - out_cy;
            // Inverse mapping: rotate the output offset back into the source.
            let sx = dx * cos_t - dy * sin_t + src_cx;
            let sy = dx * sin_t + dy * cos_t + src_cy;
            if sx >= 0.0 && sx < src_w && sy >= 0.0 && sy < src_h {
                out.put_pixel(x, y, *src.get_pixel(sx as u32, sy as u32));
            }
        }
    }
    out
}

/// Returns a copy of `src` with `color` additively blended onto every pixel.
/// Alpha is untouched, so transparency is preserved and the source image is
/// never mutated.
pub fn tint_sprite(src: &RgbaImage, color: [u8; 3]) -> RgbaImage {
    let mut out = src.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = pixel.0[0].saturating_add(color[0]);
        pixel.0[1] = pixel.0[1].saturating_add(color[1]);
        pixel.0[2] = pixel.0[2].saturating_add(color[2]);
    }
    out
}

/// Alpha-over composites `sprite` into the RGBA pixel buffer with its
/// top-left corner at (`left`, `top`), clipping against the buffer bounds.
pub fn blit_sprite(
    pixel_data: &mut [u8],
    buf_width: usize,
    buf_height: usize,
    sprite: &RgbaImage,
    left: i64,
    top: i64,
) {
    for y in 0..sprite.height() {
        let dy = top + y as i64;
        if dy < 0 || dy >= buf_height as i64 {
            continue;
        }
        for x in 0..sprite.width() {
            let dx = left + x as i64;
            if dx < 0 || dx >= buf_width as i64 {
                continue;
            }
            let src = sprite.get_pixel(x, y).0;
            let alpha = src[3] as u32;
            if alpha == 0 {
                continue;
            }
            let offset = (dy as usize * buf_width + dx as usize) * 4;
            for channel in 0..3 {
                let dst = pixel_data[offset + channel] as u32;
                let blended = (src[channel] as u32 * alpha + dst * (255 - alpha)) / 255;
                pixel_data[offset + channel] = blended as u8;
            }
            pixel_data[offset + 3] = 255;
        }
    }
}
