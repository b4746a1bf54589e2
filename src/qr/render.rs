//! QR 码渲染：编码、叠加 logo、绘制标题栏

use std::io::Cursor;
use std::path::Path;

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::QrCode;
use qrcode::render::unicode;
use tracing::{debug, warn};

use super::{ErrorCorrection, QrRenderOptions};
use crate::errors::{LinkdeckError, Result};

/// font8x8 字形边长
const GLYPH_PX: u32 = 8;

/// 渲染结果
#[derive(Debug, Clone)]
pub struct RenderedQr {
    image: RgbaImage,
    target: String,
    code_height: u32,
    logo_applied: bool,
}

impl RenderedQr {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// 二维码部分的高度，有标题时小于整图高度
    pub fn code_height(&self) -> u32 {
        self.code_height
    }

    pub fn has_caption(&self) -> bool {
        self.image.height() > self.code_height
    }

    pub fn logo_applied(&self) -> bool {
        self.logo_applied
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        self.image.save_with_format(path, ImageFormat::Png)?;
        debug!("QR code saved to {}", path.display());
        Ok(())
    }
}

/// 渲染二维码
///
/// logo 读取失败时降级为不带 logo 的结果，只记录警告
pub fn render(target: &str, options: &QrRenderOptions) -> Result<RenderedQr> {
    let target = target.trim();
    if target.is_empty() {
        return Err(LinkdeckError::render("Nothing to encode"));
    }

    let code =
        QrCode::with_error_correction_level(target.as_bytes(), options.error_correction.level())?;
    let mut canvas: RgbaImage = code
        .render::<Rgba<u8>>()
        .dark_color(options.dark)
        .light_color(options.light)
        .quiet_zone(options.quiet_zone)
        .min_dimensions(options.size_px, options.size_px)
        .build();
    let code_height = canvas.height();

    let logo_applied = match &options.logo {
        Some(path) => match overlay_logo(&mut canvas, path, options.light) {
            Ok(()) => true,
            Err(e) => {
                warn!("Logo {} not applied: {}", path.display(), e);
                false
            }
        },
        None => false,
    };

    if let Some(caption) = options
        .caption
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        canvas = add_caption(canvas, caption, options.dark, options.light);
    }

    Ok(RenderedQr {
        image: canvas,
        target: target.to_string(),
        code_height,
        logo_applied,
    })
}

/// 居中叠加 logo，边长为二维码宽度的 1/5，底下垫一块浅色衬底
fn overlay_logo(canvas: &mut RgbaImage, path: &Path, pad_color: Rgba<u8>) -> Result<()> {
    let logo = image::open(path)?;
    let side = (canvas.width() / 5).max(1);
    let logo = logo.resize(side, side, FilterType::Lanczos3).to_rgba8();

    let padding = (side / 10).max(2);
    let pad = RgbaImage::from_pixel(
        logo.width() + padding * 2,
        logo.height() + padding * 2,
        pad_color,
    );
    let pad_x = canvas.width().saturating_sub(pad.width()) / 2;
    let pad_y = canvas.height().saturating_sub(pad.height()) / 2;

    imageops::overlay(canvas, &pad, i64::from(pad_x), i64::from(pad_y));
    imageops::overlay(
        canvas,
        &logo,
        i64::from(pad_x + padding),
        i64::from(pad_y + padding),
    );
    Ok(())
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// 在底部加一条标题栏，文字居中；放不下时缩小字号，仍放不下则截断
fn add_caption(code: RgbaImage, text: &str, ink: Rgba<u8>, paper: Rgba<u8>) -> RgbaImage {
    let width = code.width();
    let margin = (width / 32).max(4);
    let usable = width.saturating_sub(margin * 2);

    let glyphs: Vec<[u8; 8]> = text.chars().map(glyph).collect();
    let count = glyphs.len() as u32;
    let max_scale = (width / 128).max(1);
    let scale = (1..=max_scale)
        .rev()
        .find(|s| count * GLYPH_PX * s <= usable)
        .unwrap_or(1);
    let cell = GLYPH_PX * scale;
    let shown = glyphs.len().min((usable / cell) as usize);

    let band = cell + margin * 2;
    let mut out = RgbaImage::from_pixel(width, code.height() + band, paper);
    imageops::replace(&mut out, &code, 0, 0);

    let x0 = (width - shown as u32 * cell) / 2;
    let y0 = code.height() + margin;
    for (i, rows) in glyphs.iter().take(shown).enumerate() {
        let gx = x0 + i as u32 * cell;
        for (row, bits) in rows.iter().copied().enumerate() {
            for col in 0..GLYPH_PX {
                if (bits >> col) & 1 == 0 {
                    continue;
                }
                let px = gx + col * scale;
                let py = y0 + row as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        out.put_pixel(px + dx, py + dy, ink);
                    }
                }
            }
        }
    }
    out
}

/// 终端预览用的半块字符
pub fn render_terminal(target: &str, ec: ErrorCorrection, quiet_zone: bool) -> Result<String> {
    let code = QrCode::with_error_correction_level(target.trim().as_bytes(), ec.level())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(quiet_zone)
        .build())
}
