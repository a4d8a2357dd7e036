//! Procedural terrain backdrops.
//!
//! Each terrain category maps to a base fill color plus an overlay pattern
//! built from randomized shapes. Shape counts, size ranges, and opacities
//! are fixed per pattern; placement is randomized per generation, so two
//! generations of the same category are statistically alike but not
//! pixel-identical.
//!
//! Painting is synchronous and draws into whatever 2d context it is given.
//! The engine paints once into an offscreen canvas and re-blits that bitmap
//! every frame; regeneration happens only when the planet, the texture
//! choice, or the canvas size changes.

#[cfg(test)]
#[path = "texture_test.rs"]
mod texture_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Overlay pattern drawn on top of the base fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Acid streaks.
    Toxic,
    /// Scorched radial spots.
    Radioactive,
    /// Crystalline outlines.
    Ice,
    /// Meandering lava flows.
    Volcanic,
    /// Organic vegetation blobs.
    Vegetation,
    /// Horizontal dune curves.
    Desert,
    /// Irregular polygon blobs.
    Exotic,
    /// Soft pastel patches.
    Paradise,
    /// Craters with darker floors.
    Barren,
    /// Dust patches and surface cracks.
    Sterile,
    /// Hexagonal crystals with bright veins.
    Jade,
    /// Spore clusters under drifting clouds.
    Spore,
    /// Dark scars and rust streaks.
    Abandoned,
    /// Rocky outcrops and cracked stone.
    Purple,
    /// Glow gradients, electric arcs, and particles.
    Isotopic,
}

/// A texture: its lookup key, base fill color, and overlay pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureStyle {
    pub key: &'static str,
    pub color: &'static str,
    pub pattern: Pattern,
}

/// Every available texture, keyed by pattern name.
pub const TEXTURE_STYLES: &[TextureStyle] = &[
    TextureStyle { key: "toxic", color: "#7dff00", pattern: Pattern::Toxic },
    TextureStyle { key: "radioactive", color: "#ff6b00", pattern: Pattern::Radioactive },
    TextureStyle { key: "ice", color: "#00d9ff", pattern: Pattern::Ice },
    TextureStyle { key: "volcanic", color: "#ff0000", pattern: Pattern::Volcanic },
    TextureStyle { key: "temperate", color: "#00ff88", pattern: Pattern::Vegetation },
    TextureStyle { key: "lush", color: "#00bb44", pattern: Pattern::Vegetation },
    TextureStyle { key: "desert", color: "#ffcc00", pattern: Pattern::Desert },
    TextureStyle { key: "barren", color: "#666666", pattern: Pattern::Barren },
    TextureStyle { key: "exotic", color: "#ff00ff", pattern: Pattern::Exotic },
    TextureStyle { key: "paradise", color: "#88ffff", pattern: Pattern::Paradise },
    TextureStyle { key: "sterile", color: "#ff9933", pattern: Pattern::Sterile },
    TextureStyle { key: "jade", color: "#cc66cc", pattern: Pattern::Jade },
    TextureStyle { key: "spore", color: "#66dd44", pattern: Pattern::Spore },
    TextureStyle { key: "abandoned", color: "#442200", pattern: Pattern::Abandoned },
    TextureStyle { key: "purple", color: "#884444", pattern: Pattern::Purple },
    TextureStyle { key: "isotopic", color: "#00aaff", pattern: Pattern::Isotopic },
];

/// Terrain category → texture key. Categories come from the game and are
/// stored verbatim on planet records.
pub const TERRAIN_TEXTURES: &[(&str, &str)] = &[
    ("Toxique", "toxic"),
    ("Radioactive", "radioactive"),
    ("Gelée", "ice"),
    ("Glacée", "ice"),
    ("Brûlante", "volcanic"),
    ("Volcanique", "volcanic"),
    ("Tempérée", "temperate"),
    ("Luxuriante", "lush"),
    ("Aride", "desert"),
    ("Désertique", "desert"),
    ("Morte", "barren"),
    ("Stérile", "sterile"),
    ("Exotique", "exotic"),
    ("Paradisiaque", "paradise"),
    ("Jade condamnée", "jade"),
    ("Sporifère", "spore"),
    ("Abandonnée", "abandoned"),
    ("Pourpre", "purple"),
    ("Isotopique", "isotopic"),
];

/// Texture key used for unrecognized categories.
pub const DEFAULT_TEXTURE_KEY: &str = "barren";

const FALLBACK_STYLE: TextureStyle =
    TextureStyle { key: "barren", color: "#666666", pattern: Pattern::Barren };

/// Look up a texture by pattern key.
#[must_use]
pub fn style(key: &str) -> Option<&'static TextureStyle> {
    TEXTURE_STYLES.iter().find(|s| s.key == key)
}

/// Resolve the texture for a planet: an explicit override wins, then the
/// terrain category, then the default. Unknown keys fall back to the
/// default as well.
#[must_use]
pub fn texture_for(kind: &str, override_key: Option<&str>) -> &'static TextureStyle {
    let from_kind = || {
        TERRAIN_TEXTURES
            .iter()
            .find(|(name, _)| *name == kind)
            .map(|(_, key)| *key)
    };
    let key = override_key.or_else(from_kind).unwrap_or(DEFAULT_TEXTURE_KEY);
    style(key).unwrap_or(&FALLBACK_STYLE)
}

/// Fill the full surface with the base color, then draw the overlay.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn paint(
    ctx: &CanvasRenderingContext2d,
    texture: &TextureStyle,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(texture.color);
    ctx.fill_rect(0.0, 0.0, width, height);

    match texture.pattern {
        Pattern::Toxic => toxic(ctx, width, height),
        Pattern::Radioactive => radioactive(ctx, width, height)?,
        Pattern::Ice => ice(ctx, width, height),
        Pattern::Volcanic => volcanic(ctx, width, height),
        Pattern::Vegetation => vegetation(ctx, width, height)?,
        Pattern::Desert => desert(ctx, width, height),
        Pattern::Exotic => exotic(ctx, width, height),
        Pattern::Paradise => paradise(ctx, width, height)?,
        Pattern::Barren => barren(ctx, width, height)?,
        Pattern::Sterile => sterile(ctx, width, height)?,
        Pattern::Jade => jade(ctx, width, height),
        Pattern::Spore => spore(ctx, width, height)?,
        Pattern::Abandoned => abandoned(ctx, width, height)?,
        Pattern::Purple => purple(ctx, width, height)?,
        Pattern::Isotopic => isotopic(ctx, width, height)?,
    }

    ctx.set_global_alpha(1.0);
    Ok(())
}

// =============================================================
// Randomization helpers (browser PRNG; determinism not required)
// =============================================================

fn rand_range(lo: f64, hi: f64) -> f64 {
    (hi - lo).mul_add(js_sys::Math::random(), lo)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn pick<'a>(choices: &[&'a str]) -> &'a str {
    let idx = (js_sys::Math::random() * choices.len() as f64) as usize;
    choices[idx.min(choices.len() - 1)]
}

fn filled_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, 2.0 * PI)?;
    ctx.fill();
    Ok(())
}

// =============================================================
// Overlay patterns
// =============================================================

/// Acid streaks: short wide rectangles.
fn toxic(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_global_alpha(0.3);
    ctx.set_fill_style_str("#5bbd00");
    for _ in 0..50 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let w = rand_range(50.0, 150.0);
        let h = rand_range(5.0, 25.0);
        ctx.fill_rect(x, y, w, h);
    }
}

/// Scorched spots.
fn radioactive(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.4);
    ctx.set_fill_style_str("#cc5500");
    for _ in 0..40 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(10.0, 40.0);
        filled_circle(ctx, x, y, r)?;
    }
    Ok(())
}

/// Crystal outlines: stroked diamonds.
fn ice(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_global_alpha(0.3);
    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width(2.0);
    for _ in 0..30 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let size = rand_range(20.0, 60.0);
        ctx.begin_path();
        ctx.move_to(x, y - size);
        ctx.line_to(x + size / 2.0, y);
        ctx.line_to(x, y + size);
        ctx.line_to(x - size / 2.0, y);
        ctx.close_path();
        ctx.stroke();
    }
}

/// Lava flows: meandering downward polylines of varying thickness.
fn volcanic(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_global_alpha(0.4);
    ctx.set_stroke_style_str("#cc0000");
    for _ in 0..20 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        ctx.begin_path();
        ctx.move_to(x, y);
        for j in 0..5 {
            ctx.line_to(x + rand_range(-50.0, 50.0), (f64::from(j)).mul_add(20.0, y));
        }
        ctx.set_line_width(rand_range(5.0, 15.0));
        ctx.stroke();
    }
}

/// Organic vegetation blobs.
fn vegetation(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.3);
    ctx.set_fill_style_str("#00bb66");
    for _ in 0..60 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(5.0, 25.0);
        filled_circle(ctx, x, y, r)?;
    }
    Ok(())
}

/// Dune curves: horizontal wavy lines across the full width.
fn desert(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_global_alpha(0.3);
    ctx.set_stroke_style_str("#cc9900");
    ctx.set_line_width(3.0);
    for i in 0..15 {
        let y = f64::from(i) / 15.0 * height;
        ctx.begin_path();
        ctx.move_to(0.0, y);
        let mut x = 0.0;
        while x < width {
            ctx.quadratic_curve_to(x + 25.0, y + rand_range(-10.0, 10.0), x + 50.0, y);
            x += 50.0;
        }
        ctx.stroke();
    }
}

/// Irregular filled polygons with 5–9 sides.
fn exotic(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_global_alpha(0.3);
    ctx.set_fill_style_str("#cc00cc");
    for _ in 0..25 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let sides = rand_range(5.0, 10.0).floor();
        let radius = rand_range(15.0, 45.0);
        polygon(ctx, x, y, sides, radius);
        ctx.fill();
    }
}

/// Soft pastel patches in several hues.
fn paradise(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.2);
    let colors = ["#00ffaa", "#00ddff", "#88ffff", "#aaffff"];
    for _ in 0..40 {
        ctx.set_fill_style_str(pick(&colors));
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(20.0, 60.0);
        filled_circle(ctx, x, y, r)?;
    }
    Ok(())
}

/// Craters: a rim disc with a darker floor inside.
fn barren(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.4);
    for _ in 0..20 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(10.0, 50.0);
        ctx.set_fill_style_str("#444444");
        filled_circle(ctx, x, y, r)?;
        ctx.set_fill_style_str("#333333");
        filled_circle(ctx, x, y, r * 0.7)?;
    }
    Ok(())
}

/// Dust patches plus thin surface cracks.
fn sterile(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.3);
    ctx.set_fill_style_str("#cc6600");
    for _ in 0..35 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(20.0, 70.0);
        filled_circle(ctx, x, y, r)?;
    }
    ctx.set_stroke_style_str("#ff8833");
    ctx.set_line_width(2.0);
    for _ in 0..15 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        ctx.begin_path();
        ctx.move_to(x, y);
        ctx.line_to(x + rand_range(-75.0, 75.0), y + rand_range(-75.0, 75.0));
        ctx.stroke();
    }
    Ok(())
}

/// Hexagonal crystals with bright veins running between them.
fn jade(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_global_alpha(0.3);
    let colors = ["#dd88dd", "#bb66bb", "#ff99ff"];
    for _ in 0..30 {
        ctx.set_fill_style_str(pick(&colors));
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let size = rand_range(15.0, 50.0);
        polygon(ctx, x, y, 6.0, size);
        ctx.fill();
    }
    ctx.set_stroke_style_str("#ffaaff");
    ctx.set_line_width(3.0);
    for _ in 0..12 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        ctx.begin_path();
        ctx.move_to(x, y);
        for j in 0..4 {
            ctx.line_to(x + rand_range(-50.0, 50.0), (f64::from(j)).mul_add(30.0, y));
        }
        ctx.stroke();
    }
}

/// Spore clusters under drifting spore clouds.
fn spore(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.4);
    ctx.set_fill_style_str("#44bb22");
    for _ in 0..45 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let cluster = rand_range(3.0, 8.0).floor();
        let mut j = 0.0;
        while j < cluster {
            let ox = rand_range(-10.0, 10.0);
            let oy = rand_range(-10.0, 10.0);
            let r = rand_range(4.0, 12.0);
            filled_circle(ctx, x + ox, y + oy, r)?;
            j += 1.0;
        }
    }
    ctx.set_fill_style_str("#88dd66");
    ctx.set_global_alpha(0.2);
    for _ in 0..20 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(30.0, 90.0);
        filled_circle(ctx, x, y, r)?;
    }
    Ok(())
}

/// Dark scars with rotated rust streaks on top.
fn abandoned(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.5);
    ctx.set_fill_style_str("#221100");
    for _ in 0..30 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(30.0, 100.0);
        filled_circle(ctx, x, y, r)?;
    }
    ctx.set_fill_style_str("#ff6622");
    ctx.set_global_alpha(0.3);
    for _ in 0..25 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let w = rand_range(40.0, 120.0);
        let h = rand_range(5.0, 20.0);
        let angle = rand_range(0.0, 2.0 * PI);
        ctx.save();
        ctx.translate(x, y)?;
        ctx.rotate(angle)?;
        ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
        ctx.restore();
    }
    Ok(())
}

/// Rocky outcrops: dark patches, grey stone polygons, reddish cracks.
fn purple(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.4);
    ctx.set_fill_style_str("#662222");
    for _ in 0..25 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(20.0, 65.0);
        filled_circle(ctx, x, y, r)?;
    }
    ctx.set_fill_style_str("#666666");
    for _ in 0..20 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let sides = rand_range(4.0, 7.0).floor();
        let radius = rand_range(15.0, 40.0);
        polygon(ctx, x, y, sides, radius);
        ctx.fill();
    }
    ctx.set_stroke_style_str("#aa4444");
    ctx.set_line_width(2.0);
    for _ in 0..15 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        ctx.begin_path();
        ctx.move_to(x, y);
        for j in 0..3 {
            ctx.line_to(x + rand_range(-40.0, 40.0), (f64::from(j)).mul_add(25.0, y));
        }
        ctx.stroke();
    }
    Ok(())
}

/// Glow gradients, zigzag electric arcs, and bright particles.
fn isotopic(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_global_alpha(0.4);
    let colors = ["#00ccff", "#0088ff", "#00aaff"];
    for _ in 0..30 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(15.0, 50.0);
        let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
        gradient.add_color_stop(0.0, pick(&colors))?;
        gradient.add_color_stop(1.0, "rgba(0, 170, 255, 0)")?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        filled_circle(ctx, x, y, r)?;
    }

    ctx.set_stroke_style_str("#66ddff");
    ctx.set_line_width(2.0);
    ctx.set_global_alpha(0.5);
    for _ in 0..20 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        ctx.begin_path();
        ctx.move_to(x, y);
        for _ in 0..5 {
            ctx.line_to(x + rand_range(-30.0, 30.0), y + rand_range(-30.0, 30.0));
        }
        ctx.stroke();
    }

    ctx.set_fill_style_str("#ffffff");
    ctx.set_global_alpha(0.6);
    for _ in 0..50 {
        let x = rand_range(0.0, width);
        let y = rand_range(0.0, height);
        let r = rand_range(1.0, 4.0);
        filled_circle(ctx, x, y, r)?;
    }
    Ok(())
}

/// Trace a closed regular polygon path centered on `(x, y)`.
fn polygon(ctx: &CanvasRenderingContext2d, x: f64, y: f64, sides: f64, radius: f64) {
    ctx.begin_path();
    let mut i = 0.0;
    while i < sides {
        let angle = i / sides * 2.0 * PI;
        let px = radius.mul_add(angle.cos(), x);
        let py = radius.mul_add(angle.sin(), y);
        if i == 0.0 {
            ctx.move_to(px, py);
        } else {
            ctx.line_to(px, py);
        }
        i += 1.0;
    }
    ctx.close_path();
}
