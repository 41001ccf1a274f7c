//! spritemask: CLI for generating sprite collision masks.
//!
//! Scans an image's alpha channel and prints the tightest bounding
//! rectangle as a collision mask, as a human-readable report or JSON.
//! Can also write an SVG visualization, render a PNG preview with the
//! mask outline stroked over the source image, or validate a
//! hand-supplied collision polygon.
//!
//! # Usage
//!
//! ```text
//! spritemask sprite.png
//! spritemask sprite.png --json
//! spritemask sprite.png --svg mask.svg --preview preview.png
//! spritemask --validate "0,0;4,0;4,4;0,4"
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use image::{Rgba, RgbaImage};
use spritemask_core::{
    MaskConfig, MaskResult, Point, Polygon, is_valid_collision_mask, is_valid_collision_polygon,
};
use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Stroke width for the `--preview` mask outline, in pixels.
const PREVIEW_STROKE_WIDTH: f32 = 1.5;

/// Generate a collision mask from a sprite image's transparency.
///
/// Scans the alpha channel from the four borders inward and emits the
/// tightest bounding rectangle as a single-polygon collision mask.
#[derive(Parser)]
#[command(name = "spritemask", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    #[arg(required_unless_present = "validate")]
    image_path: Option<PathBuf>,

    /// Alpha value below which a pixel is considered transparent.
    #[arg(long, default_value_t = MaskConfig::DEFAULT_ALPHA_THRESHOLD)]
    alpha_threshold: u8,

    /// Fall back to a full-image mask when the image is fully transparent.
    #[arg(long)]
    full_fallback: bool,

    /// Output the mask as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,

    /// Write an SVG visualization of the mask to a file.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write a PNG preview with the mask outline drawn over the image.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Validate a collision polygon instead of generating a mask.
    ///
    /// Vertices as semicolon-separated "x,y" pairs, e.g. "0,0;4,0;4,4;0,4".
    #[arg(long, value_name = "VERTICES")]
    validate: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if let Some(spec) = &cli.validate {
        return validate_polygon(spec, cli.json);
    }

    let image_path = cli
        .image_path
        .as_ref()
        .ok_or_else(|| String::from("an image path is required"))?;
    let image_bytes =
        std::fs::read(image_path).map_err(|e| format!("{}: {e}", image_path.display()))?;

    let config = MaskConfig {
        alpha_threshold: cli.alpha_threshold,
        full_image_fallback: cli.full_fallback,
    };
    let result = spritemask_core::generate(&image_bytes, &config).map_err(|e| e.to_string())?;

    if cli.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        print_report(&result);
    }

    if let Some(svg_path) = &cli.svg {
        let document = build_svg(&result);
        std::fs::write(svg_path, document.to_string())
            .map_err(|e| format!("{}: {e}", svg_path.display()))?;
        eprintln!("Wrote SVG to {}", svg_path.display());
    }

    if let Some(preview_path) = &cli.preview {
        let img = spritemask_core::decode_rgba(&image_bytes).map_err(|e| e.to_string())?;
        let preview = render_preview(&img, &result.polygons);
        preview
            .save(preview_path)
            .map_err(|e| format!("{}: {e}", preview_path.display()))?;
        eprintln!("Wrote preview to {}", preview_path.display());
    }

    Ok(())
}

/// Run the convexity/validity checker on a hand-supplied polygon.
fn validate_polygon(spec: &str, json: bool) -> Result<(), String> {
    let polygon = parse_vertices(spec)?;
    let valid = is_valid_collision_polygon(&polygon);

    if json {
        println!("{{\"valid\": {valid}}}");
    } else {
        println!(
            "{} vertices: {}",
            polygon.len(),
            if valid {
                "valid convex collision polygon"
            } else {
                "not a valid convex collision polygon"
            },
        );
    }
    Ok(())
}

/// Parse `--validate` input: semicolon-separated "x,y" pairs.
fn parse_vertices(spec: &str) -> Result<Polygon, String> {
    let mut vertices = Vec::new();
    for pair in spec.split(';') {
        let (x_str, y_str) = pair
            .split_once(',')
            .ok_or_else(|| format!("vertex must be 'x,y', got: '{pair}'"))?;
        let x: f64 = x_str
            .trim()
            .parse()
            .map_err(|e| format!("invalid x coordinate '{x_str}': {e}"))?;
        let y: f64 = y_str
            .trim()
            .parse()
            .map_err(|e| format!("invalid y coordinate '{y_str}': {e}"))?;
        vertices.push(Point::new(x, y));
    }
    Ok(Polygon::new(vertices))
}

/// Print the human-readable mask report.
fn print_report(result: &MaskResult) {
    println!(
        "image:   {}x{} px",
        result.dimensions.width, result.dimensions.height,
    );
    println!(
        "bounds:  {}x{} px centered at ({}, {})",
        result.bounds.width, result.bounds.height, result.bounds.center_x, result.bounds.center_y,
    );
    for (i, polygon) in result.polygons.iter().enumerate() {
        let vertices: Vec<String> = polygon
            .vertices()
            .iter()
            .map(|v| format!("({}, {})", v.x, v.y))
            .collect();
        println!("polygon {i}: {}", vertices.join(" "));
    }
    println!(
        "valid:   {}",
        is_valid_collision_mask(&result.polygons),
    );
}

// ---------------------------------------------------------------------------
// SVG output
// ---------------------------------------------------------------------------

/// Build an SVG document with one closed `<path>` per mask polygon on an
/// image-sized `viewBox`.
fn build_svg(result: &MaskResult) -> Document {
    let mut document = Document::new()
        .set("width", result.dimensions.width)
        .set("height", result.dimensions.height)
        .set(
            "viewBox",
            (0, 0, result.dimensions.width, result.dimensions.height),
        );

    for polygon in &result.polygons {
        let vertices = polygon.vertices();
        let Some(first) = vertices.first() else {
            continue;
        };
        let mut data = Data::new().move_to((first.x, first.y));
        for v in &vertices[1..] {
            data = data.line_to((v.x, v.y));
        }
        data = data.close();

        let path = Path::new()
            .set("fill", "#e11")
            .set("fill-opacity", 0.25)
            .set("stroke", "#e11")
            .set("stroke-width", 1)
            .set("d", data);
        document = document.add(path);
    }

    document
}

// ---------------------------------------------------------------------------
// PNG preview via tiny-skia
// ---------------------------------------------------------------------------

/// Render the mask polygons as red anti-aliased outlines over a copy of
/// the source image.
fn render_preview(img: &RgbaImage, polygons: &[Polygon]) -> RgbaImage {
    let (width, height) = img.dimensions();
    let outline = render_outlines(polygons, width, height);

    let mut preview = img.clone();
    overlay(&mut preview, &outline);
    preview
}

/// Render closed polygon outlines as red strokes on a transparent
/// background.
#[allow(clippy::cast_possible_truncation)]
fn render_outlines(polygons: &[Polygon], width: u32, height: u32) -> RgbaImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    };

    let stroke = Stroke {
        width: PREVIEW_STROKE_WIDTH,
        ..Stroke::default()
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(225, 17, 17, 255);
    paint.anti_alias = true;

    for polygon in polygons {
        let vertices = polygon.vertices();
        let mut pb = PathBuilder::new();
        if let Some(first) = vertices.first() {
            pb.move_to(first.x as f32, first.y as f32);
            for v in &vertices[1..] {
                pb.line_to(v.x as f32, v.y as f32);
            }
            pb.close();
        }
        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    // Convert the pixmap (premultiplied RGBA) to an `RgbaImage` (straight RGBA).
    let pixmap_data = pixmap.data();
    let mut out = RgbaImage::new(width, height);
    for (i, pixel) in out.pixels_mut().enumerate() {
        let off = i * 4;
        let a = pixmap_data[off + 3];
        if a == 0 {
            *pixel = Rgba([0, 0, 0, 0]);
        } else {
            // Un-premultiply: channel = premultiplied * 255 / alpha.
            let r = u16::from(pixmap_data[off]) * 255 / u16::from(a);
            let g = u16::from(pixmap_data[off + 1]) * 255 / u16::from(a);
            let b = u16::from(pixmap_data[off + 2]) * 255 / u16::from(a);
            *pixel = Rgba([r as u8, g as u8, b as u8, a]);
        }
    }
    out
}

/// Alpha-blend `top` over `base` in place.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn overlay(base: &mut RgbaImage, top: &RgbaImage) {
    for (b, t) in base.pixels_mut().zip(top.pixels()) {
        if t[3] == 0 {
            continue;
        }
        let a = f64::from(t[3]) / 255.0;
        for c in 0..3 {
            let blended = f64::from(b[c]).mul_add(1.0 - a, f64::from(t[c]) * a);
            b[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
        b[3] = b[3].max(t[3]);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use spritemask_core::{Dimensions, Rectangle};

    #[test]
    fn parse_vertices_square() {
        let polygon = parse_vertices("0,0;4,0;4,4;0,4").unwrap();
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon.vertices()[2], Point::new(4.0, 4.0));
    }

    #[test]
    fn parse_vertices_tolerates_whitespace() {
        let polygon = parse_vertices("0, 0; 4 ,0;4, 4").unwrap();
        assert_eq!(polygon.len(), 3);
    }

    #[test]
    fn parse_vertices_rejects_missing_comma() {
        assert!(parse_vertices("0 0;4,0").is_err());
    }

    #[test]
    fn parse_vertices_rejects_non_numeric() {
        assert!(parse_vertices("a,b").is_err());
    }

    #[test]
    fn svg_document_contains_closed_path_and_viewbox() {
        let bounds = Rectangle {
            width: 4.0,
            height: 4.0,
            center_x: 4.0,
            center_y: 5.0,
        };
        let result = MaskResult {
            polygons: vec![bounds.to_polygon()],
            bounds,
            dimensions: Dimensions {
                width: 10,
                height: 10,
            },
        };
        let rendered = build_svg(&result).to_string();
        assert!(rendered.contains("viewBox=\"0 0 10 10\""));
        assert!(rendered.contains('z') || rendered.contains('Z'));
    }

    #[test]
    fn preview_draws_on_a_copy() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let bounds = Rectangle {
            width: 6.0,
            height: 6.0,
            center_x: 5.0,
            center_y: 5.0,
        };
        let preview = render_preview(&img, &[bounds.to_polygon()]);
        assert_eq!(preview.dimensions(), (10, 10));
        // The outline must have touched at least one pixel.
        assert!(preview.pixels().any(|p| p.0[0] > 0));
    }
}
