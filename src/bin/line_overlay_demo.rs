use image::Rgb;
use line_overlay::config::demo;
use line_overlay::io::{save_rgb_image, write_json_file};
use line_overlay::raster::{ImageCanvas, LineRasterizer, SegmentRecorder};
use line_overlay::types::{DrawCommand, Line};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = demo::load_config(Path::new(&config_path))?;

    let size = config.size;
    let rasterizer = LineRasterizer::new(config.raster.to_params());
    let mut recorder = SegmentRecorder::new();
    let mut skipped = Vec::new();

    for spec in &config.lines {
        let line = spec.line();
        let color = spec.color().map(Rgb).unwrap_or_else(|| config.raster.color());
        let drawn = rasterizer
            .draw(&line, &mut recorder, size, color)
            .map_err(|e| format!("Line {:?}: {e}", line.to_array()))?;
        if !drawn {
            skipped.push(line);
        }
    }

    let mut canvas = ImageCanvas::new(size.width, size.height, Rgb(config.background));
    recorder.replay(&mut canvas);

    let report = DemoReport {
        width: size.width,
        height: size.height,
        segments: recorder.into_commands(),
        skipped,
    };

    save_rgb_image(canvas.image(), &config.output.image)?;
    write_json_file(&config.output.segments_json, &report)?;

    println!(
        "Saved {}x{} canvas to {}",
        size.width,
        size.height,
        config.output.image.display()
    );
    println!(
        "Saved {} segments ({} lines outside the canvas) to {}",
        report.segments.len(),
        report.skipped.len(),
        config.output.segments_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: line_overlay_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoReport {
    width: u32,
    height: u32,
    segments: Vec<DrawCommand>,
    skipped: Vec<Line>,
}
