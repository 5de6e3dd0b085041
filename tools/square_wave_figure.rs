//! Square-wave figure generator for the debounced-switch documentation
//!
//! Renders two SVG diagrams of a 3.3 V square wave over six cycles, one at
//! 50% duty cycle (blue) and one at 15% duty cycle (red), each with a
//! "One Cycle" bracket under the second period.
//!
//! Usage:
//!   cargo run --bin square_wave_figure -- [output_dir]
//!
//! The output directory defaults to `img`.

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use debounced_switch::{Sample, SquareWave, WaveformError};
use palette::Srgb;

// Canvas size matches a 20x6 inch figure at 100 dpi
const WIDTH: f32 = 2000.0;
const HEIGHT: f32 = 600.0;
const MARGIN_LEFT: f32 = 90.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 70.0;

// Data ranges in seconds and volts
const X_MIN: f32 = -0.1;
const X_MAX: f32 = 6.1;
const Y_MIN: f32 = -1.2;
const Y_MAX: f32 = 3.8;

const CYCLES_MS: u32 = 6_000;
const SAMPLE_COUNT: usize = 3_000;
const BRACKET_Y: f32 = -0.5;

/// One figure to render.
struct Figure {
    file_name: &'static str,
    wave: SquareWave,
    trace: Srgb,
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("img"));
    fs::create_dir_all(&out_dir)?;

    for figure in &figures()? {
        let path = write_figure(&out_dir, figure)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn figures() -> Result<[Figure; 2], WaveformError> {
    Ok([
        Figure {
            file_name: "fig-square-wave-50-percent-duty.svg",
            wave: SquareWave::new(1000, 50)?.with_phase(500),
            trace: Srgb::new(0.0, 0.0, 1.0),
        },
        Figure {
            file_name: "fig-square-wave-15-percent-duty.svg",
            wave: SquareWave::new(1000, 15)?.with_phase(500),
            trace: Srgb::new(1.0, 0.0, 0.0),
        },
    ])
}

impl Figure {
    fn svg(&self) -> Result<String, std::fmt::Error> {
        let samples = self.wave.samples::<SAMPLE_COUNT>(0, CYCLES_MS);
        render(&samples, self.trace)
    }
}

fn write_figure(out_dir: &Path, figure: &Figure) -> Result<PathBuf, Box<dyn Error>> {
    let svg = figure.svg()?;

    let path = out_dir.join(figure.file_name);
    fs::write(&path, svg)?;
    Ok(path)
}

fn render(samples: &[Sample], trace: Srgb) -> Result<String, std::fmt::Error> {
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    )?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

    render_grid(&mut svg)?;
    render_trace(&mut svg, samples, trace)?;
    render_bracket(&mut svg)?;
    render_axes(&mut svg)?;

    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn render_grid(svg: &mut String) -> std::fmt::Result {
    writeln!(svg, r##"<g stroke="#b0b0b0" stroke-opacity="0.3" stroke-width="1">"##)?;
    for second in 0..=6 {
        let x = px_x(second as f32);
        writeln!(
            svg,
            r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}"/>"#,
            px_y(Y_MIN),
            px_y(Y_MAX)
        )?;
    }
    for volt in -1..=3 {
        let y = px_y(volt as f32);
        writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}"/>"#,
            px_x(X_MIN),
            px_x(X_MAX)
        )?;
    }
    writeln!(svg, "</g>")
}

fn render_trace(svg: &mut String, samples: &[Sample], trace: Srgb) -> std::fmt::Result {
    let mut points = String::new();
    for sample in samples {
        let x = px_x(sample.t_ms as f32 / 1000.0);
        let y = px_y(sample.millivolts as f32 / 1000.0);
        write!(points, "{x:.1},{y:.1} ")?;
    }

    writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
        points.trim_end(),
        hex(trace)
    )
}

fn render_bracket(svg: &mut String) -> std::fmt::Result {
    let (start, end) = (px_x(0.5), px_x(1.5));
    let (top, mid, bottom) = (px_y(BRACKET_Y + 0.2), px_y(BRACKET_Y), px_y(BRACKET_Y - 0.2));

    writeln!(svg, r#"<g stroke="black" stroke-width="1.5">"#)?;
    writeln!(svg, r#"<line x1="{start:.1}" y1="{bottom:.1}" x2="{start:.1}" y2="{top:.1}"/>"#)?;
    writeln!(svg, r#"<line x1="{start:.1}" y1="{mid:.1}" x2="{end:.1}" y2="{mid:.1}"/>"#)?;
    writeln!(svg, r#"<line x1="{end:.1}" y1="{bottom:.1}" x2="{end:.1}" y2="{top:.1}"/>"#)?;
    writeln!(svg, "</g>")?;

    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="19" text-anchor="middle" dominant-baseline="hanging">One Cycle</text>"#,
        (start + end) / 2.0,
        bottom
    )
}

fn render_axes(svg: &mut String) -> std::fmt::Result {
    let (left, right) = (px_x(X_MIN), px_x(X_MAX));
    let (top, bottom) = (px_y(Y_MAX), px_y(Y_MIN));

    writeln!(
        svg,
        r#"<rect x="{left:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="black"/>"#,
        right - left,
        bottom - top
    )?;

    for second in 0..=6 {
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle">{second}</text>"#,
            px_x(second as f32),
            bottom + 18.0
        )?;
    }
    for volt in -1..=3 {
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="end" dominant-baseline="middle">{volt}</text>"#,
            left - 8.0,
            px_y(volt as f32)
        )?;
    }

    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="16" text-anchor="middle">Time (ns)</text>"#,
        (left + right) / 2.0,
        HEIGHT - 15.0
    )?;
    writeln!(
        svg,
        r#"<text x="25" y="{:.1}" font-size="16" text-anchor="middle" transform="rotate(-90 25 {:.1})">Voltage (V)</text>"#,
        (top + bottom) / 2.0,
        (top + bottom) / 2.0
    )
}

fn px_x(seconds: f32) -> f32 {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    MARGIN_LEFT + (seconds - X_MIN) / (X_MAX - X_MIN) * plot_width
}

fn px_y(volts: f32) -> f32 {
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    MARGIN_TOP + (Y_MAX - volts) / (Y_MAX - Y_MIN) * plot_height
}

fn hex(color: Srgb) -> String {
    let rgb: Srgb<u8> = color.into_format();
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}
