//! Results distribution chart.
//!
//! Renders a team's wins, draws and losses as an SVG pie with a legend.
//! Empty slices are left out of the pie but stay in the legend.

use plotters::element::Pie;
use plotters::prelude::*;
use thiserror::Error;

use crate::model::ResultSummary;

/// Width and height of the rendered chart in pixels.
pub const CHART_SIZE: (u32, u32) = (640, 480);

const FONT: &str = "sans-serif";

const SLICES: [(&str, RGBColor); 3] = [
    ("Wins", RGBColor(0x22, 0xD4, 0x28)),
    ("Draws", RGBColor(0xFF, 0xBF, 0x00)),
    ("Losses", RGBColor(0xFB, 0x33, 0x33)),
];

const EMPTY_FILL: RGBColor = RGBColor(0xDD, 0xDD, 0xDD);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Render(String),
}

fn render_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Render(err.to_string())
}

/// "Results Distribution for Real Madrid CF"
pub fn chart_title(team_name: &str) -> String {
    format!("Results Distribution for {team_name}")
}

/// Render the W/D/L split of `summary` as an SVG document.
pub fn render_results_pie(title: &str, summary: &ResultSummary) -> Result<String, ChartError> {
    let counts = [summary.wins, summary.draws, summary.losses];
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;
        let area = root.titled(title, (FONT, 24)).map_err(render_error)?;

        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;

        let (mut labels, mut sizes, mut colors) = (Vec::new(), Vec::new(), Vec::new());
        for ((label, color), count) in SLICES.iter().zip(counts) {
            if count > 0 {
                labels.push(*label);
                sizes.push(f64::from(count));
                colors.push(*color);
            }
        }

        if sizes.is_empty() {
            area.draw(&Circle::new(center, radius as i32, EMPTY_FILL.filled()))
                .map_err(render_error)?;
            area.draw(&Text::new(
                "No matches",
                (center.0 - 45, center.1 - 8),
                (FONT, 18).into_font(),
            ))
            .map_err(render_error)?;
        } else {
            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            // Wins start at twelve o'clock.
            pie.start_angle(-90.0);
            pie.label_style((FONT, 18).into_font());
            pie.percentages((FONT, 14).into_font().color(&BLACK));
            area.draw(&pie).map_err(render_error)?;
        }

        let legend_x = width as i32 - 130;
        for (row, ((label, color), count)) in SLICES.iter().zip(counts).enumerate() {
            let y = 10 + row as i32 * 24;
            area.draw(&Rectangle::new(
                [(legend_x, y), (legend_x + 14, y + 14)],
                color.filled(),
            ))
            .map_err(render_error)?;
            area.draw(&Text::new(
                format!("{label}: {count}"),
                (legend_x + 20, y),
                (FONT, 14).into_font(),
            ))
            .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }
    Ok(svg)
}
