use super::figure::{Figure, Panel};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

type PanelChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const GRID_COLOR: RGBColor = RGBColor(200, 200, 200);

fn blank_label(_: &f64) -> String {
    String::new()
}

/// Draws the figure as two stacked charts on any plotters drawing area.
pub fn draw_figure<DB>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));
    for (area, panel) in areas.iter().zip(figure.panels().iter()) {
        draw_panel(area, panel)?;
    }
    root.present()?;
    Ok(())
}

fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    // room for the tick labels, plus the description under the bottom panel
    let x_label_area = match (panel.x_labels, panel.x_desc) {
        (_, Some(_)) => 60,
        (true, None) => 35,
        (false, None) => 10,
    };
    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption(panel.title, ("sans-serif", 24))
        .x_label_area_size(x_label_area)
        .y_label_area_size(80)
        .build_cartesian_2d(panel.x_range.clone(), panel.y_range.clone())?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.light_line_style(&TRANSPARENT)
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 16))
            .y_desc(panel.y_desc)
            .x_labels(12); // max number of labels
        if panel.grid {
            mesh.bold_line_style(GRID_COLOR.stroke_width(1));
        } else {
            mesh.disable_mesh();
        }
        if let Some(x_desc) = panel.x_desc {
            mesh.x_desc(x_desc);
        }
        if !panel.x_labels {
            mesh.x_label_formatter(&blank_label);
        }
        mesh.draw()?;
    }

    draw_segments(&mut chart, panel)
}

/// one line per run of finite points, in the panel colour
fn draw_segments<DB>(
    chart: &mut PanelChart<'_, DB>,
    panel: &Panel,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    for segment in panel.segments() {
        let line = LineSeries::new(segment.iter().copied(), panel.color.stroke_width(2));
        chart.draw_series(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StatsRecord, StatsTable};

    fn render_svg(table: &StatsTable) -> String {
        let figure = Figure::from_table(table);
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, figure.size).into_drawing_area();
            draw_figure(&root, &figure).unwrap();
        }
        svg.to_lowercase()
    }

    fn table(rows: &[(i64, Option<f64>, Option<f64>)]) -> StatsTable {
        rows.iter()
            .map(|&(generation, entropy, live_cells)| StatsRecord {
                generation,
                entropy,
                live_cells,
            })
            .collect()
    }

    /// draws only the lines of a panel, no captions or mesh, so no font is needed
    fn render_lines_svg(panel: &Panel) -> String {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (400, 200)).into_drawing_area();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(panel.x_range.clone(), panel.y_range.clone())
                .unwrap();
            draw_segments(&mut chart, panel).unwrap();
            root.present().unwrap();
        }
        svg.to_lowercase()
    }

    #[test]
    fn test_one_line_per_segment() {
        let figure = Figure::from_table(&table(&[
            (0, Some(1.0), Some(4.0)),
            (1, Some(0.8), Some(3.0)),
            (2, None, Some(2.5)),
            (3, Some(0.5), Some(2.0)),
            (4, Some(0.4), Some(1.0)),
        ]));
        let top = render_lines_svg(&figure.top);
        assert_eq!(top.matches("<polyline").count(), 2);
        assert!(top.contains("#ffa500"));
        assert!(!top.contains("#0000ff"));

        let bottom = render_lines_svg(&figure.bottom);
        assert_eq!(bottom.matches("<polyline").count(), 1);
        assert!(bottom.contains("#0000ff"));
    }

    #[test]
    fn test_empty_panel_draws_no_lines() {
        let figure = Figure::from_table(&StatsTable::default());
        for panel in figure.panels().iter() {
            let svg = render_lines_svg(panel);
            assert_eq!(svg.matches("<polyline").count(), 0);
        }
    }

    #[test]
    #[ignore] // text layout needs system fonts
    fn test_renders_both_panels() {
        let table: StatsTable = (0..3)
            .map(|g| StatsRecord {
                generation: g,
                entropy: Some(1.0 - g as f64 * 0.25),
                live_cells: Some(4.0 - g as f64),
            })
            .collect();
        let svg = render_svg(&table);
        assert!(svg.contains("entropy over generations"));
        assert!(svg.contains("live cell count over generations"));
        assert!(svg.contains("#ffa500"));
        assert!(svg.contains("#0000ff"));
    }

    #[test]
    #[ignore] // text layout needs system fonts
    fn test_renders_empty_table() {
        let svg = render_svg(&StatsTable::default());
        assert!(svg.contains("entropy over generations"));
        assert!(!svg.contains("#ffa500"));
        assert!(!svg.contains("#0000ff"));
    }
}
