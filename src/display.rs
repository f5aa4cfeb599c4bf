use super::figure::Figure;
use super::render::draw_figure;
use super::StatsError;
use piston_window::{EventLoop, PistonWindow, WindowSettings};
use plotters::prelude::*;
use plotters_piston::draw_piston_window;
use tracing::{debug, info};

pub const WINDOW_TITLE: &str = "Generation Statistics";
const FPS: u64 = 30;

/// Opens the plot window and blocks until the user closes it.
/// The figure is redrawn on every render event, so resizing rescales it.
pub fn show_figure(figure: &Figure) -> Result<(), StatsError> {
    let (width, height) = figure.size;
    let mut window: PistonWindow = WindowSettings::new(WINDOW_TITLE, [width, height])
        .samples(4)
        .exit_on_esc(true)
        .build()
        .map_err(|e| StatsError::Display(e.to_string()))?;
    window.set_max_fps(FPS);
    info!("showing plot, close the window to exit");

    let mut events: u64 = 0;
    while draw_piston_window(&mut window, |b| {
        let root = b.into_drawing_area();
        draw_figure(&root, figure)
    })
    .is_some()
    {
        events += 1;
    }
    debug!("window closed after {} events", events);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_loop_takes_a_figure() {
        // the piston window and the plotters backend must agree on the piston_window version
        let show: fn(&Figure) -> Result<(), StatsError> = show_figure;
        let _ = show;
        assert_eq!(WINDOW_TITLE, "Generation Statistics");
    }
}
