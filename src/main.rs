use macroquad::prelude::*;
use bounded_life::{
    Config, GameState,
    input::{self, InputController, MouseTracker},
    rendering::{self, Canvas, RenderScheduler},
};

fn window_conf() -> Conf {
    Config::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::from_env().unwrap_or_else(|err| {
        log::warn!("Ignoring environment overrides: {}", err);
        Config::default()
    });
    let mut state = GameState::new(&config);
    log::info!(
        "Starting: rule={}, redraw={}, frame delay={:?}",
        state.simulation.rule_name(),
        config.redraw.name(),
        config.frame_delay
    );

    // Window close becomes a quit event handled by the loop
    prevent_quit();

    let mut input = InputController::new();
    let mut mouse = MouseTracker::default();
    let mut scheduler = RenderScheduler::new(state.grid_lines);
    let canvas = Canvas::new();

    loop {
        let events = input::poll_events(&mut mouse);
        if state.frame(&mut input, events).is_none() {
            break;
        }

        clear_background(BLACK);
        rendering::draw_frame(&canvas, &mut scheduler, &mut state);

        next_frame().await;

        if let Some(delay) = config.frame_delay {
            std::thread::sleep(delay);
        }
    }

    log::info!("Quit after {} steps", state.grid.steps());
}
