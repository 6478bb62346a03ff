// src/main.rs
use nannou::prelude::*;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ballsquare::{
    config::Config,
    controllers::{OscCommand, OscController, Scene},
    render::NannouSurface,
    services::FrameClock,
};

struct Model {
    // Core components:
    scene: Scene<FrameClock>,
    clock: FrameClock,

    // Comms components:
    osc_controller: Option<OscController>,

    // Rendering components:
    draw: nannou::Draw,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load_or_default();

    // The scene books frames on its own handle of the clock
    let clock = FrameClock::new();
    let scene = Scene::from_config(&config, clock.clone()).unwrap_or_else(|e| {
        warn!("Invalid config ({}); using built-in defaults", e);
        Scene::from_config(&Config::default(), clock.clone())
            .expect("built-in config is valid")
    });
    info!("Scene ready with {} motifs", scene.cursor().node_count());

    let osc_controller = config.osc.as_ref().and_then(|osc| {
        OscController::new(osc.rx_port)
            .map_err(|e| warn!("OSC disabled, could not bind port {}: {}", osc.rx_port, e))
            .ok()
    });

    app.new_window()
        .title("ballsquare")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .resized(resized)
        .build()
        .expect("Failed to create window");
    info!(
        "Window created at {}x{}",
        config.window.width, config.window.height
    );

    Model {
        scene,
        clock,
        osc_controller,
        draw: nannou::Draw::new(),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.scene.on_activate();
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => model.scene.on_activate(),
        Key::Q => app.quit(),
        _ => (),
    }
}

fn resized(_app: &App, model: &mut Model, _size: Vec2) {
    model.clock.invalidate();
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // Process OSC messages
    if let Some(osc_controller) = model.osc_controller.as_mut() {
        osc_controller.process_messages();
        for command in osc_controller.take_commands() {
            match command {
                OscCommand::Activate => model.scene.on_activate(),
            }
        }
    }

    // Only render a scene frame when the driver (or the host) booked one;
    // otherwise the retained draw is repainted as-is
    if model.clock.take_due(Instant::now()) {
        model.draw.reset();
        let mut surface = NannouSurface::new(&model.draw, app.window_rect());
        model.scene.render_frame(&mut surface);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(e) = model.draw.to_frame(app, &frame) {
        error!("Failed to render frame: {:?}", e);
    }
}
