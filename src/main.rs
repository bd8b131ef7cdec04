// src/main.rs
use nannou::prelude::*;

use gridvis::{
    config::Config,
    controllers::{OscCommand, OscController, OscSender},
    models::{GridType, PresetBook, ScaledViewport},
    views::{BackgroundManager, OverlayInstance},
};

struct Model {
    // Core components:
    overlay: OverlayInstance,
    background: BackgroundManager,
    presets: PresetBook,
    preset_names: Vec<String>,

    // Viewport state, fed by resize events:
    viewport: ScaledViewport,

    // Comms components:
    osc_controller: OscController,
    osc_sender: OscSender,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the preset book
    let presets =
        PresetBook::load(config.resolve_preset_path()).expect("Failed to load preset file");
    let preset_names = presets.sorted_names();
    println!("Loaded {} presets", preset_names.len());

    // Create OSC controller + loopback sender
    let osc_controller =
        OscController::new(config.osc.rx_port).expect("Failed to create OSC Controller");
    let osc_sender = OscSender::new(config.osc.rx_port).expect("Failed to create OSC Sender");

    // Create window; the resize subscription lives and dies with it
    app.new_window()
        .title("gridvis 0.1.2")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .resized(window_resized)
        .build()
        .unwrap();

    // The overlay pane covers a configured fraction of the window
    let viewport = ScaledViewport::new(
        config.window.width as f32,
        config.window.height as f32,
        config.overlay.width_fraction,
        config.overlay.height_fraction,
    );

    let overlay = OverlayInstance::new(&viewport, config.overlay.settings());
    let background = BackgroundManager::new(&config.background.color);

    Model {
        overlay,
        background,
        presets,
        preset_names,
        viewport,
        osc_controller,
        osc_sender,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // Flip between square and hexagon tiling
        Key::G => {
            let next = model.overlay.settings().grid_type.toggled();
            model.osc_sender.send_grid_type(&next.to_string());
        }
        Key::V => {
            model.osc_sender.send_toggle_visibility();
        }

        // Stroke weight
        Key::Up => {
            let thickness = model.overlay.settings().thickness + 0.5;
            model.osc_sender.send_thickness(thickness);
        }
        Key::Down => {
            let thickness = (model.overlay.settings().thickness - 0.5).max(0.5);
            model.osc_sender.send_thickness(thickness);
        }

        // Opacity
        Key::Right => {
            let opacity = (model.overlay.settings().opacity + 5.0).min(100.0);
            model.osc_sender.send_opacity(opacity);
        }
        Key::Left => {
            let opacity = (model.overlay.settings().opacity - 5.0).max(0.0);
            model.osc_sender.send_opacity(opacity);
        }

        // Overlay colors
        Key::C => {
            model.osc_sender.send_color("#e0e6f0");
        }
        Key::J => {
            model.osc_sender.send_color("#4aa3ff");
        }
        Key::K => {
            model.osc_sender.send_color("#ffb000");
        }

        // Background colors
        Key::B => {
            model.osc_sender.send_background_color("#101418");
        }
        Key::M => {
            model.osc_sender.send_background_color("black");
        }
        Key::Comma => {
            model.osc_sender.send_background_color("#2a1a33");
        }

        // Presets by number key, in sorted-name order
        Key::Key1 => send_preset(model, 0),
        Key::Key2 => send_preset(model, 1),
        Key::Key3 => send_preset(model, 2),
        Key::Key4 => send_preset(model, 3),
        Key::Key5 => send_preset(model, 4),
        Key::Key6 => send_preset(model, 5),
        Key::Key7 => send_preset(model, 6),
        Key::Key8 => send_preset(model, 7),
        Key::Key9 => send_preset(model, 8),

        Key::Q => {
            app.quit();
        }
        _ => (),
    }
}

fn send_preset(model: &Model, index: usize) {
    if let Some(name) = model.preset_names.get(index) {
        model.osc_sender.send_preset(name);
    }
}

fn window_resized(_app: &App, model: &mut Model, dim: Vec2) {
    model.viewport.set_window_size(dim.x, dim.y);
    // Retile synchronously so no frame renders a stale layout
    model.overlay.sync(&model.viewport);
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    // Process OSC messages
    model.osc_controller.process_messages();
    launch_commands(model);

    // Covers initial mount and any resize the callback missed
    model.overlay.sync(&model.viewport);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    model.background.draw(&draw);
    // Overlay renders above the background content
    model.overlay.draw(&draw);

    draw.to_frame(app, &frame).unwrap();
}

// ******************************* OSC Launcher *******************************

fn launch_commands(model: &mut Model) {
    for command in model.osc_controller.take_commands() {
        match command {
            OscCommand::SetGridType { value } => match value.parse::<GridType>() {
                Ok(grid_type) => model.overlay.set_grid_type(grid_type),
                Err(message) => println!("{}, ignoring", message),
            },
            OscCommand::SetThickness { value } => {
                model.overlay.set_thickness(value);
            }
            OscCommand::SetOpacity { value } => {
                model.overlay.set_opacity(value);
            }
            OscCommand::SetColor { spec } => {
                model.overlay.set_color(&spec);
            }
            OscCommand::SetVisibility { setting } => {
                model.overlay.visible = setting;
            }
            OscCommand::ToggleVisibility => {
                model.overlay.visible = !model.overlay.visible;
            }
            OscCommand::ApplyPreset { name } => match model.presets.get(&name) {
                Some(settings) => model.overlay.apply_settings(settings.clone()),
                None => println!("Unknown preset '{}', ignoring", name),
            },
            OscCommand::SetBackgroundColor { spec } => {
                model.background.set_color(&spec);
            }
        }
    }
}
