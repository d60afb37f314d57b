#![cfg_attr(target_family = "wasm", no_main)]
use nannou::prelude::*;
#[cfg(target_family = "wasm")]
use nannou::wgpu::Backends;
use nannou::{
    app::{self, App},
    wgpu::{DeviceDescriptor, Limits},
};
use nannou_egui::{self, egui, Egui};

#[cfg(target_family = "wasm")]
use wasm_bindgen::prelude::*;

use std::cell::RefCell;

pub mod config;
pub mod console;
pub mod error;
pub mod field;
pub mod input;
pub mod model;
pub mod pos;
pub mod render;
pub mod rings;
pub mod sources;
pub mod surface;
pub mod task;

use config::Settings;
use console::console_log;
use model::{wavelength_label, Model, WAVELENGTH_RANGE};
use surface::NannouSurface;

thread_local!(static SETTINGS: RefCell<Option<Settings>> = Default::default());

#[cfg(target_family = "wasm")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let settings = config::from_location().unwrap_or_else(|e| {
        console_log!("{}; using defaults", e);
        Settings::default()
    });
    launch(settings);

    Ok(())
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    use clap::Parser;

    match config::Args::parse().into_settings() {
        Ok(settings) => launch(settings),
        Err(e) => {
            console_log!("{}", e);
            std::process::exit(2);
        }
    }
}

fn launch(settings: Settings) {
    console_log!(
        "starting {}x{}, wavelength {} px, {} sources",
        settings.width,
        settings.height,
        settings.wavelength,
        settings.sources.len()
    );
    SETTINGS.with(|s| s.borrow_mut().replace(settings));

    task::block_on(async {
        let builder = app::Builder::new_async(|app| {
            Box::new(async {
                let settings = SETTINGS
                    .with(|s| s.borrow_mut().take())
                    .unwrap_or_default();
                let egui = create_window(app, &settings).await;
                Model::new(settings, egui)
            })
        })
        .update(update);

        #[cfg(target_family = "wasm")]
        let builder = builder.backends(Backends::PRIMARY | Backends::GL);

        builder.run_async().await;
    });
}

async fn create_window(app: &App, settings: &Settings) -> Egui {
    let device_desc = DeviceDescriptor {
        limits: Limits {
            max_texture_dimension_2d: 8192,
            ..Limits::downlevel_webgl2_defaults()
        },
        ..Default::default()
    };

    let window_id = app
        .new_window()
        .size(settings.width, settings.height)
        .device_descriptor(device_desc)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .title("Wavefront")
        .view(view)
        .event(input::event)
        .build_async()
        .await
        .expect("failed to build window");

    let window = app.window(window_id).expect("window vanished after creation");
    Egui::from_window(&window)
}

fn update(_app: &App, m: &mut Model, update: Update) {
    let Model {
        egui,
        sources,
        params,
        ..
    } = m;

    egui.set_elapsed_time(update.since_start);
    let ctx = egui.begin_frame();

    let mut add = false;
    let mut remove = false;
    egui::Window::new("Waves").show(&ctx, |ui| {
        let toggle = if params.show_interference {
            "Hide interference"
        } else {
            "Show interference"
        };
        if ui.button(toggle).clicked() {
            let on = params.toggle_interference();
            console_log!("interference overlay {}", if on { "on" } else { "off" });
        }

        ui.horizontal(|ui| {
            add = ui.button("Add source").clicked();
            remove = ui.button("Remove source").clicked();
        });
        ui.label(format!("Sources: {}", sources.len()));

        ui.label("Wavelength:");
        ui.horizontal(|ui| {
            ui.add(egui::Slider::new(&mut params.wavelength, WAVELENGTH_RANGE).show_value(false));
            ui.label(wavelength_label(params.wavelength));
        });
    });
    drop(ctx);

    if add {
        input::add_source(m);
    }
    if remove {
        input::remove_source(m);
    }
}

fn view(app: &App, m: &Model, frame: Frame) {
    let draw = app.draw();
    let elapsed = m.clock.elapsed_secs();

    let mut surface = NannouSurface::new(app, &draw, app.window_rect());
    render::render_frame(&mut surface, &m.sources, &m.params, elapsed);

    if let Err(e) = draw.to_frame(app, &frame) {
        console_log!("failed to draw frame: {:?}", e);
    }
    if let Err(e) = m.egui.draw_to_frame(&frame) {
        console_log!("failed to draw ui: {:?}", e);
    }
}
