//! Bubble level simulator for desktop platforms.
//!
//! Drives the shared [`Leveler`] from a simulated orientation sensor and paints
//! it into an `embedded-graphics-simulator` window.
//!
//! # Keys
//!
//! | Key        | Action                                    |
//! |------------|-------------------------------------------|
//! | `C`        | Calibrate (current attitude becomes zero) |
//! | `Space`    | Toggle automatic / manual tilt            |
//! | Arrows     | Tilt in manual mode                       |
//! | `S`        | Unplug / replug the sensor                |
//! | `N`        | Inject one NaN sample                     |
//! | `1` `2` `3`| Resize the level surface                  |
//! | `P`        | Ask for sensor permission again           |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod config;
mod panel;
mod source;
mod styles;
mod toast;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use level_common::widgets::WidgetSet;
use level_common::{EgSurface, Event, LevelError, Leveler, paint};

use crate::config::{FRAME_TIME, INITIAL_SURFACE, SURFACE_SIZES, WINDOW_HEIGHT, WINDOW_SCALE, WINDOW_WIDTH};
use crate::panel::{PanelInfo, draw_panel};
use crate::source::{SimulatedSource, TiltMode};
use crate::toast::{Toast, draw_toast};

fn main() {
    if let Err(error) = run() {
        eprintln!("simulator stopped: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LevelError> {
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Bubble Level Sim", &output_settings);

    let mut leveler = Leveler::new(WidgetSet::standard(), SURFACE_SIZES[INITIAL_SURFACE])?;
    let mut source = SimulatedSource::new();
    leveler.request_permission(&mut source);

    // UI state
    let mut toast: Option<Toast> = Some(Toast::PermissionRequested(Instant::now()));
    let mut surface_dirty = true;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    let tilt = match keycode {
                        Keycode::Up => Some((1.0, 0.0)),
                        Keycode::Down => Some((-1.0, 0.0)),
                        Keycode::Left => Some((0.0, -1.0)),
                        Keycode::Right => Some((0.0, 1.0)),
                        _ => None,
                    };
                    if let Some((d_beta, d_gamma)) = tilt {
                        source.tilt(d_beta, d_gamma);
                        continue;
                    }
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::C => {
                            surface_dirty |= leveler.handle(Event::Calibrate).is_some();
                            toast = Some(Toast::Calibrated(Instant::now()));
                        }
                        Keycode::Space => {
                            toast = Some(match source.toggle_mode() {
                                TiltMode::Auto => Toast::AutoTilt(Instant::now()),
                                TiltMode::Manual => Toast::ManualTilt(Instant::now()),
                            });
                        }
                        Keycode::S => {
                            toast = Some(if source.toggle_available() {
                                Toast::SensorOn(Instant::now())
                            } else {
                                leveler.handle(Event::SensorLost);
                                Toast::SensorOff(Instant::now())
                            });
                        }
                        Keycode::N => {
                            source.inject_nan();
                            toast = Some(Toast::NanInjected(Instant::now()));
                        }
                        Keycode::Num1 | Keycode::Num2 | Keycode::Num3 => {
                            let index = match keycode {
                                Keycode::Num1 => 0,
                                Keycode::Num2 => 1,
                                _ => 2,
                            };
                            let side = SURFACE_SIZES[index];
                            leveler.handle(Event::Resize {
                                width: side,
                                height: side,
                            });
                            surface_dirty = true;
                        }
                        Keycode::P => {
                            leveler.request_permission(&mut source);
                            toast = Some(Toast::PermissionRequested(Instant::now()));
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if let Some(permission) = source.resolve_permission() {
            leveler.handle(Event::Permission(permission));
            toast = Some(Toast::for_permission(permission));
        }

        surface_dirty |= leveler.poll(&mut source).is_some();

        // Check toast expiration
        if let Some(ref active) = toast
            && active.is_expired()
        {
            toast = None;
            surface_dirty = true;
        }
        // toast is drawn over the surface, so the surface under it is redrawn each frame
        if toast.is_some() {
            surface_dirty = true;
        }

        // FPS calculation
        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        let side = leveler.side();
        if surface_dirty {
            display.clear(Rgb888::BLACK).ok();
            let area = Rectangle::new(Point::zero(), Size::new(side, side));
            let mut viewport = display.cropped(&area);
            paint(leveler.frame(), &mut EgSurface::new(&mut viewport))?;
            surface_dirty = false;
        }

        let info = PanelInfo {
            mode: source.mode(),
            sensor_plugged: source.is_available(),
            fps: current_fps,
        };
        draw_panel(&mut display, side as i32, WINDOW_WIDTH, &leveler, &info);

        if let Some(ref active) = toast {
            draw_toast(&mut display, active, side);
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
