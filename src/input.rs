use nannou::prelude::*;
use nannou_egui::egui;

use crate::console::console_log;
use crate::model::Model;
use crate::pos::Pos;
use crate::sources::SourceSet;
use crate::surface::surface_local;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Index into the source set.
    Dragging(usize),
}

/// What the egui panel claimed during the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiCapture {
    /// Pointer is over a panel or a widget is being dragged.
    pub pointer: bool,
    /// A widget has keyboard focus.
    pub keyboard: bool,
}

impl UiCapture {
    pub fn from_ctx(ctx: &egui::Context) -> Self {
        UiCapture {
            pointer: ctx.wants_pointer_input() || ctx.is_pointer_over_area(),
            keyboard: ctx.wants_keyboard_input(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Pos),
    Move(Pos),
    Up,
}

/// Pointer drag of sources. Positions are surface-local.
#[derive(Clone, Debug, Default)]
pub struct InputController {
    state: DragState,
}

impl InputController {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn pointer_down(&mut self, sources: &SourceSet, p: Pos) -> DragState {
        if let Some(idx) = sources.find_near(p) {
            self.state = DragState::Dragging(idx);
        }
        self.state
    }

    /// Moves the dragged source to `p`. No clamping: sources may leave the surface.
    pub fn pointer_move(&mut self, sources: &mut SourceSet, p: Pos) {
        if let DragState::Dragging(idx) = self.state {
            match sources.get_mut(idx) {
                Some(source) => {
                    source.x = p.x;
                    source.y = p.y;
                }
                // The source was removed mid-drag.
                None => self.state = DragState::Idle,
            }
        }
    }

    pub fn pointer_up(&mut self) -> DragState {
        std::mem::take(&mut self.state)
    }

    /// Routes one pointer event. A press egui has claimed never starts a drag;
    /// moves and releases always reach a drag already in progress.
    pub fn handle(
        &mut self,
        sources: &mut SourceSet,
        event: PointerEvent,
        capture: UiCapture,
    ) -> DragState {
        match event {
            PointerEvent::Down(p) if !capture.pointer => {
                self.pointer_down(sources, p);
            }
            PointerEvent::Down(_) => {}
            PointerEvent::Move(p) => self.pointer_move(sources, p),
            PointerEvent::Up => {
                self.pointer_up();
            }
        }
        self.state
    }
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if UiCapture::from_ctx(model.egui.ctx()).keyboard {
        return;
    }
    match key {
        Key::Space => {
            let on = model.params.toggle_interference();
            console_log!("interference overlay {}", if on { "on" } else { "off" });
        }
        Key::Up => model.params.nudge_wavelength(1),
        Key::Down => model.params.nudge_wavelength(-1),
        Key::A => add_source(model),
        Key::R => remove_source(model),
        _ => {}
    }
}

pub fn add_source(model: &mut Model) {
    if let Some(idx) = model.sources.add() {
        console_log!("added source {} ({} total)", idx, model.sources.len());
    }
}

pub fn remove_source(model: &mut Model) {
    if model.sources.remove().is_some() {
        console_log!("removed source ({} left)", model.sources.len());
    }
}

pub fn event(app: &App, model: &mut Model, event: WindowEvent) {
    let rect = app.window_rect();
    let pointer = match event {
        WindowEvent::MousePressed(MouseButton::Left) => {
            PointerEvent::Down(surface_local(rect, app.mouse.position()))
        }
        WindowEvent::MouseMoved(point) => PointerEvent::Move(surface_local(rect, point)),
        WindowEvent::MouseReleased(MouseButton::Left) => PointerEvent::Up,
        _ => return,
    };

    let capture = UiCapture::from_ctx(model.egui.ctx());
    let before = model.input.state();
    let after = model.input.handle(&mut model.sources, pointer, capture);
    match (before, after) {
        (DragState::Idle, DragState::Dragging(idx)) => console_log!("dragging source {}", idx),
        (DragState::Dragging(idx), DragState::Idle) => console_log!("released source {}", idx),
        _ => {}
    }
}

pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle things like keyboard and mouse input.
    model.egui.handle_raw_event(event);
}
