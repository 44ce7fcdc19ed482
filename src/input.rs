use egui::{Context, Key, Modifiers, PointerButton, Pos2, Response};

use crate::geometry::Point;

/// Input the editor reacts to, in scene coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button went down and the pointer started moving
    PointerDown { position: Point },
    /// Pointer moved with the primary button held
    PointerDrag { position: Point },
    /// Primary button released after a drag
    PointerUp,
    /// Press and release without a drag
    Click {
        position: Point,
        button: PointerButton,
    },
    /// Wheel movement over the canvas; positive is away from the user
    Scroll { delta: f32 },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Handles converting raw egui input on the canvas into [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    dragging: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn to_scene(pos: Pos2, origin: Pos2) -> Point {
        Point::from_pos2((pos - origin).to_pos2())
    }

    /// Process the canvas response for this frame. `origin` is the screen
    /// position of scene coordinate (0, 0).
    pub fn process_input(
        &mut self,
        ctx: &Context,
        response: &Response,
        origin: Pos2,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if response.drag_started_by(PointerButton::Primary) {
            let start = ctx
                .input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos());
            if let Some(pos) = start {
                events.push(InputEvent::PointerDown {
                    position: Self::to_scene(pos, origin),
                });
                self.dragging = true;
            }
        }

        if self.dragging && response.dragged_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(InputEvent::PointerDrag {
                    position: Self::to_scene(pos, origin),
                });
            }
        }

        if self.dragging && response.drag_stopped() {
            events.push(InputEvent::PointerUp);
            self.dragging = false;
        }

        for (clicked, button) in [
            (response.clicked(), PointerButton::Primary),
            (response.secondary_clicked(), PointerButton::Secondary),
        ] {
            if clicked {
                if let Some(pos) = response.interact_pointer_pos() {
                    events.push(InputEvent::Click {
                        position: Self::to_scene(pos, origin),
                        button,
                    });
                }
            }
        }

        if response.hovered() {
            let delta = ctx.input(|i| i.raw_scroll_delta.y);
            if delta != 0.0 {
                events.push(InputEvent::Scroll { delta });
            }
        }

        // keys typed into a text field are not canvas commands
        if !ctx.wants_keyboard_input() {
            ctx.input(|i| events.extend(key_events(&i.events)));
        }

        events
    }
}

/// Key presses among the raw egui events
pub fn key_events(raw: &[egui::Event]) -> Vec<InputEvent> {
    raw.iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => Some(InputEvent::KeyDown {
                key: *key,
                modifiers: *modifiers,
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_press(key: Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    // One frame with a text field above the canvas; returns the canvas events
    fn run_frame(
        ctx: &Context,
        handler: &mut InputHandler,
        events: Vec<egui::Event>,
        focus_text: bool,
    ) -> Vec<InputEvent> {
        let mut out = Vec::new();
        let raw = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut path = String::new();
                let field = ui.text_edit_singleline(&mut path);
                if focus_text {
                    field.request_focus();
                }
                let (response, _painter) =
                    ui.allocate_painter(egui::vec2(100.0, 100.0), egui::Sense::click_and_drag());
                out = handler.process_input(ctx, &response, response.rect.min);
            });
        });
        out
    }

    #[test]
    fn test_key_events_keeps_presses_only() {
        let raw = vec![
            key_press(Key::Delete, true),
            key_press(Key::Delete, false),
            egui::Event::Text("x".to_owned()),
            key_press(Key::ArrowUp, true),
        ];
        let keys: Vec<_> = key_events(&raw)
            .into_iter()
            .map(|e| match e {
                InputEvent::KeyDown { key, .. } => key,
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(keys, vec![Key::Delete, Key::ArrowUp]);
    }

    #[test]
    fn test_keys_reach_canvas_without_text_focus() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();
        let events = run_frame(&ctx, &mut handler, vec![key_press(Key::Backspace, true)], false);
        assert!(events.contains(&InputEvent::KeyDown {
            key: Key::Backspace,
            modifiers: Modifiers::NONE,
        }));
    }

    #[test]
    fn test_keys_typed_into_text_field_are_ignored() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();
        // first frame gives the field focus
        run_frame(&ctx, &mut handler, Vec::new(), true);

        let events = run_frame(&ctx, &mut handler, vec![key_press(Key::Backspace, true)], true);
        assert!(ctx.wants_keyboard_input());
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, InputEvent::KeyDown { .. }))
        );
    }
}
