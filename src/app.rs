use crate::config::EditorConfig;
use crate::editor::{Editor, EditorSettings};
use crate::input::InputHandler;
use crate::panels;

/// What survives a restart. Everything else is rebuilt.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct PersistedState {
    settings: EditorSettings,
    file_path: String,
}

/// Message shown in a modal window until dismissed
#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub(crate) title: &'static str,
    pub(crate) message: String,
}

pub struct DrawShapesApp {
    pub(crate) editor: Editor,
    pub(crate) input: InputHandler,
    /// Scene file used by Load and Save
    pub(crate) file_path: String,
    pub(crate) notice: Option<Notice>,
}

impl DrawShapesApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        let state: PersistedState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self {
            editor: Editor::new(config).with_settings(state.settings),
            input: InputHandler::new(),
            file_path: state.file_path,
            notice: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub(crate) fn load(&mut self) {
        if let Err(e) = self.editor.load(&self.file_path) {
            self.notice = Some(Notice {
                title: "Load Error",
                message: format!("Error loading file: {}", e),
            });
        }
    }

    pub(crate) fn save(&mut self) {
        if let Err(e) = self.editor.save(&self.file_path) {
            self.notice = Some(Notice {
                title: "Save Error",
                message: format!("Error saving file: {}", e),
            });
        }
    }

    pub(crate) fn undo(&mut self) {
        if !self.editor.undo() {
            self.notice = Some(Notice {
                title: "Undo",
                message: "Nothing to undo".to_owned(),
            });
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let mut open = true;
        egui::Window::new(notice.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(&notice.message);
                if ui.button("OK").clicked() {
                    open = false;
                }
            });
        if !open {
            self.notice = None;
        }
    }
}

impl eframe::App for DrawShapesApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            settings: self.editor.settings.clone(),
            file_path: self.file_path.clone(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &state);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::S)) {
            self.save();
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::O)) {
            self.load();
        }

        panels::menu_bar(self, ctx);
        panels::central_panel(self, ctx);
        self.show_notice(ctx);
    }
}
