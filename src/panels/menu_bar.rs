use crate::DrawShapesApp;
use crate::color::ShapeColor;
use crate::editor::OperationMode;
use crate::shape::ShapeKind;

pub fn menu_bar(app: &mut DrawShapesApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                ui.horizontal(|ui| {
                    ui.label("File:");
                    ui.text_edit_singleline(&mut app.file_path);
                });
                if ui.button("Load").clicked() {
                    log::info!("load from {}", app.file_path);
                    app.load();
                    ui.close_menu();
                }
                if ui.button("Save").clicked() {
                    log::info!("save to {}", app.file_path);
                    app.save();
                    ui.close_menu();
                }
                if ui.button("Undo").clicked() {
                    app.undo();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Color", |ui| {
                for color in ShapeColor::ALL {
                    let current = app.editor.settings.color == color;
                    if ui.selectable_label(current, color.label()).clicked() {
                        app.editor.settings.color = color;
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Shape", |ui| {
                for kind in ShapeKind::ALL {
                    let current = app.editor.settings.shape_kind == kind;
                    if ui.selectable_label(current, kind.label()).clicked() {
                        app.editor.settings.shape_kind = kind;
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Operation", |ui| {
                for mode in OperationMode::ALL {
                    let current = app.editor.settings.mode == mode;
                    if ui.selectable_label(current, mode.label()).clicked() {
                        app.editor.settings.mode = mode;
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Layer", |ui| {
                if ui.button("Bring to Front").clicked() {
                    app.editor.bring_to_front();
                    ui.close_menu();
                }
                if ui.button("Send to Back").clicked() {
                    app.editor.send_to_back();
                    ui.close_menu();
                }
            });
        });
    });
}
