use crate::DrawShapesApp;
use crate::renderer::PainterCanvas;

pub fn central_panel(app: &mut DrawShapesApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let origin = response.rect.min;

            // Handle input
            for event in app.input.process_input(ctx, &response, origin) {
                log::trace!("canvas event: {:?}", event);
                app.editor.handle_event(&event);
            }

            // Render the scene
            let mut canvas = PainterCanvas::new(&painter, origin);
            app.editor.scene().draw(&mut canvas);
        });
}
