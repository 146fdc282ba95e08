use std::path::PathBuf;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions, vec2};
use egui_plot::{Plot, PlotImage, PlotPoint};

struct SliceViewer {
    source_path: PathBuf,
    shape: (usize, usize, usize),
    slice_index: usize,
    image: ColorImage,
    texture: Option<TextureHandle>,
}

/// Open a window with the rendered slice. Blocks the calling thread until
/// the user closes the window.
pub fn show_slice(
    image: ColorImage,
    source_path: PathBuf,
    shape: (usize, usize, usize),
    slice_index: usize,
) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 1024.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NIfTI slice viewer",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SliceViewer {
                source_path,
                shape,
                slice_index,
                image,
                texture: None,
            }))
        }),
    )
}

impl eframe::App for SliceViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // upload once, on the first frame
        let texture = self
            .texture
            .get_or_insert_with(|| {
                ctx.load_texture("slice", self.image.clone(), TextureOptions::NEAREST)
            })
            .clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            let (nx, ny, nz) = self.shape;
            ui.label("Input path: ");
            ui.monospace(self.source_path.to_string_lossy());
            ui.label(format!("Input size: {nx}x{ny}x{nz}"));
            ui.label(format!("Slice index: {} of {nz}", self.slice_index));

            let size = texture.size_vec2();
            let aspect_ratio = size.x / size.y;

            let plot = Plot::new("slice_preview").data_aspect(1.0);
            plot.show(ui, |plot_ui| {
                let center = PlotPoint::new(0.0, 0.0);
                let image =
                    PlotImage::new("slice_image", texture.id(), center, vec2(aspect_ratio, 1.0));
                plot_ui.image(image);
            });
        });
    }
}
