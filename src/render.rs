use eframe::egui::ColorImage;
use ndarray::ArrayView2;

fn get_quantile(data: &[f32], q: f32) -> f32 {
    let mut data: Vec<f32> = data.to_vec();
    data.sort_by(f32::total_cmp);

    let idx_for_q: usize = ((data.len() as f32 * q) as usize).min(data.len() - 1);

    data[idx_for_q]
}

/// Map a 2D slice to a grayscale RGBA image, normalized between the slice
/// minimum and the given upper quantile. Clipping the top quantile keeps a
/// few hot voxels from washing out the rest of the image.
pub fn render_to_rgb(slice: ArrayView2<'_, f32>, quantile: f32) -> ColorImage {
    let (nx, ny) = slice.dim();
    let data: Vec<f32> = slice.iter().copied().collect();

    let vmin = data.iter().copied().fold(f32::INFINITY, f32::min);
    let vmax_quantiled = get_quantile(&data, quantile);

    let normalizer = |v: &f32| (v - vmin) / (vmax_quantiled - vmin);

    let to_rgba = |value: &f32| {
        // as-cast saturates, so values above the quantile clip to white
        let c = (255.0 * *value) as u8;
        [c, c, c, 255]
    };

    let mapped: Vec<u8> = if vmax_quantiled == vmin {
        data.iter().flat_map(to_rgba).collect()
    } else {
        data.iter()
            .map(normalizer)
            .flat_map(|v| to_rgba(&v))
            .collect()
    };

    ColorImage::from_rgba_unmultiplied([ny, nx], &mapped)
}
