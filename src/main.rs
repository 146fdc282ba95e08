mod error;
mod read;
mod render;
mod view;

use std::{error::Error, path::PathBuf};

use clap::Parser;
use log::info;

use crate::read::Volume;

const DEFAULT_VOLUME_PATH: &str = "data/I004_1.nii.gz";
const SLICE_INDEX: usize = 20;
const CONTRAST_QUANTILE: f32 = 0.999;

#[derive(Parser, Debug)]
struct Args {
    /// Path to the input .nii/.nii.gz file. Must be a 3D scalar volume.
    nii_path: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let path = args
        .nii_path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VOLUME_PATH));

    let volume = Volume::open(&path)?;
    let (nx, ny, nz) = volume.dim();
    println!("{:?}", volume.dim());
    info!("loaded {} ({nx}x{ny}x{nz} voxels)", path.display());

    let slice = volume.axial_slice(SLICE_INDEX)?;
    let image = render::render_to_rgb(slice.view(), CONTRAST_QUANTILE);

    view::show_slice(image, path, (nx, ny, nz), SLICE_INDEX)?;

    Ok(())
}
