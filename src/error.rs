use std::path::PathBuf;

use nifti::NiftiError;
use thiserror::Error;

/// Everything that can go wrong between opening the input file and
/// having a renderable slice in hand. All of these are fatal; nothing
/// is retried.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("not a valid NIfTI volume")]
    Format(#[source] NiftiError),

    /// The file parsed fine but does not contain a 3D image.
    #[error("expected a 3D volume, file contains {0} dimensions")]
    NotAVolume(usize),

    #[error("slice index {index} out of range, volume has {extent} slices")]
    IndexOutOfRange { index: usize, extent: usize },
}
