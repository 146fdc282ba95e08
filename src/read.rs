use std::{io, path::Path};

use log::debug;
use ndarray::{Array2, Array3, ArrayD, Axis, Ix3};
use nifti::{IntoNdArray, NiftiError, NiftiObject, ReaderOptions};

use crate::error::ViewError;

/// A dense 3D scalar image, fully loaded into memory as (X, Y, Z).
#[derive(Debug)]
pub struct Volume {
    data: Array3<f32>,
}

impl Volume {
    /// Read a `.nii` or `.nii.gz` file into a `Volume`. The header is only
    /// consulted for the shape; orientation and voxel spacing are ignored.
    pub fn open(path: &Path) -> Result<Self, ViewError> {
        let obj = ReaderOptions::new().read_file(path).map_err(|e| match e {
            NiftiError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                ViewError::FileNotFound(path.to_owned())
            }
            other => ViewError::Format(other),
        })?;

        let data: ArrayD<f32> = obj
            .into_volume()
            .into_ndarray::<f32>()
            .map_err(ViewError::Format)?;
        debug!("raw array shape: {:?}", data.shape());

        let ndim = data.ndim();
        let data = data
            .into_dimensionality::<Ix3>()
            .map_err(|_| ViewError::NotAVolume(ndim))?;

        Ok(Self { data })
    }

    /// The (nx, ny, nz) extents, as declared by the file header.
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// The (X, Y) cross-section at index `z` along the third axis, copied
    /// out of the volume. Plain indexing, no interpolation.
    pub fn axial_slice(&self, z: usize) -> Result<Array2<f32>, ViewError> {
        let (_, _, nz) = self.data.dim();
        if z >= nz {
            return Err(ViewError::IndexOutOfRange {
                index: z,
                extent: nz,
            });
        }

        Ok(self.data.index_axis(Axis(2), z).to_owned())
    }
}
