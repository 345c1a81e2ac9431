use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};
use rand::RngCore;

use crate::{Error, Result, RomImage, Rng};

/// Default name of the generated ROM image.
pub const DEFAULT_PATH: &str = "machine_code.m";

/// File extension conventionally used for ROM images.
pub const EXTENSION: &str = "m";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Settings for one generation run. The image size is not configurable.
pub struct GenerateOptions {
    /// Where the image is written.
    pub path: PathBuf,
    /// Fixed seed for a reproducible image. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            seed: None,
        }
    }
}

impl GenerateOptions {
    /// Runs the generation described by these options and returns the image written.
    pub fn run(&self) -> Result<RomImage> {
        let mut rng = match self.seed {
            Some(seed) => {
                debug!("seeding generator with {seed:#018X}");
                Rng::with_seed(seed)
            }
            None => Rng::new(),
        };
        generate_with(&self.path, &mut rng)
    }
}

/// Writes [`ROM_SIZE`](crate::ROM_SIZE) random bytes to `path`, replacing any existing file.
///
/// Fails with [`Error::FileSystem`] if the file cannot be created or written.
pub fn generate(path: impl AsRef<Path>) -> Result<()> {
    generate_with(path, &mut Rng::new()).map(|_| ())
}

/// Like [`generate`], drawing the bytes from `rng`. Returns the image that was written.
pub fn generate_with<P, R>(path: P, rng: &mut R) -> Result<RomImage>
where
    P: AsRef<Path>,
    R: RngCore + ?Sized,
{
    let image = RomImage::random(rng);
    write_image(&path, &image)?;
    info!(
        "Machine code file '{}' generated successfully.",
        path.as_ref().display()
    );
    Ok(image)
}

/// Creates (or truncates) the file at `path` and writes `image` to it in a single call.
pub fn write_image(path: impl AsRef<Path>, image: &RomImage) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|err| Error::file_system(path, err))?;
    file.write_all(image.as_bytes())
        .map_err(|err| Error::file_system(path, err))?;
    file.flush().map_err(|err| Error::file_system(path, err))
}
