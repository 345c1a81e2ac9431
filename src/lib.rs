//! Generates simulated machine-code ROM images: fixed-size files of random bytes that only
//! superficially resemble compiled instructions.
//!
//! ```no_run
//! romgen::generate(romgen::DEFAULT_PATH)?;
//! let rom = romgen::Rom::load(romgen::DEFAULT_PATH)?;
//! println!("{:08X}", rom.read_word(0));
//! # Ok::<(), romgen::Error>(())
//! ```

mod buffer;
mod error;
mod generator;
mod rand_support;
mod rng;
mod rom;


pub use buffer::{RomImage, ROM_SIZE};
pub use error::{Error, Result};
pub use generator::{
    generate, generate_with, write_image, GenerateOptions, DEFAULT_PATH, EXTENSION,
};
pub use rng::Rng;
pub use rom::Rom;
