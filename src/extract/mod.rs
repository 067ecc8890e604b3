//! Swatch extraction module
//!
//! Turns sample photographs into catalog color values: band-averaged
//! sampling, annotated audit images, and the batch loop over a sample
//! directory.

pub mod annotate;
pub mod batch;
pub mod sampler;

pub use annotate::annotate;
pub use batch::{extract_directory, extract_image, BatchFailure, BatchReport, SampledImage};
pub use sampler::BandSampler;
