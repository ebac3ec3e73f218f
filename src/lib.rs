//! This is a library for deterministic generative posters: translucent
//! wobbly blobs layered over a light canvas, with a caption in the corner.
//!
//! It is split into two main modules: [`scene`] for composing the ordered
//! list of draw instructions out of a seed, and [`drawing`] for rasterizing
//! it into an RGBA image (requires the `drawing` feature, on by default).
//! Here, "blob" denotes a closed polygon sampled from a circle whose radius
//! jitters independently at every vertex.
//!
//! # Basic usage
//! ```no_run
//! use blob_poster::scene::{self, Parameters, PaletteMode};
//!
//! # fn main() -> anyhow::Result<()> {
//! let path = "poster.png";
//!
//! let poster = scene::compose(&Parameters {
//!   layer_count: 11,
//!   wobble: 0.26,
//!   seed: 7015,
//!   palette_mode: PaletteMode::Pastel,
//! })?;
//! // 700 is the canvas width; the height follows the poster's 7:10 aspect
//! poster.render(700).save(path)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Determinism
//! Composition draws all of its randomness from a single PCG-64 generator
//! seeded with [`Parameters::seed`](scene::Parameters::seed), in a fixed
//! order; see [`scene`] for the exact sequence. Two equal
//! [`Parameters`](scene::Parameters) values therefore always compose equal
//! [`Poster`](scene::Poster) values, and equal posters rasterize to equal
//! images at equal widths. There is no hidden global state to leak between
//! renders.
//!
//! # Errors
//! Every fallible entry point validates its arguments up front and returns
//! [`Error::InvalidArgument`](error::Error::InvalidArgument) before touching
//! the RNG, so a rejected call has no observable effect.

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod scene;
#[cfg(feature = "drawing")]
pub mod drawing;
