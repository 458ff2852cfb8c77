//! # Geometry Kernels
//!
//! Pure sub-algorithms of the sprite mesh builder. Every function here works
//! on plain values or on the builder-owned [`ScratchGrid`]; none of them keep
//! state between calls.
//!
//! - [`border`]: fit 9-slice borders to the drawn rect
//! - [`grid`]: scratch grid and the unclipped quad emitter
//! - [`clip`]: quad clipping against a sweep line
//! - [`radial`]: sweep lines for linear and radial fills
//! - [`anchor`]: slice anchor adjustment
//! - [`aspect`]: drawing dimensions of the simple path

pub mod anchor;
pub mod aspect;
pub mod border;
pub mod clip;
pub mod grid;
pub mod radial;

pub use clip::{emit_clipped_quad, ClipLine};
pub use grid::{emit_quad, Quad, ScratchGrid};
