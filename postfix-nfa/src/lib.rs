//! Visualize Thompson's construction of an NFA from a postfix regular expression.
//!
//! Every symbol of the expression yields a snapshot of the fragment it affected,
//! and every snapshot is rendered through a [`RenderPort`].
//!
//! ```rust
//! use postfix_nfa::*;
//!
//! let symbols = postfix("a b . *");
//! let gallery = futures::executor::block_on(build_gallery(&DotRenderer::default(), &symbols))
//!     .unwrap();
//!
//! assert_eq!(gallery.images.len(), 4);
//! assert!(gallery.images[2].1.as_str().contains("Concat operation"));
//! ```
pub use postfix_nfa_construction::*;

mod gallery;
pub use gallery::{build_gallery, render_snapshots, Gallery, GalleryError};

pub mod render;
pub use render::{RenderError, RenderPort, RenderSettings};

#[cfg(feature = "dot")]
pub use render::{write_dot, DotGraph, DotRenderer, GraphvizRenderer, RasterImage};
