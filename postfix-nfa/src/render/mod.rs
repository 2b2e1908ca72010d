//! Rendering of construction snapshots.
//!
//! Anything that turns a [`Fragment`] into an image implements [`RenderPort`].
//! With the `dot` feature, [`DotRenderer`] emits graphviz source and [`GraphvizRenderer`]
//! rasterizes it through the graphviz `dot` program.

use postfix_nfa_construction::{Fragment, Snapshot, SnapshotKind};
use std::future::Future;
use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[cfg(feature = "dot")]
mod dot;
#[cfg(feature = "dot")]
pub use dot::{write_dot, DotGraph, DotRenderer, GraphvizRenderer, RasterImage};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("could not write graph: {0}")]
    Io(#[from] io::Error),
    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` failed with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("renderer rejected graph: {0}")]
    Rejected(String),
}

/// Turns fragments into images.
///
/// Rendering is asynchronous so that snapshots can be rendered concurrently,
/// see [`render_snapshots`](crate::render_snapshots).
pub trait RenderPort {
    /// What a rendered fragment looks like.
    type Image;

    /// Lays out `fragment` from left to right, with `title` above it.
    fn render(
        &self,
        fragment: &Fragment,
        title: &str,
    ) -> impl Future<Output = Result<Self::Image, RenderError>>;

    /// Renders a snapshot under its own title.
    ///
    /// Override this to style snapshots differently depending on their [`SnapshotKind`].
    fn render_snapshot(
        &self,
        snapshot: &Snapshot,
    ) -> impl Future<Output = Result<Self::Image, RenderError>> {
        self.render(&snapshot.fragment, &snapshot.title)
    }
}

/// Global settings related to rendering fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Graphviz `rankdir`, the direction the graph flows in.
    pub rank_dir: String,
    /// Node fill color for literals and closures.
    pub fill_color: String,
    /// Node fill color for the result of a concatenation.
    pub concat_fill_color: String,
    /// Whether to display label text next to edges
    pub show_edge_labels: bool,
    /// The title which should be displayed above the graph.
    ///
    /// Defaults to the title passed to the renderer.
    pub title: Option<String>,
}

impl RenderSettings {
    /// Shows `title` above every graph, regardless of the snapshot title.
    pub fn with_title(mut self, title: impl AsRef<str>) -> Self {
        self.title = Some(title.as_ref().to_string());
        self
    }

    pub fn with_rank_dir(mut self, rank_dir: impl AsRef<str>) -> Self {
        self.rank_dir = rank_dir.as_ref().to_string();
        self
    }

    pub fn with_fill_color(mut self, color: impl AsRef<str>) -> Self {
        self.fill_color = color.as_ref().to_string();
        self
    }

    pub fn with_concat_fill_color(mut self, color: impl AsRef<str>) -> Self {
        self.concat_fill_color = color.as_ref().to_string();
        self
    }

    pub fn without_edge_labels(mut self) -> Self {
        self.show_edge_labels = false;
        self
    }

    #[cfg_attr(not(feature = "dot"), allow(dead_code))]
    pub(crate) fn fill_for(&self, kind: Option<SnapshotKind>) -> &str {
        match kind {
            Some(SnapshotKind::Concat) => &self.concat_fill_color,
            _ => &self.fill_color,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            rank_dir: "LR".to_string(),
            fill_color: "#ECF0F1".to_string(),
            concat_fill_color: "#FDE3A7".to_string(),
            show_edge_labels: true,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_depends_on_kind() {
        let settings = RenderSettings::default().with_fill_color("white");
        assert_eq!(settings.fill_for(None), "white");
        assert_eq!(settings.fill_for(Some(SnapshotKind::Star)), "white");
        assert_eq!(settings.fill_for(Some(SnapshotKind::Concat)), "#FDE3A7");
    }

    #[test]
    fn builders() {
        let settings = RenderSettings::default()
            .with_title("t")
            .with_rank_dir("TB")
            .without_edge_labels();
        assert_eq!(settings.title.as_deref(), Some("t"));
        assert_eq!(settings.rank_dir, "TB");
        assert!(!settings.show_edge_labels);
    }
}
