use crate::render::{RenderError, RenderPort, RenderSettings};
use itertools::Itertools;
use postfix_nfa_construction::{Fragment, NodeId, Snapshot, SnapshotKind};
use std::fmt::{Display, Formatter};
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn node_name(n: NodeId) -> String {
    format!("node_{n}")
}

fn escape_text(inp: &str) -> String {
    inp.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes `fragment` as a graphviz digraph.
///
/// `kind` selects the fill color; `None` uses the regular [`fill_color`](RenderSettings::fill_color).
pub fn write_dot<W: Write>(
    output: &mut W,
    fragment: &Fragment,
    title: &str,
    kind: Option<SnapshotKind>,
    settings: &RenderSettings,
) -> io::Result<()> {
    writeln!(output, "digraph {{")?;

    writeln!(output, r#"rankdir="{}";"#, escape_text(&settings.rank_dir))?;

    let title = settings.title.as_deref().unwrap_or(title);
    writeln!(output, r#"labelloc="t";"#)?;
    writeln!(output, r#"label="{}";"#, escape_text(title))?;

    let node_attrs = [
        ("style", "filled"),
        ("fillcolor", settings.fill_for(kind)),
    ]
    .iter()
    .map(|(k, v)| format!(r#"{k}="{}""#, escape_text(v)))
    .join(",");
    writeln!(output, "node [{node_attrs}]")?;

    for &n in fragment.nodes() {
        let shape = if n == fragment.accept() {
            "doublecircle"
        } else {
            "circle"
        };
        writeln!(output, r#"{} [label="{n}",shape="{shape}"]"#, node_name(n))?;
    }

    for edge in fragment.edges() {
        let from = node_name(edge.origin);
        let to = node_name(edge.dest);

        if settings.show_edge_labels {
            let label = escape_text(&edge.label.to_string());
            writeln!(output, r#"{from} -> {to} [label="{label}"]"#)?
        } else {
            writeln!(output, "{from} -> {to}")?
        }
    }

    writeln!(output, "}}")?;

    Ok(())
}

/// Graphviz source text of a single rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGraph(pub String);

impl DotGraph {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DotGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders fragments to graphviz `.dot` source.
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    pub settings: RenderSettings,
}

impl DotRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    fn to_dot(
        &self,
        fragment: &Fragment,
        title: &str,
        kind: Option<SnapshotKind>,
    ) -> Result<DotGraph, RenderError> {
        let mut out = Vec::new();
        write_dot(&mut out, fragment, title, kind, &self.settings)?;
        String::from_utf8(out)
            .map(DotGraph)
            .map_err(|e| RenderError::Rejected(e.to_string()))
    }
}

impl RenderPort for DotRenderer {
    type Image = DotGraph;

    async fn render(&self, fragment: &Fragment, title: &str) -> Result<DotGraph, RenderError> {
        self.to_dot(fragment, title, None)
    }

    async fn render_snapshot(&self, snapshot: &Snapshot) -> Result<DotGraph, RenderError> {
        self.to_dot(&snapshot.fragment, &snapshot.title, Some(snapshot.kind))
    }
}

/// The output of the graphviz `dot` program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// The graphviz output format, such as `png`.
    pub format: String,
    pub bytes: Vec<u8>,
}

/// Rasterizes fragments by piping their dot source through the graphviz `dot` program.
///
/// Note: the program runs to completion inside the render future, blocking the executor thread.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: PathBuf,
    format: String,
    dot: DotRenderer,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self {
            program: PathBuf::from("dot"),
            format: "png".to_string(),
            dot: DotRenderer::default(),
        }
    }
}

impl GraphvizRenderer {
    /// Uses the graphviz executable at `program` instead of `dot` from the `PATH`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Sets the output format, passed to graphviz as `-T<format>`.
    pub fn with_format(mut self, format: impl AsRef<str>) -> Self {
        self.format = format.as_ref().to_string();
        self
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.dot.settings = settings;
        self
    }

    fn rasterize(&self, graph: DotGraph) -> Result<RasterImage, RenderError> {
        let program = self.program.display().to_string();
        log::trace!("running `{program} -T{}`", self.format);

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RenderError::Spawn {
                program: program.clone(),
                source,
            })?;

        // closing stdin tells graphviz the graph is complete
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(graph.as_str().as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RenderError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(RasterImage {
            format: self.format.clone(),
            bytes: output.stdout,
        })
    }
}

impl RenderPort for GraphvizRenderer {
    type Image = RasterImage;

    async fn render(&self, fragment: &Fragment, title: &str) -> Result<RasterImage, RenderError> {
        let graph = self.dot.render(fragment, title).await?;
        self.rasterize(graph)
    }

    async fn render_snapshot(&self, snapshot: &Snapshot) -> Result<RasterImage, RenderError> {
        let graph = self.dot.render_snapshot(snapshot).await?;
        self.rasterize(graph)
    }
}
