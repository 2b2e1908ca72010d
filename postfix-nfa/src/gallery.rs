use crate::render::{RenderError, RenderPort};
use futures::future::join_all;
use postfix_nfa_construction::{construct, Construction, ConstructionError, Fragment, Snapshot, Symbol};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error("rendering snapshot {index} failed: {source}")]
    Render {
        index: usize,
        #[source]
        source: RenderError,
    },
}

/// The rendered steps of one construction run.
#[derive(Debug)]
pub struct Gallery<I> {
    /// The NFA for the whole expression.
    pub nfa: Fragment,
    /// One image per processed symbol, in processing order.
    pub images: Vec<(usize, I)>,
}

/// Renders all `snapshots` concurrently.
///
/// The results are in the same order as `snapshots`, paired with each snapshot's index.
/// A failure to render one snapshot does not affect the others.
pub async fn render_snapshots<P: RenderPort>(
    port: &P,
    snapshots: &[Snapshot],
) -> Vec<(usize, Result<P::Image, RenderError>)> {
    let renders = snapshots.iter().map(|snapshot| async move {
        log::trace!("rendering snapshot {}: {}", snapshot.index, snapshot.title);
        let result = port.render_snapshot(snapshot).await;
        if let Err(e) = &result {
            log::warn!("rendering snapshot {} failed: {e}", snapshot.index);
        }
        (snapshot.index, result)
    });

    join_all(renders).await
}

/// Constructs the NFA for `symbols` and renders every step.
///
/// Construction happens before any rendering, so an invalid expression never reaches `port`.
/// Fails on the first snapshot (in processing order) that could not be rendered.
pub async fn build_gallery<P: RenderPort>(
    port: &P,
    symbols: &[Symbol],
) -> Result<Gallery<P::Image>, GalleryError> {
    let Construction { snapshots, nfa } = construct(symbols)?;

    let images = render_snapshots(port, &snapshots)
        .await
        .into_iter()
        .map(|(index, result)| {
            result
                .map(|image| (index, image))
                .map_err(|source| GalleryError::Render { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::info!("rendered {} snapshots", images.len());

    Ok(Gallery { nfa, images })
}
