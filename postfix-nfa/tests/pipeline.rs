use postfix_nfa::*;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

#[ctor::ctor]
fn init() {
    env_logger::init();
}

/// Records every `(fragment, title)` it is asked to render.
#[derive(Default)]
struct RecordingPort {
    seen: RefCell<Vec<(Fragment, String)>>,
}

impl RenderPort for RecordingPort {
    type Image = String;

    async fn render(&self, fragment: &Fragment, title: &str) -> Result<String, RenderError> {
        self.seen
            .borrow_mut()
            .push((fragment.clone(), title.to_string()));
        Ok(title.to_string())
    }
}

/// Fails on a single title.
struct FailingPort {
    fail_on: &'static str,
}

impl RenderPort for FailingPort {
    type Image = usize;

    async fn render(&self, fragment: &Fragment, title: &str) -> Result<usize, RenderError> {
        if title == self.fail_on {
            Err(RenderError::Rejected(format!("cannot draw {title}")))
        } else {
            Ok(fragment.edges().len())
        }
    }
}

/// Returns `Pending` a number of times before completing.
struct YieldTimes(usize);

impl Future for YieldTimes {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Finishes the first snapshot last.
struct SlowFirstPort {
    completed: RefCell<Vec<usize>>,
    total: usize,
}

impl RenderPort for SlowFirstPort {
    type Image = usize;

    async fn render(&self, _fragment: &Fragment, _title: &str) -> Result<usize, RenderError> {
        unreachable!("snapshots are rendered through render_snapshot")
    }

    async fn render_snapshot(&self, snapshot: &Snapshot) -> Result<usize, RenderError> {
        YieldTimes(self.total - snapshot.index).await;
        self.completed.borrow_mut().push(snapshot.index);
        Ok(snapshot.index)
    }
}

#[test]
fn recording_port_sees_every_step() {
    let port = RecordingPort::default();
    let gallery =
        futures::executor::block_on(build_gallery(&port, &postfix("a b . +"))).unwrap();

    let titles: Vec<_> = gallery.images.iter().map(|(i, t)| (*i, t.as_str())).collect();
    assert_eq!(
        titles,
        [
            (0, "Graph for a"),
            (1, "Graph for b"),
            (2, "Concat operation"),
            (3, "Graph for ."),
        ]
    );

    let seen = port.seen.borrow();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0].0.edges().len(), 3);
    assert_eq!(seen[2].0.node_count(), 7);
    assert_eq!(seen[3].0, gallery.nfa);
}

#[test]
fn malformed_expression_never_renders() {
    let port = RecordingPort::default();
    let result = futures::executor::block_on(build_gallery(&port, &postfix("a b")));

    assert!(matches!(
        result,
        Err(GalleryError::Construction(ConstructionError::Malformed {
            depth: 2
        }))
    ));
    assert!(port.seen.borrow().is_empty());
}

#[test]
fn underflow_surfaces_from_gallery() {
    let port = RecordingPort::default();
    let result = futures::executor::block_on(build_gallery(&port, &postfix("+")));
    assert!(matches!(
        result,
        Err(GalleryError::Construction(ConstructionError::Underflow { .. }))
    ));
}

#[test]
fn one_failed_render_leaves_the_rest() {
    let port = FailingPort {
        fail_on: "Graph for b",
    };
    let snapshots = construct(&postfix("a b . *")).unwrap().snapshots;
    let results = smol::block_on(render_snapshots(&port, &snapshots));

    assert_eq!(results.len(), 4);
    assert!(matches!(results[0], (0, Ok(3))));
    assert!(matches!(results[1], (1, Err(RenderError::Rejected(_)))));
    assert!(matches!(results[2], (2, Ok(7))));
    assert!(matches!(results[3], (3, Ok(9))));
}

#[test]
fn gallery_reports_failed_index() {
    let port = FailingPort {
        fail_on: "Concat operation",
    };
    let result = smol::block_on(build_gallery(&port, &postfix("a b .")));
    match result {
        Err(GalleryError::Render { index, source }) => {
            assert_eq!(index, 2);
            assert_eq!(source.to_string(), "renderer rejected graph: cannot draw Concat operation");
        }
        other => panic!("expected a render error, got {other:?}"),
    }
}

#[test]
fn output_order_follows_processing_order() {
    let snapshots = construct(&postfix("a b . c . *")).unwrap().snapshots;
    let port = SlowFirstPort {
        completed: RefCell::new(Vec::new()),
        total: snapshots.len(),
    };

    let results = futures::executor::block_on(render_snapshots(&port, &snapshots));

    let indices: Vec<_> = results.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4, 5]);
    assert!(results.iter().all(|(i, r)| matches!(r, Ok(j) if i == j)));

    // rendering itself finished in reverse
    assert_eq!(*port.completed.borrow(), [5, 4, 3, 2, 1, 0]);
}
