use std::{
    panic::AssertUnwindSafe,
    path::PathBuf,
    sync::{Arc, mpsc},
};

use crate::{
    assets::loader::ContentLoader,
    foundation::error::{SlidemorphError, SlidemorphResult},
    slides::{content::VisualContent, store::SlideStore},
};

struct Completed {
    slide: usize,
    path: PathBuf,
    result: SlidemorphResult<VisualContent>,
}

/// Outcome of one applied load.
#[derive(Debug)]
pub struct LoadReport {
    /// Target slide.
    pub slide: usize,
    /// File that was loaded.
    pub path: PathBuf,
    /// `Ok` once the content is in the store.
    pub result: SlidemorphResult<()>,
}

/// Runs content loads off the frame loop and hands results back to it.
///
/// Loads complete in any order and are applied in completion order, so when two loads target
/// the same slide the one finishing last wins. There is no cancellation.
pub struct LoadQueue {
    loader: Arc<dyn ContentLoader>,
    tx: mpsc::Sender<Completed>,
    rx: mpsc::Receiver<Completed>,
    in_flight: usize,
}

impl LoadQueue {
    /// Queue running jobs with `loader`.
    pub fn new(loader: Arc<dyn ContentLoader>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            loader,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Loads requested but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start loading `path` for `slide` on a background thread.
    ///
    /// A panicking loader is reported as a failed load.
    pub fn request(&mut self, slide: usize, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!(slide, path = %path.display(), "load requested");
        let loader = Arc::clone(&self.loader);
        let tx = self.tx.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let result = std::panic::catch_unwind(AssertUnwindSafe(|| loader.load(&path)))
                .unwrap_or_else(|_| {
                    Err(SlidemorphError::load(format!(
                        "loader panicked on '{}'",
                        path.display()
                    )))
                });
            // The receiver only disappears with the queue itself.
            let _ = tx.send(Completed {
                slide,
                path,
                result,
            });
        });
    }

    /// Apply every load that has completed so far without blocking.
    pub fn apply(&mut self, store: &mut SlideStore) -> Vec<LoadReport> {
        let mut reports = Vec::new();
        while let Ok(done) = self.rx.try_recv() {
            reports.push(self.apply_one(store, done));
        }
        reports
    }

    /// Block until every requested load has completed, applying each.
    pub fn wait_all(&mut self, store: &mut SlideStore) -> Vec<LoadReport> {
        let mut reports = Vec::new();
        while self.in_flight > 0 {
            match self.rx.recv() {
                Ok(done) => reports.push(self.apply_one(store, done)),
                Err(_) => break,
            }
        }
        reports
    }

    fn apply_one(&mut self, store: &mut SlideStore, done: Completed) -> LoadReport {
        self.in_flight = self.in_flight.saturating_sub(1);
        let result = done
            .result
            .and_then(|content| store.load_content(done.slide, content));
        if let Err(e) = &result {
            tracing::warn!(slide = done.slide, path = %done.path.display(), error = %e, "load failed");
        }
        LoadReport {
            slide: done.slide,
            path: done.path,
            result,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/queue.rs"]
mod tests;
