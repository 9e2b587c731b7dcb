use crate::grid::Grid;
use crate::quantize;
use crate::rendering::{raster, Screenshot};
use crate::session::{Command, EditorSession, Notification, Outcome};
use crate::{EditorConfig, Error, Result};
use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::thread;
use tokio::sync::oneshot;

enum Request {
    Apply(Command, oneshot::Sender<Outcome>),
    Grid(oneshot::Sender<Grid>),
    Render(u32, oneshot::Sender<Result<Screenshot>>),
    Close(oneshot::Sender<()>),
}

/// An async-friendly editor backed by a dedicated worker thread.
///
/// The worker owns the `EditorSession`; every request is queued and run to
/// completion in arrival order, so callers on any task see the same
/// serialized sequence of edits.
#[derive(Clone)]
pub struct Editor {
    cmd_tx: Sender<Request>,
}

impl Editor {
    /// Create a new editor (spawns a background thread that owns the session).
    pub async fn new(config: Option<EditorConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let (cmd_tx, cmd_rx) = mpsc::channel::<Request>();
        let (init_tx, init_rx): (oneshot::Sender<Result<()>>, oneshot::Receiver<Result<()>>) =
            oneshot::channel();

        thread::spawn(move || {
            let mut session = match EditorSession::new(config) {
                Ok(s) => s,
                Err(err) => {
                    let _ = init_tx.send(Err(err));
                    return;
                }
            };
            let _ = init_tx.send(Ok(()));

            while let Ok(req) = cmd_rx.recv() {
                match req {
                    Request::Apply(cmd, resp) => {
                        let _ = resp.send(session.apply(cmd));
                    }
                    Request::Grid(resp) => {
                        let _ = resp.send(session.grid().clone());
                    }
                    Request::Render(scale, resp) => {
                        let _ = resp.send(raster::rasterize(session.grid(), scale));
                    }
                    Request::Close(resp) => {
                        let _ = resp.send(());
                        break;
                    }
                }
            }
            log::debug!("editor worker stopped");
        });

        init_rx
            .await
            .map_err(|e| Error::Other(format!("Worker init canceled: {}", e)))??;

        Ok(Self { cmd_tx })
    }

    /// Queue a command and wait for its outcome
    pub async fn apply(&self, cmd: Command) -> Result<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.send(Request::Apply(cmd, tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Apply canceled: {}", e)))
    }

    /// Copy of the current grid
    pub async fn grid(&self) -> Result<Grid> {
        let (tx, rx) = oneshot::channel();
        self.send(Request::Grid(tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Grid canceled: {}", e)))
    }

    /// PNG preview of the current grid
    pub async fn screenshot(&self, scale: u32) -> Result<Screenshot> {
        let (tx, rx) = oneshot::channel();
        self.send(Request::Render(scale, tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Screenshot canceled: {}", e)))?
    }

    /// Read an image file and, once it is fully loaded, quantize it onto
    /// the grid.
    ///
    /// Files that are not images never reach the session: the returned
    /// outcome is an error notification and the grid is untouched.
    pub async fn load_image_file(&self, path: impl AsRef<Path>) -> Result<Outcome> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;

        let format = match quantize::sniff_format(&data) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("{}: {}", path.display(), e);
                return Ok(Outcome::Notify(Notification::error(
                    "Error",
                    "Please select a valid image file.",
                )));
            }
        };

        self.apply(Command::LoadImage {
            mime: format.to_mime_type().to_string(),
            data,
        })
        .await
    }

    /// Shutdown the background worker.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.send(Request::Close(tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))
    }

    fn send(&self, req: Request) -> Result<()> {
        self.cmd_tx
            .send(req)
            .map_err(|_| Error::Other("editor worker has stopped".to_string()))
    }
}
