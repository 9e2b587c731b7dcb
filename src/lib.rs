//! RFox Pixel Editor
//!
//! The model behind a 32x32, eight-color pixel-art editor: painting, flood
//! fill, undo/redo, image quantization, bitmap text and the `.db` code
//! format. Presentation is left to the host; everything here is driven by
//! discrete [`Command`]s.
//!
//! # Features
//!
//! - **Deterministic**: the same command sequence always yields the same grid
//! - **Explicit state**: one [`EditorSession`] owns grid, history and tools
//! - **Async handle** (`async` feature, default): a worker-backed [`Editor`]
//!   for hosts that load images asynchronously
//!
//! # Example
//!
//! ```
//! use rfpixel::{ColorKey, Command, EditorConfig, Outcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = rfpixel::new_session(EditorConfig::default())?;
//! session.apply(Command::SelectColor { color: ColorKey::RED });
//! session.apply(Command::Fill { row: 0, col: 0 });
//! session.apply(Command::Undo);
//!
//! if let Outcome::Exported { code } = session.apply(Command::Export) {
//!     assert!(code.starts_with(".db 0x02"));
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod clipboard;
pub mod code;
pub mod font;
pub mod grid;
pub mod history;
pub mod paint;
pub mod palette;
pub mod quantize;
pub mod session;
pub mod text;

// PNG previews of the grid
pub mod rendering;

// Worker-backed async editor handle
#[cfg(feature = "async")]
pub mod async_api;

#[cfg(feature = "async")]
pub use async_api::Editor;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use grid::{Cell, Grid, CELL_COUNT, GRID_SIZE};
pub use history::{EditRecord, History};
pub use palette::{ColorKey, Rgb, PALETTE};
pub use quantize::Resample;
pub use session::{Command, EditorSession, Notification, NotificationLevel, Outcome, Shortcut, Tool};

/// Configuration for an editor session
///
/// Defaults follow the classic editor: a black grid, black selected, the
/// pencil active and unbounded undo.
///
/// # Examples
///
/// ```
/// let cfg = rfpixel::EditorConfig::default();
/// assert_eq!(cfg.history_limit, 0);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Color of a fresh or cleared grid
    pub default_color: ColorKey,
    /// Selected color at session start
    pub initial_color: ColorKey,
    /// Active tool at session start
    pub initial_tool: Tool,
    /// Maximum undo records kept (0 => unbounded)
    pub history_limit: usize,
    /// Filter used to scale images down to the grid
    pub resample: Resample,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_color: ColorKey::BLACK,
            initial_color: ColorKey::BLACK,
            initial_tool: Tool::Pencil,
            history_limit: 0,
            resample: Resample::Triangle,
        }
    }
}

impl EditorConfig {
    /// Both configured colors must be palette entries.
    pub fn validate(&self) -> Result<()> {
        for (name, key) in [
            ("default_color", self.default_color),
            ("initial_color", self.initial_color),
        ] {
            if !key.is_valid() {
                return Err(Error::ConfigError(format!(
                    "{} {} is not a palette color",
                    name, key
                )));
            }
        }
        Ok(())
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: EditorConfig =
            serde_json::from_str(text).map_err(|e| Error::ConfigError(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Create a session with an in-memory clipboard
pub fn new_session(config: EditorConfig) -> Result<EditorSession> {
    EditorSession::new(config)
}
