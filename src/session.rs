//! Editor session: owns the grid, the history and the tool state, and
//! interprets [`Command`]s against them.

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::code::{self, ImportReport};
use crate::grid::{Cell, Grid};
use crate::history::History;
use crate::paint;
use crate::palette::ColorKey;
use crate::quantize;
use crate::text;
use crate::{EditorConfig, Result};
use serde::{Deserialize, Serialize};

/// Active painting tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Single cells, click or drag
    #[default]
    Pencil,
    /// Flood fill
    Bucket,
}

/// One discrete input event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Paint one cell with the selected color
    Paint { row: usize, col: usize },
    /// Flood fill from a cell with the selected color
    Fill { row: usize, col: usize },
    /// Click with the active tool
    Click { row: usize, col: usize },
    /// Pointer pressed on a cell (starts a pencil stroke)
    PointerDown { row: usize, col: usize },
    /// Pointer entered a cell (paints while a stroke is active)
    PointerOver { row: usize, col: usize },
    /// Pointer released anywhere
    PointerUp,
    Undo,
    Redo,
    SelectColor { color: ColorKey },
    SelectTool { tool: Tool },
    /// Quantize an uploaded image onto the grid
    LoadImage {
        mime: String,
        #[serde(with = "base64_bytes")]
        data: Vec<u8>,
    },
    RenderText { text: String },
    Import { code: String },
    Export,
}

/// Keyboard chord such as `Ctrl+Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub ctrl: bool,
    pub key: char,
}

impl Shortcut {
    /// Parse `"ctrl+z"`-style chords. Modifier names are case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let mut ctrl = false;
        let mut key = None;
        for part in s.split('+').map(str::trim) {
            if part.eq_ignore_ascii_case("ctrl") || part.eq_ignore_ascii_case("control") {
                ctrl = true;
            } else {
                let mut chars = part.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if key.is_none() => key = Some(c.to_ascii_lowercase()),
                    _ => return None,
                }
            }
        }
        key.map(|key| Shortcut { ctrl, key })
    }
}

impl Command {
    /// Ctrl+Z undoes, Ctrl+Y redoes; other chords map to nothing.
    pub fn from_shortcut(shortcut: Shortcut) -> Option<Command> {
        match (shortcut.ctrl, shortcut.key) {
            (true, 'z') => Some(Command::Undo),
            (true, 'y') => Some(Command::Redo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A blocking user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub(crate) fn success(title: &str, text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.to_string(),
            text: text.into(),
        }
    }

    pub(crate) fn error(title: &str, text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.to_string(),
            text: text.into(),
        }
    }
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing changed
    Unchanged,
    /// Grid or tool state changed; `cells` is the number of cells written
    Changed { cells: usize },
    /// Code was produced and copied to the clipboard
    Exported { code: String },
    /// Show a message to the user
    Notify(Notification),
}

/// All mutable editor state. Lives as long as the editor is open.
pub struct EditorSession<C: Clipboard = MemoryClipboard> {
    config: EditorConfig,
    grid: Grid,
    history: History,
    color: ColorKey,
    tool: Tool,
    stroke_active: bool,
    clipboard: C,
}

impl EditorSession<MemoryClipboard> {
    /// Session with an in-memory clipboard
    pub fn new(config: EditorConfig) -> Result<Self> {
        Self::with_clipboard(config, MemoryClipboard::new())
    }
}

impl<C: Clipboard> EditorSession<C> {
    pub fn with_clipboard(config: EditorConfig, clipboard: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.default_color),
            history: History::with_limit(config.history_limit),
            color: config.initial_color,
            tool: config.initial_tool,
            stroke_active: false,
            clipboard,
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selected_color(&self) -> ColorKey {
        self.color
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Interpret one command. Never fails: problems come back as
    /// [`Outcome::Notify`] and leave the session ready for more input.
    pub fn apply(&mut self, cmd: Command) -> Outcome {
        log::debug!("apply {:?}", CommandName(&cmd));
        match cmd {
            Command::Paint { row, col } => self.at(row, col, |s, cell| s.paint(cell)),
            Command::Fill { row, col } => self.at(row, col, |s, cell| s.fill(cell)),
            Command::Click { row, col } => self.at(row, col, |s, cell| match s.tool {
                Tool::Pencil => s.paint(cell),
                Tool::Bucket => s.fill(cell),
            }),
            Command::PointerDown { row, col } => self.at(row, col, |s, cell| {
                if s.tool == Tool::Pencil {
                    s.stroke_active = true;
                    s.paint(cell)
                } else {
                    Outcome::Unchanged
                }
            }),
            Command::PointerOver { row, col } => self.at(row, col, |s, cell| {
                if s.stroke_active && s.tool == Tool::Pencil {
                    s.paint(cell)
                } else {
                    Outcome::Unchanged
                }
            }),
            Command::PointerUp => {
                self.stroke_active = false;
                Outcome::Unchanged
            }
            Command::Undo => changed_if(self.history.undo(&mut self.grid).is_some(), 1),
            Command::Redo => changed_if(self.history.redo(&mut self.grid).is_some(), 1),
            Command::SelectColor { color } => {
                if color.is_valid() {
                    self.color = color;
                    Outcome::Changed { cells: 0 }
                } else {
                    log::warn!("rejected selection of unknown color {}", color);
                    Outcome::Notify(Notification::error(
                        "Error",
                        format!("{} is not a palette color.", color),
                    ))
                }
            }
            Command::SelectTool { tool } => {
                self.tool = tool;
                self.stroke_active = false;
                Outcome::Changed { cells: 0 }
            }
            Command::LoadImage { mime, data } => self.load_image(&mime, &data),
            Command::RenderText { text } => {
                text::render_text(
                    &mut self.grid,
                    &mut self.history,
                    &text,
                    self.color,
                    self.config.default_color,
                );
                Outcome::Changed {
                    cells: crate::grid::CELL_COUNT,
                }
            }
            Command::Import { code } => self.import(&code),
            Command::Export => self.export(),
        }
    }

    fn at(&mut self, row: usize, col: usize, f: impl FnOnce(&mut Self, Cell) -> Outcome) -> Outcome {
        match Cell::checked(row, col) {
            Ok(cell) => f(self, cell),
            Err(e) => {
                log::warn!("{}", e);
                Outcome::Unchanged
            }
        }
    }

    fn paint(&mut self, cell: Cell) -> Outcome {
        changed_if(
            paint::paint_cell(&mut self.grid, &mut self.history, cell, self.color),
            1,
        )
    }

    fn fill(&mut self, cell: Cell) -> Outcome {
        let n = paint::flood_fill(&mut self.grid, &mut self.history, cell, self.color);
        changed_if(n > 0, n)
    }

    fn load_image(&mut self, mime: &str, data: &[u8]) -> Outcome {
        let res = quantize::check_mime(mime).and_then(|_| {
            quantize::load_image(&mut self.grid, &mut self.history, data, self.config.resample)
        });
        match res {
            Ok(()) => Outcome::Changed {
                cells: crate::grid::CELL_COUNT,
            },
            Err(e) => {
                log::warn!("image load rejected: {}", e);
                Outcome::Notify(Notification::error(
                    "Error",
                    format!("Please select a valid image file. ({})", e),
                ))
            }
        }
    }

    fn import(&mut self, code: &str) -> Outcome {
        let ImportReport {
            applied,
            skipped,
            normalized,
            ..
        } = code::import_code(&mut self.grid, &mut self.history, code);
        log::info!("imported {} cells ({} skipped)", applied, skipped);

        match self.clipboard.write_text(&normalized) {
            Ok(()) => Outcome::Notify(Notification::success(
                "Code copied!",
                format!(
                    "Imported {} cells; the code was copied to the clipboard in .db format.",
                    applied
                ),
            )),
            Err(e) => {
                log::warn!("{}", e);
                Outcome::Notify(Notification::error(
                    "Error",
                    "There was a problem copying to the clipboard.",
                ))
            }
        }
    }

    fn export(&mut self) -> Outcome {
        let code = code::export_code(&self.grid);
        match self.clipboard.write_text(&code) {
            Ok(()) => Outcome::Exported { code },
            Err(e) => {
                log::warn!("{}", e);
                Outcome::Notify(Notification::error(
                    "Error",
                    "There was a problem copying to the clipboard.",
                ))
            }
        }
    }
}

fn changed_if(changed: bool, cells: usize) -> Outcome {
    if changed {
        Outcome::Changed { cells }
    } else {
        Outcome::Unchanged
    }
}

/// Debug helper that keeps image payloads out of the log
struct CommandName<'a>(&'a Command);

impl std::fmt::Debug for CommandName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Command::LoadImage { mime, data } => write!(f, "LoadImage({}, {} bytes)", mime, data.len()),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Serde adapter: `Vec<u8>` as a standard base64 string
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(d)?;
        STANDARD.decode(text.trim()).map_err(serde::de::Error::custom)
    }
}
