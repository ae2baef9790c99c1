//! Board dimensions, game configuration and validation.

use crate::board::{ArrayBoard, GameBoard, SparseBoard};
use crate::{ConfigError, MarkerSet, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest allowed row or column count.
pub const MIN_DIMENSION: usize = 3;
/// Largest allowed row count.
pub const MAX_ROWS: usize = 100;
/// Largest allowed column count.
pub const MAX_COLUMNS: usize = 100;
/// Shortest allowed winning run.
pub const MIN_WIN_LENGTH: usize = 3;
/// Longest allowed winning run.
pub const MAX_WIN_LENGTH: usize = 25;
/// Fewest players in a game.
pub const MIN_PLAYERS: usize = 2;
/// Most players in a game.
pub const MAX_PLAYERS: usize = 10;

/// Validated board size and run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct BoardDimensions {
    rows: usize,
    columns: usize,
    win_length: usize,
}

#[derive(Deserialize)]
struct RawDimensions {
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl TryFrom<RawDimensions> for BoardDimensions {
    type Error = ConfigError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.columns, raw.win_length)
    }
}

impl BoardDimensions {
    /// Validates and creates board dimensions.
    ///
    /// Requires `3 <= rows <= 100`, `3 <= columns <= 100`,
    /// `3 <= win_length <= 25`, and a win length that fits in both
    /// directions.
    #[instrument]
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Result<Self, ConfigError> {
        if !(MIN_DIMENSION..=MAX_ROWS).contains(&rows) {
            return Err(ConfigError::RowsOutOfRange {
                rows,
                min: MIN_DIMENSION,
                max: MAX_ROWS,
            });
        }
        if !(MIN_DIMENSION..=MAX_COLUMNS).contains(&columns) {
            return Err(ConfigError::ColumnsOutOfRange {
                columns,
                min: MIN_DIMENSION,
                max: MAX_COLUMNS,
            });
        }
        if !(MIN_WIN_LENGTH..=MAX_WIN_LENGTH).contains(&win_length) {
            return Err(ConfigError::WinLengthOutOfRange {
                win_length,
                min: MIN_WIN_LENGTH,
                max: MAX_WIN_LENGTH,
            });
        }
        if win_length > rows {
            return Err(ConfigError::WinLengthExceedsRows { win_length, rows });
        }
        if win_length > columns {
            return Err(ConfigError::WinLengthExceedsColumns {
                win_length,
                columns,
            });
        }

        Ok(Self {
            rows,
            columns,
            win_length,
        })
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Run length needed to win.
    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of squares.
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// True if `pos` lies in `[0, rows) x [0, columns)`.
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.column() < self.columns
    }

    /// The in-range neighbor one step from `pos`, or `None` at an edge.
    pub fn step(&self, pos: Position, row_step: isize, column_step: isize) -> Option<Position> {
        pos.offset(row_step, column_step)
            .filter(|next| self.contains(*next))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Position::new(row, column)))
    }

    /// Row-major index of an in-range position.
    pub(crate) const fn index_of(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row() * self.columns + pos.column())
        } else {
            None
        }
    }
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self {
            rows: MIN_DIMENSION,
            columns: MIN_DIMENSION,
            win_length: MIN_WIN_LENGTH,
        }
    }
}

/// Storage strategy for a board.
///
/// Both kinds answer every query identically. `Fast` trades memory for
/// constant-time lookups; `Memory` stores only occupied squares.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BoardKind {
    /// Dense grid, see [`ArrayBoard`].
    #[default]
    Fast,
    /// Per-marker placement lists, see [`SparseBoard`].
    Memory,
}

impl BoardKind {
    /// Builds a fresh, empty board of this kind.
    #[instrument]
    pub fn build(self, dimensions: BoardDimensions) -> Box<dyn GameBoard> {
        match self {
            BoardKind::Fast => Box::new(ArrayBoard::new(dimensions)),
            BoardKind::Memory => Box::new(SparseBoard::new(dimensions)),
        }
    }
}

/// Everything needed to start a game, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, derive_new::new)]
pub struct GameConfig {
    /// Board size and win length.
    dimensions: BoardDimensions,
    /// Player markers in turn order.
    markers: MarkerSet,
    /// Storage strategy.
    board_kind: BoardKind,
}

/// Unvalidated game settings, as read from a file or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Run length needed to win.
    pub win_length: usize,
    /// Number of players. Ignored when `markers` is set.
    pub players: usize,
    /// Explicit marker symbols, one character per player.
    pub markers: Option<String>,
    /// Storage strategy.
    pub board: BoardKind,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: MIN_DIMENSION,
            columns: MIN_DIMENSION,
            win_length: MIN_WIN_LENGTH,
            players: MIN_PLAYERS,
            markers: None,
            board: BoardKind::default(),
        }
    }
}

impl GameSettings {
    /// Checks every bound and produces a [`GameConfig`].
    #[instrument]
    pub fn validate(&self) -> Result<GameConfig, ConfigError> {
        let dimensions = BoardDimensions::new(self.rows, self.columns, self.win_length)?;
        let markers = match &self.markers {
            Some(symbols) => MarkerSet::new(symbols.chars())?,
            None => MarkerSet::for_players(self.players)?,
        };

        debug!(
            rows = dimensions.rows(),
            columns = dimensions.columns(),
            win_length = dimensions.win_length(),
            players = markers.len(),
            board = %self.board,
            "Settings validated"
        );
        Ok(GameConfig::new(dimensions, markers, self.board))
    }
}
