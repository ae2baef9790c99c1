//! Player markers and square contents.

use crate::ConfigError;
use crate::config::{MAX_PLAYERS, MIN_PLAYERS};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Symbols handed out when the caller supplies only a player count.
pub const DEFAULT_MARKERS: [char; MAX_PLAYERS] = ['X', 'O', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// The symbol identifying one player's squares.
///
/// The engine treats markers as opaque distinct values. The only
/// restriction is that a marker must be visible, so it can never be
/// confused with an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Marker(char);

impl Marker {
    /// Creates a marker from a visible character.
    pub fn new(symbol: char) -> Result<Self, ConfigError> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(ConfigError::InvalidMarker(symbol));
        }
        Ok(Self(symbol))
    }

    /// Returns the marker's character.
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Marker {
    type Error = ConfigError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::new(symbol)
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed here yet.
    #[default]
    Empty,
    /// Holds a player's marker.
    Occupied(Marker),
}

impl Square {
    /// The character drawn for this square: the marker, or a space.
    pub const fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(marker) => marker.symbol(),
        }
    }

    /// Returns the marker, if any.
    pub const fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// Returns true for [`Square::Empty`].
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// Ordered list of the markers in play, one per player slot.
///
/// Turn order follows the list and wraps after the last player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Marker>", into = "Vec<Marker>")]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    /// Builds a set from explicit symbols.
    ///
    /// Requires between `MIN_PLAYERS` and `MAX_PLAYERS` distinct, visible
    /// symbols.
    #[instrument(skip(symbols))]
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, ConfigError> {
        let markers = symbols
            .into_iter()
            .map(Marker::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(markers)
    }

    /// Takes the first `players` symbols of [`DEFAULT_MARKERS`].
    #[instrument]
    pub fn for_players(players: usize) -> Result<Self, ConfigError> {
        check_player_count(players)?;
        Self::new(DEFAULT_MARKERS.iter().copied().take(players))
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Always false: every way of building a set, deserialization
    /// included, requires at least `MIN_PLAYERS` markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Marker of the player in the given turn slot.
    pub fn get(&self, index: usize) -> Option<Marker> {
        self.markers.get(index).copied()
    }

    /// Slot that moves after `index`, wrapping to the first player.
    pub fn next_after(&self, index: usize) -> usize {
        (index + 1) % self.markers.len()
    }

    /// Iterates the markers in turn order.
    pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
        self.markers.iter().copied()
    }

    /// Markers as a slice.
    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }
}

impl TryFrom<Vec<Marker>> for MarkerSet {
    type Error = ConfigError;

    fn try_from(markers: Vec<Marker>) -> Result<Self, Self::Error> {
        for (index, marker) in markers.iter().enumerate() {
            if markers[..index].contains(marker) {
                return Err(ConfigError::DuplicateMarker(marker.symbol()));
            }
        }

        check_player_count(markers.len())?;
        debug!(players = markers.len(), "Marker set built");
        Ok(Self { markers })
    }
}

impl From<MarkerSet> for Vec<Marker> {
    fn from(set: MarkerSet) -> Self {
        set.markers
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS[..MIN_PLAYERS]
                .iter()
                .map(|&symbol| Marker(symbol))
                .collect(),
        }
    }
}

fn check_player_count(players: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCountOutOfRange {
            players,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}
