//! Application state

use std::fmt;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Roster with lineup slots
    #[default]
    Roster,

    /// Key bindings
    Help,
}

/// Roster slot position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Dst,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Dst => "DST",
        };
        f.write_str(label)
    }
}

/// A rostered player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub position: Position,
    pub team: String,
    /// Whether the player is in the starting lineup
    pub starting: bool,
}

impl Player {
    pub fn new(name: &str, position: Position, team: &str, starting: bool) -> Self {
        Self {
            name: name.to_string(),
            position,
            team: team.to_string(),
            starting,
        }
    }
}

/// Roster shown when no league data has been loaded
pub fn sample_roster() -> Vec<Player> {
    vec![
        Player::new("Josh Allen", Position::Qb, "BUF", true),
        Player::new("Bijan Robinson", Position::Rb, "ATL", true),
        Player::new("Jahmyr Gibbs", Position::Rb, "DET", true),
        Player::new("Ja'Marr Chase", Position::Wr, "CIN", true),
        Player::new("Puka Nacua", Position::Wr, "LAR", true),
        Player::new("Sam LaPorta", Position::Te, "DET", true),
        Player::new("Jaylen Warren", Position::Rb, "PIT", false),
        Player::new("Jameson Williams", Position::Wr, "DET", false),
        Player::new("Brandon Aubrey", Position::K, "DAL", true),
        Player::new("Steelers", Position::Dst, "PIT", true),
    ]
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Rostered players
    pub roster: Vec<Player>,

    /// Roster selection index
    pub roster_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state with the sample roster
    pub fn new() -> Self {
        Self::with_roster(sample_roster())
    }

    pub fn with_roster(roster: Vec<Player>) -> Self {
        Self {
            current_screen: Screen::Roster,
            roster,
            roster_index: 0,
            status_message: None,
            error_message: None,
        }
    }

    /// Get currently selected player (if any)
    pub fn selected_player(&self) -> Option<&Player> {
        self.roster.get(self.roster_index)
    }

    pub fn select_previous(&mut self) {
        self.roster_index = self.roster_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.roster_index < self.roster.len().saturating_sub(1) {
            self.roster_index += 1;
        }
    }

    /// Remove a player by name, keeping the selection in range
    pub fn drop_player(&mut self, name: &str) -> bool {
        let before = self.roster.len();
        self.roster.retain(|p| p.name != name);
        self.roster_index = self.roster_index.min(self.roster.len().saturating_sub(1));
        self.roster.len() != before
    }

    /// Move every player to the bench
    pub fn reset_lineup(&mut self) {
        for player in &mut self.roster {
            player.starting = false;
        }
    }

    pub fn starters(&self) -> usize {
        self.roster.iter().filter(|p| p.starting).count()
    }

    /// Clear status messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::with_roster(vec![
            Player::new("A", Position::Qb, "AAA", true),
            Player::new("B", Position::Rb, "BBB", true),
        ]);

        state.select_previous();
        assert_eq!(state.roster_index, 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.roster_index, 1);
    }

    #[test]
    fn test_drop_last_player_clamps_selection() {
        let mut state = AppState::with_roster(vec![
            Player::new("A", Position::Qb, "AAA", true),
            Player::new("B", Position::Rb, "BBB", true),
        ]);
        state.roster_index = 1;

        assert!(state.drop_player("B"));
        assert_eq!(state.roster_index, 0);
        assert!(!state.drop_player("B"));
    }

    #[test]
    fn test_reset_lineup() {
        let mut state = AppState::new();
        assert!(state.starters() > 0);
        state.reset_lineup();
        assert_eq!(state.starters(), 0);
    }
}
