use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "First"),
            Player::Second => write!(f, "Second"),
        }
    }
}

/// How a disc reacts when it ends up inside a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscKind {
    /// Flips normally.
    Standard,
    /// Never changes owner once placed.
    Fortified,
    /// Flips and spreads the capture to its opponent-owned neighbours.
    Explosive,
}

impl DiscKind {
    pub const ALL: [DiscKind; 3] = [DiscKind::Standard, DiscKind::Fortified, DiscKind::Explosive];

    /// Whether ownership of a disc of this kind can change.
    pub fn flips(&self) -> bool {
        !matches!(self, DiscKind::Fortified)
    }

    /// Whether capturing a disc of this kind spreads to its neighbourhood.
    pub fn propagates(&self) -> bool {
        matches!(self, DiscKind::Explosive)
    }

    /// Limited kinds draw from a per-player inventory; Standard is unlimited.
    pub fn is_limited(&self) -> bool {
        !matches!(self, DiscKind::Standard)
    }

    pub fn name(&self) -> &str {
        match self {
            DiscKind::Standard => "standard",
            DiscKind::Fortified => "fortified",
            DiscKind::Explosive => "explosive",
        }
    }

    pub fn from_name(name: &str) -> Option<DiscKind> {
        match name.to_lowercase().as_str() {
            "standard" | "simple" => Some(DiscKind::Standard),
            "fortified" | "unflippable" => Some(DiscKind::Fortified),
            "explosive" | "bomb" => Some(DiscKind::Explosive),
            _ => None,
        }
    }
}

impl fmt::Display for DiscKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disc {
    kind: DiscKind,
    owner: Player,
}

impl Disc {
    pub fn new(kind: DiscKind, owner: Player) -> Self {
        Disc { kind, owner }
    }

    pub fn standard(owner: Player) -> Self {
        Self::new(DiscKind::Standard, owner)
    }

    pub fn fortified(owner: Player) -> Self {
        Self::new(DiscKind::Fortified, owner)
    }

    pub fn explosive(owner: Player) -> Self {
        Self::new(DiscKind::Explosive, owner)
    }

    pub fn kind(&self) -> DiscKind {
        self.kind
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Transfers ownership. A Fortified disc keeps its owner.
    pub fn set_owner(&mut self, owner: Player) {
        if self.kind.flips() {
            self.owner = owner;
        }
    }

    /// Single-character glyph: upper case for the first player, lower case for the second.
    pub fn glyph(&self) -> char {
        let c = match self.kind {
            DiscKind::Standard => 'O',
            DiscKind::Fortified => 'F',
            DiscKind::Explosive => 'B',
        };
        match self.owner {
            Player::First => c,
            Player::Second => c.to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_table() {
        assert!(DiscKind::Standard.flips());
        assert!(!DiscKind::Standard.propagates());
        assert!(!DiscKind::Standard.is_limited());

        assert!(!DiscKind::Fortified.flips());
        assert!(!DiscKind::Fortified.propagates());
        assert!(DiscKind::Fortified.is_limited());

        assert!(DiscKind::Explosive.flips());
        assert!(DiscKind::Explosive.propagates());
        assert!(DiscKind::Explosive.is_limited());
    }

    #[test]
    fn test_fortified_keeps_owner() {
        let mut disc = Disc::fortified(Player::First);
        disc.set_owner(Player::Second);
        assert_eq!(disc.owner(), Player::First);

        let mut disc = Disc::explosive(Player::First);
        disc.set_owner(Player::Second);
        assert_eq!(disc.owner(), Player::Second);
    }

    #[test]
    fn test_kind_names() {
        for kind in DiscKind::ALL {
            assert_eq!(DiscKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(DiscKind::from_name("Bomb"), Some(DiscKind::Explosive));
        assert_eq!(DiscKind::from_name("king"), None);
    }

    #[test]
    fn test_glyph_case_follows_owner() {
        assert_eq!(Disc::standard(Player::First).glyph(), 'O');
        assert_eq!(Disc::standard(Player::Second).glyph(), 'o');
        assert_eq!(Disc::explosive(Player::Second).glyph(), 'b');
    }
}
