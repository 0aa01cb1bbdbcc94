use crate::disc::{DiscKind, Player};
use serde::{Deserialize, Serialize};

/// Remaining uses of each limited disc kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub explosive: u32,
    pub fortified: u32,
}

impl Inventory {
    pub fn new(explosive: u32, fortified: u32) -> Self {
        Inventory {
            explosive,
            fortified,
        }
    }

    /// Remaining count for `kind`; `None` for the unlimited Standard kind.
    pub fn remaining(&self, kind: DiscKind) -> Option<u32> {
        match kind {
            DiscKind::Standard => None,
            DiscKind::Fortified => Some(self.fortified),
            DiscKind::Explosive => Some(self.explosive),
        }
    }

    pub fn has(&self, kind: DiscKind) -> bool {
        self.remaining(kind).is_none_or(|n| n > 0)
    }

    /// Spends one `kind`. Returns false (unchanged) when none are left.
    pub(crate) fn take(&mut self, kind: DiscKind) -> bool {
        let slot = match kind {
            DiscKind::Standard => return true,
            DiscKind::Fortified => &mut self.fortified,
            DiscKind::Explosive => &mut self.explosive,
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub(crate) fn give_back(&mut self, kind: DiscKind) {
        match kind {
            DiscKind::Standard => {}
            DiscKind::Fortified => self.fortified += 1,
            DiscKind::Explosive => self.explosive += 1,
        }
    }
}

/// A seat at the table: identity, inventory and cumulative wins.
///
/// Wins survive `GameState::reset`; the inventory is refilled from the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    player: Player,
    inventory: Inventory,
    wins: u32,
}

impl PlayerState {
    pub fn new(player: Player, inventory: Inventory) -> Self {
        PlayerState {
            player,
            inventory,
            wins: 0,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn is_first(&self) -> bool {
        self.player == Player::First
    }

    pub fn inventory(&self) -> Inventory {
        self.inventory
    }

    pub fn remaining_fortified(&self) -> u32 {
        self.inventory.fortified
    }

    pub fn remaining_explosive(&self) -> u32 {
        self.inventory.explosive
    }

    /// Kinds this player may place right now. Standard is always present.
    pub fn available_kinds(&self) -> Vec<DiscKind> {
        DiscKind::ALL
            .into_iter()
            .filter(|&k| self.inventory.has(k))
            .collect()
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Takes back a win credited to a game that was then undone.
    pub(crate) fn revoke_win(&mut self) {
        self.wins = self.wins.saturating_sub(1);
    }

    pub(crate) fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub(crate) fn refill(&mut self, inventory: Inventory) {
        self.inventory = inventory;
    }
}
