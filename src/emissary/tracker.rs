//! Emissary resource tracking.
//!
//! Each player owns two emissaries. Sending one on an errand occupies a shared
//! spot: three swap spots and two discard spots, pooled across both players.
//! A spot is freed only when the player who filled it recalls. The decree is a
//! single global slot; using it permanently costs the user one emissary.
//!
//! Spots are fixed-size arrays of `Option<PlayerId>`, so occupancy can never
//! exceed capacity.

use serde::{Deserialize, Serialize};

use crate::core::{ActionError, PlayerId, PlayerMap};

/// Emissaries each player starts with.
pub const INITIAL_EMISSARIES: u8 = 2;

/// Shared swap spots.
pub const SWAP_SPOTS: usize = 3;

/// Shared discard spots.
pub const DISCARD_SPOTS: usize = 2;

/// The two kinds of shared emissary spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotKind {
    Swap,
    Discard,
}

impl SpotKind {
    /// Number of spots of this kind.
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            SpotKind::Swap => SWAP_SPOTS,
            SpotKind::Discard => DISCARD_SPOTS,
        }
    }
}

impl std::fmt::Display for SpotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpotKind::Swap => f.write_str("swap"),
            SpotKind::Discard => f.write_str("discard"),
        }
    }
}

/// A specific spot, as returned by [`EmissaryTracker::try_acquire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotId {
    pub kind: SpotKind,
    pub index: usize,
}

/// Emissary counts, shared spot occupancy and the decree slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmissaryTracker {
    available: PlayerMap<u8>,
    max: PlayerMap<u8>,
    swap_spots: [Option<PlayerId>; SWAP_SPOTS],
    discard_spots: [Option<PlayerId>; DISCARD_SPOTS],
    decree: Option<PlayerId>,
}

impl Default for EmissaryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EmissaryTracker {
    /// Both players at full strength, all spots free, decree unused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: PlayerMap::with_value(INITIAL_EMISSARIES),
            max: PlayerMap::with_value(INITIAL_EMISSARIES),
            swap_spots: [None; SWAP_SPOTS],
            discard_spots: [None; DISCARD_SPOTS],
            decree: None,
        }
    }

    /// Emissaries a player can send right now.
    #[must_use]
    pub fn available(&self, player: PlayerId) -> u8 {
        self.available[player]
    }

    /// Emissaries a player gets back on recall (1 after using the decree).
    #[must_use]
    pub fn max_emissaries(&self, player: PlayerId) -> u8 {
        self.max[player]
    }

    #[must_use]
    pub fn decree_used(&self) -> bool {
        self.decree.is_some()
    }

    /// The player who used the decree, if anyone did.
    #[must_use]
    pub fn decree_user(&self) -> Option<PlayerId> {
        self.decree
    }

    /// Owners of each spot of a kind.
    #[must_use]
    pub fn spots(&self, kind: SpotKind) -> &[Option<PlayerId>] {
        match kind {
            SpotKind::Swap => &self.swap_spots,
            SpotKind::Discard => &self.discard_spots,
        }
    }

    fn spots_mut(&mut self, kind: SpotKind) -> &mut [Option<PlayerId>] {
        match kind {
            SpotKind::Swap => &mut self.swap_spots,
            SpotKind::Discard => &mut self.discard_spots,
        }
    }

    /// Occupied spots of a kind.
    #[must_use]
    pub fn occupied(&self, kind: SpotKind) -> usize {
        self.spots(kind).iter().filter(|spot| spot.is_some()).count()
    }

    #[must_use]
    pub fn has_free_spot(&self, kind: SpotKind) -> bool {
        self.occupied(kind) < kind.capacity()
    }

    /// Spots of a kind currently held by `player`.
    #[must_use]
    pub fn held_by(&self, kind: SpotKind, player: PlayerId) -> usize {
        self.spots(kind)
            .iter()
            .filter(|&&spot| spot == Some(player))
            .count()
    }

    /// Check that `player` could send an emissary to a `kind` spot.
    pub fn check_acquire(&self, kind: SpotKind, player: PlayerId) -> Result<(), ActionError> {
        if self.available[player] == 0 {
            return Err(ActionError::NoEmissaryAvailable);
        }
        if !self.has_free_spot(kind) {
            return Err(ActionError::SpotsFull(kind));
        }
        Ok(())
    }

    /// Whether `player` can send an emissary to any spot at all.
    #[must_use]
    pub fn can_send_any(&self, player: PlayerId) -> bool {
        self.check_acquire(SpotKind::Swap, player).is_ok()
            || self.check_acquire(SpotKind::Discard, player).is_ok()
    }

    /// Send one of `player`'s emissaries to the first free spot of `kind`.
    pub fn try_acquire(&mut self, kind: SpotKind, player: PlayerId) -> Result<SpotId, ActionError> {
        self.check_acquire(kind, player)?;

        let index = self
            .spots(kind)
            .iter()
            .position(Option::is_none)
            .ok_or(ActionError::SpotsFull(kind))?;
        self.spots_mut(kind)[index] = Some(player);
        self.available[player] -= 1;
        Ok(SpotId { kind, index })
    }

    /// Check that `player` may recall.
    pub fn check_recall(&self, player: PlayerId) -> Result<(), ActionError> {
        if self.available[player] >= self.max[player] {
            return Err(ActionError::RecallNotAllowed);
        }
        Ok(())
    }

    /// Free every spot owned by `player`. Returns how many were freed.
    pub fn release_all(&mut self, player: PlayerId) -> usize {
        let mut freed = 0;
        for kind in [SpotKind::Swap, SpotKind::Discard] {
            for spot in self.spots_mut(kind) {
                if *spot == Some(player) {
                    *spot = None;
                    freed += 1;
                }
            }
        }
        freed
    }

    /// Bring `player`'s emissaries home and free their spots.
    pub fn recall(&mut self, player: PlayerId) -> Result<usize, ActionError> {
        self.check_recall(player)?;
        let freed = self.release_all(player);
        self.available[player] = self.max[player];
        Ok(freed)
    }

    /// Check that `player` may use the decree.
    pub fn check_decree(&self, player: PlayerId) -> Result<(), ActionError> {
        if self.decree_used() {
            return Err(ActionError::DecreeAlreadyUsed);
        }
        if self.available[player] == 0 {
            return Err(ActionError::NoEmissaryAvailable);
        }
        Ok(())
    }

    /// Spend one of `player`'s emissaries on the decree for good.
    ///
    /// Claims the global decree slot and lowers the player's maximum to 1.
    pub fn lock_one_permanently(&mut self, player: PlayerId) -> Result<(), ActionError> {
        self.check_decree(player)?;
        self.decree = Some(player);
        self.available[player] -= 1;
        self.max[player] = INITIAL_EMISSARIES - 1;
        self.available[player] = self.available[player].min(self.max[player]);
        Ok(())
    }
}
