//! Bounded arena of cracks.
//!
//! Slots keep their [`AgentId`] for the lifetime of the pool: a crack that dies is replaced
//! in place, never removed, so iteration order is insertion order. Deaths are queued and
//! handled once per step by the [`Spawner`].

use {
  crate::{
    crack::Crack,
    grid::Grid,
    palette::Palette,
  },
  slotmap::{new_key_type, SlotMap},
  std::collections::VecDeque,
  rand::Rng,
};

new_key_type! {
  /// Stable handle of a pool slot.
  pub struct AgentId;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
  /// Waiting for a claimed cell to branch off from.
  Searching,
  Growing(Crack),
  /// Waiting in the respawn queue; never survives past the end of a step.
  Dead
}

#[derive(Debug, Clone)]
pub struct CrackPool {
  slots: SlotMap<AgentId, Slot>,
  limit: usize,
  pending: VecDeque<AgentId>
}

impl CrackPool {
  pub fn new(limit: usize) -> Self {
    Self {
      slots: SlotMap::with_capacity_and_key(limit),
      limit,
      pending: VecDeque::new()
    }
  }

  pub fn limit(&self) -> usize { self.limit }
  pub fn len(&self) -> usize { self.slots.len() }
  pub fn is_empty(&self) -> bool { self.slots.is_empty() }
  pub fn is_full(&self) -> bool { self.slots.len() >= self.limit }

  /// Ids in pool order.
  pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
    self.slots.keys()
  }

  pub fn get(&self, id: AgentId) -> Option<&Slot> {
    self.slots.get(id)
  }

  pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Slot> {
    self.slots.get_mut(id)
  }

  pub fn slots(&self) -> impl Iterator<Item = (AgentId, &Slot)> {
    self.slots.iter()
  }

  pub fn cracks(&self) -> impl Iterator<Item = (AgentId, &Crack)> {
    self.slots().filter_map(|(id, slot)| match slot {
      Slot::Growing(crack) => Some((id, crack)),
      _ => None
    })
  }

  /// Append a slot unless the pool is full.
  pub fn insert(&mut self, slot: Slot) -> Option<AgentId> {
    if self.is_full() { return None }
    Some(self.slots.insert(slot))
  }

  /// Mark a slot dead and queue it for respawn.
  pub fn kill(&mut self, id: AgentId) {
    if let Some(slot) = self.slots.get_mut(id) {
      *slot = Slot::Dead;
      self.pending.push_back(id);
    }
  }

  pub fn next_pending(&mut self) -> Option<AgentId> {
    self.pending.pop_front()
  }

  pub fn has_pending(&self) -> bool {
    !self.pending.is_empty()
  }
}

/// Outcome of asking the [`Spawner`] for a new crack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Spawn {
  Spawned(AgentId),
  /// The search budget ran out before a claimed cell was found.
  NotFound,
  AtCapacity
}

/// Places new cracks on the substrate.
#[derive(Debug, Clone)]
pub struct Spawner {
  pub palette: Palette,
  /// Random probes per start search.
  pub search_budget: usize
}

impl Spawner {
  pub fn new(palette: Palette, search_budget: usize) -> Self {
    Self { palette, search_budget }
  }

  pub fn find_start(&self, grid: &Grid, rng: &mut impl Rng) -> Option<Crack> {
    Crack::find_start(grid, &self.palette, rng, self.search_budget)
  }

  /// Grow the pool by one crack. Nothing is searched for when the pool is full,
  /// and nothing is inserted when the search fails.
  pub fn spawn(&self, pool: &mut CrackPool, grid: &Grid, rng: &mut impl Rng) -> Spawn {
    if pool.is_full() {
      return Spawn::AtCapacity;
    }
    match self.find_start(grid, rng) {
      Some(crack) => pool.insert(Slot::Growing(crack))
        .map_or(Spawn::AtCapacity, Spawn::Spawned),
      None => Spawn::NotFound
    }
  }

  /// Restart a slot in place. On failure the slot is left searching and retries later.
  pub fn respawn(&self, pool: &mut CrackPool, id: AgentId, grid: &Grid, rng: &mut impl Rng) -> bool {
    let slot = match pool.get_mut(id) {
      Some(slot) => slot,
      None => return false
    };
    match self.find_start(grid, rng) {
      Some(crack) => {
        *slot = Slot::Growing(crack);
        true
      },
      None => {
        *slot = Slot::Searching;
        false
      }
    }
  }
}
