//! Actor handles with generational indices
//!
//! A room hands out an [`ActorId`] for every actor it owns. Slots are
//! reused after an actor is removed, but the slot's generation is bumped
//! first, so an id kept past its actor's lifetime never matches the actor
//! that later takes the same slot.

/// Handle to an actor owned by a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId {
    index: u32,
    generation: u32,
}

impl ActorId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "actor#{}v{}", self.index, self.generation)
    }
}

/// Hands out and retires [`ActorId`]s.
#[derive(Debug, Default)]
pub struct ActorAllocator {
    generations: Vec<u32>,
    /// Retired slots, reused LIFO
    free: Vec<u32>,
    alive: usize,
}

impl ActorAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> ActorId {
        self.alive += 1;
        match self.free.pop() {
            Some(index) => ActorId::new(index, self.generations[index as usize]),
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                ActorId::new(index, 0)
            }
        }
    }

    /// Retires `id`. Returns false if it was already stale.
    pub fn free(&mut self, id: ActorId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.generations[id.index as usize] += 1;
        self.free.push(id.index);
        self.alive -= 1;
        true
    }

    pub fn is_alive(&self, id: ActorId) -> bool {
        self.generations
            .get(id.index as usize)
            .map_or(false, |gen| *gen == id.generation)
    }

    pub fn alive_count(&self) -> usize {
        self.alive
    }

    /// Retires every live id at once.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, gen) in self.generations.iter_mut().enumerate() {
            *gen += 1;
            self.free.push(index as u32);
        }
        self.alive = 0;
    }
}
