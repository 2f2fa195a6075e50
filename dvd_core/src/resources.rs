/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Why a text reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceKind {
    /// Hit one or more viewport edges
    Wall,
    /// Random reversal of free motion
    SelfBounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceEvent {
    pub entity: hecs::Entity,
    pub kind: BounceKind,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub bounces: Vec<BounceEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.bounces.clear();
    }

    pub fn push(&mut self, entity: hecs::Entity, kind: BounceKind) {
        self.bounces.push(BounceEvent { entity, kind });
    }

    pub fn wall_hits(&self) -> impl Iterator<Item = hecs::Entity> + '_ {
        self.of_kind(BounceKind::Wall)
    }

    pub fn self_bounces(&self) -> impl Iterator<Item = hecs::Entity> + '_ {
        self.of_kind(BounceKind::SelfBounce)
    }

    fn of_kind(&self, kind: BounceKind) -> impl Iterator<Item = hecs::Entity> + '_ {
        self.bounces
            .iter()
            .filter(move |event| event.kind == kind)
            .map(|event| event.entity)
    }
}
