//! Identifier counters scoped to a single generation run.
//!
//! Both counters are plain values owned by whoever builds a tree. Two runs
//! that issue ids in the same order produce the same ids.

use std::fmt;

/// Base value for component identifiers. The first issued id is `BASE + 1`.
pub const COMPONENT_ID_BASE: u32 = 1000;

/// Identifier serialized as the `Uuid` property of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u32);

impl ComponentId {
    /// Identifier reserved for the screen (`Form`) itself.
    pub const SCREEN: Self = Self(0);

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic component id counter.
#[derive(Debug, Clone)]
pub struct ComponentIds {
    last: u32,
}

impl ComponentIds {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(COMPONENT_ID_BASE)
    }

    /// Counter whose first issued id is `base + 1`.
    #[must_use]
    pub fn starting_at(base: u32) -> Self {
        Self { last: base }
    }

    pub fn next_id(&mut self) -> ComponentId {
        self.last += 1;
        ComponentId(self.last)
    }

    /// The most recently issued value (the base if nothing was issued yet).
    #[must_use]
    pub fn last(&self) -> u32 {
        self.last
    }
}

impl Default for ComponentIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of a block, rendered as `b<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(u32);

impl BlockId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// Monotonic block id counter, starting at `b1`.
#[derive(Debug, Clone, Default)]
pub struct BlockIds {
    issued: u32,
}

impl BlockIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> BlockId {
        self.issued += 1;
        BlockId(self.issued)
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.issued
    }
}
