//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Grid steps gated by an accumulator clock, never by wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod bat;
pub mod chain;
pub mod clock;
pub mod collision;
pub mod input;
pub mod segment;
pub mod slime;
pub mod state;
pub mod tick;

pub use bat::Bat;
pub use chain::{SegmentChain, StepOutcome};
pub use clock::StepClock;
pub use collision::{Circle, Room, reflect_velocity};
pub use input::DirectionBuffer;
pub use segment::Segment;
pub use slime::Slime;
pub use state::{GameEvent, GameOverReason, GamePhase, GameState};
pub use tick::{TickInput, tick};
