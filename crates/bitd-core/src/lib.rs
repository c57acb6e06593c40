//! Core records for the Blades character engine.
//!
//! Characters, crews, and their clocks are long-lived records owned by a
//! host. This crate only models them; the mechanics crate reads them through
//! the [`ActorRegistry`] trait and never writes back.

/// Tagged actor records returned by a registry.
pub mod actor;
/// Character records: attributes, skills, clocks, and crew links.
pub mod character;
/// Bounded numeric trackers (stress, trauma, healing).
pub mod clock;
/// Crew records and their scoundrel traits.
pub mod crew;
/// Error types used throughout the crate.
pub mod error;
/// Actor identifiers.
pub mod id;
/// Forgiving numeric deserializers for loosely typed host data.
pub mod lenient;
/// Actor lookup by identifier.
pub mod registry;
/// JSON roster documents.
pub mod roster;

/// Re-export actor records.
pub use actor::Actor;
/// Re-export character types.
pub use character::{Attribute, Character, CrewLink, Skill};
/// Re-export the clock type.
pub use clock::Clock;
/// Re-export crew types.
pub use crew::{Crew, ScoundrelTraits};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the identifier type.
pub use id::ActorId;
/// Re-export registry types.
pub use registry::{ActorRegistry, InMemoryRegistry};
/// Re-export the roster document.
pub use roster::Roster;
