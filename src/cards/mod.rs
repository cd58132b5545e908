//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: static card data, including the effect list
//! - `UpgradedVersion`: the single upgrade tier of a definition
//! - `CardInstance`: one copy of a card, upgraded or not
//! - `CardRegistry`: definition lookup and instance minting
//!
//! Card behavior is data. A card never carries code of its own; the
//! effect resolver interprets its `EffectDescriptor` list.

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardKind, Rarity, UpgradedVersion};
pub use instance::CardInstance;
pub use registry::CardRegistry;
