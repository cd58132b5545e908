//! Effect system: the data a card or intent does, and the resolver that
//! does it.
//!
//! - `EffectDescriptor`: one declarative step (kind, target, repeats, condition)
//! - `EffectResolver`: executes descriptor lists on a `CombatState`
//!
//! Cards and enemy intents share this path. Adding an effect kind means a
//! new `EffectKind` variant and one match arm in the resolver; nothing else
//! special-cases it.

mod effect;
mod resolver;

pub use effect::{Condition, EffectDescriptor, EffectKind, TargetSelector, UpgradeScope};
pub use resolver::{EffectResolver, ResolutionContext, ResolveResult, SkipReason};
