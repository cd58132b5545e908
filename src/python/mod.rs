//! Python bindings for the combat engine.
//!
//! Exposes a combat to reinforcement-learning drivers.
//!
//! # Quick Start
//!
//! ```python
//! import forge_combat as fc
//!
//! combat = fc.Combat(["imp-swarm", "lost-soul"], seed=42)
//! while combat.outcome() is None:
//!     action = combat.legal_actions()[0]
//!     combat.apply_action(action)
//! print(combat.outcome(), combat.player_hp)
//! ```

use pyo3::prelude::*;

mod py_combat;

pub use py_combat::*;

/// forge_combat: deterministic deck-building combat.
#[pymodule]
fn forge_combat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCombatAction>()?;
    m.add_class::<PyCombat>()?;
    Ok(())
}
