//! Core engine types: ids, RNG, characters, status state, parties.

pub mod character;
pub mod id;
pub mod party;
pub mod rng;
pub mod status;

pub use character::{Character, CharacterKind, HitOutcome, TurnStart};
pub use id::{CharacterId, Side};
pub use party::Party;
pub use rng::BattleRng;
pub use status::{DamageOverTime, StatBuff, StatusEvent, StatusState, TauntMark};
