//! Zodiac Reference Database
//!
//! Static sign records plus the pure operations derived from them:
//! compatibility scoring, cosmic weather and wealth archetypes.

pub mod archetype;
pub mod compatibility;
pub mod database;
pub mod weather;

pub use archetype::{DEFAULT_ARCHETYPE, WealthArchetype, wealth_archetype};
pub use compatibility::compatibility;
pub use database::{ZodiacSignRecord, lookup, record};
pub use weather::{CosmicWeather, Energy, cosmic_weather};
