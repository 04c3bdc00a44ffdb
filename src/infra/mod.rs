//! Инфраструктура вокруг движка:
//! - маппинги между API и domain;
//! - RNG и генератор случайных раздач для стресс-тестов;
//! - готовые раздачи-фикстуры.

pub mod fixtures;
pub mod mapping;
pub mod rng;
pub mod scenario;

pub use fixtures::*;
pub use mapping::*;
pub use rng::*;
pub use scenario::{ScenarioConfig, ScenarioGenerator};
