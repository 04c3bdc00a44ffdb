//! Доменная модель расчёта банка: фишки, банки, ранжирование рук по ранам.

pub mod chips;
pub mod pot;
pub mod ranking;

/// Индекс игрока в раздаче: `0..N`.
pub type PlayerIndex = usize;

/// Номер рана борда: `0..R`.
pub type RunIndex = usize;

pub use chips::*;
pub use pot::*;
pub use ranking::*;
