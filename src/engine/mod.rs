//! Движок расчёта банка при all-in.
//!
//! Поток данных:
//!   - `allocator` – стеки → main pot, side pots и неоспоримые остатки;
//!   - `distributor` – банк + ранжирования по ранам → выплаты по игрокам;
//!   - `settlement` – сборка всего вместе в итоговые стеки.

pub mod allocator;
pub mod distributor;
pub mod errors;
pub mod history;
pub mod settlement;
pub mod split;
pub mod validation;

pub use allocator::{allocate_pots, PotAllocation};
pub use distributor::{distribute_pot, resolve_winners, PotDistributor};
pub use errors::{ErrorKind, SettlementError};
pub use history::{SettlementEvent, SettlementEventKind, SettlementHistory};
pub use settlement::{settle, Settlement, SettlementCalculator, SettlementInput};
pub use split::split_evenly;
