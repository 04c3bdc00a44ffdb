//! Расчёт банка при all-in: main pot, side pots, несколько ранов борда.
//!
//! Вход – стеки игроков в момент all-in, деньги, лежавшие в банке до этого,
//! и ранжирование рук по каждому рану. Выход – итоговый стек каждого игрока.
//! Силу рук здесь не считаем: она приходит готовой.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod report;

pub use domain::{Chips, HandRanking, Leftover, PlayerIndex, Pot, PotDistribution, PotKind};
pub use engine::{settle, Settlement, SettlementCalculator, SettlementError, SettlementInput};
