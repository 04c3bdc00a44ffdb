use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::{PlayerIndex, RunIndex};

/// Класс ошибки расчёта.
///
/// Повторять расчёт с теми же данными бессмысленно в обоих случаях:
/// вычисление детерминированное.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Вход нарушает контракт – отклоняем до любых вычислений.
    InvalidInput,
    /// Внутреннее противоречие при расчёте. Расчёт прерывается.
    ConsistencyViolation,
}

/// Ошибки расчёта банка.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("Нужно минимум 2 игрока, получено {found}")]
    NotEnoughPlayers { found: usize },

    #[error("Нужен хотя бы один ран борда")]
    NoRuns,

    #[error("Отрицательный стек у игрока {player}: {value}")]
    NegativeStack { player: PlayerIndex, value: i64 },

    #[error("Отрицательная сумма в банке до all-in: {value}")]
    NegativePotMoney { value: i64 },

    #[error("Ран {run}: отрицательный индекс игрока {value}")]
    NegativePlayerIndex { run: RunIndex, value: i64 },

    #[error("Ран {run}: игрок {player} вне диапазона [0, {num_players})")]
    PlayerOutOfRange {
        run: RunIndex,
        player: PlayerIndex,
        num_players: usize,
    },

    #[error("Ран {run}: игрок {player} встречается в нескольких ярусах")]
    DuplicatePlayer { run: RunIndex, player: PlayerIndex },

    #[error("Ран {run}: ярус {tier} пустой")]
    EmptyTier { run: RunIndex, tier: usize },

    #[error("Ран {run}: игрок {player} не попал ни в один ярус")]
    PlayerNotRanked { run: RunIndex, player: PlayerIndex },

    #[error("Сумма фишек не помещается в u64")]
    ChipOverflow,

    #[error("Банк {pot}, ран {run}: ни в одном ярусе нет претендентов на банк")]
    NoEligibleWinner { pot: usize, run: RunIndex },

    #[error("Фишки не сошлись: ожидалось {expected}, роздано {actual}")]
    ChipsNotConserved { expected: Chips, actual: Chips },
}

impl SettlementError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SettlementError::NoEligibleWinner { .. } | SettlementError::ChipsNotConserved { .. } => {
                ErrorKind::ConsistencyViolation
            }
            _ => ErrorKind::InvalidInput,
        }
    }

    pub fn is_consistency_violation(&self) -> bool {
        self.kind() == ErrorKind::ConsistencyViolation
    }
}
