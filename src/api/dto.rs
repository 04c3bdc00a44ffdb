use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::pot::PotKind;
use crate::domain::PlayerIndex;

/// Запрос на расчёт раздачи (то, что приходит от клиента / из файла).
///
/// Числа знаковые специально: отрицательный стек или индекс должен
/// вернуться ошибкой, а не упасть на парсинге.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettleRequest {
    /// Фишки в банке до all-in (на них претендуют все).
    #[serde(default)]
    pub money_in_pot: i64,
    /// stacks[player] – сколько игрок выставил в all-in.
    pub stacks: Vec<i64>,
    /// runs[run][tier] – игроки яруса, от сильнейшей руки к слабейшей.
    pub runs: Vec<Vec<Vec<i64>>>,
}

/// DTO одного банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotDto {
    pub index: usize,
    pub kind: PotKind,
    pub amount: Chips,
    pub eligible_players: Vec<PlayerIndex>,
    pub run_shares: Vec<Chips>,
    pub run_winners: Vec<Vec<PlayerIndex>>,
    /// per_run[run][player]
    pub per_run: Vec<Vec<Chips>>,
    pub total: Vec<Chips>,
}

/// Неоспоримый остаток.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeftoverDto {
    pub player: PlayerIndex,
    pub amount: Chips,
}

/// Ответ на расчёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettleResponse {
    pub money_in_pot: Chips,
    pub initial_stacks: Vec<Chips>,
    pub num_runs: usize,
    pub pots: Vec<PotDto>,
    pub leftovers: Vec<LeftoverDto>,
    pub final_stacks: Vec<Chips>,
}
