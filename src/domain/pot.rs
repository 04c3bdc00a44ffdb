use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PlayerIndex, RunIndex};
use crate::engine::errors::SettlementError;

/// Главный банк или сайд-пот.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PotKind {
    Main,
    Side,
}

/// Банк: сколько фишек разыгрывается и кто может их выиграть.
///
/// Создаётся аллокатором и дальше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub amount: Chips,
    /// Претенденты на банк, по возрастанию индекса.
    pub eligible_players: Vec<PlayerIndex>,
    pub kind: PotKind,
}

impl Pot {
    pub fn main(amount: Chips, eligible_players: Vec<PlayerIndex>) -> Self {
        Self::with_kind(amount, eligible_players, PotKind::Main)
    }

    pub fn side(amount: Chips, eligible_players: Vec<PlayerIndex>) -> Self {
        Self::with_kind(amount, eligible_players, PotKind::Side)
    }

    fn with_kind(amount: Chips, mut eligible_players: Vec<PlayerIndex>, kind: PotKind) -> Self {
        eligible_players.sort_unstable();
        eligible_players.dedup();
        Self {
            amount,
            eligible_players,
            kind,
        }
    }

    pub fn is_side(&self) -> bool {
        self.kind == PotKind::Side
    }

    pub fn is_eligible(&self, player: PlayerIndex) -> bool {
        self.eligible_players.binary_search(&player).is_ok()
    }
}

/// Фишки самого глубокого стека, которые никто не может оспорить.
/// Возвращаются игроку напрямую, мимо банков.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Leftover {
    pub player: PlayerIndex,
    pub amount: Chips,
}

/// Как конкретный банк разошёлся по ранам и игрокам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotDistribution {
    pub pot: Pot,
    /// Доля банка на каждый ран.
    pub run_shares: Vec<Chips>,
    /// Победители каждого рана (лучший ярус среди претендентов).
    pub run_winners: Vec<Vec<PlayerIndex>>,
    /// per_run[run][player] – сколько игрок получил из этого банка в этом ране.
    pub per_run: Vec<Vec<Chips>>,
    /// total[player] – сумма per_run по всем ранам.
    pub total: Vec<Chips>,
}

impl PotDistribution {
    pub(crate) fn empty(pot: Pot, num_runs: usize, num_players: usize) -> Self {
        Self {
            pot,
            run_shares: Vec::with_capacity(num_runs),
            run_winners: Vec::with_capacity(num_runs),
            per_run: vec![vec![Chips::ZERO; num_players]; num_runs],
            total: vec![Chips::ZERO; num_players],
        }
    }

    pub(crate) fn award(
        &mut self,
        run: RunIndex,
        player: PlayerIndex,
        chips: Chips,
    ) -> Result<(), SettlementError> {
        let num_players = self.total.len();
        let cell = self
            .per_run
            .get_mut(run)
            .and_then(|row| row.get_mut(player))
            .ok_or(SettlementError::PlayerOutOfRange {
                run,
                player,
                num_players,
            })?;
        *cell += chips;
        self.total[player] += chips;
        Ok(())
    }

    pub fn num_runs(&self) -> usize {
        self.per_run.len()
    }

    /// Сколько игрок получил из этого банка за все раны.
    pub fn entitlement(&self, player: PlayerIndex) -> Chips {
        self.total.get(player).copied().unwrap_or(Chips::ZERO)
    }

    /// Сколько всего роздано. После распределения равно `pot.amount`.
    pub fn awarded(&self) -> Chips {
        self.total.iter().sum()
    }
}
