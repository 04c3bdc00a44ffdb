use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::pot::{Leftover, PotDistribution};
use crate::domain::ranking::HandRanking;
use crate::domain::PlayerIndex;
use crate::engine::allocator::allocate_pots;
use crate::engine::distributor::PotDistributor;
use crate::engine::errors::SettlementError;
use crate::engine::history::{SettlementEventKind, SettlementHistory};
use crate::engine::validation::{total_chips, validate_input};

/// Проверенный вход расчёта одной раздачи.
///
/// Собирается только через `new`, поэтому `Deserialize` тут нет:
/// сырые данные идут через `api::SettleRequest`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SettlementInput {
    stacks: Vec<Chips>,
    money_in_pot: Chips,
    rankings: Vec<HandRanking>,
}

impl SettlementInput {
    /// `rankings[run]` – итог рана `run`, число ранов = `rankings.len()`.
    pub fn new(
        stacks: Vec<Chips>,
        money_in_pot: Chips,
        rankings: Vec<HandRanking>,
    ) -> Result<Self, SettlementError> {
        validate_input(&stacks, money_in_pot, &rankings)?;
        Ok(Self {
            stacks,
            money_in_pot,
            rankings,
        })
    }

    pub fn stacks(&self) -> &[Chips] {
        &self.stacks
    }

    pub fn money_in_pot(&self) -> Chips {
        self.money_in_pot
    }

    pub fn rankings(&self) -> &[HandRanking] {
        &self.rankings
    }

    pub fn num_players(&self) -> usize {
        self.stacks.len()
    }

    pub fn num_runs(&self) -> usize {
        self.rankings.len()
    }
}

/// Итог расчёта раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub money_in_pot: Chips,
    pub initial_stacks: Vec<Chips>,
    /// Банки в порядке аллокатора: main pot первым.
    pub pots: Vec<PotDistribution>,
    pub leftovers: Vec<Leftover>,
    /// Итоговый стек каждого игрока.
    pub final_stacks: Vec<Chips>,
    /// Лог расчёта, если калькулятор создан `with_history()`.
    pub history: Option<SettlementHistory>,
}

impl Settlement {
    pub fn num_players(&self) -> usize {
        self.final_stacks.len()
    }

    pub fn num_runs(&self) -> usize {
        self.pots.first().map(|p| p.num_runs()).unwrap_or(0)
    }

    pub fn final_stack(&self, player: PlayerIndex) -> Chips {
        self.final_stacks.get(player).copied().unwrap_or(Chips::ZERO)
    }

    /// Сколько фишек игрок получил сверх вложенного (может быть 0).
    pub fn net_gain(&self, player: PlayerIndex) -> Chips {
        let initial = self.initial_stacks.get(player).copied().unwrap_or(Chips::ZERO);
        self.final_stack(player).saturating_sub(initial)
    }

    pub fn total(&self) -> Chips {
        self.final_stacks.iter().sum()
    }
}

/// Верхний уровень: аллокация банков + распределение каждого банка.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementCalculator {
    record_history: bool,
}

impl SettlementCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Калькулятор, который пишет `SettlementHistory`.
    pub fn with_history() -> Self {
        Self {
            record_history: true,
        }
    }

    pub fn settle(&self, input: &SettlementInput) -> Result<Settlement, SettlementError> {
        let num_players = input.num_players();
        let expected = total_chips(input.stacks(), input.money_in_pot())?;
        let mut history = self.record_history.then(SettlementHistory::new);

        let allocation = allocate_pots(input.stacks(), input.money_in_pot())?;
        if let Some(h) = history.as_mut() {
            for (idx, pot) in allocation.pots.iter().enumerate() {
                h.push(SettlementEventKind::PotAllocated {
                    pot: idx,
                    kind: pot.kind,
                    amount: pot.amount,
                    eligible_players: pot.eligible_players.clone(),
                });
            }
        }

        let mut final_stacks = vec![Chips::ZERO; num_players];

        for leftover in &allocation.leftovers {
            final_stacks[leftover.player] += leftover.amount;
            if let Some(h) = history.as_mut() {
                h.push(SettlementEventKind::LeftoverReturned {
                    player: leftover.player,
                    amount: leftover.amount,
                });
            }
        }

        let distributor = PotDistributor::new(input.rankings(), num_players);
        let mut pots = Vec::with_capacity(allocation.pots.len());

        for (idx, pot) in allocation.pots.iter().enumerate() {
            let distribution = distributor.distribute(idx, pot)?;

            for (stack, won) in final_stacks.iter_mut().zip(&distribution.total) {
                *stack += *won;
            }
            if let Some(h) = history.as_mut() {
                record_distribution(h, idx, &distribution);
            }

            pots.push(distribution);
        }

        let actual: Chips = final_stacks.iter().sum();
        if actual != expected {
            warn!("фишки не сошлись: ожидалось {expected}, получилось {actual}");
            return Err(SettlementError::ChipsNotConserved { expected, actual });
        }

        if let Some(h) = history.as_mut() {
            h.push(SettlementEventKind::SettlementFinished { total: actual });
        }

        debug!(
            "расчёт завершён: {} банков, {} ранов, итоговые стеки {:?}",
            pots.len(),
            input.num_runs(),
            final_stacks
        );

        Ok(Settlement {
            money_in_pot: input.money_in_pot(),
            initial_stacks: input.stacks().to_vec(),
            pots,
            leftovers: allocation.leftovers,
            final_stacks,
            history,
        })
    }
}

fn record_distribution(history: &mut SettlementHistory, pot: usize, distribution: &PotDistribution) {
    let runs = distribution
        .run_shares
        .iter()
        .zip(&distribution.run_winners)
        .enumerate();

    for (run, (share, winners)) in runs {
        history.push(SettlementEventKind::RunShareAssigned {
            pot,
            run,
            share: *share,
            winners: winners.clone(),
        });
        for &player in winners {
            history.push(SettlementEventKind::ChipsAwarded {
                pot,
                run,
                player,
                amount: distribution.per_run[run][player],
            });
        }
    }
}

/// Рассчитать раздачу без лога.
pub fn settle(input: &SettlementInput) -> Result<Settlement, SettlementError> {
    SettlementCalculator::new().settle(input)
}
