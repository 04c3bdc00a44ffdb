use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::ranking::HandRanking;
use crate::domain::PlayerIndex;
use crate::engine::{SettlementError, SettlementInput};
use crate::infra::rng::RandomSource;

/// Параметры генерации случайных раздач (stress / property тесты).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub min_players: usize,
    pub max_players: usize,
    pub max_stack: u64,
    pub max_money_in_pot: u64,
    pub max_runs: usize,
    /// Вероятность (в процентах), что следующий игрок попадёт в тот же ярус.
    pub tie_percent: u8,
    /// Вероятность (в процентах) нулевого стека.
    pub zero_stack_percent: u8,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 9,
            max_stack: 20_000,
            max_money_in_pot: 5_000,
            max_runs: 3,
            tie_percent: 20,
            zero_stack_percent: 5,
        }
    }
}

/// Генератор валидных случайных раздач.
#[derive(Clone, Debug)]
pub struct ScenarioGenerator<R: RandomSource> {
    rng: R,
    config: ScenarioConfig,
}

impl<R: RandomSource> ScenarioGenerator<R> {
    pub fn new(rng: R, config: ScenarioConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Следующая раздача. Ошибка возможна только при кривом конфиге
    /// (например, `min_players < 2` или `max_runs == 0`).
    pub fn next_input(&mut self) -> Result<SettlementInput, SettlementError> {
        let cfg = self.config.clone();
        let num_players = self.rng.range_inclusive(
            cfg.min_players as u64,
            cfg.max_players.max(cfg.min_players) as u64,
        ) as usize;
        let num_runs = self.rng.range_inclusive(1, cfg.max_runs.max(1) as u64) as usize;

        let stacks: Vec<Chips> = (0..num_players)
            .map(|_| {
                if self.rng.chance(cfg.zero_stack_percent) {
                    Chips::ZERO
                } else {
                    Chips(self.rng.range_inclusive(1, cfg.max_stack.max(1)))
                }
            })
            .collect();
        let money_in_pot = Chips(self.rng.range_inclusive(0, cfg.max_money_in_pot));

        let rankings = (0..num_runs)
            .map(|_| self.random_ranking(num_players))
            .collect();

        SettlementInput::new(stacks, money_in_pot, rankings)
    }

    /// Случайная перестановка игроков, порезанная на ярусы.
    fn random_ranking(&mut self, num_players: usize) -> HandRanking {
        let mut order: Vec<PlayerIndex> = (0..num_players).collect();
        self.rng.shuffle(&mut order);

        let mut tiers: Vec<Vec<PlayerIndex>> = Vec::new();
        for player in order {
            let joins_last = !tiers.is_empty() && self.rng.chance(self.config.tie_percent);
            if joins_last {
                let last = tiers.len() - 1;
                tiers[last].push(player);
            } else {
                tiers.push(vec![player]);
            }
        }

        HandRanking::from_tiers(tiers)
    }
}
