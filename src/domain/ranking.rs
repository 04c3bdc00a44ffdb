use serde::{Deserialize, Serialize};

use crate::domain::{PlayerIndex, RunIndex};
use crate::engine::errors::SettlementError;

/// Итог одного рана: игроки, разложенные по ярусам силы руки.
///
/// `tiers[0]` – сильнейшая рука. В одном ярусе лежат игроки с равной рукой
/// (они делят между собой выигрыш). Внутри яруса игроки хранятся
/// по возрастанию индекса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRanking {
    tiers: Vec<Vec<PlayerIndex>>,
}

impl HandRanking {
    /// Собрать ранжирование из ярусов без проверки.
    ///
    /// Каждый ярус сортируется по индексу игрока. Полноту и непересекаемость
    /// проверяет `validate` (её зовёт `SettlementInput::new`).
    pub fn from_tiers(tiers: Vec<Vec<PlayerIndex>>) -> Self {
        let tiers = tiers
            .into_iter()
            .map(|mut tier| {
                tier.sort_unstable();
                tier
            })
            .collect();
        Self { tiers }
    }

    /// Собрать и сразу проверить, что это разбиение `[0, num_players)`.
    pub fn new(
        run: RunIndex,
        tiers: Vec<Vec<PlayerIndex>>,
        num_players: usize,
    ) -> Result<Self, SettlementError> {
        let ranking = Self::from_tiers(tiers);
        ranking.validate(run, num_players)?;
        Ok(ranking)
    }

    pub fn tiers(&self) -> &[Vec<PlayerIndex>] {
        &self.tiers
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Номер яруса, в котором стоит игрок.
    pub fn tier_of(&self, player: PlayerIndex) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.contains(&player))
    }

    /// Проверка: ярусы непустые, каждый игрок из `[0, num_players)`
    /// встречается ровно один раз.
    pub fn validate(&self, run: RunIndex, num_players: usize) -> Result<(), SettlementError> {
        let mut seen = vec![false; num_players];

        for (tier_idx, tier) in self.tiers.iter().enumerate() {
            if tier.is_empty() {
                return Err(SettlementError::EmptyTier { run, tier: tier_idx });
            }

            for &player in tier {
                if player >= num_players {
                    return Err(SettlementError::PlayerOutOfRange {
                        run,
                        player,
                        num_players,
                    });
                }
                if seen[player] {
                    return Err(SettlementError::DuplicatePlayer { run, player });
                }
                seen[player] = true;
            }
        }

        match seen.iter().position(|ranked| !ranked) {
            Some(player) => Err(SettlementError::PlayerNotRanked { run, player }),
            None => Ok(()),
        }
    }
}
