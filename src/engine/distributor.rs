use log::{debug, trace, warn};

use crate::domain::pot::{Pot, PotDistribution};
use crate::domain::ranking::HandRanking;
use crate::domain::{PlayerIndex, RunIndex};
use crate::engine::errors::SettlementError;
use crate::engine::split::split_evenly;

/// Поиск победителей банка в одном ране.
///
/// Идём по ярусам от сильнейшего. Первый ярус, где есть хоть один
/// претендент на банк, забирает долю рана целиком; ниже не смотрим.
#[derive(Clone, Debug, PartialEq, Eq)]
enum TierScan {
    Scanning,
    Resolved(Vec<PlayerIndex>),
}

impl TierScan {
    fn step(self, tier: &[PlayerIndex], pot: &Pot) -> Self {
        match self {
            TierScan::Scanning => {
                let mut winners: Vec<PlayerIndex> = tier
                    .iter()
                    .copied()
                    .filter(|&player| pot.is_eligible(player))
                    .collect();
                if winners.is_empty() {
                    TierScan::Scanning
                } else {
                    // Порядок сплита – строго по индексу игрока.
                    winners.sort_unstable();
                    TierScan::Resolved(winners)
                }
            }
            resolved => resolved,
        }
    }

    fn is_resolved(&self) -> bool {
        matches!(self, TierScan::Resolved(_))
    }
}

/// Победители банка в ране, `None` если претендентов нет ни в одном ярусе.
pub fn resolve_winners(ranking: &HandRanking, pot: &Pot) -> Option<Vec<PlayerIndex>> {
    let mut scan = TierScan::Scanning;
    for tier in ranking.tiers() {
        scan = scan.step(tier, pot);
        if scan.is_resolved() {
            break;
        }
    }

    match scan {
        TierScan::Resolved(winners) => Some(winners),
        TierScan::Scanning => None,
    }
}

/// Раздаёт один банк по ранам и игрокам.
///
/// Один и тот же набор ранжирований используется для всех банков раздачи.
#[derive(Clone, Copy, Debug)]
pub struct PotDistributor<'a> {
    rankings: &'a [HandRanking],
    num_players: usize,
}

impl<'a> PotDistributor<'a> {
    pub fn new(rankings: &'a [HandRanking], num_players: usize) -> Self {
        Self {
            rankings,
            num_players,
        }
    }

    pub fn num_runs(&self) -> usize {
        self.rankings.len()
    }

    /// Распределить банк `pot` (его номер `pot_index` нужен для ошибок и логов).
    ///
    /// Сначала сумма банка делится по ранам, потом доля каждого рана –
    /// между победителями этого рана. Лишние фишки получают ранние раны
    /// и игроки с меньшим индексом.
    pub fn distribute(
        &self,
        pot_index: usize,
        pot: &Pot,
    ) -> Result<PotDistribution, SettlementError> {
        if self.rankings.is_empty() {
            return Err(SettlementError::NoRuns);
        }

        let shares = split_evenly(pot.amount, self.num_runs());
        let mut distribution = PotDistribution::empty(pot.clone(), self.num_runs(), self.num_players);

        for (run, (ranking, share)) in self.rankings.iter().zip(shares).enumerate() {
            let winners = resolve_winners(ranking, pot)
                .ok_or_else(|| self.no_winner(pot_index, run))?;

            debug!(
                "банк {}, ран {}: {} фишек, победители {:?}",
                pot_index, run, share, winners
            );

            for (&winner, chips) in winners.iter().zip(split_evenly(share, winners.len())) {
                trace!("банк {pot_index}, ран {run}: игрок {winner} +{chips}");
                distribution.award(run, winner, chips)?;
            }

            distribution.run_shares.push(share);
            distribution.run_winners.push(winners);
        }

        Ok(distribution)
    }

    fn no_winner(&self, pot_index: usize, run: RunIndex) -> SettlementError {
        warn!(
            "банк {}, ран {}: ранжирование не содержит ни одного претендента",
            pot_index, run
        );
        SettlementError::NoEligibleWinner {
            pot: pot_index,
            run,
        }
    }
}

/// Короткий вариант: распределить один банк без явного `PotDistributor`.
pub fn distribute_pot(
    pot_index: usize,
    pot: &Pot,
    rankings: &[HandRanking],
    num_players: usize,
) -> Result<PotDistribution, SettlementError> {
    PotDistributor::new(rankings, num_players).distribute(pot_index, pot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chips::Chips;

    #[test]
    fn scan_stops_at_first_tier_with_eligible_player() {
        let pot = Pot::side(Chips(100), vec![1, 3]);
        let scan = TierScan::Scanning
            .step(&[0, 2], &pot)
            .step(&[3, 1], &pot)
            .step(&[], &pot);

        assert_eq!(scan, TierScan::Resolved(vec![1, 3]));
    }

    #[test]
    fn scan_stays_scanning_without_eligible_players() {
        let pot = Pot::side(Chips(100), vec![4]);
        let scan = TierScan::Scanning.step(&[0, 1], &pot).step(&[2], &pot);

        assert!(!scan.is_resolved());
    }
}
