use crate::api::dto::{LeftoverDto, PotDto, SettleRequest, SettleResponse};
use crate::domain::chips::Chips;
use crate::domain::ranking::HandRanking;
use crate::domain::{PlayerIndex, RunIndex};
use crate::engine::{Settlement, SettlementError, SettlementInput};

/// Маппинг запроса API -> проверенный вход движка.
///
/// Здесь отсекаются отрицательные значения, остальное проверяет
/// `SettlementInput::new`.
pub fn input_from_request(request: &SettleRequest) -> Result<SettlementInput, SettlementError> {
    let money_in_pot = u64::try_from(request.money_in_pot)
        .map(Chips)
        .map_err(|_| SettlementError::NegativePotMoney {
            value: request.money_in_pot,
        })?;

    let stacks = request
        .stacks
        .iter()
        .enumerate()
        .map(|(player, &value)| {
            u64::try_from(value)
                .map(Chips)
                .map_err(|_| SettlementError::NegativeStack { player, value })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rankings = request
        .runs
        .iter()
        .enumerate()
        .map(|(run, tiers)| ranking_from_api(run, tiers))
        .collect::<Result<Vec<_>, _>>()?;

    SettlementInput::new(stacks, money_in_pot, rankings)
}

fn ranking_from_api(run: RunIndex, tiers: &[Vec<i64>]) -> Result<HandRanking, SettlementError> {
    let tiers = tiers
        .iter()
        .map(|tier| {
            tier.iter()
                .map(|&value| {
                    PlayerIndex::try_from(value)
                        .map_err(|_| SettlementError::NegativePlayerIndex { run, value })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HandRanking::from_tiers(tiers))
}

/// Маппинг итога расчёта -> ответ API.
pub fn response_from_settlement(settlement: &Settlement) -> SettleResponse {
    let pots = settlement
        .pots
        .iter()
        .enumerate()
        .map(|(index, d)| PotDto {
            index,
            kind: d.pot.kind,
            amount: d.pot.amount,
            eligible_players: d.pot.eligible_players.clone(),
            run_shares: d.run_shares.clone(),
            run_winners: d.run_winners.clone(),
            per_run: d.per_run.clone(),
            total: d.total.clone(),
        })
        .collect();

    let leftovers = settlement
        .leftovers
        .iter()
        .map(|l| LeftoverDto {
            player: l.player,
            amount: l.amount,
        })
        .collect();

    SettleResponse {
        money_in_pot: settlement.money_in_pot,
        initial_stacks: settlement.initial_stacks.clone(),
        num_runs: settlement.num_runs(),
        pots,
        leftovers,
        final_stacks: settlement.final_stacks.clone(),
    }
}
