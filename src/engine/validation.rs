use crate::domain::chips::Chips;
use crate::domain::ranking::HandRanking;
use crate::engine::errors::SettlementError;

/// Проверка входа расчёта целиком, до любых вычислений.
///
/// - минимум 2 игрока;
/// - минимум 1 ран;
/// - каждое ранжирование – разбиение всех игроков на непустые ярусы;
/// - общая сумма фишек помещается в u64.
pub fn validate_input(
    stacks: &[Chips],
    money_in_pot: Chips,
    rankings: &[HandRanking],
) -> Result<(), SettlementError> {
    if stacks.len() < 2 {
        return Err(SettlementError::NotEnoughPlayers {
            found: stacks.len(),
        });
    }

    if rankings.is_empty() {
        return Err(SettlementError::NoRuns);
    }

    for (run, ranking) in rankings.iter().enumerate() {
        ranking.validate(run, stacks.len())?;
    }

    total_chips(stacks, money_in_pot)?;

    Ok(())
}

/// `money_in_pot + sum(stacks)` с проверкой переполнения.
pub fn total_chips(stacks: &[Chips], money_in_pot: Chips) -> Result<Chips, SettlementError> {
    stacks
        .iter()
        .try_fold(money_in_pot, |acc, &stack| acc.checked_add(stack))
        .ok_or(SettlementError::ChipOverflow)
}
