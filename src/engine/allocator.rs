use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::pot::{Leftover, Pot};
use crate::domain::PlayerIndex;
use crate::engine::errors::SettlementError;
use crate::engine::validation::total_chips;

/// Результат разбиения денег на банки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAllocation {
    /// Main pot первым, дальше side pots от мелких стеков к глубоким.
    pub pots: Vec<Pot>,
    /// Неоспоримые фишки, которые сразу возвращаются игроку.
    pub leftovers: Vec<Leftover>,
}

impl PotAllocation {
    /// Сколько фишек всего в банках и остатках.
    pub fn total(&self) -> Chips {
        let in_pots: Chips = self.pots.iter().map(|p| p.amount).sum();
        let returned: Chips = self.leftovers.iter().map(|l| l.amount).sum();
        in_pots + returned
    }
}

/// Разложить стеки на main pot и side pots.
///
/// Вход: stacks[player] = сколько фишек игрок выставил в all-in,
/// `money_in_pot` = фишки, лежавшие в банке до all-in (на них претендуют все).
///
/// Main pot всегда разыгрывается между всеми игроками: туда идёт
/// `money_in_pot + min(stacks) * N`. Дальше по слоям: пока осталось больше
/// одного игрока с фишками, каждый слой превращается в side pot. Последний
/// одиночка забирает свой остаток без розыгрыша.
pub fn allocate_pots(
    stacks: &[Chips],
    money_in_pot: Chips,
) -> Result<PotAllocation, SettlementError> {
    if stacks.len() < 2 {
        return Err(SettlementError::NotEnoughPlayers {
            found: stacks.len(),
        });
    }

    // Дальше все произведения слой * число игроков не больше этой суммы.
    total_chips(stacks, money_in_pot)?;

    // (player, stack) по возрастанию стека, при равенстве – по индексу.
    let mut entries: Vec<(PlayerIndex, Chips)> = stacks.iter().copied().enumerate().collect();
    entries.sort_by_key(|&(player, stack)| (stack, player));

    let shortest = entries[0].1;
    let main_amount = shortest
        .checked_mul(entries.len())
        .and_then(|layer| layer.checked_add(money_in_pot))
        .ok_or(SettlementError::ChipOverflow)?;

    let mut pots = vec![Pot::main(main_amount, (0..stacks.len()).collect())];
    debug!(
        "main pot: {} фишек, претенденты {:?}",
        main_amount, pots[0].eligible_players
    );

    let mut remaining = peel_layer(&entries, shortest);

    // Для side pot нужно минимум двое: одиночке не с кем разыгрывать.
    while remaining.len() > 1 {
        let level = remaining[0].1;
        let amount = level
            .checked_mul(remaining.len())
            .ok_or(SettlementError::ChipOverflow)?;
        let eligible: Vec<PlayerIndex> = remaining.iter().map(|&(player, _)| player).collect();

        let pot = Pot::side(amount, eligible);
        debug!(
            "side pot #{}: {} фишек, претенденты {:?}",
            pots.len(),
            amount,
            pot.eligible_players
        );
        pots.push(pot);

        remaining = peel_layer(&remaining, level);
    }

    let leftovers: Vec<Leftover> = remaining
        .into_iter()
        .map(|(player, amount)| Leftover { player, amount })
        .collect();

    for leftover in &leftovers {
        debug!(
            "игроку {} возвращается {} неоспоримых фишек",
            leftover.player, leftover.amount
        );
    }

    Ok(PotAllocation { pots, leftovers })
}

/// Снять слой `level` со всех стеков и выкинуть опустевших.
/// Порядок по возрастанию стека сохраняется: вычитаем одно и то же.
fn peel_layer(entries: &[(PlayerIndex, Chips)], level: Chips) -> Vec<(PlayerIndex, Chips)> {
    entries
        .iter()
        .filter_map(|&(player, stack)| {
            let rest = stack - level;
            if rest.is_zero() {
                None
            } else {
                Some((player, rest))
            }
        })
        .collect()
}
