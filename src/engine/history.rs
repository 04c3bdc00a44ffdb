use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::pot::PotKind;
use crate::domain::{PlayerIndex, RunIndex};

/// Тип события при расчёте банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettlementEventKind {
    /// Аллокатор создал банк.
    PotAllocated {
        pot: usize,
        kind: PotKind,
        amount: Chips,
        eligible_players: Vec<PlayerIndex>,
    },

    /// Неоспоримый остаток вернулся игроку.
    LeftoverReturned { player: PlayerIndex, amount: Chips },

    /// Доля банка на ран и кто её забирает.
    RunShareAssigned {
        pot: usize,
        run: RunIndex,
        share: Chips,
        winners: Vec<PlayerIndex>,
    },

    /// Выплата игроку из банка в конкретном ране.
    ChipsAwarded {
        pot: usize,
        run: RunIndex,
        player: PlayerIndex,
        amount: Chips,
    },

    /// Расчёт завершён, `total` фишек разошлось по стекам.
    SettlementFinished { total: Chips },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementEvent {
    pub index: u32,
    pub kind: SettlementEventKind,
}

/// Полный лог расчёта одной раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementHistory {
    pub events: Vec<SettlementEvent>,
}

impl SettlementHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: SettlementEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(SettlementEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &SettlementEventKind> {
        self.events.iter().map(|e| &e.kind)
    }
}
