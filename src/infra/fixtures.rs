//! Готовые раздачи для CLI и тестов.

use crate::api::dto::SettleRequest;

/// Демонстрационная раздача: 4 игрока, 1000 в банке, три рана.
///
/// Итог: [458, 800, 467, 425].
pub fn demo_request() -> SettleRequest {
    SettleRequest {
        money_in_pot: 1000,
        stacks: vec![300, 150, 100, 600],
        runs: vec![
            vec![vec![1], vec![2], vec![0], vec![3]],
            vec![vec![2], vec![1, 3], vec![0]],
            vec![vec![0, 1], vec![2], vec![3]],
        ],
    }
}

/// Хедз-ап: короткий стек проигрывает, глубокий забирает main pot и остаток.
///
/// Итог: [0, 400].
pub fn heads_up_request() -> SettleRequest {
    SettleRequest {
        money_in_pot: 0,
        stacks: vec![100, 300],
        runs: vec![vec![vec![1], vec![0]]],
    }
}
