//! Тесты распределения одного банка по ранам и игрокам.
//!
//! Здесь мы проверяем:
//! - сплит между игроками одного яруса (лишняя фишка – меньшему индексу);
//! - деление банка по ранам (лишняя фишка – раннему рану);
//! - первый ярус с претендентом забирает всё, ниже не перетекает;
//! - игроки без права на банк ничего не получают;
//! - отсутствие претендентов в ранжировании – фатальная ошибка.

use sidepot_engine::domain::{Chips, HandRanking, PlayerIndex, Pot};
use sidepot_engine::engine::{
    distribute_pot, resolve_winners, ErrorKind, PotDistributor, SettlementError,
};

/// Утилита: ранжирование из литерала ярусов.
fn ranking(tiers: &[&[PlayerIndex]]) -> HandRanking {
    HandRanking::from_tiers(tiers.iter().map(|t| t.to_vec()).collect())
}

fn raw(values: &[Chips]) -> Vec<u64> {
    values.iter().map(|c| c.0).collect()
}

//
// ====================== СПЛИТЫ ======================
//

/// Три игрока в одном ярусе, банк 100, один ран → 34, 33, 33.
#[test]
fn three_way_chop_gives_odd_chip_to_lowest_index() {
    let pot = Pot::main(Chips(100), vec![0, 1, 2]);
    let rankings = vec![ranking(&[&[0, 1, 2]])];

    let d = distribute_pot(0, &pot, &rankings, 3).unwrap();

    assert_eq!(raw(&d.total), vec![34, 33, 33]);
    assert_eq!(d.run_winners, vec![vec![0, 1, 2]]);
}

/// Порядок игроков внутри яруса на входе не влияет на сплит.
#[test]
fn chop_order_does_not_depend_on_input_order() {
    let pot = Pot::main(Chips(100), vec![0, 1, 2]);

    let a = distribute_pot(0, &pot, &[ranking(&[&[2, 0, 1]])], 3).unwrap();
    let b = distribute_pot(0, &pot, &[ranking(&[&[1, 2, 0]])], 3).unwrap();

    assert_eq!(raw(&a.total), vec![34, 33, 33]);
    assert_eq!(a.total, b.total);
}

/// Одна фишка на двоих: она уходит игроку с меньшим индексом.
#[test]
fn single_chip_chop() {
    let pot = Pot::side(Chips(1), vec![3, 5]);
    let rankings = vec![ranking(&[&[5, 3], &[0, 1, 2, 4]])];

    let d = distribute_pot(1, &pot, &rankings, 6).unwrap();

    assert_eq!(d.entitlement(3), Chips(1));
    assert_eq!(d.entitlement(5), Chips::ZERO);
}

//
// ====================== НЕСКОЛЬКО РАНОВ ======================
//

/// Банк 10 на три рана → доли 4, 3, 3, каждая по своему ранжированию.
#[test]
fn pot_split_across_three_runs_front_loads_remainder() {
    let pot = Pot::main(Chips(10), vec![0, 1]);
    let rankings = vec![
        ranking(&[&[0], &[1]]),
        ranking(&[&[1], &[0]]),
        ranking(&[&[0], &[1]]),
    ];

    let d = distribute_pot(0, &pot, &rankings, 2).unwrap();

    assert_eq!(raw(&d.run_shares), vec![4, 3, 3]);
    assert_eq!(raw(&d.per_run[0]), vec![4, 0]);
    assert_eq!(raw(&d.per_run[1]), vec![0, 3]);
    assert_eq!(raw(&d.per_run[2]), vec![3, 0]);
    assert_eq!(raw(&d.total), vec![7, 3]);
    assert_eq!(d.awarded(), Chips(10));
}

/// Run it twice: один и тот же победитель в обоих ранах забирает всё.
#[test]
fn same_winner_in_every_run_scoops() {
    let pot = Pot::main(Chips(1001), vec![0, 1, 2]);
    let rankings = vec![ranking(&[&[2], &[0, 1]]), ranking(&[&[2], &[1], &[0]])];

    let d = PotDistributor::new(&rankings, 3).distribute(0, &pot).unwrap();

    assert_eq!(raw(&d.run_shares), vec![501, 500]);
    assert_eq!(raw(&d.total), vec![0, 0, 1001]);
}

//
// ====================== ПРАВО НА БАНК ======================
//

/// Лучшая рука у игрока без права на side pot: банк уходит следующему ярусу
/// с претендентом, а не перетекает дальше.
#[test]
fn best_eligible_tier_takes_whole_share() {
    let pot = Pot::side(Chips(300), vec![1, 2]);
    let rankings = vec![ranking(&[&[0], &[2], &[1]])];

    let d = distribute_pot(1, &pot, &rankings, 3).unwrap();

    assert_eq!(raw(&d.total), vec![0, 0, 300]);
    assert_eq!(d.entitlement(0), Chips::ZERO, "Игрок 0 не претендует на side pot");
    assert_eq!(d.entitlement(1), Chips::ZERO, "Нижний ярус ничего не получает");
}

/// В ярусе смешаны претенденты и нет: делят только претенденты.
#[test]
fn chop_only_between_eligible_members_of_tier() {
    let pot = Pot::side(Chips(90), vec![1, 2, 3]);
    let rankings = vec![ranking(&[&[0, 2, 3], &[1]])];

    let d = distribute_pot(1, &pot, &rankings, 4).unwrap();

    assert_eq!(raw(&d.total), vec![0, 0, 45, 45]);
    assert_eq!(d.run_winners, vec![vec![2, 3]]);
}

#[test]
fn resolve_winners_skips_tiers_without_eligible_players() {
    let pot = Pot::side(Chips(10), vec![3]);
    let r = ranking(&[&[0, 1], &[2], &[3]]);

    assert_eq!(resolve_winners(&r, &pot), Some(vec![3]));
}

//
// ====================== ОШИБКИ ======================
//

/// Ранжирование в обход проверки, где нет ни одного претендента на банк.
#[test]
fn missing_eligible_players_is_consistency_violation() {
    let pot = Pot::side(Chips(50), vec![1, 2]);
    let rankings = vec![ranking(&[&[0], &[1]]), ranking(&[&[0]])];

    let err = distribute_pot(3, &pot, &rankings, 3).unwrap_err();

    assert_eq!(err, SettlementError::NoEligibleWinner { pot: 3, run: 1 });
    assert_eq!(err.kind(), ErrorKind::ConsistencyViolation);
    assert!(err.is_consistency_violation());
}

#[test]
fn no_runs_is_rejected() {
    let pot = Pot::main(Chips(50), vec![0, 1]);
    let err = distribute_pot(0, &pot, &[], 2).unwrap_err();

    assert_eq!(err, SettlementError::NoRuns);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
