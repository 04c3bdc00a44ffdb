// src/bin/sidepot_stress_test.rs

use clap::Parser;
use log::error;

use sidepot_engine::domain::Chips;
use sidepot_engine::engine::{Settlement, SettlementCalculator, SettlementInput};
use sidepot_engine::infra::{DeterministicRng, ScenarioConfig, ScenarioGenerator};

/// Гоняем много случайных раздач и проверяем инварианты расчёта.
#[derive(Parser, Debug)]
#[command(name = "sidepot_stress_test")]
struct Args {
    /// Сколько раздач посчитать.
    #[arg(long, default_value_t = 100_000)]
    hands: u64,

    /// Seed генератора (одинаковый seed – одинаковые раздачи).
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Максимум игроков в раздаче.
    #[arg(long, default_value_t = 9)]
    max_players: usize,

    /// Максимум ранов борда.
    #[arg(long, default_value_t = 3)]
    max_runs: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("sidepot_stress_test: стартуем, seed={} hands={}", args.seed, args.hands);

    let config = ScenarioConfig {
        max_players: args.max_players.max(2),
        max_runs: args.max_runs.max(1),
        ..ScenarioConfig::default()
    };
    let mut generator = ScenarioGenerator::new(DeterministicRng::from_u64(args.seed), config);
    let calculator = SettlementCalculator::new();

    // Статистика.
    let mut settled: u64 = 0;
    let mut failures: u64 = 0;
    let mut total_pots: u64 = 0;
    let mut max_pots: usize = 0;
    let mut chopped_runs: u64 = 0;
    let mut total_chips: u128 = 0;

    for hand in 0..args.hands {
        let input = match generator.next_input() {
            Ok(input) => input,
            Err(e) => {
                error!("hand={hand}: генератор выдал невалидную раздачу: {e}");
                failures += 1;
                continue;
            }
        };

        match calculator.settle(&input) {
            Ok(settlement) => {
                if let Err(msg) = check_invariants(&input, &settlement) {
                    eprintln!("[STRESS] hand={hand}: {msg}");
                    failures += 1;
                    continue;
                }

                settled += 1;
                total_pots += settlement.pots.len() as u64;
                max_pots = max_pots.max(settlement.pots.len());
                total_chips += u128::from(settlement.total().0);
                chopped_runs += settlement
                    .pots
                    .iter()
                    .flat_map(|p| p.run_winners.iter())
                    .filter(|w| w.len() > 1)
                    .count() as u64;
            }
            Err(e) => {
                eprintln!("[STRESS] hand={hand}: ОШИБКА расчёта: {e}");
                failures += 1;
            }
        }
    }

    println!();
    println!("=========== STRESS TEST SUMMARY ===========");
    println!("Рассчитано раздач: {}", settled);
    println!("Ошибок / нарушений: {}", failures);
    if settled > 0 {
        println!("Средне банков на раздачу: {:.2}", total_pots as f64 / settled as f64);
        println!("Максимум банков в раздаче: {}", max_pots);
        println!("Ранов со сплитом: {}", chopped_runs);
        println!("Фишек прошло через расчёт: {}", total_chips);
    }
    println!("===========================================");

    if failures > 0 {
        std::process::exit(1);
    }
}

/// Сохранение фишек и то, что никто не получил денег из чужого банка.
fn check_invariants(input: &SettlementInput, settlement: &Settlement) -> Result<(), String> {
    let expected: Chips = input.stacks().iter().sum::<Chips>() + input.money_in_pot();
    if settlement.total() != expected {
        return Err(format!(
            "фишки не сошлись: {} != {}",
            settlement.total(),
            expected
        ));
    }

    for (idx, d) in settlement.pots.iter().enumerate() {
        if d.awarded() != d.pot.amount {
            return Err(format!("банк {idx}: роздано {} из {}", d.awarded(), d.pot.amount));
        }
        for (player, won) in d.total.iter().enumerate() {
            if !won.is_zero() && !d.pot.is_eligible(player) {
                return Err(format!("банк {idx}: игрок {player} получил {won} без права"));
            }
        }
    }

    Ok(())
}
