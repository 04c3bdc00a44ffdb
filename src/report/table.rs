use std::fmt::Write;

use colored::Colorize;

use crate::domain::chips::Chips;
use crate::domain::pot::PotDistribution;
use crate::engine::Settlement;
use crate::report::ReportConfig;

const LABEL_WIDTH: usize = 11;

/// Отрисовать расчёт целиком: шапка со стеками, таблица на каждый банк,
/// остатки и итоговые стеки.
pub fn render_settlement(settlement: &Settlement, cfg: &ReportConfig) -> String {
    let mut out = String::new();
    let n = settlement.num_players();
    let runs = settlement.num_runs();

    let _ = writeln!(
        out,
        "Chips in pot before all-in: {}; running {} {}.",
        settlement.money_in_pot,
        runs,
        if runs == 1 { "time" } else { "times" }
    );
    out.push_str(&rule(n, cfg));
    out.push_str(&header_row(n, cfg, |_| true));
    out.push_str(&chips_row("| Stack", &settlement.initial_stacks, cfg, |_| true));
    out.push_str(&rule(n, cfg));

    for distribution in &settlement.pots {
        out.push('\n');
        out.push_str(&render_pot(distribution, n, cfg));
    }

    if !settlement.leftovers.is_empty() {
        out.push('\n');
        for leftover in &settlement.leftovers {
            let _ = writeln!(
                out,
                "Uncontested: player {} takes back {} chips",
                leftover.player, leftover.amount
            );
        }
    }

    out.push_str("\nFinal stacks:\n");
    for (player, stack) in settlement.final_stacks.iter().enumerate() {
        let _ = writeln!(out, "Player {}: {} chips", player, stack);
    }

    out
}

fn render_pot(distribution: &PotDistribution, n: usize, cfg: &ReportConfig) -> String {
    let pot = &distribution.pot;
    let eligible = |player: usize| pot.is_eligible(player);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} pot with {} chips, eligible to {:?}",
        if pot.is_side() { "Side" } else { "Main" },
        pot.amount,
        pot.eligible_players
    );
    out.push_str(&rule(n, cfg));
    out.push_str(&header_row(n, cfg, eligible));

    if cfg.show_runs {
        for (run, row) in distribution.per_run.iter().enumerate() {
            let label = format!("| Run {}", run + 1);
            out.push_str(&chips_row(&label, row, cfg, eligible));
        }
        out.push_str(&dim(&rule(n, cfg), cfg));
    }

    out.push_str(&chips_row("| Total", &distribution.total, cfg, eligible));
    out.push_str(&rule(n, cfg));
    out
}

fn header_row(n: usize, cfg: &ReportConfig, eligible: impl Fn(usize) -> bool) -> String {
    let cells = (0..n).map(|player| (format!("Player {player}"), eligible(player)));
    row("| Player ID", cells, cfg)
}

fn chips_row(
    label: &str,
    values: &[Chips],
    cfg: &ReportConfig,
    eligible: impl Fn(usize) -> bool,
) -> String {
    let cells = values
        .iter()
        .enumerate()
        .map(|(player, chips)| (chips.to_string(), eligible(player)));
    row(label, cells, cfg)
}

fn row(label: &str, cells: impl Iterator<Item = (String, bool)>, cfg: &ReportConfig) -> String {
    let mut line = format!("{:<width$} | ", label, width = LABEL_WIDTH);
    for (text, highlighted) in cells {
        let cell = format!("{:<width$}", text, width = cfg.column_width);
        if highlighted {
            line.push_str(&cell);
        } else {
            line.push_str(&dim(&cell, cfg));
        }
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

fn rule(n: usize, cfg: &ReportConfig) -> String {
    format!("{}\n", "-".repeat(LABEL_WIDTH + 2 + n * cfg.column_width))
}

fn dim(text: &str, cfg: &ReportConfig) -> String {
    if cfg.color {
        // rule() несёт свой '\n' – его не красим.
        match text.strip_suffix('\n') {
            Some(body) => format!("{}\n", body.bright_black()),
            None => text.bright_black().to_string(),
        }
    } else {
        text.to_string()
    }
}
