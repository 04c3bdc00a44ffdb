// src/bin/sidepot_cli.rs

use std::path::PathBuf;

use clap::Parser;

use sidepot_engine::api::dto::SettleRequest;
use sidepot_engine::api::errors::ApiError;
use sidepot_engine::engine::SettlementCalculator;
use sidepot_engine::infra::fixtures::demo_request;
use sidepot_engine::infra::mapping::{input_from_request, response_from_settlement};
use sidepot_engine::report::{render_settlement, ReportConfig};

/// Расчёт main / side pot'ов с несколькими ранами борда.
#[derive(Parser, Debug)]
#[command(name = "sidepot_cli", version)]
struct Args {
    /// JSON-файл с раздачей: {"money_in_pot", "stacks", "runs"}.
    #[arg(short, long, conflicts_with = "demo")]
    input: Option<PathBuf>,

    /// Посчитать встроенную демо-раздачу.
    #[arg(long)]
    demo: bool,

    /// Вывести ответ в JSON вместо таблиц.
    #[arg(long)]
    json: bool,

    /// Без ANSI-цветов.
    #[arg(long)]
    no_color: bool,

    /// Ширина колонки игрока в таблицах.
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Только итог по банку, без строк по ранам.
    #[arg(long)]
    totals_only: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("sidepot_cli: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ApiError> {
    let request = load_request(args)?;
    let input = input_from_request(&request)?;
    let settlement = SettlementCalculator::new().settle(&input)?;

    if args.json {
        let response = response_from_settlement(&settlement);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let cfg = ReportConfig {
        color: !args.no_color,
        column_width: args.width.max(1),
        show_runs: !args.totals_only,
    };
    print!("{}", render_settlement(&settlement, &cfg));
    Ok(())
}

fn load_request(args: &Args) -> Result<SettleRequest, ApiError> {
    match &args.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| ApiError::BadRequest(format!("{}: {}", path.display(), e)))?;
            Ok(serde_json::from_str(&raw)?)
        }
        None if args.demo => Ok(demo_request()),
        None => Err(ApiError::BadRequest(
            "нужен --input <file.json> или --demo".to_string(),
        )),
    }
}
