use log::info;

use crate::api::dto::{SettleRequest, SettleResponse};
use crate::api::errors::ApiError;
use crate::engine::SettlementCalculator;
use crate::infra::mapping::{input_from_request, response_from_settlement};

/// Рассчитать раздачу по запросу.
pub fn settle_request(request: &SettleRequest) -> Result<SettleResponse, ApiError> {
    let input = input_from_request(request)?;
    let settlement = SettlementCalculator::new().settle(&input)?;

    info!(
        "раздача рассчитана: {} игроков, {} ранов, {} банков",
        input.num_players(),
        input.num_runs(),
        settlement.pots.len()
    );

    Ok(response_from_settlement(&settlement))
}

/// То же самое, но запрос и ответ в JSON.
pub fn settle_json(json: &str) -> Result<String, ApiError> {
    let request: SettleRequest = serde_json::from_str(json)?;
    let response = settle_request(&request)?;
    Ok(serde_json::to_string_pretty(&response)?)
}
