//! Conversions from run configuration to allocation requests.
//!
//! Bridges `seat_core::SeatConfig` to the engine's `AllocationRequest`.

use seat_core::{SeatConfig, Strategy};

use crate::best_fit::BlockOrder;
use crate::placer::AllocationRequest;

/// Build the request described by `config`.
pub fn config_to_request(config: &SeatConfig) -> AllocationRequest {
    request_for_strategy(config, config.allocation.strategy)
}

/// Build a request for `strategy`, keeping the config's threshold and
/// block order. An unset threshold falls back to that strategy's preset.
pub fn request_for_strategy(config: &SeatConfig, strategy: Strategy) -> AllocationRequest {
    let mut req = AllocationRequest::new(strategy).with_min_chunk(config.min_chunk_for(strategy));
    if let Some(order) = &config.catalog.block_order {
        req = req.with_block_order(BlockOrder::new(order.clone()));
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> SeatConfig {
        toml::from_str(
            r#"
[allocation]
strategy = "best-fit"

[catalog]
path = "rooms.csv"
block_order = [["A1", "A2"], ["B1"]]
"#,
        )
        .unwrap()
    }

    #[test]
    fn converts_strategy_and_preset_threshold() {
        let req = config_to_request(&sample_config());
        assert_eq!(req.strategy, Strategy::BestFit);
        assert_eq!(req.min_chunk, 10);
    }

    #[test]
    fn carries_block_order() {
        let req = config_to_request(&sample_config());
        let order = req.block_order.unwrap();
        assert_eq!(order.0.len(), 2);
        assert_eq!(order.0[0], vec!["A1".to_string(), "A2".to_string()]);
    }

    #[test]
    fn per_strategy_request_uses_its_own_preset() {
        let config = sample_config();
        assert_eq!(request_for_strategy(&config, Strategy::Simple).min_chunk, 1);
        assert_eq!(request_for_strategy(&config, Strategy::Lookahead).min_chunk, 10);
    }

    #[test]
    fn explicit_threshold_applies_to_every_strategy() {
        let mut config = sample_config();
        config.allocation.min_chunk = Some(3);
        for strategy in Strategy::ALL {
            assert_eq!(request_for_strategy(&config, strategy).min_chunk, 3);
        }
    }
}
