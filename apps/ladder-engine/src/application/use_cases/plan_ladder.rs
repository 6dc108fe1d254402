//! Plan Ladder Use Case

use std::sync::Arc;

use thiserror::Error;

use crate::application::dto::{LadderDefaultsDto, PlanLadderRequestDto, PlanLadderResponseDto};
use crate::application::ports::{PriceFeedError, PriceFeedPort, Quote};
use crate::config::DefaultsConfig;
use crate::domain::ladder::{Ladder, LadderError, LadderMode, LadderSummary, Scenario, generate, summarize};

/// Errors from planning a ladder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanLadderError {
    /// The scenario or a form field was rejected.
    #[error(transparent)]
    Ladder(#[from] LadderError),

    /// The anchor price lookup failed.
    #[error(transparent)]
    PriceFeed(#[from] PriceFeedError),

    /// Neither an anchor price nor a symbol to look one up was given.
    #[error("Either anchor_price or symbol is required")]
    MissingAnchor,
}

impl PlanLadderError {
    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ladder(LadderError::InvalidScenario { .. }) => "INVALID_SCENARIO",
            Self::Ladder(LadderError::InvalidInput { .. }) => "INVALID_INPUT",
            Self::Ladder(LadderError::EmptyLadder | LadderError::ZeroVolume) => "DEGENERATE_LADDER",
            Self::PriceFeed(PriceFeedError::SymbolNotFound { .. }) => "SYMBOL_NOT_FOUND",
            Self::PriceFeed(_) => "PRICE_FEED_UNAVAILABLE",
            Self::MissingAnchor => "MISSING_ANCHOR",
        }
    }
}

/// Generate and summarize the ladder for a validated scenario.
///
/// # Errors
///
/// Returns `LadderError` if the scenario is rejected.
pub fn plan(scenario: &Scenario) -> Result<(Ladder, LadderSummary), LadderError> {
    let ladder = generate(scenario).inspect_err(|e| {
        tracing::warn!(mode = %scenario.mode, error = %e, "Rejected ladder scenario");
    })?;
    let summary = summarize(&ladder)?;

    tracing::debug!(
        mode = %scenario.mode,
        levels = ladder.len(),
        average_price = %summary.volume_weighted_average_price,
        insertion_index = summary.insertion_index_or_sentinel(),
        "Planned ladder"
    );

    Ok((ladder, summary))
}

/// Use case for planning an order ladder.
pub struct PlanLadderUseCase<P>
where
    P: PriceFeedPort + ?Sized,
{
    price_feed: Arc<P>,
    defaults: DefaultsConfig,
}

impl<P> PlanLadderUseCase<P>
where
    P: PriceFeedPort + ?Sized,
{
    /// Create a new PlanLadderUseCase.
    pub fn new(price_feed: Arc<P>, defaults: DefaultsConfig) -> Self {
        Self {
            price_feed,
            defaults,
        }
    }

    /// Execute the use case.
    ///
    /// An explicit `anchor_price` wins over `symbol`; otherwise the anchor is
    /// the symbol's last traded price.
    pub async fn execute(
        &self,
        request: &PlanLadderRequestDto,
    ) -> Result<PlanLadderResponseDto, PlanLadderError> {
        let (anchor_price, quote) = match (request.anchor_price, request.symbol.as_deref()) {
            (Some(anchor), _) => (anchor, None),
            (None, Some(symbol)) => {
                let quote = self.latest_price(symbol).await?;
                (quote.price, Some(quote))
            }
            (None, None) => return Err(PlanLadderError::MissingAnchor),
        };

        let scenario = request.to_scenario(anchor_price)?;
        let (ladder, summary) = plan(&scenario)?;

        Ok(PlanLadderResponseDto::new(scenario, quote, &ladder, &summary))
    }

    /// Look up the latest price for a symbol.
    pub async fn latest_price(&self, symbol: &str) -> Result<Quote, PriceFeedError> {
        self.price_feed.last_price(symbol).await.inspect_err(|e| {
            tracing::warn!(symbol, error = %e, "Price lookup failed");
        })
    }

    /// Default form values for a mode.
    #[must_use]
    pub fn defaults(&self, mode: LadderMode) -> LadderDefaultsDto {
        LadderDefaultsDto::from(self.defaults.scenario(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::OrderCountInput;
    use crate::infrastructure::price_feed::MockPriceFeed;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn request(anchor_price: Option<Decimal>, symbol: Option<&str>) -> PlanLadderRequestDto {
        PlanLadderRequestDto {
            mode: LadderMode::Pyramid,
            anchor_price,
            symbol: symbol.map(str::to_string),
            total_size: dec!(1),
            order_count: OrderCountInput::Number(5),
            multiplier: dec!(0.5),
            snap_multiplier: false,
            boundary_price: dec!(90000),
        }
    }

    fn use_case() -> PlanLadderUseCase<MockPriceFeed> {
        let feed = MockPriceFeed::new();
        feed.set_price("BTCUSDT", dec!(95000));
        PlanLadderUseCase::new(Arc::new(feed), DefaultsConfig::default())
    }

    #[tokio::test]
    async fn execute_with_explicit_anchor() {
        let response = use_case()
            .execute(&request(Some(dec!(95000)), None))
            .await
            .unwrap();

        assert!(response.quote.is_none());
        assert_eq!(response.levels.len(), 5);
        assert_eq!(response.levels[4].price, dec!(90000));
        assert_eq!(response.summary.volume_weighted_average_price, dec!(91875));
        assert_eq!(response.summary.insertion_index, 3);
    }

    #[tokio::test]
    async fn execute_looks_up_anchor() {
        let response = use_case()
            .execute(&request(None, Some("btcusdt")))
            .await
            .unwrap();

        let quote = response.quote.unwrap();
        assert_eq!(quote.symbol, "BTCUSDT");
        assert_eq!(response.scenario.anchor_price, dec!(95000));
    }

    #[tokio::test]
    async fn explicit_anchor_wins_over_symbol() {
        let response = use_case()
            .execute(&request(Some(dec!(94000)), Some("BTCUSDT")))
            .await
            .unwrap();

        assert!(response.quote.is_none());
        assert_eq!(response.levels[0].price, dec!(94000));
    }

    #[tokio::test]
    async fn missing_anchor() {
        let result = use_case().execute(&request(None, None)).await;
        assert_eq!(result.unwrap_err(), PlanLadderError::MissingAnchor);
    }

    #[tokio::test]
    async fn unknown_symbol() {
        let err = use_case()
            .execute(&request(None, Some("DOGEUSDT")))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "SYMBOL_NOT_FOUND");
    }

    #[tokio::test]
    async fn invalid_scenario_is_reported() {
        let mut req = request(Some(dec!(95000)), None);
        req.order_count = OrderCountInput::Text(String::new());

        let err = use_case().execute(&req).await.unwrap_err();

        assert_eq!(err.code(), "INVALID_SCENARIO");
    }

    #[tokio::test]
    async fn malformed_order_count_is_invalid_input() {
        let mut req = request(Some(dec!(95000)), None);
        req.order_count = OrderCountInput::Text("5.5".to_string());

        let err = use_case().execute(&req).await.unwrap_err();

        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[test]
    fn defaults_per_mode() {
        let use_case = use_case();

        let pyramid = use_case.defaults(LadderMode::Pyramid);
        assert_eq!(pyramid.boundary_price, dec!(90000));
        assert_eq!(pyramid.total_label, "total capital");

        let reverse = use_case.defaults(LadderMode::ReversePyramid);
        assert_eq!(reverse.boundary_price, dec!(100000));
        assert_eq!(reverse.order_count, 5);
    }

    #[test]
    fn plan_worked_example() {
        let scenario = Scenario::new(
            LadderMode::Pyramid,
            dec!(95000),
            dec!(1),
            5,
            crate::domain::ladder::Multiplier::new(dec!(0.5)).unwrap(),
            dec!(90000),
        );

        let (ladder, summary) = plan(&scenario).unwrap();

        assert_eq!(ladder.sizes(), vec![dec!(0.1), dec!(0.15), dec!(0.2), dec!(0.25), dec!(0.3)]);
        assert_eq!(summary.insertion_index, Some(3));
    }

    #[test]
    fn plan_large_total_summarizes() {
        let scenario = Scenario::new(
            LadderMode::Pyramid,
            dec!(100),
            Decimal::from_i128_with_scale(10_i128.pow(27), 0),
            2,
            crate::domain::ladder::Multiplier::ZERO,
            dec!(90),
        );

        let (_, summary) = plan(&scenario).unwrap();

        assert_eq!(summary.volume_weighted_average_price, dec!(95));
        assert_eq!(summary.insertion_index, Some(1));
    }
}
