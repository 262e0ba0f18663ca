//! Swap adapter over the single-hop exchange route.

use alloy_primitives::{aliases::U24, U160, U256};

use crate::{
    journal::{EventSink, StrategyEvent},
    protocol::{AssetLedger, SwapRouter},
    strategy::settings::StrategySettings,
    types::ExactInputSingleParams,
    utils::error::{protocol_err, StrategyResult},
};

/// Converts an exact input amount of the borrowed asset into the
/// collateral asset, crediting the engine's own balance.
pub struct SwapAdapter<'a, R: SwapRouter, A: AssetLedger> {
    settings: &'a StrategySettings,
    router: &'a R,
    ledger: &'a A,
}

impl<'a, R: SwapRouter, A: AssetLedger> SwapAdapter<'a, R, A> {
    pub fn new(settings: &'a StrategySettings, router: &'a R, ledger: &'a A) -> Self {
        Self {
            settings,
            router,
            ledger,
        }
    }

    /// Runs the route with an exact input at the configured fee tier.
    ///
    /// `min_out_floor` is a configured policy value. The default floor is
    /// nominal: it rejects a zero-output route and nothing more.
    pub fn convert(
        &self,
        amount_in: U256,
        min_out_floor: U256,
        journal: &mut dyn EventSink,
    ) -> StrategyResult<U256> {
        if amount_in == U256::ZERO {
            return Err(protocol_err("The swap input amount was zero."));
        }

        let params = ExactInputSingleParams {
            tokenIn: self.settings.debt_asset,
            tokenOut: self.settings.collateral_asset,
            fee: U24::from(self.settings.swap_fee_tier),
            recipient: self.settings.engine_account,
            amountIn: amount_in,
            amountOutMinimum: min_out_floor,
            sqrtPriceLimitX96: U160::ZERO,
        };

        let amount_out = self.router.exact_input_single(params)?;
        if amount_out == U256::ZERO {
            return Err(protocol_err("The swap route returned zero output."));
        }

        let resulting_balance = self
            .ledger
            .balance_of(self.settings.collateral_asset, self.settings.engine_account)?;

        journal.record(StrategyEvent::SwapObserved {
            amount_in,
            resulting_balance,
        });

        Ok(amount_out)
    }
}
