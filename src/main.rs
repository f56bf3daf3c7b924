// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use clap::Parser;
use swap_quoter::app::config::Settings;
use swap_quoter::app::logging::setup_logging;
use swap_quoter::data::wallet::AlloyWallet;
use swap_quoter::domain::error::AppError;
use swap_quoter::network::provider::ConnectionFactory;
use swap_quoter::network::zeroex::ZeroExClient;
use swap_quoter::services::workflow::SwapWorkflow;

#[derive(Parser, Debug)]
#[command(author, version, about = "0x price, Permit2 allowance and quote report")]
struct Cli {
    /// Path to config file (default: config.{toml,yaml,...})
    #[arg(long)]
    config: Option<String>,

    /// Amount of the sell token to quote, in token units (e.g. 0.1)
    #[arg(long)]
    sell_amount: Option<String>,

    /// Affiliate fee in basis points
    #[arg(long)]
    affiliate_fee_bps: Option<u32>,

    /// Do not request surplus collection
    #[arg(long, default_value_t = false)]
    no_surplus: bool,

    /// Report the allowance gap without submitting an approval
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Abort when the liquidity source list cannot be fetched
    #[arg(long, default_value_t = false)]
    strict_sources: bool,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(amount) = &self.sell_amount {
            settings.sell_amount = amount.clone();
        }
        if let Some(bps) = self.affiliate_fee_bps {
            settings.affiliate_fee_bps = bps;
        }
        settings.surplus_collection &= !self.no_surplus;
        settings.dry_run |= self.dry_run;
        settings.sources_strict |= self.strict_sources;
        settings.log_json |= self.log_json;
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut settings = Settings::load_with_path(cli.config.as_deref())?;
    cli.apply(&mut settings);
    settings.validate()?;
    setup_logging(
        if settings.debug { "debug" } else { "info" },
        settings.log_json,
    );
    tracing::info!(
        target: "config",
        api = %settings.api_base_url,
        version = %settings.api_version,
        sell_token = %format!("{:#x}", settings.sell_token),
        buy_token = %format!("{:#x}", settings.buy_token),
        sell_amount = %settings.sell_amount,
        affiliate_fee_bps = settings.affiliate_fee_bps,
        surplus_collection = settings.surplus_collection,
        "Settings loaded"
    );

    let signer = settings.signer()?;
    let taker = signer.address();
    let provider = ConnectionFactory::signing_http(settings.rpc_url()?, signer)?;
    let wallet = AlloyWallet::new(provider, taker);
    let api = ZeroExClient::new(settings.api_config()?)?;

    let workflow = SwapWorkflow::new(&api, &wallet, settings.workflow_settings());
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = workflow.run(&mut stdout).await {
        match e.phase() {
            Some(phase) => tracing::error!(target: "workflow", %phase, error = %e, "Quote workflow aborted"),
            None => tracing::error!(target: "workflow", error = %e, "Quote workflow aborted"),
        }
        return Err(e);
    }
    Ok(())
}
