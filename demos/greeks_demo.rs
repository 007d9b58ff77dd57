// demos/greeks_demo.rs

//! Price the example contract (S=100, K=110, T=1y, r=5%, sigma=20%) as a call and
//! as a put and print both results.
//!
//! Pass a TOML file to override the inputs or the display precision:
//!
//! ```text
//! cargo run --example greeks_demo -- my_contract.toml
//! RUST_LOG=debug cargo run --example greeks_demo
//! ```

use anyhow::Result;
use bs_greeks::{report, try_price_call, try_price_put, DemoConfig, OptionType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::from_path(path)?,
        None => DemoConfig::default(),
    };
    tracing::info!(inputs = ?config.inputs, "demo configuration loaded");

    let call = try_price_call(&config.inputs)?;
    print!("{}", report::render(OptionType::Call, &call, config.display));
    println!("\n");

    let put = try_price_put(&config.inputs)?;
    print!("{}", report::render(OptionType::Put, &put, config.display));

    Ok(())
}
