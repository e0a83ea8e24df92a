//! Print the effective per-game platform configuration.

use revbatch_core::AppConfig;

/// Prints the game catalog: platform slots and the per-game
/// Android-currency rule, as the engine will apply them.
pub fn check_config(config: &AppConfig) {
    println!("fx: {} -> {}", config.fx.api_url, config.fx.currency);
    println!("kpi: {}", config.kpi.api_url);
    println!(
        "ad reports: {} (revenue column {})",
        config.ad_reports.base_url, config.ad_reports.revenue_column
    );
    println!();

    if config.games.is_empty() {
        println!("no games configured");
        return;
    }

    for game in &config.games {
        let rule = if game.local_currency_ads {
            "android ads in LOCAL currency"
        } else {
            "android ads in USD"
        };
        println!("{} ({rule})", game.name);
        for (slot, platform_id) in game.platform_ids.iter().enumerate() {
            let bucket = if slot == 0 { "ios" } else { "android" };
            println!("  slot {slot} [{bucket}]: {platform_id}");
        }
    }
}
