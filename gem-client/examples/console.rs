// gem-client/examples/console.rs
// Console walkthrough: log in, check a few routes, load stocks for a gold price change

use gem_client::navigation::routes;
use gem_client::pricing::{format_currency, format_difference, load_worksheet};
use gem_client::{AppContext, ClientConfig, ListQuery, LoginCredentials, SearchCriteria};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gem_client=debug,info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password> [stock numbers...]", args[0]);
        println!("  Example: {} admin secret \"ST001, ST002\"", args[0]);
        return Ok(());
    }

    let data_dir = std::env::var("GEM_DATA_DIR").unwrap_or_else(|_| "./.gem".to_string());
    let context = AppContext::connect(ClientConfig::from_env(), &data_dir)?;

    if !context.session().is_authenticated() {
        let credentials = LoginCredentials::new(&args[1], &args[2]).remember();
        let session = context.auth().login(&credentials).await?;
        tracing::info!("Logged in as: {}", session.username);
    }

    let guard = context.guard();
    for route in routes::all_routes() {
        let decision = guard.decide(route, route.path);
        println!(
            "{:<24} {:<40} {}",
            route.name,
            route.path,
            decision.location().unwrap_or_else(|| "allowed".to_string())
        );
    }

    let branches = context.branches().list(&ListQuery::new(SearchCriteria::default())).await?;
    tracing::info!("Branches: {} of {}", branches.items.len(), branches.total_records);

    if let Some(input) = args.get(3) {
        let load = load_worksheet(&context.stock(), input).await?;
        for (stock_number, reason) in &load.missing {
            tracing::warn!("Skipped {}: {}", stock_number, reason);
        }

        let mut worksheet = load.worksheet;
        let price = std::env::var("GEM_GOLD_PRICE").ok().and_then(|v| v.parse().ok());
        worksheet.apply_global_price(price);
        for stock in worksheet.stocks() {
            println!(
                "{:<10} {:>16} -> {:>16} ({})",
                stock.stock_number,
                format_currency(Some(stock.original_cost)),
                format_currency(Some(stock.new_cost)),
                format_difference(stock.difference())
            );
        }
        println!(
            "{} changed, total {}",
            worksheet.changed_count(),
            format_difference(worksheet.total_difference())
        );
    }

    context.auth().logout().await;
    Ok(())
}
