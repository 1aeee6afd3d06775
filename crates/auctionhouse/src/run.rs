use {
    crate::{api, arguments::Arguments},
    anyhow::{Context, Result},
    auction::{AuctionHouse, Authority},
    model::Crore,
    std::sync::Arc,
};

pub async fn run(args: Arguments) -> Result<()> {
    let seed = args.franchise_seed()?;
    let house = Arc::new(AuctionHouse::new(
        seed.iter()
            .map(|franchise| (franchise.name.as_str().into(), Crore(franchise.budget))),
    ));
    tracing::info!(franchises = seed.len(), "initialized franchise ledger");

    if let Some(path) = &args.roster_file {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening roster file {}", path.display()))?;
        let players = roster::parse_csv(file).context("parsing roster file")?;
        let loaded = house
            .reload_catalog(Authority::Admin, players)
            .context("loading startup roster")?;
        tracing::info!(loaded, "loaded startup roster");
    }

    let app = api::handle_all_routes(house, args.admin_secret);
    let listener = tokio::net::TcpListener::bind(args.bind_address)
        .await
        .with_context(|| format!("binding {}", args.bind_address))?;
    tracing::info!(address = %args.bind_address, "serving auction house");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving api")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "failed to listen for shutdown signal");
    }
}
