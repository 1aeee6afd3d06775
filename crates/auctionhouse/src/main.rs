use {auctionhouse::arguments::Arguments, clap::Parser, tracing::level_filters::LevelFilter};

#[tokio::main]
async fn main() {
    let args = Arguments::parse();
    observe::tracing::initialize(&args.log_filter, LevelFilter::ERROR);
    observe::metrics::setup_registry(Some("auctionhouse".to_string()), None);
    tracing::info!("running auction house with validated arguments:\n{}", args);

    if let Err(err) = auctionhouse::run(args).await {
        tracing::error!(?err, "auction house exited with error");
        std::process::exit(1);
    }
}
