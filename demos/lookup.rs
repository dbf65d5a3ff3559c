use owapi::{ClientConfig, OwClient, Platform, PlayerStatus};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let platform = match args.next().map(|p| p.parse::<Platform>()) {
        Some(Ok(platform)) => platform,
        Some(Err(_)) | None => {
            eprintln!("usage: lookup <pc|xbl|psn|nintendo-switch> <identifier>...");
            return;
        }
    };
    let identifiers = args.collect::<Vec<_>>();

    let client = OwClient::with_config(reqwest::Client::new(), ClientConfig::from_env());
    let players = client.get_players(&identifiers, platform, true).await;

    for player in players {
        let name = match &player.original_name {
            Some(original) => format!("{} (searched as {original})", player.player_name),
            None => player.player_name.clone(),
        };
        match &player.status {
            PlayerStatus::Failed(failure) => println!("{name}: lookup failed: {failure:?}"),
            PlayerStatus::Private => println!("{name}: private profile"),
            PlayerStatus::Public(stats) => {
                println!("{name}: level {}", stats.actual_level());
                for (role, rating) in [
                    ("tank", &stats.ratings.tank),
                    ("damage", &stats.ratings.damage),
                    ("support", &stats.ratings.support),
                ] {
                    if let Some(rating) = rating {
                        println!("  {role}: {rating:?}");
                    }
                }
            }
        }
    }
}
