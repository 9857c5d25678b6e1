use gandi_client::{ClientConfig, Entity, GandiClient};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let host = std::env::args().nth(1).unwrap_or_else(|| "localhost:8080".to_string());
    let client = GandiClient::new(ClientConfig::new(host))?;

    client.create_collection("test15", 5).await?;

    let entities = vec![
        Entity::new(1, vec![0.1, 0.1, 0.1, 0.1, 0.1]),
        Entity::new(2, vec![0.2, 0.2, 0.2, 0.2, 0.2]),
        Entity::new(3, vec![0.3, 0.3, 0.3, 0.3, 0.3]),
    ];
    client.insert("test15", &entities).await?;

    let data = client.get("test15", &[1, 2, 3]).await?;
    println!("Fetched entities: {}", data);

    Ok(())
}
