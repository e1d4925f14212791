//! itemfeed — CLI client
//!
//! Control and test interface for itemfeedd.

use clap::{Parser, Subcommand};
use futures_util::StreamExt;

use itemfeed::ItemGateway;
use itemfeed::client::ServiceClient;

/// Itemfeed CLI client
#[derive(Parser)]
#[command(name = "itemfeed")]
#[command(version = itemfeed::PKG_VERSION)]
#[command(about = "Itemfeed service client")]
struct Args {
    /// Server address
    #[arg(
        short,
        long,
        env = "ITEMFEED_ADDRESS",
        default_value = "http://127.0.0.1:50051"
    )]
    address: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Greet by name
    Hello {
        /// Name to greet
        name: String,
    },

    /// Fetch items in a single bulk response
    Items {
        /// Number of items to fetch
        length: i32,
        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch items as a server stream, printing each as it arrives
    Stream {
        /// Number of items to stream
        length: i32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = ServiceClient::connect(args.address).await?;

    match args.command {
        Command::Hello { name } => {
            println!("{}", client.say_hello(&name).await?);
        }
        Command::Items { length, json } => {
            let items = client.get_all(length).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in items {
                    println!("{}\t{}", item.id, item.name);
                }
            }
        }
        Command::Stream { length } => {
            let mut stream = client.get_stream(length).await?;
            while let Some(item) = stream.next().await {
                let item = item?;
                println!("{}\t{}", item.id, item.name);
            }
        }
    }

    Ok(())
}
