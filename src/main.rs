use std::io::{self, BufRead, Write};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::process::ExitCode;

use armory::models::{ItemType, Slot};
use armory::ui::assets::catalog_image_path;
use armory::ui::{
    format_price, Catalog, DeleteOutcome, LoadoutBuilder, LoadoutDetail, LoadoutList,
};
use armory::{config, server, Armory, ArmoryClient, AsyncArmory};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "armory")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database file used by `serve` and `seed`
    #[arg(long, global = true, env = "ARMORY_DATABASE")]
    database: Option<PathBuf>,

    /// Server the client commands talk to
    #[arg(long, global = true, env = "ARMORY_URL", default_value = config::DEFAULT_SERVER_URL)]
    url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the REST server
    Serve {
        #[arg(long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
        port: u16,
        /// Directory served under /assets
        #[arg(long, env = "ARMORY_ASSETS")]
        assets_dir: Option<PathBuf>,
        /// Catalog JSON to import before serving
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Import a catalog JSON file into the database
    Seed { file: PathBuf },
    /// Show the equipment catalog by slot pool
    Catalog,
    /// List saved loadouts
    List,
    /// Show one loadout priced at today's catalog
    Show { id: i64 },
    /// Build and save a new loadout
    Create(SlotArgs),
    /// Edit a saved loadout; omitted fields keep their current value
    Edit {
        id: i64,
        #[command(flatten)]
        slots: EditArgs,
    },
    /// Delete a saved loadout
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct SlotArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    primary: String,
    #[arg(long)]
    sub: String,
    #[arg(long)]
    gadget1: String,
    #[arg(long)]
    gadget2: String,
}

#[derive(Args, Debug)]
struct EditArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    primary: Option<String>,
    #[arg(long)]
    sub: Option<String>,
    #[arg(long)]
    gadget1: Option<String>,
    #[arg(long)]
    gadget2: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("armory=info,tower_http=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ArmoryClient::new(cli.url.as_str());

    let result = match cli.command {
        Command::Serve {
            port,
            assets_dir,
            catalog,
        } => serve(cli.database, port, assets_dir, catalog).await,
        Command::Seed { file } => seed(cli.database, file),
        Command::Catalog => show_catalog(&client).await,
        Command::List => list(&client).await,
        Command::Show { id } => show(&client, id).await,
        Command::Create(args) => create(&client, args).await,
        Command::Edit { id, slots } => edit(&client, id, slots).await,
        Command::Delete { id, yes } => delete(&client, id, yes).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

type CmdResult = Result<(), String>;

async fn serve(
    database: Option<PathBuf>,
    port: u16,
    assets_dir: Option<PathBuf>,
    catalog: Option<PathBuf>,
) -> CmdResult {
    let mut builder = AsyncArmory::builder();
    if let Some(path) = database {
        builder = builder.database(path);
    }
    if let Some(path) = catalog {
        builder = builder.catalog(path);
    }
    let store = builder.build().await.map_err(|e| e.to_string())?;

    let app = server::router(store, assets_dir);
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    server::serve(addr, app).await.map_err(|e| e.to_string())
}

fn seed(database: Option<PathBuf>, file: PathBuf) -> CmdResult {
    let mut builder = Armory::builder();
    if let Some(path) = database {
        builder = builder.database(path);
    }
    let armory = builder.build().map_err(|e| e.to_string())?;
    let count = armory
        .import_catalog_file(&file)
        .map_err(|e| e.to_string())?;
    println!("Imported {count} items into {armory}");
    Ok(())
}

fn print_pool(catalog: &Catalog, item_type: ItemType) {
    println!("{}", item_type.label());
    for item in catalog.pool(item_type) {
        println!(
            "  {:<24} {:>10}  {}",
            item.name,
            format_price(item.price),
            catalog_image_path(&item.image)
        );
    }
}

async fn show_catalog(client: &ArmoryClient) -> CmdResult {
    let items = client
        .equipments()
        .await
        .map_err(|e| format!("Error occurred while loading equipments: {e}"))?;
    let catalog = Catalog::new(items);
    for item_type in ItemType::ALL {
        print_pool(&catalog, item_type);
    }
    Ok(())
}

async fn list(client: &ArmoryClient) -> CmdResult {
    let list = LoadoutList::fetch(client).await?;
    if list.is_empty() {
        println!("No loadouts saved yet.");
    }
    for card in list.cards() {
        let price = card.price.map(format_price).unwrap_or_else(|| "-".to_string());
        println!("#{:<4} {}  {}", card.id, card.title, price);
        println!("      Primary: {}  Sub: {}", card.primary, card.sub);
        println!("      Gadgets: {}, {}", card.gadgets[0], card.gadgets[1]);
        println!("      Details: {}", card.detail_path);
    }
    Ok(())
}

fn print_detail(detail: &LoadoutDetail) {
    println!("{}", detail.title());
    for item in detail.items() {
        let price = item.price.map(format_price).unwrap_or_else(|| "n/a".to_string());
        println!(
            "  {:<9} {:<24} {:>10}  {}",
            item.slot.label(),
            item.name,
            price,
            item.image.src
        );
    }
    println!("  Current price: {}", format_price(detail.current_price()));
}

async fn show(client: &ArmoryClient, id: i64) -> CmdResult {
    let detail = LoadoutDetail::fetch(client, id)
        .await
        .map_err(|e| e.user_message("load loadout"))?;
    print_detail(&detail);
    Ok(())
}

/// Select `name` for `slot`, reporting unknown items by pool.
fn pick(builder: &mut LoadoutBuilder, slot: Slot, name: &str) -> CmdResult {
    if builder.select(slot, name) {
        Ok(())
    } else {
        let pool = armory::ui::catalog::pool_type(slot);
        Err(format!("No {} named '{}' in the catalog", pool.label(), name))
    }
}

async fn submit(builder: &mut LoadoutBuilder, client: &ArmoryClient) -> CmdResult {
    println!("Total: {}", format_price(builder.total_price()));
    match builder.submit(client).await {
        Some(next) => {
            if let Some(msg) = builder.message() {
                println!("{msg}");
            }
            println!("Saved. See {}", next.path());
            Ok(())
        }
        None => Err(builder
            .message()
            .unwrap_or("Submission failed.")
            .to_string()),
    }
}

async fn create(client: &ArmoryClient, args: SlotArgs) -> CmdResult {
    let mut builder = LoadoutBuilder::new();
    builder.load(client).await;
    if let Some(msg) = builder.message() {
        return Err(msg.to_string());
    }

    builder.set_name(args.name);
    pick(&mut builder, Slot::Primary, &args.primary)?;
    pick(&mut builder, Slot::Sub, &args.sub)?;
    pick(&mut builder, Slot::Gadget1, &args.gadget1)?;
    pick(&mut builder, Slot::Gadget2, &args.gadget2)?;
    submit(&mut builder, client).await
}

async fn edit(client: &ArmoryClient, id: i64, args: EditArgs) -> CmdResult {
    let mut builder = LoadoutBuilder::for_edit(id);
    builder.load(client).await;
    if let Some(msg) = builder.message() {
        return Err(msg.to_string());
    }

    if let Some(name) = args.name {
        builder.set_name(name);
    }
    let overrides = [
        (Slot::Primary, args.primary),
        (Slot::Sub, args.sub),
        (Slot::Gadget1, args.gadget1),
        (Slot::Gadget2, args.gadget2),
    ];
    for (slot, name) in overrides {
        if let Some(name) = name {
            pick(&mut builder, slot, &name)?;
        }
    }
    submit(&mut builder, client).await
}

fn confirm_on_stdin(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

async fn delete(client: &ArmoryClient, id: i64, yes: bool) -> CmdResult {
    let detail = LoadoutDetail::fetch(client, id)
        .await
        .map_err(|e| e.user_message("load loadout"))?;
    print_detail(&detail);

    let outcome = detail
        .delete(client, |prompt| yes || confirm_on_stdin(prompt))
        .await;
    match outcome {
        DeleteOutcome::Cancelled => {
            println!("Kept {}", detail.title());
            Ok(())
        }
        DeleteOutcome::Deleted { alert, next } => {
            println!("{alert} Back to {}", next.path());
            Ok(())
        }
        DeleteOutcome::Failed { alert } => Err(alert),
    }
}
