use cart_store::utils::error::ErrorSeverity;
use cart_store::utils::{logger, validation::Validate};
use cart_store::{Cart, CartError, CartStore, CliConfig, Command, ConfigProvider, LocalStorage};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.load_file() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let settings = cli.resolve(file_config.as_ref());
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate().and_then(|_| cli.command.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match run(&cli.command, &settings).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn run<C: ConfigProvider>(command: &Command, settings: &C) -> cart_store::Result<()> {
    let storage = LocalStorage::new(settings.data_dir());
    let store = CartStore::from_config(storage, settings).await?;

    match command {
        Command::List => print_cart(&store.products()),
        Command::Total => print_total(&store.products()),
        Command::Add { .. } => {
            if let Some(product) = command.product() {
                let cart = store.add_to_cart(product).await?;
                print_cart(&cart);
            }
        }
        Command::Increment { id } => {
            let cart = store.increment(id).await?;
            report_missing(&cart, id)?;
            print_cart(&cart);
        }
        Command::Decrement { id } => {
            let cart = store.decrement(id).await?;
            report_missing(&cart, id)?;
            print_cart(&cart);
        }
    }

    Ok(())
}

fn report_missing(cart: &Cart, id: &str) -> cart_store::Result<()> {
    if cart.contains(id) {
        Ok(())
    } else {
        tracing::warn!("⚠️ No cart line with id '{}', snapshot rewritten unchanged", id);
        Err(CartError::LineNotFoundError { id: id.to_string() })
    }
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }

    for line in cart {
        println!(
            "{:<12} {:<30} {:>4} x {:>10.2} = {:>10.2}",
            line.id,
            line.title,
            line.quantity,
            line.price,
            line.subtotal()
        );
    }
}

fn print_total(cart: &Cart) {
    println!("{} item(s), total {:.2}", cart.item_count(), cart.total());
}
