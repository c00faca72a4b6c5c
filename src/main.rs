use adboard::domain::{FilterCriteria, Photo, PriceRange, SaleFilter};
use adboard::observability::init_tracing;
use adboard::remote::{AdvertsApi, HttpAdvertsApi};
use adboard::storage::JsonStorage;
use adboard::ui::{parse_price, render_list, ListView};
use adboard::worker::{Dispatcher, HistoryNavigator};
use adboard::{AdboardError, Config, Event, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Name of the local store inside the data directory.
const STORE_FILE_NAME: &str = "adboard.json";

#[derive(Parser)]
#[command(name = "adboard")]
#[command(about = "Browse and post classified adverts")]
#[command(version)]
struct Cli {
    /// Configuration file (default: <config_dir>/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Root URL of the adverts API
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory for the local store and log file
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Tracing filter, e.g. debug or adboard=trace
    #[arg(long, global = true)]
    trace_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List adverts, optionally replacing the saved filters
    #[command(visible_alias = "ls")]
    List {
        /// Name filter
        #[arg(long)]
        name: Option<String>,

        /// Advert kind: sell or buy
        #[arg(long)]
        sale: Option<SaleFilter>,

        /// Price range as LOW-HIGH, e.g. 10-250
        #[arg(long)]
        price: Option<PriceRange>,

        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Clear the saved filters
        #[arg(long)]
        reset: bool,
    },

    /// Post a new advert
    New {
        /// Advert name
        #[arg(long)]
        name: String,

        /// Price, e.g. 1500 or "€ 1.500"
        #[arg(long, value_parser = parse_price_arg)]
        price: f64,

        /// Tag (repeatable)
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,

        /// Post a wanted-to-buy advert instead of a sale
        #[arg(long)]
        buy: bool,

        /// Photo file to upload
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Print the tags offered for new adverts
    Tags,
}

fn parse_price_arg(value: &str) -> std::result::Result<f64, String> {
    parse_price(value).ok_or_else(|| format!("invalid price '{value}'"))
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut overrides = BTreeMap::new();
        if let Some(api_url) = &self.api_url {
            overrides.insert("api_url".to_string(), api_url.clone());
        }
        if let Some(data_dir) = &self.data_dir {
            overrides.insert("data_dir".to_string(), data_dir.clone());
        }
        if let Some(level) = &self.trace_level {
            overrides.insert("trace_level".to_string(), level.clone());
        }

        Ok(Config::load(self.config.as_deref())?.merge_map(&overrides))
    }
}

type CliDispatcher = Dispatcher<HttpAdvertsApi, JsonStorage, HistoryNavigator>;

fn dispatcher(config: &Config) -> Result<CliDispatcher> {
    let storage = JsonStorage::new(config.resolved_data_dir().join(STORE_FILE_NAME))?;
    let api = Arc::new(HttpAdvertsApi::from_config(config)?);
    Ok(Dispatcher::new(api, storage, HistoryNavigator::new()))
}

async fn cmd_list(config: &Config, criteria: Option<FilterCriteria>) -> Result<ExitCode> {
    let mut dispatcher = dispatcher(config)?;

    if let Some(criteria) = criteria {
        dispatcher.dispatch(Event::FiltersSubmitted(criteria))?;
    }
    dispatcher.dispatch(Event::ListMounted)?;
    dispatcher.settle().await?;

    print!("{}", render_list(dispatcher.state()));

    Ok(match dispatcher.state().compute_list_view() {
        ListView::Failure { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

async fn cmd_new(config: &Config, draft: NewAdvert) -> Result<ExitCode> {
    let photo = draft.photo.as_deref().map(Photo::from_path).transpose()?;

    let mut dispatcher = dispatcher(config)?;
    dispatcher.dispatch(Event::FormMounted)?;
    dispatcher.dispatch(Event::NameChanged(draft.name))?;
    dispatcher.dispatch(Event::PriceChanged(draft.price))?;
    dispatcher.dispatch(Event::TagsChanged(draft.tags))?;
    dispatcher.dispatch(Event::SaleChanged(!draft.buy))?;
    dispatcher.dispatch(Event::PhotoChanged(photo))?;

    if let Some(reason) = dispatcher.state().form().validation_error() {
        return Err(AdboardError::Validation(reason));
    }

    dispatcher.dispatch(Event::SubmitForm)?;
    dispatcher.settle().await?;

    if let Some(route) = dispatcher.navigator().current() {
        println!("{route}");
        return Ok(ExitCode::SUCCESS);
    }

    let message = dispatcher
        .state()
        .submit()
        .error()
        .unwrap_or("advert was not created");
    eprintln!("Error: {message}");
    Ok(ExitCode::FAILURE)
}

async fn cmd_tags(config: &Config) -> Result<ExitCode> {
    let api = HttpAdvertsApi::from_config(config)?;
    for tag in api.list_tags().await? {
        println!("{tag}");
    }
    Ok(ExitCode::SUCCESS)
}

struct NewAdvert {
    name: String,
    price: f64,
    tags: Vec<String>,
    buy: bool,
    photo: Option<PathBuf>,
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.load_config()?;
    init_tracing(&config);
    tracing::debug!(api_url = %config.api_url, "adboard starting");

    match cli.command {
        Commands::List {
            name,
            sale,
            price,
            tags,
            reset,
        } => {
            let any_flag = reset || name.is_some() || sale.is_some() || price.is_some() || !tags.is_empty();
            let criteria = any_flag.then(|| FilterCriteria {
                name: name.unwrap_or_default(),
                sale: sale.unwrap_or_default(),
                price,
                tags,
            });
            cmd_list(&config, criteria).await
        }
        Commands::New {
            name,
            price,
            tags,
            buy,
            photo,
        } => {
            cmd_new(
                &config,
                NewAdvert {
                    name,
                    price,
                    tags,
                    buy,
                    photo,
                },
            )
            .await
        }
        Commands::Tags => cmd_tags(&config).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
