// Copyright 2023 Remi Bernotavicius

use clap::Parser;
use clap::Subcommand;
use std::io::Write;

mod kitchen;
mod ui;

use kitchen::models::CategoryFilter;
use kitchen::sample::SampleData;
use kitchen::{Kitchen, KitchenConfig};

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
type Result<T> = std::result::Result<T, Error>;

#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

#[derive(clap::Args, Debug)]
struct ExpiryArgs {
    /// Date to compute expiry status against, defaults to the local date.
    #[arg(long)]
    today: Option<chrono::NaiveDate>,

    /// How many days ahead an item counts as expiring soon.
    #[arg(long, default_value_t = kitchen::expiry::DEFAULT_EXPIRING_SOON_DAYS)]
    expiring_soon_days: u64,
}

impl From<ExpiryArgs> for KitchenConfig {
    fn from(args: ExpiryArgs) -> Self {
        Self {
            today: args.today,
            expiring_soon_days: args.expiring_soon_days,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Household kitchen companion")]
struct Args {
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the application window.
    Run {
        #[arg(long)]
        skip_onboarding: bool,

        #[command(flatten)]
        expiry: ExpiryArgs,
    },
    /// Print the fridge contents with their expiry status.
    Fridge {
        #[command(flatten)]
        expiry: ExpiryArgs,
    },
    /// Print the recipes matching a category and title search.
    Recipes {
        #[arg(long, default_value = CategoryFilter::ALL)]
        category: String,

        #[arg(long, default_value = "")]
        query: String,
    },
}

fn run(kitchen: Kitchen, skip_onboarding: bool) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kitchen Companion")
            .with_inner_size([440.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Kitchen Companion",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ui::KitchenCompanion::new(kitchen, skip_onboarding)))),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

fn print_fridge(kitchen: &Kitchen, out: &mut impl Write) -> Result<()> {
    let today = kitchen.today();
    for item in &kitchen.fridge {
        let status = item.status(today, kitchen.config.expiring_soon_days);
        writeln!(
            out,
            "{}\t{}\t{}\t{status}",
            item.name, item.quantity, item.expiry
        )?;
    }
    Ok(())
}

fn print_recipes(
    kitchen: &Kitchen,
    category: &str,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    for recipe in ui::filter_recipes(&kitchen.recipes, &category.into(), query) {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            recipe.title, recipe.category, recipe.prep_time, recipe.difficulty
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    simple_logger::SimpleLogger::new()
        .with_level(args.log_level.into())
        .init()
        .map_err(|e| e.to_string())?;

    match args.commands {
        Commands::Run {
            skip_onboarding,
            expiry,
        } => run(Kitchen::new(&SampleData, expiry.into()), skip_onboarding)?,
        Commands::Fridge { expiry } => {
            let kitchen = Kitchen::new(&SampleData, expiry.into());
            print_fridge(&kitchen, &mut std::io::stdout().lock())?
        }
        Commands::Recipes { category, query } => {
            let kitchen = Kitchen::new(&SampleData, KitchenConfig::default());
            print_recipes(&kitchen, &category, &query, &mut std::io::stdout().lock())?
        }
    }
    Ok(())
}

#[test]
fn args() {
    use clap::CommandFactory as _;
    Args::command().debug_assert();

    let args = Args::try_parse_from([
        "kitchen-companion",
        "fridge",
        "--today",
        "2025-09-11",
        "--expiring-soon-days",
        "5",
    ])
    .unwrap();
    let Commands::Fridge { expiry } = args.commands else {
        panic!("expected fridge command");
    };
    let config = KitchenConfig::from(expiry);
    assert_eq!(config.today, chrono::NaiveDate::from_ymd_opt(2025, 9, 11));
    assert_eq!(config.expiring_soon_days, 5);
    assert_eq!(args.log_level, LogLevel::Info);

    let args = Args::try_parse_from(["kitchen-companion", "run"]).unwrap();
    assert!(matches!(
        args.commands,
        Commands::Run {
            skip_onboarding: false,
            expiry: ExpiryArgs {
                today: None,
                expiring_soon_days: 3
            }
        }
    ));

    assert!(Args::try_parse_from(["kitchen-companion"]).is_err());
}

#[test]
fn fridge_report() {
    let config = KitchenConfig {
        today: chrono::NaiveDate::from_ymd_opt(2025, 9, 11),
        ..Default::default()
    };
    let kitchen = Kitchen::new(&SampleData, config);
    let mut out = vec![];
    print_fridge(&kitchen, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Beef\t500 g\t2025-09-13\texpiring soon\n\
         Milk\t1 L\t2025-09-10\texpired\n\
         Eggs\t12\t2025-09-21\tfresh\n"
    );
}

#[test]
fn recipes_report() {
    let kitchen = Kitchen::new(&SampleData, KitchenConfig::default());

    let mut out = vec![];
    print_recipes(&kitchen, "Dessert", "basque", &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Basque Cheesecake\tDessert\t60 min\tMedium\n"
    );

    let mut out = vec![];
    print_recipes(&kitchen, "All", "", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
}
