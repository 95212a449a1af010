use clap::{Parser, Subcommand};

use fusion_types::{AmountMode, KolType, Theme, TradeMode, TransportPreference};

#[derive(Parser)]
#[command(
    name = "fusion",
    about = "Fusion Alpha - copy-trading operator console",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Transport: auto, direct or relayed (overrides settings)")]
    pub transport: Option<TransportPreference>,

    #[arg(long, global = true, env = "FUSION_API_URL", help = "Backend base URL for this run")]
    pub api_url: Option<String>,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand, about = "Manage trading users")]
    User(UserCommands),

    #[command(subcommand, about = "Manage KOL signal sources")]
    Kol(KolCommands),

    #[command(subcommand, about = "Manage user → KOL track configurations")]
    Track(TrackCommands),

    #[command(subcommand, about = "View and modify console settings")]
    Settings(SettingsCommands),

    #[command(about = "Show user, track and KOL counters")]
    Dashboard,

    #[command(about = "Poll users and KOLs and keep a live summary")]
    Watch {
        #[arg(short = 'n', long, help = "Stop after N refreshes (default: until Ctrl-C)")]
        iterations: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "List users")]
    List {
        #[arg(short, long, help = "Only this user")]
        username: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Register a user with exchange credentials")]
    Add {
        #[arg(short, long)]
        username: String,

        #[arg(long, help = "Gate API key")]
        api_key: String,

        #[arg(long, help = "Gate secret key")]
        secret_key: String,

        #[arg(long, default_value_t = TradeMode::Simulated, help = "REAL or SIMULATED")]
        trade_mode: TradeMode,

        #[arg(long, help = "Enable the balance monitor")]
        balance_monitor: bool,

        #[arg(long)]
        init_balance: Option<f64>,

        #[arg(long)]
        balance_rate: Option<f64>,

        #[arg(long)]
        min_balance: Option<f64>,

        #[arg(long)]
        exporter_name: Option<String>,
    },

    #[command(about = "Change fields of an existing user")]
    Update {
        #[arg(help = "User to update")]
        username: String,

        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        secret_key: Option<String>,

        #[arg(long, help = "REAL or SIMULATED")]
        trade_mode: Option<TradeMode>,

        #[arg(long, help = "true or false")]
        balance_monitor: Option<bool>,

        #[arg(long)]
        init_balance: Option<f64>,

        #[arg(long)]
        balance_rate: Option<f64>,

        #[arg(long)]
        min_balance: Option<f64>,

        #[arg(long)]
        exporter_name: Option<String>,
    },

    #[command(about = "Remove a user")]
    Remove {
        username: String,

        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Start a user's trading process")]
    Run { username: String },

    #[command(about = "Stop a user's trading process")]
    Stop { username: String },

    #[command(about = "Start the balance monitor")]
    MonitorRun { username: String },

    #[command(about = "Stop the balance monitor")]
    MonitorStop { username: String },

    #[command(about = "Close every open position of a user")]
    CloseAll {
        username: String,

        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Start the metrics exporter")]
    ExporterStart {
        username: String,

        #[arg(long)]
        exporter_name: Option<String>,
    },

    #[command(about = "Stop the metrics exporter")]
    ExporterStop { username: String },
}

#[derive(Subcommand)]
pub enum KolCommands {
    #[command(about = "List KOLs")]
    List {
        #[arg(short, long, help = "Only this KOL")]
        name: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Register a KOL")]
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(long, default_value_t = KolType::Normal, help = "NORMAL or WWG")]
        kol_type: KolType,

        #[arg(long, help = "Discord channel ID")]
        channel_id: String,

        #[arg(long = "author-id", help = "Discord author ID (repeatable)")]
        author_ids: Vec<String>,
    },

    #[command(about = "Remove a KOL")]
    Remove {
        name: String,

        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TrackCommands {
    #[command(about = "List track configurations of every user")]
    List {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Bind a user to a KOL")]
    Add {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        kol: String,

        #[arg(long, value_delimiter = ',', help = "Futures symbols, comma separated")]
        futures: Vec<String>,

        #[arg(long, default_value_t = AmountMode::LossFixed, help = "FIXED, PERCENTAGE or LOSS_FIXED")]
        mode: AmountMode,

        #[arg(long = "amount", help = "SYMBOL=VALUE sizing entry (repeatable)")]
        amounts: Vec<String>,

        #[arg(long, help = "Max loss for LOSS_FIXED")]
        max_loss: Option<f64>,

        #[arg(long, help = "Trade against the KOL")]
        reverse: bool,
    },

    #[command(about = "Remove a track configuration")]
    Remove {
        username: String,
        kol: String,

        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Start tracking")]
    Start { username: String, kol: String },

    #[command(about = "Stop tracking")]
    Stop { username: String, kol: String },

    #[command(about = "Restart tracking (clears the track's positions)")]
    Restart {
        username: String,
        kol: String,

        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    #[command(about = "Show current settings")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Set the backend base URL")]
    SetUrl { url: String },

    #[command(about = "Set the watch refresh interval in milliseconds")]
    SetInterval { ms: u64 },

    #[command(about = "Set the console theme (dark or light)")]
    SetTheme { theme: Theme },

    #[command(about = "Set the transport (auto, direct or relayed)")]
    SetTransport { transport: TransportPreference },
}
