//! Velasona storefront CLI.
//!
//! # Usage
//!
//! ```bash
//! # Log in and browse the catalog
//! velasona login -e cliente@velasona.shop -p secret
//! velasona products list --category candles
//!
//! # Shop
//! velasona cart add prod_1 --quantity 2
//! velasona orders checkout --address addr_1 --payment tok_visa
//!
//! # Download an invoice PDF
//! velasona invoices download inv_123 --dir ~/facturas
//! ```
//!
//! Output language follows the stored session preference (`velasona lang
//! set en`); Spanish is the default.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use velasona_client::StoreClient;
use velasona_core::{Language, localize};

mod commands;

#[derive(Parser)]
#[command(name = "velasona")]
#[command(author, version, about = "Velasona shop from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Log out and clear the stored token
    Logout,
    /// Show the currently logged-in user
    Whoami,
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place and inspect orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Browse the wellness audio library
    Audio {
        #[command(subcommand)]
        action: AudioAction,
    },
    /// List and download invoices
    Invoices {
        #[command(subcommand)]
        action: InvoiceAction,
    },
    /// Read and write product reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Manage the audio subscription
    Subscription {
        #[command(subcommand)]
        action: SubscriptionAction,
    },
    /// Back-office operations (admin role required)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Get or set the display language
    Lang {
        #[command(subcommand)]
        action: LangAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Filter by category (`candles`, `accessories`, `sets`)
        #[arg(short, long)]
        category: Option<String>,

        /// Full-text search term
        #[arg(short, long)]
        search: Option<String>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the current cart
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a cart line
    Remove {
        /// Cart item id
        item_id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrderAction {
    /// List your orders
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one order in detail
    Show {
        /// Order id
        id: String,
    },
    /// Place an order from the current cart
    Checkout {
        /// Shipping address id
        #[arg(short, long)]
        address: String,

        /// Payment method token
        #[arg(short, long)]
        payment: String,

        /// Free-form note for the order
        #[arg(short, long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist
    List,
    /// Add a product to the wishlist
    Add {
        /// Product id
        product_id: String,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Product id
        product_id: String,
    },
}

#[derive(Subcommand)]
enum AudioAction {
    /// List available audio content
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print the streaming URL for one track
    Url {
        /// Audio content id
        id: String,
    },
}

#[derive(Subcommand)]
enum InvoiceAction {
    /// List your invoices
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Download an invoice as PDF
    Download {
        /// Invoice id
        id: String,

        /// Directory to save the PDF into
        #[arg(short, long, default_value = ".")]
        dir: std::path::PathBuf,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List reviews for a product
    List {
        /// Product id
        product_id: String,
    },
    /// Submit a review for a product
    Add {
        /// Product id
        product_id: String,

        /// Rating from 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Review text
        #[arg(short, long)]
        comment: String,
    },
}

#[derive(Subcommand)]
enum SubscriptionAction {
    /// Show the current subscription
    Show,
    /// Start a subscription
    Subscribe {
        /// Plan name (e.g. `monthly`, `yearly`)
        plan: String,
    },
    /// Cancel the current subscription
    Cancel,
}

#[derive(Subcommand)]
enum AdminAction {
    /// List registered users
    Users {
        /// Filter by role (`user`, `admin`)
        #[arg(short, long)]
        role: Option<String>,

        /// Search by email or name
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Change a user's role
    Role {
        /// User id
        user_id: String,

        /// New role (`user`, `admin`)
        role: String,
    },
    /// Show the sales analytics summary
    Analytics {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum LangAction {
    /// Print the current display language
    Get,
    /// Set the display language (`es`, `en`)
    Set {
        /// Language code
        code: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = match StoreClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}: {e}", localize("error.prefix", Language::default()));
            std::process::exit(1);
        }
    };
    let lang = client.language();

    if let Err(e) = run(&client, cli).await {
        eprintln!("{}: {e}", localize("error.prefix", lang));
        std::process::exit(1);
    }
}

async fn run(client: &StoreClient, cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => commands::auth::login(client, &email, &password).await?,
        Commands::Logout => commands::auth::logout(client).await?,
        Commands::Whoami => commands::auth::whoami(client).await?,
        Commands::Products { action } => match action {
            ProductAction::List {
                category,
                search,
                page,
                limit,
            } => {
                commands::shop::list_products(client, category.as_deref(), search, page, limit)
                    .await?;
            }
            ProductAction::Show { id } => commands::shop::show_product(client, &id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::shop::show_cart(client).await?,
            CartAction::Add {
                product_id,
                quantity,
            } => commands::shop::add_to_cart(client, &product_id, quantity).await?,
            CartAction::Remove { item_id } => {
                commands::shop::remove_from_cart(client, &item_id).await?;
            }
            CartAction::Clear => commands::shop::clear_cart(client).await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List { page, limit } => {
                commands::orders::list_orders(client, page, limit).await?;
            }
            OrderAction::Show { id } => commands::orders::show_order(client, &id).await?,
            OrderAction::Checkout {
                address,
                payment,
                notes,
            } => commands::orders::checkout(client, &address, &payment, notes).await?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::shop::show_wishlist(client).await?,
            WishlistAction::Add { product_id } => {
                commands::shop::add_to_wishlist(client, &product_id).await?;
            }
            WishlistAction::Remove { product_id } => {
                commands::shop::remove_from_wishlist(client, &product_id).await?;
            }
        },
        Commands::Audio { action } => match action {
            AudioAction::List { page, limit } => {
                commands::account::list_audio(client, page, limit).await?;
            }
            AudioAction::Url { id } => commands::account::audio_url(client, &id).await?,
        },
        Commands::Invoices { action } => match action {
            InvoiceAction::List { page, limit } => {
                commands::orders::list_invoices(client, page, limit).await?;
            }
            InvoiceAction::Download { id, dir } => {
                commands::orders::download_invoice(client, &id, &dir).await?;
            }
        },
        Commands::Reviews { action } => match action {
            ReviewAction::List { product_id } => {
                commands::shop::list_reviews(client, &product_id).await?;
            }
            ReviewAction::Add {
                product_id,
                rating,
                comment,
            } => commands::shop::add_review(client, &product_id, rating, &comment).await?,
        },
        Commands::Subscription { action } => match action {
            SubscriptionAction::Show => commands::account::show_subscription(client).await?,
            SubscriptionAction::Subscribe { plan } => {
                commands::account::subscribe(client, &plan).await?;
            }
            SubscriptionAction::Cancel => commands::account::cancel_subscription(client).await?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Users {
                role,
                search,
                page,
                limit,
            } => {
                commands::admin::list_users(client, role.as_deref(), search, page, limit).await?;
            }
            AdminAction::Role { user_id, role } => {
                commands::admin::set_role(client, &user_id, &role).await?;
            }
            AdminAction::Analytics { from, to } => {
                commands::admin::analytics(client, from, to).await?;
            }
        },
        Commands::Lang { action } => match action {
            LangAction::Get => commands::account::show_language(client),
            LangAction::Set { code } => commands::account::set_language(client, &code).await?,
        },
    }
    Ok(())
}
