//! CLI tool for the Basai payment checks.
//!
//! # Usage
//!
//! ```bash
//! # Check a card number
//! basai-pay check "4539 1488 0343 6467"
//!
//! # Live formatting of form fields
//! basai-pay format 4539148803436467
//! basai-pay expiry 1229
//!
//! # Run the checkout rules for a payment method
//! basai-pay pay --method card --card-number "4539 1488 0343 6467" \
//!     --card-name "Sita Sharma" --expiry 12/29 --cvv 123
//!
//! # Read the order summary from a query string
//! basai-pay summary "?hostel=Patan%20Hostel&price=45%2C000"
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostic output on stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use basai_pay::format::{card_icon_class, format_card_input, format_expiry_input, sanitize_cvv_input};
use basai_pay::mask::mask_string;
use basai_pay::order::OrderSummary;
use basai_pay::payment::{booking_reference, PaymentForm, PaymentMethod, PaymentState, ReceiptFile};
use basai_pay::{check, classify_str, passes_luhn};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "basai-pay")]
#[command(author, version, about = "Payment card checks for the Basai booking site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a card number's brand and checksum
    Check {
        /// Card number (spaces allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Classify the brand of a (partial) card number
    Classify {
        /// Card number or prefix
        card_number: String,
    },

    /// Check if a card number passes the Luhn checksum
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Format card number input in groups of four
    Format {
        /// Card number input
        input: String,
    },

    /// Format expiry input as MM/YY
    Expiry {
        /// Expiry input
        input: String,
    },

    /// Sanitize CVV input
    Cvv {
        /// CVV input
        input: String,
    },

    /// Run the checkout rules for a payment method
    Pay(PayArgs),

    /// Read the order summary from a query string
    Summary {
        /// Query string, e.g. "?hostel=...&duration=...&price=..."
        query: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Args)]
struct PayArgs {
    /// Payment method
    #[arg(short, long)]
    method: Option<MethodArg>,

    /// eSewa phone number
    #[arg(long)]
    esewa_phone: Option<String>,

    /// Khalti mobile number
    #[arg(long)]
    khalti_mobile: Option<String>,

    /// Khalti PIN
    #[arg(long)]
    khalti_pin: Option<String>,

    /// Card number
    #[arg(long)]
    card_number: Option<String>,

    /// Cardholder name
    #[arg(long)]
    card_name: Option<String>,

    /// Card expiry (MM/YY)
    #[arg(long)]
    expiry: Option<String>,

    /// Card verification value
    #[arg(long)]
    cvv: Option<String>,

    /// Bank transfer receipt file
    #[arg(long)]
    receipt: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Esewa,
    Khalti,
    Card,
    Bank,
    Cash,
}

impl From<MethodArg> for PaymentMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Esewa => PaymentMethod::Esewa,
            MethodArg::Khalti => PaymentMethod::Khalti,
            MethodArg::Card => PaymentMethod::Card,
            MethodArg::Bank => PaymentMethod::Bank,
            MethodArg::Cash => PaymentMethod::Cash,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            card_number,
            output,
        } => cmd_check(&card_number, output),
        Commands::Classify { card_number } => cmd_classify(&card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Format { input } => {
            println!("{}", format_card_input(&input));
            ExitCode::SUCCESS
        }
        Commands::Expiry { input } => {
            println!("{}", format_expiry_input(&input));
            ExitCode::SUCCESS
        }
        Commands::Cvv { input } => {
            println!("{}", sanitize_cvv_input(&input));
            ExitCode::SUCCESS
        }
        Commands::Pay(args) => cmd_pay(args),
        Commands::Summary { query, output } => cmd_summary(&query, output),
    }
}

fn cmd_check(card_number: &str, output: OutputFormat) -> ExitCode {
    tracing::debug!(card = %mask_string(card_number), "checking card number");

    let result = match check(card_number) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "card number rejected");
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                }
                OutputFormat::Json => {
                    let body = serde_json::json!({ "valid": false, "error": e.to_string() });
                    println!("{}", body);
                }
            }
            return ExitCode::FAILURE;
        }
    };

    match output {
        OutputFormat::Text => {
            println!(
                "Valid: {}",
                if result.is_acceptable() { "yes" } else { "no" }
            );
            println!("Brand: {}", result.brand().name());
            println!(
                "Luhn: {}",
                if result.luhn_valid() { "PASS" } else { "FAIL" }
            );
            println!("Digits: {}", result.length());
        }
        OutputFormat::Json => {
            let body = serde_json::json!({
                "valid": result.is_acceptable(),
                "result": result,
                "masked": mask_string(card_number),
            });
            println!("{}", body);
        }
    }

    if result.is_acceptable() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_classify(card_number: &str) -> ExitCode {
    let brand = classify_str(card_number);
    println!("Detected Brand: {}", brand.name());
    if let Some(icon) = card_icon_class(brand) {
        println!("Icon: {}", icon);
    }
    ExitCode::SUCCESS
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if passes_luhn(card_number) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_pay(args: PayArgs) -> ExitCode {
    let mut state = PaymentState::default();
    if let Some(method) = args.method {
        state = state.select(method.into());
    }

    let receipt = match args.receipt.as_deref().map(read_receipt).transpose() {
        Ok(receipt) => receipt,
        Err(e) => {
            eprintln!("Error: cannot read receipt: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(receipt) = &receipt {
        tracing::debug!(name = %receipt.name, size = %receipt.size_label(), "receipt attached");
    }

    let form = PaymentForm {
        esewa_phone: args.esewa_phone,
        khalti_mobile: args.khalti_mobile,
        khalti_pin: args.khalti_pin,
        card_number: args.card_number,
        card_name: args.card_name,
        expiry: args.expiry,
        cvv: args.cvv,
        receipt,
    };

    match state.submit(&form) {
        Ok(method) => {
            tracing::debug!(%method, "checkout accepted");
            let now_ms = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default();
            println!("{}: accepted", method.button_label());
            println!("Booking Reference: {}", booking_reference(now_ms));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(error = %e, "checkout refused");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_receipt(path: &std::path::Path) -> std::io::Result<ReceiptFile> {
    let metadata = std::fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ReceiptFile::new(name, metadata.len()))
}

fn cmd_summary(query: &str, output: OutputFormat) -> ExitCode {
    let order = OrderSummary::from_query(query);
    tracing::debug!(hostel = %order.hostel, price = %order.price, "order summary read");
    match output {
        OutputFormat::Text => {
            println!("Hostel: {}", order.hostel);
            println!("Duration: {}", order.duration);
            println!("Price: {}", order.price_label());
        }
        OutputFormat::Json => {
            let body = serde_json::json!({
                "order": order,
                "price_label": order.price_label(),
            });
            println!("{}", body);
        }
    }
    ExitCode::SUCCESS
}
