// Inherit lint configuration from lib.rs for consistency
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::items_after_statements,
    clippy::fn_params_excessive_bools
)]

use clap::Parser;
use tracing::debug;

use smeter::cli::commands::{Cli, Command};
use smeter::cli::output;
use smeter::config::Config;
use smeter::models::{Attachment, Encoding, MessageDraft, PricingRecord};
use smeter::operations::{self, EstimateOptions};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Log to stderr; stdout carries command output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn run(cli: Cli) -> CmdResult {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Estimate {
            text,
            unicode,
            sender,
            sms_cost,
            mms_cost,
            recipients,
            images,
            videos,
            carrier_segmentation,
            no_text: _,
        } => cmd_estimate(
            &config,
            EstimateArgs {
                text,
                unicode,
                sender,
                sms_cost,
                mms_cost,
                recipients,
                images,
                videos,
                carrier_segmentation,
            },
        ),
        Command::Count { text } => cmd_count(&config, &text),
        Command::Senders => cmd_senders(&config),
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::fmt::Display>> {
    match path {
        Some(p) => Config::load(p).map_err(map_err),
        None => Config::from_cwd().map_err(map_err),
    }
}

/// Estimate flags, regrouped after clap destructuring.
struct EstimateArgs {
    text: Option<String>,
    unicode: bool,
    sender: Option<String>,
    sms_cost: Option<f64>,
    mms_cost: Option<f64>,
    recipients: Option<u32>,
    images: usize,
    videos: usize,
    carrier_segmentation: bool,
}

fn cmd_estimate(config: &Config, args: EstimateArgs) -> CmdResult {
    let pricing = resolve_pricing(config, &args)?;
    if pricing.is_none() {
        debug!("no pricing available; estimating at zero credits");
    }

    let encoding = if args.unicode {
        Encoding::Ucs2
    } else {
        Encoding::Gsm7
    };
    let mut attachments = vec![Attachment::image(); args.images];
    attachments.extend(std::iter::repeat_with(Attachment::video).take(args.videos));

    let draft = MessageDraft {
        text: args.text,
        encoding,
        attachments,
    };
    let opts = EstimateOptions {
        recipients: args
            .recipients
            .unwrap_or(config.settings.defaults.recipients),
        carrier_segmentation: args.carrier_segmentation
            || config.settings.defaults.carrier_segmentation,
    };

    let stats = operations::estimate(&draft, pricing.as_ref(), &opts);
    println!(
        "{}",
        output::format_with_settings(&stats, &config.settings.output.format)
    );
    Ok(())
}

/// Pricing precedence: inline flags, then --sender, then the config
/// default sender, then none (zero-credit estimate).
fn resolve_pricing(
    config: &Config,
    args: &EstimateArgs,
) -> Result<Option<PricingRecord>, Box<dyn std::fmt::Display>> {
    if let (Some(sms), Some(mms)) = (args.sms_cost, args.mms_cost) {
        return Ok(Some(PricingRecord::new(sms, mms)));
    }
    if let Some(name) = &args.sender {
        return config.sender_pricing(name).map(Some).map_err(map_err);
    }
    if let Some(name) = &config.settings.defaults.sender {
        return config.sender_pricing(name).map(Some).map_err(map_err);
    }
    Ok(None)
}

fn cmd_count(config: &Config, text: &str) -> CmdResult {
    let report = operations::charset_report(text);
    println!(
        "{}",
        output::format_with_settings(&report, &config.settings.output.format)
    );
    Ok(())
}

fn cmd_senders(config: &Config) -> CmdResult {
    #[derive(serde::Serialize)]
    struct SenderEntry {
        name: String,
        sms_cost: f64,
        mms_cost: f64,
    }
    #[derive(serde::Serialize)]
    struct SendersOutput {
        count: usize,
        senders: Vec<SenderEntry>,
    }

    let mut senders: Vec<SenderEntry> = config
        .settings
        .senders
        .iter()
        .map(|(name, p)| SenderEntry {
            name: name.clone(),
            sms_cost: p.sms_cost,
            mms_cost: p.mms_cost,
        })
        .collect();
    senders.sort_by(|a, b| a.name.cmp(&b.name));

    println!(
        "{}",
        output::format_with_settings(
            &SendersOutput {
                count: senders.len(),
                senders,
            },
            &config.settings.output.format
        )
    );
    Ok(())
}
