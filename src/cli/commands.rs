use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "smeter",
    version,
    about = "SMS/MMS send cost estimator - character, segment and credit stats",
    after_help = "NOTE: estimates are advisory. The carrier's own accounting is \
                  authoritative for what a send is ultimately billed."
)]
pub struct Cli {
    /// Settings file (default: smeter.toml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate credits, characters and segment counts for a send.
    ///
    /// Pricing comes from --sms-cost/--mms-cost, from the config sender
    /// table via --sender, or from the config default sender. With none
    /// of those the send is priced at 0 credits; character and segment
    /// stats are still computed.
    Estimate {
        /// Message text (omit together with --no-text for media-only sends)
        #[arg(required_unless_present = "no_text", conflicts_with = "no_text")]
        text: Option<String>,
        /// Price with UCS-2 (Unicode) encoding instead of GSM-7
        #[arg(short, long)]
        unicode: bool,
        /// Sender identity to price with (looked up in config)
        #[arg(short, long, conflicts_with_all = ["sms_cost", "mms_cost"])]
        sender: Option<String>,
        /// Credits per SMS segment
        #[arg(long, requires = "mms_cost")]
        sms_cost: Option<f64>,
        /// Credits per MMS unit
        #[arg(long, requires = "sms_cost")]
        mms_cost: Option<f64>,
        /// Number of recipients
        #[arg(short, long)]
        recipients: Option<u32>,
        /// Number of attached images
        #[arg(long, default_value = "0")]
        images: usize,
        /// Number of attached videos
        #[arg(long, default_value = "0")]
        videos: usize,
        /// Carrier handles multi-part splitting (segments keep full capacity)
        #[arg(long)]
        carrier_segmentation: bool,
        /// Estimate a send with no text at all
        #[arg(long)]
        no_text: bool,
    },

    /// Count extended GSM characters and effective length under each encoding
    Count {
        /// Text to scan
        text: String,
    },

    /// List the sender pricing table from config
    Senders,
}
