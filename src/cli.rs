use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Nostr key and address tools")]
pub struct Args {
    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Decode a bech32 string and show its parts
    Decode {
        /// The bech32 string to decode
        string: String,
    },
    /// Encode hex payload bytes under a human-readable prefix
    Encode {
        /// Human-readable prefix
        hrp: String,
        /// Payload bytes as hex
        payload: String,
        /// Use the bech32m checksum variant
        #[clap(long)]
        bech32m: bool,
    },
    /// Derive cross-chain addresses from an nsec or npub
    Derive {
        /// The nsec or npub string
        key: String,
        /// Emit JSON instead of text
        #[clap(long)]
        json: bool,
    },
}
