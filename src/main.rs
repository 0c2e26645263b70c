mod cli;

use clap::Parser;
use cli::{Args, Command};
use nostr_address_decoder::bech32::{self, Variant};
use nostr_address_decoder::{address, convert};

fn main() {
    let args = Args::parse();

    match args.command {
        Command::Decode { string } => match bech32::decode(&string) {
            Ok(decoded) => {
                println!("Prefix:  {}", decoded.hrp);
                println!("Variant: {}", decoded.variant);
                match convert::words_to_bytes(&decoded.data) {
                    Ok(bytes) => println!("Payload: {}", hex::encode(bytes)),
                    Err(_) => println!(
                        "Payload: {} (5-bit symbols, not byte-aligned)",
                        hex::encode(&decoded.data)
                    ),
                }
            }
            Err(e) => println!("Error decoding: {:#?}", e),
        },
        Command::Encode {
            hrp,
            payload,
            bech32m,
        } => {
            let variant = if bech32m {
                Variant::Bech32m
            } else {
                Variant::Bech32
            };
            let result = hex::decode(&payload)
                .map_err(Into::into)
                .and_then(|bytes| convert::bytes_to_words(&bytes))
                .and_then(|words| bech32::encode(&hrp, &words, variant));
            match result {
                Ok(encoded) => println!("{}", encoded),
                Err(e) => println!("Error encoding: {:#?}", e),
            }
        }
        Command::Derive { key, json } => match address::derive_from_key_string(&key) {
            Ok(derived) => {
                if json {
                    match serde_json::to_string_pretty(&derived) {
                        Ok(output) => println!("{}", output),
                        Err(e) => println!("Error serializing: {:#?}", e),
                    }
                } else {
                    println!("{}", derived);
                }
            }
            Err(e) => println!("Error deriving addresses: {:#?}", e),
        },
    }
}
