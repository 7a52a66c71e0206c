use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "huffman")]
#[command(about = "Huffman-encode a string, decode it again and compare sizes")]
pub struct Cli {
    /// Text to encode. Starts the interactive menu when omitted.
    pub text: Option<String>,

    /// Bits per symbol of the uncompressed text, used for the size comparison.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    pub bits_per_symbol: u32,

    /// Default log filter (e.g. `info`, `huffman_coding=trace`); RUST_LOG takes precedence.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
