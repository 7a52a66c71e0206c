use std::io::{self, Write};

use log::{debug, info};

use huffman_coding::{count, frequency, Bits, Codec, FreqTable};

/// Everything produced by one encode/decode pass over a line of text.
pub struct Session {
    pub text: Vec<char>,
    pub frequencies: FreqTable<char>,
    pub codec: Codec<char>,
    pub encoded: Bits,
    pub decoded: Vec<char>,
}

impl Session {
    pub fn run(text: &str) -> huffman_coding::Result<Self> {
        let text: Vec<char> = text.chars().collect();
        let frequencies = count(text.iter().copied());
        let codec = Codec::from_frequencies(&frequencies)?;
        let encoded = codec.encode(&text)?;
        let decoded = codec.decode(&encoded)?;
        info!(
            "Encoded {} symbols into {} bits",
            text.len(),
            encoded.len()
        );
        Ok(Session {
            text,
            frequencies,
            codec,
            encoded,
            decoded,
        })
    }

    pub fn matches(&self) -> bool {
        self.decoded == self.text
    }
}

/// Encoded size as a percentage of the uncompressed size.
pub fn compression_ratio(encoded_bits: usize, symbols: usize, bits_per_symbol: u32) -> f64 {
    let original_bits = symbols as f64 * f64::from(bits_per_symbol);
    if original_bits == 0.0 {
        return 0.0;
    }
    encoded_bits as f64 / original_bits * 100.0
}

fn display_symbol(symbol: char) -> String {
    match symbol {
        ' ' => "' '".to_string(),
        '\t' => "'\\t'".to_string(),
        _ => symbol.to_string(),
    }
}

pub fn write_session<W: Write>(
    out: &mut W,
    session: &Session,
    bits_per_symbol: u32,
) -> io::Result<()> {
    debug!("Rendering session for {} symbols", session.text.len());

    writeln!(out, "\nStep 1: Create a Frequency Table\n")?;
    writeln!(out, "{:<15}{:<15}", "Character", "Frequency")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for (&symbol, freq) in &session.frequencies {
        writeln!(out, "{:<15}{:<15}", display_symbol(symbol), freq)?;
    }
    writeln!(out, "{}", "-".repeat(30))?;
    writeln!(out, "{:<15}{:<15}", "Total", frequency::total(&session.frequencies))?;

    writeln!(out, "\nStep 2: Build a Huffman Tree and Generate Huffman Codes\n")?;
    writeln!(out, "{:<15}{:<20}", "Character", "Huffman Code")?;
    writeln!(out, "{}", "-".repeat(35))?;
    for (&symbol, code) in session.codec.codes() {
        writeln!(out, "{:<15}{:<20}", display_symbol(symbol), code.to_string())?;
    }
    writeln!(out, "{}", "-".repeat(35))?;

    writeln!(out, "\nStep 3: Encode the Input String\n")?;
    writeln!(out, "Encoded String: {}", session.encoded)?;

    writeln!(
        out,
        "\nStep 4: Decode the Encoded String and Match it with the Original String\n"
    )?;
    let decoded: String = session.decoded.iter().collect();
    writeln!(out, "Decoded String: {}", decoded)?;
    if session.matches() {
        writeln!(out, "The decoded string matches the original!")?;
    } else {
        writeln!(out, "Error: Decoded string does not match the original.")?;
    }

    let symbols = session.text.len();
    let encoded_bits = session.encoded.len();
    writeln!(out, "\nStep 5: Analyze and Compare the Sizes\n")?;
    writeln!(
        out,
        "Original Size (in bits): {}",
        symbols as u64 * u64::from(bits_per_symbol)
    )?;
    writeln!(out, "Encoded Size (in bits): {}", encoded_bits)?;
    writeln!(out, "Packed Size (in bytes): {}", session.encoded.to_bytes().len())?;
    writeln!(
        out,
        "Compression Ratio: {:.2}%",
        compression_ratio(encoded_bits, symbols, bits_per_symbol)
    )?;
    writeln!(
        out,
        "Entropy: {:.4} bits/symbol, average code length: {:.4} bits/symbol",
        frequency::entropy(&session.frequencies),
        session.codec.average_code_len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip() {
        let session = Session::run("aaabbc").unwrap();
        assert!(session.matches());
        assert_eq!(session.encoded.to_string(), "000111110");
    }

    #[test]
    fn test_session_empty_text() {
        assert!(Session::run("").is_err());
    }

    #[test]
    fn test_compression_ratio() {
        assert!((compression_ratio(9, 6, 8) - 18.75).abs() < 1e-9);
        assert_eq!(compression_ratio(0, 0, 8), 0.0);
    }

    #[test]
    fn test_write_session() {
        let session = Session::run("a b").unwrap();
        let mut out = Vec::new();
        write_session(&mut out, &session, 8).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Total          3"));
        assert!(out.contains("' '"));
        assert!(out.contains("Decoded String: a b"));
        assert!(out.contains("The decoded string matches the original!"));
        assert!(out.contains("Original Size (in bits): 24"));
        assert!(out.contains("Encoded Size (in bits): 5"));
        assert!(out.contains("Packed Size (in bytes): 1"));
    }
}
