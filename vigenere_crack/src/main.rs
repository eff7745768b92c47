use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use classic_ciphers::analysis::{key_length_scores, letter_count};
use classic_ciphers::{crack_vigenere, KeyLengthCap, VigenereCrack, DEFAULT_MAX_KEY_LENGTH};

/// Command-line arguments for the Vigenère cracker.
#[derive(Parser, Debug)]
#[command(version, about = "Breaks Vigenère-encrypted text, one line at a time")]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: PathBuf,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<PathBuf>,

    /// Longest key length to try
    #[arg(short, long, default_value_t = DEFAULT_MAX_KEY_LENGTH, conflicts_with = "scale")]
    max_key_length: usize,

    /// Derive the longest key length from the line instead: letters / DIVISOR
    #[arg(short, long, value_name = "DIVISOR")]
    scale: Option<usize>,

    /// Print the average Index of Coincidence of every candidate length
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn key_length_cap(&self) -> KeyLengthCap {
        match self.scale {
            Some(divisor) => KeyLengthCap::Scaled { divisor },
            None => KeyLengthCap::Fixed(self.max_key_length),
        }
    }
}

/// Cracks one line with the cap resolved for that line.
fn crack_line(line: &str, cap: KeyLengthCap) -> VigenereCrack {
    crack_vigenere(line, cap.resolve_for(line))
}

fn print_ic_table(line: &str, max_key_length: usize) {
    println!("Average IC per key length:");
    for score in key_length_scores(line, max_key_length) {
        println!("  {:3} -> {:.5}", score.length, score.average_ic);
    }
}

/// Main entry point for the Vigenère cracker.
fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();
    let cap = cli.key_length_cap();

    let input: String = fs::read_to_string(&cli.file)
        .map_err(|e| format!("Failed to read {}: {}", cli.file.display(), e))?;

    let mut decrypted_lines: Vec<String> = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let letters = letter_count(line);
        let max_key_length = cap.resolve(letters);

        if letters > 0 && letters < max_key_length * 2 {
            eprintln!(
                "Warning: line {} has only {} letters for key lengths up to {}",
                number + 1,
                letters,
                max_key_length
            );
        }

        if cli.verbose {
            print_ic_table(line, max_key_length);
        }

        let cracked = crack_line(line, cap);
        if cracked.estimated_length != cracked.key_length {
            println!("Best IC at key length: {}", cracked.estimated_length);
        }
        println!("Estimated key length: {}", cracked.key_length);
        println!("Estimated key: {}", cracked.key);
        println!("Decrypted text:\n{}", cracked.plaintext);

        decrypted_lines.push(cracked.plaintext);
    }

    if let Some(output) = &cli.output {
        fs::write(output, decrypted_lines.join("\n") + "\n")
            .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classic_ciphers::Ciphers;

    const PROSE: &str = "It was the best of times, it was the worst of times, it was the age of wisdom, \
        it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity, \
        it was the season of Light, it was the season of Darkness, it was the spring of hope, \
        it was the winter of despair, we had everything before us, we had nothing before us, \
        we were all going direct to Heaven, we were all going direct the other way.";

    #[test]
    fn test_decrypt() {
        let ciphertext = Ciphers::vigenere_encrypt_letters("CRYPTO", PROSE).unwrap();
        let cracked = crack_line(&ciphertext, KeyLengthCap::default());
        assert_eq!(cracked.key, "CRYPTO");
        assert_eq!(cracked.key_length, 6);
        assert_eq!(cracked.plaintext, PROSE);
    }

    #[test]
    fn test_decrypt_when_a_multiple_wins_the_estimate() {
        let ciphertext = Ciphers::vigenere_encrypt_letters("LEMON", PROSE).unwrap();
        let cracked = crack_line(&ciphertext, KeyLengthCap::default());
        assert_eq!(cracked.estimated_length % 5, 0);
        assert_eq!(cracked.key, "LEMON");
        assert_eq!(cracked.plaintext, PROSE);
    }

    #[test]
    fn test_cap_selection() {
        let cli = Cli::try_parse_from(["vigenere_crack", "-f", "in.txt"]).unwrap();
        assert_eq!(cli.key_length_cap(), KeyLengthCap::Fixed(20));

        let cli = Cli::try_parse_from(["vigenere_crack", "-f", "in.txt", "-m", "8"]).unwrap();
        assert_eq!(cli.key_length_cap(), KeyLengthCap::Fixed(8));

        let cli = Cli::try_parse_from(["vigenere_crack", "-f", "in.txt", "--scale", "20"]).unwrap();
        assert_eq!(cli.key_length_cap(), KeyLengthCap::Scaled { divisor: 20 });
    }

    #[test]
    fn test_cap_flags_conflict() {
        let result = Cli::try_parse_from(["vigenere_crack", "-f", "in.txt", "-m", "8", "-s", "20"]);
        assert!(result.is_err());
    }
}
