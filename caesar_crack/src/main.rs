use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use classic_ciphers::analysis::{letter_count, rank_shifts, CaesarCandidate};
use classic_ciphers::{crack_caesar, CaesarCrack};

/// Command-line arguments for the Caesar cracker.
#[derive(Parser, Debug)]
#[command(version, about = "Breaks Caesar-encrypted text, one line at a time")]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: PathBuf,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<PathBuf>,

    /// Number of best-scoring shifts to list for every line
    #[arg(short, long, default_value_t = 0)]
    candidates: usize,
}

/// Below this many letters the frequency peak is rarely reliable
const MIN_RELIABLE_LETTERS: usize = 20;

/// Cracks every line of the input independently.
fn crack_lines(content: &str) -> Vec<CaesarCrack> {
    content.lines().map(crack_caesar).collect()
}

/// The `count` best shifts of a line; nothing is scored when `count` is 0.
fn top_candidates(line: &str, count: usize) -> Vec<CaesarCandidate> {
    if count == 0 {
        return Vec::new();
    }

    let mut ranked = rank_shifts(line);
    ranked.truncate(count);
    ranked
}

/// Main entry point for the Caesar cracker.
fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();

    let content: String = fs::read_to_string(&cli.file)
        .map_err(|e| format!("Failed to read {}: {}", cli.file.display(), e))?;

    let results = crack_lines(&content);

    for (number, (line, cracked)) in content.lines().zip(&results).enumerate() {
        let letters = letter_count(line);
        if letters > 0 && letters < MIN_RELIABLE_LETTERS {
            eprintln!(
                "Warning: line {} has only {} letters, the shift may be wrong",
                number + 1,
                letters
            );
        }

        println!("Best shift: {}", cracked.shift);
        for candidate in top_candidates(line, cli.candidates) {
            println!("  shift {:2} -> score {:.3}", candidate.shift, candidate.score);
        }
        println!("Decrypted text:\n{}", cracked.plaintext);
    }

    if let Some(output) = &cli.output {
        let decrypted: Vec<&str> = results.iter().map(|r| r.plaintext.as_str()).collect();
        fs::write(output, decrypted.join("\n") + "\n")
            .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classic_ciphers::Ciphers;

    #[test]
    fn test_lines_are_independent() {
        let first = Ciphers::caesar_encrypt_letters(
            3,
            "It was the best of times, it was the worst of times, \
             it was the age of wisdom, it was the age of foolishness.",
        );
        let second = Ciphers::caesar_encrypt_letters(
            7,
            &"THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(3),
        );
        let content = format!("{}\n\n{}\n", first, second);

        let results = crack_lines(&content);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].shift, 3);
        assert_eq!(results[1].shift, 0);
        assert_eq!(results[1].plaintext, "");
        assert_eq!(results[2].shift, 7);
    }

    #[test]
    fn test_top_candidates() {
        let ciphertext = Ciphers::caesar_encrypt_letters(
            3,
            "It was the best of times, it was the worst of times.",
        );
        assert!(top_candidates(&ciphertext, 0).is_empty());

        let top = top_candidates(&ciphertext, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].shift, crack_caesar(&ciphertext).shift);
        assert_eq!(top_candidates(&ciphertext, 40).len(), 26);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["caesar_crack", "--file", "in.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("in.txt"));
        assert!(cli.output.is_none());
        assert_eq!(cli.candidates, 0);
    }
}
