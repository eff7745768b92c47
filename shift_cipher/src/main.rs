use std::error::Error;

use clap::{Parser, ValueEnum};
use classic_ciphers::{AlphabetRange, Caesar, SubstitutionCipher, Vigenere};

/// Command-line arguments for the shift cipher program.
#[derive(Parser, Debug)]
#[command(version, about = "Caesar and Vigenère ciphers over a contiguous character range")]
struct Cli {
    /// Operation to perform
    #[arg(value_enum)]
    operation: OperationMode,

    /// Integer shift for Caesar, or a key made of in-range characters for Vigenère
    #[arg(allow_hyphen_values = true)]
    key: String,

    /// Text to encrypt or decrypt
    #[arg(allow_hyphen_values = true)]
    message: String,

    /// Lowest character of the range
    #[arg(long, default_value_t = 'A')]
    low: char,

    /// Highest character of the range
    #[arg(long, default_value_t = 'Z')]
    high: char,
}

/// Enum representing the operation to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    CaesarEncrypt,
    CaesarDecrypt,
    VigenereEncrypt,
    VigenereDecrypt,
}

impl OperationMode {
    fn is_encrypt(self) -> bool {
        matches!(self, OperationMode::CaesarEncrypt | OperationMode::VigenereEncrypt)
    }
}

/// Parses a Caesar key the way the shell hands it over: an optionally signed
/// 32-bit integer without surrounding whitespace.
fn parse_caesar_key(key: &str) -> Result<i64, String> {
    key.parse::<i32>()
        .map(i64::from)
        .map_err(|_| format!("Key must be an integer in the 32-bit range, got '{}'", key))
}

/// Builds the cipher selected on the command line.
fn build_cipher(cli: &Cli) -> Result<Box<dyn SubstitutionCipher>, Box<dyn Error>> {
    if cli.key.is_empty() {
        return Err("No key provided".into());
    }

    let range = AlphabetRange::new(cli.low, cli.high)?;

    let cipher: Box<dyn SubstitutionCipher> = match cli.operation {
        OperationMode::CaesarEncrypt | OperationMode::CaesarDecrypt => {
            Box::new(Caesar::new(range, parse_caesar_key(&cli.key)?))
        }
        OperationMode::VigenereEncrypt | OperationMode::VigenereDecrypt => {
            Box::new(Vigenere::new(range, cli.key.as_str())?)
        }
    };

    Ok(cipher)
}

/// Runs the selected operation on the message.
fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let cipher = build_cipher(cli)?;

    let result = if cli.operation.is_encrypt() {
        cipher.encrypt(&cli.message)
    } else {
        cipher.decrypt(&cli.message)
    };

    Ok(result)
}

/// Main entry point for the shift cipher program.
fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();

    let result = run(&cli)?;
    println!("{}", result);

    Ok(())
}
