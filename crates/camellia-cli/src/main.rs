//! Command-line interface for the Camellia workspace.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use camellia_core::{decrypt_block, derive_subkeys, encrypt_block, CamelliaKey};
use camellia_modes::{decrypt_cbc, decrypt_ecb, encrypt_cbc, encrypt_ecb};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Camellia CLI.
#[derive(Parser)]
#[command(
    name = "camellia",
    version,
    author,
    about = "Camellia block cipher CLI (ECB/CBC)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Chaining mode selector.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Electronic codebook: independent blocks.
    Ecb,
    /// Cipher block chaining: requires an IV.
    Cbc,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file (length must be a multiple of 16 bytes).
    Enc {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Chaining mode.
        #[arg(long, value_enum, default_value = "cbc")]
        mode: Mode,
        /// IV as 32 hex characters (CBC only).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output file.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file (length must be a multiple of 16 bytes).
    Dec {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Chaining mode.
        #[arg(long, value_enum, default_value = "cbc")]
        mode: Mode,
        /// IV as 32 hex characters (CBC only).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output file.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Verify the build against the published test vectors.
    Check,
    /// Run a local demo: random key and IV, CBC round trip over random data.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            mode,
            iv_hex,
            input,
            output,
        } => cmd_transform(true, &key_hex, mode, iv_hex.as_deref(), &input, &output),
        Commands::Dec {
            key_hex,
            mode,
            iv_hex,
            input,
            output,
        } => cmd_transform(false, &key_hex, mode, iv_hex.as_deref(), &input, &output),
        Commands::Check => cmd_check(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_transform(
    encrypt: bool,
    key_hex: &str,
    mode: Mode,
    iv_hex: Option<&str>,
    input: &PathBuf,
    output: &PathBuf,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let subkeys = derive_subkeys(&key);

    let mut data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    if data.len() % 16 != 0 {
        bail!("input length must be a multiple of 16 bytes");
    }

    match mode {
        Mode::Ecb => {
            if iv_hex.is_some() {
                bail!("--iv-hex only applies to CBC mode");
            }
            if encrypt {
                encrypt_ecb(&subkeys, &mut data)?;
            } else {
                decrypt_ecb(&subkeys, &mut data)?;
            }
        }
        Mode::Cbc => {
            let mut iv = parse_iv_hex(iv_hex.context("CBC mode requires --iv-hex")?)?;
            if encrypt {
                encrypt_cbc(&subkeys, &mut data, &mut iv)?;
            } else {
                decrypt_cbc(&subkeys, &mut data, &mut iv)?;
            }
        }
    }

    fs::write(output, data).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_check() -> Result<()> {
    // RFC 3713 vectors: one plaintext, three key lengths.
    const PLAIN_HEX: &str = "0123456789abcdeffedcba9876543210";
    const VECTORS: [(&str, &str); 3] = [
        (
            "0123456789abcdeffedcba9876543210",
            "67673138549669730857065648eabe43",
        ),
        (
            "0123456789abcdeffedcba98765432100011223344556677",
            "b4993401b3e996f84ee5cee7d79b09b9",
        ),
        (
            "0123456789abcdeffedcba987654321000112233445566778899aabbccddeeff",
            "9acc237dff16d76c20ef7c919e3a7509",
        ),
    ];

    let plain_bytes = hex::decode(PLAIN_HEX).context("decode plaintext hex")?;
    let mut block = [0u8; 16];
    block.copy_from_slice(&plain_bytes);

    for (key_hex, cipher_hex) in VECTORS {
        let key = parse_key_hex(key_hex)?;
        let subkeys = derive_subkeys(&key);
        let ciphertext = encrypt_block(&block, &subkeys);
        if hex::encode(ciphertext) != cipher_hex {
            bail!("encrypt mismatch for the {}-bit key vector", key.bits());
        }
        if decrypt_block(&ciphertext, &subkeys) != block {
            bail!("decrypt mismatch for the {}-bit key vector", key.bits());
        }
        println!("camellia-{}: ok", key.bits());
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let key = CamelliaKey::from(key_bytes);
    let subkeys = derive_subkeys(&key);

    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut iv);
    let mut data = [0u8; 48];
    rng.fill_bytes(&mut data);
    let plaintext_hex = hex::encode(data);

    let mut chain = iv;
    encrypt_cbc(&subkeys, &mut data, &mut chain)?;
    let ciphertext_hex = hex::encode(data);

    let mut chain = iv;
    decrypt_cbc(&subkeys, &mut data, &mut chain)?;
    let decrypted_hex = hex::encode(data);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("demo iv: {}", hex::encode(iv));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted: {}", decrypted_hex);
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<CamelliaKey> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Ok(CamelliaKey::try_from(bytes.as_slice())?)
}

fn parse_iv_hex(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).context("decode iv hex")?;
    if bytes.len() != 16 {
        bail!("IV must be 16 bytes (32 hex characters)");
    }
    let mut iv = [0u8; 16];
    iv.copy_from_slice(&bytes);
    Ok(iv)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
