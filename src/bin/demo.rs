//! gsw-demo: evaluate boolean gates on encrypted bits
//!
//! Generates a key pair, encrypts the inputs of every two-bit combination,
//! runs each homomorphic gate, and checks the decrypted results against the
//! plaintext truth tables.

use std::time::Instant;

use clap::Parser;
use eyre::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gsw_fhe::math::NoiseSampler;
use gsw_fhe::params::LweParams;
use gsw_fhe::{and, decrypt, encrypt, generate_key, nand, not, or, xor};

#[derive(Parser)]
#[command(name = "gsw-demo")]
#[command(about = "Evaluate boolean gates on encrypted bits")]
#[command(version)]
struct Args {
    /// Random seed for deterministic runs (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Noise bound for key-generation errors
    #[arg(long, default_value = "6")]
    noise_bound: u64,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let params = LweParams {
        noise_bound: args.noise_bound,
        ..LweParams::toy_n4_q30()
    };
    params
        .validate()
        .map_err(|e| eyre::eyre!("invalid parameters: {}", e))?;

    info!("GSW bit-FHE demo");
    info!(
        "n = {}, m = {}, ℓ = {}, N = {}, noise bound = {}",
        params.n,
        params.m,
        params.ell(),
        params.ct_width(),
        params.noise_bound
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut noise = NoiseSampler::with_seed(params.noise_bound, seed.wrapping_add(1));
    info!("seed = {}", seed);

    let keygen_start = Instant::now();
    let keys = generate_key(&params, &mut rng, &mut noise)?;
    info!("key generation took {:?}", keygen_start.elapsed());

    for m in [false, true] {
        let ct = encrypt(m, &keys.public, &mut rng)?;
        let negated = not(&ct, &keys.public)?;
        info!(
            "NOT {} = {} (expected {})",
            m,
            decrypt(&negated, &keys.secret)?,
            !m
        );
    }

    let gate_start = Instant::now();
    let mut failures = 0usize;
    for m1 in [false, true] {
        for m2 in [false, true] {
            let c1 = encrypt(m1, &keys.public, &mut rng)?;
            let c2 = encrypt(m2, &keys.public, &mut rng)?;

            let results = [
                ("AND", decrypt(&and(&c1, &c2, &keys.public)?, &keys.secret)?, m1 & m2),
                ("OR", decrypt(&or(&c1, &c2, &keys.public)?, &keys.secret)?, m1 | m2),
                ("NAND", decrypt(&nand(&c1, &c2, &keys.public)?, &keys.secret)?, !(m1 & m2)),
                ("XOR", decrypt(&xor(&c1, &c2, &keys.public)?, &keys.secret)?, m1 ^ m2),
            ];

            for (name, got, expected) in results {
                if got != expected {
                    failures += 1;
                }
                info!(
                    "{} {} {} = {} (expected {})",
                    m1, name, m2, got, expected
                );
            }
        }
    }
    info!("gate evaluation took {:?}", gate_start.elapsed());

    if failures > 0 {
        return Err(eyre::eyre!("{} gate evaluations decrypted wrong", failures));
    }
    info!("all gates decrypted correctly");
    Ok(())
}
