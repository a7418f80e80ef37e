//! Benchmark for static PIX payload encoding.
//!
//! Loads payment requests from a JSON file (or synthesizes them when the file
//! is missing), encodes each one and reports throughput and payload sizes.

use std::fs;
use std::path::Path;
use std::time::Instant;

use pix_brcode::{verify_checksum, KeyKind, PaymentRequest};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// =============================================================================
// SYNTHETIC DATA
// =============================================================================

const NAMES: &[&str] = &[
    "João da Silva",
    "Maria Aparecida dos Santos Oliveira",
    "Müller & Co.",
    "Padaria Pão Quente Ltda.",
    "",
];

const CITIES: &[&str] = &["São Paulo", "Florianópolis", "Rio de Janeiro", "Brasília", ""];

/// Builds `count` requests cycling through every key shape.
fn synthesize(count: usize) -> Vec<PaymentRequest> {
    (0..count)
        .map(|i| {
            let key = match i % 4 {
                0 => format!("119{:08}", i % 100_000_000),
                1 => format!("cliente{i}@mail.com"),
                2 => format!(
                    "{:03}.{:03}.{:03}-{:02}",
                    i % 1000,
                    (i / 7) % 1000,
                    (i / 11) % 1000,
                    i % 100
                ),
                _ => Uuid::new_v4().to_string(),
            };
            PaymentRequest::new(key, (i % 100_000) as f64 * 1.37)
                .with_name(NAMES[i % NAMES.len()])
                .with_city(CITIES[i % CITIES.len()])
        })
        .collect()
}

fn load_requests(path: &str) -> Vec<PaymentRequest> {
    if !Path::new(path).exists() {
        tracing::info!(path, "input not found, synthesizing requests");
        return synthesize(100_000);
    }

    let json_data = fs::read_to_string(path).expect("Failed to read requests file");
    serde_json::from_str(&json_data).expect("Failed to parse JSON")
}

// =============================================================================
// MAIN
// =============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/requests.json".to_string());

    println!("Loading requests from: {}", data_path);

    let load_start = Instant::now();
    let requests = load_requests(&data_path);
    let load_time = load_start.elapsed();

    println!("Loaded {} requests in {:?}", requests.len(), load_time);

    let encode_start = Instant::now();
    let mut payloads = Vec::with_capacity(requests.len());
    let mut failures = 0usize;
    for request in &requests {
        match request.encode() {
            Ok(payload) => payloads.push(payload),
            Err(err) => {
                failures += 1;
                tracing::warn!(key = %request.payee_key, %err, "encode failed");
            }
        }
    }
    let encode_time = encode_start.elapsed();

    let total_bytes: usize = payloads.iter().map(String::len).sum();
    let max_len = payloads.iter().map(String::len).max().unwrap_or(0);
    let unverified = payloads.iter().filter(|p| !verify_checksum(p)).count();

    let mut kinds = [0usize; 6];
    for request in &requests {
        let kind = pix_brcode::normalize_key(&request.payee_key).kind();
        kinds[kind as usize] += 1;
    }

    println!();
    println!("=== Encoding ===");
    println!("Payloads:        {}", payloads.len());
    println!("Failures:        {}", failures);
    println!("Time:            {:?}", encode_time);
    if !payloads.is_empty() {
        println!("Per payload:     {:?}", encode_time / payloads.len() as u32);
        println!("Avg length:      {:.1}", total_bytes as f64 / payloads.len() as f64);
    }
    println!("Max length:      {}", max_len);
    println!("Bad checksums:   {}", unverified);

    println!();
    println!("=== Key kinds ===");
    for kind in [
        KeyKind::Phone,
        KeyKind::Email,
        KeyKind::Cpf,
        KeyKind::Cnpj,
        KeyKind::Random,
        KeyKind::Unknown,
    ] {
        println!("{:<16} {}", format!("{kind:?}:"), kinds[kind as usize]);
    }
}
