//! Synthetic transcript generator for stress testing chatpulse.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_transcript -- 100000 heavy_chat.txt

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &[
    "😀", "😂", "😍", "🥰", "😘", "🤔", "🙄", "😱", "🔥", "👍", "🎉", "🚀", "🌈", "❤️", "✂️", "💀",
];

const AUTHORS: &[&str] = &[
    "Ali",
    "Ayşe",
    "Mehmet",
    "Zeynep",
    "Bob",
    "Ali Veli",
    "+90 555 123 45 67",
    "🔥Ateş🔥",
];

const WORDS: &[&str] = &[
    "merhaba", "selam", "nasılsın", "bugün", "yarın", "akşam", "toplantı", "kahve", "film", "evet",
    "hayır", "tamam", "bence", "güzel", "gerçekten", "şimdi", "geliyorum", "yolda", "ok", "ne",
];

const APOLOGIES: &[&str] = &["özür dilerim", "pardon", "affet beni", "kusura bakma"];

const AFFECTION: &[&str] = &["seni seviyorum", "canım", "aşkım", "<3", "❤️", "😘", "love"];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!();

    generate(count, output)
}

fn generate(count: usize, output: &str) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;
    let mut clock = start_time();

    for i in 0..count {
        clock += next_gap(&mut rng);
        let author = AUTHORS.choose(&mut rng).copied().unwrap_or("Ali");
        let body = generate_body(&mut rng, i);

        let line = format!("{} - {}: {}\n", format_timestamp(clock, i), author, body);
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Occasionally insert lines the classifier must skip
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            bytes_written += garbage.len();
            writer.write_all(garbage.as_bytes())?;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!("\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)", i + 1, count, mb, mps);
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {mb:.2} MB");
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", count as f64 / elapsed.as_secs_f64());
    Ok(())
}

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

/// Mostly quick replies, with an occasional silence long enough to start
/// a new conversation.
fn next_gap(rng: &mut impl Rng) -> Duration {
    if rng.gen_bool(0.02) {
        Duration::minutes(rng.gen_range(181..=2_000))
    } else {
        Duration::minutes(rng.gen_range(0..=15))
    }
}

/// Alternates between the header variants exports use: with and without
/// the comma, and with four- and two-digit years.
fn format_timestamp(at: NaiveDateTime, index: usize) -> String {
    match index % 4 {
        0 | 1 => at.format("%d.%m.%Y, %H:%M").to_string(),
        2 => at.format("%d.%m.%y, %H:%M").to_string(),
        _ => at.format("%-d.%-m.%Y %H:%M").to_string(),
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=4 => random_sentence(rng),
        5 => format!("{} {}", APOLOGIES.choose(rng).copied().unwrap_or("pardon"), random_sentence(rng)),
        6 => format!("{} {}", random_sentence(rng), AFFECTION.choose(rng).copied().unwrap_or("canım")),
        7 => {
            let emojis: String = (0..rng.gen_range(1..=5))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{} {}", random_sentence(rng), emojis)
        }
        // Multi-line message: the tail becomes a continuation line
        8 => format!("{}\n{}", random_sentence(rng), random_sentence(rng)),
        9 => "<Medya dahil edilmedi>".to_string(),
        10 => String::new(),
        _ => format!("Mixed: Hello Привет 你好 🌍 #{index}"),
    }
}

fn random_sentence(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..=12);
    (0..len)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..5) {
        0 => "Messages and calls are end-to-end encrypted.\n".to_string(),
        1 => "31.02.2024, 10:00 - Ghost: impossible date\n".to_string(),
        2 => "-------------------------------------------\n".to_string(),
        3 => "\n".to_string(),
        _ => "☠️💀👻 Random emoji line 👻💀☠️\n".to_string(),
    }
}
