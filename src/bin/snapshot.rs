//! One-shot terminal rendition of the analytics dashboard.
//!
//! Fetches the published analytics document once and prints the summary
//! counters plus the hourly message chart remapped into the requested
//! timezone.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin snapshot -- --url https://example.github.io/analytics.json
//!
//! # Shift the hourly chart into a named timezone
//! cargo run --bin snapshot -- --url ... --tz Europe/Moscow
//!
//! # Or give the offset directly (minutes behind UTC, getTimezoneOffset style)
//! cargo run --bin snapshot -- --url ... --offset 480
//! ```

use chrono::Utc;
use chrono_tz::Tz;

use statboard::config::Settings;
use statboard::dashboard::templates::format_count;
use statboard::domain::{fill_hours_data, offset_minutes_behind_utc, HOURS_PER_DAY};
use statboard::upstream::AnalyticsClient;

const BAR_WIDTH: i64 = 40;

fn print_usage() {
    eprintln!(
        r#"
Usage: snapshot [options]

Options:
  --url <url>       Analytics document URL (default: $STATBOARD__ANALYTICS_URL)
  --tz <zone>       IANA timezone for the hourly chart (default: UTC)
  --offset <min>    Offset in minutes behind UTC, overriding --tz
  --timeout <ms>    Request timeout (default: 10000)

Examples:
  cargo run --bin snapshot -- --url https://example.github.io/analytics.json
  cargo run --bin snapshot -- --url ... --tz Asia/Tokyo
"#
    );
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut url: Option<String> = None;
    let mut tz_name = "UTC".to_string();
    let mut offset_override: Option<i64> = None;
    let mut timeout_ms = 10_000u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--url" => {
                i += 1;
                url = args.get(i).cloned();
            }
            "--tz" => {
                i += 1;
                if let Some(v) = args.get(i) {
                    tz_name = v.clone();
                }
            }
            "--offset" => {
                i += 1;
                offset_override = args.get(i).and_then(|v| v.parse().ok());
                if offset_override.is_none() {
                    eprintln!("Invalid offset");
                    print_usage();
                    std::process::exit(1);
                }
            }
            "--timeout" => {
                i += 1;
                timeout_ms = match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(v) => v,
                    None => {
                        eprintln!("Invalid timeout");
                        print_usage();
                        std::process::exit(1);
                    }
                };
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let analytics_url = match url.or_else(|| std::env::var("STATBOARD__ANALYTICS_URL").ok()) {
        Some(u) => u,
        None => {
            eprintln!("No analytics URL given");
            print_usage();
            std::process::exit(1);
        }
    };

    let settings = Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        analytics_url,
        default_timezone: tz_name.clone(),
        request_timeout_ms: timeout_ms,
        cache_ttl_secs: 0,
        cache_max_entries: 0,
    };

    let client = match AnalyticsClient::new(&settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let record = match client.latest_record().await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to load analytics data: {}", e);
            std::process::exit(1);
        }
    };

    let (tz_label, offset_minutes) = match offset_override {
        Some(minutes) => (format!("UTC offset {} min", minutes), minutes),
        None => match tz_name.parse::<Tz>() {
            Ok(tz) => (
                tz.name().to_string(),
                offset_minutes_behind_utc(tz, Utc::now()),
            ),
            Err(_) => {
                eprintln!("Unknown timezone: {}", tz_name);
                std::process::exit(1);
            }
        },
    };

    let filled = fill_hours_data(&record.count_messages_per_hour, offset_minutes);

    println!("{}", "=".repeat(60));
    println!("Bot Analytics Snapshot");
    println!("{}", "=".repeat(60));
    if let Some(ts) = record.timestamp {
        println!("Generated: {}", ts.format("%Y-%m-%d %H:%M"));
    }
    println!("{:<18} {:>12}", "Total users", format_count(record.count_users));
    println!(
        "{:<18} {:>12}",
        "New users today",
        format_count(record.count_users_today)
    );
    println!(
        "{:<18} {:>12}",
        "Total messages",
        format_count(record.count_messages)
    );
    println!(
        "{:<18} {:>12}",
        "Messages today",
        format_count(record.count_messages_today)
    );

    println!("\nMessages per hour ({}):", tz_label);
    let max = filled.iter().copied().max().unwrap_or(0);
    for hour in 0..HOURS_PER_DAY {
        let count = filled[hour];
        let bar_len = if max > 0 {
            let scaled = count * BAR_WIDTH / max;
            if count > 0 && scaled == 0 {
                1
            } else {
                scaled
            }
        } else {
            0
        };
        println!(
            "{:>2}h | {:<width$} {}",
            hour,
            "#".repeat(bar_len as usize),
            format_count(count),
            width = BAR_WIDTH as usize
        );
    }
}
