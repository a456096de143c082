// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use milkrun_api::{
    DateCheckResponse, OrderLineView, StatusUpdateRequest, SubscriptionStatusChange,
    annotate_orders_json, build_status_update, describe_validation,
};
use milkrun_domain::{
    Clock, CutoffTime, DomainError, EditabilityDecision, FixedClock, SystemClock,
    compute_next_delivery_date, evaluate_editability, format_api_date, next_delivery_date,
};
use serde::Serialize;
use std::io::Read;
use std::process::ExitCode;
use tracing::{debug, info};

/// milkrun - inspect delivery cutoff and subscription date decisions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// IANA timezone the store delivers in. Defaults to the device zone.
    #[arg(short, long, global = true)]
    timezone: Option<String>,

    /// Evaluate as of this local time (`YYYY-MM-DDTHH:MM:SS`) instead of the clock.
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the next delivery date for a product cutoff.
    NextDelivery {
        /// Daily cutoff, `HH:MM:SS`.
        #[arg(long)]
        cutoff: Option<String>,
    },
    /// Decide whether an order line can still be changed.
    Editable {
        /// Daily cutoff, `HH:MM:SS`.
        #[arg(long)]
        cutoff: Option<String>,
        /// Order line status, any case.
        #[arg(long)]
        status: Option<String>,
        /// Delivery date: `YYYY-MM-DD` or a label such as `Monday, June 5`.
        #[arg(long)]
        delivery_date: String,
    },
    /// Validate a pause window and print the request body.
    Pause {
        /// First paused day, `YYYY-MM-DD`.
        #[arg(long, value_parser = parse_date)]
        from: NaiveDate,
        /// Last paused day, `YYYY-MM-DD`.
        #[arg(long, value_parser = parse_date)]
        to: NaiveDate,
    },
    /// Validate a reactivation date and print the request body.
    Resume {
        /// First day deliveries resume, `YYYY-MM-DD`.
        #[arg(long, value_parser = parse_date)]
        from: NaiveDate,
    },
    /// Annotate an orders response body. Reads stdin when the path is `-`.
    Orders {
        /// Path to a JSON array of order items.
        input: String,
    },
}

/// Output of `next-delivery`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NextDeliveryOutput {
    cutoff_time: Option<String>,
    delivery_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    iso_date: Option<String>,
}

/// Output of `editable`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditableOutput {
    delivery_date: String,
    #[serde(flatten)]
    decision: EditabilityDecision,
}

/// Output of `pause` and `resume`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusChangeOutput {
    check: DateCheckResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<StatusUpdateRequest>,
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|err| format!("expected YYYY-MM-DDTHH:MM:SS: {err}"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

/// Samples the clock once for the whole invocation.
fn sample_now(args: &Args) -> Result<NaiveDateTime, DomainError> {
    if let Some(now) = args.now {
        return Ok(now);
    }

    let clock: SystemClock = match &args.timezone {
        Some(name) => SystemClock::from_zone_name(name)?,
        None => SystemClock::local(),
    };
    Ok(clock.now())
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut body: String = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        std::fs::read_to_string(path)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    let rendered: String = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn run_status_change(
    change: SubscriptionStatusChange,
    now: NaiveDateTime,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let check: DateCheckResponse = describe_validation(change.validate(now));
    let request: Option<StatusUpdateRequest> = build_status_update(change, now).ok();
    let exit: ExitCode = if check.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    print_json(&StatusChangeOutput { check, request })?;
    Ok(exit)
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let now: NaiveDateTime = sample_now(args)?;
    debug!(now = %now, "Sampled clock");

    match &args.command {
        Command::NextDelivery { cutoff } => {
            let iso_date: Option<String> = CutoffTime::parse_optional(cutoff.as_deref())
                .map(|parsed| format_api_date(next_delivery_date(&parsed, now)));
            print_json(&NextDeliveryOutput {
                cutoff_time: cutoff.clone(),
                delivery_date: compute_next_delivery_date(cutoff.as_deref(), now),
                iso_date,
            })?;
        }
        Command::Editable {
            cutoff,
            status,
            delivery_date,
        } => {
            let decision: EditabilityDecision =
                evaluate_editability(cutoff.as_deref(), status.as_deref(), delivery_date, now);
            print_json(&EditableOutput {
                delivery_date: delivery_date.clone(),
                decision,
            })?;
        }
        Command::Pause { from, to } => {
            return run_status_change(
                SubscriptionStatusChange::Pause {
                    from: *from,
                    to: *to,
                },
                now,
            );
        }
        Command::Resume { from } => {
            return run_status_change(SubscriptionStatusChange::Resume { from: *from }, now);
        }
        Command::Orders { input } => {
            let body: String = read_input(input)?;
            let views: Vec<OrderLineView> = annotate_orders_json(&body, &FixedClock::new(now))?;
            info!(count = views.len(), "Annotated order lines");
            print_json(&views)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing on stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting milkrun");

    run(&args)
}
