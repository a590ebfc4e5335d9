use std::time::Duration;

use chrono::NaiveDateTime;
use serde::Serialize;

use court_core::countdown::{Countdown, until};

use crate::cli::root_commands::CountdownArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render};

#[derive(Debug, Serialize)]
struct CountdownResponse {
    opener: NaiveDateTime,
    #[serde(flatten)]
    remaining: Countdown,
}

/// Handle `court countdown`.
pub async fn handle(
    args: &CountdownArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let opener = ctx.config.general.season_opener()?;
    let response = snapshot(opener);
    if !args.watch {
        return output(&response, flags.format);
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let response = snapshot(opener);
                println!("{}", tick_line(&response, flags.format)?);
                if response.remaining.is_elapsed() {
                    return Ok(());
                }
            }
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}

fn snapshot(opener: NaiveDateTime) -> CountdownResponse {
    CountdownResponse {
        opener,
        remaining: until(chrono::Local::now().naive_local(), opener),
    }
}

/// One line per tick: a clock in table mode, compact JSON otherwise.
fn tick_line(response: &CountdownResponse, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Table {
        return Ok(clock(&response.remaining));
    }
    render(response, OutputFormat::Raw)
}

fn clock(left: &Countdown) -> String {
    format!(
        "{}d {:02}h {:02}m {:02}s",
        left.days, left.hours, left.minutes, left.seconds
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use court_core::countdown::Countdown;

    use super::{CountdownResponse, clock, tick_line};
    use crate::cli::OutputFormat;

    fn response() -> CountdownResponse {
        CountdownResponse {
            opener: NaiveDate::from_ymd_opt(2025, 10, 24)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid opener"),
            remaining: Countdown {
                days: 3,
                hours: 1,
                minutes: 1,
                seconds: 30,
            },
        }
    }

    #[test]
    fn clock_pads_units() {
        assert_eq!(clock(&response().remaining), "3d 01h 01m 30s");
    }

    #[test]
    fn json_ticks_are_single_line_and_flattened() {
        let line = tick_line(&response(), OutputFormat::Json).expect("render");
        assert!(!line.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("json");
        assert_eq!(parsed["days"], 3);
        assert_eq!(parsed["opener"], "2025-10-24T00:00:00");
    }
}
