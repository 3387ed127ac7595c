//! Asks a schedule file about business time from the command line.

use ansi_term::{Color, Style};
use bizhours::{BizError, BizResult, BusinessDuration, Schedule, ScheduleConfig};
use chrono::NaiveDateTime;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::path::PathBuf;
use std::process;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

struct Formatting {
    heading: Style,
    open: Style,
    closed: Style,
    error: Style,
}

fn main() {
    env_logger::init();

    let mut app = App::new("biz")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Business-hours arithmetic over a weekly schedule")
        .arg(
            Arg::with_name("file")
                .long("file")
                .short("f")
                .takes_value(true)
                .value_name("PATH")
                .help("Specifies a different schedule file"),
        )
        .subcommand(
            SubCommand::with_name("active")
                .about("Tell whether the business is open at a time")
                .arg(time_arg("time", "YYYY-MM-DD HH:MM")),
        )
        .subcommand(
            SubCommand::with_name("within")
                .about("Count the business time between two times")
                .arg(time_arg("from", "Start of the range"))
                .arg(time_arg("to", "End of the range (exclusive)")),
        )
        .subcommand(
            SubCommand::with_name("shift")
                .about("Move a time by an amount of business time")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(time_arg("time", "YYYY-MM-DD HH:MM"))
                .arg(
                    Arg::with_name("minutes")
                        .required(true)
                        .help("Business minutes to move by; negative moves backwards"),
                ),
        )
        .subcommand(
            SubCommand::with_name("periods")
                .about("List the business periods after (or before) a time")
                .arg(time_arg("time", "YYYY-MM-DD HH:MM"))
                .arg(
                    Arg::with_name("count")
                        .long("count")
                        .short("n")
                        .takes_value(true)
                        .default_value("5")
                        .help("How many periods to list"),
                )
                .arg(
                    Arg::with_name("before")
                        .long("before")
                        .help("List periods before the time, latest first"),
                ),
        )
        .subcommand(
            SubCommand::with_name("init").about("Write the default schedule to the schedule file"),
        );

    if std::env::args().count() <= 1 {
        let _ = app.print_help();
        println!();
        return;
    }

    let clap_matches = app.get_matches();

    let formatting = Formatting {
        heading: Style::new().bold(),
        open: Color::Green.bold(),
        closed: Color::Yellow.bold(),
        error: Color::Red.bold(),
    };

    if let Err(e) = run(&clap_matches, &formatting) {
        eprintln!("{} {}", formatting.error.paint("error:"), e);
        process::exit(1);
    }
}

fn time_arg<'a, 'b>(name: &'a str, help: &'b str) -> Arg<'a, 'b> {
    Arg::with_name(name).required(true).help(help)
}

fn run(matches: &ArgMatches, formatting: &Formatting) -> BizResult<()> {
    let schedule_path = match matches.value_of("file") {
        Some(path) => PathBuf::from(path),
        None => dirs::home_dir()
            .ok_or_else(|| {
                BizError::InvalidConfig(
                    "can't find a home directory; pass a schedule with --file".to_string(),
                )
            })?
            .join(".biz.yaml"),
    };

    if matches.subcommand_matches("init").is_some() {
        ScheduleConfig::default().write_to_file(&schedule_path)?;
        println!("Wrote {}", schedule_path.display());
        return Ok(());
    }

    let schedule = ScheduleConfig::from_file(&schedule_path)?.build()?;

    if let Some(m) = matches.subcommand_matches("active") {
        show_active(&schedule, parse_time(m.value_of("time"))?, formatting)
    } else if let Some(m) = matches.subcommand_matches("within") {
        let from = parse_time(m.value_of("from"))?;
        let to = parse_time(m.value_of("to"))?;
        let duration = schedule.within(from, to)?;
        println!(
            "{} ({} minutes)",
            formatting.heading.paint(duration.to_string()),
            duration.in_minutes()
        );
        Ok(())
    } else if let Some(m) = matches.subcommand_matches("shift") {
        let time = parse_time(m.value_of("time"))?;
        let minutes = parse_number(m.value_of("minutes"))?;
        let shifted = schedule.shift(time, BusinessDuration::minutes(minutes))?;
        println!("{}", formatting.heading.paint(shifted.format(TIME_FORMAT).to_string()));
        Ok(())
    } else if let Some(m) = matches.subcommand_matches("periods") {
        let time = parse_time(m.value_of("time"))?;
        let count = parse_number(m.value_of("count"))?.max(0) as usize;
        let periods = if m.is_present("before") {
            schedule.periods().before(time)
        } else {
            schedule.periods().after(time)
        };
        for period in periods.take(count) {
            println!(
                "{}  {}",
                period,
                formatting
                    .heading
                    .paint(BusinessDuration::minutes(period.minutes()).to_string())
            );
        }
        Ok(())
    } else {
        Ok(())
    }
}

fn show_active(schedule: &Schedule, time: NaiveDateTime, formatting: &Formatting) -> BizResult<()> {
    let stamp = time.format(TIME_FORMAT);
    if schedule.is_active(time) {
        println!("{} is {}", stamp, formatting.open.paint("open"));
    } else {
        let reason = if schedule.on_holiday(time) {
            "holiday"
        } else if schedule.on_break(time) {
            "on a break"
        } else {
            "outside business hours"
        };
        println!(
            "{} is {} ({})",
            stamp,
            formatting.closed.paint("closed"),
            reason
        );
    }
    Ok(())
}

fn parse_time(value: Option<&str>) -> BizResult<NaiveDateTime> {
    let value = value.unwrap_or_default();
    Ok(NaiveDateTime::parse_from_str(value.trim(), TIME_FORMAT)?)
}

fn parse_number(value: Option<&str>) -> BizResult<i64> {
    let value = value.unwrap_or_default();
    value
        .trim()
        .parse()
        .map_err(|_| BizError::InvalidFormat {
            what: "number",
            input: value.to_string(),
        })
}
