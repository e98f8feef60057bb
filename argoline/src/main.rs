mod options;

use anyhow::Result;
use argoidx::{AnnotatedProfile, DateWindow, ProfilesQuery};
use clap::Parser;
use options::{Cli, Lines, Query};
use std::{io::Write, path::PathBuf};
use transect::Resources;

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse() {
        Cli::Csv(query) => print_csv(&run_query(&query)?),
        Cli::Json(query) => print_json(&run_query(&query)?),
        Cli::Lines(lines) => print_lines(&lines),
    }
}

fn run_query(query: &Query) -> Result<Vec<AnnotatedProfile>> {
    let window = match query.until {
        Some(until) => DateWindow::between(query.since, until),
        None => DateWindow::since(query.since),
    };

    let profiles = ProfilesQuery::builder()
        .line(query.line.as_str())
        .radius_km(query.radius)
        .window(window)
        .variable(query.variable.clone())
        .backend(query.backend.into())
        .build()?
        .run(&resources(query.config.clone()), &query.mirror)?;
    Ok(profiles)
}

fn resources(config: Option<PathBuf>) -> Resources {
    match config {
        Some(dir) => Resources::new(Some(dir)),
        None => Resources::from_working_dir(),
    }
}

fn print_csv(profiles: &[AnnotatedProfile]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "file,date,latitude,longitude,distance_from_line,nearest_station,distance_along_line"
    )?;
    for profile in profiles {
        writeln!(
            stdout,
            "{},{},{},{},{},{},{}",
            profile.record.file,
            profile.record.date.format("%Y-%m-%dT%H:%M:%S"),
            profile.record.latitude,
            profile.record.longitude,
            profile.distance_from_line,
            profile.nearest_station,
            profile.distance_along_line,
        )?;
    }
    Ok(())
}

fn print_json(profiles: &[AnnotatedProfile]) -> Result<()> {
    let json = serde_json::to_string(profiles)?;
    println!("{json}");
    Ok(())
}

fn print_lines(lines: &Lines) -> Result<()> {
    for name in resources(lines.config.clone()).names() {
        println!("{name}");
    }
    Ok(())
}
