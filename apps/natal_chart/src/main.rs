use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use urania::chart::{ChartFailure, ChartOutcome, ChartRequest, NatalChartService};
use urania::ephemeris::EphemerisProvider;
use urania::geocoding::{Geocoder, LocationResolver, NominatimGeocoder, NominatimSettings};
use urania::{GeoLocation, SwissEphemerisAdapter};
use urania_config::UraniaSettings;

const USAGE: &str = "Usage: natal_chart <date> <time> <location>";

const EXIT_OK: u8 = 0;
const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(author, version, about = "Natal chart summary as JSON")]
struct Args {
    #[arg(help = "Birth date, YYYY-MM-DD")]
    date: String,

    #[arg(help = "Birth time, HH:MM (24-hour, read as UTC)")]
    time: String,

    #[arg(help = "Birth place, free text")]
    location: String,

    /// Config file (default: configs/urania.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Birth time is unknown; the configured substitute time is used instead.
    #[arg(long, default_value_t = false)]
    unknown_time: bool,

    /// Print single-line JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (outcome, pretty, status) = match parse_args(std::env::args_os()) {
        Ok(args) => {
            let pretty = !args.compact;
            let (outcome, status) = execute(args, build_service);
            (outcome, pretty, status)
        }
        Err(usage) => (usage, true, EXIT_FAILURE),
    };
    emit(&outcome, pretty);
    ExitCode::from(status)
}

/// Parse the command line. Anything but help/version output that clap
/// rejects becomes the usage error document.
fn parse_args<I, T>(argv: I) -> Result<Args, ChartOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            log::debug!("argument error: {}", e);
            Err(ChartOutcome::Failed(ChartFailure::message(USAGE)))
        }
    }
}

/// Load settings, build the service and compute one chart. Returns the
/// document to print and the exit status.
fn execute<G, E, F>(args: Args, build: F) -> (ChartOutcome, u8)
where
    G: Geocoder,
    E: EphemerisProvider,
    F: FnOnce(&UraniaSettings) -> anyhow::Result<NatalChartService<G, E>>,
{
    let settings = match urania_config::load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            let failure = ChartFailure::message(format!("Invalid configuration: {e:#}"));
            return (ChartOutcome::Failed(failure), EXIT_FAILURE);
        }
    };

    let mut service = match build(&settings) {
        Ok(service) => service,
        Err(e) => {
            let failure = ChartFailure::missing_dependency(format!("{e:#}"));
            return (ChartOutcome::Failed(failure), EXIT_FAILURE);
        }
    };

    let mut request = ChartRequest::new(args.date, args.time, args.location);
    if args.unknown_time {
        request = request.with_time(settings.unknown_time.clone());
    }

    // Calculation failures are reported in the document, not the exit status.
    (service.run(&request), EXIT_OK)
}

fn build_service(
    settings: &UraniaSettings,
) -> anyhow::Result<NatalChartService<NominatimGeocoder, SwissEphemerisAdapter>> {
    let ephemeris = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())?;

    let fallback = GeoLocation {
        lat: settings.fallback_lat,
        lon: settings.fallback_lon,
    };
    let resolver = if settings.geocoder_enabled {
        let geocoder = NominatimGeocoder::new(&NominatimSettings {
            endpoint: settings.geocoder_endpoint.clone(),
            user_agent: settings.user_agent.clone(),
            timeout: settings.geocoder_timeout,
        })?;
        LocationResolver::new(geocoder)
    } else {
        log::info!("Geocoding disabled; all places resolve to the fallback location");
        LocationResolver::offline()
    };

    Ok(NatalChartService::new(resolver.with_fallback(fallback), ephemeris))
}

fn emit(outcome: &ChartOutcome, pretty: bool) {
    match outcome.to_json(pretty) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            log::error!("Failed to serialize chart output: {}", e);
            println!(r#"{{"error": "Failed to serialize chart output"}}"#);
        }
    }
}
