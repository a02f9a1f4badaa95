use clap::Parser;
use globaldrive::config::cli::EventOutcome;
use globaldrive::config::Command;
use globaldrive::core::presets::{self, PRESETS};
use globaldrive::core::session::DISCLAIMER;
use globaldrive::utils::error::ErrorSeverity;
use globaldrive::utils::{logger, validation::Validate};
use globaldrive::{
    AppConfig, CliConfig, CountryRegistry, FilePreferences, GeminiClient, GlobalDriveError,
    NameResolver, RegulationReport, Result, Role, SelectionMachine, SelectionState, Session,
    TermsGate,
};
use std::io::Write;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting globaldrive CLI");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ globaldrive failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 3,
            ErrorSeverity::Critical => 4,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let resolver = NameResolver::builtin();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Countries => {
            for country in CountryRegistry::builtin().all() {
                writeln!(out, "{}  {:<3} {}", country.flag, country.code, country.name)?;
            }
        }
        Command::Resolve { names } => {
            for name in names {
                match resolver.resolve(&name) {
                    Some(country) => writeln!(out, "{} -> {}", name, country)?,
                    None => writeln!(out, "{} -> (not selectable)", name)?,
                }
            }
        }
        Command::Simulate { events } => {
            let mut machine = SelectionMachine::new();
            for event in &events {
                let outcome = event.apply(&mut machine, &resolver);
                let label = match &outcome {
                    EventOutcome::Applied => "applied".to_string(),
                    EventOutcome::Ignored => "ignored".to_string(),
                    EventOutcome::Rejected(e) => format!("rejected: {}", e),
                    EventOutcome::Unresolved(reason) => format!("unresolved: {}", reason),
                };
                writeln!(out, "{:?} -> {} | {}", event, label, describe_state(machine.state()))?;
            }
        }
        Command::Presets => {
            for (index, preset) in PRESETS.iter().enumerate() {
                writeln!(
                    out,
                    "{}. [{}] {} ({} -> {})",
                    index + 1,
                    preset.category,
                    preset.label,
                    preset.origin,
                    preset.destination
                )?;
            }
        }
        Command::Query {
            origin,
            destination,
            category,
        } => {
            let origin = resolver.lookup(&origin)?;
            let destination = resolver.lookup(&destination)?;

            let mut session = open_session(&config).await?;
            session.select_via_dropdown(Role::Origin, &origin.name)?;
            session.select_via_dropdown(Role::Destination, &destination.name)?;
            session.set_category(category);

            let report = session.submit().await?;
            render_report(&mut out, report)?;
        }
        Command::Preset { number } => {
            let preset = presets::by_number(number).ok_or_else(|| GlobalDriveError::ValidationError {
                message: format!("no preset numbered {} (1-{})", number, PRESETS.len()),
            })?;

            let mut session = open_session(&config).await?;
            let report = session.run_preset(preset).await?;
            render_report(&mut out, report)?;
        }
        Command::AcceptTerms => {
            writeln!(out, "{}\n", DISCLAIMER)?;
            let gate = TermsGate::new(FilePreferences::new(&config.preferences.path));
            gate.accept().await?;
            writeln!(out, "✅ Disclaimer accepted ({})", config.preferences.path)?;
        }
    }

    Ok(())
}

async fn open_session(config: &AppConfig) -> Result<Session<GeminiClient>> {
    let gate = TermsGate::new(FilePreferences::new(&config.preferences.path));
    let accepted = gate.is_accepted().await?;
    if !accepted {
        eprintln!("{}\n", DISCLAIMER);
        return Err(GlobalDriveError::TermsNotAccepted);
    }

    let client = GeminiClient::new(&config.service, config.api_key()?)?;
    Ok(Session::new(client, accepted))
}

fn describe_state(state: &SelectionState) -> String {
    format!(
        "origin={} destination={} active={}",
        state.origin.as_deref().unwrap_or("-"),
        state.destination.as_deref().unwrap_or("-"),
        state.active_role
    )
}

fn render_report(out: &mut impl Write, report: &RegulationReport) -> Result<()> {
    writeln!(
        out,
        "== {}: {} -> {} ==\n",
        report.category, report.origin, report.destination
    )?;
    writeln!(out, "{}", report.markdown.trim_end())?;

    if !report.sources.is_empty() {
        writeln!(out, "\nSources:")?;
        for (index, source) in report.sources.iter().enumerate() {
            writeln!(out, "  {}. {} - {}", index + 1, source.title, source.uri)?;
        }
    }

    writeln!(
        out,
        "\nGenerated {}. Information provided is for reference only. Always verify with official local authorities.",
        report.fetched_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    Ok(())
}
