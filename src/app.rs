use serde_json::json;

use crate::cli::{ActiveCommands, ClampArgs, Cli, Commands, ConfigCommands, DefaultsArgs};
use crate::config::{Config, SettingsBackend};
use crate::error::AppError;
use crate::output::{
    SessionRow, print_clamped, print_json, print_range, print_session_table, print_shared_config,
};
use crate::session::{
    ClampRequest, ControlKind, DateControl, SessionResolver, SessionWindow, TextControl,
};
use crate::store::{
    BoxedSettingsStore, FileDeviceStore, RestSettingsStore, SqliteSettingsStore,
};
use crate::utils::{Clock, Timezone, parse_date};

fn open_settings_store(cli: &Cli, config: &Config) -> Result<BoxedSettingsStore, AppError> {
    let settings = &config.settings;
    match settings.backend.unwrap_or_default() {
        SettingsBackend::Sqlite => {
            let path = cli
                .settings_db
                .clone()
                .unwrap_or_else(|| Config::data_dir().join("settings.db"));
            Ok(Box::new(SqliteSettingsStore::open(&path)?))
        }
        SettingsBackend::Rest => {
            let url = settings
                .url
                .as_deref()
                .ok_or(AppError::MissingSetting { name: "settings.url" })?;
            let api_key = settings
                .api_key
                .as_deref()
                .ok_or(AppError::MissingSetting {
                    name: "settings.api_key",
                })?;
            Ok(Box::new(RestSettingsStore::new(
                url,
                api_key,
                settings.table.as_deref(),
            )))
        }
    }
}

fn parse_clock(today: Option<&str>) -> Result<Clock, AppError> {
    match today {
        Some(raw) => parse_date(raw)
            .map(Clock::Fixed)
            .ok_or_else(|| AppError::InvalidDate {
                input: raw.to_string(),
            }),
        None => Ok(Clock::System),
    }
}

fn config_window(config: &Config) -> SessionWindow {
    let defaults = SessionWindow::default();
    SessionWindow {
        past: config.past.unwrap_or(defaults.past),
        future: config.future.unwrap_or(defaults.future),
    }
}

/// Wire stores, timezone and clock into a resolver.
pub(crate) fn build_resolver(cli: &Cli, config: &Config) -> Result<SessionResolver, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let clock = parse_clock(cli.today.as_deref())?;
    let settings = open_settings_store(cli, config)?;
    let device_path = cli
        .state_file
        .clone()
        .unwrap_or_else(|| Config::data_dir().join("device.json"));
    let device = Box::new(FileDeviceStore::new(device_path));

    Ok(SessionResolver::new(settings, device, timezone, clock).with_window(config_window(config)))
}

fn handle_current(resolver: &SessionResolver, cli: &Cli) -> Result<(), AppError> {
    let label = resolver.current_label();
    if cli.json {
        print_json(&json!({ "label": label }))
    } else {
        println!("{label}");
        Ok(())
    }
}

fn handle_range(
    resolver: &SessionResolver,
    cli: &Cli,
    label: Option<&str>,
) -> Result<(), AppError> {
    let label = label.map_or_else(|| resolver.active_label(), str::to_string);
    let range = resolver.session_range(&label);
    if cli.json {
        print_json(&range)
    } else {
        print_range(&range);
        Ok(())
    }
}

fn handle_list(
    resolver: &SessionResolver,
    cli: &Cli,
    past: Option<u32>,
    future: Option<u32>,
) -> Result<(), AppError> {
    let shared = resolver.load_shared_config();
    let base = resolver.window();
    let window = SessionWindow {
        past: past.unwrap_or(base.past),
        future: future.unwrap_or(base.future),
    };

    let current = resolver.current_label();
    let active = resolver.active_label();
    let default = shared.as_ref().and_then(|c| c.default_label());
    let rows: Vec<SessionRow> = resolver
        .list_labels(window)
        .iter()
        .map(|label| SessionRow::new(&resolver.session_range(label), &current, default, &active))
        .collect();

    if cli.json {
        print_json(&rows)
    } else {
        print_session_table(&rows, cli.use_color());
        Ok(())
    }
}

fn handle_clamp(resolver: &SessionResolver, cli: &Cli, args: &ClampArgs) -> Result<(), AppError> {
    let from = TextControl::new(args.from.clone().unwrap_or_default(), ControlKind::Text);
    let to = TextControl::new(args.to.clone().unwrap_or_default(), ControlKind::Text);
    let request = ClampRequest::from_controls(&from, &to, args.session.as_deref());
    let clamped = resolver.clamp(&request);
    if cli.json {
        print_json(&clamped)
    } else {
        print_clamped(&clamped);
        Ok(())
    }
}

fn handle_active(
    resolver: &SessionResolver,
    cli: &Cli,
    command: Option<&ActiveCommands>,
) -> Result<(), AppError> {
    if let Some(ActiveCommands::Set { label }) = command {
        resolver.set_active_label(label);
        if !cli.json {
            eprintln!("Saved {label} as this device's session");
        }
    }
    let label = resolver.active_label();
    if cli.json {
        print_json(&json!({ "label": label }))
    } else {
        println!("{label}");
        Ok(())
    }
}

fn handle_config(
    resolver: &SessionResolver,
    cli: &Cli,
    command: Option<&ConfigCommands>,
) -> Result<(), AppError> {
    let config = match command {
        Some(ConfigCommands::Save { sessions, default }) => {
            let saved = resolver.save_shared_config(sessions, default.as_deref())?;
            if !cli.json {
                eprintln!("Saved {} sessions", saved.sessions.len());
            }
            Some(saved)
        }
        Some(ConfigCommands::Show) | None => resolver.load_shared_config(),
    };
    if cli.json {
        print_json(&config)
    } else {
        print_shared_config(config.as_ref());
        Ok(())
    }
}

fn handle_defaults(
    resolver: &SessionResolver,
    cli: &Cli,
    args: &DefaultsArgs,
) -> Result<(), AppError> {
    let kind = if args.native {
        ControlKind::NativeDate
    } else {
        ControlKind::Text
    };
    let mut from = TextControl::new(args.from_value.as_str(), kind);
    let mut to = TextControl::new(args.to_value.as_str(), kind);
    resolver.apply_default_range(&mut from, &mut to, args.session.as_deref(), args.force);

    if cli.json {
        print_json(&json!({ "from": from.value(), "to": to.value() }))
    } else {
        println!("from: {}", from.value());
        println!("to:   {}", to.value());
        Ok(())
    }
}

pub(crate) fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let resolver = build_resolver(cli, config)?;

    match &cli.command {
        None | Some(Commands::Current) => handle_current(&resolver, cli),
        Some(Commands::Range { label }) => handle_range(&resolver, cli, label.as_deref()),
        Some(Commands::List { past, future }) => handle_list(&resolver, cli, *past, *future),
        Some(Commands::Clamp(args)) => handle_clamp(&resolver, cli, args),
        Some(Commands::Active { command }) => handle_active(&resolver, cli, command.as_ref()),
        Some(Commands::Config { command }) => handle_config(&resolver, cli, command.as_ref()),
        Some(Commands::Defaults(args)) => handle_defaults(&resolver, cli, args),
    }
}
