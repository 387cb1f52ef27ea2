use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wpsl_i18n::{ResolverConfig, Settings, load_config_from_file, load_settings_from_file};

fn cli() -> Command {
    Command::new("wpsl-i18n")
        .version("0.1.0")
        .about("Resolve store locator texts through the installed multilingual provider")
        .arg(
            Arg::new("settings")
                .long("settings")
                .short('s')
                .help("JSON file with the admin settings")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("JSON file with the resolver configuration and simulated host")
                .global(true),
        )
        .arg(
            Arg::new("no-original-id")
                .long("no-original-id")
                .help("Return nothing for entities without a translated copy")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log how each lookup was resolved")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("translate")
                .about("Translate the setting stored under KEY")
                .arg(Arg::new("key").required(true).index(1))
                .arg(
                    Arg::new("text")
                        .help("Default text (default: the stored setting)")
                        .index(2),
                ),
        )
        .subcommand(Command::new("suffix").about("Print the language suffix"))
        .subcommand(
            Command::new("entity")
                .about("Print the translated id of an entity")
                .arg(Arg::new("id").required(true).index(1)),
        )
        .subcommand(
            Command::new("setting")
                .about("Print the setting for the active language")
                .arg(Arg::new("key").required(true).index(1)),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let settings = match matches.get_one::<String>("settings") {
        Some(path) => load_settings_from_file(Path::new(path))?,
        None => Settings::new(),
    };
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => load_config_from_file(Path::new(path))?,
        None => ResolverConfig::default(),
    };
    if matches.get_flag("no-original-id") {
        config.return_original_entity_id = false;
    }
    debug!(settings = settings.len(), capabilities = ?config.host.capabilities, "Loaded input");

    let resolver = config.build_resolver(settings);

    let output = match matches.subcommand() {
        Some(("translate", args)) => {
            let key = args.get_one::<String>("key").map(String::as_str).unwrap_or_default();
            let text = match args.get_one::<String>("text") {
                Some(text) => text.clone(),
                None => resolver.context().settings().get_unslashed(key),
            };
            resolver.get_translation(key, &text)
        }
        Some(("suffix", _)) => resolver.get_language_suffix(),
        Some(("entity", args)) => {
            let id = args.get_one::<String>("id").map(String::as_str).unwrap_or_default();
            resolver.get_translated_entity_id(id)
        }
        Some(("setting", args)) => {
            let key = args.get_one::<String>("key").map(String::as_str).unwrap_or_default();
            resolver.get_localized_setting(key)
        }
        _ => return Err("Unknown command".into()),
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["wpsl-i18n", "translate", "tagline", "--no-original-id"])
            .unwrap();
        assert!(matches.get_flag("no-original-id"));
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "translate");
        assert_eq!(args.get_one::<String>("key").map(String::as_str), Some("tagline"));
        assert!(args.get_one::<String>("text").is_none());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(cli().try_get_matches_from(["wpsl-i18n"]).is_err());
    }
}
