use anyhow::Context;
use mu_protocol::{catalog, Catalog, PacketCodec};

use packet_inspector::check::check_catalogs;
use packet_inspector::cli::{self, Command};
use packet_inspector::config::{self, InspectorConfig};
use packet_inspector::{decode, docs};

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists, first from the current directory, then from inspector/
    if dotenvy::dotenv().is_err() {
        dotenvy::from_filename("inspector/.env").ok();
    }

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    log::info!("Protocol version: {}", mu_protocol::protocol_version());

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, cli::USAGE);
            std::process::exit(2);
        }
    };

    let config_path = config::config_path();
    let config = InspectorConfig::load_or_default(&config_path);
    log::debug!(
        "Client {} / {} with limits {:?}",
        config.protocol.client_version,
        config.protocol.direction,
        config.protocol.limits
    );

    match command {
        Command::Docs {
            direction,
            latest_only,
        } => {
            let direction = direction.unwrap_or(config.protocol.direction);
            let include_variants = config.output.include_variants && !latest_only;
            let markdown = docs::render_catalog(Catalog::for_direction(direction), include_variants)
                .context("Failed to render the catalog")?;
            print!("{}", markdown);
        }
        Command::Decode {
            hex,
            version,
            direction,
        } => {
            let codec = PacketCodec::new(
                direction.unwrap_or(config.protocol.direction),
                version.unwrap_or(config.protocol.client_version),
                config.protocol.limits,
            );
            let packet = decode::decode_hex(&codec, &hex)
                .with_context(|| format!("Failed to decode '{}'", hex))?;
            log::info!("{} ({})", packet.descriptor.name, packet.descriptor.header);
            println!("{}", decode::render_json(&packet, config.output.pretty_json)?);
        }
        Command::Check => {
            let report = check_catalogs();
            for (direction, error) in &report.errors {
                log::error!("{}: {}", direction, error);
            }
            log::info!(
                "Checked {} server and {} client descriptors",
                catalog::SERVER.len(),
                catalog::CLIENT.len()
            );
            if !report.is_clean() {
                eprintln!("{} layout errors found", report.errors.len());
                std::process::exit(1);
            }
            println!("{} descriptors, no layout errors", report.packets);
        }
    }

    Ok(())
}
