use clap::Parser;
use caronline::{cli, client, config, error, output};
use caronline_common::validation::{CREATE_FAILED, MSG_CREATED};
use caronline_common::listing::{DELETE_FAILED, MSG_DELETED, MSG_SAVED, UPDATE_FAILED};
use caronline_common::{EditDraft, ListState, VehicleForm};
use cli::{Cli, Commands};
use client::VehicleClient;
use config::Config;
use dialoguer::Confirm;
use error::{CarOnlineError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    let verbose = cli.verbose;

    let client = VehicleClient::new(&config, verbose)?;

    match cli.command {
        Commands::List { all } => {
            let vehicles = client.list().await.map_err(|e| describe(e, "Error al obtener vehículos"))?;
            let mut state = ListState::new(vehicles);
            state.set_show_all(all);
            for vehicle in state.visible() {
                println!("{}", output::vehicle_line(vehicle));
            }
            if !state.show_all() && state.has_more() {
                println!("\n… {}件中{}件を表示（--all で全件）", state.len(), state.visible().len());
            }
        }

        Commands::Get { id } => {
            if id.trim().is_empty() {
                return Err(CarOnlineError::CliExecution("Por favor, ingresa un ID de vehículo".into()));
            }
            match client.get(&id).await {
                Ok(vehicle) => println!("{}", output::vehicle_detail(&vehicle)),
                Err(e) => {
                    if verbose {
                        eprintln!("[http] {}", e);
                    }
                    return Err(CarOnlineError::CliExecution(
                        "No se pudo obtener el vehículo. Verifica el ID.".into(),
                    ));
                }
            }
        }

        Commands::Create { marca, kilometraje, precio } => {
            let form = VehicleForm { brand: marca, mileage: kilometraje, price: precio };
            let payload = form.validate()?;
            let created = client.create(&payload).await.map_err(|e| describe(e, CREATE_FAILED))?;
            println!("✔ {}", MSG_CREATED);
            if let Some(record) = created {
                match record.vehicle() {
                    Some(vehicle) => println!("{}", output::vehicle_detail(&vehicle)),
                    None => println!("{}", serde_json::to_string_pretty(record.as_value())?),
                }
            }
        }

        Commands::Update { id, marca, kilometraje, precio } => {
            let draft = EditDraft { brand: marca, mileage: kilometraje, price: precio };
            let payload = draft.to_payload(id)?;
            client.update(&payload).await.map_err(|e| describe(e, UPDATE_FAILED))?;
            println!("✔ {}", MSG_SAVED);
        }

        Commands::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("¿Desea eliminar este vehículo? Esta acción no se puede deshacer.")
                    .default(false)
                    .interact()
                    .map_err(|e| CarOnlineError::CliExecution(e.to_string()))?;
                if !confirmed {
                    println!("Cancelado");
                    return Ok(());
                }
            }
            client.delete(id).await.map_err(|e| describe(e, DELETE_FAILED))?;
            println!("✔ {}", MSG_DELETED);
        }

        Commands::Analyze { image } => {
            println!("🔍 Analizando {} ...", image.display());
            match client.analyze_image(&image).await? {
                Some(result) => println!("{}", output::analysis_text(&result)),
                None => println!("Sin resultado"),
            }
        }

        Commands::Config { set_base_url, accept_invalid_certs, show } => {
            let mut changed = false;
            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
            }
            if let Some(accept) = accept_invalid_certs {
                config.accept_invalid_certs = accept;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }
            if show || !changed {
                println!("設定:");
                println!("  APIオリジン: {}", config.effective_base_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  自己署名証明書: {}",
                    if config.accept_invalid_certs { "許可" } else { "不許可" }
                );
            }
        }
    }

    Ok(())
}

/// HTTPエラーに操作名を付ける
fn describe(error: CarOnlineError, action: &str) -> CarOnlineError {
    match error {
        CarOnlineError::Api(e) => CarOnlineError::CliExecution(e.describe(action)),
        other => other,
    }
}
