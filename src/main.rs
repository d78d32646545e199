use clap::Parser;
use phonecat::adapters::render::render;
use phonecat::core::{ConfigProvider, ViewModel};
use phonecat::utils::{logger, validation::Validate};
use phonecat::{CliConfig, PhonecatApp, PhonecatError, Settlement, TomlConfig};

fn fail(e: &PhonecatError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn init_logging(verbose: bool, json: bool) {
    if json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C) {
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let app = match PhonecatApp::bootstrap(config) {
        Ok(app) => app,
        Err(e) => fail(&e),
    };

    // orderProp is already set; the list arrives later.
    let view = app.mount_phone_list();
    println!("{}", render(&view.scope.snapshot()));

    match view.activation.settled().await {
        Settlement::Populated { count } => {
            tracing::info!("✅ Loaded {} phones", count);
        }
        Settlement::Dropped(e) => {
            tracing::warn!("Phone list unavailable: {}", e.user_friendly_message());
        }
        Settlement::Aborted => {
            tracing::warn!("Phone list request was aborted");
        }
    }

    println!();
    println!("{}", render(&view.scope.snapshot()));
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => {
                init_logging(
                    cli.verbose || file_config.verbose(),
                    cli.json_logs || file_config.json_logs(),
                );
                tracing::debug!("File config: {:?}", file_config);
                run(&file_config).await;
            }
            Err(e) => {
                init_logging(cli.verbose, cli.json_logs);
                fail(&e);
            }
        },
        None => {
            init_logging(cli.verbose, cli.json_logs);
            tracing::debug!("CLI config: {:?}", cli);
            run(&cli).await;
        }
    }
}
