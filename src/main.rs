use clap::Parser;
use fragmapper::cli::{Cli, Commands};
use fragmapper::config::RulesConfig;
use fragmapper::error::Result;
use fragmapper::router::Router;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RulesConfig::load(cli.config.as_deref())?;
    let router = Router::new(&config);

    match cli.command {
        Commands::Map { mode, input, json } => {
            let output = router.route(mode, &input)?;

            if cli.verbose {
                eprintln!("mode: {}", output.mode);
                eprintln!("normalized: {:?}", output.debug.normalized_title);
                eprintln!("excluded terms: {:?}", output.debug.excluded_terms_found);
                eprintln!("queries: {:?}", output.debug.search_queries_used);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", output.to_simple_output());
            }
        }

        Commands::Modes => {
            println!("Supported modes:");
            for mode in router.supported_modes() {
                println!("  {}", mode);
            }
        }

        Commands::Version => {
            let info = router.version_info();
            println!("fragmapper v{}", info.router);
            println!("Config version: {}", info.config_version);
            let mut skills: Vec<_> = info.skills.iter().collect();
            skills.sort();
            for (mode, version) in skills {
                println!("  {}: v{}", mode, version);
            }
        }
    }

    Ok(())
}
