use clap::Parser;
use sequence::utils::logger;
use sequence::{sample_elements, CliConfig, RankingPipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.ranking_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed ({:?}): {}", e.category(), e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let pipeline = RankingPipeline::new(config);
    let ranked = pipeline.run(&sample_elements(cli.count));

    println!("{}", pipeline.report(&ranked));
    Ok(())
}
