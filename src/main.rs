use clap::Parser;
use tracing::info;

use ec2_idle_detector::config::DetectorConfig;
use ec2_idle_detector::mock::MockInstanceSource;
use ec2_idle_detector::report;
use ec2_idle_detector::source::{Ec2InstanceSource, InstanceSource};

#[derive(Parser)]
#[command(
    name = "ec2-idle-detector",
    about = "Detect EC2 instances that may be idle outside business hours",
    version
)]
struct Cli {
    /// AWS region, e.g. us-west-2
    #[arg(long)]
    region: String,
    /// AWS profile name (optional)
    #[arg(long)]
    profile: Option<String>,
    /// Use built-in sample records instead of calling AWS
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ec2_idle_detector=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = DetectorConfig::new(cli.region, cli.profile);

    let source: Box<dyn InstanceSource> = if cli.mock {
        Box::new(MockInstanceSource)
    } else {
        Box::new(Ec2InstanceSource::new(config))
    };

    let records = source.list_running().await?;
    info!(source = source.name(), scanned = records.len(), "fetched running instances");

    let candidates = report::candidates(&records);
    info!(candidates = candidates.len(), "classification complete");

    print!("{}", report::render(&candidates));
    Ok(())
}
