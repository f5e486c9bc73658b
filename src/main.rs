use clap::Parser;
use gateway_factory::composition::CompositionRoot;
use gateway_factory::domain::gateway::GatewayKind;
use gateway_factory::domain::ports::NotifierRef;
use gateway_factory::infrastructure::console::StdoutNotifier;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gateways to create and invoke, in order, by name or code
    /// (1 PROTOBASE, 2 SHIFT4, 3 WELLSFARGO).
    /// Defaults to SHIFT4 WELLSFARGO PROTOBASE.
    kinds: Vec<GatewayKind>,

    /// Leave a gateway unregistered; requests for it get the no-op gateway.
    #[arg(long, value_name = "KIND")]
    without: Vec<GatewayKind>,

    /// Wait for a line on stdin before exiting.
    #[arg(long)]
    wait: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway_factory=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let notifier: NotifierRef = Arc::new(StdoutNotifier::new());
    let root = cli
        .without
        .iter()
        .fold(CompositionRoot::new(notifier), |root, kind| root.without(*kind));
    let factory = root.configure();

    let kinds = if cli.kinds.is_empty() {
        GatewayKind::DEMO_ORDER.to_vec()
    } else {
        cli.kinds
    };

    for kind in kinds {
        let gateway = factory.create(kind);
        tracing::debug!(kind = %kind, gateway = gateway.name(), "Invoking gateway");
        gateway.invoke();
    }

    if cli.wait {
        let mut line = String::new();
        io::stdin().read_line(&mut line).into_diagnostic()?;
    }

    Ok(())
}
