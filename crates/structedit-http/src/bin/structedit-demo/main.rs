mod cli;

use std::net::SocketAddr;

use structedit::{Editor, Inspect, SharedEditor};
use structedit_http::{serve, MUTATE_PATH};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Inspect, Debug, Clone, Default)]
struct Customer {
    name: String,
    balance: f64,
}

#[derive(Inspect, Debug, Clone, Default)]
struct Company {
    name: String,
    id: u64,
    billing_active: bool,
    customers: Vec<Customer>,
}

fn example() -> Company {
    Company {
        name: "Initech".into(),
        id: 1024,
        billing_active: true,
        customers: vec![
            Customer {
                name: "Acme".into(),
                balance: 1250.5,
            },
            Customer {
                name: "Globex".into(),
                balance: -42.0,
            },
        ],
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing with RUST_LOG support
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse();
    let addr = SocketAddr::new(cli.bind, cli.port);

    info!(%addr, read_only = cli.read_only, "structedit-demo starting");

    // A boxed root renders with edit controls, a plain one without.
    let result = if cli.read_only {
        serve(SharedEditor::new(Editor::new(example(), MUTATE_PATH)), addr).await
    } else {
        serve(
            SharedEditor::new(Editor::new(Box::new(example()), MUTATE_PATH)),
            addr,
        )
        .await
    };

    if let Err(e) = result {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_editability() {
        assert!(!Editor::new(example(), MUTATE_PATH).is_editable());
        assert!(Editor::new(Box::new(example()), MUTATE_PATH).is_editable());
    }

    #[test]
    fn test_example_paths() {
        let tree = Editor::new(Box::new(example()), MUTATE_PATH)
            .render_tree()
            .unwrap();
        let paths: Vec<String> = tree
            .fields
            .iter()
            .map(|f| f.path.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(
            paths,
            [
                "name",
                "id",
                "billing_active",
                "customers.0.name",
                "customers.0.balance",
                "customers.1.name",
                "customers.1.balance",
            ]
        );
    }
}
