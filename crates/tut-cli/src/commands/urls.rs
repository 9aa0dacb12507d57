use serde_json::Value;
use tut_core::responses::ReverseResponse;
use tut_urls::UrlConf;

use crate::cli::root_commands::Commands;

/// Handle the route commands, which need no database.
pub fn handle(command: &Commands, urls: &UrlConf) -> anyhow::Result<Value> {
    match command {
        Commands::Reverse(args) => {
            let pairs: Vec<(&str, &str)> = args
                .args
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect();
            let path = urls.reverse_with(&args.name, &pairs)?;
            Ok(serde_json::to_value(ReverseResponse {
                name: args.name.clone(),
                path,
            })?)
        }
        Commands::Resolve { path } => Ok(serde_json::to_value(urls.resolve(path)?)?),
        Commands::Routes => Ok(serde_json::to_value(urls.routes())?),
        _ => anyhow::bail!("not a route command"),
    }
}
