use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Store a new tutorial.
    Create(CreateArgs),
    /// Get a tutorial by id.
    Get { id: i64 },
    /// List tutorials by id.
    List,
    /// List tutorials matching every given field exactly.
    Find(FilterArgs),
    /// Check whether any tutorial matches every given field exactly.
    Exists(FilterArgs),
    /// Change fields of a stored tutorial.
    Update(UpdateArgs),
    /// Delete a tutorial.
    Delete { id: i64 },
    /// Path for a named route.
    Reverse(ReverseArgs),
    /// Route name and arguments for a path.
    Resolve { path: String },
    /// List named routes.
    Routes,
}

impl Commands {
    /// Route commands never touch the database.
    #[must_use]
    pub const fn is_route_command(&self) -> bool {
        matches!(self, Self::Reverse(_) | Self::Resolve { .. } | Self::Routes)
    }
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub url: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub published: bool,
}

#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub id: Option<i64>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub published: Option<bool>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub published: Option<bool>,
}

#[derive(Clone, Debug, Args)]
pub struct ReverseArgs {
    pub name: String,
    /// Placeholder value as `key=value`; repeatable.
    #[arg(long = "arg", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
