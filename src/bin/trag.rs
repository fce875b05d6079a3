//! TRAG CLI — build entity trees and inspect address mappings.
//!
//! Usage:
//!   trag tree --edges file.csv --root name [--json] [--no-lowercase]
//!   trag context --edges file.csv --root name <entity> [--no-lowercase]
//!   trag forest --edges file.csv [--config trag.yaml] [--max-trees N] [--max-nodes N] [--no-lowercase]
//!   trag addresses --map ids.json [entity]

use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use trag::tree::normalize_name;
use trag::{EdgeSet, EntityAddressIndex, EntityForest, EntityTree, PairId, TragConfig};

#[derive(Parser)]
#[command(
    name = "trag",
    version,
    about = "Entity address index and hierarchy context builder"
)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one tree and print it level by level with every node's context
    Tree {
        /// Edge file: `child,parent` lines, or a JSON array of pairs
        #[arg(long)]
        edges: PathBuf,
        /// Root entity name
        #[arg(long)]
        root: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Keep entity names as written (names are trimmed either way)
        #[arg(long)]
        no_lowercase: bool,
    },
    /// Print the context string of a single entity
    Context {
        #[arg(long)]
        edges: PathBuf,
        #[arg(long)]
        root: String,
        /// Entity to describe
        entity: String,
        #[arg(long)]
        no_lowercase: bool,
    },
    /// Build a forest from every root in the edge file
    Forest {
        #[arg(long)]
        edges: PathBuf,
        /// YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override forest.max_tree_count
        #[arg(long)]
        max_trees: Option<usize>,
        /// Override forest.max_node_count
        #[arg(long)]
        max_nodes: Option<usize>,
        #[arg(long)]
        json: bool,
        /// Override forest.lowercase to false
        #[arg(long)]
        no_lowercase: bool,
    },
    /// Load an entity → pair ids JSON map and read addresses back
    Addresses {
        /// JSON object mapping entity names to lists of pair ids
        #[arg(long)]
        map: PathBuf,
        /// Entity to read (all entities if omitted)
        entity: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load edges and normalize names the same way forest building does
fn load_edges(path: &Path, lowercase: bool) -> Result<EdgeSet, String> {
    EdgeSet::load(path)
        .map(|edges| edges.normalized(lowercase))
        .map_err(|e| format!("Failed to load edges from '{}': {}", path.display(), e))
}

fn cmd_tree(edges: &Path, root: &str, json: bool, lowercase: bool) -> i32 {
    let edges = match load_edges(edges, lowercase) {
        Ok(edges) => edges,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let tree = EntityTree::build(&normalize_name(root, lowercase), &edges);

    if json {
        let contexts: Vec<_> = tree
            .contexts()
            .into_iter()
            .map(|(name, context)| serde_json::json!({ "entity": name, "context": context }))
            .collect();
        let out = serde_json::json!({
            "root": tree.root_name(),
            "node_count": tree.count_num(),
            "levels": tree.levels(),
            "contexts": contexts,
        });
        return match serde_json::to_string_pretty(&out) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }

    print!("{}", tree);
    println!("{}", "-".repeat(40));
    for (name, context) in tree.contexts() {
        println!("{:<24}  {}", name, context);
    }
    0
}

fn cmd_context(edges: &Path, root: &str, entity: &str, lowercase: bool) -> i32 {
    let edges = match load_edges(edges, lowercase) {
        Ok(edges) => edges,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let tree = EntityTree::build(&normalize_name(root, lowercase), &edges);
    let context = tree
        .find(&normalize_name(entity, lowercase))
        .and_then(|idx| tree.get_context(idx));
    match context {
        Some(context) => {
            println!("{}", context);
            0
        }
        None => {
            eprintln!("Error: '{}' is not reachable from root '{}'", entity, root);
            1
        }
    }
}

fn cmd_forest(
    edges: &Path,
    config: Option<&Path>,
    max_trees: Option<usize>,
    max_nodes: Option<usize>,
    json: bool,
    no_lowercase: bool,
) -> i32 {
    let mut config = match config.map(TragConfig::from_yaml_file) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            eprintln!("Error: failed to read config: {}", e);
            return 1;
        }
        None => TragConfig::default(),
    };
    if let Some(n) = max_trees {
        config.forest.max_tree_count = n;
    }
    if let Some(n) = max_nodes {
        config.forest.max_node_count = n;
    }
    if no_lowercase {
        config.forest.lowercase = false;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return 1;
    }

    let edges = match EdgeSet::load(edges) {
        Ok(edges) => edges,
        Err(e) => {
            eprintln!("Error: Failed to load edges from '{}': {}", edges.display(), e);
            return 1;
        }
    };
    let forest = EntityForest::build(&edges, &config.forest);
    let summary = forest.summary();

    if json {
        return match serde_json::to_string_pretty(&summary) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }
    println!("tree num: {}", summary.tree_count);
    println!("node num: {}", summary.node_count);
    for tree in forest.trees() {
        println!("{:<24}  {:>7}", tree.root_name(), tree.count_num());
    }
    0
}

fn cmd_addresses(map: &Path, entity: Option<&str>) -> i32 {
    let mapping: BTreeMap<String, Vec<PairId>> = match std::fs::read_to_string(map)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(mapping) => mapping,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", map.display(), e);
            return 1;
        }
    };
    let index = EntityAddressIndex::new();
    index.set_addresses(mapping);

    let names = match entity {
        Some(name) => vec![name.to_string()],
        None => index.entity_names(),
    };
    for name in names {
        let ids: Vec<String> = index.read_ids(&name).iter().map(|id| id.to_string()).collect();
        println!("{}: [{}]", name, ids.join(", "));
    }
    index.clear();
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Tree {
            edges,
            root,
            json,
            no_lowercase,
        } => cmd_tree(&edges, &root, json, !no_lowercase),
        Commands::Context {
            edges,
            root,
            entity,
            no_lowercase,
        } => cmd_context(&edges, &root, &entity, !no_lowercase),
        Commands::Forest {
            edges,
            config,
            max_trees,
            max_nodes,
            json,
            no_lowercase,
        } => cmd_forest(&edges, config.as_deref(), max_trees, max_nodes, json, no_lowercase),
        Commands::Addresses { map, entity } => cmd_addresses(&map, entity.as_deref()),
    };
    std::process::exit(code);
}
