use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use colored::Colorize;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::traversal::TraversalOrder;
use crate::tree::BinaryTree;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let sample = cli.sample.unwrap_or(settings.sample);
    debug!(?sample, ?settings, "effective settings");

    match &cli.command {
        Some(Commands::Show) => _show(&sample.build()?, settings.indent_width),
        Some(Commands::Tree) => _tree(&sample.build()?),
        Some(Commands::Walk { order }) => {
            _walk(&sample.build()?, order.unwrap_or(settings.traversal))
        }
        Some(Commands::Stats) => _stats(&sample.build()?),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "bintree", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run `bintree --help`".to_string(),
        )),
    }
}

#[instrument(skip(tree))]
fn _show(tree: &BinaryTree<i64>, indent_width: usize) -> CliResult<()> {
    output::info(&tree.render_indented(indent_width));
    Ok(())
}

#[instrument(skip(tree))]
fn _tree(tree: &BinaryTree<i64>) -> CliResult<()> {
    output::info(&tree.to_tree_string());
    Ok(())
}

#[instrument(skip(tree))]
fn _walk(tree: &BinaryTree<i64>, order: TraversalOrder) -> CliResult<()> {
    tree.write_traversal(order, &mut io::stdout().lock())?;
    Ok(())
}

#[instrument(skip(tree))]
fn _stats(tree: &BinaryTree<i64>) -> CliResult<()> {
    output::field("size", &tree.get_size());
    output::field("height", &tree.tree_height());
    output::field("leaves", &tree.leaf_nodes().len());
    output::header("nodes (pre-order)");

    for node in tree.iter_preorder() {
        let depth = node.non_recursive_node_depth();
        let kind = if node.is_external() {
            "external".yellow()
        } else {
            "internal".blue()
        };
        let ancestors = node.ancestors().map(|n| n.to_string()).join(" <- ");
        println!(
            "{:indent$}{}  depth={} height={} {}  [{}]",
            "",
            node.to_string().bold(),
            depth,
            node.node_height(),
            kind,
            ancestors,
            indent = depth * 2,
        );
    }
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => println!("{}", path.display()),
            None => {
                return Err(CliError::Config {
                    message: "cannot determine config directory".to_string(),
                })
            }
        },
    }
    Ok(())
}
