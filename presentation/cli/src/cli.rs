use std::path::PathBuf;

use clap::{Parser, Subcommand};

use business::domain::product::value_objects::ProductId;

use crate::api::product::args::{ListArgs, ProductArgs};

#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(about = "Track products, stock levels and stock value in a local store file")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
    /// Store file to use (overrides INVENTORY_STORE_PATH)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Read the store but do not write any change back
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a product
    Add(ProductArgs),
    /// Replace the fields of an existing product
    Update {
        /// Product id
        id: ProductId,
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Delete a product
    Remove {
        /// Product id
        id: ProductId,
    },
    /// Show one product
    Show {
        /// Product id
        id: ProductId,
    },
    /// Show the product table and dashboard
    List(ListArgs),
    /// Show the dashboard figures only
    Summary,
}
