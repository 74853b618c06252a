//! In-place comment stripper for the clinic frontend tree.
//!
//! Invoked with no arguments. Operates on the directory one level above the
//! executable's own directory, rewrites `.html` and `.js` files in place,
//! and prints the paths it changed.

use std::path::Path;

use anyhow::Context;

use clinic_dev_tools::walk::strip_tree;

fn main() -> anyhow::Result<()> {
    let exe = std::env::current_exe().context("locating executable")?;
    let root = exe
        .parent()
        .and_then(Path::parent)
        .context("executable has no parent directory")?
        .to_path_buf();

    let changed = strip_tree(&root)?;

    println!("Changed files:");
    for path in &changed {
        println!("{}", path.display());
    }
    Ok(())
}
