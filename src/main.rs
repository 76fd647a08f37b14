use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use ods_rs::{
    install::{self, ResolvedInstallation},
    registry::{Registry, REGISTRY_FILE},
    shortcut, switcher, Error,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Variant to switch the live assembly to
    dll: Option<String>,
    /// Register a new variant name without attaching a file
    #[clap(long, value_name = "NAME")]
    add: Option<String>,
    /// Attach a DLL file to a variant
    #[clap(long, num_args = 2, value_names = ["NAME", "PATH"])]
    set: Option<Vec<String>>,
    /// Print the registered variants
    #[clap(long, short)]
    list: bool,
    /// Write a launcher script for the chosen variant into this directory
    #[clap(long, value_name = "DIR", requires = "dll")]
    shortcut: Option<PathBuf>,
    /// Ask for the game directory again even if the stored one is valid
    #[clap(long, short)]
    force_reprompt: bool,
    /// Registry document to use
    #[clap(long, default_value = REGISTRY_FILE)]
    registry: PathBuf,
}

fn prompt_root() -> Option<PathBuf> {
    eprint!("Ori DE directory (blank to abort): ");
    io::stderr().flush().ok()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(PathBuf::from(line))
    }
}

fn run(args: &Args, registry: &mut Registry, resolved: &ResolvedInstallation) -> ods_rs::Result<()> {
    if let Some(name) = &args.add {
        registry.add_name(name);
    }
    if let Some(pair) = &args.set {
        let path = env::current_dir()?.join(&pair[1]);
        registry.set_path(&pair[0], path, &resolved.live_target)?;
    }
    if args.list {
        for (name, path) in &registry.dll_names {
            if path.as_os_str().is_empty() {
                println!("{name} (not located)");
            } else {
                println!("{name} {}", path.display());
            }
        }
    }
    if let Some(name) = &args.dll {
        if let Some(dir) = &args.shortcut {
            let path = shortcut::create_launcher(dir, name)?;
            println!("Launcher created at {}", path.display());
        } else {
            switcher::switch(registry, resolved, name)?;
            println!("Switched to {name} DLL");
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut registry = Registry::load(&args.registry);
    let initial = if args.force_reprompt {
        prompt_root().ok_or(Error::NoInstallationFound)?
    } else {
        registry.root.clone()
    };
    let resolved = install::validate_root(initial, prompt_root)?;
    registry.root = resolved.root.clone();

    // The registry is advisory: persist whatever succeeded even when the
    // requested operation itself failed.
    let outcome = run(&args, &mut registry, &resolved);
    registry.save(&args.registry)?;
    outcome?;
    Ok(())
}
