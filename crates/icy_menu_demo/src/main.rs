#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::module_name_repetitions)]

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use icy_menu_engine::{
    create_default_catalog, load_catalog_from_file, register_default_strategies, CommandCatalog, ContextMenuEvent, DispatchController,
    DispatchOutcome, EditorServices, LayoutConfig, ScenePoint, ScreenPoint, StrategyRegistry,
};

mod presenter;
mod scene;
mod services;

use presenter::ConsolePresenter;
use scene::Scene;
use services::{create_clipboard, ConsoleMessageSink};

#[derive(Parser, Debug)]
#[command(version, about = "Right click a canvas from the command line", long_about = None)]
pub struct Args {
    /// Scene file with [[items]]; the built-in scene is used if omitted
    #[arg(long, value_name = "FILE")]
    scene: Option<PathBuf>,

    /// Layout file with [[strategies]]; the built-in layout is used if omitted
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Command label table merged over the built-in labels, e.g. data/menu_commands.zh-CN.toml
    #[arg(long, value_name = "FILE")]
    labels: Option<PathBuf>,

    /// Text in the clipboard
    #[arg(long, value_name = "TEXT")]
    clipboard: Option<String>,

    /// Pick the entry with this command id instead of asking
    #[arg(long, value_name = "ID")]
    select: Option<String>,

    /// Print the scene and the registered object types, then exit
    #[arg(long)]
    list: bool,

    /// Scene x coordinate of the click
    #[arg(required_unless_present = "list", allow_negative_numbers = true)]
    x: Option<f64>,

    /// Scene y coordinate of the click
    #[arg(required_unless_present = "list", allow_negative_numbers = true)]
    y: Option<f64>,
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = directories::ProjectDirs::from("com", "GitHub", "icy_menu_demo")?.config_dir().to_path_buf();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn init_logging() -> anyhow::Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info")?;
    let handle = if let Some(log_dir) = get_log_dir() {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("icy_menu_demo").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()?
    } else {
        eprintln!("Failed to create log directory, logging to stderr");
        logger.log_to_stderr().start()?
    };
    Ok(handle)
}

fn create_registry(layout: Option<&PathBuf>, services: &EditorServices) -> anyhow::Result<StrategyRegistry> {
    let mut registry = StrategyRegistry::new();
    match layout {
        Some(path) => LayoutConfig::from_file(path)
            .with_context(|| format!("loading layout {}", path.display()))?
            .register(&mut registry, services),
        None => register_default_strategies(&mut registry, services),
    }
    Ok(registry)
}

/// Built-in labels with the user table on top. Commands the table leaves out keep their default label.
fn create_catalog(labels: Option<&Path>) -> anyhow::Result<CommandCatalog> {
    let mut catalog = create_default_catalog();
    if let Some(path) = labels {
        let user = load_catalog_from_file(path).with_context(|| format!("loading labels {}", path.display()))?;
        log::info!("loaded {} labels from {}", user.len(), path.display());
        catalog.merge(user);
    }
    Ok(catalog)
}

fn print_listing(scene: &Scene, controller: &DispatchController) {
    println!("Scene:");
    for item in scene.items() {
        println!(
            "  {:<12} {:<10} at ({}, {}) size {}x{}",
            item.object_type, item.name, item.x, item.y, item.width, item.height
        );
    }
    println!("Menus: {}", controller.registry().object_types().join(", "));
    println!("Fallback: {}", controller.fallback_type());

    if let Some(catalog) = controller.catalog() {
        println!("Commands:");
        for id in catalog.ids() {
            let label = catalog.label(id).unwrap_or(id);
            match catalog.get(id).and_then(|cmd| cmd.shortcut.as_deref()) {
                Some(shortcut) => println!("  {:<22} {} [{}]", id, label, shortcut),
                None => println!("  {:<22} {}", id, label),
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = init_logging()?;

    log::info!("Starting icy_menu_demo {}", env!("CARGO_PKG_VERSION"));

    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::builtin(),
    };

    let services = EditorServices::new(create_clipboard(args.clipboard.as_deref()), Rc::new(ConsoleMessageSink));
    let registry = create_registry(args.layout.as_ref(), &services)?;
    let controller = DispatchController::new(registry).with_catalog(create_catalog(args.labels.as_deref())?);

    if args.list {
        print_listing(&scene, &controller);
        return Ok(());
    }

    let (Some(x), Some(y)) = (args.x, args.y) else {
        anyhow::bail!("missing click position");
    };
    let event = ContextMenuEvent::new(ScreenPoint::new(x.round() as i32, y.round() as i32), ScenePoint::new(x, y));

    let stdin = std::io::stdin();
    let mut presenter = ConsolePresenter::new(stdin.lock(), std::io::stdout()).with_selection(args.select.clone());

    match controller.context_menu_event(&scene, &mut presenter, &event) {
        DispatchOutcome::Shown {
            object_type,
            selected: Some(id),
        } => log::info!("{} menu: ran '{}'", object_type, id),
        DispatchOutcome::Shown { object_type, selected: None } => log::info!("{} menu dismissed", object_type),
        DispatchOutcome::NoMenu => println!("No context menu at ({}, {})", x, y),
    }
    Ok(())
}
