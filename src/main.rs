// SPDX-License-Identifier: MIT
//
// tintlab — a terminal theme workshop.
//
// This is the binary that wires the library crates to a subcommand CLI:
//
//   tint-color  → hex ↔ RGB ↔ HSL conversion (pure math)
//   tint-engine → contrast verdicts, harmonies, synthesis, store, preview
//
// Each command parses its arguments, runs one engine operation, and
// prints the result as truecolor ANSI swatches:
//
//   generate → Palette::generate(seed)  → swatch rows (+ optional save)
//   harmony  → HarmonyKind::derive      → partner swatches per family
//   check    → check_contrast           → ratio + AA/AAA verdicts
//   list / save / delete / export / import
//            → PaletteStore over FileStorage (tintlab-themes.json)
//   preview  → PreviewController over a stdout sink, reverted on drop
//
// Errors print as `tintlab: <message>` on stderr with exit code 1.
// RUST_LOG controls log verbosity (default: warn and up, to stderr).

use std::env;
use std::fs;
use std::io;
use std::process;

use tint_color::Rgb;

use tint_engine::contrast::{best_text_on, check_contrast};
use tint_engine::harmony::HarmonyKind;
use tint_engine::palette::Palette;
use tint_engine::persist::FileStorage;
use tint_engine::presets::{preset, preset_names};
use tint_engine::preview::{PreviewController, TokenSink};
use tint_engine::store::{CAPACITY, PaletteStore};

use tracing_subscriber::EnvFilter;

// ─── Options ────────────────────────────────────────────────────────────────

/// Store file used when `--store` is not given.
const DEFAULT_STORE: &str = "tintlab-themes.json";

const USAGE: &str = "\
tintlab — a terminal theme workshop

USAGE:
    tintlab [--store PATH] <command> [args]

COMMANDS:
    generate [--seed N] [--save NAME]   synthesize a palette
    harmony <color> [kind]              derive color-wheel harmonies
    check <text> <bg>                   WCAG contrast verdict for a pairing
    preset [name]                       show a preset, or list them all
    list                                list saved themes
    save <name> <bg> <text> <accent> <secondary>
    delete <index>                      remove a saved theme by list index
    export                              print all saved themes as JSON
    import <file>                       append themes from a JSON export
    preview [--seed N]                  apply a palette, revert on exit

Colors are 6-digit hex, with or without the leading `#`. Harmony kinds:
complementary, analogous, triadic, split-complementary.

The saved-theme store is a JSON file (default tintlab-themes.json in the
current directory). RUST_LOG=debug shows store activity.
";

/// Global options shared by every command.
struct Options {
    /// Path of the theme store document.
    store_path: String,
}

/// Pull `--store PATH` out of the argument list, leaving the command and
/// its positional arguments.
fn split_options(args: &[String]) -> Result<(Options, Vec<String>), String> {
    let mut store_path = DEFAULT_STORE.to_owned();
    let mut rest = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--store" {
            i += 1;
            let Some(path) = args.get(i) else {
                return Err("--store needs a path".to_owned());
            };
            store_path = path.clone();
        } else {
            rest.push(args[i].clone());
        }
        i += 1;
    }
    Ok((Options { store_path }, rest))
}

fn parse_seed(arg: Option<&String>) -> Result<u32, String> {
    let raw = arg.ok_or("--seed needs a number")?;
    raw.parse()
        .map_err(|_| format!("seed {raw:?} is not a number in 0..=4294967295"))
}

fn parse_index(arg: Option<&String>) -> Result<usize, String> {
    let raw = arg.ok_or("delete needs the index shown by `tintlab list`")?;
    raw.parse().map_err(|_| format!("{raw:?} is not a list index"))
}

/// Reject anything that is not a strict hex color, with a hint.
fn require_color(raw: &str) -> Result<(), String> {
    if Rgb::parse(raw).is_some() {
        Ok(())
    } else {
        Err(format!("{raw:?} is not a hex color like \"#0ea5e9\""))
    }
}

// ─── Output helpers ─────────────────────────────────────────────────────────

/// A narrow filled block in the given color.
fn block(hex: &str) -> String {
    let Rgb { r, g, b } = Rgb::parse_lenient(hex);
    format!("\x1b[48;2;{r};{g};{b}m  \x1b[0m")
}

/// A wide filled block followed by the hex label.
fn swatch(hex: &str) -> String {
    let Rgb { r, g, b } = Rgb::parse_lenient(hex);
    format!("\x1b[48;2;{r};{g};{b}m      \x1b[0m {hex}")
}

const fn verdict(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}

fn print_palette(palette: &Palette) {
    for (role, hex) in palette.tokens() {
        println!("  {role:<9} {}", swatch(hex));
    }
}

/// The text-on-background contrast summary printed under a palette.
fn contrast_line(palette: &Palette) -> String {
    let report = check_contrast(&palette.text, &palette.bg);
    format!(
        "  text/bg   {:.2}:1  AA {}  AAA {}",
        report.ratio,
        verdict(report.aa),
        verdict(report.aaa)
    )
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn cmd_generate(options: &Options, args: &[String]) -> Result<(), String> {
    let mut seed = None;
    let mut save_name = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = Some(parse_seed(args.get(i))?);
            }
            "--save" => {
                i += 1;
                save_name = Some(args.get(i).ok_or("--save needs a name")?.clone());
            }
            other => return Err(format!("unexpected argument {other:?}")),
        }
        i += 1;
    }

    let palette = seed.map_or_else(Palette::random, Palette::generate);
    let mode = if palette.is_dark() { "dark" } else { "light" };
    match seed {
        Some(seed) => println!("{mode} palette (seed {seed})"),
        None => println!("{mode} palette"),
    }
    print_palette(&palette);
    println!("{}", contrast_line(&palette));

    if let Some(name) = save_name {
        let mut store = open_store(options);
        store.save(&name, &palette).map_err(|e| e.to_string())?;
        println!("saved as {name:?} ({} of {CAPACITY} slots used)", store.len());
    }
    Ok(())
}

fn cmd_harmony(args: &[String]) -> Result<(), String> {
    let Some(base) = args.first() else {
        return Err("harmony needs a base color, e.g. `tintlab harmony \"#0ea5e9\"`".to_owned());
    };
    require_color(base)?;

    let kinds: Vec<HarmonyKind> = match args.get(1) {
        Some(name) => {
            let kind = HarmonyKind::from_name(name)
                .ok_or_else(|| format!("unknown harmony {name:?} (see `tintlab help`)"))?;
            vec![kind]
        }
        None => HarmonyKind::all().to_vec(),
    };

    println!("  {:<20} {}", "base", swatch(base));
    for kind in kinds {
        for (i, hex) in kind.derive(base).iter().enumerate() {
            let label = if i == 0 { kind.name() } else { "" };
            println!("  {label:<20} {}", swatch(hex));
        }
    }
    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    let (Some(text), Some(bg)) = (args.first(), args.get(1)) else {
        return Err("check needs two colors: text then background".to_owned());
    };
    require_color(text)?;
    require_color(bg)?;

    let report = check_contrast(text, bg);
    println!("  {:<6} {}", "text", swatch(text));
    println!("  {:<6} {}", "bg", swatch(bg));
    println!("  ratio  {:.2}:1", report.ratio);
    println!("  AA {}   AAA {}", verdict(report.aa), verdict(report.aaa));
    if !report.aa {
        println!("  hint: {} text reads best on this background", best_text_on(bg));
    }
    Ok(())
}

fn cmd_preset(args: &[String]) -> Result<(), String> {
    match args.first() {
        Some(name) => {
            let palette = preset(name)
                .ok_or_else(|| format!("unknown preset {name:?} (run `tintlab preset`)"))?;
            println!("{name}");
            print_palette(&palette);
            println!("{}", contrast_line(&palette));
        }
        None => {
            for name in preset_names() {
                let Some(palette) = preset(name) else { continue };
                let mode = if palette.is_dark() { "dark" } else { "light" };
                println!(
                    "  {name:<10} {}{}{}{}  {mode}",
                    block(&palette.bg),
                    block(&palette.text),
                    block(&palette.accent),
                    block(&palette.secondary),
                );
            }
        }
    }
    Ok(())
}

fn cmd_list(options: &Options) -> Result<(), String> {
    let store = open_store(options);
    if store.is_empty() {
        println!("no saved themes yet (try `tintlab generate --save NAME`)");
        return Ok(());
    }
    for (i, theme) in store.themes().iter().enumerate() {
        println!(
            "  [{i}] {:<30} {}{}{}{}",
            theme.name,
            block(&theme.bg),
            block(&theme.text),
            block(&theme.accent),
            block(&theme.secondary),
        );
    }
    if store.persistence_degraded() {
        println!("  (store file is unreadable; changes made now will not persist)");
    }
    Ok(())
}

fn cmd_save(options: &Options, args: &[String]) -> Result<(), String> {
    let [name, bg, text, accent, secondary] = args else {
        return Err("save needs a name and four colors: bg text accent secondary".to_owned());
    };
    let palette = Palette::new(bg.as_str(), text.as_str(), accent.as_str(), secondary.as_str());
    let mut store = open_store(options);
    store.save(name, &palette).map_err(|e| e.to_string())?;
    println!("saved as {name:?} ({} of {CAPACITY} slots used)", store.len());
    Ok(())
}

fn cmd_delete(options: &Options, args: &[String]) -> Result<(), String> {
    let index = parse_index(args.first())?;
    let mut store = open_store(options);
    let removed = store.delete(index).map_err(|e| e.to_string())?;
    println!("deleted [{index}] {}", removed.name);
    Ok(())
}

fn cmd_export(options: &Options) -> Result<(), String> {
    let store = open_store(options);
    let text = store.export_all().map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

fn cmd_import(options: &Options, args: &[String]) -> Result<(), String> {
    let Some(path) = args.first() else {
        return Err("import needs a file of exported themes".to_owned());
    };
    let text = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    let mut store = open_store(options);
    let added = store.import_many(&text).map_err(|e| e.to_string())?;
    let plural = if added == 1 { "" } else { "s" };
    println!("imported {added} theme{plural} ({} of {CAPACITY} slots used)", store.len());
    Ok(())
}

// ─── Preview ────────────────────────────────────────────────────────────────

/// Sink that narrates token writes to stdout. A real host would push the
/// four tokens into its style system; the demo shows the same lifecycle.
struct TerminalSink;

impl TokenSink for TerminalSink {
    fn apply(&mut self, palette: &Palette) {
        println!("override applied:");
        print_palette(palette);
    }

    fn clear(&mut self) {
        println!("override cleared, base theme restored");
    }
}

fn cmd_preview(args: &[String]) -> Result<(), String> {
    let seed = match args.first() {
        Some(flag) if flag == "--seed" => Some(parse_seed(args.get(1))?),
        Some(other) => return Err(format!("unexpected argument {other:?}")),
        None => None,
    };

    let palette = seed.map_or_else(Palette::random, Palette::generate);
    let mut controller = PreviewController::new(TerminalSink);
    controller.apply(&palette);
    println!("{}", contrast_line(&palette));
    // Dropping the controller reverts the override.
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn open_store(options: &Options) -> PaletteStore<FileStorage> {
    PaletteStore::load(FileStorage::new(options.store_path.as_str()))
}

fn run(options: &Options, args: &[String]) -> Result<(), String> {
    let Some(command) = args.first() else {
        print!("{USAGE}");
        return Ok(());
    };
    match command.as_str() {
        "generate" => cmd_generate(options, &args[1..]),
        "harmony" => cmd_harmony(&args[1..]),
        "check" => cmd_check(&args[1..]),
        "preset" => cmd_preset(&args[1..]),
        "list" => cmd_list(options),
        "save" => cmd_save(options, &args[1..]),
        "delete" => cmd_delete(options, &args[1..]),
        "export" => cmd_export(options),
        "import" => cmd_import(options, &args[1..]),
        "preview" => cmd_preview(&args[1..]),
        "help" | "--help" | "-h" => {
            print!("{USAGE}");
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("tintlab {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => Err(format!("unknown command {other:?} (try `tintlab help`)")),
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (options, rest) = match split_options(&args) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("tintlab: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&options, &rest) {
        eprintln!("tintlab: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
