use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use reckon::api::{CmdMessage, MessageLevel, ReckonApi};
use reckon::commands::{CmdResult, ReckonPaths};
use reckon::error::{ReckonError, Result};
use reckon::index::{Selector, SlotRef, StarDest};
use reckon::model::{Calculation, Scope, Tab, Theme};
use reckon::store::fs::FileStore;
use std::collections::HashMap;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

mod args;
use args::{Cli, Commands, FragCmd, MoveCmd, RowCmd, TabCmd};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ReckonApi<FileStore>,
    scope: Scope,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Eval { tab, expression }) => handle_eval(&mut ctx, &tab, &expression),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Tab { action }) => handle_tab(&mut ctx, action),
        Some(Commands::Row { action }) => handle_row(&mut ctx, action),
        Some(Commands::Star { entry }) => handle_star(&mut ctx, &entry, true),
        Some(Commands::Unstar { entry }) => handle_star(&mut ctx, &entry, false),
        Some(Commands::Delete { entry }) => handle_delete(&mut ctx, &entry),
        Some(Commands::Move { action }) => handle_move(&mut ctx, action),
        Some(Commands::Drop { fragment, target }) => handle_drop(&mut ctx, fragment, &target),
        Some(Commands::Frag { action }) => handle_frag(&mut ctx, action),
        Some(Commands::Theme { value }) => handle_theme(&mut ctx, value),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".reckon");

    let global_dir = match std::env::var_os("RECKON_GLOBAL_DATA") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "reckon", "reckon")
            .ok_or_else(|| ReckonError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let store = FileStore::new(Some(project_dir.clone()), global_dir.clone());
    let paths = ReckonPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let api = ReckonApi::new(store, paths);

    Ok(AppContext { api, scope })
}

fn handle_eval(ctx: &mut AppContext, tab: &str, expression: &[String]) -> Result<()> {
    let tab = parse_selector(tab)?;
    let expression = expression.join(" ");
    let result = ctx.api.eval(ctx.scope, &tab, &expression)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list(ctx.scope)?;
    print_board(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_tab(ctx: &mut AppContext, action: TabCmd) -> Result<()> {
    let result = match action {
        TabCmd::Add => ctx.api.add_tab(ctx.scope)?,
        TabCmd::Delete { tab } => {
            let tab = parse_selector(&tab)?;
            ctx.api.delete_tab(ctx.scope, &tab)?
        }
        TabCmd::Rename { tab, name } => {
            let tab = parse_selector(&tab)?;
            ctx.api.rename_tab(ctx.scope, &tab, &name)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_row(ctx: &mut AppContext, action: RowCmd) -> Result<()> {
    let result = match action {
        RowCmd::Add => ctx.api.add_row(ctx.scope)?,
        RowCmd::Rename { row, name } => {
            let row = parse_selector(&row)?;
            ctx.api.rename_row(ctx.scope, &row, &name)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_star(ctx: &mut AppContext, entry: &str, star: bool) -> Result<()> {
    let slot = parse_slot(entry)?;
    let result = if star {
        ctx.api.star(ctx.scope, &slot)?
    } else {
        ctx.api.unstar(ctx.scope, &slot)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, entry: &str) -> Result<()> {
    let slot = parse_slot(entry)?;
    let result = ctx.api.delete_entry(ctx.scope, &slot)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, action: MoveCmd) -> Result<()> {
    let result = match action {
        MoveCmd::Tab { from, to } => ctx.api.move_tab(ctx.scope, from, to)?,
        MoveCmd::Entry { from, to } => {
            let from = parse_slot(&from)?;
            let to = parse_slot(&to)?;
            ctx.api.move_entry(ctx.scope, &from, &to)?
        }
        MoveCmd::Starred { from, to } => {
            let from = parse_slot(&from)?;
            let to: StarDest = to.parse().map_err(ReckonError::Api)?;
            ctx.api.move_starred(ctx.scope, &from, &to)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_drop(ctx: &mut AppContext, fragment: usize, target: &str) -> Result<()> {
    let target = parse_slot(target)?;
    let result = ctx.api.drop_fragment(ctx.scope, fragment, &target)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_frag(ctx: &mut AppContext, action: FragCmd) -> Result<()> {
    let result = match action {
        FragCmd::Add { value } => ctx.api.add_fragment(ctx.scope, &value)?,
        FragCmd::Set { fragment, value } => ctx.api.set_fragment(ctx.scope, fragment, &value)?,
        FragCmd::Freeze { fragment } => ctx.api.freeze_fragment(ctx.scope, fragment)?,
        FragCmd::Delete { fragment } => ctx.api.delete_fragment(ctx.scope, fragment)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, value: Option<String>) -> Result<()> {
    let result = match value {
        Some(value) => {
            let theme: Theme = value.parse().map_err(ReckonError::Api)?;
            ctx.api.set_theme(ctx.scope, theme)?
        }
        None => ctx.api.show_theme(ctx.scope)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn parse_selector(s: &str) -> Result<Selector> {
    s.parse().map_err(ReckonError::Api)
}

fn parse_slot(s: &str) -> Result<SlotRef> {
    s.parse().map_err(ReckonError::Api)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const STAR_MARKER: &str = "★";
const FROZEN_MARKER: &str = "❄";

fn print_board(result: &CmdResult) {
    if result.tabs.is_empty() {
        println!("No tabs.");
    }

    for (ti, tab) in result.tabs.iter().enumerate() {
        if ti > 0 {
            println!();
        }
        println!("{}. {}", ti + 1, tab.name.bold());
        print_entries(tab);
    }

    println!();
    println!("{}", "Starred".bold());
    let lookup = entry_lookup(&result.tabs);
    for (ri, row) in result.rows.iter().enumerate() {
        let badges: Vec<String> = row
            .entries
            .iter()
            .filter_map(|id| lookup.get(id))
            .map(|calc| format!("[{} = {}]", calc.expression, calc.result))
            .collect();
        let name = if row.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            row.name.clone()
        };
        println!("  {}. {:<16} {}", ri + 1, name, badges.join(" "));
    }

    if !result.fragments.is_empty() {
        println!();
        println!("{}", "Fragments".bold());
        for (fi, fragment) in result.fragments.iter().enumerate() {
            if fragment.frozen {
                println!(
                    "  {}. {} {}",
                    fi + 1,
                    fragment.value,
                    FROZEN_MARKER.cyan()
                );
            } else {
                println!("  {}. {}", fi + 1, fragment.value);
            }
        }
    }
}

fn entry_lookup(tabs: &[Tab]) -> HashMap<Uuid, &Calculation> {
    tabs.iter()
        .flat_map(|t| t.calculations.iter())
        .map(|c| (c.id, c))
        .collect()
}

fn print_entries(tab: &Tab) {
    if tab.calculations.is_empty() {
        println!("{}", "   (no calculations)".dimmed());
        return;
    }

    for (ci, calc) in tab.calculations.iter().enumerate() {
        let idx_str = format!("   {}. ", ci + 1);
        let content = format!("{} = {}", calc.expression, calc.result);
        let star_suffix = if calc.starred {
            format!("{} ", STAR_MARKER)
        } else {
            "  ".to_string()
        };
        let time_ago = format_time_ago(calc.created_at);

        let fixed = idx_str.width() + star_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let shown = truncate_to_width(&content, available);
        let padding = available.saturating_sub(shown.width());

        let star_colored = if calc.starred {
            star_suffix.yellow()
        } else {
            star_suffix.normal()
        };

        println!(
            "{}{}{}{}{}",
            idx_str,
            shown,
            " ".repeat(padding),
            star_colored,
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
