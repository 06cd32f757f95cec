//! Command definitions and handlers for the interactive shell.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::export;
use crate::ledger::RecordKind;

use super::core::{CliMode, CommandError, CommandResult, ShellContext};
use super::io as cli_io;
use super::output;

/// How many leading commands form the numbered menu.
const NUMBERED_COMMANDS: usize = 6;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|definition| definition.handler)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &CommandDefinition> + '_ {
        self.order.iter().filter_map(|name| self.commands.get(name))
    }
}

/// The first [`NUMBERED_COMMANDS`] entries are the numbered menu, in order.
pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Record an income or expense entry",
            "add [<amount> <category> <kind>]",
            add,
        ),
        CommandDefinition::new("list", "List all records", "list", list),
        CommandDefinition::new("income", "Show total income", "income", income),
        CommandDefinition::new("expense", "Show total expenses", "expense", expense),
        CommandDefinition::new(
            "export",
            "Export records to a CSV file",
            "export [<path>]",
            export_csv,
        ),
        CommandDefinition::new("exit", "Leave the shell", "exit", exit),
        CommandDefinition::new(
            "summary",
            "Show income, expense, and per-category totals",
            "summary",
            summary,
        ),
        CommandDefinition::new("menu", "Show the numbered menu", "menu", menu),
        CommandDefinition::new("help", "Show command help", "help", help),
        CommandDefinition::new("version", "Show version information", "version", version),
    ]
}

pub(crate) fn print_menu(context: &ShellContext) {
    output::section("Tally");
    for (index, definition) in context
        .registry()
        .definitions()
        .take(NUMBERED_COMMANDS)
        .enumerate()
    {
        cli_io::print_info(format!(
            "{}. {:<8} {}",
            index + 1,
            definition.name,
            definition.description
        ));
    }
    cli_io::print_info("Type a number or a command name. `help` lists everything.");
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (amount, category, kind_input) = match args {
        [] => {
            if context.mode() != CliMode::Interactive {
                return Err(CommandError::InvalidArguments(
                    "Usage: add <amount> <category> <kind>".into(),
                ));
            }
            let amount = cli_io::prompt_amount(context.theme(), "Amount")?;
            let category = cli_io::prompt_text(context.theme(), "Category")?;
            let kind = cli_io::prompt_text(context.theme(), "Type (income/expense)")?;
            (amount, category, kind)
        }
        [amount, category, kind] => {
            let amount = amount.parse::<f64>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{}` is not a valid amount", amount))
            })?;
            (amount, (*category).to_string(), (*kind).to_string())
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "Usage: add <amount> <category> <kind>".into(),
            ))
        }
    };

    let category = category.trim().to_string();
    let kind = RecordKind::parse(kind_input.trim());
    let id = context.ledger.add(amount, category.clone(), kind.clone());
    cli_io::print_success(format!(
        "Recorded #{} {} {:.2} ({})",
        id, kind, amount, category
    ));
    Ok(())
}

fn list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.ledger.is_empty() {
        cli_io::print_info("No records yet. Use `add` to record one.");
        return Ok(());
    }

    output::section("Records");
    let rows: Vec<Vec<String>> = context
        .ledger
        .iter()
        .map(|record| {
            vec![
                record.id.to_string(),
                format!("{:.2}", record.amount),
                record.category.clone(),
                record.date.format("%Y-%m-%d").to_string(),
                record.kind.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        output::render_table(&["ID", "Amount", "Category", "Date", "Type"], &rows)
    );
    Ok(())
}

fn income(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let total = context.ledger.total(&RecordKind::Income);
    cli_io::print_info(format!("Total income: {:.2}", total));
    Ok(())
}

fn expense(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let total = context.ledger.total(&RecordKind::Expense);
    cli_io::print_info(format!("Total expenses: {:.2}", total));
    Ok(())
}

fn export_csv(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = match args {
        [] => {
            if context.mode() != CliMode::Interactive {
                return Err(CommandError::InvalidArguments("Usage: export <path>".into()));
            }
            let default = context
                .config
                .default_export_path
                .as_ref()
                .map(|path| path.display().to_string());
            let raw =
                cli_io::prompt_text_with_default(context.theme(), "Export file", default.as_deref())?;
            PathBuf::from(raw.trim())
        }
        [path] => PathBuf::from(path),
        _ => return Err(CommandError::InvalidArguments("Usage: export <path>".into())),
    };

    let rows = export::write_csv(&context.ledger, &path)?;

    context.config.default_export_path = Some(path.clone());
    if let Err(err) = context.persist_config() {
        cli_io::print_warning(format!("Could not save preferences: {}", err));
    }

    cli_io::print_success(format!("Exported {} records to {}", rows, path.display()));
    Ok(())
}

fn summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.ledger.summary();
    output::section("Summary");
    cli_io::print_info(format!("Records: {}", summary.record_count));
    cli_io::print_info(format!("Income: {:.2}", summary.income));
    cli_io::print_info(format!("Expenses: {:.2}", summary.expense));
    cli_io::print_info(format!("Net: {:.2}", summary.net));

    let by_category = context.ledger.category_totals();
    if !by_category.is_empty() {
        output::section("By category");
        let rows: Vec<Vec<String>> = by_category
            .iter()
            .map(|(category, total)| vec![category.clone(), format!("{:.2}", total)])
            .collect();
        println!("{}", output::render_table(&["Category", "Total"], &rows));
    }
    Ok(())
}

fn menu(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_menu(context);
    Ok(())
}

fn help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    let rows: Vec<Vec<String>> = context
        .registry()
        .definitions()
        .map(|definition| {
            vec![
                definition.usage.to_string(),
                definition.description.to_string(),
            ]
        })
        .collect();
    println!("{}", output::render_table(&["Usage", "Description"], &rows));
    Ok(())
}

fn version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    cli_io::print_info(format!("tally {}", env!("CARGO_PKG_VERSION")));
    Ok(())
}

fn exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
