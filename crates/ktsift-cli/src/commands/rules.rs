use crate::config_loader::load_effective_config;
use anyhow::{bail, Result};
use colored::Colorize;
use ktsift_core::{effective_rules, Rule};
use prettytable::{format, Cell, Row, Table};
use std::path::PathBuf;

fn load_rules(config_path: Option<&PathBuf>) -> Result<Vec<Rule>> {
    let config = load_effective_config(config_path)?;
    Ok(effective_rules(&config))
}

pub fn list(config_path: Option<&PathBuf>) -> Result<()> {
    let rules = load_rules(config_path)?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.set_titles(Row::new(vec![
        Cell::new("ID").style_spec("b"),
        Cell::new("Category").style_spec("b"),
        Cell::new("Kind").style_spec("b"),
        Cell::new("Description").style_spec("b"),
    ]));

    for rule in rules {
        table.add_row(Row::new(vec![
            Cell::new(&rule.id),
            Cell::new(rule.category.label()),
            Cell::new(rule.matcher.kind()),
            Cell::new(&rule.description),
        ]));
    }

    table.printstd();

    Ok(())
}

pub fn explain(config_path: Option<&PathBuf>, rule_id: &str) -> Result<()> {
    let rules = load_rules(config_path)?;

    let Some(rule) = rules.into_iter().find(|r| r.id == rule_id) else {
        bail!("Rule not found: {}", rule_id);
    };

    println!("{}:          {}", "ID".bold(), rule.id);
    println!("{}: {}", "Description".bold(), rule.description);
    println!("{}:    {}", "Category".bold(), rule.category);
    println!("{}:        {}", "Kind".bold(), rule.matcher.kind());
    println!("{}:       {}", "Match".bold(), rule.matcher.source());

    Ok(())
}
