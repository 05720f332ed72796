use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::core::calculator::merge::merge_agents;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use std::collections::BTreeMap;

/// Handle the `categories` subcommand: distinct categories with ticket counts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Categories {
        snapshot,
        period,
        agents,
    } = cmd
    {
        let (_, period, selected) = super::load_selection(snapshot, period, agents)?;
        let merged = merge_agents(&Core::datasets(&selected, &cfg.accent_palette));

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for t in merged.days.iter().flat_map(|d| d.all_tickets()) {
            if let Some(c) = t.category.as_deref() {
                *counts.entry(c).or_default() += 1;
            }
        }

        if counts.is_empty() {
            info(format!("No categorized tickets for {period}"));
            return Ok(());
        }

        header(format!("Categories for {period}"));
        for (category, n) in counts {
            println!("{category:<24} {n}");
        }
    }
    Ok(())
}
