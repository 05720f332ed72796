use crate::cli::parser::{Commands, FilterArgs};
use crate::config::Config;
use crate::core::calculator::timeline::ViewMode;
use crate::core::calculator::timezone;
use crate::core::{Core, ViewRequest};
use crate::errors::AppResult;
use crate::export::text::{self, TextStyle};
use crate::export::{OutputFormat, ensure_writable, json, notify_write_success};
use crate::models::{FilterState, Period};
use crate::ui::messages::warning;
use std::path::Path;

impl From<&FilterArgs> for FilterState {
    fn from(args: &FilterArgs) -> Self {
        FilterState {
            exclude_categories: args.exclude_cat.iter().cloned().collect(),
            exclude_keyword_terms: args.exclude_kw.clone().unwrap_or_default(),
            include_categories: args.include_cat.iter().cloned().collect(),
            include_keyword_terms: args.include_kw.clone().unwrap_or_default(),
        }
    }
}

fn resolve_mode(period: &Period, rolling: bool, combined: bool, cfg: &Config) -> ViewMode {
    if combined {
        ViewMode::MultiDayCombined
    } else if rolling {
        ViewMode::MultiDayRolling
    } else if period.is_single_day() {
        ViewMode::SingleDay
    } else {
        cfg.default_view
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, tz_override: Option<&str>) -> AppResult<()> {
    if let Commands::Render {
        snapshot,
        period,
        agents,
        rolling,
        combined,
        filter,
        no_collapse,
        no_color,
        format,
        out,
        force,
    } = cmd
    {
        let (snap, period, selected) = super::load_selection(snapshot, period, agents)?;

        // --tz beats the snapshot's display zone, which beats the config
        let zone_name = tz_override
            .map(str::to_string)
            .or_else(|| snap.display_timezone.clone())
            .unwrap_or_else(|| cfg.display_timezone.clone());
        let display_tz = timezone::parse_zone(&zone_name)?;

        let request = ViewRequest {
            agents: selected,
            period,
            mode: resolve_mode(&period, *rolling, *combined, cfg),
            filter: FilterState::from(filter),
            display_tz,
            accent_palette: cfg.accent_palette.clone(),
            collapse_markers: cfg.collapse_markers && !*no_collapse,
        };

        let view = Core::build_view(&request)?;

        for c in &view.conflicts {
            warning(format!(
                "{}: ticket #{} picked by both {} and {}; attributed to {}",
                c.date, c.ticket_id, c.kept_agent, c.ignored_agent, c.kept_agent
            ));
        }

        let rendered = match format {
            OutputFormat::Json => json::to_json(&view)?,
            OutputFormat::Text => text::render(
                &view,
                &TextStyle {
                    color: !*no_color && out.is_none(),
                    tz: display_tz,
                },
            ),
        };

        match out {
            Some(file) => {
                let path = Path::new(file);
                ensure_writable(path, *force)?;
                std::fs::write(path, rendered)?;
                notify_write_success(format.as_str(), path);
            }
            None => println!("{rendered}"),
        }
    }
    Ok(())
}
