use crate::cli::commands::reference_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::CalendarLayout;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::iso_weekday;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Layout { date, labels } = cmd {
        let today = reference_date(date, cfg)?;
        let layout = CalendarLayout::new(today)?;
        let canvas = layout.canvas();

        header(format!("Calendar layout for {}", today));

        println!(
            "{:<14}{} ({})",
            "start date:",
            layout.start_date,
            layout.start_date.format("%A")
        );
        println!("{:<14}{} (ISO {})", "today:", today.format("%A"), iso_weekday(today));
        println!("{:<14}{}", "full weeks:", layout.full_weeks);
        println!("{:<14}{}", "full offset:", layout.full_offset);
        println!("{:<14}{}", "last offset:", layout.last_offset);
        println!("{:<14}{}x{}", "canvas:", canvas.width, canvas.height);
        println!("{:<14}{}", "cells:", layout.cells().len());

        if *labels {
            println!();
            for l in layout.month_labels() {
                println!(
                    "  week {:>2}  x={:>3}  {}  ({})",
                    l.week,
                    l.x,
                    Colour::Cyan.paint(&l.text),
                    l.date
                );
            }
        }
    }
    Ok(())
}
