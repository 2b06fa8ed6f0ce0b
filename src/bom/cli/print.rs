use bom::api::{CmdMessage, MessageLevel};
use bom::config::{BomConfig, CONFIG_KEYS};
use bom::model::ComponentRecord;
use colored::Colorize;
use std::rc::Rc;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Prints the rendered assembly, header in bold, followed by its total.
pub(super) fn print_assembly(lines: &[String], total_cost: Option<f64>) {
    let mut lines = lines.iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }
    if let Some(total) = total_cost {
        println!("{} {}", "Total:".bold(), format!("${}", total).green());
    }
}

pub(super) fn print_catalog(records: &[Rc<ComponentRecord>]) {
    if records.is_empty() {
        return;
    }
    println!();
    println!("{}", "Catalog:".bold());
    for (i, record) in records.iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().yellow(), record);
    }
}

pub(super) fn print_config(config: &BomConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
