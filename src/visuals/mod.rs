mod formatters;

use crate::mode::{DATATYPE, SELECT_ALL};
use crate::options::ParsedOptions;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_flag, format_leftovers};

pub fn summary_line(options: &ParsedOptions) -> String {
    let declared = options.mode().flag_names().len();
    let enabled = options.enabled_flags().count();
    let suffix = if options.select_all_requested() {
        " via --all"
    } else {
        ""
    };
    format!(
        "✓ {}: {}/{} flags enabled{} (datatype: {})",
        options.mode(),
        enabled,
        declared,
        suffix,
        options.datatype()
    )
}

pub fn options_table(options: &ParsedOptions, leftovers: &[String]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Option").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    for (name, value) in options.flags() {
        if name == SELECT_ALL {
            continue;
        }
        table.add_row(vec![Cell::new(format!("--{name}")), Cell::new(format_flag(value))]);
    }
    if options.mode().supports_select_all() {
        table.add_row(vec![
            Cell::new(format!("--{SELECT_ALL}")),
            Cell::new(format_flag(options.select_all_requested())),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!("--{DATATYPE}")),
        Cell::new(options.datatype()),
    ]);
    table.add_row(vec![
        Cell::new("Unrecognized"),
        Cell::new(format_leftovers(leftovers)),
    ]);

    table
}

pub fn print_summary(options: &ParsedOptions) {
    println!("{}", summary_line(options));
}

pub fn print_detailed(options: &ParsedOptions, leftovers: &[String]) {
    println!("{}\n", options_table(options, leftovers));
    print_summary(options);
}
