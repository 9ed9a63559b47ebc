//! Example: build a header row and a data row the way a streaming sheet
//! writer would buffer them

use chrono::{TimeZone, Utc};
use sheetstream::prelude::*;

fn main() -> Result<()> {
    let mut styles = StyleTable::new();
    let heading = styles.intern(StreamStyle::new().bold(true).fill_color(Color::rgb(221, 235, 247)));

    // Header spans the three data columns
    let header = vec![
        Cell::styled_string("Shipment", heading).with_merge(2, 0),
        Cell::string(""),
        Cell::string(""),
    ];

    let shipped = Utc.with_ymd_and_hms(2024, 3, 12, 9, 30, 0).unwrap();
    let data = vec![Cell::string("Widgets"), Cell::integer(1250), Cell::date(&shipped)];

    for (r, row) in [header, data].iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let addr = CellAddress::new(r as u32, c as u16);
            let style = styles.resolve(cell.style())?;
            println!(
                "{}: {:?} [{}] numFmt={} bold={}",
                addr,
                cell.payload(),
                cell.cell_type(),
                style.number_format.format_string(),
                style.bold
            );
            if let Some(range) = cell.merged_range(addr) {
                println!("  <mergeCell ref=\"{}\"/>", range);
            }
        }
    }

    Ok(())
}
