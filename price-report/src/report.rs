//! Renders the Persian price report for the Galaxy A56 listings.

use crate::errors::ReportError;
use price_report_lib::torob::{
    dto::{PriceEntry, PriceRange},
    listings::{LISTINGS, NOTES, PRODUCT_NAME, SEARCH_QUERY, SOURCE},
};
use std::io::{self, Write};

pub const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;

/// Writes the full report to stdout.
pub fn run() -> Result<(), ReportError> {
    let mut out = io::stdout().lock();
    write_report(&mut out, &LISTINGS)?;
    out.flush()?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, entries: &[PriceEntry]) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "📱 قیمت\u{200c}های {PRODUCT_NAME} در ایران")?;
    writeln!(out, "{banner}")?;
    writeln!(out)?;

    writeln!(out, "🔍 نتایج جستجو از {SOURCE}:")?;
    writeln!(out, "{rule}")?;
    for entry in entries {
        writeln!(out, "📦 {PRODUCT_NAME} - {} RAM:", entry.variant)?;
        writeln!(
            out,
            "   💰 ارزان\u{200c}ترین قیمت: {} تومان",
            entry.price_toman.grouped_persian()
        )?;
        writeln!(out, "   🏪 منبع: {}", entry.source)?;
        writeln!(out)?;
    }

    writeln!(out, "💱 تبدیل به ریال:")?;
    writeln!(out, "{rule}")?;
    for entry in entries {
        writeln!(out, "   {}: {} ریال", entry.variant, entry.price_rial())?;
    }
    writeln!(out)?;

    writeln!(out, "📊 رنج قیمت کلی:")?;
    writeln!(out, "{rule}")?;
    if let Some(range) = PriceRange::of(entries) {
        writeln!(
            out,
            "   🔻 پایین\u{200c}ترین قیمت: {} تومان",
            range.min.grouped_persian()
        )?;
        writeln!(out, "   🔺 بالاترین قیمت: {} تومان", range.max.grouped_persian())?;
    }
    writeln!(out)?;

    writeln!(out, "ℹ\u{fe0f}  توضیحات:")?;
    writeln!(out, "{rule}")?;
    for note in NOTES {
        writeln!(out, "   • {note}")?;
    }
    writeln!(out)?;

    writeln!(out, "{banner}")?;
    writeln!(out, "🔗 لینک جستجو: {SEARCH_QUERY}")?;
    writeln!(out, "{banner}")
}
