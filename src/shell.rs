//! Interactive menu shell.
//!
//! A thin layer over [`Journal`]: menu dispatch, per-field prompting with
//! validation-driven re-prompts, and rendering. Reads and writes go
//! through generic `BufRead`/`Write` handles so every loop can be driven
//! end-to-end from tests with in-memory buffers.

use crate::journal::Journal;
use crate::validate::{self, MAX_SHOP_CHARS, MIN_EXPIRY_YEAR};
use std::io::{self, BufRead, Write};

/// One parsed menu choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Add,
    Delete,
    List,
    Exit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => Command::Add,
            "2" => Command::Delete,
            "3" => Command::List,
            "4" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

/// Run the menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    journal: &mut Journal,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        print_menu(output)?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(()),
        };
        match Command::parse(&line) {
            Command::Add => prompt_and_add(journal, input, output)?,
            Command::Delete => prompt_and_delete(journal, input, output)?,
            Command::List => show_sorted(journal, output)?,
            Command::Exit => return Ok(()),
            Command::Unknown => writeln!(output, "Unknown command")?,
        }
    }
}

/// Read one line, stripping the trailing `\n` or `\r\n`. `None` at end of
/// input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Menu:")?;
    writeln!(output, "  1. Add discount")?;
    writeln!(output, "  2. Delete discount(s) by shop")?;
    writeln!(output, "  3. Show discounts (sorted by shop)")?;
    writeln!(output, "  4. Exit")?;
    write!(output, "> ")?;
    output.flush()
}

/// Prompt for a shop name until one validates. `None` at end of input.
fn prompt_shop<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    loop {
        write!(output, "Shop (up to {} chars): ", MAX_SHOP_CHARS)?;
        output.flush()?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match validate::validate_shop(&line) {
            Ok(()) => return Ok(Some(line)),
            Err(reason) => writeln!(output, "Error: {}.", reason)?,
        }
    }
}

/// Prompt for a discount percentage until one validates.
fn prompt_discount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<u8>> {
    loop {
        write!(output, "Discount percent [0..100]: ")?;
        output.flush()?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match validate::validate_discount(&line) {
            Ok(discount) => return Ok(Some(discount)),
            Err(reason) => writeln!(output, "Error: {}.", reason)?,
        }
    }
}

/// Prompt for an expiry date until one validates.
fn prompt_expiry<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    loop {
        write!(
            output,
            "Expiry date (YYYY-MM-DD, year>={}): ",
            MIN_EXPIRY_YEAR
        )?;
        output.flush()?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match validate::validate_expiry(&line) {
            Ok(()) => return Ok(Some(line)),
            Err(reason) => writeln!(output, "Error: {}.", reason)?,
        }
    }
}

fn prompt_and_add<R: BufRead, W: Write>(
    journal: &mut Journal,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let shop = match prompt_shop(input, output)? {
        Some(shop) => shop,
        None => return Ok(()),
    };
    let discount = match prompt_discount(input, output)? {
        Some(discount) => discount,
        None => return Ok(()),
    };
    let expiry = match prompt_expiry(input, output)? {
        Some(expiry) => expiry,
        None => return Ok(()),
    };
    match journal.add(&shop, discount, &expiry) {
        Ok(()) => writeln!(output, "OK."),
        Err(_) => writeln!(output, "Error: not enough memory."),
    }
}

fn prompt_and_delete<R: BufRead, W: Write>(
    journal: &mut Journal,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let shop = match prompt_shop(input, output)? {
        Some(shop) => shop,
        None => return Ok(()),
    };
    match journal.delete_by_shop(&shop) {
        0 => writeln!(output, "No discounts have been deleted."),
        removed => writeln!(output, "Amount of discounts deleted: {}", removed),
    }
}

/// Render the journal sorted by shop with 1-based positions.
fn show_sorted<W: Write>(journal: &mut Journal, output: &mut W) -> io::Result<()> {
    if journal.is_empty() {
        return writeln!(output, "No discounts yet.");
    }
    writeln!(output, "Your discounts (sorted by shop):")?;
    for (position, record) in journal.list_sorted().iter().enumerate() {
        writeln!(output, "{}. Shop: {}", position + 1, record.shop)?;
        writeln!(output, "   Discount: {}%", record.discount)?;
        writeln!(output, "   Expiry:   {}", record.expiry)?;
    }
    Ok(())
}
