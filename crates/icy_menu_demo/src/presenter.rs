//! Text mode menu presenter
//!
//! Prints the menu as an indented list where every entry gets a number.
//! Numbers follow the depth-first entry order of [`Menu::entries`].

use std::io::{self, BufRead, Write};

use icy_menu_engine::{Menu, MenuEntry, MenuItem, MenuPresenter, ScreenPoint};

pub struct ConsolePresenter<R, W> {
    input: R,
    output: W,
    select: Option<String>,
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, select: None }
    }

    /// Pick the entry with `id` instead of asking
    pub fn with_selection(mut self, id: Option<String>) -> Self {
        self.select = id;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn render(&mut self, menu: &Menu, at: ScreenPoint) -> io::Result<()> {
        writeln!(self.output, "Context menu at ({}, {}):", at.x, at.y)?;
        if menu.is_empty() {
            writeln!(self.output, "  (empty)")?;
            return Ok(());
        }
        let mut number = 0;
        write_items(&mut self.output, menu.items(), 1, &mut number)
    }

    fn ask<'m>(&mut self, menu: &'m Menu) -> io::Result<Option<&'m MenuEntry>> {
        let entries = menu.entries();
        loop {
            write!(self.output, "Select entry (empty or q to dismiss): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.is_empty() || line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            match line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| entries.get(i).copied()) {
                Some(entry) if entry.enabled => return Ok(Some(entry)),
                Some(entry) => writeln!(self.output, "'{}' is disabled", entry.label)?,
                None => writeln!(self.output, "No entry '{}'", line)?,
            }
        }
    }
}

fn write_items(output: &mut impl Write, items: &[MenuItem], depth: usize, number: &mut usize) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            MenuItem::Entry(entry) => {
                *number += 1;
                write!(output, "{indent}{:>2}. {}", number, entry.label)?;
                if let Some(shortcut) = &entry.shortcut {
                    write!(output, "  [{}]", shortcut)?;
                }
                if !entry.enabled {
                    write!(output, "  (disabled)")?;
                }
                writeln!(output)?;
            }
            MenuItem::Separator => writeln!(output, "{indent}----")?,
            MenuItem::SubMenu(sub) => {
                writeln!(output, "{indent}{} >", sub.label)?;
                write_items(output, &sub.items, depth + 1, number)?;
            }
        }
    }
    Ok(())
}

impl<R: BufRead, W: Write> MenuPresenter for ConsolePresenter<R, W> {
    fn present<'m>(&mut self, menu: &'m Menu, at: ScreenPoint) -> Option<&'m MenuEntry> {
        if let Err(err) = self.render(menu, at) {
            log::warn!("failed to print menu: {}", err);
            return None;
        }

        if let Some(id) = self.select.as_deref() {
            return match menu.find(id) {
                Some(entry) if entry.enabled => Some(entry),
                Some(_) => {
                    log::warn!("entry '{}' is disabled", id);
                    None
                }
                None => {
                    log::warn!("no entry '{}' in this menu", id);
                    None
                }
            };
        }

        if menu.entries().is_empty() {
            return None;
        }
        match self.ask(menu) {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("failed to read selection: {}", err);
                None
            }
        }
    }
}
