use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::partition::{Chip, Selection};
use crate::ui::Msg;
use crate::ui::model::{Model, initial_model};
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
    window_size,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use tracing::{info, warn};

// `TeaModel::init` takes no arguments, so each run hands its catalog over through here.
static PENDING_CATALOG: Lazy<Mutex<Option<Catalog>>> = Lazy::new(|| Mutex::new(None));

fn install_catalog(catalog: Catalog) {
    match PENDING_CATALOG.lock() {
        Ok(mut slot) => *slot = Some(catalog),
        Err(poisoned) => *poisoned.into_inner() = Some(catalog),
    }
}

fn take_catalog() -> Option<Catalog> {
    match PENDING_CATALOG.lock() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    }
}

/// Non-interactive mode: add each name in order and return the resulting partition.
pub fn run(catalog: Catalog, names: &[String]) -> Result<Selection> {
    let mut selection = Selection::new(catalog);
    let mut unknown = Vec::new();
    for name in names {
        if let Err(e) = selection.add_by_name(name) {
            warn!(%name, error = %e, "name did not resolve");
            unknown.push(name.clone());
        }
    }
    if !unknown.is_empty() {
        return Err(Error::UnknownNames(unknown));
    }
    Ok(selection)
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
struct TeaAdapter {
    inner: Model,
}

enum KeyAction {
    Send(Msg),
    Quit,
    Ignore,
}

fn map_key(key: &KeyCode, modifiers: KeyModifiers) -> KeyAction {
    match key {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Send(Msg::KeyEnter),
        KeyCode::Tab => KeyAction::Send(Msg::KeyTab),
        KeyCode::Backspace => KeyAction::Send(Msg::KeyBackspace),
        KeyCode::Delete => KeyAction::Send(Msg::KeyDelete),
        KeyCode::Up => KeyAction::Send(Msg::KeyUp),
        KeyCode::Down => KeyAction::Send(Msg::KeyDown),
        KeyCode::Left => KeyAction::Send(Msg::KeyLeft),
        KeyCode::Right => KeyAction::Send(Msg::KeyRight),
        KeyCode::Char(ch) => {
            // Control-key handling
            if modifiers.contains(KeyModifiers::CONTROL) {
                match ch {
                    'n' | 'N' => KeyAction::Send(Msg::KeyDown),
                    'p' | 'P' => KeyAction::Send(Msg::KeyUp),
                    ' ' => KeyAction::Send(Msg::FieldActivated),
                    'c' | 'C' => KeyAction::Quit,
                    _ => KeyAction::Ignore,
                }
            } else if *ch == '\u{03}' {
                // Ctrl-C delivered as ETX
                KeyAction::Quit
            } else {
                KeyAction::Send(Msg::Rune(*ch))
            }
        }
        _ => KeyAction::Ignore,
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let catalog = take_catalog().unwrap_or_else(|| {
            warn!("no catalog handed over; using the built-in one");
            Catalog::builtin()
        });
        let mut adapter = TeaAdapter {
            inner: initial_model(catalog),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        (adapter, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            match map_key(&km.key, km.modifiers) {
                KeyAction::Send(m) => self.inner.update(m),
                KeyAction::Quit => {
                    self.inner.done = true;
                    return Some(bubbletea_rs::quit());
                }
                KeyAction::Ignore => {}
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Run the interactive picker and return the chips selected when the user leaves.
pub async fn run_interactive(catalog: Catalog) -> Result<Vec<Chip>> {
    install_catalog(catalog);
    let program = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()
        .map_err(|e| Error::Program(format!("failed to build program: {e:?}")))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| Error::Program(format!("{e:?}")))?;

    let chips = final_adapter.inner.selection.selected().to_vec();
    info!(count = chips.len(), done = final_adapter.inner.done, "picker closed");
    Ok(chips)
}
