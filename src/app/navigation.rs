use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::app::state::{AddAgentForm, AppState, FormField, InputMode, StatusLevel};
use crate::model::Channel;

/// Longest pool buffer that still fits in a u32.
const POOL_DIGITS: usize = 9;

/// Pure key handling. Roster mutations happen here; I/O does not.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Celebration popup has priority: any key dismisses it
    if !state.ui.alerts.is_empty() {
        state.ui.alerts.dismiss();
        return;
    }

    if state.ui.show_help {
        state.ui.show_help = false;
        return;
    }

    match state.ui.mode {
        InputMode::AddAgent(_) => return handle_form_key(state, key),
        InputMode::EditPool { .. } => return handle_pool_key(state, key),
        InputMode::Normal => {}
    }

    match key.code {
        KeyCode::Char('q') => state.meta.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab => state.ui.focus = state.ui.focus.other(),
        KeyCode::Char('h') | KeyCode::Left => state.ui.focus = Channel::Crm,
        KeyCode::Char('l') | KeyCode::Right => state.ui.focus = Channel::Digital,
        KeyCode::Char('j') | KeyCode::Down => move_selection(state, 1),
        KeyCode::Char('k') | KeyCode::Up => move_selection(state, -1),
        KeyCode::Char('-') => adjust_selected(state, -1),
        KeyCode::Char('+') | KeyCode::Char('=') => adjust_selected(state, 1),
        KeyCode::Char('<') => shift_hours(state, -1),
        KeyCode::Char('>') => shift_hours(state, 1),
        KeyCode::Char('a') => {
            state.ui.mode = InputMode::AddAgent(AddAgentForm::new(state.ui.default_objectif));
        }
        KeyCode::Char('x') | KeyCode::Delete => remove_selected(state),
        KeyCode::Char('r') => {
            state.domain.roster.reset();
            state.set_status(StatusLevel::Info, "All counters reset");
        }
        KeyCode::Char('d') => dispatch_focused(state),
        KeyCode::Char('p') => {
            let channel = state.ui.focus;
            state.ui.mode = InputMode::EditPool {
                channel,
                buffer: state.domain.pools.get(channel).to_string(),
            };
        }
        KeyCode::Char('e') => state.meta.export_requested = true,
        KeyCode::Char('?') => state.ui.show_help = true,
        KeyCode::Esc => state.ui.status = None,
        _ => {}
    }
}

fn move_selection(state: &mut AppState, step: isize) {
    let channel = state.ui.focus;
    let count = state.domain.roster.enrolled_count(channel);
    if count == 0 {
        state.ui.selection.set(channel, None);
        return;
    }
    let current = state.ui.selection.get(channel).unwrap_or(0);
    let next = current.saturating_add_signed(step).min(count - 1);
    state.ui.selection.set(channel, Some(next));
}

fn adjust_selected(state: &mut AppState, delta: i64) {
    let channel = state.ui.focus;
    let Some(index) = state.selected_agent(channel) else {
        return;
    };
    if let Err(e) = state
        .domain
        .roster
        .adjust(index, channel, delta, &mut state.ui.alerts)
    {
        warn!(error = %e, "adjust rejected");
        state.set_status(StatusLevel::Error, e.to_string());
    }
}

fn shift_hours(state: &mut AppState, step: i16) {
    let channel = state.ui.focus;
    let Some(index) = state.selected_agent(channel) else {
        return;
    };
    let Some(agent) = state.domain.roster.get(index) else {
        return;
    };
    let hours = (i16::from(agent.hours) + step).clamp(0, i16::from(u8::MAX)) as u8;
    if let Err(e) = state.domain.roster.set_hours(index, hours) {
        state.set_status(StatusLevel::Error, e.to_string());
    }
}

fn remove_selected(state: &mut AppState) {
    let Some(index) = state.selected_agent(state.ui.focus) else {
        return;
    };
    match state.domain.roster.remove(index) {
        Ok(agent) => {
            state.clamp_selection();
            state.set_status(StatusLevel::Info, format!("Removed {}", agent.name));
        }
        Err(e) => state.set_status(StatusLevel::Error, e.to_string()),
    }
}

fn dispatch_focused(state: &mut AppState) {
    let channel = state.ui.focus;
    let pool = state.domain.pools.get(channel);
    let message = match state.domain.roster.dispatch(channel, pool) {
        Some(summary) => format!(
            "Dispatched {} {} RDV across {} agents",
            pool, channel, summary.agents
        ),
        None => format!("No agents enrolled in {}", channel),
    };
    state.set_status(StatusLevel::Info, message);
}

/// Key input while the add-agent form is open.
fn handle_form_key(state: &mut AppState, key: KeyEvent) {
    let InputMode::AddAgent(ref mut form) = state.ui.mode else {
        return;
    };

    match (key.code, form.field) {
        (KeyCode::Esc, _) => state.ui.mode = InputMode::Normal,
        (KeyCode::Enter, _) => submit_form(state),
        (KeyCode::Tab | KeyCode::Down, _) => form.field = form.field.next(),
        (KeyCode::BackTab | KeyCode::Up, _) => form.field = form.field.prev(),
        (KeyCode::Char(' '), FormField::Crm) => form.crm = !form.crm,
        (KeyCode::Char(' '), FormField::Digital) => form.digital = !form.digital,
        (KeyCode::Backspace, FormField::Name) => {
            form.name.pop();
        }
        (KeyCode::Backspace, FormField::Objectif) => {
            form.objectif.pop();
        }
        (KeyCode::Char(c), FormField::Name) => form.name.push(c),
        (KeyCode::Char(c), FormField::Objectif) if c.is_ascii_digit() => {
            if form.objectif.len() < POOL_DIGITS {
                form.objectif.push(c);
            }
        }
        _ => {}
    }
}

fn submit_form(state: &mut AppState) {
    let InputMode::AddAgent(ref form) = state.ui.mode else {
        return;
    };
    let objectif = if form.objectif.is_empty() {
        0
    } else {
        match form.objectif.parse::<u32>() {
            Ok(v) => v,
            Err(_) => {
                state.set_status(StatusLevel::Error, "Objectif must be a whole number");
                return;
            }
        }
    };

    let (name, crm, digital) = (form.name.clone(), form.crm, form.digital);
    // Empty names leave the form open, nothing is added
    if state.domain.roster.add(&name, objectif, crm, digital) {
        state.ui.mode = InputMode::Normal;
        state.clamp_selection();
        state.set_status(StatusLevel::Info, format!("Added {}", name.trim()));
    }
}

/// Key input while editing a pool total.
fn handle_pool_key(state: &mut AppState, key: KeyEvent) {
    let InputMode::EditPool {
        channel,
        ref mut buffer,
    } = state.ui.mode
    else {
        return;
    };

    match key.code {
        KeyCode::Esc => state.ui.mode = InputMode::Normal,
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() && buffer.len() < POOL_DIGITS => buffer.push(c),
        KeyCode::Enter => {
            let total = buffer.parse::<u32>().unwrap_or(0);
            state.domain.pools.set(channel, total);
            state.ui.mode = InputMode::Normal;
            state.set_status(StatusLevel::Info, format!("{} pool set to {}", channel, total));
        }
        _ => {}
    }
}
