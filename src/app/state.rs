use std::collections::VecDeque;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::model::Channel;
use crate::roster::{Notifier, Roster};

/// Main application state.
/// Mutated only through `update(&mut state, event)`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Roster and pool totals
    pub domain: DomainState,

    /// Focus, selection, modal layers, status line
    pub ui: UiState,

    /// Lifecycle flags read by the event loop
    pub meta: MetaState,
}

#[derive(Debug, Clone, Default)]
pub struct DomainState {
    pub roster: Roster,
    pub pools: Pools,
}

/// Per-channel pool totals fed to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pools {
    pub crm: u32,
    pub digital: u32,
}

impl Default for Pools {
    fn default() -> Self {
        Self {
            crm: 100,
            digital: 50,
        }
    }
}

impl Pools {
    pub fn get(&self, channel: Channel) -> u32 {
        match channel {
            Channel::Crm => self.crm,
            Channel::Digital => self.digital,
        }
    }

    pub fn set(&mut self, channel: Channel, total: u32) {
        match channel {
            Channel::Crm => self.crm = total,
            Channel::Digital => self.digital = total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    /// Channel panel receiving agent actions
    pub focus: Channel,

    /// Selected row in each channel panel (position in that channel's enrolled list)
    pub selection: Selection,

    pub mode: InputMode,

    /// Pending celebrations, shown one at a time
    pub alerts: AlertQueue,

    pub status: Option<StatusLine>,

    pub show_help: bool,

    /// Last tick time
    pub now: DateTime<Utc>,

    pub top_n: usize,
    pub default_objectif: u32,
    pub status_secs: i64,
}

#[derive(Debug, Clone)]
pub struct MetaState {
    pub should_quit: bool,

    /// Set by the `e` key; the event loop performs the export and clears it
    pub export_requested: bool,

    pub started_at: Instant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub crm: Option<usize>,
    pub digital: Option<usize>,
}

impl Selection {
    pub fn get(&self, channel: Channel) -> Option<usize> {
        match channel {
            Channel::Crm => self.crm,
            Channel::Digital => self.digital,
        }
    }

    pub fn set(&mut self, channel: Channel, position: Option<usize>) {
        match channel {
            Channel::Crm => self.crm = position,
            Channel::Digital => self.digital = position,
        }
    }
}

/// Modal input layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    AddAgent(AddAgentForm),
    EditPool { channel: Channel, buffer: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Objectif,
    Crm,
    Digital,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Objectif,
            FormField::Objectif => FormField::Crm,
            FormField::Crm => FormField::Digital,
            FormField::Digital => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Digital,
            FormField::Objectif => FormField::Name,
            FormField::Crm => FormField::Objectif,
            FormField::Digital => FormField::Crm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAgentForm {
    pub name: String,
    pub objectif: String,
    pub crm: bool,
    pub digital: bool,
    pub field: FormField,
}

impl AddAgentForm {
    /// Empty name, default objectif, both channels checked.
    pub fn new(default_objectif: u32) -> Self {
        Self {
            name: String::new(),
            objectif: default_objectif.to_string(),
            crm: true,
            digital: true,
            field: FormField::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub level: StatusLevel,
    pub at: DateTime<Utc>,
}

/// FIFO of celebration messages; the UI's `Notifier`.
#[derive(Debug, Clone, Default)]
pub struct AlertQueue(VecDeque<String>);

impl AlertQueue {
    pub fn front(&self) -> Option<&str> {
        self.0.front().map(String::as_str)
    }

    pub fn dismiss(&mut self) -> Option<String> {
        self.0.pop_front()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Notifier for AlertQueue {
    fn notify(&mut self, message: &str) {
        self.0.push_back(message.to_string());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new state with default config values
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            domain: DomainState {
                roster: Roster::new(),
                pools: Pools {
                    crm: config.crm_pool,
                    digital: config.digital_pool,
                },
            },
            ui: UiState {
                focus: Channel::Crm,
                selection: Selection::default(),
                mode: InputMode::Normal,
                alerts: AlertQueue::default(),
                status: None,
                show_help: false,
                now: Utc::now(),
                top_n: config.top_n,
                default_objectif: config.default_objectif,
                status_secs: config.status_secs,
            },
            meta: MetaState {
                should_quit: false,
                export_requested: false,
                started_at: Instant::now(),
            },
        }
    }

    /// Create new state around an existing roster
    pub fn with_roster(roster: Roster) -> Self {
        let mut state = Self::new();
        state.domain.roster = roster;
        state.clamp_selection();
        state
    }

    /// Roster index of the selected agent in `channel`'s panel.
    pub fn selected_agent(&self, channel: Channel) -> Option<usize> {
        let position = self.ui.selection.get(channel)?;
        self.domain
            .roster
            .enrolled(channel)
            .nth(position)
            .map(|(index, _)| index)
    }

    /// Keep each panel's selection inside its enrolled list.
    pub fn clamp_selection(&mut self) {
        for channel in Channel::ALL {
            let count = self.domain.roster.enrolled_count(channel);
            let position = match (count, self.ui.selection.get(channel)) {
                (0, _) => None,
                (_, None) => Some(0),
                (n, Some(p)) => Some(p.min(n - 1)),
            };
            self.ui.selection.set(channel, position);
        }
    }

    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.ui.status = Some(StatusLine {
            message: message.into(),
            level,
            at: self.ui.now,
        });
    }
}
