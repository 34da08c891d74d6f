use tokio::runtime::Handle;
use tracing::debug;

use super::command::{Command, HELP};
use super::error::ConsoleError;
use super::render::{render_counts, render_item, render_state, render_user, render_weather};
use crate::config::Config;
use crate::controller::FetchController;
use crate::datastore::{ItemDataStore, ListStore};
use crate::model::Filter;
use crate::service::{User, UserDirectory, Weather, WeatherService};

/// Owns the task list and the lookups of one console.
///
/// Every command re-reads the store or the controllers to produce its
/// output; nothing is pushed to the console.
pub struct Session {
    store: ListStore,
    weather: FetchController<Weather>,
    users: FetchController<Vec<User>>,
    profile: FetchController<User>,
    weather_service: WeatherService,
    directory: UserDirectory,
}

impl Session {
    pub fn new(runtime: Handle, config: &Config) -> Result<Self, ConsoleError> {
        Ok(Self {
            store: ListStore::new(),
            weather: FetchController::new(runtime.clone()),
            users: FetchController::new(runtime.clone()),
            profile: FetchController::new(runtime),
            weather_service: WeatherService::new(&config.weather)?,
            directory: UserDirectory::new(&config.users)?,
        })
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn weather(&self) -> &FetchController<Weather> {
        &self.weather
    }

    pub fn users(&self) -> &FetchController<Vec<User>> {
        &self.users
    }

    pub fn profile(&self) -> &FetchController<User> {
        &self.profile
    }

    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, ConsoleError> {
        debug!(?command, "executing");
        let lines = match command {
            Command::Add(text) => {
                let id = self.store.add(&text)?;
                vec![format!("added {}", id)]
            }
            Command::Toggle(id) => {
                self.store.toggle(id)?;
                vec![render_item(&self.store.get(id)?)]
            }
            Command::Edit(id, text) => {
                self.store.update(id, &text)?;
                vec![render_item(&self.store.get(id)?)]
            }
            Command::Remove(id) => {
                let item = self.store.remove(id)?;
                vec![format!("removed {}", item.text)]
            }
            Command::List(filter) => self.list(filter),
            Command::Weather(city) => {
                self.weather.start(self.weather_service.fetch(&city))?;
                vec![format!("looking up the weather in {}...", city)]
            }
            Command::Users(limit) => {
                self.users.start(self.directory.list(limit))?;
                vec!["loading users...".to_string()]
            }
            Command::User(id) => {
                self.profile.start(self.directory.get(id))?;
                vec![format!("loading user {}...", id)]
            }
            Command::Status => self.status(),
            Command::Clear => {
                self.weather.cancel();
                self.users.cancel();
                self.profile.cancel();
                vec!["cleared".to_string()]
            }
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Quit => vec![],
        };
        Ok(lines)
    }

    fn list(&self, filter: Filter) -> Vec<String> {
        let mut lines: Vec<String> = self.store.view(filter).iter().map(render_item).collect();
        if lines.is_empty() {
            lines.push(format!("no {} tasks", filter));
        }
        lines.push(render_counts(&self.store.counts()));
        lines
    }

    fn status(&self) -> Vec<String> {
        let mut lines = render_state("weather", &self.weather.current_state(), render_weather);
        lines.extend(render_state("users", &self.users.current_state(), |users| {
            users.iter().flat_map(render_user).collect()
        }));
        lines.extend(render_state("user", &self.profile.current_state(), render_user));
        lines
    }

    pub fn dispose(&self) {
        self.weather.dispose();
        self.users.dispose();
        self.profile.dispose();
    }
}
