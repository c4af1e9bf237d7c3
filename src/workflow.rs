use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use combobox::{
    BadgeView, Combobox, OptionAccessors, OptionFetcher, OptionKey, OptionSet, VisibleOptions,
    json_accessors,
};
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::settings::ResolvedConfig;

/// Result of one CLI run: what the combobox would render after the query and
/// selection actions were applied.
#[derive(Debug, Serialize)]
pub(crate) struct SelectionOutcome {
    pub(crate) query: String,
    pub(crate) grouped: bool,
    pub(crate) groups: Vec<OutcomeGroup>,
    pub(crate) selected: Vec<Value>,
    pub(crate) badges: BadgeView,
    pub(crate) empty_message: Option<String>,
    pub(crate) error: Option<String>,
}

/// Visible options under one heading. Flat lists use a single unnamed group.
#[derive(Debug, Serialize)]
pub(crate) struct OutcomeGroup {
    pub(crate) group: Option<String>,
    pub(crate) options: Vec<OutcomeOption>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OutcomeOption {
    pub(crate) key: OptionKey,
    pub(crate) label: String,
    pub(crate) selected: bool,
    pub(crate) disabled: bool,
}

/// Coordinates loading the option document and driving a combobox through
/// the requested actions.
pub(crate) struct ComboboxWorkflow {
    settings: ResolvedConfig,
    options: OptionSet<Value>,
}

impl ComboboxWorkflow {
    pub(crate) fn from_config(settings: ResolvedConfig) -> Result<Self> {
        let text = read_document(&settings.file)?;
        let options = OptionSet::<Value>::from_json_str(&text)
            .with_context(|| format!("failed to parse options from {}", settings.file.display()))?;
        info!(
            "loaded {} options from {} (grouped: {})",
            options.len(),
            settings.file.display(),
            options.is_grouped()
        );
        Ok(Self { settings, options })
    }

    pub(crate) async fn run(self) -> Result<SelectionOutcome> {
        let Self { settings, options } = self;
        let accessors = json_accessors(&settings.fields);

        let builder = Combobox::builder(accessors.clone()).with_config(settings.behavior.clone());
        let builder = match settings.viewport() {
            Some(viewport) => builder.with_viewport(viewport),
            None => builder,
        };
        let mut combobox = if settings.remote {
            builder
                .with_fetcher(DocumentFetcher::new(options, accessors))
                .build()
        } else {
            builder.with_options(options).build()
        };

        if combobox.is_remote() {
            combobox.load();
            combobox.settle().await;
        }
        combobox.set_query(&settings.query);
        combobox.settle().await;

        for key in &settings.select {
            if !toggle_by_text(&mut combobox, key) {
                warn!("no selectable option with key {key:?}");
            }
        }
        if settings.select_all {
            combobox.select_all();
        }

        Ok(outcome(&combobox))
    }
}

/// Toggle the option whose key renders as `key`, trying text keys before
/// integer keys.
fn toggle_by_text(combobox: &mut Combobox<Value>, key: &str) -> bool {
    if combobox.toggle(&OptionKey::from(key)) {
        return true;
    }
    match key.parse::<i64>() {
        Ok(int) => combobox.toggle(&OptionKey::Int(int)),
        Err(_) => false,
    }
}

fn outcome(combobox: &Combobox<Value>) -> SelectionOutcome {
    let view = combobox.view();
    let accessors = combobox.accessors();
    let selection = combobox.selection();
    let entries = |options: &[&Value]| -> Vec<OutcomeOption> {
        options
            .iter()
            .map(|option| {
                let key = accessors.key(option);
                OutcomeOption {
                    selected: selection.contains(&key),
                    label: accessors.label(option),
                    disabled: accessors.is_disabled(option),
                    key,
                }
            })
            .collect()
    };

    let groups = match &view.options {
        VisibleOptions::Flat(options) => vec![OutcomeGroup {
            group: None,
            options: entries(options.as_slice()),
        }],
        VisibleOptions::Grouped(groups) => groups
            .iter()
            .map(|group| OutcomeGroup {
                group: Some(group.group.to_string()),
                options: entries(group.options.as_slice()),
            })
            .collect(),
    };

    SelectionOutcome {
        query: view.query.to_string(),
        grouped: view.options.is_grouped(),
        groups,
        selected: selection.values().cloned().collect(),
        badges: view.badges.clone(),
        empty_message: view.empty_message.map(str::to_string),
        error: view.error.map(str::to_string),
    }
}

fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read options from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Serves an in-memory option document as if it were a search backend:
/// every request returns the flattened options whose label contains the
/// query.
struct DocumentFetcher {
    options: Vec<Value>,
    accessors: OptionAccessors<Value>,
}

impl DocumentFetcher {
    fn new(options: OptionSet<Value>, accessors: OptionAccessors<Value>) -> Self {
        Self {
            options: options.iter().cloned().collect(),
            accessors,
        }
    }
}

#[async_trait]
impl OptionFetcher<Value> for DocumentFetcher {
    async fn fetch(&self, query: &str) -> Result<Vec<Value>> {
        let needle = query.to_lowercase();
        Ok(self
            .options
            .iter()
            .filter(|option| self.accessors.label(option).to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
