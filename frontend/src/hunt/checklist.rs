use std::collections::BTreeMap;

use log::{debug, warn};
use thiserror::Error;

use crate::config::{CHECKED_KEY, MIN_TO_SUBMIT, TEAM_KEY};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub text: &'static str,
}

pub static SKIER_ITEMS: [ChecklistItem; 9] = [
    ChecklistItem { id: "q1", text: "Group photo spelling WHU" },
    ChecklistItem { id: "q2", text: "Ski patrol shack or sign" },
    ChecklistItem { id: "q3", text: "Fake action shot (jump pose without jumping)" },
    ChecklistItem { id: "q4", text: "Snow angel in ski boots" },
    ChecklistItem { id: "q5", text: "Best ski goggle reflection shot" },
    ChecklistItem { id: "q6", text: "A dramatic “end of run” victory pose" },
    ChecklistItem { id: "q7", text: "A wipeout aftermath (bonus if laughing)" },
    ChecklistItem { id: "q8", text: "Photo from behind showing everyone skiing away" },
    ChecklistItem { id: "q9", text: "Après-ski drink cheers (bonus 🍻)" },
];

/// Item id -> completed. Stored as JSON under [`CHECKED_KEY`].
pub type ChecklistState = BTreeMap<String, bool>;

/// Why the "Submit Photos" link is not allowed to navigate yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("Please enter your team name before submitting.")]
    MissingTeamName,
    #[error("Check off at least {needed} photos to submit.")]
    NotEnoughPhotos { needed: usize },
}

fn default_state() -> ChecklistState {
    SKIER_ITEMS
        .iter()
        .map(|item| (item.id.to_string(), false))
        .collect()
}

/// Skier checklist plus team name, mirrored into a [`KeyValueStore`].
///
/// Mutating methods always update the in-memory state first and then report
/// whether the write to the store went through, so a broken storage never
/// blocks the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SkierChecklist {
    checked: ChecklistState,
    team_name: String,
    /// Last blocked submit. Cleared by save, reset and a successful submit.
    blocked: Option<SubmitBlocked>,
}

impl Default for SkierChecklist {
    fn default() -> Self {
        Self {
            checked: default_state(),
            team_name: String::new(),
            blocked: None,
        }
    }
}

impl SkierChecklist {
    pub fn load(store: &impl KeyValueStore) -> Self {
        let team_name = match store.get_item(TEAM_KEY) {
            Ok(team) => team.map(|t| t.trim().to_string()).unwrap_or_default(),
            Err(e) => {
                warn!("Could not read team name: {}", e);
                String::new()
            }
        };

        let raw = match store.get_item(CHECKED_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read checklist: {}", e);
                None
            }
        };

        let mut checked = default_state();
        if let Some(raw) = raw {
            match serde_json::from_str::<ChecklistState>(&raw) {
                Ok(saved) => {
                    for (id, done) in saved {
                        if let Some(slot) = checked.get_mut(&id) {
                            *slot = done;
                        }
                    }
                }
                Err(e) => warn!("Ignoring unreadable checklist ({}), starting fresh", e),
            }
        }

        Self { checked, team_name, blocked: None }
    }

    pub fn items(&self) -> &'static [ChecklistItem] {
        &SKIER_ITEMS
    }

    pub fn state(&self) -> &ChecklistState {
        &self.checked
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn blocked(&self) -> Option<SubmitBlocked> {
        self.blocked
    }

    pub fn checked_count(&self) -> usize {
        SKIER_ITEMS.iter().filter(|item| self.is_checked(item.id)).count()
    }

    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    /// Team name is checked before the photo count.
    pub fn check_submit(&self) -> Result<(), SubmitBlocked> {
        if self.team_name.is_empty() {
            return Err(SubmitBlocked::MissingTeamName);
        }
        if self.checked_count() < MIN_TO_SUBMIT {
            return Err(SubmitBlocked::NotEnoughPhotos { needed: MIN_TO_SUBMIT });
        }
        Ok(())
    }

    /// Records why the submit was refused, or clears the old message.
    pub fn submit(&mut self) -> Result<(), SubmitBlocked> {
        let result = self.check_submit();
        self.blocked = result.err();
        result
    }

    pub fn progress_text(&self) -> String {
        format!(
            "Progress: {}/{} (need {}+ to submit)",
            self.checked_count(),
            SKIER_ITEMS.len(),
            MIN_TO_SUBMIT
        )
    }

    /// Flips one item and writes the whole map back. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str, store: &impl KeyValueStore) -> Result<(), StorageError> {
        let Some(done) = self.checked.get_mut(id) else {
            debug!("Ignoring toggle for unknown item {}", id);
            return Ok(());
        };
        *done = !*done;
        debug!("Item {} is now {}", id, *done);
        self.persist_checked(store)
    }

    pub fn save_team(&mut self, name: &str, store: &impl KeyValueStore) -> Result<(), StorageError> {
        self.blocked = None;
        self.team_name = name.trim().to_string();
        debug!("Saving team name '{}'", self.team_name);
        store.set_item(TEAM_KEY, &self.team_name)
    }

    pub fn reset_team(&mut self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        self.blocked = None;
        self.team_name.clear();
        store.remove_item(TEAM_KEY)
    }

    fn persist_checked(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.checked).map_err(|e| StorageError::Encode {
            key: CHECKED_KEY.to_string(),
            message: e.to_string(),
        })?;
        store.set_item(CHECKED_KEY, &json)
    }
}
