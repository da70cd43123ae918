//! Prompt records and the read-only store that owns them.
//!
//! Ids are assigned by the store in insertion order, starting at zero and
//! running across every prompt list, so a store with `n` prompts always
//! holds exactly the ids `0..n`.
use core::fmt;
use core::ops::Range;

use crate::config::GameConfig;

/// Stable identifier of a prompt for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PromptId(pub u32);

impl PromptId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PromptId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Answers of a prompt in display (rank) order.
pub type Answers = [String; GameConfig::ANSWER_COUNT];

/// A question with exactly four ranked answers, before it has an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptDraft {
    pub text: String,
    pub answers: Answers,
}

impl PromptDraft {
    pub fn new(text: impl Into<String>, answers: Answers) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }
}

/// A loaded prompt. Immutable once it is in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prompt {
    id: PromptId,
    text: String,
    answers: Answers,
}

impl Prompt {
    pub fn id(&self) -> PromptId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }
}

/// A named group of prompts that came from one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptList {
    name: String,
    ids: Range<u32>,
}

impl PromptList {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: PromptId) -> bool {
        self.ids.contains(&id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = PromptId> + '_ {
        self.ids.clone().map(PromptId)
    }
}

/// Ordered, append-only collection of prompts.
///
/// Built once at startup; the rest of the show only reads from it.
#[derive(Clone, Debug, Default)]
pub struct PromptStore {
    prompts: Vec<Prompt>,
    lists: Vec<PromptList>,
}

impl PromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named list, assigning the next sequential ids in order.
    pub fn push_list(
        &mut self,
        name: impl Into<String>,
        drafts: impl IntoIterator<Item = PromptDraft>,
    ) -> &PromptList {
        let start = self.prompts.len() as u32;
        for draft in drafts {
            let id = PromptId(self.prompts.len() as u32);
            self.prompts.push(Prompt {
                id,
                text: draft.text,
                answers: draft.answers,
            });
        }
        let end = self.prompts.len() as u32;

        self.lists.push(PromptList {
            name: name.into(),
            ids: start..end,
        });
        &self.lists[self.lists.len() - 1]
    }

    /// Builds a store holding a single list.
    pub fn from_drafts(
        name: impl Into<String>,
        drafts: impl IntoIterator<Item = PromptDraft>,
    ) -> Self {
        let mut store = Self::new();
        store.push_list(name, drafts);
        store
    }

    /// Looks a prompt up by id; `None` when the id was never assigned.
    pub fn get_by_id(&self, id: PromptId) -> Option<&Prompt> {
        self.prompts.get(id.index())
    }

    pub fn contains(&self, id: PromptId) -> bool {
        id.index() < self.prompts.len()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = PromptId> + '_ {
        self.prompts.iter().map(Prompt::id)
    }

    pub fn lists(&self) -> &[PromptList] {
        &self.lists
    }

    /// Name of the list a prompt belongs to.
    pub fn list_of(&self, id: PromptId) -> Option<&PromptList> {
        self.lists.iter().find(|list| list.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str) -> PromptDraft {
        PromptDraft::new(
            text,
            [
                format!("{text} 1"),
                format!("{text} 2"),
                format!("{text} 3"),
                format!("{text} 4"),
            ],
        )
    }

    #[test]
    fn assigns_sequential_ids_across_lists() {
        let mut store = PromptStore::new();
        store.push_list("Classic", [draft("a"), draft("b")]);
        store.push_list("Spicy", [draft("c")]);

        let ids: Vec<_> = store.ids().collect();
        assert_eq!(ids, vec![PromptId(0), PromptId(1), PromptId(2)]);
        assert_eq!(store.get_by_id(PromptId(2)).unwrap().text(), "c");
        assert_eq!(store.list_of(PromptId(2)).unwrap().name(), "Spicy");
        assert_eq!(store.lists()[0].len(), 2);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = PromptStore::from_drafts("Classic", [draft("a")]);
        assert!(store.get_by_id(PromptId(1)).is_none());
        assert!(!store.contains(PromptId(1)));
    }

    #[test]
    fn answers_keep_rank_order() {
        let store = PromptStore::from_drafts("Classic", [draft("q")]);
        let prompt = store.get_by_id(PromptId(0)).unwrap();
        assert_eq!(prompt.answer(0), Some("q 1"));
        assert_eq!(prompt.answer(3), Some("q 4"));
        assert_eq!(prompt.answer(4), None);
    }

    #[test]
    fn empty_list_keeps_name() {
        let mut store = PromptStore::new();
        let list = store.push_list("Empty", Vec::<PromptDraft>::new());
        assert!(list.is_empty());
        assert_eq!(store.lists()[0].name(), "Empty");
    }
}
