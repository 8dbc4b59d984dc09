//! State of the search field and its suggestion dropdown.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use parking_lot::Mutex;
use voyageur_core::search::SequenceCounter;

use crate::{
    json::{MapBbox, PlaceDetails, Suggestion, SuggestionKind},
    Result, VoyageurApi,
};

/// Quiet period after the last keystroke before the sources are queried.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggestions(&self, text: &str, bbox: Option<&MapBbox>) -> Result<Vec<Suggestion>>;

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails>;
}

#[async_trait]
impl SuggestionSource for VoyageurApi {
    async fn suggestions(&self, text: &str, bbox: Option<&MapBbox>) -> Result<Vec<Suggestion>> {
        self.search(text, bbox).await
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        VoyageurApi::place_details(self, place_id).await
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dropdown {
    pub text: String,
    pub suggestions: Vec<Suggestion>,
    pub highlighted: Option<usize>,
    pub open: bool,
}

/// What picking a suggestion leads to.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    SearchText(String),
    FilterByTag(String),
    Place {
        /// Set if the place is a stored location.
        location_id: Option<String>,
        details: PlaceDetails,
    },
}

pub struct SearchSession<S> {
    source: S,
    sequence: SequenceCounter,
    dropdown: Mutex<Dropdown>,
    bbox: Mutex<Option<MapBbox>>,
    suppress_reopen: AtomicBool,
}

impl<S> SearchSession<S>
where
    S: SuggestionSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            sequence: SequenceCounter::default(),
            dropdown: Mutex::new(Dropdown::default()),
            bbox: Mutex::new(None),
            suppress_reopen: AtomicBool::new(false),
        }
    }

    /// The visible map area; `None` disables bounds filtering.
    pub fn set_bbox(&self, bbox: Option<MapBbox>) {
        *self.bbox.lock() = bbox;
    }

    pub fn dropdown(&self) -> Dropdown {
        self.dropdown.lock().clone()
    }

    /// Handles a keystroke.
    ///
    /// Returns `true` if the suggestions of this input have been applied,
    /// `false` if the input was superseded before or while fetching.
    pub async fn input(&self, text: &str) -> bool {
        let ticket = self.sequence.issue();
        // Typing again ends the selection that closed the dropdown.
        self.suppress_reopen.store(false, Ordering::SeqCst);
        {
            let mut dropdown = self.dropdown.lock();
            dropdown.text = text.to_owned();
            if text.trim().is_empty() {
                *dropdown = Dropdown::default();
                return false;
            }
        }
        tokio::time::sleep(DEBOUNCE).await;
        if !self.sequence.is_latest(ticket) {
            return false;
        }
        let bbox = *self.bbox.lock();
        let result = self.source.suggestions(text, bbox.as_ref()).await;
        if !self.sequence.is_latest(ticket) {
            log::debug!("Discarding stale suggestions for '{text}'");
            return false;
        }
        let suggestions = result.unwrap_or_else(|err| {
            log::warn!("Failed to load suggestions for '{text}': {err}");
            vec![]
        });
        let mut dropdown = self.dropdown.lock();
        dropdown.open = !suggestions.is_empty();
        dropdown.suggestions = suggestions;
        dropdown.highlighted = None;
        true
    }

    pub fn focus(&self) {
        if self.suppress_reopen.swap(false, Ordering::SeqCst) {
            return;
        }
        let mut dropdown = self.dropdown.lock();
        dropdown.open = !dropdown.suggestions.is_empty();
    }

    pub fn blur(&self) {
        self.dropdown.lock().open = false;
    }

    pub fn highlight_next(&self) {
        let mut dropdown = self.dropdown.lock();
        let len = dropdown.suggestions.len();
        if len == 0 {
            return;
        }
        dropdown.highlighted = Some(match dropdown.highlighted {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn highlight_previous(&self) {
        let mut dropdown = self.dropdown.lock();
        let len = dropdown.suggestions.len();
        if len == 0 {
            return;
        }
        dropdown.highlighted = Some(match dropdown.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    /// Picks the highlighted suggestion or searches for the raw text.
    pub async fn submit(&self) -> Option<Selection> {
        let (highlighted, text) = {
            let dropdown = self.dropdown.lock();
            (dropdown.highlighted, dropdown.text.trim().to_owned())
        };
        match highlighted {
            Some(index) => self.select(index).await,
            None if text.is_empty() => None,
            None => {
                self.dismiss();
                Some(Selection::SearchText(text))
            }
        }
    }

    pub async fn select(&self, index: usize) -> Option<Selection> {
        let suggestion = self
            .dropdown
            .lock()
            .suggestions
            .iter()
            .find(|s| s.index == index)
            .cloned()?;
        self.dismiss();
        Some(self.resolve(suggestion).await)
    }

    /// Clears all suggestion state and keeps the next refocus
    /// from reopening the dropdown.
    fn dismiss(&self) {
        self.sequence.invalidate();
        *self.dropdown.lock() = Dropdown::default();
        self.suppress_reopen.store(true, Ordering::SeqCst);
    }

    async fn resolve(&self, suggestion: Suggestion) -> Selection {
        let Suggestion {
            label,
            secondary_label,
            kind,
            ..
        } = suggestion;
        let (location_id, local) = match kind {
            SuggestionKind::SearchAction { query } => return Selection::SearchText(query),
            SuggestionKind::Tag { tag } => return Selection::FilterByTag(tag),
            SuggestionKind::Location {
                id,
                lat,
                lng,
                address,
                place_id,
                ..
            } => {
                let local = PlaceDetails {
                    place_id,
                    name: label,
                    lat: Some(lat),
                    lng: Some(lng),
                    address,
                    ..Default::default()
                };
                (Some(id), local)
            }
            SuggestionKind::TextSearch { place } => (None, place),
            SuggestionKind::Prediction { place_id, .. } => {
                let local = PlaceDetails {
                    place_id: Some(place_id),
                    name: label,
                    address: secondary_label,
                    ..Default::default()
                };
                (None, local)
            }
        };
        let details = self.canonical_details(local).await;
        Selection::Place {
            location_id,
            details,
        }
    }

    async fn canonical_details(&self, local: PlaceDetails) -> PlaceDetails {
        let Some(place_id) = local
            .place_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToOwned::to_owned)
        else {
            return local;
        };
        match self.source.place_details(&place_id).await {
            Ok(mut details) => {
                if details.place_id.is_none() {
                    details.place_id = Some(place_id);
                }
                details
            }
            Err(err) => {
                log::warn!("Failed to resolve place {place_id}: {err}");
                local
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::Error;

    fn suggestion(index: usize, label: &str, kind: SuggestionKind) -> Suggestion {
        Suggestion {
            index,
            label: label.into(),
            secondary_label: None,
            kind,
        }
    }

    /// Answers every query after a delay that depends on the query.
    #[derive(Default)]
    struct DummySource {
        queries: Mutex<Vec<String>>,
        slow: Option<&'static str>,
        details: Vec<PlaceDetails>,
        omit_place_id: bool,
    }

    impl DummySource {
        fn queries(&self) -> Vec<String> {
            self.queries.lock().clone()
        }
    }

    #[async_trait]
    impl SuggestionSource for Arc<DummySource> {
        async fn suggestions(
            &self,
            text: &str,
            _: Option<&MapBbox>,
        ) -> Result<Vec<Suggestion>> {
            self.queries.lock().push(text.to_owned());
            let delay = if self.slow == Some(text) { 1_000 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(vec![
                suggestion(
                    0,
                    text,
                    SuggestionKind::SearchAction { query: text.into() },
                ),
                suggestion(
                    1,
                    "Tacos El Gordo",
                    SuggestionKind::Location {
                        id: "gordo".into(),
                        lat: 32.7157,
                        lng: -117.1611,
                        address: None,
                        place_id: Some("ChIJ-gordo".into()),
                        editorial_score: Some(9.2),
                    },
                ),
                suggestion(2, "#tacos", SuggestionKind::Tag { tag: "tacos".into() }),
                suggestion(
                    3,
                    "Las Cuatro Milpas",
                    SuggestionKind::Prediction {
                        place_id: "ChIJ-milpas".into(),
                        description: "Las Cuatro Milpas, San Diego".into(),
                    },
                ),
            ])
        }

        async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
            self.details
                .iter()
                .find(|d| d.place_id.as_deref() == Some(place_id))
                .cloned()
                .map(|mut d| {
                    if self.omit_place_id {
                        d.place_id = None;
                    }
                    d
                })
                .ok_or_else(|| {
                    Error::Api(crate::json::Error {
                        http_status: 404,
                        message: "not found".into(),
                    })
                })
        }
    }

    fn session(source: DummySource) -> (Arc<SearchSession<Arc<DummySource>>>, Arc<DummySource>) {
        let source = Arc::new(source);
        (Arc::new(SearchSession::new(Arc::clone(&source))), source)
    }

    fn spawn_input(
        session: &Arc<SearchSession<Arc<DummySource>>>,
        text: &'static str,
    ) -> tokio::task::JoinHandle<bool> {
        let session = Arc::clone(session);
        tokio::spawn(async move { session.input(text).await })
    }

    #[tokio::test(start_paused = true)]
    async fn keystrokes_are_debounced() {
        let (session, source) = session(DummySource::default());
        let first = spawn_input(&session, "ta");
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = spawn_input(&session, "tac");
        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());
        assert_eq!(source.queries(), vec!["tac"]);
        let dropdown = session.dropdown();
        assert!(dropdown.open);
        assert_eq!(dropdown.text, "tac");
        assert_eq!(dropdown.suggestions.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_responses_are_discarded() {
        let (session, source) = session(DummySource {
            slow: Some("slow"),
            ..Default::default()
        });
        let slow = spawn_input(&session, "slow");
        // let the slow request leave the debounce window
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(100)).await;
        let fast = spawn_input(&session, "fast");
        assert!(fast.await.unwrap());
        assert!(!slow.await.unwrap());
        assert_eq!(source.queries(), vec!["slow", "fast"]);
        assert_eq!(session.dropdown().suggestions[0].label, "fast");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_input_clears_everything() {
        let (session, source) = session(DummySource::default());
        assert!(spawn_input(&session, "tacos").await.unwrap());
        assert!(!session.input("  ").await);
        assert_eq!(session.dropdown(), Dropdown::default());
        assert_eq!(source.queries(), vec!["tacos"]);
    }

    #[tokio::test(start_paused = true)]
    async fn keyboard_navigation_wraps() {
        let (session, _) = session(DummySource::default());
        assert!(session.input("tacos").await);
        session.highlight_previous();
        assert_eq!(session.dropdown().highlighted, Some(3));
        session.highlight_next();
        assert_eq!(session.dropdown().highlighted, Some(0));
        session.highlight_next();
        assert_eq!(session.dropdown().highlighted, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn select_stored_location_with_canonical_details() {
        let (session, _) = session(DummySource {
            details: vec![PlaceDetails {
                place_id: Some("ChIJ-gordo".into()),
                name: "Tacos El Gordo".into(),
                address: Some("Av. Constitución, Tijuana".into()),
                ..Default::default()
            }],
            ..Default::default()
        });
        assert!(session.input("tacos").await);
        session.highlight_next();
        session.highlight_next();
        let Some(Selection::Place {
            location_id,
            details,
        }) = session.submit().await
        else {
            panic!("expected a place");
        };
        assert_eq!(location_id.as_deref(), Some("gordo"));
        assert_eq!(details.address.as_deref(), Some("Av. Constitución, Tijuana"));
        assert_eq!(session.dropdown(), Dropdown::default());
    }

    #[tokio::test(start_paused = true)]
    async fn canonical_details_keep_the_requested_place_id() {
        let (session, _) = session(DummySource {
            details: vec![PlaceDetails {
                place_id: Some("ChIJ-milpas".into()),
                name: "Las Cuatro Milpas".into(),
                address: Some("1857 Logan Ave, San Diego".into()),
                ..Default::default()
            }],
            omit_place_id: true,
            ..Default::default()
        });
        assert!(session.input("tacos").await);
        let Some(Selection::Place { details, .. }) = session.select(3).await else {
            panic!("expected a place");
        };
        assert_eq!(details.address.as_deref(), Some("1857 Logan Ave, San Diego"));
        assert_eq!(details.place_id.as_deref(), Some("ChIJ-milpas"));
    }

    #[tokio::test(start_paused = true)]
    async fn fall_back_to_local_fields() {
        let (session, _) = session(DummySource::default());
        assert!(session.input("tacos").await);
        let Some(Selection::Place { details, .. }) = session.select(3).await else {
            panic!("expected a place");
        };
        assert_eq!(details.place_id.as_deref(), Some("ChIJ-milpas"));
        assert_eq!(details.name, "Las Cuatro Milpas");

        assert!(session.input("tacos").await);
        assert_eq!(
            session.select(2).await,
            Some(Selection::FilterByTag("tacos".into()))
        );
        assert_eq!(session.select(2).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_without_highlight_searches_the_text() {
        let (session, _) = session(DummySource::default());
        assert!(session.input("ramen ").await);
        assert_eq!(
            session.submit().await,
            Some(Selection::SearchText("ramen".into()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn refocus_after_selection_stays_closed() {
        let (session, _) = session(DummySource::default());
        assert!(session.input("tacos").await);
        session.blur();
        assert!(!session.dropdown().open);
        session.focus();
        assert!(session.dropdown().open);

        session.select(0).await;
        session.focus();
        assert!(!session.dropdown().open);

        assert!(session.input("ramen").await);
        session.blur();
        session.focus();
        assert!(session.dropdown().open);
    }

    #[tokio::test(start_paused = true)]
    async fn typing_after_selection_allows_reopening() {
        let (session, _) = session(DummySource::default());
        assert!(session.input("tacos").await);
        session.select(0).await;
        assert!(session.input("ramen").await);
        session.blur();
        assert!(!session.dropdown().open);
        session.focus();
        assert!(session.dropdown().open);
        assert_eq!(session.dropdown().suggestions[0].label, "ramen");
    }
}
